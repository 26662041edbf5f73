//! Integration tests for the combine command

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn tex2svg_cmd() -> Command {
    Command::cargo_bin("tex2svg").expect("binary should build")
}

#[test]
fn test_combine_explicit_main_file() {
    let project = common::TestProject::new();
    project.write_file("part1.tex", "included content\n");
    project.write_file(
        "main.tex",
        "\\documentclass{article}\n\\begin{document}\n\\input{part1}\n\\end{document}\n",
    );

    tex2svg_cmd()
        .args(["combine", "main.tex"])
        .current_dir(&project.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("combined_output.tex"));

    let combined = project.read_file("combined_output.tex");
    assert!(combined.contains("included content"));
    assert!(!combined.contains("\\input{part1}"));
}

#[test]
fn test_combine_appends_tex_extension() {
    let project = common::TestProject::new();
    project.write_file("main.tex", "\\begin{document}x\\end{document}\n");

    tex2svg_cmd()
        .args(["combine", "main"])
        .current_dir(&project.path)
        .assert()
        .success();
    assert!(project.file_exists("combined_output.tex"));
}

#[test]
fn test_combine_auto_detects_main() {
    let project = common::TestProject::new();
    project.write_file("chapter.tex", "chapter body\n");
    project.write_file(
        "thesis.tex",
        "\\documentclass{book}\n\\begin{document}\n\\input{chapter}\n\\end{document}\n",
    );

    tex2svg_cmd()
        .arg("combine")
        .current_dir(&project.path)
        .assert()
        .success();

    let combined = project.read_file("combined_output.tex");
    assert!(combined.contains("chapter body"));
}

#[test]
fn test_combine_into_output_dir() {
    let project = common::TestProject::new();
    project.write_file("main.tex", "\\begin{document}x\\end{document}\n");

    tex2svg_cmd()
        .args(["combine", "main.tex", "build"])
        .current_dir(&project.path)
        .assert()
        .success();
    assert!(project.file_exists("build/combined_output.tex"));
}

#[test]
fn test_combine_cycle_warns_and_completes() {
    let project = common::TestProject::new();
    project.write_file("main.tex", "A\\input{part1}\n");
    project.write_file("part1.tex", "B\\input{main}\n");

    tex2svg_cmd()
        .args(["combine", "main.tex"])
        .current_dir(&project.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("circular or duplicate"));

    let combined = project.read_file("combined_output.tex");
    assert!(combined.contains('A'));
    assert!(combined.contains('B'));
}

#[test]
fn test_combine_missing_include_warns() {
    let project = common::TestProject::new();
    project.write_file("main.tex", "\\input{nowhere}\n");

    tex2svg_cmd()
        .args(["combine", "main.tex"])
        .current_dir(&project.path)
        .assert()
        .success()
        .stderr(predicate::str::contains("File not found for include"));
}

#[test]
fn test_combine_commented_include_ignored() {
    let project = common::TestProject::new();
    project.write_file("secret.tex", "should not appear\n");
    project.write_file("main.tex", "% \\input{secret}\nvisible\n");

    tex2svg_cmd()
        .args(["combine", "main.tex"])
        .current_dir(&project.path)
        .assert()
        .success();

    let combined = project.read_file("combined_output.tex");
    assert!(!combined.contains("should not appear"));
    assert!(combined.contains("visible"));
}

#[test]
fn test_combine_no_tex_files() {
    let project = common::TestProject::new();
    tex2svg_cmd()
        .arg("combine")
        .current_dir(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .tex files found"));
}

#[test]
fn test_combine_no_main_file() {
    let project = common::TestProject::new();
    project.write_file("fragment.tex", "no document env\n");
    tex2svg_cmd()
        .arg("combine")
        .current_dir(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No main .tex file found"));
}

#[test]
fn test_combine_missing_explicit_main() {
    let project = common::TestProject::new();
    tex2svg_cmd()
        .args(["combine", "ghost.tex"])
        .current_dir(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}
