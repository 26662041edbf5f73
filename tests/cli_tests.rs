//! CLI integration tests using the REAL tex2svg binary

mod common;

use assert_cmd::Command;
use predicates::prelude::*;

fn tex2svg_cmd() -> Command {
    Command::cargo_bin("tex2svg").expect("binary should build")
}

#[test]
fn test_help_output() {
    tex2svg_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("render"))
        .stdout(predicate::str::contains("combine"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_output() {
    tex2svg_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tex2svg"))
        .stdout(predicate::str::contains("Build info"));
}

#[test]
fn test_completions_bash() {
    tex2svg_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tex2svg"));
}

#[test]
fn test_render_missing_input_file() {
    tex2svg_cmd()
        .args(["render", "/no/such/file.tex"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_render_empty_directory() {
    let project = common::TestProject::new();
    tex2svg_cmd()
        .arg("render")
        .current_dir(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No .tex files found"));
}

#[test]
fn test_render_unreadable_tools_config() {
    let project = common::TestProject::new();
    project.write_file("paper.tex", "$x$");
    tex2svg_cmd()
        .args(["render", "paper.tex", "--tools", "/no/such/tools.yaml"])
        .current_dir(&project.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("tools configuration"));
}

#[test]
fn test_render_no_tools_found() {
    let project = common::TestProject::new();
    project.write_file("paper.tex", "$x+y$");
    // A tools file with no usable commands or fallback paths forces the
    // fatal configuration error regardless of what is installed
    project.write_file(
        "tools.yaml",
        "latex_commands: [tex2svg-no-such-binary-xyz]\n\
         inkscape_commands: [tex2svg-no-such-binary-xyz]\n\
         fallbacks: {}\n",
    );
    tex2svg_cmd()
        .args(["render", "paper.tex", "--tools", "tools.yaml"])
        .current_dir(&project.path)
        .env_remove("TEX2SVG_LATEX")
        .env_remove("INKSCAPE")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No LaTeX compiler found"));
}

#[test]
#[ignore = "Requires pdflatex and Inkscape installed"]
fn test_render_end_to_end() {
    let project = common::TestProject::new();
    project.write_file(
        "paper.tex",
        "\\documentclass{article}\n\\begin{document}\n\
         Text $x+y=z$ more text. \\begin{equation} a^2+b^2=c^2 \\end{equation}\n\
         \\end{document}\n",
    );
    tex2svg_cmd()
        .args(["render", "paper.tex"])
        .current_dir(&project.path)
        .assert()
        .success();
    assert!(project.file_exists("paper/eq_0.svg"));
    assert!(project.file_exists("paper/eq_1.svg"));
}
