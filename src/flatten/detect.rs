//! Main-file auto-detection
//!
//! When `combine` is run without an explicit main file, the `.tex` files of
//! the working directory are ranked: a file qualifies when it contains
//! `\begin{document}` (or, failing that, `\documentclass`) and is not itself
//! included by a sibling; among qualifying files the largest wins.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::document::{read_tex, strip_comments};
use crate::error::Result;
use crate::flatten::{INCLUDE_RE, resolve_include};

/// List the .tex files directly inside `dir`, sorted by name for stable
/// batch order
pub fn tex_files_in(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "tex"))
        .collect();
    files.sort();
    Ok(files)
}

/// Pick the main file among `files`, or None when no candidate qualifies
pub fn find_main_file(files: &[PathBuf]) -> Option<PathBuf> {
    let included = included_files(files);

    let mut with_document = Vec::new();
    let mut with_class = Vec::new();

    for file in files {
        let Ok(raw) = read_tex(file) else { continue };
        let content = strip_comments(&raw);

        if included.contains(&identity(file)) {
            continue;
        }

        if content.contains("\\begin{document}") {
            with_document.push(file.clone());
        } else if content.contains("\\documentclass") {
            with_class.push(file.clone());
        }
    }

    largest(&with_document).or_else(|| largest(&with_class))
}

/// Every file referenced by an `\input`/`\include` of any file in `files`
fn included_files(files: &[PathBuf]) -> HashSet<PathBuf> {
    let mut included = HashSet::new();
    for file in files {
        let Ok(raw) = read_tex(file) else { continue };
        let content = strip_comments(&raw);
        for caps in INCLUDE_RE.captures_iter(&content) {
            included.insert(identity(&resolve_include(file, &caps[1])));
        }
    }
    included
}

fn identity(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn largest(candidates: &[PathBuf]) -> Option<PathBuf> {
    candidates
        .iter()
        .max_by_key(|p| fs::metadata(p).map(|m| m.len()).unwrap_or(0))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_tex_files_in_ignores_other_extensions() {
        let dir = TempDir::new().unwrap();
        write(&dir, "a.tex", "");
        write(&dir, "b.tex", "");
        write(&dir, "notes.txt", "");
        let files = tex_files_in(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, vec!["a.tex", "b.tex"]);
    }

    #[test]
    fn test_find_main_prefers_begin_document() {
        let dir = TempDir::new().unwrap();
        write(&dir, "style.tex", "\\documentclass{article}");
        let main = write(
            &dir,
            "main.tex",
            "\\documentclass{article}\n\\begin{document}hi\\end{document}",
        );
        let files = tex_files_in(dir.path()).unwrap();
        assert_eq!(find_main_file(&files), Some(main));
    }

    #[test]
    fn test_find_main_skips_included_files() {
        let dir = TempDir::new().unwrap();
        // chapter.tex has \begin{document} too but is included by main.tex
        write(
            &dir,
            "chapter.tex",
            "\\begin{document}chapter body text\\end{document}",
        );
        let main = write(
            &dir,
            "main.tex",
            "\\begin{document}\\input{chapter}\\end{document}",
        );
        let files = tex_files_in(dir.path()).unwrap();
        assert_eq!(find_main_file(&files), Some(main));
    }

    #[test]
    fn test_find_main_falls_back_to_documentclass() {
        let dir = TempDir::new().unwrap();
        let only = write(&dir, "partial.tex", "\\documentclass{article}\nno body");
        let files = tex_files_in(dir.path()).unwrap();
        assert_eq!(find_main_file(&files), Some(only));
    }

    #[test]
    fn test_find_main_none_qualifies() {
        let dir = TempDir::new().unwrap();
        write(&dir, "fragment.tex", "just text");
        let files = tex_files_in(dir.path()).unwrap();
        assert_eq!(find_main_file(&files), None);
    }

    #[test]
    fn test_find_main_commented_begin_document_ignored() {
        let dir = TempDir::new().unwrap();
        write(&dir, "fake.tex", "% \\begin{document}\n");
        let files = tex_files_in(dir.path()).unwrap();
        assert_eq!(find_main_file(&files), None);
    }
}
