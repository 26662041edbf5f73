//! Reading .tex sources and TeX comment handling
//!
//! Both the flattener and the equation extractor work on comment-stripped
//! text: a line whose first non-whitespace character is `%` is dropped
//! entirely, and content after an unescaped `%` on any other line is cut.
//! An escaped `\%` is kept.

use std::fs;
use std::path::Path;

use crate::error::{self, Result};

/// Read a .tex file into a string
pub fn read_tex(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| error::file_read_failed(path.display().to_string(), e.to_string()))
}

/// Strip TeX comments from a buffer, line by line
pub fn strip_comments(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut first = true;
    for line in text.lines() {
        if line.trim_start().starts_with('%') {
            // Comment-only lines contribute nothing, not even a blank line
            continue;
        }
        if !first {
            out.push('\n');
        }
        first = false;
        out.push_str(cut_at_comment(line));
    }
    if text.ends_with('\n') && !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Return the part of a line before the first unescaped `%`
fn cut_at_comment(line: &str) -> &str {
    let bytes = line.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 2, // skips \% and any other escape
            b'%' => return &line[..i],
            _ => i += 1,
        }
    }
    line
}
