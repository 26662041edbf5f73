//! Preamble harvesting for the standalone equation template
//!
//! Equations frequently depend on macros defined in the source document's
//! preamble. Everything before `\begin{document}` is mined for `\usepackage`
//! lines, macro definitions and `\DeclareMathOperator` lines, and the result
//! is injected into every generated standalone document.

use once_cell::sync::Lazy;
use regex::Regex;

#[allow(clippy::expect_used)]
static USEPACKAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\\usepackage[^\n]*").expect("valid regex"));

#[allow(clippy::expect_used)]
static MATH_OPERATOR_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*\\DeclareMathOperator[^\n]*").expect("valid regex"));

/// Macro-defining commands whose full definition is carried over
const DEFINITION_COMMANDS: &[&str] = &[
    "\\newcommand",
    "\\renewcommand",
    "\\providecommand",
    "\\let",
];

/// Return the preamble part of a comment-stripped buffer (everything before
/// `\begin{document}`), or `""` when there is none
pub fn preamble_of(text: &str) -> &str {
    match text.find("\\begin{document}") {
        Some(at) => &text[..at],
        None => "",
    }
}

/// Collect the preamble commands worth carrying into a standalone document
pub fn harvest(preamble: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    for m in USEPACKAGE_RE.find_iter(preamble) {
        lines.push(m.as_str().trim().to_string());
    }

    for command in DEFINITION_COMMANDS {
        let mut from = 0;
        while let Some(found) = preamble[from..].find(command) {
            let start = from + found;
            match definition_at(preamble, start, command) {
                Some(def) => {
                    lines.push(def.trim_end().to_string());
                    from = start + def.len();
                }
                None => from = start + command.len(),
            }
        }
    }

    for m in MATH_OPERATOR_RE.find_iter(preamble) {
        lines.push(m.as_str().trim().to_string());
    }

    lines.join("\n")
}

/// The full definition starting at `start`: the command name, an optional
/// star, and every immediately following `[...]` or brace-balanced `{...}`
/// group. `\let` takes no braces and runs to the end of its line.
fn definition_at<'a>(text: &'a str, start: usize, command: &str) -> Option<&'a str> {
    let bytes = text.as_bytes();
    let mut i = start + command.len();

    if command == "\\let" {
        // \let\alias\target has no argument groups
        let end = text[i..].find('\n').map_or(text.len(), |n| i + n);
        return Some(&text[start..end]);
    }

    if bytes.get(i) == Some(&b'*') {
        i += 1;
    }

    let mut groups = 0;
    loop {
        match bytes.get(i) {
            Some(b'{') => {
                i = brace_group_end(text, i)? + 1;
                groups += 1;
            }
            Some(b'[') => {
                i = i + text[i..].find(']')? + 1;
            }
            _ => break,
        }
    }

    if groups == 0 {
        return None;
    }
    Some(&text[start..i])
}

/// Index of the `}` matching the `{` at `open`, skipping escaped braces
fn brace_group_end(text: &str, open: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let mut depth = 0usize;
    let mut i = open;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}
