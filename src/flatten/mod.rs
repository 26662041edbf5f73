//! Flattening of multi-file LaTeX projects
//!
//! Every `\input{path}` / `\include{path}` directive is replaced in place by
//! the referenced file's (recursively flattened) contents. Comment lines are
//! excluded before include scanning and never reach the output. A visited
//! set keeps circular or duplicate includes from recursing forever; such
//! directives are dropped with a warning rather than silently.

pub mod detect;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::document::{read_tex, strip_comments};
use crate::error::Result;

#[allow(clippy::expect_used)]
pub(crate) static INCLUDE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\\(?:input|include)\{([^}]+)\}").expect("valid regex"));

/// Result of flattening one root file
pub struct Flattened {
    /// The combined document text
    pub text: String,
    /// Files inlined along the way, in inclusion order (root excluded)
    pub inlined: Vec<PathBuf>,
    /// Human-readable warnings (cycles, duplicates, missing targets)
    pub warnings: Vec<String>,
}

/// Flatten `main` and every file it transitively includes into one buffer
pub fn flatten(main: &Path) -> Result<Flattened> {
    let mut flattened = Flattened {
        text: String::new(),
        inlined: Vec::new(),
        warnings: Vec::new(),
    };
    let mut visited = HashSet::new();
    visited.insert(identity(main));

    flattened.text = expand(main, &mut visited, &mut flattened.inlined, &mut flattened.warnings)?;
    Ok(flattened)
}

/// Resolve an include target relative to the file containing the directive,
/// appending the `.tex` extension when missing
pub fn resolve_include(parent: &Path, name: &str) -> PathBuf {
    let mut name = name.trim().to_string();
    if !name.ends_with(".tex") {
        name.push_str(".tex");
    }
    let path = Path::new(&name);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        parent.parent().unwrap_or_else(|| Path::new(".")).join(path)
    }
}

/// Canonical form used for the visited set, so `./a.tex` and `a.tex` count
/// as the same file
fn identity(path: &Path) -> PathBuf {
    dunce::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

fn expand(
    path: &Path,
    visited: &mut HashSet<PathBuf>,
    inlined: &mut Vec<PathBuf>,
    warnings: &mut Vec<String>,
) -> Result<String> {
    let content = strip_comments(&read_tex(path)?);

    let mut out = String::with_capacity(content.len());
    let mut last = 0;
    for caps in INCLUDE_RE.captures_iter(&content) {
        let Some(whole) = caps.get(0) else { continue };
        out.push_str(&content[last..whole.start()]);
        last = whole.end();

        let target = resolve_include(path, &caps[1]);
        if !target.exists() {
            warnings.push(format!(
                "File not found for include: {}",
                target.display()
            ));
            // Keep the directive so the combined file still compiles the
            // same way the original would have
            out.push_str(whole.as_str());
            continue;
        }

        let id = identity(&target);
        if !visited.insert(id) {
            warnings.push(format!(
                "Skipping already included file (circular or duplicate include): {}",
                target.display()
            ));
            continue;
        }

        match expand(&target, visited, inlined, warnings) {
            Ok(body) => {
                inlined.push(target);
                out.push_str(&body);
            }
            Err(e) => warnings.push(format!("Error reading {}: {}", target.display(), e)),
        }
    }
    out.push_str(&content[last..]);
    Ok(out)
}
