//! Equation extraction from LaTeX text
//!
//! [`Equations`] walks a comment-stripped buffer top-to-bottom and yields one
//! [`Equation`] per math region. Scanning never looks inside an already
//! matched region, so a `$` or `\[` inside a matched environment can not open
//! a second equation. Recognized forms, in priority order at each position:
//!
//! 1. named math environments (`\begin{equation}` and friends) and the
//!    `algorithm`/`algorithm*` float environments, matched with
//!    balanced-depth counting so nested same-name environments close at the
//!    right `\end`
//! 2. display math `\[...\]` and `$$...$$`
//! 3. inline math `$...$`
//!
//! Empty or whitespace-only regions are skipped and consume no index.
//! Equations and algorithms carry independent index sequences, matching the
//! `eq_<n>` / `alg_<n>` output namespaces. An opened region with no closing
//! delimiter before end of input terminates the scan without yielding it.

pub mod preamble;

use once_cell::sync::Lazy;
use regex::Regex;

/// Math environments whose bodies are extracted as display equations.
/// A `\begin{...}` naming anything else is treated as ordinary text.
const MATH_ENVIRONMENTS: &[&str] = &[
    "equation",
    "equation*",
    "align",
    "align*",
    "alignat",
    "alignat*",
    "gather",
    "gather*",
    "multline",
    "multline*",
    "flalign",
    "flalign*",
    "eqnarray",
    "eqnarray*",
    "displaymath",
    "math",
];

/// Pseudocode float environments, rendered through the same pipeline with
/// the algorithm packages added to the standalone preamble
const ALGORITHM_ENVIRONMENTS: &[&str] = &["algorithm", "algorithm*"];

#[allow(clippy::expect_used)]
static BEGIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\\begin\{([A-Za-z]+\*?)\}").expect("valid regex"));

/// The delimiter form a piece of math was written in
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathKind {
    /// `$...$`
    Inline,
    /// `$$...$$`
    DollarDisplay,
    /// `\[...\]`
    BracketDisplay,
    /// `\begin{name}...\end{name}` math environment
    Environment(String),
    /// `\begin{algorithm}...\end{algorithm}` (or starred) pseudocode float
    Algorithm(String),
}

impl MathKind {
    /// Short label used in messages ("inline", "display", or the
    /// environment name)
    pub fn label(&self) -> &str {
        match self {
            MathKind::Inline => "inline",
            MathKind::DollarDisplay | MathKind::BracketDisplay => "display",
            MathKind::Environment(name) | MathKind::Algorithm(name) => name,
        }
    }

    pub fn is_algorithm(&self) -> bool {
        matches!(self, MathKind::Algorithm(_))
    }
}

/// One extracted equation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Equation {
    /// Inner content with the delimiters stripped
    pub source_text: String,
    /// Delimiter form it was found in
    pub kind: MathKind,
    /// 0-based position of discovery within the document; unique and
    /// monotonically increasing, stable across runs. Equations and
    /// algorithms count separately.
    pub index: usize,
}

impl Equation {
    /// Stem of the generated files: `eq_<index>` for math, `alg_<index>`
    /// for algorithm environments
    pub fn output_stem(&self) -> String {
        if self.kind.is_algorithm() {
            format!("alg_{}", self.index)
        } else {
            format!("eq_{}", self.index)
        }
    }
}

/// Lazy iterator over the equations of a comment-stripped buffer
pub struct Equations<'a> {
    text: &'a str,
    pos: usize,
    next_eq_index: usize,
    next_alg_index: usize,
}

impl<'a> Equations<'a> {
    /// Start a scan over `text`. The buffer must already be comment-stripped
    /// (see [`crate::document::strip_comments`])
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            next_eq_index: 0,
            next_alg_index: 0,
        }
    }

    /// Classify the position `at`, which holds a `\` or `$` byte
    fn match_at(&self, at: usize) -> Scan<'a> {
        let rest = &self.text[at..];

        if let Some(caps) = BEGIN_RE.captures(rest) {
            let name = &caps[1];
            let body_start = at + caps[0].len();
            let kind = if MATH_ENVIRONMENTS.contains(&name) {
                MathKind::Environment(name.to_string())
            } else if ALGORITHM_ENVIRONMENTS.contains(&name) {
                MathKind::Algorithm(name.to_string())
            } else {
                // Not an extracted environment: consume the \begin token,
                // keep scanning inside its body
                return Scan::Region(MatchResult {
                    content: "",
                    kind: None,
                    resume: body_start,
                });
            };
            let Some(body_end) = find_balanced_end(self.text, body_start, name) else {
                return Scan::Unterminated;
            };
            let resume = body_end + format!("\\end{{{}}}", name).len();
            return Scan::Region(MatchResult {
                content: &self.text[body_start..body_end],
                kind: Some(kind),
                resume,
            });
        }

        if rest.starts_with("\\[") {
            let body_start = at + 2;
            return match self.text[body_start..].find("\\]") {
                Some(end) => Scan::Region(MatchResult {
                    content: &self.text[body_start..body_start + end],
                    kind: Some(MathKind::BracketDisplay),
                    resume: body_start + end + 2,
                }),
                None => Scan::Unterminated,
            };
        }

        if rest.starts_with("$$") {
            let body_start = at + 2;
            return match find_unescaped(self.text, body_start, "$$") {
                Some(end) => Scan::Region(MatchResult {
                    content: &self.text[body_start..end],
                    kind: Some(MathKind::DollarDisplay),
                    resume: end + 2,
                }),
                None => Scan::Unterminated,
            };
        }

        if rest.starts_with('$') {
            let body_start = at + 1;
            return match find_unescaped(self.text, body_start, "$") {
                Some(end) => Scan::Region(MatchResult {
                    content: &self.text[body_start..end],
                    kind: Some(MathKind::Inline),
                    resume: end + 1,
                }),
                None => Scan::Unterminated,
            };
        }

        Scan::NotMath
    }

    fn assign_index(&mut self, kind: &MathKind) -> usize {
        let counter = if kind.is_algorithm() {
            &mut self.next_alg_index
        } else {
            &mut self.next_eq_index
        };
        let index = *counter;
        *counter += 1;
        index
    }
}

enum Scan<'a> {
    /// A matched region, or a consumed non-math token (`kind: None`)
    Region(MatchResult<'a>),
    /// An opened region with no closing delimiter; ends the scan
    Unterminated,
    /// A backslash escape like `\$` or `\\`
    NotMath,
}

struct MatchResult<'a> {
    content: &'a str,
    /// None for a consumed non-math token
    kind: Option<MathKind>,
    resume: usize,
}

impl Iterator for Equations<'_> {
    type Item = Equation;

    fn next(&mut self) -> Option<Equation> {
        let bytes = self.text.as_bytes();
        while self.pos < bytes.len() {
            match bytes[self.pos] {
                b'\\' | b'$' => match self.match_at(self.pos) {
                    Scan::Region(m) => {
                        self.pos = m.resume;
                        if let Some(kind) = m.kind {
                            if !m.content.trim().is_empty() {
                                let index = self.assign_index(&kind);
                                return Some(Equation {
                                    source_text: m.content.to_string(),
                                    kind,
                                    index,
                                });
                            }
                        }
                    }
                    // Nothing after an unterminated opener can be a full
                    // region
                    Scan::Unterminated => return None,
                    // Escapes are stepped over so they can not open a region
                    Scan::NotMath => self.pos += 2,
                },
                _ => self.pos += 1,
            }
        }
        None
    }
}

/// Find the byte offset of the `\end{name}` matching the `\begin{name}`
/// whose body starts at `from`, counting nested same-name environments
fn find_balanced_end(text: &str, from: usize, name: &str) -> Option<usize> {
    let begin_tok = format!("\\begin{{{}}}", name);
    let end_tok = format!("\\end{{{}}}", name);
    let mut depth = 1usize;
    let mut pos = from;
    loop {
        let rest = &text[pos..];
        let next_end = rest.find(&end_tok)?;
        match rest[..next_end].find(&begin_tok) {
            Some(next_begin) if next_begin < next_end => {
                depth += 1;
                pos += next_begin + begin_tok.len();
            }
            _ => {
                depth -= 1;
                if depth == 0 {
                    return Some(pos + next_end);
                }
                pos += next_end + end_tok.len();
            }
        }
    }
}

/// Find the next occurrence of `needle` at or after `from` that is not
/// preceded by a backslash
fn find_unescaped(text: &str, from: usize, needle: &str) -> Option<usize> {
    let mut pos = from;
    while let Some(found) = text[pos..].find(needle) {
        let at = pos + found;
        if at == 0 || text.as_bytes()[at - 1] != b'\\' {
            return Some(at);
        }
        pos = at + needle.len();
    }
    None
}
