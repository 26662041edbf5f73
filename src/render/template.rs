//! Standalone document template for a single equation
//!
//! Inline and display math is re-wrapped in `\[...\]`; named environments
//! keep their original `\begin{env}...\end{env}`. Equation numbering is
//! suppressed with `\mathtoolsset{showonlyrefs}` in the preamble so the
//! wrapped body stays byte-identical to the extracted source.

use crate::extract::{Equation, MathKind};

const PACKAGES: &str = "\\usepackage{amsmath,amssymb,amsfonts,mathtools,amsthm}";
const ALGORITHM_PACKAGES: &str = "\\usepackage{algorithm}\n\\usepackage[noend]{algpseudocode}";

/// Build the standalone .tex source for one equation. `extra_preamble`
/// carries the commands harvested from the source document's preamble.
pub fn standalone_document(equation: &Equation, extra_preamble: &str) -> String {
    let mut doc = String::new();
    doc.push_str("\\documentclass[preview,varwidth]{standalone}\n");
    doc.push_str(PACKAGES);
    doc.push('\n');
    if equation.kind.is_algorithm() {
        doc.push_str(ALGORITHM_PACKAGES);
        doc.push('\n');
    }
    doc.push_str("\\mathtoolsset{showonlyrefs}\n");
    if !extra_preamble.is_empty() {
        doc.push_str(extra_preamble);
        doc.push('\n');
    }
    doc.push_str("\\begin{document}\n");

    let body = equation.source_text.trim();
    match &equation.kind {
        MathKind::Environment(name) | MathKind::Algorithm(name) => {
            doc.push_str(&format!("\\begin{{{name}}}\n{body}\n\\end{{{name}}}\n"));
        }
        MathKind::Inline | MathKind::DollarDisplay | MathKind::BracketDisplay => {
            doc.push_str(&format!("\\[\n{body}\n\\]\n"));
        }
    }

    doc.push_str("\\end{document}\n");
    doc
}
