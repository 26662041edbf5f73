//! Per-equation render pipeline
//!
//! Each equation is wrapped in a standalone document inside its own scoped
//! temporary directory, compiled to PDF, and converted to SVG named
//! `eq_<index>.svg` (`alg_<index>.svg` for algorithm environments) in the
//! output directory. One bad equation never aborts
//! the batch; its failure is reported and the loop continues. Temporary
//! directories are cleaned up on every exit path by `TempDir`'s drop.

pub mod compile;
pub mod convert;
pub mod template;

use std::fs;
use std::path::Path;

use console::Style;
use tempfile::TempDir;

use crate::error::{self, Result};
use crate::extract::Equation;
use crate::progress::ProgressDisplay;
use crate::temp::temp_dir_base;
use crate::tools::Tools;

/// Outcome counts for one file's batch
#[derive(Debug, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub rendered: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Options for one render batch
pub struct RenderOptions {
    /// Re-render equations whose SVG already exists
    pub force: bool,
    pub verbose: bool,
}

/// Render every equation into `output_dir` as `eq_<index>.svg`
pub fn render_equations(
    tools: &Tools,
    equations: &[Equation],
    extra_preamble: &str,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<RenderSummary> {
    fs::create_dir_all(output_dir)
        .map_err(|e| error::output_dir_failed(output_dir.display().to_string(), e.to_string()))?;

    let mut summary = RenderSummary::default();
    let progress = ProgressDisplay::new(equations.len() as u64);

    for equation in equations {
        let stem = equation.output_stem();
        progress.update(&stem, equation.kind.label());

        let svg_out = output_dir.join(format!("{stem}.svg"));
        if svg_out.exists() && !options.force {
            if options.verbose {
                progress.println(&format!(
                    "  Skipping {stem} ({} exists)",
                    svg_out.display()
                ));
            }
            summary.skipped += 1;
            progress.inc();
            continue;
        }

        match render_one(tools, equation, extra_preamble, &svg_out) {
            Ok(()) => {
                if options.verbose {
                    progress.println(&format!("  Rendered {}", svg_out.display()));
                }
                summary.rendered += 1;
            }
            Err(e) => {
                progress.println(&format!(
                    "  {} {}",
                    Style::new().yellow().bold().apply_to("Warning:"),
                    e
                ));
                summary.failed += 1;
            }
        }
        progress.inc();
    }

    progress.finish();
    Ok(summary)
}

/// Wrap, compile and convert one equation inside a scoped temp dir
fn render_one(
    tools: &Tools,
    equation: &Equation,
    extra_preamble: &str,
    svg_out: &Path,
) -> Result<()> {
    let workdir = TempDir::new_in(temp_dir_base())?;
    let stem = equation.output_stem();

    let tex_file = workdir.path().join(format!("{stem}.tex"));
    let document = template::standalone_document(equation, extra_preamble);
    fs::write(&tex_file, document)
        .map_err(|e| error::file_write_failed(tex_file.display().to_string(), e.to_string()))?;

    let pdf = compile::compile(&tools.latex, &stem, &tex_file, workdir.path())?;
    convert::convert(&tools.inkscape, &stem, &pdf, svg_out)?;

    Ok(())
}
