//! Render command implementation
//!
//! Resolves the input set (explicit file, or every .tex in the current
//! directory), discovers the external tools once, then extracts and renders
//! each file's equations sequentially. Per-file read problems and
//! per-equation failures are reported and skipped; only missing tools and
//! unusable output directories abort the run.

use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::RenderArgs;
use crate::document::{read_tex, strip_comments};
use crate::error::{self, Result};
use crate::extract::{Equations, preamble};
use crate::flatten::detect::tex_files_in;
use crate::render::{RenderOptions, render_equations};
use crate::tools::{self, ToolPathsConfig};

/// Run render command
pub fn run(args: RenderArgs, verbose: bool) -> Result<()> {
    let inputs = resolve_inputs(args.tex_file.as_deref())?;
    let batch = inputs.len() > 1;

    let config = ToolPathsConfig::load(args.tools.as_deref())?;
    let tools = tools::discover(&config)?;
    if verbose {
        println!("Using LaTeX compiler: {}", tools.latex.display());
        println!("Using Inkscape: {}", tools.inkscape.display());
    }

    let options = RenderOptions {
        force: args.force,
        verbose,
    };

    for input in &inputs {
        let output_dir = output_dir_for(input, args.output_dir.as_deref(), batch);
        match render_file(&tools, input, &output_dir, &options) {
            Ok(()) => {}
            Err(e) if batch => {
                eprintln!(
                    "{} {}: {}",
                    Style::new().yellow().bold().apply_to("Warning:"),
                    input.display(),
                    e
                );
            }
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

/// The explicit input file, or every .tex file in the current directory
fn resolve_inputs(tex_file: Option<&Path>) -> Result<Vec<PathBuf>> {
    match tex_file {
        Some(file) => {
            if !file.exists() {
                return Err(error::file_not_found(file));
            }
            Ok(vec![file.to_path_buf()])
        }
        None => {
            let cwd = std::env::current_dir()?;
            let files = tex_files_in(&cwd)?;
            if files.is_empty() {
                return Err(error::no_tex_files(&cwd));
            }
            Ok(files)
        }
    }
}

/// Output directory for one input: the explicit directory (with a per-file
/// subfolder in batch mode), else a sibling folder named after the stem
fn output_dir_for(input: &Path, output_dir: Option<&Path>, batch: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map_or_else(|| "equations".into(), |s| s.to_os_string());
    match output_dir {
        Some(dir) if batch => dir.join(stem),
        Some(dir) => dir.to_path_buf(),
        None => input.with_extension(""),
    }
}

fn render_file(
    tools: &crate::tools::Tools,
    input: &Path,
    output_dir: &Path,
    options: &RenderOptions,
) -> Result<()> {
    println!(
        "Processing {}",
        Style::new().bold().apply_to(input.display())
    );

    let text = strip_comments(&read_tex(input)?);
    let extra_preamble = preamble::harvest(preamble::preamble_of(&text));
    let equations: Vec<_> = Equations::new(&text).collect();

    if equations.is_empty() {
        println!("  No equations found.");
        return Ok(());
    }

    let summary = render_equations(tools, &equations, &extra_preamble, output_dir, options)?;

    println!(
        "  {} {} rendered, {} skipped, {} failed -> {}",
        Style::new().green().bold().apply_to("Done:"),
        summary.rendered,
        summary.skipped,
        summary.failed,
        output_dir.display()
    );

    Ok(())
}
