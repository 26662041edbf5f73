//! Combine command implementation
//!
//! Flattens a multi-file LaTeX project into combined_output.tex, either from
//! an explicit main file or from the auto-detected one.

use std::fs;
use std::path::{Path, PathBuf};

use console::Style;

use crate::cli::CombineArgs;
use crate::error::{self, Result};
use crate::flatten::{self, detect};

/// Name of the combined file inside the output directory
pub const COMBINED_FILE_NAME: &str = "combined_output.tex";

/// Run combine command
pub fn run(args: CombineArgs, verbose: bool) -> Result<()> {
    let main_file = resolve_main_file(args.main_file)?;
    if verbose {
        println!("Main file: {}", main_file.display());
    }

    let out_dir = args.output_dir.unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)
        .map_err(|e| error::output_dir_failed(out_dir.display().to_string(), e.to_string()))?;

    let flattened = flatten::flatten(&main_file)?;

    for warning in &flattened.warnings {
        eprintln!(
            "{} {}",
            Style::new().yellow().bold().apply_to("Warning:"),
            warning
        );
    }
    if verbose {
        for file in &flattened.inlined {
            println!("Included file: {}", file.display());
        }
    }

    let output_file = out_dir.join(COMBINED_FILE_NAME);
    fs::write(&output_file, &flattened.text)
        .map_err(|e| error::file_write_failed(output_file.display().to_string(), e.to_string()))?;

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Combined LaTeX file created:"),
        output_file.display()
    );

    Ok(())
}

/// The explicit main file (with `.tex` appended when missing), or the
/// auto-detected one among the current directory's .tex files
fn resolve_main_file(main_file: Option<PathBuf>) -> Result<PathBuf> {
    match main_file {
        Some(file) => {
            let file = ensure_tex_extension(file);
            if !file.exists() {
                return Err(error::file_not_found(&file));
            }
            Ok(file)
        }
        None => {
            let cwd = std::env::current_dir()?;
            let files = detect::tex_files_in(&cwd)?;
            if files.is_empty() {
                return Err(error::no_tex_files(&cwd));
            }
            detect::find_main_file(&files).ok_or_else(|| error::no_main_file(&cwd))
        }
    }
}

fn ensure_tex_extension(path: PathBuf) -> PathBuf {
    if path.extension().is_some_and(|ext| ext == "tex") {
        path
    } else {
        let mut with_ext = path.into_os_string();
        with_ext.push(".tex");
        PathBuf::from(with_ext)
    }
}
