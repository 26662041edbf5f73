//! LaTeX compilation of a single standalone equation document

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, TexSvgError};

/// Compile `tex_file` with `latex` into `workdir`, returning the PDF path.
/// `stem` names the item in failures (`eq_<n>` / `alg_<n>`). A non-zero exit
/// fails this item only; the caller decides whether to continue.
pub fn compile(latex: &Path, stem: &str, tex_file: &Path, workdir: &Path) -> Result<PathBuf> {
    let output = Command::new(latex)
        .arg("-interaction=nonstopmode")
        .arg("-halt-on-error")
        .arg("-output-directory")
        .arg(workdir)
        .arg(tex_file)
        .current_dir(workdir)
        .output()
        .map_err(|e| TexSvgError::CompileFailed {
            item: stem.to_string(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        return Err(TexSvgError::CompileFailed {
            item: stem.to_string(),
            detail: failure_detail(&output.stdout, output.status.code()),
        });
    }

    let pdf = tex_file.with_extension("pdf");
    if !pdf.exists() {
        return Err(TexSvgError::CompileFailed {
            item: stem.to_string(),
            detail: "no PDF produced".to_string(),
        });
    }
    Ok(pdf)
}

/// A short, single-line failure description: the first error line of the
/// LaTeX log when present, else the exit code
fn failure_detail(stdout: &[u8], code: Option<i32>) -> String {
    let log = String::from_utf8_lossy(stdout);
    if let Some(line) = log.lines().find(|l| l.starts_with('!')) {
        return line.trim().to_string();
    }
    match code {
        Some(code) => format!("exit status {code}"),
        None => "terminated by signal".to_string(),
    }
}
