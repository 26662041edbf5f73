//! PDF to SVG conversion through Inkscape

use std::path::Path;
use std::process::Command;

use crate::error::{Result, TexSvgError};

/// Convert `pdf` to `svg_out` with Inkscape. Uses the poppler import path,
/// which handles LaTeX output more reliably than Inkscape's internal one.
pub fn convert(inkscape: &Path, stem: &str, pdf: &Path, svg_out: &Path) -> Result<()> {
    let output = Command::new(inkscape)
        .arg("--pdf-poppler")
        .arg("--export-type=svg")
        .arg(format!("--export-filename={}", svg_out.display()))
        .arg(pdf)
        .output()
        .map_err(|e| TexSvgError::ConvertFailed {
            item: stem.to_string(),
            detail: e.to_string(),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TexSvgError::ConvertFailed {
            item: stem.to_string(),
            detail: stderr
                .lines()
                .next()
                .unwrap_or("non-zero exit status")
                .to_string(),
        });
    }

    if !svg_out.exists() {
        return Err(TexSvgError::ConvertFailed {
            item: stem.to_string(),
            detail: "no SVG produced".to_string(),
        });
    }

    Ok(())
}
