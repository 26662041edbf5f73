//! External tool discovery
//!
//! Resolution order per tool: environment variable override, then each
//! configured command name probed on PATH with `--version`, then the
//! configured per-OS fallback paths checked for existence. Discovery runs
//! once at startup; a tool that cannot be found is a fatal configuration
//! error, never retried.

pub mod paths;

pub use paths::{OsFallbacks, ToolPathsConfig};

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{self, Result};

/// Environment variable overriding the LaTeX compiler
pub const LATEX_ENV: &str = "TEX2SVG_LATEX";
/// Environment variable overriding Inkscape (same name the original
/// Inkscape-based scripts conventionally honor)
pub const INKSCAPE_ENV: &str = "INKSCAPE";

/// The resolved external tools
#[derive(Debug, Clone)]
pub struct Tools {
    pub latex: PathBuf,
    pub inkscape: PathBuf,
}

/// Discover both tools or fail with a configuration error
pub fn discover(config: &ToolPathsConfig) -> Result<Tools> {
    let fallbacks = config.os_fallbacks();

    let latex = discover_one(
        LATEX_ENV,
        &config.latex_commands,
        fallbacks.map_or(&[][..], |f| f.latex.as_slice()),
    )
    .ok_or_else(error::latex_not_found)?;

    let inkscape = discover_one(
        INKSCAPE_ENV,
        &config.inkscape_commands,
        fallbacks.map_or(&[][..], |f| f.inkscape.as_slice()),
    )
    .ok_or_else(error::inkscape_not_found)?;

    Ok(Tools { latex, inkscape })
}

fn discover_one(env_var: &str, commands: &[String], fallbacks: &[PathBuf]) -> Option<PathBuf> {
    if let Ok(value) = std::env::var(env_var) {
        let path = Path::new(&value);
        if path.exists() || probe(path) {
            return Some(path.to_path_buf());
        }
    }

    for command in commands {
        let candidate = Path::new(command);
        if probe(candidate) {
            return Some(candidate.to_path_buf());
        }
    }

    fallbacks.iter().find(|p| p.exists()).cloned()
}

/// True when running `cmd --version` succeeds
fn probe(cmd: &Path) -> bool {
    Command::new(cmd)
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}
