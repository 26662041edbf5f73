//! Tool path configuration
//!
//! The candidate command names and per-OS fallback locations for the LaTeX
//! compiler and Inkscape live in an explicit, user-overridable structure
//! instead of being buried in the discovery logic. A YAML file can override
//! any field; absent fields keep their defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Candidate commands and fallback paths for the external tools
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolPathsConfig {
    /// LaTeX compiler command names, probed on PATH in order
    #[serde(default = "default_latex_commands")]
    pub latex_commands: Vec<String>,

    /// Inkscape command names, probed on PATH in order
    #[serde(default = "default_inkscape_commands")]
    pub inkscape_commands: Vec<String>,

    /// OS family ("windows", "macos", "linux") to absolute fallback paths,
    /// checked when nothing on PATH responds
    #[serde(default = "default_fallbacks")]
    pub fallbacks: BTreeMap<String, OsFallbacks>,
}

/// Fallback locations for one OS family
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OsFallbacks {
    #[serde(default)]
    pub latex: Vec<PathBuf>,
    #[serde(default)]
    pub inkscape: Vec<PathBuf>,
}

impl Default for ToolPathsConfig {
    fn default() -> Self {
        Self {
            latex_commands: default_latex_commands(),
            inkscape_commands: default_inkscape_commands(),
            fallbacks: default_fallbacks(),
        }
    }
}

fn default_latex_commands() -> Vec<String> {
    ["pdflatex", "xelatex", "lualatex"]
        .map(String::from)
        .to_vec()
}

fn default_inkscape_commands() -> Vec<String> {
    // inkscape.com is the console binary on Windows, harmless elsewhere
    ["inkscape.com", "inkscape"].map(String::from).to_vec()
}

fn default_fallbacks() -> BTreeMap<String, OsFallbacks> {
    let mut fallbacks = BTreeMap::new();
    fallbacks.insert(
        "windows".to_string(),
        OsFallbacks {
            latex: vec![
                PathBuf::from(r"C:\texlive\bin\windows\pdflatex.exe"),
                PathBuf::from(r"C:\Program Files\MiKTeX\miktex\bin\x64\pdflatex.exe"),
            ],
            inkscape: vec![
                PathBuf::from(r"C:\Program Files\Inkscape\bin\inkscape.com"),
                PathBuf::from(r"C:\Program Files\Inkscape\bin\inkscape.exe"),
                PathBuf::from(r"C:\Program Files\Inkscape\inkscape.com"),
                PathBuf::from(r"C:\Program Files\Inkscape\inkscape.exe"),
            ],
        },
    );
    fallbacks.insert(
        "macos".to_string(),
        OsFallbacks {
            latex: vec![PathBuf::from("/Library/TeX/texbin/pdflatex")],
            inkscape: vec![PathBuf::from(
                "/Applications/Inkscape.app/Contents/MacOS/inkscape",
            )],
        },
    );
    fallbacks.insert(
        "linux".to_string(),
        OsFallbacks {
            latex: vec![PathBuf::from("/usr/bin/pdflatex")],
            inkscape: vec![PathBuf::from("/usr/bin/inkscape")],
        },
    );
    fallbacks
}

impl ToolPathsConfig {
    /// Parse a YAML override
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(yaml)
    }

    /// Load the configuration: an explicit `--tools` file, else the user's
    /// config-dir file when present, else defaults
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => Some(p.to_path_buf()),
            None => Self::user_config_path().filter(|p| p.exists()),
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(&path)
            .map_err(|e| error::tools_config_read_failed(path.display().to_string(), e.to_string()))?;
        Self::from_yaml(&content)
            .map_err(|e| error::tools_config_parse_failed(path.display().to_string(), e.to_string()))
    }

    /// `<config_dir>/tex2svg/tools.yaml`
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tex2svg").join("tools.yaml"))
    }

    /// Fallback paths for the OS family the binary was compiled for
    pub fn os_fallbacks(&self) -> Option<&OsFallbacks> {
        self.fallbacks.get(os_family())
    }
}

/// OS family key used in the fallback table
pub fn os_family() -> &'static str {
    if cfg!(windows) {
        "windows"
    } else if cfg!(target_os = "macos") {
        "macos"
    } else {
        "linux"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_covers_all_os_families() {
        let config = ToolPathsConfig::default();
        for family in ["windows", "macos", "linux"] {
            assert!(config.fallbacks.contains_key(family), "missing {family}");
        }
    }

    #[test]
    fn test_default_latex_order() {
        let config = ToolPathsConfig::default();
        assert_eq!(
            config.latex_commands,
            vec!["pdflatex", "xelatex", "lualatex"]
        );
    }

    #[test]
    fn test_os_fallbacks_resolves_current_family() {
        let config = ToolPathsConfig::default();
        assert!(config.os_fallbacks().is_some());
    }

    #[test]
    fn test_from_yaml_partial_override_keeps_defaults() {
        let config = ToolPathsConfig::from_yaml("latex_commands: [lualatex]").unwrap();
        assert_eq!(config.latex_commands, vec!["lualatex"]);
        // untouched fields come from the defaults
        assert_eq!(config.inkscape_commands, vec!["inkscape.com", "inkscape"]);
        assert!(config.fallbacks.contains_key("linux"));
    }

    #[test]
    fn test_from_yaml_full_fallback_override() {
        let yaml = "\
fallbacks:
  linux:
    latex: [/opt/texlive/bin/pdflatex]
    inkscape: [/opt/inkscape/bin/inkscape]
";
        let config = ToolPathsConfig::from_yaml(yaml).unwrap();
        let linux = config.fallbacks.get("linux").unwrap();
        assert_eq!(linux.latex, vec![PathBuf::from("/opt/texlive/bin/pdflatex")]);
        assert!(!config.fallbacks.contains_key("macos"));
    }

    #[test]
    fn test_from_yaml_invalid() {
        assert!(ToolPathsConfig::from_yaml("latex_commands: {not: a list}").is_err());
    }

    #[test]
    fn test_load_defaults_when_no_file() {
        // Explicit None and (almost certainly) no user config in test envs
        // still yields a usable config
        let config = ToolPathsConfig::load(None);
        assert!(config.is_ok());
    }

    #[test]
    fn test_load_explicit_missing_file_errors() {
        let result = ToolPathsConfig::load(Some(Path::new("/definitely/not/here.yaml")));
        assert!(result.is_err());
    }
}
