//! External tool discovery errors

use super::TexSvgError;

/// Creates a missing LaTeX compiler error
pub fn latex_not_found() -> TexSvgError {
    TexSvgError::LatexNotFound
}

/// Creates a missing Inkscape error
pub fn inkscape_not_found() -> TexSvgError {
    TexSvgError::InkscapeNotFound
}

/// Creates a tools configuration read error
pub fn config_read_failed(path: impl Into<String>, reason: impl Into<String>) -> TexSvgError {
    TexSvgError::ToolsConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a tools configuration parse error
pub fn config_parse_failed(path: impl Into<String>, reason: impl Into<String>) -> TexSvgError {
    TexSvgError::ToolsConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
