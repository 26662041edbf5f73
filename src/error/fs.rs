//! File system errors

use super::TexSvgError;

/// Creates a file read error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> TexSvgError {
    TexSvgError::FileReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a file write error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> TexSvgError {
    TexSvgError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an output directory creation error
pub fn output_dir_failed(path: impl Into<String>, reason: impl Into<String>) -> TexSvgError {
    TexSvgError::OutputDirFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
