//! Input discovery errors

use std::path::Path;

use super::TexSvgError;

/// Creates a missing input file error
pub fn not_found(path: impl AsRef<Path>) -> TexSvgError {
    TexSvgError::FileNotFound {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an error for a directory without any .tex files
pub fn no_tex_files(path: impl AsRef<Path>) -> TexSvgError {
    TexSvgError::NoTexFiles {
        path: path.as_ref().display().to_string(),
    }
}

/// Creates an error for a directory without a detectable main file
pub fn no_main_file(path: impl AsRef<Path>) -> TexSvgError {
    TexSvgError::NoMainFile {
        path: path.as_ref().display().to_string(),
    }
}
