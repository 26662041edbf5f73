//! Error types and handling for tex2svg
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`fs`]: File system errors
//! - [`input`]: Input discovery errors
//! - [`tools`]: External tool discovery errors

pub mod fs;
pub mod input;
pub mod tools;

pub use fs::{
    output_dir_failed, read_failed as file_read_failed, write_failed as file_write_failed,
};
pub use input::{no_main_file, no_tex_files, not_found as file_not_found};
pub use tools::{
    config_parse_failed as tools_config_parse_failed,
    config_read_failed as tools_config_read_failed, inkscape_not_found, latex_not_found,
};

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for tex2svg operations
#[derive(Error, Diagnostic, Debug)]
pub enum TexSvgError {
    // External tool errors
    #[error("No LaTeX compiler found")]
    #[diagnostic(
        code(tex2svg::tools::latex_not_found),
        help(
            "Install a TeX distribution providing pdflatex, xelatex or lualatex, or point \
             TEX2SVG_LATEX at the compiler binary"
        )
    )]
    LatexNotFound,

    #[error("Inkscape not found")]
    #[diagnostic(
        code(tex2svg::tools::inkscape_not_found),
        help("Install Inkscape 1.x or point the INKSCAPE environment variable at the binary")
    )]
    InkscapeNotFound,

    #[error("Failed to read tools configuration: {path} ({reason})")]
    #[diagnostic(code(tex2svg::tools::config_read_failed))]
    ToolsConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse tools configuration: {path} ({reason})")]
    #[diagnostic(code(tex2svg::tools::config_parse_failed))]
    ToolsConfigParseFailed { path: String, reason: String },

    // Input errors
    #[error("No .tex files found in: {path}")]
    #[diagnostic(
        code(tex2svg::input::no_tex_files),
        help("Pass an input file explicitly or run from a directory containing .tex files")
    )]
    NoTexFiles { path: String },

    #[error("No main .tex file found in: {path}")]
    #[diagnostic(
        code(tex2svg::input::no_main_file),
        help(
            "None of the .tex files contains \\begin{{document}} or \\documentclass outside \
             included files. Pass the main file explicitly."
        )
    )]
    NoMainFile { path: String },

    #[error("File not found: {path}")]
    #[diagnostic(code(tex2svg::input::not_found))]
    FileNotFound { path: String },

    // File system errors
    #[error("Failed to read file: {path} ({reason})")]
    #[diagnostic(code(tex2svg::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path} ({reason})")]
    #[diagnostic(code(tex2svg::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create output directory: {path} ({reason})")]
    #[diagnostic(code(tex2svg::fs::output_dir_failed))]
    OutputDirFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(tex2svg::fs::io_error))]
    IoError { message: String },

    // Per-item render errors (caught by the batch loop, never fatal);
    // `item` is the output stem, eq_<n> or alg_<n>
    #[error("LaTeX compilation failed for {item}: {detail}")]
    #[diagnostic(code(tex2svg::render::compile_failed))]
    CompileFailed { item: String, detail: String },

    #[error("SVG conversion failed for {item}: {detail}")]
    #[diagnostic(code(tex2svg::render::convert_failed))]
    ConvertFailed { item: String, detail: String },
}

impl From<std::io::Error> for TexSvgError {
    fn from(err: std::io::Error) -> Self {
        TexSvgError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, TexSvgError>;
