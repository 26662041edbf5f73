use clap::Parser;
use std::path::PathBuf;

/// Arguments for the combine command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Flatten an explicit main file:\n    tex2svg combine thesis.tex\n\n\
                   Auto-detect the main file in the current directory:\n    tex2svg combine\n\n\
                   Write the combined file elsewhere:\n    tex2svg combine thesis.tex build/")]
pub struct CombineArgs {
    /// Main .tex file (the one containing \begin{document}). If not
    /// provided, it is auto-detected among the .tex files in the current
    /// directory
    pub main_file: Option<PathBuf>,

    /// Directory for the combined file (defaults to the current directory;
    /// the file itself is always named combined_output.tex)
    pub output_dir: Option<PathBuf>,
}
