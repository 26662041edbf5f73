use clap::Parser;
use std::path::PathBuf;

/// Arguments for the render command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Render one file:\n    tex2svg render paper.tex\n    \
                   tex2svg render paper.tex figures/\n\n\
                   Render every .tex file in the current directory:\n    tex2svg render\n\n\
                   Override tool locations:\n    tex2svg render paper.tex --tools tools.yaml")]
pub struct RenderArgs {
    /// Input .tex file. If not provided, every .tex file in the current
    /// directory is processed, one output subfolder per file
    pub tex_file: Option<PathBuf>,

    /// Output directory for the SVG files (defaults to a folder named after
    /// the input file stem)
    pub output_dir: Option<PathBuf>,

    /// YAML file overriding LaTeX/Inkscape command names and fallback paths
    #[arg(long, value_name = "FILE", env = "TEX2SVG_TOOLS")]
    pub tools: Option<PathBuf>,

    /// Re-render equations whose SVG already exists
    #[arg(long, short = 'f')]
    pub force: bool,
}
