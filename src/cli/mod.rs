//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - render: Render command arguments
//! - combine: Combine command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod combine;
pub mod completions;
pub mod render;

pub use combine::CombineArgs;
pub use completions::CompletionsArgs;
pub use render::RenderArgs;

/// tex2svg - LaTeX equations to SVG
///
/// Extract math environments from `.tex` sources and render each one to SVG.
#[derive(Parser, Debug)]
#[command(
    name = "tex2svg",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Extract LaTeX equations and render each one to SVG",
    long_about = "tex2svg scans LaTeX sources for math environments ($...$, $$...$$, \\[...\\], \
                  \\begin{equation} and friends), compiles every equation to a standalone PDF \
                  with a LaTeX engine found on your system, and converts each PDF to SVG with \
                  Inkscape.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  tex2svg render paper.tex           \x1b[90m# SVGs into ./paper/\x1b[0m\n   \
                  tex2svg render paper.tex out/      \x1b[90m# SVGs into ./out/\x1b[0m\n   \
                  tex2svg render                     \x1b[90m# every .tex file in this directory\x1b[0m\n   \
                  tex2svg combine                    \x1b[90m# flatten the project into combined_output.tex\x1b[0m\n   \
                  tex2svg combine thesis.tex build/  \x1b[90m# flatten thesis.tex into build/\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract equations and render them to SVG
    Render(RenderArgs),

    /// Flatten \input/\include directives into a single .tex file
    Combine(CombineArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
