//! tex2svg - LaTeX equations to SVG
//!
//! A command line tool that extracts math environments from `.tex` sources,
//! compiles each one to a standalone PDF with an external LaTeX engine, and
//! converts the PDFs to SVG with Inkscape. A companion `combine` subcommand
//! flattens multi-file projects (`\input`/`\include`) into a single file.

use clap::Parser;

mod cli;
mod commands;
mod document;
mod error;
mod extract;
mod flatten;
mod progress;
mod render;
mod temp;
mod tools;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.verbose),
        Commands::Combine(args) => commands::combine::run(args, cli.verbose),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
