//! Command-line interface for the headless preview renderer

use std::path::PathBuf;

use clap::Parser;

/// Render Markdown to the same standalone preview HTML the editor shows.
#[derive(Debug, Parser)]
#[command(name = "inkpad", version, about)]
pub struct Cli {
    /// Markdown file to render; defaults to the saved session content
    pub file: Option<PathBuf>,

    /// Write the rendered HTML here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Force the dark preview theme (otherwise the saved preference is used)
    #[arg(long)]
    pub dark: bool,
}
