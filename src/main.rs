//! Headless driver: render a Markdown document to preview HTML.
//!
//! The interactive editor embeds the library; this binary covers the
//! export path without a UI, reading either a file or the saved session.

use std::fs;

use anyhow::Context;
use clap::Parser;

use inkpad::cli::Cli;
use inkpad::markdown::{markdown_to_html, PreviewTheme};
use inkpad::storage::{FileStore, Store, CONTENT_KEY, DARK_MODE_KEY};

fn main() -> anyhow::Result<()> {
    inkpad::logging::init();
    let cli = Cli::parse();

    let store = inkpad::config_paths::session_file().map(FileStore::open);

    let content = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => store
            .as_ref()
            .and_then(|s| s.get(CONTENT_KEY))
            .unwrap_or_default(),
    };

    let dark = cli.dark
        || store
            .as_ref()
            .and_then(|s| s.get(DARK_MODE_KEY))
            .map(|v| v == "true")
            .unwrap_or(false);

    let html = markdown_to_html(&content, &PreviewTheme::for_mode(dark));

    match &cli.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{html}"),
    }

    Ok(())
}
