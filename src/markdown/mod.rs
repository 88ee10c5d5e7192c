//! Markdown preview rendering
//!
//! Converts the document to a standalone HTML page for the preview pane,
//! with a pluggable syntax highlighter for fenced code blocks.

mod renderer;
mod theme;

pub use renderer::{markdown_to_html, markdown_to_html_with, Highlighter};
pub use theme::PreviewTheme;
