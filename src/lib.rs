//! inkpad - live-preview Markdown editor core
//!
//! This crate provides the model, update and command types for a Markdown
//! authoring component in the Elm Architecture pattern: a host shell owns
//! the text control and the rendered preview, translates its events into
//! [`Msg`] values, and performs the [`Cmd`] side effects each update
//! returns. The structural pipe-table editor lives in [`table`] and
//! operates on a snapshot of the raw text plus the cursor offset.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod logging;
pub mod markdown;
pub mod messages;
pub mod model;
pub mod storage;
pub mod table;
pub mod update;
pub mod util;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::EditorConfig;
pub use messages::Msg;
pub use model::EditorModel;
