//! Model types for the Elm-style architecture

mod document;
mod ui;

pub use document::Document;
pub use ui::{Notification, SaveStatus, Severity, TableDialog, UiState};

use std::time::Duration;

use crate::config::EditorConfig;
use crate::storage::{SaveScheduler, Store};

/// Root model: the document, the UI state the shell renders from, and the
/// session plumbing (config, store, debounced save). All updates flow
/// through [`crate::update::update`]; each call is a complete
/// read-modify-write on the UI thread.
#[derive(Debug)]
pub struct EditorModel {
    pub document: Document,
    pub ui: UiState,
    pub config: EditorConfig,
    pub autosave: SaveScheduler,
    /// Content as of the last successful save, to skip no-op writes.
    pub last_saved: String,
    pub store: Box<dyn Store>,
}

impl EditorModel {
    pub fn new(config: EditorConfig, store: Box<dyn Store>) -> Self {
        let autosave = SaveScheduler::new(Duration::from_millis(config.autosave_delay_ms));
        Self {
            document: Document::new(),
            ui: UiState::new(),
            config,
            autosave,
            last_saved: String::new(),
            store,
        }
    }

    /// Lifetime for notifications, from config.
    pub fn notification_lifetime(&self) -> Duration {
        Duration::from_millis(self.config.notification_ms)
    }
}
