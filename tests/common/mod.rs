//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use inkpad::config::EditorConfig;
use inkpad::model::EditorModel;
use inkpad::storage::MemoryStore;

/// Create a test model with given text and cursor offset
pub fn test_model(text: &str, cursor: usize) -> EditorModel {
    let mut model = EditorModel::new(EditorConfig::default(), Box::new(MemoryStore::new()));
    model.document.set_text(text);
    model.document.set_cursor(cursor);
    model
}

/// Create an empty test model
pub fn empty_model() -> EditorModel {
    test_model("", 0)
}

/// The document text as a plain string
pub fn buffer_to_string(model: &EditorModel) -> String {
    model.document.text()
}

/// Texts of all live notifications
pub fn notification_texts(model: &EditorModel) -> Vec<String> {
    model
        .ui
        .notifications
        .iter()
        .map(|n| n.text.clone())
        .collect()
}
