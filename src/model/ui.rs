//! UI state - notifications, save status, theme, and the table dialog

use std::time::{Duration, Instant};

/// How a notification should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// Transient user-facing message with auto-expiry.
#[derive(Debug, Clone)]
pub struct Notification {
    pub text: String,
    pub severity: Severity,
    pub expires_at: Instant,
}

impl Notification {
    pub fn new(text: impl Into<String>, severity: Severity, lifetime: Duration) -> Self {
        Self {
            text: text.into(),
            severity,
            expires_at: Instant::now() + lifetime,
        }
    }

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Where the debounced save currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SaveStatus {
    #[default]
    Idle,
    /// An edit happened; the debounce deadline is armed.
    Pending,
    Saved,
}

/// Inputs of the create-table dialog. Raw strings, parsed and clamped on
/// confirm so non-numeric or non-positive entries fall back to the default.
#[derive(Debug, Clone, Default)]
pub struct TableDialog {
    pub visible: bool,
    pub rows_input: String,
    pub cols_input: String,
}

impl TableDialog {
    pub fn open(&mut self, default_rows: usize, default_cols: usize) {
        self.visible = true;
        self.rows_input = default_rows.to_string();
        self.cols_input = default_cols.to_string();
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    pub fn rows(&self, default: usize) -> usize {
        parse_dimension(&self.rows_input, default)
    }

    pub fn cols(&self, default: usize) -> usize {
        parse_dimension(&self.cols_input, default)
    }
}

fn parse_dimension(input: &str, default: usize) -> usize {
    input
        .trim()
        .parse::<usize>()
        .ok()
        .filter(|&n| n > 0)
        .unwrap_or(default)
}

/// UI state the host shell renders from.
#[derive(Debug, Clone)]
pub struct UiState {
    pub notifications: Vec<Notification>,
    pub save_status: SaveStatus,
    pub dark_mode: bool,
    pub word_count: usize,
    /// Rendered preview document for the current `preview_revision`.
    pub preview_html: String,
    pub preview_revision: u64,
    pub table_dialog: TableDialog,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            notifications: Vec::new(),
            save_status: SaveStatus::Idle,
            dark_mode: false,
            word_count: 0,
            preview_html: String::new(),
            preview_revision: 0,
            table_dialog: TableDialog::default(),
        }
    }

    pub fn notify(&mut self, text: impl Into<String>, severity: Severity, lifetime: Duration) {
        self.notifications
            .push(Notification::new(text, severity, lifetime));
    }

    /// Drop expired notifications; true if anything was removed.
    pub fn prune_notifications(&mut self) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired());
        self.notifications.len() != before
    }

    pub fn needs_preview_refresh(&self, revision: u64) -> bool {
        self.preview_revision != revision || self.preview_html.is_empty()
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
