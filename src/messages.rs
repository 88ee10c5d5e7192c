//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types. The host shell
//! translates its input events (keystrokes, toolbar clicks, timer ticks,
//! file pickers) into messages and feeds them to [`crate::update::update`].

use crate::model::Severity;

/// Document messages (buffer and cursor)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentMsg {
    /// Replace the whole buffer (load, import)
    SetContent(String),
    /// Insert text at the cursor and advance the cursor past it
    InsertAtCursor(String),
    /// Cursor moved in the host control
    SetCursor(usize),
    /// Clear the buffer (the shell confirms with the user first)
    Clear,
}

/// Toolbar formatting actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatMsg {
    Bold,
    Italic,
    Strikethrough,
    InlineCode,
    Heading1,
    Heading2,
    Heading3,
    BulletList,
    NumberedList,
    TaskItem,
    Quote,
    HorizontalRule,
    Link,
    Image,
    /// Generate a table of contents from the document headings
    TableOfContents,
}

/// Structural table editing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableMsg {
    /// Insert a fresh table block at the cursor
    Create { rows: usize, cols: usize },
    /// Insert a blank row after the cursor's row
    AddRow,
    /// Insert a column after the cell under the cursor
    AddColumn,
    /// Delete the cursor's row
    DeleteRow,
    /// Delete the column under the cursor
    DeleteColumn,
    /// Open the create-table dialog with the configured defaults
    OpenDialog,
    CloseDialog,
    SetDialogRows(String),
    SetDialogCols(String),
    /// Create a table from the dialog inputs and close it
    ConfirmDialog,
}

/// UI messages (notifications, theme, timers)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiMsg {
    /// Show a transient notification
    Notify { text: String, severity: Severity },
    /// Periodic tick: prunes expired notifications and fires the
    /// debounced save when due
    Tick,
    /// Flip dark mode, persist the flag, and re-render the preview
    ToggleDarkMode,
}

/// Session messages (persistence, import/export, clipboard)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionMsg {
    /// Restore content and theme from the store (startup)
    LoadSaved,
    /// Persist immediately, bypassing the debounce
    SaveNow,
    /// Imported file contents arrived from the shell
    ImportText(String),
    ExportMarkdown,
    ExportHtml,
    CopyMarkdown,
    CopyHtml,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Document(DocumentMsg),
    Format(FormatMsg),
    Table(TableMsg),
    Ui(UiMsg),
    Session(SessionMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn insert(text: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::InsertAtCursor(text.into()))
    }

    pub fn set_cursor(offset: usize) -> Self {
        Msg::Document(DocumentMsg::SetCursor(offset))
    }

    pub fn notify(text: impl Into<String>, severity: Severity) -> Self {
        Msg::Ui(UiMsg::Notify {
            text: text.into(),
            severity,
        })
    }
}
