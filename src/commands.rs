//! Command types for the Elm-style architecture
//!
//! Commands are the side effects an update asks the host shell to
//! perform: everything that touches the world outside the model (the
//! host text control, the clipboard, the download mechanism).

/// Side effect requested from the host shell after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Re-render the shell's view of the model (preview pane, word count,
    /// notifications, save status)
    Redraw,
    /// Restore the cursor of the host text control to this char offset
    SetCursor(usize),
    /// Write text to the system clipboard
    CopyToClipboard(String),
    /// Offer contents to the user as a named download
    Download {
        filename: String,
        mime: &'static str,
        contents: String,
    },
    /// Execute several commands in order
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Redraw plus a cursor restore, the usual pair after an insertion.
    pub fn redraw_with_cursor(offset: usize) -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::SetCursor(offset)])
    }
}
