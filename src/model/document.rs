//! Document model - the text buffer and cursor

use ropey::Rope;

use crate::util::text::word_count;

/// The document being authored: a rope buffer plus the single cursor
/// offset (in chars) the host text control reports.
#[derive(Debug, Clone)]
pub struct Document {
    buffer: Rope,
    cursor: usize,
    /// Incremented on each edit; the preview re-renders when it trails.
    pub revision: u64,
    /// Whether the buffer has changes not yet persisted.
    pub is_modified: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::with_text("")
    }

    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            cursor: 0,
            revision: 0,
            is_modified: false,
        }
    }

    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.len_chars() == 0
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamped to the buffer bounds.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.buffer.len_chars());
    }

    /// Replace the whole buffer. The cursor is clamped to the new bounds.
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from_str(text);
        self.cursor = self.cursor.min(self.buffer.len_chars());
        self.touch();
    }

    /// Insert at the cursor and advance the cursor past the insertion.
    pub fn insert_at_cursor(&mut self, text: &str) {
        self.buffer.insert(self.cursor, text);
        self.cursor += text.chars().count();
        self.touch();
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.text())
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.is_modified = true;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
