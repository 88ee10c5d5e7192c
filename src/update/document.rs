//! Document message handlers and the shared after-edit pipeline

use crate::commands::Cmd;
use crate::markdown::{markdown_to_html, PreviewTheme};
use crate::messages::DocumentMsg;
use crate::model::{EditorModel, SaveStatus};

pub fn update_document(model: &mut EditorModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::SetContent(text) => {
            model.document.set_text(&text);
            after_edit(model);
            Some(Cmd::Redraw)
        }
        DocumentMsg::InsertAtCursor(text) => {
            model.document.insert_at_cursor(&text);
            after_edit(model);
            Some(Cmd::redraw_with_cursor(model.document.cursor()))
        }
        DocumentMsg::SetCursor(offset) => {
            model.document.set_cursor(offset);
            None
        }
        DocumentMsg::Clear => {
            model.document.clear();
            after_edit(model);
            Some(Cmd::Redraw)
        }
    }
}

/// Everything an edit triggers: preview re-render, word count refresh,
/// and arming the debounced save.
pub(crate) fn after_edit(model: &mut EditorModel) {
    refresh_preview(model);
    model.ui.word_count = model.document.word_count();
    model.ui.save_status = SaveStatus::Pending;
    model.autosave.schedule();
}

/// Re-render the preview when the document moved past the rendered
/// revision. A renderer failure would be caught here and surfaced as a
/// notification; the current renderer is total.
pub(crate) fn refresh_preview(model: &mut EditorModel) {
    if !model.ui.needs_preview_refresh(model.document.revision) {
        return;
    }
    render_preview(model);
}

/// Unconditionally re-render (used when the theme changes without an edit).
pub(crate) fn render_preview(model: &mut EditorModel) {
    let theme = PreviewTheme::for_mode(model.ui.dark_mode);
    model.ui.preview_html = markdown_to_html(&model.document.text(), &theme);
    model.ui.preview_revision = model.document.revision;
}
