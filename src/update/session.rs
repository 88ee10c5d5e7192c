//! Session message handlers (persistence, import/export, clipboard)

use crate::commands::Cmd;
use crate::messages::SessionMsg;
use crate::model::{EditorModel, SaveStatus, Severity};
use crate::storage::{Store, CONTENT_KEY, DARK_MODE_KEY};

use super::document::{after_edit, refresh_preview};

pub fn update_session(model: &mut EditorModel, msg: SessionMsg) -> Option<Cmd> {
    match msg {
        SessionMsg::LoadSaved => {
            if let Some(content) = model.store.get(CONTENT_KEY) {
                model.document.set_text(&content);
                model.last_saved = content;
                model.document.is_modified = false;
            }
            model.ui.dark_mode = model
                .store
                .get(DARK_MODE_KEY)
                .map(|v| v == "true")
                .unwrap_or(false);
            model.ui.word_count = model.document.word_count();
            refresh_preview(model);
            tracing::info!("Session restored ({} chars)", model.document.len_chars());
            Some(Cmd::Redraw)
        }

        SessionMsg::SaveNow => {
            model.autosave.cancel();
            save_now(model);
            Some(Cmd::Redraw)
        }

        SessionMsg::ImportText(content) => {
            model.document.set_text(&content);
            after_edit(model);
            let lifetime = model.notification_lifetime();
            model
                .ui
                .notify("File imported successfully!", Severity::Success, lifetime);
            Some(Cmd::Redraw)
        }

        SessionMsg::ExportMarkdown => Some(Cmd::Download {
            filename: "document.md".to_string(),
            mime: "text/markdown",
            contents: model.document.text(),
        }),

        SessionMsg::ExportHtml => {
            refresh_preview(model);
            Some(Cmd::Download {
                filename: "document.html".to_string(),
                mime: "text/html",
                contents: model.ui.preview_html.clone(),
            })
        }

        SessionMsg::CopyMarkdown => Some(Cmd::CopyToClipboard(model.document.text())),

        SessionMsg::CopyHtml => {
            refresh_preview(model);
            Some(Cmd::CopyToClipboard(model.ui.preview_html.clone()))
        }
    }
}

/// Persist the content if it changed since the last save. Failures are
/// surfaced as an error notification and leave the dirty state in place.
pub(crate) fn save_now(model: &mut EditorModel) {
    let content = model.document.text();
    if content == model.last_saved {
        return;
    }
    match model.store.set(CONTENT_KEY, &content) {
        Ok(()) => {
            model.last_saved = content;
            model.document.is_modified = false;
            model.ui.save_status = SaveStatus::Saved;
            tracing::debug!("Content saved ({} chars)", model.document.len_chars());
        }
        Err(e) => {
            tracing::warn!("Failed to save content: {e}");
            let lifetime = model.notification_lifetime();
            model
                .ui
                .notify("Failed to save content", Severity::Error, lifetime);
        }
    }
}
