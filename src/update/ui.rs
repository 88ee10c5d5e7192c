//! UI message handlers (notifications, timers, theme)

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::EditorModel;
use crate::storage::{Store, DARK_MODE_KEY};

use super::document::render_preview;
use super::session::save_now;

pub fn update_ui(model: &mut EditorModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Notify { text, severity } => {
            let lifetime = model.notification_lifetime();
            model.ui.notify(text, severity, lifetime);
            Some(Cmd::Redraw)
        }

        UiMsg::Tick => {
            let mut changed = model.ui.prune_notifications();
            if model.autosave.poll() {
                save_now(model);
                changed = true;
            }
            changed.then_some(Cmd::Redraw)
        }

        UiMsg::ToggleDarkMode => {
            model.ui.dark_mode = !model.ui.dark_mode;
            let flag = model.ui.dark_mode.to_string();
            if let Err(e) = model.store.set(DARK_MODE_KEY, &flag) {
                tracing::warn!("Failed to persist dark mode: {e}");
            }
            // Theme changed without an edit: force a re-render
            render_preview(model);
            tracing::info!("Dark mode: {}", model.ui.dark_mode);
            Some(Cmd::Redraw)
        }
    }
}
