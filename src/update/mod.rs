//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions. Every call is
//! synchronous and atomic: it reads the model, mutates it, and returns
//! the side effects the host shell should perform.

mod document;
mod format;
mod session;
mod table;
mod ui;

pub use document::update_document;
pub use format::update_format;
pub use session::update_session;
pub use table::update_table;
pub use ui::update_ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::EditorModel;

/// Main update function - dispatches to sub-handlers
pub fn update(model: &mut EditorModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Format(m) => format::update_format(model, m),
        Msg::Table(m) => table::update_table(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::Session(m) => session::update_session(model, m),
    }
}
