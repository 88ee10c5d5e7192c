//! Table message handlers
//!
//! Bridges [`TableMsg`] to the table core. Successful edits rewrite the
//! buffer and restore the cursor; refusals surface as error notifications
//! and leave the buffer untouched.

use crate::commands::Cmd;
use crate::messages::TableMsg;
use crate::model::{EditorModel, Severity};
use crate::table::{self, TableEdit, TableError};

use super::document::after_edit;

pub fn update_table(model: &mut EditorModel, msg: TableMsg) -> Option<Cmd> {
    match msg {
        TableMsg::AddRow => apply(model, table::add_row),
        TableMsg::AddColumn => apply(model, table::add_column),
        TableMsg::DeleteRow => apply(model, table::delete_row),
        TableMsg::DeleteColumn => apply(model, table::delete_column),

        TableMsg::Create { rows, cols } => insert_table(model, rows, cols),

        TableMsg::OpenDialog => {
            model
                .ui
                .table_dialog
                .open(model.config.table_rows, model.config.table_cols);
            Some(Cmd::Redraw)
        }
        TableMsg::CloseDialog => {
            model.ui.table_dialog.close();
            Some(Cmd::Redraw)
        }
        TableMsg::SetDialogRows(input) => {
            model.ui.table_dialog.rows_input = input;
            None
        }
        TableMsg::SetDialogCols(input) => {
            model.ui.table_dialog.cols_input = input;
            None
        }
        TableMsg::ConfirmDialog => {
            let rows = model.ui.table_dialog.rows(model.config.table_rows);
            let cols = model.ui.table_dialog.cols(model.config.table_cols);
            model.ui.table_dialog.close();
            insert_table(model, rows, cols)
        }
    }
}

/// Run a structural edit against a snapshot of the buffer. The model is
/// only touched when the operation succeeds.
fn apply(
    model: &mut EditorModel,
    op: fn(&str, usize) -> Result<TableEdit, TableError>,
) -> Option<Cmd> {
    let text = model.document.text();
    match op(&text, model.document.cursor()) {
        Ok(edit) => {
            model.document.set_text(&edit.text);
            model.document.set_cursor(edit.cursor);
            after_edit(model);
            Some(Cmd::redraw_with_cursor(edit.cursor))
        }
        Err(err) => {
            tracing::debug!("table edit refused: {err}");
            let lifetime = model.notification_lifetime();
            model.ui.notify(err.to_string(), Severity::Error, lifetime);
            Some(Cmd::Redraw)
        }
    }
}

fn insert_table(model: &mut EditorModel, rows: usize, cols: usize) -> Option<Cmd> {
    let block = table::create_table(rows, cols);
    model.document.insert_at_cursor(&block);
    after_edit(model);
    Some(Cmd::redraw_with_cursor(model.document.cursor()))
}
