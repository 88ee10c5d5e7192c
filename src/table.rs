//! Markdown pipe-table locator and structural editor.
//!
//! Everything here operates on a snapshot of the raw document text plus a
//! cursor offset: the contiguous pipe-prefixed block under the cursor is
//! located by scanning lines, parsed into a [`TableRegion`] cell grid,
//! mutated, and serialized back to text. No entity survives across calls;
//! each operation is a complete read-modify-write of the snapshot.
//!
//! Failures are refusals, not panics: every precondition violation returns
//! a [`TableError`] and the caller's buffer stays untouched. Rows shorter
//! than the header are tolerated by clamping the operated-on index.

use thiserror::Error;

use crate::util::text::{line_at_offset, line_starts};

/// Placeholder cell inserted for new rows and columns.
const BLANK_CELL: &str = " Cell ";
/// Cell inserted into the separator row when adding a column.
const DASH_CELL: &str = " -------- ";

/// Why a table operation refused to run.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum TableError {
    /// The cursor is not inside a valid table (header, separator, data row).
    #[error("Please place cursor inside a table")]
    NotInTable,
    /// The cursor's line is the header or separator row.
    #[error("Cannot delete header or separator row")]
    ProtectedRow,
    /// Removing the row would leave the table without data rows.
    #[error("Cannot delete the last data row")]
    LastDataRow,
    /// Removing the column would leave the table with a single column.
    #[error("Cannot delete the last column")]
    LastColumn,
}

/// Outcome of a structural edit: the rewritten document text and the
/// cursor offset the host text control should restore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableEdit {
    pub text: String,
    pub cursor: usize,
}

/// The table under the cursor: an inclusive line range and the cell grid
/// obtained by splitting each of those lines on `|`.
///
/// The outer pipes of a well-formed `| a | b |` line produce empty leading
/// and trailing cells; they are kept in the grid (so serialization is a
/// plain rejoin) but ignored when counting columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRegion {
    /// First line of the table (the header row).
    pub start: usize,
    /// Last line of the table, inclusive.
    pub end: usize,
    rows: Vec<Vec<String>>,
}

impl TableRegion {
    /// A region is a table only with header, separator, and at least one
    /// data row.
    pub fn is_valid(&self) -> bool {
        self.end - self.start >= 2
    }

    /// Line index of the dash-filled separator row.
    fn separator_line(&self) -> usize {
        self.start + 1
    }

    /// Serialize the (possibly mutated) cell grid back over its lines.
    fn apply_to(&self, lines: &mut [String]) {
        for (i, cells) in self.rows.iter().enumerate() {
            lines[self.start + i] = cells.join("|");
        }
    }
}

/// Cursor line plus the parsed region around it, rebuilt per operation.
struct Located {
    lines: Vec<String>,
    starts: Vec<usize>,
    /// Index of the cursor's line.
    line: usize,
    region: TableRegion,
}

/// Whether the cursor offset sits inside a valid pipe table.
///
/// Pure query; `position` past the end of the text is never inside.
pub fn is_inside_table(text: &str, position: usize) -> bool {
    locate(text, position).is_ok()
}

/// Inclusive line range of the maximal contiguous pipe-prefixed block
/// containing `current`. A blank line or any line not starting (after
/// trimming) with `|` terminates the scan; document edges bound the range.
pub fn find_table_boundaries<S: AsRef<str>>(lines: &[S], current: usize) -> (usize, usize) {
    let is_table_line = |i: usize| lines[i].as_ref().trim().starts_with('|');
    let mut start = current;
    while start > 0 && is_table_line(start - 1) {
        start -= 1;
    }
    let mut end = current;
    while end + 1 < lines.len() && is_table_line(end + 1) {
        end += 1;
    }
    (start, end)
}

/// Visual column count of a row: cells with non-empty trimmed content.
/// Discards the empty outer cells produced by the wrapping pipes.
pub fn table_columns(line: &str) -> usize {
    line.split('|').filter(|cell| !cell.trim().is_empty()).count()
}

/// Insert a blank row after the cursor's current line.
///
/// The new row gets the header's column count. Insertion is textual, at
/// the end offset of the cursor's line, so the inserted row is always a
/// complete line of its own. The returned cursor sits at the end of the
/// inserted text.
pub fn add_row(text: &str, position: usize) -> Result<TableEdit, TableError> {
    let loc = locate(text, position)?;
    let columns = table_columns(&loc.lines[loc.region.start]);
    let row = format!("\n|{}", format!("{BLANK_CELL}|").repeat(columns));

    let line_end = loc.starts[loc.line] + loc.lines[loc.line].chars().count();
    let new_text = splice_chars(text, line_end, &row);
    Ok(TableEdit {
        text: new_text,
        cursor: line_end + row.chars().count(),
    })
}

/// Insert a column after the cell containing the cursor, in every row of
/// the region. The separator row receives a dash cell, all other rows a
/// blank placeholder. The cursor offset is preserved numerically.
pub fn add_column(text: &str, position: usize) -> Result<TableEdit, TableError> {
    let mut loc = locate(text, position)?;
    let target = cursor_column(&loc, position);
    let separator = loc.region.separator_line();

    let start = loc.region.start;
    for (i, cells) in loc.region.rows.iter_mut().enumerate() {
        let cell = if start + i == separator { DASH_CELL } else { BLANK_CELL };
        // Rows shorter than the header: clamp rather than fail
        let at = (target + 1).min(cells.len());
        cells.insert(at, cell.to_string());
    }

    Ok(rewrite(loc, position))
}

/// Remove the cursor's row. Refuses on the header or separator row and
/// when the table would be left without a data row. The returned cursor
/// sits where the deleted line began.
pub fn delete_row(text: &str, position: usize) -> Result<TableEdit, TableError> {
    let loc = locate(text, position)?;
    if loc.line <= loc.region.start + 1 {
        return Err(TableError::ProtectedRow);
    }
    if loc.region.end - loc.region.start <= 2 {
        return Err(TableError::LastDataRow);
    }

    let cursor = loc.starts[loc.line];
    let mut lines = loc.lines;
    lines.remove(loc.line);
    Ok(TableEdit {
        text: lines.join("\n"),
        cursor,
    })
}

/// Remove the column containing the cursor from every row of the region.
/// Refuses when the header has two or fewer columns. Rows too short to
/// have the target cell are left alone. The cursor offset is preserved
/// numerically.
pub fn delete_column(text: &str, position: usize) -> Result<TableEdit, TableError> {
    let mut loc = locate(text, position)?;
    if table_columns(&loc.lines[loc.region.start]) <= 2 {
        return Err(TableError::LastColumn);
    }
    let target = cursor_column(&loc, position);

    for cells in loc.region.rows.iter_mut() {
        if target < cells.len() {
            cells.remove(target);
        }
    }

    Ok(rewrite(loc, position))
}

/// Synthesize a fresh pipe-table block: labeled header cells, a dash
/// separator, and `rows` blank data rows. Zero dimensions are bumped to 1;
/// the caller is expected to have clamped user input to its default.
pub fn create_table(rows: usize, cols: usize) -> String {
    let rows = rows.max(1);
    let cols = cols.max(1);

    let header: String = (1..=cols)
        .map(|i| format!(" Header {i} "))
        .collect::<Vec<_>>()
        .join("|");
    let separator = vec![DASH_CELL; cols].join("|");
    let data_row = vec![BLANK_CELL; cols].join("|");

    let mut block = format!("\n|{header}|\n|{separator}|\n");
    for _ in 0..rows {
        block.push('|');
        block.push_str(&data_row);
        block.push_str("|\n");
    }
    block
}

/// Map the cursor offset to its line and the surrounding valid region.
fn locate(text: &str, position: usize) -> Result<Located, TableError> {
    if position > text.chars().count() {
        return Err(TableError::NotInTable);
    }
    let lines: Vec<String> = text.split('\n').map(str::to_owned).collect();
    let starts = line_starts(text);
    let line = line_at_offset(&starts, position);

    if !lines[line].trim().starts_with('|') {
        return Err(TableError::NotInTable);
    }

    let (start, end) = find_table_boundaries(&lines, line);
    let region = TableRegion {
        start,
        end,
        rows: lines[start..=end]
            .iter()
            .map(|l| l.split('|').map(str::to_owned).collect())
            .collect(),
    };
    if !region.is_valid() {
        return Err(TableError::NotInTable);
    }

    Ok(Located {
        lines,
        starts,
        line,
        region,
    })
}

/// Index of the cell containing the cursor on its line: accumulate cell
/// lengths plus one separator per cell until the running total reaches the
/// cursor's intra-line offset. Shared by column insert and delete so both
/// break ties identically.
fn cursor_column(loc: &Located, position: usize) -> usize {
    let offset_in_line = position - loc.starts[loc.line];
    let cells = &loc.region.rows[loc.line - loc.region.start];

    let mut scanned = 0;
    for (i, cell) in cells.iter().enumerate() {
        scanned += cell.chars().count() + 1;
        if scanned >= offset_in_line {
            return i;
        }
    }
    0
}

/// Serialize a mutated region back into full text, keeping the cursor
/// offset numerically (clamped to the new length).
fn rewrite(loc: Located, position: usize) -> TableEdit {
    let mut lines = loc.lines;
    loc.region.apply_to(&mut lines);
    let text = lines.join("\n");
    let cursor = position.min(text.chars().count());
    TableEdit { text, cursor }
}

/// Insert `insert` at char offset `at`.
fn splice_chars(text: &str, at: usize, insert: &str) -> String {
    let byte = text
        .char_indices()
        .nth(at)
        .map(|(i, _)| i)
        .unwrap_or(text.len());
    let mut out = String::with_capacity(text.len() + insert.len());
    out.push_str(&text[..byte]);
    out.push_str(insert);
    out.push_str(&text[byte..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: &str = "|A|B|\n|---|---|\n|1|2|\n";

    #[test]
    fn test_is_inside_table_on_each_row() {
        // Offsets: header 0..=4, separator 6..=14, data row 16..=20
        for position in [0, 2, 5, 6, 10, 16, 17, 20] {
            assert!(is_inside_table(TABLE, position), "offset {position}");
        }
    }

    #[test]
    fn test_is_inside_table_outside() {
        let text = "intro\n\n|A|B|\n|---|---|\n|1|2|\n\ntail";
        assert!(!is_inside_table(text, 0)); // "intro"
        assert!(!is_inside_table(text, 6)); // blank line
        assert!(is_inside_table(text, 8)); // header
        assert!(!is_inside_table(text, text.chars().count() - 1)); // "tail"
    }

    #[test]
    fn test_is_inside_table_past_end() {
        assert!(!is_inside_table(TABLE, TABLE.chars().count() + 1));
    }

    #[test]
    fn test_is_inside_table_needs_three_lines() {
        // Header plus separator alone is not a table
        assert!(!is_inside_table("|A|B|\n|---|---|", 2));
    }

    #[test]
    fn test_find_table_boundaries_bounded_by_blank_lines() {
        let lines = ["before", "|A|", "|---|", "|1|", "", "|X|"];
        assert_eq!(find_table_boundaries(&lines, 2), (1, 3));
        assert_eq!(find_table_boundaries(&lines, 5), (5, 5));
    }

    #[test]
    fn test_find_table_boundaries_at_document_edges() {
        let lines = ["|A|", "|---|", "|1|"];
        assert_eq!(find_table_boundaries(&lines, 0), (0, 2));
        assert_eq!(find_table_boundaries(&lines, 2), (0, 2));
    }

    #[test]
    fn test_table_columns_ignores_outer_pipes() {
        assert_eq!(table_columns("| a | b |"), 2);
        assert_eq!(table_columns("|A|B|C|"), 3);
        assert_eq!(table_columns("| |"), 0);
    }

    #[test]
    fn test_add_row_after_data_row() {
        // Cursor inside "|1|2|"
        let edit = add_row(TABLE, 17).unwrap();
        assert_eq!(edit.text, "|A|B|\n|---|---|\n|1|2|\n| Cell | Cell |\n");
        // Cursor lands at the end of the inserted row
        assert_eq!(edit.cursor, 37);
    }

    #[test]
    fn test_add_row_matches_header_width() {
        let text = "| a | b | c |\n|---|---|---|\n| 1 | 2 | 3 |";
        let edit = add_row(text, text.chars().count() - 1).unwrap();
        let last = edit.text.lines().last().unwrap();
        assert_eq!(table_columns(last), 3);
    }

    #[test]
    fn test_add_row_repeated_grows_by_one_each_time() {
        let mut text = TABLE.to_string();
        let mut cursor = 17;
        for round in 1..=3 {
            let edit = add_row(&text, cursor).unwrap();
            text = edit.text;
            cursor = edit.cursor;
            let rows = text.lines().filter(|l| l.trim().starts_with('|')).count();
            assert_eq!(rows, 3 + round);
        }
        for line in text.lines().skip(3) {
            assert_eq!(table_columns(line), 2);
        }
    }

    #[test]
    fn test_add_row_outside_table_refused() {
        assert_eq!(add_row("plain text", 3), Err(TableError::NotInTable));
    }

    #[test]
    fn test_add_column_inserts_in_every_row() {
        // Cursor on the "1" cell of the data row
        let edit = add_column(TABLE, 17).unwrap();
        assert_eq!(edit.text, "| Cell |A|B|\n| -------- |---|---|\n| Cell |1|2|\n");
        assert_eq!(edit.cursor, 17);
    }

    #[test]
    fn test_add_column_clamps_short_rows() {
        let text = "|A|B|C|\n|---|---|---|\n|1|\n|x|y|z|";
        // Cursor on "z" in the last row (third cell)
        let position = text.chars().count() - 2;
        let edit = add_column(text, position).unwrap();
        let lines: Vec<&str> = edit.text.lines().collect();
        assert_eq!(table_columns(lines[0]), 4);
        // The short row gets the cell appended at its end instead of failing
        assert!(lines[2].contains("Cell"));
        assert_eq!(table_columns(lines[3]), 4);
    }

    #[test]
    fn test_add_then_delete_column_round_trips_shape() {
        let before: Vec<usize> = TABLE.lines().map(table_columns).collect();
        let added = add_column(TABLE, 17).unwrap();
        let removed = delete_column(&added.text, added.cursor).unwrap();
        let after: Vec<usize> = removed.text.lines().map(table_columns).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_delete_row_removes_cursor_line() {
        let text = "|A|B|\n|---|---|\n|1|2|\n|3|4|\n";
        // Cursor inside "|1|2|"
        let edit = delete_row(text, 17).unwrap();
        assert_eq!(edit.text, "|A|B|\n|---|---|\n|3|4|\n");
        // Cursor moves to where the deleted line began
        assert_eq!(edit.cursor, 16);
    }

    #[test]
    fn test_delete_row_refuses_header_and_separator() {
        let text = "|A|B|\n|---|---|\n|1|2|\n|3|4|\n";
        assert_eq!(delete_row(text, 2), Err(TableError::ProtectedRow));
        assert_eq!(delete_row(text, 8), Err(TableError::ProtectedRow));
    }

    #[test]
    fn test_delete_row_refuses_last_data_row() {
        assert_eq!(delete_row(TABLE, 17), Err(TableError::LastDataRow));
    }

    #[test]
    fn test_delete_column_removes_target_everywhere() {
        let text = "|A|B|C|\n|---|---|---|\n|1|2|3|\n";
        // Cursor inside the "B" cell of the header
        let edit = delete_column(text, 4).unwrap();
        assert_eq!(edit.text, "|A|C|\n|---|---|\n|1|3|\n");
    }

    #[test]
    fn test_delete_column_refuses_two_column_table() {
        assert_eq!(delete_column(TABLE, 2), Err(TableError::LastColumn));
    }

    #[test]
    fn test_delete_column_tolerates_short_rows() {
        let text = "|A|B|C|\n|---|---|---|\n|1|\n";
        // Cursor inside the "C" cell
        let edit = delete_column(text, 6).unwrap();
        assert_eq!(edit.text.lines().nth(2).unwrap(), "|1|");
    }

    #[test]
    fn test_create_table_default_shape() {
        let block = create_table(3, 3);
        let lines: Vec<&str> = block.trim_matches('\n').lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "| Header 1 | Header 2 | Header 3 |");
        assert_eq!(lines[1], "| -------- | -------- | -------- |");
        for data in &lines[2..] {
            assert_eq!(*data, "| Cell | Cell | Cell |");
        }
    }

    #[test]
    fn test_create_table_is_a_valid_region() {
        let block = create_table(1, 2);
        assert!(is_inside_table(&block, 1));
    }

    #[test]
    fn test_create_table_zero_bumped() {
        let block = create_table(0, 0);
        assert!(block.contains("| Header 1 |"));
        assert!(block.contains("| Cell |"));
    }

    #[test]
    fn test_cursor_column_tie_break() {
        let loc = locate(TABLE, 16).unwrap();
        // Start of the data row: the leading empty cell
        assert_eq!(cursor_column(&loc, 16), 0);
        // A cursor sitting on a cell boundary targets the preceding cell
        let loc = locate(TABLE, 19).unwrap();
        assert_eq!(cursor_column(&loc, 19), 1);
        let loc = locate(TABLE, 20).unwrap();
        assert_eq!(cursor_column(&loc, 20), 2);
    }
}
