//! Toolbar formatting handlers
//!
//! Each action builds the Markdown snippet the original toolbar inserted
//! and runs it through the insert-at-cursor pipeline. The table of
//! contents is the one action that reads the document instead of blindly
//! inserting.

use crate::commands::Cmd;
use crate::messages::FormatMsg;
use crate::model::{EditorModel, Severity};

use super::document::after_edit;

pub fn update_format(model: &mut EditorModel, msg: FormatMsg) -> Option<Cmd> {
    let snippet = match msg {
        FormatMsg::Bold => wrap("**", "bold text"),
        FormatMsg::Italic => wrap("_", "italic text"),
        FormatMsg::Strikethrough => wrap("~~", "strikethrough text"),
        FormatMsg::InlineCode => wrap("`", "code"),
        FormatMsg::Heading1 => prefix("# ", "Heading 1"),
        FormatMsg::Heading2 => prefix("## ", "Heading 2"),
        FormatMsg::Heading3 => prefix("### ", "Heading 3"),
        FormatMsg::BulletList => prefix("- ", "List item"),
        FormatMsg::NumberedList => prefix("1. ", "List item"),
        FormatMsg::TaskItem => prefix("- [ ] ", "Task item"),
        FormatMsg::Quote => prefix("> ", "Quote"),
        FormatMsg::HorizontalRule => "\n---\n".to_string(),
        FormatMsg::Link => "[link text](URL)".to_string(),
        FormatMsg::Image => "![alt text](image URL)".to_string(),
        FormatMsg::TableOfContents => return insert_toc(model),
    };

    model.document.insert_at_cursor(&snippet);
    after_edit(model);
    Some(Cmd::redraw_with_cursor(model.document.cursor()))
}

fn wrap(marker: &str, placeholder: &str) -> String {
    format!("{marker}{placeholder}{marker}")
}

fn prefix(marker: &str, placeholder: &str) -> String {
    format!("{marker}{placeholder}")
}

/// Build and insert a table of contents from `#`..`###` headings.
fn insert_toc(model: &mut EditorModel) -> Option<Cmd> {
    let text = model.document.text();
    let headings: Vec<(usize, &str)> = text.lines().filter_map(heading_of).collect();

    if headings.is_empty() {
        let lifetime = model.notification_lifetime();
        model
            .ui
            .notify("No headings found in the document", Severity::Info, lifetime);
        return Some(Cmd::Redraw);
    }

    let mut toc = String::from("\n## Table of Contents\n\n");
    for (level, heading) in headings {
        let indent = "  ".repeat(level - 1);
        toc.push_str(&format!("{indent}- [{heading}](#{})\n", slugify(heading)));
    }
    toc.push('\n');

    model.document.insert_at_cursor(&toc);
    after_edit(model);
    Some(Cmd::redraw_with_cursor(model.document.cursor()))
}

/// `#`, `##` or `###` followed by whitespace and non-empty text.
fn heading_of(line: &str) -> Option<(usize, &str)> {
    let level = line.chars().take_while(|&c| c == '#').count();
    if !(1..=3).contains(&level) {
        return None;
    }
    let rest = &line[level..];
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let heading = rest.trim();
    (!heading.is_empty()).then_some((level, heading))
}

/// GitHub-style anchor slug: lowercase, punctuation dropped, spaces to
/// hyphens.
fn slugify(heading: &str) -> String {
    let kept: String = heading
        .to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace() || matches!(c, '-' | '_'))
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join("-")
}
