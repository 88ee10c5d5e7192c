//! Toolbar formatting and preview tests

mod common;

use common::{buffer_to_string, empty_model, test_model};
use inkpad::messages::{DocumentMsg, FormatMsg, Msg, UiMsg};
use inkpad::update::update;

#[test]
fn test_wrap_formats() {
    let cases = [
        (FormatMsg::Bold, "**bold text**"),
        (FormatMsg::Italic, "_italic text_"),
        (FormatMsg::Strikethrough, "~~strikethrough text~~"),
        (FormatMsg::InlineCode, "`code`"),
    ];
    for (msg, expected) in cases {
        let mut model = empty_model();
        update(&mut model, Msg::Format(msg));
        assert_eq!(buffer_to_string(&model), expected);
    }
}

#[test]
fn test_prefix_formats() {
    let cases = [
        (FormatMsg::Heading1, "# Heading 1"),
        (FormatMsg::Heading3, "### Heading 3"),
        (FormatMsg::BulletList, "- List item"),
        (FormatMsg::NumberedList, "1. List item"),
        (FormatMsg::TaskItem, "- [ ] Task item"),
        (FormatMsg::Quote, "> Quote"),
    ];
    for (msg, expected) in cases {
        let mut model = empty_model();
        update(&mut model, Msg::Format(msg));
        assert_eq!(buffer_to_string(&model), expected);
    }
}

#[test]
fn test_insert_into_existing_text() {
    let mut model = test_model("before after", 7);
    update(&mut model, Msg::Format(FormatMsg::Bold));
    assert_eq!(buffer_to_string(&model), "before **bold text**after");
}

#[test]
fn test_insertion_updates_preview_and_word_count() {
    let mut model = empty_model();
    update(&mut model, Msg::Format(FormatMsg::Heading1));

    assert!(model.ui.preview_html.contains("<h1>"));
    assert_eq!(model.ui.word_count, 3); // "# Heading 1"
    assert!(model.autosave.is_pending());
}

#[test]
fn test_toc_insertion() {
    let doc = "# Intro\n\ntext\n\n## Usage Notes\n";
    let mut model = test_model(doc, doc.chars().count());
    update(&mut model, Msg::Format(FormatMsg::TableOfContents));

    let text = buffer_to_string(&model);
    assert!(text.contains("## Table of Contents"));
    assert!(text.contains("- [Intro](#intro)"));
    assert!(text.contains("  - [Usage Notes](#usage-notes)"));
}

#[test]
fn test_preview_renders_line_breaks_as_br() {
    let mut model = empty_model();
    update(
        &mut model,
        Msg::Document(DocumentMsg::SetContent("line one\nline two".to_string())),
    );
    assert!(model.ui.preview_html.contains("<br"));
}

#[test]
fn test_preview_renders_tables() {
    let mut model = empty_model();
    update(
        &mut model,
        Msg::Document(DocumentMsg::SetContent(
            "| A | B |\n|---|---|\n| 1 | 2 |".to_string(),
        )),
    );
    assert!(model.ui.preview_html.contains("<table>"));
    assert!(model.ui.preview_html.contains("<th>"));
}

#[test]
fn test_dark_mode_switches_preview_palette() {
    let mut model = test_model("# T", 0);
    update(&mut model, Msg::Ui(UiMsg::ToggleDarkMode));
    assert!(model.ui.preview_html.contains("#1e1e1e"));

    update(&mut model, Msg::Ui(UiMsg::ToggleDarkMode));
    assert!(model.ui.preview_html.contains("#ffffff"));
}

#[test]
fn test_clear_resets_preview_and_count() {
    let mut model = test_model("some words here", 0);
    update(&mut model, Msg::Document(DocumentMsg::Clear));

    assert_eq!(buffer_to_string(&model), "");
    assert_eq!(model.ui.word_count, 0);
}
