//! Markdown to HTML renderer using pulldown-cmark

use pulldown_cmark::{html, CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use super::PreviewTheme;

/// Language-aware syntax highlighter for fenced code blocks.
///
/// Returns highlighted HTML for `code`, or `None` to fall back to plain
/// escaped output (which the emitted page then highlights client-side).
pub trait Highlighter {
    fn highlight(&self, code: &str, language: Option<&str>) -> Option<String>;
}

/// Convert markdown to a complete HTML document with styling.
///
/// Tables, task lists, strikethrough and footnotes are enabled, and soft
/// line breaks render as `<br>`. Fenced code blocks are left for the
/// embedded highlight.js to colorize in the page.
pub fn markdown_to_html(markdown: &str, theme: &PreviewTheme) -> String {
    render(markdown, theme, None)
}

/// Same as [`markdown_to_html`], but fenced code blocks go through the
/// given highlighter first; blocks it declines fall back to plain output.
pub fn markdown_to_html_with(
    markdown: &str,
    theme: &PreviewTheme,
    highlighter: &dyn Highlighter,
) -> String {
    render(markdown, theme, Some(highlighter))
}

fn render(markdown: &str, theme: &PreviewTheme, highlighter: Option<&dyn Highlighter>) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_FOOTNOTES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;

    let parser = Parser::new_ext(markdown, options);
    let events = transform(parser, highlighter);

    let mut html_output = String::new();
    html::push_html(&mut html_output, events.into_iter());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/styles/{}.min.css">
    <style>{}</style>
</head>
<body>
    <div id="content">{}</div>
    <script src="https://cdnjs.cloudflare.com/ajax/libs/highlight.js/11.9.0/highlight.min.js"></script>
    <script>if (typeof hljs !== 'undefined') {{ hljs.highlightAll(); }}</script>
</body>
</html>"#,
        theme.highlight_style,
        generate_css(theme),
        html_output,
    )
}

/// Apply the event-level rewrites: soft breaks become hard breaks (the
/// authoring convention of the editor), and fenced code blocks are routed
/// through the highlighter when one is supplied.
fn transform<'a>(parser: Parser<'a>, highlighter: Option<&dyn Highlighter>) -> Vec<Event<'a>> {
    let mut events = Vec::new();
    // (language, accumulated code) while inside a fenced block
    let mut capture: Option<(Option<String>, String)> = None;

    for event in parser {
        if let Some((language, mut code)) = capture.take() {
            match event {
                Event::Text(text) => {
                    code.push_str(&text);
                    capture = Some((language, code));
                }
                Event::End(TagEnd::CodeBlock) => {
                    let highlighted = highlighter
                        .and_then(|h| h.highlight(&code, language.as_deref()));
                    match highlighted {
                        Some(body) => events.push(Event::Html(
                            format!(
                                "<pre><code{}>{body}</code></pre>",
                                class_attr(language.as_deref())
                            )
                            .into(),
                        )),
                        None => {
                            // Highlighter declined: re-emit the block untouched
                            let kind = match language {
                                Some(lang) => CodeBlockKind::Fenced(lang.into()),
                                None => CodeBlockKind::Indented,
                            };
                            events.push(Event::Start(Tag::CodeBlock(kind)));
                            events.push(Event::Text(code.into()));
                            events.push(Event::End(TagEnd::CodeBlock));
                        }
                    }
                }
                other => {
                    events.push(other);
                    capture = Some((language, code));
                }
            }
            continue;
        }

        match event {
            Event::SoftBreak => events.push(Event::HardBreak),
            Event::Start(Tag::CodeBlock(kind)) if highlighter.is_some() => {
                let language = match &kind {
                    CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
                    _ => None,
                };
                capture = Some((language, String::new()));
            }
            other => events.push(other),
        }
    }
    events
}

fn class_attr(language: Option<&str>) -> String {
    match language {
        Some(lang) => format!(" class=\"language-{}\"", escape_attr(lang)),
        None => String::new(),
    }
}

fn escape_attr(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, '-' | '_' | '+' | '.' | '#'))
        .collect()
}

/// Generate CSS from theme colors
fn generate_css(theme: &PreviewTheme) -> String {
    format!(
        r#"
* {{
    box-sizing: border-box;
}}

body {{
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
    font-size: 14px;
    line-height: 1.6;
    color: {text};
    background: {background};
    padding: 20px;
    max-width: 800px;
    margin: 0 auto;
}}

h1, h2, h3, h4, h5, h6 {{
    color: {heading};
    margin-top: 24px;
    margin-bottom: 16px;
    font-weight: 600;
    line-height: 1.25;
}}

h1, h2 {{
    border-bottom: 1px solid {border};
    padding-bottom: 0.3em;
}}

h1 {{ font-size: 2em; }}
h2 {{ font-size: 1.5em; }}
h3 {{ font-size: 1.25em; }}

p {{
    margin-top: 0;
    margin-bottom: 16px;
}}

code {{
    background: {code_background};
    padding: 0.2em 0.4em;
    border-radius: 3px;
    font-family: "SF Mono", "Fira Code", Consolas, "Liberation Mono", Menlo, Courier, monospace;
    font-size: 0.9em;
}}

pre {{
    background: {code_background};
    padding: 16px;
    border-radius: 6px;
    overflow-x: auto;
    margin: 0 0 16px 0;
}}

pre code {{
    background: none;
    padding: 0;
    font-size: 0.875em;
    line-height: 1.45;
}}

blockquote {{
    border-left: 4px solid {accent};
    margin: 0 0 16px 0;
    padding: 0 16px;
    color: {muted};
}}

a {{
    color: {link};
    text-decoration: none;
}}

a:hover {{
    text-decoration: underline;
}}

ul, ol {{
    padding-left: 2em;
    margin-top: 0;
    margin-bottom: 16px;
}}

hr {{
    height: 0.25em;
    padding: 0;
    margin: 24px 0;
    background-color: {border};
    border: 0;
}}

table {{
    border-collapse: collapse;
    border-spacing: 0;
    margin-bottom: 16px;
    width: 100%;
    overflow: auto;
}}

th, td {{
    padding: 6px 13px;
    border: 1px solid {border};
}}

th {{
    font-weight: 600;
    background: {code_background};
}}

tr:nth-child(2n) {{
    background: {code_background};
}}

img {{
    max-width: 100%;
}}

.task-list-item {{
    list-style-type: none;
}}

.task-list-item input {{
    margin: 0 0.2em 0.25em -1.6em;
    vertical-align: middle;
}}

del {{
    color: {muted};
}}
"#,
        text = theme.text,
        background = theme.background,
        heading = theme.heading,
        link = theme.link,
        code_background = theme.code_background,
        border = theme.border,
        accent = theme.accent,
        muted = theme.muted,
    )
}
