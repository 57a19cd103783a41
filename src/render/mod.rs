//! Markdown parsing and HTML rendering.
//!
//! This module handles:
//! - Carving source text into block tokens (fences first, so nothing else
//!   can fire inside code)
//! - Applying the ordered inline passes to non-code blocks
//! - Emitting HTML fragments in source order

mod block;
mod inline;

pub use block::{Block, segment};

/// Render a markdown string to an HTML fragment.
///
/// Total over arbitrary input: unsupported or malformed constructs pass
/// through as plain text, and empty input yields an empty string. Plain
/// lines are emitted without a wrapping `<p>`.
///
/// # Examples
///
/// ```
/// use docgen::render::render;
///
/// let html = render("# Title\n\nSome **bold** text");
/// assert!(html.contains("<h1>Title</h1>"));
/// assert!(html.contains("<strong>bold</strong>"));
/// ```
pub fn render(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }
    let fragments: Vec<String> = block::segment(markdown)
        .into_iter()
        .map(render_block)
        .collect();
    fragments.join("\n")
}

fn render_block(block: Block) -> String {
    match block {
        Block::CodeFence(body) => {
            format!("<pre><code>{}</code></pre>", escape_code(&body))
        }
        Block::Heading(level, text) => format!("<h{level}>{text}</h{level}>"),
        Block::Table(rows) => render_table(&rows),
        Block::List(items) => {
            let mut out = String::from("<ul>");
            for item in &items {
                out.push_str("<li>");
                out.push_str(&inline::apply(item));
                out.push_str("</li>");
            }
            out.push_str("</ul>");
            out
        }
        Block::Rule => "<hr/>".to_string(),
        Block::Paragraph(text) => inline::apply(&text),
    }
}

/// Render one table run.
///
/// Separator rows are consumed without output; the first remaining row
/// becomes the `<th>` row and every later row a `<td>` row. Cells are
/// trimmed here and still receive the inline passes.
fn render_table(rows: &[Vec<String>]) -> String {
    let mut out = String::from("<table>");
    let mut header_done = false;
    for row in rows {
        if is_separator_row(row) {
            continue;
        }
        let tag = if header_done { "td" } else { "th" };
        header_done = true;
        out.push_str("<tr>");
        for cell in row {
            let body = inline::apply(cell.trim());
            out.push_str(&format!("<{tag}>{body}</{tag}>"));
        }
        out.push_str("</tr>");
    }
    out.push_str("</table>");
    out
}

/// A separator row's cells are all non-empty after trimming and contain
/// only `-` and `:`.
fn is_separator_row(row: &[String]) -> bool {
    row.iter().all(|cell| {
        let trimmed = cell.trim();
        !trimmed.is_empty() && trimmed.chars().all(|c| c == '-' || c == ':')
    })
}

/// Escape the two HTML-unsafe characters inside code bodies. Nothing else
/// is escaped anywhere in the pipeline.
fn escape_code(body: &str) -> String {
    body.replace('<', "&lt;").replace('>', "&gt;")
}
