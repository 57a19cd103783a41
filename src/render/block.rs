//! Block segmentation of markdown source.

/// One structural unit of the source text.
///
/// Segmentation is line-based, first-match-wins, and covers the whole
/// input with non-overlapping blocks. Code fences are claimed before any
/// other rule looks at a line, so pipes, asterisks, backticks, and hashes
/// inside a fence are inert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Fenced code body: raw text, one trailing newline per body line.
    CodeFence(String),
    /// Heading level (1 through 4) and its verbatim text.
    Heading(u8, String),
    /// Table rows as raw cell strings, separator rows included.
    Table(Vec<Vec<String>>),
    /// List item texts, one per `- ` line.
    List(Vec<String>),
    /// Horizontal rule (a line that is exactly `---`).
    Rule,
    /// A single unclaimed source line, passed through as plain text.
    Paragraph(String),
}

/// Carve the source into blocks, left to right.
pub fn segment(source: &str) -> Vec<Block> {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut blocks = Vec::new();
    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if line.starts_with("```") {
            // The language tag after the opening backticks is discarded.
            if let Some(len) = lines[i + 1..].iter().position(|l| l.starts_with("```")) {
                let mut body = String::new();
                for body_line in &lines[i + 1..i + 1 + len] {
                    body.push_str(body_line);
                    body.push('\n');
                }
                blocks.push(Block::CodeFence(body));
                i += len + 2;
                continue;
            }
            // No closing fence: the opener degrades to plain text and
            // segmentation resumes on the next line.
            blocks.push(Block::Paragraph(line.to_string()));
            i += 1;
            continue;
        }

        if let Some((level, text)) = heading(line) {
            blocks.push(Block::Heading(level, text.to_string()));
            i += 1;
            continue;
        }

        if is_table_line(line) {
            let mut rows = Vec::new();
            while i < lines.len() && is_table_line(lines[i]) {
                rows.push(split_cells(lines[i]));
                i += 1;
            }
            blocks.push(Block::Table(rows));
            continue;
        }

        if let Some(item) = list_item(line) {
            let mut items = vec![item.to_string()];
            i += 1;
            while i < lines.len() {
                let Some(next) = list_item(lines[i]) else { break };
                items.push(next.to_string());
                i += 1;
            }
            blocks.push(Block::List(items));
            continue;
        }

        if line == "---" {
            blocks.push(Block::Rule);
            i += 1;
            continue;
        }

        blocks.push(Block::Paragraph(line.to_string()));
        i += 1;
    }
    blocks
}

/// Match a heading line: one to four `#`, a space, then non-empty text.
///
/// Counting the full hash run keeps a longer prefix from being consumed
/// as a shorter one; five or more hashes fall through to plain text.
fn heading(line: &str) -> Option<(u8, &str)> {
    let level = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=4).contains(&level) {
        return None;
    }
    let text = line[level..].strip_prefix(' ')?;
    if text.is_empty() {
        return None;
    }
    Some((u8::try_from(level).ok()?, text))
}

/// A table line starts and ends with a pipe, with at least one character
/// between them.
fn is_table_line(line: &str) -> bool {
    line.len() >= 3 && line.starts_with('|') && line.ends_with('|')
}

/// Split a table line on `|`, discarding the empty leading and trailing
/// segments produced by the outer pipes. Cells keep their whitespace;
/// trimming happens at render time.
fn split_cells(line: &str) -> Vec<String> {
    let parts: Vec<&str> = line.split('|').collect();
    parts[1..parts.len() - 1]
        .iter()
        .map(|cell| (*cell).to_string())
        .collect()
}

/// Match a `- ` list item with non-empty text.
fn list_item(line: &str) -> Option<&str> {
    let text = line.strip_prefix("- ")?;
    (!text.is_empty()).then_some(text)
}
