//! Ordered inline passes: code spans, then bold, then italic.
//!
//! Pass order is load-bearing. Bold must run before italic so a `**` pair
//! is never half-consumed as two `*` matches. The passes are sequential
//! global rewrites over a block's text and do not protect each other's
//! output; `.` never crosses a newline.

use once_cell::sync::Lazy;
use regex::Regex;

static CODE_SPAN: Lazy<Regex> = Lazy::new(|| Regex::new(r"`([^`]+)`").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());

/// Apply the inline passes to one block's text. Code span bodies are not
/// escaped here; only the fence extraction escapes anything.
pub(super) fn apply(text: &str) -> String {
    let text = CODE_SPAN.replace_all(text, "<code>$1</code>");
    let text = BOLD.replace_all(&text, "<strong>$1</strong>");
    ITALIC.replace_all(&text, "<em>$1</em>").into_owned()
}
