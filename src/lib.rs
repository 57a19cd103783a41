// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. render::render)
    clippy::module_name_repetitions
)]

//! # Docgen
//!
//! A Markdown-subset renderer for API documentation, with print-ready
//! HTML export.
//!
//! Docgen converts generated Markdown docs into HTML fragments for
//! preview, and wraps them into self-contained pages for PDF export:
//! - Headings (`#` through `####`), tables, fenced code blocks
//! - Inline code, bold, italic, unordered lists, horizontal rules
//! - A fixed print stylesheet (serif body, monospace code, print media rules)
//!
//! ## Architecture
//!
//! Both core operations are pure functions over strings:
//! - **Render**: markdown in, HTML fragment out
//! - **Print**: title + version + fragment in, full document out
//!
//! The renderer carves the source into block tokens first (code fence,
//! heading, table, list, rule, paragraph) and only then applies the inline
//! passes, so block rules can never fire inside extracted code.
//!
//! ## Modules
//!
//! - [`render`]: Markdown parsing and HTML rendering
//! - [`print`]: Print document assembly
//! - [`config`]: Saved CLI defaults (`.docgenrc`)

pub mod config;
pub mod print;
pub mod render;

/// Re-export commonly used items
pub mod prelude {
    pub use crate::print::build_document;
    pub use crate::render::{Block, render};
}
