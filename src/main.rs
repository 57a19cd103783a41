//! Docgen - render Markdown API docs to HTML.
//!
//! # Usage
//!
//! ```bash
//! docgen docs.md
//! docgen --print --title Billing --doc-version v2.1.0 docs.md
//! docgen --print docs.md -o docs.html
//! cat docs.md | docgen -
//! ```

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use docgen::config::{
    ConfigFlags, clear_config_flags, global_config_path, load_config_flags, local_override_path,
    parse_flag_tokens, save_config_flags,
};
use docgen::print::build_document;
use docgen::render::render;

/// Render Markdown API documentation to HTML
#[derive(Parser, Debug)]
#[command(name = "docgen", version, about, long_about = None)]
struct Cli {
    /// Markdown file to render, or `-` to read from stdin
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Emit a complete print-ready document instead of an HTML fragment
    #[arg(long)]
    print: bool,

    /// Document title for the print page
    #[arg(long, value_name = "TITLE")]
    title: Option<String>,

    /// Version string shown next to the title
    #[arg(long, value_name = "VERSION")]
    doc_version: Option<String>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Save current command-line flags as defaults in .docgenrc
    #[arg(long)]
    save: bool,

    /// Clear saved defaults in .docgenrc
    #[arg(long)]
    clear: bool,
}

/// Initial title/version shown by the original editor UI; used when
/// neither the config file nor the command line supplies a value.
const DEFAULT_TITLE: &str = "My API";
const DEFAULT_VERSION: &str = "v1.0.0";

fn read_source(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read stdin")?;
        return Ok(source);
    }
    if !file.exists() {
        anyhow::bail!("File not found: {}", file.display());
    }
    fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let raw_args = std::env::args().collect::<Vec<_>>();
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = parse_flag_tokens(&raw_args);

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);

    let source = read_source(&cli.file)?;
    let html = render(&source);

    let rendered = if effective.print {
        let title = effective.title.as_deref().unwrap_or(DEFAULT_TITLE);
        let version = effective.doc_version.as_deref().unwrap_or(DEFAULT_VERSION);
        build_document(title, version, &html)
    } else {
        html
    };

    match &effective.output {
        Some(path) => fs::write(path, &rendered)
            .with_context(|| format!("Failed to write {}", path.display()))?,
        None => println!("{rendered}"),
    }
    Ok(())
}
