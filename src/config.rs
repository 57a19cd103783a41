//! Saved CLI defaults.
//!
//! Flags can be persisted in a rc file (`--save`) so a project can pin its
//! document title and version. A global config is unioned with a local
//! `.docgenrc` override, and command-line flags win last.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub print: bool,
    pub title: Option<String>,
    pub doc_version: Option<String>,
    pub output: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge two flag sets; `other` wins for valued flags.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            print: self.print || other.print,
            title: other.title.clone().or_else(|| self.title.clone()),
            doc_version: other.doc_version.clone().or_else(|| self.doc_version.clone()),
            output: other.output.clone().or_else(|| self.output.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("docgen").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("docgen")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("docgen").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(".config").join("docgen").join("config");
        }
    }

    PathBuf::from(".docgenrc")
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".docgenrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# docgen defaults (saved with --save)".to_string());
    if flags.print {
        lines.push("--print".to_string());
    }
    if let Some(title) = &flags.title {
        lines.push(format!("--title={title}"));
    }
    if let Some(version) = &flags.doc_version {
        lines.push(format!("--doc-version={version}"));
    }
    if let Some(path) = &flags.output {
        lines.push(format!("--output={}", path.display()));
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token == "--print" {
            flags.print = true;
        } else if token == "--title" {
            if let Some(next) = tokens.get(i + 1) {
                flags.title = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--title=") {
            flags.title = Some(value.to_string());
        } else if token == "--doc-version" {
            if let Some(next) = tokens.get(i + 1) {
                flags.doc_version = Some(next.clone());
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--doc-version=") {
            flags.doc_version = Some(value.to_string());
        } else if token == "--output" || token == "-o" {
            if let Some(next) = tokens.get(i + 1) {
                flags.output = Some(PathBuf::from(next));
                i += 1;
            }
        } else if let Some(value) = token.strip_prefix("--output=") {
            flags.output = Some(PathBuf::from(value));
        }
        i += 1;
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = vec![
            "docgen".to_string(),
            "--print".to_string(),
            "--title".to_string(),
            "Billing".to_string(),
            "--doc-version=v2.1.0".to_string(),
            "--output".to_string(),
            "docs.html".to_string(),
            "README.md".to_string(),
        ];
        let flags = parse_flag_tokens(&args);
        assert!(flags.print);
        assert_eq!(flags.title, Some("Billing".to_string()));
        assert_eq!(flags.doc_version, Some("v2.1.0".to_string()));
        assert_eq!(flags.output, Some(PathBuf::from("docs.html")));
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            print: true,
            title: Some("From file".to_string()),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            title: Some("From cli".to_string()),
            doc_version: Some("v3".to_string()),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.print);
        assert_eq!(merged.title, Some("From cli".to_string()));
        assert_eq!(merged.doc_version, Some("v3".to_string()));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".docgenrc");
        let flags = ConfigFlags {
            print: true,
            title: Some("Billing".to_string()),
            doc_version: Some("v2.1.0".to_string()),
            output: Some(PathBuf::from("docs.html")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_load_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let flags = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(flags, ConfigFlags::default());
    }
}
