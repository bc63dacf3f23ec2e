//! Run configuration.
//!
//! A [`DigestConfig`] carries everything a run needs: where to read, where to
//! write, which layout to use and the page branding. It is resolved once at
//! startup from, in order of precedence:
//!
//! 1. Command-line flags (and their environment variables)
//! 2. An optional YAML config file passed with `--config`
//! 3. Built-in defaults
//!
//! # Config File
//!
//! ```yaml
//! input: data/search_results.json
//! output: public/index.html
//! layout: sidebar
//! title: AI Daily Digest
//! tagline: Daily AI news, articles, tutorials and fun finds
//! footer_link: https://github.com/example/daily-digest
//! ```

use crate::cli::Cli;
use crate::outputs::Layout;
use serde::Deserialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

pub const DEFAULT_INPUT: &str = "search_results.json";
pub const DEFAULT_OUTPUT: &str = "index.html";
pub const DEFAULT_TITLE: &str = "AI Daily Digest";
pub const DEFAULT_TAGLINE: &str = "Daily AI news, tech articles, tutorials and fun finds";

/// Contents of the optional YAML config file. Every key is optional.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub layout: Option<Layout>,
    pub title: Option<String>,
    pub tagline: Option<String>,
    pub footer_link: Option<String>,
}

/// Fully resolved settings for one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct DigestConfig {
    /// Search results file to read.
    pub input_path: PathBuf,
    /// HTML file to write.
    pub output_path: PathBuf,
    pub layout: Layout,
    /// Page heading, also used in the `<title>`.
    pub title: String,
    pub tagline: String,
    /// Link shown in the page footer, if any.
    pub footer_link: Option<String>,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT),
            output_path: PathBuf::from(DEFAULT_OUTPUT),
            layout: Layout::default(),
            title: DEFAULT_TITLE.to_string(),
            tagline: DEFAULT_TAGLINE.to_string(),
            footer_link: None,
        }
    }
}

impl DigestConfig {
    /// Merge CLI arguments over an optional config file over the defaults.
    pub fn resolve(cli: &Cli, file: Option<FileConfig>) -> Self {
        let file = file.unwrap_or_default();
        let defaults = DigestConfig::default();

        Self {
            input_path: cli
                .input
                .clone()
                .or(file.input)
                .unwrap_or(defaults.input_path),
            output_path: cli
                .output
                .clone()
                .or(file.output)
                .unwrap_or(defaults.output_path),
            layout: cli.layout.or(file.layout).unwrap_or(defaults.layout),
            title: file.title.unwrap_or(defaults.title),
            tagline: file.tagline.unwrap_or(defaults.tagline),
            footer_link: file.footer_link,
        }
    }
}

/// Read and parse a YAML config file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a valid config.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn load_file_config(path: &Path) -> Result<FileConfig, Box<dyn Error>> {
    let text = fs::read_to_string(path).await?;
    let parsed: FileConfig = serde_yaml::from_str(&text)?;
    info!("Loaded config file");
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bare_cli() -> Cli {
        Cli {
            input: None,
            output: None,
            layout: None,
            config: None,
            inspect: false,
        }
    }

    #[test]
    fn test_defaults_without_file() {
        let cli = bare_cli();
        let config = DigestConfig::resolve(&cli, None);
        assert_eq!(config, DigestConfig::default());
        assert_eq!(config.input_path, PathBuf::from("search_results.json"));
        assert_eq!(config.output_path, PathBuf::from("index.html"));
        assert_eq!(config.layout, Layout::Classic);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let file = FileConfig {
            input: Some(PathBuf::from("data/in.json")),
            layout: Some(Layout::Sidebar),
            title: Some("Morning Brief".to_string()),
            ..Default::default()
        };
        let cli = bare_cli();
        let config = DigestConfig::resolve(&cli, Some(file));
        assert_eq!(config.input_path, PathBuf::from("data/in.json"));
        assert_eq!(config.output_path, PathBuf::from("index.html"));
        assert_eq!(config.layout, Layout::Sidebar);
        assert_eq!(config.title, "Morning Brief");
        assert_eq!(config.tagline, DEFAULT_TAGLINE);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut cli = bare_cli();
        cli.input = Some(PathBuf::from("cli.json"));
        cli.layout = Some(Layout::Classic);
        let file = FileConfig {
            input: Some(PathBuf::from("file.json")),
            output: Some(PathBuf::from("file.html")),
            layout: Some(Layout::Sidebar),
            ..Default::default()
        };
        let config = DigestConfig::resolve(&cli, Some(file));
        assert_eq!(config.input_path, PathBuf::from("cli.json"));
        assert_eq!(config.output_path, PathBuf::from("file.html"));
        assert_eq!(config.layout, Layout::Classic);
    }

    #[test]
    fn test_parse_yaml_config() {
        let yaml = r#"
input: data/search_results.json
output: public/index.html
layout: sidebar
footer_link: https://github.com/example/daily-digest
"#;
        let parsed: FileConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("data/search_results.json")));
        assert_eq!(parsed.layout, Some(Layout::Sidebar));
        assert_eq!(
            parsed.footer_link.as_deref(),
            Some("https://github.com/example/daily-digest")
        );
        assert_eq!(parsed.title, None);
    }

    #[test]
    fn test_unknown_config_key_rejected() {
        let yaml = "input: a.json\ncolour: blue\n";
        let parsed: Result<FileConfig, _> = serde_yaml::from_str(yaml);
        assert!(parsed.is_err());
    }

    #[tokio::test]
    async fn test_load_file_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("digest.yaml");
        std::fs::write(&path, "layout: classic\ntitle: Weekend Edition\n").unwrap();

        let parsed = load_file_config(&path).await.unwrap();
        assert_eq!(parsed.layout, Some(Layout::Classic));
        assert_eq!(parsed.title.as_deref(), Some("Weekend Edition"));
    }

    #[tokio::test]
    async fn test_load_missing_config_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let result = load_file_config(&tmp.path().join("absent.yaml")).await;
        assert!(result.is_err());
    }
}
