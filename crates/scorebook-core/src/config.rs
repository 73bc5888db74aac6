//! scorebook configuration.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// How a store is printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `Class: <name> | Score: <score>` lines.
    #[default]
    Text,
    Table,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format: {other} (expected text, table or json)"
            )),
        }
    }
}

/// Top-level scorebook configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScorebookConfig {
    /// Score file used when no `--file` is given.
    #[serde(default)]
    pub default_file: Option<PathBuf>,
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order when no path is given:
/// 1. `scorebook.toml` in the current directory
/// 2. `~/.config/scorebook/config.toml`
///
/// Environment variable overrides: `SCOREBOOK_FILE`, `SCOREBOOK_FORMAT`.
pub fn load_config_from(path: Option<&Path>) -> Result<ScorebookConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("scorebook.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!("loaded config from {}", path.display());
            config
        }
        None => ScorebookConfig::default(),
    };

    apply_env_overrides(
        &mut config,
        std::env::var("SCOREBOOK_FILE").ok(),
        std::env::var("SCOREBOOK_FORMAT").ok(),
    )?;

    Ok(config)
}

/// Parse a TOML string into a config (useful for testing).
pub fn parse_config_str(content: &str) -> Result<ScorebookConfig> {
    Ok(toml::from_str(content)?)
}

fn apply_env_overrides(
    config: &mut ScorebookConfig,
    file: Option<String>,
    format: Option<String>,
) -> Result<()> {
    if let Some(file) = file.filter(|f| !f.is_empty()) {
        config.default_file = Some(PathBuf::from(file));
    }
    if let Some(format) = format.filter(|f| !f.is_empty()) {
        config.format = format
            .parse()
            .map_err(|e: String| anyhow::anyhow!("SCOREBOOK_FORMAT: {e}"))?;
    }
    Ok(())
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("scorebook"))
}
