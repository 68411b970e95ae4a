//! Configuration for the fleet CLI.
//!
//! The config file is markdown with YAML frontmatter, by default at
//! `.fleet/config.md`. Every section is optional and falls back to defaults,
//! and a missing file is the same as an empty one.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub mod defaults;
pub mod validation;

pub use defaults::*;

/// Default location of the project config file.
pub const CONFIG_PATH: &str = ".fleet/config.md";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub fleet: FleetConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl Config {
    /// Load `.fleet/config.md` if present, otherwise defaults.
    pub fn load() -> Result<Self> {
        Self::load_or_default(Path::new(CONFIG_PATH))
    }

    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = match split_frontmatter(content) {
            (Some(frontmatter), _body) if !frontmatter.trim().is_empty() => {
                serde_yaml::from_str(&frontmatter).context("Failed to parse config frontmatter")?
            }
            (Some(_), _) => Config::default(),
            (None, _) => anyhow::bail!("Failed to extract frontmatter from config"),
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.export.validate()?;
        self.log.validate()
    }
}

/// Split `---`-delimited YAML frontmatter from the markdown body.
pub fn split_frontmatter(content: &str) -> (Option<String>, &str) {
    let content = content.trim();

    let Some(rest) = content.strip_prefix("---") else {
        return (None, content);
    };

    if let Some(end) = rest.find("\n---") {
        let frontmatter = rest[..end].to_string();
        let body = rest[end + 4..].trim_start();
        (Some(frontmatter), body)
    } else {
        (None, content)
    }
}
