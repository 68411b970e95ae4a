//! Validation of loaded configuration sections.

use anyhow::Result;

use super::defaults::{ExportConfig, LogConfig};
use crate::export::ExportFormat;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

impl ExportConfig {
    pub fn validate(&self) -> Result<()> {
        if self.format.parse::<ExportFormat>().is_err() {
            anyhow::bail!(
                "export.format must be one of txt, csv, json, got '{}'",
                self.format
            );
        }
        if self.preview_limit == 0 {
            anyhow::bail!("export.preview_limit must be greater than 0");
        }
        Ok(())
    }

    /// The configured default format. Only call after [`ExportConfig::validate`].
    pub fn default_format(&self) -> ExportFormat {
        self.format.parse().unwrap_or(ExportFormat::Csv)
    }
}

impl LogConfig {
    pub fn validate(&self) -> Result<()> {
        let level = self.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            anyhow::bail!(
                "log.level must be one of {}, got '{}'",
                LOG_LEVELS.join(", "),
                self.level
            );
        }
        Ok(())
    }
}
