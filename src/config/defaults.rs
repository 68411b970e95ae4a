//! Default values and configuration structs with default implementations.

use serde::Deserialize;

/// Macro to generate default functions for serde attributes
macro_rules! default_fn {
    ($name:ident, $type:ty, $value:expr) => {
        pub(crate) fn $name() -> $type {
            $value
        }
    };
}

default_fn!(default_export_format, String, "csv".to_string());
default_fn!(default_export_directory, String, ".".to_string());
default_fn!(default_preview_limit, usize, 5);
default_fn!(default_true, bool, true);
default_fn!(default_log_level, String, "info".to_string());

/// Export defaults used when the CLI is not told otherwise
#[derive(Debug, Clone, Deserialize)]
pub struct ExportConfig {
    /// Format used when none is given (default: csv)
    #[serde(default = "default_export_format")]
    pub format: String,
    /// Directory that receives default-named exports (default: .)
    #[serde(default = "default_export_directory")]
    pub directory: String,
    /// Vehicles shown by export previews (default: 5)
    #[serde(default = "default_preview_limit")]
    pub preview_limit: usize,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: default_export_format(),
            directory: default_export_directory(),
            preview_limit: default_preview_limit(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct FleetConfig {
    /// Start with the demonstration fleet (default: true)
    #[serde(default = "default_true")]
    pub load_sample: bool,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            load_sample: default_true(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Minimum level for stderr logging; RUST_LOG takes precedence (default: info)
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}
