use serde::{Deserialize, Serialize};

/// Root settings container (`config.toml`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Log output of the driver itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// EnvFilter directive (default: "warn"). `RUST_LOG` takes precedence.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Prefix log lines with RFC 3339 UTC timestamps (default: false).
    #[serde(default)]
    pub timestamps: bool,
}

/// User-facing diagnostics of the command-line scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Report use of deprecated options (default: true).
    #[serde(default = "default_true")]
    pub deprecation_warnings: bool,
    /// Print the option summary after a usage error (default: true).
    #[serde(default = "default_true")]
    pub usage_on_error: bool,
}

fn default_log_filter() -> String {
    "warn".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            timestamps: false,
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            deprecation_warnings: true,
            usage_on_error: true,
        }
    }
}
