//! Driver settings, read from `config.toml`.
//!
//! Settings tune logging and diagnostics only; they never change how the
//! command line is interpreted.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{DiagnosticsConfig, LoggingConfig, Settings};
