//! Scan state threaded through the option handlers.

use std::fmt;

use serde::Serialize;

use crate::args::error::UsageError;
use crate::args::types::{CompilationMode, DriverConfig};

/// Severity of a non-fatal diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

/// A message produced during the scan that does not stop it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

impl Diagnostic {
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Warning => write!(f, "Warning: {}", self.message),
            Severity::Error => write!(f, "Error: {}", self.message),
        }
    }
}

/// Accumulated result of the scan, before finalization.
///
/// Handlers take it by value and hand back the next state.
#[derive(Debug, Clone)]
pub struct ScanState {
    pub config: DriverConfig,
    extras: Vec<String>,
    diagnostics: Vec<Diagnostic>,
    deprecation_warnings: bool,
    output_state_warned: bool,
}

impl ScanState {
    pub fn new(deprecation_warnings: bool) -> Self {
        Self {
            config: DriverConfig::default(),
            extras: Vec::new(),
            diagnostics: Vec::new(),
            deprecation_warnings,
            output_state_warned: false,
        }
    }

    /// Keep a non-option token for the finalizer.
    pub fn defer(&mut self, token: String) {
        self.extras.push(token);
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Record a deprecation notice, unless disabled in the settings.
    pub fn deprecated(&mut self, message: impl Into<String>) {
        if self.deprecation_warnings {
            self.push(Diagnostic::warning(message));
        }
    }

    /// Deprecation notice for `-outputstate`, at most once per scan.
    pub fn deprecated_output_state(&mut self) {
        if !self.output_state_warned {
            self.output_state_warned = true;
            self.deprecated(
                "option -outputstate is deprecated and may be removed in a future version",
            );
        }
    }

    /// Move to a non-default compilation mode.
    ///
    /// Accepted from Standard, idempotent for the current mode, fatal
    /// for any other mode.
    pub fn set_mode(&mut self, mode: CompilationMode) -> Result<(), UsageError> {
        let current = self.config.compilation_mode;
        if current == CompilationMode::Standard || current == mode {
            self.config.compilation_mode = mode;
            return Ok(());
        }
        Err(UsageError::ExclusiveModes {
            first: current.option_name(),
            second: mode.option_name(),
        })
    }

    pub fn extras(&self) -> &[String] {
        &self.extras
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub(crate) fn into_parts(self) -> (DriverConfig, Vec<String>, Vec<Diagnostic>) {
        (self.config, self.extras, self.diagnostics)
    }
}
