//! Top-level driver errors and their process exit codes.

use std::any::Any;
use std::panic::{self, UnwindSafe};

use thiserror::Error;

use crate::args::UsageError;
use crate::config::ConfigError;

/// Exit status for a malformed invocation.
pub const USAGE_EXIT_CODE: u8 = 1;

/// Exit status for an internal fault, distinct from usage errors.
pub const ANOMALY_EXIT_CODE: u8 = 129;

/// Errors that end a driver run.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("{0}")]
    Usage(#[from] UsageError),

    #[error("{0}")]
    Config(#[from] ConfigError),

    /// A fault inside the driver itself (e.g. a panic during the scan).
    #[error("Anomaly: {0}. Please report this as a bug.")]
    Anomaly(String),
}

impl DriverError {
    /// Build an anomaly from a caught panic payload.
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "uncaught exception".to_string()
        };
        DriverError::Anomaly(message)
    }

    /// Map error variant to the process exit status.
    pub fn exit_code(&self) -> u8 {
        match self {
            DriverError::Usage(_) | DriverError::Config(_) => USAGE_EXIT_CODE,
            DriverError::Anomaly(_) => ANOMALY_EXIT_CODE,
        }
    }
}

/// Run `f`, turning a panic that escapes it into [`DriverError::Anomaly`].
pub fn catch_anomaly<T, F>(f: F) -> Result<T, DriverError>
where
    F: FnOnce() -> Result<T, DriverError> + UnwindSafe,
{
    panic::catch_unwind(f).unwrap_or_else(|payload| Err(DriverError::from_panic(payload)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_exit_code() {
        let err = DriverError::from(UsageError::UnknownOption {
            token: "-x".to_string(),
        });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "unknown option -x");
    }

    #[test]
    fn test_anomaly_exit_code() {
        let err = DriverError::Anomaly("boom".to_string());
        assert_eq!(err.exit_code(), 129);
    }

    #[test]
    fn test_catch_anomaly_passes_results_through() {
        assert_eq!(catch_anomaly(|| Ok(7)).unwrap(), 7);

        let err = catch_anomaly::<(), _>(|| {
            Err(UsageError::MissingArgument {
                option: "-o".to_string(),
            }
            .into())
        })
        .unwrap_err();
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_catch_anomaly_maps_panic_to_anomaly_status() {
        let err = catch_anomaly::<(), _>(|| panic!("scan invariant broken")).unwrap_err();
        assert_eq!(err.exit_code(), ANOMALY_EXIT_CODE);
        assert!(matches!(err, DriverError::Anomaly(ref m) if m == "scan invariant broken"));
    }

    #[test]
    fn test_from_panic_payloads() {
        let err = DriverError::from_panic(Box::new("static message"));
        assert_eq!(err.to_string(), "Anomaly: static message. Please report this as a bug.");

        let err = DriverError::from_panic(Box::new(String::from("owned")));
        assert!(matches!(err, DriverError::Anomaly(ref m) if m == "owned"));

        let err = DriverError::from_panic(Box::new(42u32));
        assert!(matches!(err, DriverError::Anomaly(ref m) if m == "uncaught exception"));
    }
}
