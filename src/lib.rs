//! Command-line front-end of the vdriver compiler driver.
//!
//! [`args::parse_command_line`] turns the process arguments into a
//! finalized [`args::DriverConfig`] for the compilation pipeline.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;

pub use error::{catch_anomaly, DriverError, ANOMALY_EXIT_CODE, USAGE_EXIT_CODE};
