//! Usage errors raised while scanning the command line.
//!
//! Every variant is fatal: the scan stops at the first one and the
//! driver exits with the usage status.

use thiserror::Error;

/// A malformed invocation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UsageError {
    /// An option needing an argument ran out of tokens.
    #[error("extra argument expected after option {option}")]
    MissingArgument { option: String },

    /// A `-`-prefixed token outside the option vocabulary.
    #[error("unknown option {token}")]
    UnknownOption { token: String },

    /// Worker count that is not an unsigned integer.
    #[error("integer expected after option {option}, got '{value}'")]
    InvalidInteger { option: String, value: String },

    /// Task-id list that is not a comma-separated list of integers.
    #[error(
        "option {option} expects a comma-separated list of integers followed by a file, got '{value}'"
    )]
    InvalidTaskList { option: String, value: String },

    /// A token that is not valid UTF-8, shown lossily.
    #[error("argument '{token}' is not valid UTF-8")]
    InvalidEncoding { token: String },

    /// Two different non-default compilation modes were requested.
    #[error("options {first} and {second} are mutually exclusive")]
    ExclusiveModes {
        first: &'static str,
        second: &'static str,
    },
}

impl UsageError {
    /// Short remediation hint printed under the error line.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            UsageError::MissingArgument { .. } => {
                Some("See the usage summary below for the syntax of supported options")
            }
            UsageError::UnknownOption { .. } => {
                Some("File names must not start with '-'; prefix them with './'")
            }
            UsageError::InvalidInteger { .. } => Some("Pass the number of workers, e.g. 4"),
            UsageError::InvalidTaskList { .. } => {
                Some("Pass task ids as e.g. 0,1,2 followed by the task file")
            }
            UsageError::InvalidEncoding { .. } => {
                Some("Rename the file so that its name is valid UTF-8")
            }
            UsageError::ExclusiveModes { .. } => {
                Some("Run the partial compilation and the conversion as separate invocations")
            }
        }
    }
}
