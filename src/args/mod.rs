//! Command-line handling for the compiler driver.
//!
//! ```text
//! Raw tokens → Interpret (registry handlers, deferred extras) → Finalize → DriverConfig
//! ```
//!
//! The scan is a single left-to-right pass over a [`TokenCursor`]. Options
//! with variable arity consume tokens until the next one that looks like an
//! option. Plain tokens are only turned into compile targets once the whole
//! command line has been seen.

mod cursor;
mod error;
mod finalize;
mod interpreter;
mod path;
mod pipeline;
mod registry;
mod state;
mod types;

pub use cursor::{is_not_option, is_option_like, TokenCursor};
pub use error::UsageError;
pub use finalize::{finalize, ParsedArgs};
pub use interpreter::interpret;
pub use path::make_explicit;
pub use pipeline::{decode_args, parse_command_line, parse_command_line_with};
pub use registry::{lookup, option_registry, usage, Handler, OptionArity, OptionDef};
pub use state::{Diagnostic, ScanState, Severity};
pub use types::{CompilationMode, CompileTarget, DriverConfig, GlobOutput, VioTask};
