//! Pipeline: ties all argument processing stages together.

use std::ffi::OsString;

use crate::args::error::UsageError;
use crate::args::finalize::{finalize, ParsedArgs};
use crate::args::interpreter::interpret;
use crate::args::registry::option_registry;
use crate::config::DiagnosticsConfig;

/// Decode process arguments (program name already skipped).
///
/// The first token that is not valid UTF-8 is a usage error.
pub fn decode_args<I>(args: I) -> Result<Vec<String>, UsageError>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|os| UsageError::InvalidEncoding {
                token: os.to_string_lossy().into_owned(),
            })
        })
        .collect()
}

/// Parse the driver command line with default diagnostics settings.
///
/// `raw_args` excludes the program name.
pub fn parse_command_line(raw_args: &[String]) -> Result<ParsedArgs, UsageError> {
    parse_command_line_with(raw_args, &DiagnosticsConfig::default())
}

/// Parse the driver command line.
///
/// This is the main entry point for the argument pipeline. A usage error
/// aborts before finalization; everything else ends up in
/// [`ParsedArgs::diagnostics`].
pub fn parse_command_line_with(
    raw_args: &[String],
    settings: &DiagnosticsConfig,
) -> Result<ParsedArgs, UsageError> {
    let registry = option_registry();

    // Stage 1: Interpret options, defer plain tokens
    let state = interpret(raw_args, &registry, settings.deprecation_warnings)?;

    // Stage 2: Fold extras and validate
    Ok(finalize(state))
}
