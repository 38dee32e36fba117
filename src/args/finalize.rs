//! Configuration finalizer: scan state → read-only configuration.

use crate::args::path::make_explicit;
use crate::args::state::{Diagnostic, ScanState};
use crate::args::types::{CompileTarget, DriverConfig};

/// Result of a successful command-line parse.
#[derive(Debug, Clone)]
pub struct ParsedArgs {
    pub config: DriverConfig,
    /// Non-fatal messages, in the order they were produced.
    pub diagnostics: Vec<Diagnostic>,
}

/// Fold deferred tokens into the compile list and run global checks.
///
/// Deferred files take the `echo_all` value at the *end* of the scan, not
/// the value at their position on the command line.
pub fn finalize(state: ScanState) -> ParsedArgs {
    let (mut config, extras, mut diagnostics) = state.into_parts();

    let verbose = config.echo_all;
    config
        .compile_list
        .extend(extras.iter().map(|name| CompileTarget {
            path: make_explicit(name),
            verbose,
        }));

    if config.output_name.is_some() && config.compile_list.len() > 1 {
        diagnostics.push(Diagnostic::error(
            "-o can be used only if there's one file to compile",
        ));
    }

    tracing::debug!(
        mode = ?config.compilation_mode,
        files = config.compile_list.len(),
        vio_files = config.vio_files.len(),
        vio_tasks = config.vio_tasks.len(),
        "command line finalized"
    );

    ParsedArgs {
        config,
        diagnostics,
    }
}
