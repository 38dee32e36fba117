use std::io::{self, Write};
use std::panic;
use std::process::ExitCode;

use vdriver::args::{decode_args, option_registry, parse_command_line_with, usage};
use vdriver::config::Settings;
use vdriver::logging::init_tracing;
use vdriver::{catch_anomaly, DriverError};

fn main() -> ExitCode {
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            let err = DriverError::from(e);
            eprintln!("Error: {}", err);
            return ExitCode::from(err.exit_code());
        }
    };
    init_tracing(&settings.logging);

    // Panics are reported as anomalies below, not by the default hook.
    panic::set_hook(Box::new(|info| tracing::error!("{}", info)));

    let outcome = catch_anomaly(|| run(&settings));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, &settings);
            ExitCode::from(err.exit_code())
        }
    }
}

/// Parse the command line and hand the configuration to the pipeline (stdout).
fn run(settings: &Settings) -> Result<(), DriverError> {
    let raw_args = decode_args(std::env::args_os().skip(1))?;
    let parsed = parse_command_line_with(&raw_args, &settings.diagnostics)?;

    for diagnostic in &parsed.diagnostics {
        eprintln!("{}", diagnostic);
    }

    let json = serde_json::to_string_pretty(&parsed.config)
        .map_err(|e| DriverError::Anomaly(format!("cannot serialize configuration: {}", e)))?;
    writeln!(io::stdout().lock(), "{}", json)
        .map_err(|e| DriverError::Anomaly(format!("cannot write configuration: {}", e)))?;
    Ok(())
}

fn report_error(err: &DriverError, settings: &Settings) {
    eprintln!("Error: {}", err);

    if let DriverError::Usage(usage_err) = err {
        if let Some(hint) = usage_err.hint() {
            eprintln!("{}", hint);
        }
        if settings.diagnostics.usage_on_error {
            eprintln!();
            eprint!("{}", usage(&option_registry()));
        }
    }
}
