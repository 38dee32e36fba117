//! Option interpreter: raw tokens → scan state.
//!
//! Walks the cursor one option at a time, applying the registry handler
//! for recognized options and deferring plain tokens.

use crate::args::cursor::{is_not_option, is_option_like, TokenCursor};
use crate::args::error::UsageError;
use crate::args::path::make_explicit;
use crate::args::registry::{lookup, OptionDef};
use crate::args::state::ScanState;
use crate::args::types::{CompilationMode, CompileTarget, GlobOutput, VioTask};

/// Scan `raw_args` against the registry.
///
/// Stops at the first usage error. Unknown `-`-prefixed tokens are
/// rejected here; everything else without a handler is deferred.
pub fn interpret(
    raw_args: &[String],
    registry: &[OptionDef],
    deprecation_warnings: bool,
) -> Result<ScanState, UsageError> {
    let mut cursor = TokenCursor::new(raw_args);
    let mut state = ScanState::new(deprecation_warnings);

    while let Some(token) = cursor.next_token() {
        state = match lookup(registry, &token) {
            Some(def) => {
                tracing::debug!(option = %token, "applying option");
                (def.handler)(&token, state, &mut cursor)?
            }
            None if is_option_like(&token) => {
                return Err(UsageError::UnknownOption { token });
            }
            None => {
                tracing::trace!(token = %token, "deferring token");
                state.defer(token);
                state
            }
        };
    }

    Ok(state)
}

pub(crate) fn ignored(
    option: &str,
    mut state: ScanState,
    _: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.deprecated(format!("option {} deprecated, ignored", option));
    Ok(state)
}

pub(crate) fn image(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    cursor.take_next(option)?;
    state.deprecated(format!("option {} deprecated, ignored", option));
    Ok(state)
}

pub(crate) fn verbose(
    _: &str,
    mut state: ScanState,
    _: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.config.echo_all = true;
    Ok(state)
}

pub(crate) fn output_name(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.config.output_name = Some(cursor.take_next(option)?);
    Ok(state)
}

pub(crate) fn quick(
    _: &str,
    mut state: ScanState,
    _: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.set_mode(CompilationMode::Partial)?;
    Ok(state)
}

pub(crate) fn check_vio_tasks(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    let ids = cursor.take_next(option)?;
    let task_ids = parse_task_list(option, &ids)?;
    let task_file = cursor.take_next(option)?;
    state.config.vio_tasks.push(VioTask { task_ids, task_file });
    Ok(state)
}

pub(crate) fn schedule_vio_checking(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.config.vio_checking = true;
    schedule_vio_files(option, state, cursor)
}

pub(crate) fn schedule_vio2vo(
    option: &str,
    state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    schedule_vio_files(option, state, cursor)
}

/// `<jobs> <file> [<file>...]`, the run ending at the next option-like token.
fn schedule_vio_files(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    let jobs = cursor.take_next(option)?;
    state.config.vio_files_concurrency = parse_jobs(option, &jobs)?;

    let first = cursor.take_next(option)?;
    state.config.vio_files.push(first);
    let rest = cursor.collect_run(is_not_option);
    state.config.vio_files.extend(rest);
    Ok(state)
}

pub(crate) fn vio2vo(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    let file = cursor.take_next(option)?;
    state.config.compile_list.push(CompileTarget {
        path: make_explicit(&file),
        verbose: false,
    });
    state.set_mode(CompilationMode::PartialToFinal)?;
    Ok(state)
}

pub(crate) fn output_state(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.config.output_state_file = Some(cursor.take_next(option)?);
    state.deprecated_output_state();
    Ok(state)
}

pub(crate) fn no_glob(
    _: &str,
    mut state: ScanState,
    _: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.config.glob_output = GlobOutput::None;
    Ok(state)
}

pub(crate) fn dump_glob(
    option: &str,
    mut state: ScanState,
    cursor: &mut TokenCursor,
) -> Result<ScanState, UsageError> {
    state.config.glob_output = GlobOutput::SingleFile(cursor.take_next(option)?);
    Ok(state)
}

fn parse_jobs(option: &str, value: &str) -> Result<usize, UsageError> {
    value.parse().map_err(|_| UsageError::InvalidInteger {
        option: option.to_string(),
        value: value.to_string(),
    })
}

/// `"1,2,3"` → `[1, 2, 3]`. Empty fields are skipped.
fn parse_task_list(option: &str, value: &str) -> Result<Vec<usize>, UsageError> {
    value
        .split(',')
        .filter(|field| !field.is_empty())
        .map(|field| {
            field.parse().map_err(|_| UsageError::InvalidTaskList {
                option: option.to_string(),
                value: value.to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::registry::option_registry;

    fn scan(args: &[&str]) -> Result<ScanState, UsageError> {
        let raw: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        interpret(&raw, &option_registry(), true)
    }

    #[test]
    fn test_task_list_skips_empty_fields() {
        assert_eq!(parse_task_list("-check-vio-tasks", "1,,2,").unwrap(), vec![1, 2]);
        assert!(parse_task_list("-check-vio-tasks", "").unwrap().is_empty());
    }

    #[test]
    fn test_task_list_rejects_garbage() {
        assert!(matches!(
            parse_task_list("-check-vio-tasks", "1,x"),
            Err(UsageError::InvalidTaskList { .. })
        ));
        assert!(parse_task_list("-check-vio-tasks", "-1").is_err());
    }

    #[test]
    fn test_jobs_must_be_unsigned() {
        assert_eq!(parse_jobs("-schedule-vio2vo", "8").unwrap(), 8);
        assert!(parse_jobs("-schedule-vio2vo", "-2").is_err());
        assert!(parse_jobs("-schedule-vio2vo", "four").is_err());
    }

    #[test]
    fn test_extras_deferred_in_order() {
        let state = scan(&["b.v", "-verbose", "a.v"]).unwrap();
        assert_eq!(state.extras(), ["b.v".to_string(), "a.v".to_string()]);
        assert!(state.config.compile_list.is_empty());
    }

    #[test]
    fn test_unknown_option_rejected() {
        assert_eq!(
            scan(&["a.v", "-bogus"]).unwrap_err(),
            UsageError::UnknownOption {
                token: "-bogus".to_string()
            }
        );
    }

    #[test]
    fn test_alias_reported_as_written() {
        let state = scan(&["-byte"]).unwrap();
        assert_eq!(state.diagnostics()[0].message, "option -byte deprecated, ignored");
    }

    #[test]
    fn test_image_discards_argument() {
        let state = scan(&["-image", "coq.img", "x.v"]).unwrap();
        assert_eq!(state.extras(), ["x.v".to_string()]);
    }

    #[test]
    fn test_check_vio_tasks_missing_file() {
        assert_eq!(
            scan(&["-check-vio-tasks", "1"]).unwrap_err(),
            UsageError::MissingArgument {
                option: "-check-vio-tasks".to_string()
            }
        );
    }

    #[test]
    fn test_schedule_requires_one_file() {
        assert!(matches!(
            scan(&["-schedule-vio2vo", "2"]),
            Err(UsageError::MissingArgument { .. })
        ));
    }

    #[test]
    fn test_schedule_first_file_taken_even_if_option_like() {
        let state = scan(&["-schedule-vio2vo", "2", "-weird.vio"]).unwrap();
        assert_eq!(state.config.vio_files, vec!["-weird.vio".to_string()]);
    }
}
