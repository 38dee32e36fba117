//! Token cursor: the residual, not yet interpreted command-line tokens.

use std::collections::VecDeque;

use crate::args::error::UsageError;

/// Mutable cursor over the remaining argument tokens.
///
/// Only moves forward. Option handlers pull their arguments through it,
/// the interpreter loop pulls option tokens.
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    tokens: VecDeque<String>,
}

impl TokenCursor {
    pub fn new(raw_args: &[String]) -> Self {
        Self {
            tokens: raw_args.iter().cloned().collect(),
        }
    }

    /// Pop the next token, or `None` once the stream is exhausted.
    pub fn next_token(&mut self) -> Option<String> {
        self.tokens.pop_front()
    }

    /// Take the argument required by `option`.
    pub fn take_next(&mut self, option: &str) -> Result<String, UsageError> {
        self.tokens
            .pop_front()
            .ok_or_else(|| UsageError::MissingArgument {
                option: option.to_string(),
            })
    }

    pub fn peek_next(&self) -> Option<&str> {
        self.tokens.front().map(String::as_str)
    }

    /// Consume tokens while `pred` accepts the next one.
    ///
    /// Stops at the first rejected token (left in place) or at end of input.
    pub fn collect_run<P>(&mut self, pred: P) -> Vec<String>
    where
        P: Fn(&str) -> bool,
    {
        let mut run = Vec::new();
        while let Some(next) = self.peek_next() {
            if !pred(next) {
                break;
            }
            if let Some(token) = self.tokens.pop_front() {
                run.push(token);
            }
        }
        run
    }
}

/// True for tokens that may be collected as a variadic option argument:
/// non-empty and not starting with the option prefix.
pub fn is_not_option(token: &str) -> bool {
    !token.is_empty() && !is_option_like(token)
}

/// True for tokens that look like an option (`-` prefix).
pub fn is_option_like(token: &str) -> bool {
    token.starts_with('-')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(args: &[&str]) -> TokenCursor {
        let raw: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        TokenCursor::new(&raw)
    }

    #[test]
    fn test_take_next_in_order() {
        let mut c = cursor(&["a", "b"]);
        assert_eq!(c.take_next("-o").unwrap(), "a");
        assert_eq!(c.take_next("-o").unwrap(), "b");
        assert!(c.next_token().is_none());
    }

    #[test]
    fn test_take_next_missing_names_option() {
        let mut c = cursor(&[]);
        match c.take_next("-dump-glob") {
            Err(UsageError::MissingArgument { option }) => assert_eq!(option, "-dump-glob"),
            other => panic!("Expected MissingArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut c = cursor(&["x"]);
        assert_eq!(c.peek_next(), Some("x"));
        assert_eq!(c.peek_next(), Some("x"));
        assert_eq!(c.next_token().as_deref(), Some("x"));
    }

    #[test]
    fn test_collect_run_stops_at_option() {
        let mut c = cursor(&["a.vo", "b.vo", "-verbose", "c.vo"]);
        let run = c.collect_run(is_not_option);
        assert_eq!(run, vec!["a.vo", "b.vo"]);
        assert_eq!(c.peek_next(), Some("-verbose"));
    }

    #[test]
    fn test_collect_run_stops_at_empty_token() {
        let mut c = cursor(&["a.vo", "", "b.vo"]);
        let run = c.collect_run(is_not_option);
        assert_eq!(run, vec!["a.vo"]);
        assert_eq!(c.next_token().as_deref(), Some(""));
        assert_eq!(c.next_token().as_deref(), Some("b.vo"));
    }

    #[test]
    fn test_collect_run_until_end() {
        let mut c = cursor(&["a", "b"]);
        assert_eq!(c.collect_run(is_not_option).len(), 2);
        assert!(c.peek_next().is_none());
    }
}
