//! Option registry: single source of truth for the option vocabulary.
//!
//! Each entry maps literal option names to the handler that applies it.

use crate::args::cursor::TokenCursor;
use crate::args::error::UsageError;
use crate::args::interpreter as handlers;
use crate::args::state::ScanState;

/// Transition applied when an option token is seen.
///
/// Receives the token as written (aliases differ), the current state and
/// the cursor positioned right after the option.
pub type Handler = fn(&str, ScanState, &mut TokenCursor) -> Result<ScanState, UsageError>;

/// How many argument tokens an option consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionArity {
    /// Plain switch (e.g. -verbose).
    NoValue,
    /// Exactly n arguments (e.g. -o <file>).
    Fixed(usize),
    /// At least `min` arguments, then every following non-option token.
    Variadic { min: usize },
}

/// A single option definition.
#[derive(Debug, Clone)]
pub struct OptionDef {
    /// Literal spellings; the first one is canonical.
    pub names: &'static [&'static str],
    pub arity: OptionArity,
    /// Argument placeholders for the usage text, one per required token.
    pub metavar: &'static str,
    pub description: &'static str,
    pub deprecated: bool,
    pub handler: Handler,
}

impl OptionDef {
    /// Check if this definition matches the given token.
    pub fn matches(&self, token: &str) -> bool {
        self.names.iter().any(|name| *name == token)
    }

    pub fn canonical(&self) -> &'static str {
        self.names[0]
    }
}

/// Build the complete option registry.
pub fn option_registry() -> Vec<OptionDef> {
    vec![
        // === Compilation mode ===
        OptionDef {
            names: &["-quick"],
            arity: OptionArity::NoValue,
            metavar: "",
            description: "Produce partial (.vio) artifacts, deferring proof checking",
            deprecated: false,
            handler: handlers::quick,
        },
        OptionDef {
            names: &["-vio2vo"],
            arity: OptionArity::Fixed(1),
            metavar: "<file>",
            description: "Convert a partial artifact into a final one",
            deprecated: false,
            handler: handlers::vio2vo,
        },
        // === Partial checking scheduling ===
        OptionDef {
            names: &["-check-vio-tasks"],
            arity: OptionArity::Fixed(2),
            metavar: "<ids> <file>",
            description: "Check the comma-separated task ids of a partial file",
            deprecated: false,
            handler: handlers::check_vio_tasks,
        },
        OptionDef {
            names: &["-schedule-vio-checking"],
            arity: OptionArity::Variadic { min: 2 },
            metavar: "<jobs> <file>",
            description: "Schedule checking of partial files over <jobs> workers",
            deprecated: false,
            handler: handlers::schedule_vio_checking,
        },
        OptionDef {
            names: &["-schedule-vio2vo"],
            arity: OptionArity::Variadic { min: 2 },
            metavar: "<jobs> <file>",
            description: "Schedule conversion of partial files over <jobs> workers",
            deprecated: false,
            handler: handlers::schedule_vio2vo,
        },
        // === Output ===
        OptionDef {
            names: &["-verbose"],
            arity: OptionArity::NoValue,
            metavar: "",
            description: "Echo the contents of files compiled afterwards",
            deprecated: false,
            handler: handlers::verbose,
        },
        OptionDef {
            names: &["-o"],
            arity: OptionArity::Fixed(1),
            metavar: "<file>",
            description: "Name of the compiled artifact (single input only)",
            deprecated: false,
            handler: handlers::output_name,
        },
        OptionDef {
            names: &["-no-glob", "-noglob"],
            arity: OptionArity::NoValue,
            metavar: "",
            description: "Do not dump glob information",
            deprecated: false,
            handler: handlers::no_glob,
        },
        OptionDef {
            names: &["-dump-glob"],
            arity: OptionArity::Fixed(1),
            metavar: "<file>",
            description: "Dump glob information of all inputs into <file>",
            deprecated: false,
            handler: handlers::dump_glob,
        },
        // === Deprecated ===
        OptionDef {
            names: &["-opt", "-byte"],
            arity: OptionArity::NoValue,
            metavar: "",
            description: "Ignored",
            deprecated: true,
            handler: handlers::ignored,
        },
        OptionDef {
            names: &["-image"],
            arity: OptionArity::Fixed(1),
            metavar: "<file>",
            description: "Ignored, its argument is discarded",
            deprecated: true,
            handler: handlers::image,
        },
        OptionDef {
            names: &["-outputstate"],
            arity: OptionArity::Fixed(1),
            metavar: "<file>",
            description: "Save the interpreter state into <file>",
            deprecated: true,
            handler: handlers::output_state,
        },
    ]
}

/// Find the definition for `token`, if any.
pub fn lookup<'a>(registry: &'a [OptionDef], token: &str) -> Option<&'a OptionDef> {
    registry.iter().find(|d| d.matches(token))
}

/// Render the usage summary from the registry.
pub fn usage(registry: &[OptionDef]) -> String {
    let mut out = String::from("Usage: vdriver <options> <files>\n\nOptions:\n");
    let render = |def: &OptionDef| {
        let names = def.names.join(", ");
        let synopsis = match def.arity {
            OptionArity::NoValue => names,
            OptionArity::Fixed(_) => format!("{} {}", names, def.metavar),
            OptionArity::Variadic { .. } => format!("{} {}...", names, def.metavar),
        };
        format!("  {:<34} {}\n", synopsis, def.description)
    };

    for def in registry.iter().filter(|d| !d.deprecated) {
        out.push_str(&render(def));
    }
    out.push_str("\nDeprecated:\n");
    for def in registry.iter().filter(|d| d.deprecated) {
        out.push_str(&render(def));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vocabulary_is_exact() {
        let names: HashSet<&str> = option_registry()
            .iter()
            .flat_map(|d| d.names.iter().copied())
            .collect();
        let expected: HashSet<&str> = [
            "-opt",
            "-byte",
            "-image",
            "-verbose",
            "-o",
            "-quick",
            "-check-vio-tasks",
            "-schedule-vio-checking",
            "-schedule-vio2vo",
            "-vio2vo",
            "-outputstate",
            "-no-glob",
            "-noglob",
            "-dump-glob",
        ]
        .into_iter()
        .collect();
        assert_eq!(names, expected);
    }

    #[test]
    fn test_no_duplicate_names() {
        let registry = option_registry();
        let all: Vec<&str> = registry.iter().flat_map(|d| d.names.iter().copied()).collect();
        let unique: HashSet<&str> = all.iter().copied().collect();
        assert_eq!(all.len(), unique.len());
    }

    #[test]
    fn test_metavar_matches_arity() {
        for def in option_registry() {
            let expected = match def.arity {
                OptionArity::NoValue => 0,
                OptionArity::Fixed(n) => n,
                OptionArity::Variadic { min } => min,
            };
            assert_eq!(
                def.metavar.split_whitespace().count(),
                expected,
                "{} metavar does not match its arity",
                def.canonical()
            );
        }
    }

    #[test]
    fn test_usage_marks_variadic_options() {
        let text = usage(&option_registry());
        assert!(text.contains("-schedule-vio2vo <jobs> <file>..."));
        assert!(text.contains("-check-vio-tasks <ids> <file> "));
        assert!(!text.contains("<ids> <file>..."));
    }

    #[test]
    fn test_lookup_alias() {
        let registry = option_registry();
        let def = lookup(&registry, "-noglob").unwrap();
        assert_eq!(def.canonical(), "-no-glob");
        assert!(lookup(&registry, "-nope").is_none());
    }

    #[test]
    fn test_usage_lists_deprecated_separately() {
        let text = usage(&option_registry());
        let deprecated_at = text.find("Deprecated:").unwrap();
        assert!(text.find("-schedule-vio-checking").unwrap() < deprecated_at);
        assert!(text.find("-outputstate").unwrap() > deprecated_at);
    }
}
