//! Explicit-path rule for compile targets.

use std::path::Path;

/// Make a file name explicitly relative to the current directory.
///
/// `foo.v` → `./foo.v`. Absolute paths and names already starting with
/// `./` or `../` are returned unchanged, so the downstream loader never
/// mistakes a file for a logical module name.
pub fn make_explicit(name: &str) -> String {
    if is_implicit(name) {
        format!("./{}", name)
    } else {
        name.to_string()
    }
}

fn is_implicit(name: &str) -> bool {
    if Path::new(name).is_absolute() || name.starts_with('/') {
        return false;
    }
    let explicit_prefixes: &[&str] = if cfg!(windows) {
        &["./", "../", ".\\", "..\\", "\\"]
    } else {
        &["./", "../"]
    };
    !explicit_prefixes.iter().any(|p| name.starts_with(p))
}
