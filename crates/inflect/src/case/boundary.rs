//! Delimiter insertion at case and digit boundaries.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Separator used by [`delimit`].
pub const DEFAULT_SEPARATOR: &str = "-";

/// Maximal runs of ASCII uppercase letters or ASCII digits.
static BOUNDARY_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]+|[0-9]+").expect("boundary pattern is valid"));

/// Split a string at uppercase/digit runs with `-` and lowercase it.
///
/// ```
/// assert_eq!(inflect::delimit("fooBar"), "foo-bar");
/// ```
pub fn delimit(input: &str) -> String {
    delimit_with(input, DEFAULT_SEPARATOR)
}

/// Split a string at uppercase/digit runs with `separator` and lowercase it.
///
/// A run at the very start of the string gets no separator. An empty
/// separator falls back to [`DEFAULT_SEPARATOR`].
pub fn delimit_with(input: &str, separator: &str) -> String {
    let separator = if separator.is_empty() {
        DEFAULT_SEPARATOR
    } else {
        separator
    };

    BOUNDARY_RUNS
        .replace_all(input, |caps: &Captures| {
            let run = &caps[0];
            if caps.get(0).map_or(0, |m| m.start()) > 0 {
                format!("{}{}", separator, run)
            } else {
                run.to_string()
            }
        })
        .to_lowercase()
}
