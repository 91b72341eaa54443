//! Camel-case joining of delimited words.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

/// Leading delimiters at the start, or a delimiter run anywhere, followed by
/// the first character of the next segment.
static SEGMENT_START: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:^[-_\s]*|[-_\s]+)([A-Za-z0-9])").expect("segment pattern is valid")
});

/// Join `-`, `_` and whitespace separated segments into camel case.
///
/// Each delimiter run is dropped and the character after it uppercased.
/// The first character is uppercased only when `upper_first` is set;
/// otherwise its case is left alone.
///
/// ```
/// assert_eq!(inflect::camelize("foo-bar", false), "fooBar");
/// assert_eq!(inflect::camelize("foo-bar", true), "FooBar");
/// ```
pub fn camelize(input: &str, upper_first: bool) -> String {
    SEGMENT_START
        .replace_all(input, |caps: &Captures| {
            let at_start = caps.get(0).is_some_and(|m| m.start() == 0);
            let first = &caps[1];
            if at_start && !upper_first {
                first.to_string()
            } else {
                first.to_uppercase()
            }
        })
        .into_owned()
}
