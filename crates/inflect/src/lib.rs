//! Inflect: rule-based English noun inflection.
//!
//! Words are pluralized or singularized by an ordered table of
//! regular-expression rules, with override layers for irregular pairs and
//! uncountable words. Rule tables can be extended at runtime; the newest
//! rule always wins.
//!
//! # Resolution Order
//!
//! - **Blank input** is returned unchanged
//! - **Uncountable** words are returned unchanged
//! - **Irregular** words map directly to their registered counterpart
//! - **Pattern rules** are tried newest first; the first match is applied
//!
//! Two independent case transforms, [`delimit`] and [`camelize`], are also
//! provided.
//!
//! # Example
//!
//! ```
//! use inflect::Inflector;
//!
//! let mut inflector = Inflector::new();
//! assert_eq!(inflector.pluralize("person")?, "people");
//! assert_eq!(inflector.singularize("cities")?, "city");
//!
//! inflector.register_irregular("foo", "foobar");
//! assert_eq!(inflector.singularize("foobar")?, "foo");
//!
//! assert_eq!(inflect::delimit("fooBar"), "foo-bar");
//! assert_eq!(inflect::camelize("foo-bar", true), "FooBar");
//! # Ok::<(), inflect::InflectError>(())
//! ```

pub mod case;
pub mod config;
pub mod error;
pub mod rules;

mod inflector;

use once_cell::sync::Lazy;

pub use crate::inflector::{Direction, Inflector};
pub use case::{camelize, camelize_value, delimit, delimit_value, delimit_with};
pub use config::{InflectorConfig, RuleEntry};
pub use error::{InflectError, Result};
pub use rules::{IrregularMap, Matcher, PatternRule, RuleStore};

/// Shared read-only inflector with the built-in English rules.
static ENGLISH: Lazy<Inflector> = Lazy::new(Inflector::new);

/// Pluralize a word with the built-in English rules.
///
/// ```
/// assert_eq!(inflect::pluralize("box"), "boxes");
/// ```
pub fn pluralize(word: &str) -> String {
    // Built-in patterns always compile, so the error arm is unreachable.
    ENGLISH
        .pluralize(word)
        .unwrap_or_else(|_| word.to_string())
}

/// Singularize a word with the built-in English rules.
///
/// ```
/// assert_eq!(inflect::singularize("boxes"), "box");
/// ```
pub fn singularize(word: &str) -> String {
    ENGLISH
        .singularize(word)
        .unwrap_or_else(|_| word.to_string())
}
