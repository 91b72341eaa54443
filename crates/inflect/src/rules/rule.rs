//! Pattern rules: a matcher plus a replacement template.

use once_cell::sync::OnceCell;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{InflectError, Result};

/// Pattern source text together with its matching flags.
///
/// Case-insensitivity is stored explicitly rather than read back out of a
/// compiled regex, so a serialized rule table fully describes itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matcher {
    /// Regular expression source (`regex` crate syntax).
    pub pattern: String,
    /// Whether letters match regardless of case.
    #[serde(default)]
    pub case_insensitive: bool,
}

impl Matcher {
    /// Create a case-sensitive matcher.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_insensitive: false,
        }
    }

    /// Create a matcher that ignores letter case.
    pub fn case_insensitive(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            case_insensitive: true,
        }
    }

    /// Compile the pattern with this matcher's flags.
    pub fn compile(&self) -> Result<Regex> {
        RegexBuilder::new(&self.pattern)
            .case_insensitive(self.case_insensitive)
            .build()
            .map_err(|source| {
                warn!(pattern = %self.pattern, error = %source, "failed to compile rule pattern");
                InflectError::Pattern {
                    pattern: self.pattern.clone(),
                    source,
                }
            })
    }
}

impl From<&str> for Matcher {
    fn from(pattern: &str) -> Self {
        Self::new(pattern)
    }
}

impl From<String> for Matcher {
    fn from(pattern: String) -> Self {
        Self::new(pattern)
    }
}

/// A single `(matcher, replacement)` entry in a rule table.
///
/// The replacement uses the `regex` crate's template syntax, so `${1}`
/// copies the first capture group (with the input's original casing).
/// The regex is compiled on first use and cached for the life of the rule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternRule {
    #[serde(flatten)]
    matcher: Matcher,
    replacement: String,
    #[serde(skip)]
    compiled: OnceCell<Regex>,
}

impl PatternRule {
    /// Create a rule. Neither the pattern nor the template is checked here.
    pub fn new(matcher: impl Into<Matcher>, replacement: impl Into<String>) -> Self {
        Self {
            matcher: matcher.into(),
            replacement: replacement.into(),
            compiled: OnceCell::new(),
        }
    }

    /// The rule's matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The replacement template.
    pub fn replacement(&self) -> &str {
        &self.replacement
    }

    /// The compiled regex, compiling it on first access.
    pub fn regex(&self) -> Result<&Regex> {
        self.compiled.get_or_try_init(|| self.matcher.compile())
    }

    /// Whether the regex has already been compiled.
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Test the rule against a word.
    pub fn is_match(&self, word: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(word))
    }

    /// Substitute the first match in `word` with the replacement template.
    pub fn apply(&self, word: &str) -> Result<String> {
        let regex = self.regex()?;
        Ok(regex.replace(word, self.replacement.as_str()).into_owned())
    }
}
