//! The inflection engine and its registration API.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::InflectorConfig;
use crate::error::Result;
use crate::rules::{Matcher, RuleStore};

/// Which way a word is being inflected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Pluralize,
    Singularize,
}

/// Rule-based noun inflector.
///
/// Each instance owns its own [`RuleStore`]; registering rules on one
/// inflector never affects another. Registration takes `&mut self`, so
/// sharing an inflector across threads while extending it requires the
/// caller to wrap it in a lock.
///
/// # Example
///
/// ```
/// use inflect::{Inflector, Matcher};
///
/// let mut inflector = Inflector::new();
/// assert_eq!(inflector.pluralize("city")?, "cities");
/// assert_eq!(inflector.singularize("boxes")?, "box");
///
/// inflector.register_plural_rule(Matcher::case_insensitive("^custom$"), "customized");
/// assert_eq!(inflector.pluralize("custom")?, "customized");
/// # Ok::<(), inflect::InflectError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Inflector {
    store: RuleStore,
}

impl Inflector {
    /// Create an inflector with the built-in English rules.
    pub fn new() -> Self {
        Self::from_store(RuleStore::english())
    }

    /// Create an inflector with no rules; every word passes through unchanged
    /// until rules are registered.
    pub fn empty() -> Self {
        Self::from_store(RuleStore::new())
    }

    /// Wrap an existing rule store.
    pub fn from_store(store: RuleStore) -> Self {
        Self { store }
    }

    /// Create an inflector from a rule configuration.
    ///
    /// Configured entries are registered after the built-in tables (when
    /// those are included), so configured rules take precedence.
    pub fn with_config(config: &InflectorConfig) -> Result<Self> {
        config.validate()?;

        let mut inflector = if config.include_defaults {
            Self::new()
        } else {
            Self::empty()
        };

        for entry in &config.plurals {
            inflector.register_plural_rule(entry.matcher(), &entry.replacement);
        }
        for entry in &config.singulars {
            inflector.register_singular_rule(entry.matcher(), &entry.replacement);
        }
        for word in &config.uncountables {
            inflector.register_uncountable(word);
        }
        for (singular, plural) in &config.irregulars {
            inflector.register_irregular(singular, plural);
        }

        debug!(
            include_defaults = config.include_defaults,
            plurals = config.plurals.len(),
            singulars = config.singulars.len(),
            irregulars = config.irregulars.len(),
            uncountables = config.uncountables.len(),
            "built inflector from config"
        );

        Ok(inflector)
    }

    /// The rule store backing this inflector.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Pluralize a word.
    pub fn pluralize(&self, word: &str) -> Result<String> {
        self.inflect(word, Direction::Pluralize)
    }

    /// Singularize a word.
    pub fn singularize(&self, word: &str) -> Result<String> {
        self.inflect(word, Direction::Singularize)
    }

    /// Inflect a word in the given direction.
    ///
    /// Resolution order: blank input, uncountable words, irregular pairs,
    /// then pattern rules from newest to oldest. A word no rule matches is
    /// returned unchanged. Already-inflected input is not detected, so
    /// pluralizing a plural may inflect it again.
    ///
    /// Fails only if a registered pattern is reached that does not compile.
    pub fn inflect(&self, word: &str, direction: Direction) -> Result<String> {
        if word.trim().is_empty() {
            return Ok(word.to_string());
        }

        let lowercase = word.to_lowercase();

        if self.store.is_uncountable(&lowercase) {
            trace!(word, ?direction, "uncountable");
            return Ok(word.to_string());
        }

        if let Some(mapped) = self.store.irregulars().lookup(direction, &lowercase) {
            trace!(word, ?direction, mapped, "irregular");
            return Ok(mapped.to_string());
        }

        // Match against the original word, not the lowercased one.
        for (index, rule) in self.store.rules(direction).iter().enumerate().rev() {
            if rule.is_match(word)? {
                trace!(word, ?direction, index, pattern = %rule.matcher().pattern, "rule matched");
                return rule.apply(word);
            }
        }

        trace!(word, ?direction, "no rule matched");
        Ok(word.to_string())
    }

    /// Register a plural rule with precedence over every existing one.
    ///
    /// The replacement is lowercased before it is stored.
    pub fn register_plural_rule(&mut self, matcher: impl Into<Matcher>, replacement: &str) {
        self.store.add_plural(matcher, replacement);
    }

    /// Register a singular rule with precedence over every existing one.
    ///
    /// The replacement is lowercased before it is stored.
    pub fn register_singular_rule(&mut self, matcher: impl Into<Matcher>, replacement: &str) {
        self.store.add_singular(matcher, replacement);
    }

    /// Register a word that is the same in both directions.
    pub fn register_uncountable(&mut self, word: &str) {
        self.store.add_uncountable(word);
    }

    /// Register an irregular pair. Both lookups become available together.
    pub fn register_irregular(&mut self, singular: &str, plural: &str) {
        self.store.add_irregular(singular, plural);
    }
}

impl Default for Inflector {
    fn default() -> Self {
        Self::new()
    }
}
