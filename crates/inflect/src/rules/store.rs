//! The rule store: pattern tables, irregular pairs, uncountable words.

use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::inflector::Direction;

use super::defaults;
use super::rule::{Matcher, PatternRule};

/// Irregular singular/plural pairs, indexed in both directions.
///
/// Both maps are private and only [`IrregularMap::insert`] writes to them,
/// so a forward entry is never visible without its inverse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IrregularMap {
    /// lowercase singular -> plural as registered
    forward: IndexMap<String, String>,
    /// lowercase plural -> singular as registered
    inverse: IndexMap<String, String>,
}

impl IrregularMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a pair, overwriting any existing entry for either key.
    pub fn insert(&mut self, singular: &str, plural: &str) {
        self.forward.insert(singular.to_lowercase(), plural.to_string());
        self.inverse.insert(plural.to_lowercase(), singular.to_string());
    }

    /// Plural registered for a lowercase singular.
    pub fn plural_of(&self, singular: &str) -> Option<&str> {
        self.forward.get(singular).map(String::as_str)
    }

    /// Singular registered for a lowercase plural.
    pub fn singular_of(&self, plural: &str) -> Option<&str> {
        self.inverse.get(plural).map(String::as_str)
    }

    /// Lookup in the map that serves `direction`.
    pub fn lookup(&self, direction: Direction, lowercase: &str) -> Option<&str> {
        match direction {
            Direction::Pluralize => self.plural_of(lowercase),
            Direction::Singularize => self.singular_of(lowercase),
        }
    }

    /// Number of singular keys.
    pub fn len(&self) -> usize {
        self.forward.len()
    }

    /// Whether no pairs are registered.
    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }

    /// `(singular, plural)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.forward.iter().map(|(s, p)| (s.as_str(), p.as_str()))
    }
}

/// An escaped `$$`, or a numbered group reference glued to a name character.
static GLUED_GROUP_REF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$\$|\$([0-9]+)([_A-Za-z])").expect("group reference pattern is valid")
});

/// Lowercase a caller template and brace its numbered group references.
///
/// The `regex` crate reads `$1zes` as a group named `1zes`; callers mean
/// group 1 followed by `zes`, so it is stored as `${1}zes`.
fn normalize_template(replacement: &str) -> String {
    GLUED_GROUP_REF
        .replace_all(&replacement.to_lowercase(), |caps: &Captures| {
            match (caps.get(1), caps.get(2)) {
                (Some(group), Some(next)) => format!("${{{}}}{}", group.as_str(), next.as_str()),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// All rule data consulted by an [`Inflector`](crate::Inflector).
///
/// Pattern tables only grow at the tail. Nothing is ever removed or
/// reordered; irregular and uncountable entries may be overwritten.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleStore {
    plurals: Vec<PatternRule>,
    singulars: Vec<PatternRule>,
    irregulars: IrregularMap,
    uncountables: IndexSet<String>,
}

impl RuleStore {
    /// Create a store with no rules at all.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store loaded with the built-in English tables.
    pub fn english() -> Self {
        let mut irregulars = IrregularMap::new();
        for (singular, plural) in defaults::IRREGULARS {
            irregulars.insert(singular, plural);
        }

        Self {
            plurals: Vec::clone(&defaults::PLURALS),
            singulars: Vec::clone(&defaults::SINGULARS),
            irregulars,
            uncountables: defaults::UNCOUNTABLES
                .iter()
                .map(|w| w.to_string())
                .collect(),
        }
    }

    /// Append a plural rule.
    ///
    /// The template is lowercased and its numbered group references braced
    /// before storage.
    pub fn add_plural(&mut self, matcher: impl Into<Matcher>, replacement: &str) {
        let rule = PatternRule::new(matcher, normalize_template(replacement));
        debug!(
            pattern = %rule.matcher().pattern,
            replacement = rule.replacement(),
            total = self.plurals.len() + 1,
            "registered plural rule"
        );
        self.plurals.push(rule);
    }

    /// Append a singular rule. The template is normalized as in
    /// [`RuleStore::add_plural`].
    pub fn add_singular(&mut self, matcher: impl Into<Matcher>, replacement: &str) {
        let rule = PatternRule::new(matcher, normalize_template(replacement));
        debug!(
            pattern = %rule.matcher().pattern,
            replacement = rule.replacement(),
            total = self.singulars.len() + 1,
            "registered singular rule"
        );
        self.singulars.push(rule);
    }

    /// Mark a word as uncountable.
    pub fn add_uncountable(&mut self, word: &str) {
        let word = word.to_lowercase();
        debug!(word = %word, "registered uncountable");
        self.uncountables.insert(word);
    }

    /// Register an irregular pair in both directions.
    pub fn add_irregular(&mut self, singular: &str, plural: &str) {
        debug!(singular, plural, "registered irregular");
        self.irregulars.insert(singular, plural);
    }

    /// Whether a lowercase word is uncountable.
    pub fn is_uncountable(&self, lowercase: &str) -> bool {
        self.uncountables.contains(lowercase)
    }

    /// Irregular pairs, both directions.
    pub fn irregulars(&self) -> &IrregularMap {
        &self.irregulars
    }

    /// Uncountable words in registration order.
    pub fn uncountables(&self) -> impl Iterator<Item = &str> {
        self.uncountables.iter().map(String::as_str)
    }

    /// Plural rules, oldest first.
    pub fn plural_rules(&self) -> &[PatternRule] {
        &self.plurals
    }

    /// Singular rules, oldest first.
    pub fn singular_rules(&self) -> &[PatternRule] {
        &self.singulars
    }

    /// The rule table that serves `direction`, oldest first.
    pub fn rules(&self, direction: Direction) -> &[PatternRule] {
        match direction {
            Direction::Pluralize => &self.plurals,
            Direction::Singularize => &self.singulars,
        }
    }
}
