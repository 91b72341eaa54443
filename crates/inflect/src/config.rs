//! Rule configuration documents.
//!
//! A configuration extends (or replaces) the built-in English tables with
//! caller-supplied rules. It is read once when an inflector is built; the
//! library never writes rule state back out.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{InflectError, Result};
use crate::rules::Matcher;

/// Rule extensions applied on top of (or instead of) the built-in tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InflectorConfig {
    /// Start from the built-in English tables.
    pub include_defaults: bool,
    /// Plural rules, registered in order (last wins).
    pub plurals: Vec<RuleEntry>,
    /// Singular rules, registered in order (last wins).
    pub singulars: Vec<RuleEntry>,
    /// Irregular `singular -> plural` pairs.
    pub irregulars: IndexMap<String, String>,
    /// Uncountable words.
    pub uncountables: Vec<String>,
}

impl Default for InflectorConfig {
    fn default() -> Self {
        Self {
            include_defaults: true,
            plurals: Vec::new(),
            singulars: Vec::new(),
            irregulars: IndexMap::new(),
            uncountables: Vec::new(),
        }
    }
}

/// A pattern rule as written in a configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    pub pattern: String,
    pub replacement: String,
    #[serde(default = "default_case_insensitive")]
    pub case_insensitive: bool,
}

fn default_case_insensitive() -> bool {
    true
}

impl RuleEntry {
    pub fn matcher(&self) -> Matcher {
        Matcher {
            pattern: self.pattern.clone(),
            case_insensitive: self.case_insensitive,
        }
    }
}

impl InflectorConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use inflect::{Inflector, InflectorConfig};
    /// let config = InflectorConfig::load("inflections.json")?;
    /// let inflector = Inflector::with_config(&config)?;
    /// # Ok::<(), inflect::InflectError>(())
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let file = File::open(path).map_err(|source| InflectError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let reader = BufReader::new(file);
        let config: InflectorConfig = serde_json::from_reader(reader)?;

        debug!(path = %path.display(), "loaded inflector config");
        Ok(config)
    }

    /// Check for entries that cannot mean anything.
    ///
    /// Patterns are deliberately not compiled here; a bad pattern is
    /// reported the first time it is evaluated.
    pub fn validate(&self) -> Result<()> {
        for (singular, plural) in &self.irregulars {
            if singular.trim().is_empty() || plural.trim().is_empty() {
                return Err(InflectError::Config(format!(
                    "irregular pair '{}' -> '{}' has a blank side",
                    singular, plural
                )));
            }
        }

        if self.uncountables.iter().any(|w| w.trim().is_empty()) {
            return Err(InflectError::Config(
                "uncountable words must not be blank".to_string(),
            ));
        }

        Ok(())
    }
}
