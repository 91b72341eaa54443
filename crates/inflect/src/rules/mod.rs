//! Rule tables consulted by the inflection engine.

pub mod defaults;
mod rule;
mod store;

pub use rule::{Matcher, PatternRule};
pub use store::{IrregularMap, RuleStore};
