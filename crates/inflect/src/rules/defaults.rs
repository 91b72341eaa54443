//! Built-in English rule tables.
//!
//! Tables are listed oldest first. The engine scans them from the end, so a
//! rule lower in a table wins over any rule above it that also matches.

use once_cell::sync::Lazy;

use super::rule::{Matcher, PatternRule};

/// `(pattern, replacement, case_insensitive)`
type RuleRow = (&'static str, &'static str, bool);

const PLURAL_RULES: &[RuleRow] = &[
    ("$", "s", false),
    ("s$", "s", true),
    ("^(ax|test)is$", "${1}es", true),
    ("(octop|vir)us$", "${1}i", true),
    ("(octop|vir)i$", "${1}i", true),
    ("(alias|status)$", "${1}es", true),
    ("(bu)s$", "${1}ses", true),
    ("(buffal|tomat)o$", "${1}oes", true),
    ("([ti])um$", "${1}a", true),
    ("([ti])a$", "${1}a", true),
    ("sis$", "ses", true),
    ("(?:([^f])fe|([lr])f)$", "${1}${2}ves", true),
    ("(hive)$", "${1}s", true),
    ("([^aeiouy]|qu)y$", "${1}ies", true),
    ("(x|ch|ss|sh)$", "${1}es", true),
    ("(matr|vert|ind)(?:ix|ex)$", "${1}ices", true),
    ("^(m|l)ouse$", "${1}ice", true),
    ("^(m|l)ice$", "${1}ice", true),
    ("^(ox)$", "${1}en", true),
    ("^(oxen)$", "${1}", true),
    ("(quiz)$", "${1}zes", true),
];

const SINGULAR_RULES: &[RuleRow] = &[
    ("s$", "", true),
    ("(ss)$", "${1}", true),
    ("(n)ews$", "${1}ews", true),
    ("([ti])a$", "${1}um", true),
    (
        "((a)naly|(b)a|(d)iagno|(p)arenthe|(p)rogno|(s)ynop|(t)he)(sis|ses)$",
        "${1}sis",
        true,
    ),
    ("(^analy)(sis|ses)$", "${1}sis", true),
    ("([^f])ves$", "${1}fe", true),
    ("(hive)s$", "${1}", true),
    ("(tive)s$", "${1}", true),
    ("([lr])ves$", "${1}f", true),
    ("([^aeiouy]|qu)ies$", "${1}y", true),
    ("(s)eries$", "${1}eries", true),
    ("(m)ovies$", "${1}ovie", true),
    ("(x|ch|ss|sh)es$", "${1}", true),
    ("^(m|l)ice$", "${1}ouse", true),
    ("(bus)(es)?$", "${1}", true),
    ("(o)es$", "${1}", true),
    ("(shoe)s$", "${1}", true),
    ("(cris|test)(is|es)$", "${1}is", true),
    ("^(a)x[ie]s$", "${1}xis", true),
    ("(octop|vir)(us|i)$", "${1}us", true),
    ("(alias|status)(es)?$", "${1}", true),
    ("^(ox)en", "${1}", true),
    ("(vert|ind)ices$", "${1}ex", true),
    ("(matr)ices$", "${1}ix", true),
    ("(quiz)zes$", "${1}", true),
    ("(database)s$", "${1}", true),
];

/// Built-in irregular `(singular, plural)` pairs.
pub const IRREGULARS: &[(&str, &str)] = &[
    ("person", "people"),
    ("man", "men"),
    ("child", "children"),
    ("sex", "sexes"),
    ("move", "moves"),
    ("cow", "kine"),
    ("zombie", "zombies"),
];

/// Built-in uncountable words.
pub const UNCOUNTABLES: &[&str] = &[
    "equipment",
    "information",
    "rice",
    "money",
    "species",
    "series",
    "fish",
    "sheep",
    "jeans",
    "police",
];

/// Compiled once per process; each rule store clones these.
pub(crate) static PLURALS: Lazy<Vec<PatternRule>> = Lazy::new(|| build(PLURAL_RULES));
pub(crate) static SINGULARS: Lazy<Vec<PatternRule>> = Lazy::new(|| build(SINGULAR_RULES));

fn build(rows: &[RuleRow]) -> Vec<PatternRule> {
    rows.iter()
        .map(|&(pattern, replacement, case_insensitive)| {
            let matcher = Matcher {
                pattern: pattern.to_string(),
                case_insensitive,
            };
            let rule = PatternRule::new(matcher, replacement);
            // Compile now so every clone carries the regex. A bad built-in
            // pattern is logged by `Matcher::compile` and fails on first use.
            rule.regex().ok();
            rule
        })
        .collect()
}
