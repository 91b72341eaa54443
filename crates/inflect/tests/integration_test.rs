//! Integration tests for inflect.

use inflect::{
    Direction, InflectError, Inflector, Matcher, camelize, camelize_value, delimit,
    delimit_value, delimit_with, pluralize, singularize,
};
use serde_json::json;

// =============================================================================
// Built-in Rule Tests
// =============================================================================

#[test]
fn test_regular_plurals() {
    let inflector = Inflector::new();

    assert_eq!(inflector.pluralize("test").unwrap(), "tests");
    assert_eq!(inflector.pluralize("box").unwrap(), "boxes");
    assert_eq!(inflector.pluralize("church").unwrap(), "churches");
    assert_eq!(inflector.pluralize("wish").unwrap(), "wishes");
    assert_eq!(inflector.pluralize("kiss").unwrap(), "kisses");
    assert_eq!(inflector.pluralize("city").unwrap(), "cities");
    assert_eq!(inflector.pluralize("query").unwrap(), "queries");
}

#[test]
fn test_regular_singulars() {
    let inflector = Inflector::new();

    assert_eq!(inflector.singularize("cities").unwrap(), "city");
    assert_eq!(inflector.singularize("boxes").unwrap(), "box");
    assert_eq!(inflector.singularize("churches").unwrap(), "church");
    assert_eq!(inflector.singularize("queries").unwrap(), "query");
    assert_eq!(inflector.singularize("buses").unwrap(), "bus");
    assert_eq!(inflector.singularize("shoes").unwrap(), "shoe");
    assert_eq!(inflector.singularize("potatoes").unwrap(), "potato");
}

#[test]
fn test_inflect_direction() {
    let inflector = Inflector::new();

    assert_eq!(inflector.inflect("city", Direction::Pluralize).unwrap(), "cities");
    assert_eq!(inflector.inflect("cities", Direction::Singularize).unwrap(), "city");
}

#[test]
fn test_free_functions_use_english_rules() {
    assert_eq!(pluralize("person"), "people");
    assert_eq!(singularize("people"), "person");
    assert_eq!(pluralize("money"), "money");
    assert_eq!(pluralize(""), "");
}

// =============================================================================
// Override Layer Tests
// =============================================================================

#[test]
fn test_every_uncountable_is_identity() {
    let inflector = Inflector::new();

    for word in inflect::rules::defaults::UNCOUNTABLES {
        assert_eq!(inflector.pluralize(word).unwrap(), *word);
        assert_eq!(inflector.singularize(word).unwrap(), *word);
    }
}

#[test]
fn test_every_irregular_round_trips() {
    let inflector = Inflector::new();

    for (singular, plural) in inflect::rules::defaults::IRREGULARS {
        assert_eq!(inflector.pluralize(singular).unwrap(), *plural);
        assert_eq!(inflector.singularize(plural).unwrap(), *singular);
        assert_eq!(inflector.pluralize(&singular.to_uppercase()).unwrap(), *plural);
        assert_eq!(inflector.singularize(&plural.to_uppercase()).unwrap(), *singular);
    }
}

#[test]
fn test_registered_irregular_is_visible_both_ways() {
    let mut inflector = Inflector::new();
    inflector.register_irregular("foo", "foobar");

    assert_eq!(inflector.pluralize("foo").unwrap(), "foobar");
    assert_eq!(inflector.singularize("foobar").unwrap(), "foo");
    assert_eq!(inflector.singularize("FOOBAR").unwrap(), "foo");
}

// =============================================================================
// Precedence Tests
// =============================================================================

#[test]
fn test_custom_rule_beats_builtin() {
    let mut inflector = Inflector::new();
    inflector.register_plural_rule(Matcher::case_insensitive("^custom$"), "customized");

    assert_eq!(inflector.pluralize("custom").unwrap(), "customized");
    assert_eq!(inflector.pluralize("CUSTOM").unwrap(), "customized");
}

#[test]
fn test_latest_custom_rule_wins() {
    let mut inflector = Inflector::new();
    inflector.register_plural_rule(Matcher::case_insensitive("us$"), "i");
    inflector.register_plural_rule(Matcher::case_insensitive("^campus$"), "campuses");

    assert_eq!(inflector.pluralize("campus").unwrap(), "campuses");
    assert_eq!(inflector.pluralize("cactus").unwrap(), "cacti");
}

#[test]
fn test_case_sensitive_custom_rule() {
    let mut inflector = Inflector::new();
    inflector.register_plural_rule("^Custom$", "customized");

    assert_eq!(inflector.pluralize("Custom").unwrap(), "customized");
    assert_eq!(inflector.pluralize("custom").unwrap(), "customs");
}

#[test]
fn test_custom_singular_rule_uses_capture_groups() {
    let mut inflector = Inflector::new();
    inflector.register_singular_rule(Matcher::case_insensitive("(cact)i$"), "${1}us");

    assert_eq!(inflector.singularize("cacti").unwrap(), "cactus");
}

#[test]
fn test_dollar_digit_templates_keep_trailing_text() {
    let mut inflector = Inflector::new();
    inflector.register_plural_rule(Matcher::case_insensitive("(quiz)$"), "$1zes");
    inflector.register_plural_rule(
        Matcher::case_insensitive("(?:([^f])fe|([lr])f)$"),
        "$1$2ves",
    );
    inflector.register_singular_rule(Matcher::case_insensitive("(quiz)zes$"), "$1");

    assert_eq!(inflector.pluralize("quiz").unwrap(), "quizzes");
    assert_eq!(inflector.pluralize("wife").unwrap(), "wives");
    assert_eq!(inflector.pluralize("half").unwrap(), "halves");
    assert_eq!(inflector.singularize("quizzes").unwrap(), "quiz");
}

// =============================================================================
// Fallback Tests
// =============================================================================

#[test]
fn test_blank_input_is_identity() {
    let inflector = Inflector::new();

    for word in ["", " ", "\t", "  \n "] {
        assert_eq!(inflector.pluralize(word).unwrap(), word);
        assert_eq!(inflector.singularize(word).unwrap(), word);
    }
}

#[test]
fn test_replural_is_not_guarded() {
    let inflector = Inflector::new();
    assert_eq!(inflector.pluralize("children").unwrap(), "childrens");
}

#[test]
fn test_malformed_pattern_surfaces_on_inflection() {
    let mut inflector = Inflector::new();
    // Registration itself never fails.
    inflector.register_singular_rule("(", "");

    match inflector.singularize("cats") {
        Err(InflectError::Pattern { pattern, .. }) => assert_eq!(pattern, "("),
        other => panic!("expected pattern error, got {:?}", other),
    }
}

// =============================================================================
// Case Transform Tests
// =============================================================================

#[test]
fn test_delimit() {
    assert_eq!(delimit("fooBar"), "foo-bar");
    assert_eq!(delimit_with("Foo99Bar", "_"), "foo_99_bar");
}

#[test]
fn test_camelize() {
    assert_eq!(camelize("foo-bar", false), "fooBar");
    assert_eq!(camelize("foo-bar", true), "FooBar");
}

#[test]
fn test_case_transforms_pass_non_text_through() {
    for value in [json!(null), json!(7), json!(false), json!([1, 2]), json!({"a": 1})] {
        assert_eq!(delimit_value(&value, None), value);
        assert_eq!(camelize_value(&value, false), value);
    }
}
