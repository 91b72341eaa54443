//! Fuzz target for the built-in inflection rules.
//!
//! This fuzzer tests that the English inflector:
//! 1. Never fails on any UTF-8 input
//! 2. Returns blank input unchanged

#![no_main]

use libfuzzer_sys::fuzz_target;
use inflect::Inflector;

fuzz_target!(|data: &[u8]| {
    let inflector = Inflector::new();

    if let Ok(input) = std::str::from_utf8(data) {
        let plural = inflector.pluralize(input).expect("built-in rules compile");
        let singular = inflector.singularize(input).expect("built-in rules compile");

        if input.trim().is_empty() {
            assert_eq!(plural, input);
            assert_eq!(singular, input);
        }
    }

    let lossy = String::from_utf8_lossy(data);
    let _ = inflector.pluralize(&lossy);
});
