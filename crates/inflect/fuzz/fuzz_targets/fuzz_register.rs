//! Fuzz target for runtime rule registration.
//!
//! Arbitrary patterns are registered without validation; inflection must
//! either succeed or report a pattern error, never panic.

#![no_main]

use libfuzzer_sys::fuzz_target;
use inflect::{InflectError, Inflector, Matcher};

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    // "pattern\nreplacement\nword"
    let mut parts = input.splitn(3, '\n');
    let (Some(pattern), Some(replacement), Some(word)) = (parts.next(), parts.next(), parts.next())
    else {
        return;
    };

    let mut inflector = Inflector::new();
    inflector.register_plural_rule(Matcher::case_insensitive(pattern), replacement);

    match inflector.pluralize(word) {
        Ok(_) | Err(InflectError::Pattern { .. }) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
    let _ = inflector.singularize(word);
});
