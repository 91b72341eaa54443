//! Fuzz target for the case transforms.
//!
//! This fuzzer tests that delimit and camelize never panic, including on
//! multi-byte input, and that non-string JSON values pass through.

#![no_main]

use libfuzzer_sys::fuzz_target;
use inflect::{camelize, camelize_value, delimit_value, delimit_with};

fuzz_target!(|data: &[u8]| {
    let lossy = String::from_utf8_lossy(data);

    // First byte picks the separator and casing, the rest is the input
    let (sep, upper) = match data.first() {
        Some(b) => (["-", "_", "", "::"][(*b % 4) as usize], b & 0x80 != 0),
        None => ("-", false),
    };

    let _ = delimit_with(&lossy, sep);
    let _ = camelize(&lossy, upper);

    if let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) {
        let delimited = delimit_value(&value, Some(sep));
        let camelized = camelize_value(&value, upper);
        if !value.is_string() {
            assert_eq!(delimited, value);
            assert_eq!(camelized, value);
        }
    }
});
