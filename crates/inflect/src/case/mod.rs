//! Case-convention transforms.
//!
//! These are stateless string rewrites and never consult a rule store.
//! The `*_value` variants accept arbitrary JSON values and pass anything
//! that is not a string through untouched.

mod boundary;
mod camel;

use serde_json::Value;

pub use boundary::{DEFAULT_SEPARATOR, delimit, delimit_with};
pub use camel::camelize;

/// [`delimit_with`] over a JSON value; non-string values are returned as-is.
pub fn delimit_value(value: &Value, separator: Option<&str>) -> Value {
    match value {
        Value::String(s) => Value::String(delimit_with(s, separator.unwrap_or(DEFAULT_SEPARATOR))),
        other => other.clone(),
    }
}

/// [`camelize`] over a JSON value; non-string values are returned as-is.
pub fn camelize_value(value: &Value, upper_first: bool) -> Value {
    match value {
        Value::String(s) => Value::String(camelize(s, upper_first)),
        other => other.clone(),
    }
}
