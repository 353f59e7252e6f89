// src/validators.rs
// Pure predicates over incoming JSON payloads. Total over arbitrary input:
// nothing here errors or panics, every function answers yes or no.

use serde_json::Value;

/// True iff the textual form of the value consists only of decimal digits.
/// No sign, no empty string, nothing but strings and numbers qualifies.
pub fn is_valid_integer(value: &Value) -> bool {
    match value {
        Value::String(s) => is_digits(s),
        Value::Number(n) => is_digits(&n.to_string()),
        _ => false,
    }
}

/// True iff the value is a JSON string that is non-empty after trimming.
pub fn is_valid_string(value: &Value) -> bool {
    value.as_str().is_some_and(|s| !s.trim().is_empty())
}

/// Shape check for test case payloads: an object with a valid `name`, and a
/// valid `description` when one is present.
pub fn is_valid_test_case_data(data: &Value) -> bool {
    let Some(map) = data.as_object() else {
        return false;
    };

    if !map.get("name").is_some_and(is_valid_string) {
        return false;
    }

    if let Some(description) = map.get("description") {
        if !is_valid_string(description) {
            return false;
        }
    }

    true
}

/// Shape check for execution result payloads: `test_case_id` and `result`
/// must both be present and non-empty, the id all digits, the result a
/// non-blank string.
pub fn is_valid_execution_data(data: &Value) -> bool {
    let Some(map) = data.as_object() else {
        return false;
    };

    let test_case_id = map.get("test_case_id");
    let result = map.get("result");

    if !test_case_id.is_some_and(is_truthy) || !result.is_some_and(is_truthy) {
        return false;
    }

    test_case_id.is_some_and(is_valid_integer) && result.is_some_and(is_valid_string)
}

/// Extract the integer value of an id that already passed
/// [`is_valid_integer`]. Returns None for anything else.
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

pub fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

// Empty strings, zero, null, and false all disqualify a required field.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
