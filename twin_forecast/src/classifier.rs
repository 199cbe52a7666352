//! Numeric variable selection

use crate::data::{parse_loose_number, DataPoint};
use serde_json::Value;

/// Keep the candidates whose value in the **first** record is numeric.
///
/// Only one sample is inspected, so a variable whose first value is empty or
/// malformed is excluded even when later samples are numeric. Candidate order
/// is preserved and duplicates are not removed.
pub fn select_numeric_variables<S: AsRef<str>>(data: &[DataPoint], candidates: &[S]) -> Vec<String> {
    let Some(first) = data.first() else {
        return Vec::new();
    };

    candidates
        .iter()
        .map(AsRef::as_ref)
        .filter(|name| first.get(name).is_some_and(is_numeric_sample))
        .map(str::to_string)
        .collect()
}

fn is_numeric_sample(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) if s.is_empty() => false,
        other => parse_loose_number(other).is_some_and(|v| !v.is_nan()),
    }
}
