// Copyright 2026 the Lectern Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Emptiness test for serialized element state.

use serde_json::Value;

/// Returns `true` if `state` carries no answer.
///
/// `null` and the empty string are empty. Arrays and objects are empty when
/// every item they contain is empty (so `[[], {"a": null}]` is empty).
/// Numbers and booleans are never empty: `0` and `false` are answers.
#[must_use]
pub fn is_empty_state(state: &Value) -> bool {
    match state {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
        Value::Array(items) => items.iter().all(is_empty_state),
        Value::Object(map) => map.values().all(is_empty_state),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert!(is_empty_state(&Value::Null));
        assert!(is_empty_state(&json!("")));
        assert!(!is_empty_state(&json!("a")));
        assert!(!is_empty_state(&json!(0)));
        assert!(!is_empty_state(&json!(false)));
    }

    #[test]
    fn containers_recurse() {
        assert!(is_empty_state(&json!([])));
        assert!(is_empty_state(&json!({})));
        assert!(is_empty_state(&json!([[], {"a": null, "b": ""}])));
        assert!(!is_empty_state(&json!({"answers": [null, 2]})));
    }
}
