//! Reconciliation of a stored settings tree against the Default Schema.
//!
//! Runs on every load so that keys introduced by newer schema revisions
//! appear without discarding stored overrides. Keys present only in the
//! stored tree (obsolete settings) are preserved, never pruned.

use serde_json::{Map, Value};

/// Merge `defaults` into `stored` and return the reconciled tree.
///
/// For every key in the default subtree: if both sides hold mappings,
/// recurse; if the stored tree lacks the key, adopt the default; otherwise
/// the stored value wins unchanged. Arrays are atomic leaves and are never
/// merged element-wise.
pub fn reconcile(stored: &Value, defaults: &Value) -> Value {
    match (stored.as_object(), defaults.as_object()) {
        (Some(stored_map), Some(default_map)) => {
            let mut merged = stored_map.clone();
            merge_into(&mut merged, default_map);
            Value::Object(merged)
        }
        // A non-mapping root was stored; the defaults shape the document.
        (None, Some(default_map)) => Value::Object(default_map.clone()),
        _ => stored.clone(),
    }
}

fn merge_into(stored: &mut Map<String, Value>, defaults: &Map<String, Value>) {
    for (key, default_value) in defaults {
        match stored.get_mut(key) {
            Some(Value::Object(stored_child)) => {
                if let Some(default_child) = default_value.as_object() {
                    merge_into(stored_child, default_child);
                }
            }
            Some(_) => {} // stored override wins, arrays included
            None => {
                stored.insert(key.clone(), default_value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_stored_override_wins() {
        let stored = json!({ "comms": { "webcamFPS": 60 } });
        let defaults = json!({ "comms": { "webcamFPS": 30 } });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged["comms"]["webcamFPS"], json!(60));
    }

    #[test]
    fn test_missing_key_adopts_default() {
        let stored = json!({ "comms": { "webcamFPS": 60 } });
        let defaults = json!({ "comms": { "webcamFPS": 30, "expanderLevel": "MEDIUM" } });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged["comms"]["expanderLevel"], json!("MEDIUM"));
        assert_eq!(merged["comms"]["webcamFPS"], json!(60));
    }

    #[test]
    fn test_unknown_stored_keys_preserved() {
        let stored = json!({ "legacy": { "oldKnob": true } });
        let defaults = json!({ "comms": { "webcamFPS": 30 } });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged["legacy"]["oldKnob"], json!(true));
        assert_eq!(merged["comms"]["webcamFPS"], json!(30));
    }

    #[test]
    fn test_scalar_where_default_has_mapping_is_kept() {
        // A stored scalar shadowing a default subtree stays as stored; the
        // write path deals with the shape conflict, not the merge.
        let stored = json!({ "comms": "disabled" });
        let defaults = json!({ "comms": { "webcamFPS": 30 } });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged["comms"], json!("disabled"));
    }

    #[test]
    fn test_arrays_are_atomic() {
        let stored = json!({ "pinned": ["a"] });
        let defaults = json!({ "pinned": ["a", "b", "c"] });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged["pinned"], json!(["a"]));
    }

    #[test]
    fn test_deep_nesting() {
        let stored = json!({ "a": { "b": { "kept": 1 } } });
        let defaults = json!({ "a": { "b": { "kept": 0, "added": 2 }, "c": 3 } });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged["a"]["b"]["kept"], json!(1));
        assert_eq!(merged["a"]["b"]["added"], json!(2));
        assert_eq!(merged["a"]["c"], json!(3));
    }

    #[test]
    fn test_non_mapping_root_falls_back_to_defaults() {
        let stored = json!("garbage");
        let defaults = json!({ "comms": { "webcamFPS": 30 } });
        let merged = reconcile(&stored, &defaults);
        assert_eq!(merged, defaults);
    }
}
