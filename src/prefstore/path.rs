//! Dotted-path traversal and mutation over JSON settings trees.
//!
//! A path like `"comms.noiseGateThreshold"` addresses one location in the
//! nested mapping. Lookups return `None` for anything absent; absence is
//! expected, not an error. Mutations never touch the caller's document:
//! [`assign`] and [`remove`] deep-copy first, so earlier snapshots held by
//! other callers stay valid.

use serde_json::{Map, Value};

/// Walk `root` segment by segment. Returns `None` if any intermediate or
/// terminal segment is absent or a non-mapping is hit mid-path.
pub fn resolve<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

/// Return a copy of `root` with `value` placed at `path`.
///
/// Intermediate mappings are created as needed. An intermediate segment
/// holding a scalar or array is overwritten with an empty mapping so the
/// write can proceed; the prior value at that location is lost.
pub fn assign(root: &Value, path: &str, value: Value) -> Value {
    let mut copy = root.clone();
    let target = ensure_mapping(&mut copy);
    let mut current = target;
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            break;
        }
        let entry = current
            .entry(segment.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = match entry {
            Value::Object(map) => map,
            _ => break,
        };
    }
    copy
}

/// Return a copy of `root` with the value at `path` removed, if present.
pub fn remove(root: &Value, path: &str) -> Value {
    let mut copy = root.clone();
    let mut current = match copy.as_object_mut() {
        Some(map) => map,
        None => return copy,
    };
    let mut segments = path.split('.').peekable();
    while let Some(segment) = segments.next() {
        if segments.peek().is_none() {
            current.remove(segment);
            break;
        }
        match current.get_mut(segment).and_then(Value::as_object_mut) {
            Some(next) => current = next,
            None => break,
        }
    }
    copy
}

fn ensure_mapping(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_leaf() {
        let root = json!({ "comms": { "webcamFPS": 30 } });
        assert_eq!(resolve(&root, "comms.webcamFPS"), Some(&json!(30)));
    }

    #[test]
    fn test_resolve_subtree() {
        let root = json!({ "comms": { "webcamFPS": 30 } });
        assert_eq!(resolve(&root, "comms"), Some(&json!({ "webcamFPS": 30 })));
    }

    #[test]
    fn test_resolve_absent_returns_none() {
        let root = json!({ "comms": {} });
        assert_eq!(resolve(&root, "comms.missing"), None);
        assert_eq!(resolve(&root, "nothing.at.all"), None);
    }

    #[test]
    fn test_resolve_through_scalar_returns_none() {
        let root = json!({ "comms": "disabled" });
        assert_eq!(resolve(&root, "comms.webcamFPS"), None);
    }

    #[test]
    fn test_assign_does_not_mutate_input() {
        let root = json!({ "comms": { "webcamFPS": 30 } });
        let updated = assign(&root, "comms.webcamFPS", json!(60));
        assert_eq!(resolve(&root, "comms.webcamFPS"), Some(&json!(30)));
        assert_eq!(resolve(&updated, "comms.webcamFPS"), Some(&json!(60)));
    }

    #[test]
    fn test_assign_creates_intermediates() {
        let root = json!({});
        let updated = assign(&root, "a.b.c", json!(1));
        assert_eq!(resolve(&updated, "a.b.c"), Some(&json!(1)));
    }

    #[test]
    fn test_assign_overwrites_scalar_intermediate() {
        let root = json!({ "comms": "disabled" });
        let updated = assign(&root, "comms.webcamFPS", json!(24));
        assert_eq!(resolve(&updated, "comms.webcamFPS"), Some(&json!(24)));
    }

    #[test]
    fn test_assign_overwrites_array_intermediate() {
        let root = json!({ "comms": [1, 2, 3] });
        let updated = assign(&root, "comms.webcamFPS", json!(24));
        assert_eq!(resolve(&updated, "comms.webcamFPS"), Some(&json!(24)));
    }

    #[test]
    fn test_assign_keeps_sibling_keys() {
        let root = json!({ "comms": { "webcamFPS": 30, "entryMode": "AUDIO_ONLY" } });
        let updated = assign(&root, "comms.webcamFPS", json!(60));
        assert_eq!(
            resolve(&updated, "comms.entryMode"),
            Some(&json!("AUDIO_ONLY"))
        );
    }

    #[test]
    fn test_remove_leaf() {
        let root = json!({ "comms": { "webcamFPS": 30, "entryMode": "AUDIO_ONLY" } });
        let updated = remove(&root, "comms.webcamFPS");
        assert_eq!(resolve(&updated, "comms.webcamFPS"), None);
        assert_eq!(
            resolve(&updated, "comms.entryMode"),
            Some(&json!("AUDIO_ONLY"))
        );
        assert_eq!(resolve(&root, "comms.webcamFPS"), Some(&json!(30)));
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let root = json!({ "comms": {} });
        assert_eq!(remove(&root, "comms.missing.deep"), root);
    }
}
