//! # Default Schema
//!
//! The constant template of every known settings category and its baseline
//! value. It is never persisted: it seeds first-run documents, fills in
//! missing keys during reconciliation (see [`crate::merge`]), and serves as
//! the fallback of last resort for reads.
//!
//! Keys use the wire spelling (camelCase) because the schema is data, not a
//! Rust API; the typed views over it live in [`crate::model`].

use crate::path;
use once_cell::sync::Lazy;
use serde_json::{json, Value};

static DEFAULT_SETTINGS: Lazy<Value> = Lazy::new(|| {
    json!({
        "comms": {
            "entryMode": "AUDIO_ONLY",
            "webcamQuality": "HD",
            "webcamFPS": 30,
            "screenShareQuality": "HD",
            "screenShareFPS": 30,
            "noiseSuppressionLevel": "MEDIUM",
            "expanderLevel": "MEDIUM",
            "noiseGateType": "ADAPTIVE",
            "noiseGateThreshold": -20,
            "typingAttenuationLevel": "MEDIUM"
        },
        "appearance": {
            "colorScheme": "SYSTEM",
            "fontScale": 1.0,
            "compactMode": false
        },
        "notifications": {
            "enabled": true,
            "sounds": true,
            "mentionsOnly": false
        }
    })
});

/// The full default settings tree. Read-only; callers clone what they keep.
pub fn default_settings() -> &'static Value {
    &DEFAULT_SETTINGS
}

/// Default value at a dotted path, if the schema defines one.
pub fn default_value(path_str: &str) -> Option<&'static Value> {
    path::resolve(&DEFAULT_SETTINGS, path_str)
}

/// Default subtree at a dotted path, if the schema defines a mapping there.
pub fn default_subtree(path_str: &str) -> Option<&'static serde_json::Map<String, Value>> {
    path::resolve(&DEFAULT_SETTINGS, path_str).and_then(Value::as_object)
}
