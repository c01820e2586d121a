use crate::{path, schema};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The root persisted entity: a modification timestamp plus the nested
/// settings tree. The tree is kept as raw [`Value`] so unknown or legacy
/// keys survive round trips; the typed views below cover the well-known
/// categories.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SettingsDocument {
    pub last_updated: DateTime<Utc>,
    pub settings: Value,
}

impl SettingsDocument {
    /// Fresh document seeded from the Default Schema.
    pub fn seeded() -> Self {
        Self {
            last_updated: Utc::now(),
            settings: schema::default_settings().clone(),
        }
    }

    /// Refresh the modification timestamp. Called on every save.
    pub fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    /// Typed view of the `comms` category. Unknown or malformed fields fall
    /// back to their schema defaults rather than failing.
    pub fn comms(&self) -> CommsSettings {
        self.page("comms")
    }

    /// Typed view of the `appearance` category.
    pub fn appearance(&self) -> AppearanceSettings {
        self.page("appearance")
    }

    /// Typed view of the `notifications` category.
    pub fn notifications(&self) -> NotificationSettings {
        self.page("notifications")
    }

    fn page<T: Default + for<'de> Deserialize<'de>>(&self, page_path: &str) -> T {
        path::resolve(&self.settings, page_path)
            .cloned()
            .and_then(|v| serde_json::from_value(v).ok())
            .unwrap_or_default()
    }
}

/// Audio/video communication settings (`comms` page).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct CommsSettings {
    pub entry_mode: String,
    pub webcam_quality: String,
    #[serde(rename = "webcamFPS")]
    pub webcam_fps: u32,
    pub screen_share_quality: String,
    #[serde(rename = "screenShareFPS")]
    pub screen_share_fps: u32,
    pub noise_suppression_level: String,
    pub expander_level: String,
    pub noise_gate_type: String,
    pub noise_gate_threshold: i32,
    pub typing_attenuation_level: String,
}

impl Default for CommsSettings {
    fn default() -> Self {
        Self {
            entry_mode: "AUDIO_ONLY".to_string(),
            webcam_quality: "HD".to_string(),
            webcam_fps: 30,
            screen_share_quality: "HD".to_string(),
            screen_share_fps: 30,
            noise_suppression_level: "MEDIUM".to_string(),
            expander_level: "MEDIUM".to_string(),
            noise_gate_type: "ADAPTIVE".to_string(),
            noise_gate_threshold: -20,
            typing_attenuation_level: "MEDIUM".to_string(),
        }
    }
}

/// Theme and layout settings (`appearance` page).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct AppearanceSettings {
    pub color_scheme: String,
    pub font_scale: f64,
    pub compact_mode: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            color_scheme: "SYSTEM".to_string(),
            font_scale: 1.0,
            compact_mode: false,
        }
    }
}

/// Notification settings (`notifications` page).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct NotificationSettings {
    pub enabled: bool,
    pub sounds: bool,
    pub mentions_only: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            sounds: true,
            mentions_only: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seeded_matches_schema() {
        let doc = SettingsDocument::seeded();
        assert_eq!(&doc.settings, schema::default_settings());
    }

    #[test]
    fn test_typed_comms_defaults_match_schema() {
        let typed = serde_json::to_value(CommsSettings::default()).unwrap();
        assert_eq!(&typed, schema::default_value("comms").unwrap());
    }

    #[test]
    fn test_typed_view_fills_missing_fields() {
        let doc = SettingsDocument {
            last_updated: Utc::now(),
            settings: json!({ "comms": { "webcamFPS": 60 } }),
        };
        let comms = doc.comms();
        assert_eq!(comms.webcam_fps, 60);
        assert_eq!(comms.noise_gate_threshold, -20);
    }

    #[test]
    fn test_typed_view_of_missing_page_is_default() {
        let doc = SettingsDocument {
            last_updated: Utc::now(),
            settings: json!({}),
        };
        assert_eq!(doc.appearance(), AppearanceSettings::default());
    }

    #[test]
    fn test_document_wire_names() {
        let doc = SettingsDocument::seeded();
        let raw = serde_json::to_value(&doc).unwrap();
        assert!(raw.get("lastUpdated").is_some());
        assert!(raw.get("settings").is_some());
    }
}
