//! Editor-owned override attributes.
//!
//! The block editor keeps one typed attribute set per viewer instance and
//! serializes it as the `data-override` document, which merges with the
//! highest precedence. Building the set from a free-form document (an
//! uploaded config file, an editor field) goes through the coercion policy
//! in [`crate::config`].

use crate::config::{coerce_bool, coerce_int};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Options outside the viewer library's own schema, nested under `custom`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CustomOptions {
    pub controls_bottom: bool,
}

/// Per-instance override attributes, applied on top of the base
/// configuration. Defaults match the block registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverrideAttributes {
    pub base_path: String,
    pub hot_spot_debug: bool,
    pub auto_rotate: i64,
    pub auto_rotate_inactivity_delay: i64,
    pub yaw: i64,
    pub pitch: i64,
    pub hfov: i64,
    pub custom: CustomOptions,
}

impl Default for OverrideAttributes {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            hot_spot_debug: false,
            auto_rotate: -2,
            auto_rotate_inactivity_delay: 5000,
            yaw: 0,
            pitch: 0,
            hfov: 100,
            custom: CustomOptions::default(),
        }
    }
}

impl OverrideAttributes {
    /// Update from a free-form configuration document. Only fields present
    /// in the document change. Numeric fields go through integer coercion;
    /// boolean fields require a literal `true`.
    pub fn apply_config(&mut self, config: &Value) {
        let Some(fields) = config.as_object() else {
            return;
        };
        if let Some(path) = fields.get("basePath").and_then(Value::as_str) {
            if !path.is_empty() {
                self.base_path = path.to_owned();
            }
        }
        if let Some(value) = fields.get("hotSpotDebug") {
            self.hot_spot_debug = coerce_bool(value);
        }
        if let Some(value) = fields.get("autoRotate") {
            self.auto_rotate = coerce_int(value);
        }
        if let Some(value) = fields.get("autoRotateInactivityDelay") {
            self.auto_rotate_inactivity_delay = coerce_int(value);
        }
        if let Some(value) = fields.get("yaw") {
            self.yaw = coerce_int(value);
        }
        if let Some(value) = fields.get("pitch") {
            self.pitch = coerce_int(value);
        }
        if let Some(value) = fields.get("hfov") {
            self.hfov = coerce_int(value);
        }
        if let Some(custom) = fields.get("custom") {
            self.custom = CustomOptions {
                controls_bottom: custom.get("controlsBottom").map_or(false, coerce_bool),
            };
        }
    }

    /// Serialize as the `data-override` wire document.
    pub fn to_override_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| Value::Object(Default::default()))
    }
}
