//! Viewer configuration: parsing, override merging, and base-path repair.
//!
//! A configuration is a JSON object whose recognized fields use the viewer
//! library's wire names (`basePath`, `yaw`, `custom`, ...). Everything else
//! is carried through untouched so hotspot lists and other library-specific
//! options survive the merge.

use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no configuration supplied")]
    NoConfiguration,
    #[error("configuration is not valid JSON: {0}")]
    MalformedConfiguration(#[source] serde_json::Error),
    #[error("configuration root must be a JSON object")]
    NotAnObject,
}

/// One effective viewer configuration, resolved from whatever sources a
/// mount point declares.
#[derive(Debug, Clone, Default)]
pub struct ViewerConfig {
    fields: Map<String, Value>,
}

impl ViewerConfig {
    /// Parse a literal JSON document. An empty/whitespace-only document is
    /// the "nothing supplied" outcome, distinct from a parse error.
    pub fn parse(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Err(ConfigError::NoConfiguration);
        }
        let value = serde_json::from_str(text).map_err(ConfigError::MalformedConfiguration)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ConfigError> {
        match value {
            Value::Object(fields) => Ok(Self { fields }),
            Value::Null => Err(ConfigError::NoConfiguration),
            _ => Err(ConfigError::NotAnObject),
        }
    }

    /// Apply override attributes on top of this configuration.
    pub fn apply_overrides(&mut self, overrides: &Map<String, Value>) {
        merge_overrides(&mut self.fields, overrides);
    }

    pub fn base_path(&self) -> Option<&str> {
        self.fields.get("basePath").and_then(Value::as_str)
    }

    /// Fill in `basePath` from the directory portion of `url` when it is
    /// still unset or empty after merging.
    pub fn ensure_base_path_from(&mut self, url: &str) {
        if self.base_path().map_or(true, str::is_empty) {
            self.fields
                .insert("basePath".to_owned(), Value::String(directory_of(url).to_owned()));
        }
    }

    /// Whether the synthesized bottom control overlay is requested. Only a
    /// literal `true` counts.
    pub fn controls_bottom(&self) -> bool {
        self.fields
            .get("custom")
            .and_then(|custom| custom.get("controlsBottom"))
            .map_or(false, |value| matches!(value, Value::Bool(true)))
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Serialize for hand-off to the viewer library.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.fields).unwrap_or_else(|_| String::from("{}"))
    }
}

/// Merge overrides into a base configuration. Top-level fields replace
/// wholesale, except `custom`: its keys merge into any existing `custom`
/// object so toggling one custom option keeps the others.
pub fn merge_overrides(base: &mut Map<String, Value>, overrides: &Map<String, Value>) {
    for (key, value) in overrides {
        if key == "custom" {
            if let (Some(Value::Object(existing)), Value::Object(incoming)) =
                (base.get_mut("custom"), value)
            {
                for (sub_key, sub_value) in incoming {
                    existing.insert(sub_key.clone(), sub_value.clone());
                }
                continue;
            }
        }
        base.insert(key.clone(), value.clone());
    }
}

/// Directory portion of a URL: everything up to and including the final
/// `/`. A URL containing no `/` is returned unchanged.
pub fn directory_of(url: &str) -> &str {
    match url.rfind('/') {
        Some(idx) => &url[..=idx],
        None => url,
    }
}

/// Integer coercion for override fields: JSON numbers truncate toward
/// zero, strings parse as an optional sign plus leading base-10 digits,
/// anything else is 0.
pub fn coerce_int(value: &Value) -> i64 {
    match value {
        Value::Number(number) => match number.as_i64() {
            Some(int) => int,
            None => number.as_f64().map_or(0, |float| float.trunc() as i64),
        },
        Value::String(text) => parse_leading_int(text),
        _ => 0,
    }
}

/// Boolean coercion for override fields: only a literal `true` passes.
pub fn coerce_bool(value: &Value) -> bool {
    matches!(value, Value::Bool(true))
}

fn parse_leading_int(text: &str) -> i64 {
    let text = text.trim_start();
    let (sign, digits) = match text.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, text.strip_prefix('+').unwrap_or(text)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().map_or(0, |n| sign * n)
}
