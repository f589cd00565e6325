// Host-side tests for configuration parsing, merging, and base-path repair.

use pano_core::{coerce_bool, coerce_int, directory_of, ConfigError, ViewerConfig};
use serde_json::{json, Map, Value};

fn object(value: Value) -> Map<String, Value> {
    value.as_object().cloned().expect("object literal")
}

#[test]
fn override_replaces_top_level_but_merges_custom() {
    let mut config = ViewerConfig::from_value(json!({
        "yaw": 10,
        "custom": {"controlsBottom": false, "foo": 1}
    }))
    .unwrap();

    config.apply_overrides(&object(json!({
        "yaw": 20,
        "custom": {"controlsBottom": true}
    })));

    assert_eq!(config.get("yaw"), Some(&json!(20)));
    assert_eq!(
        config.get("custom"),
        Some(&json!({"controlsBottom": true, "foo": 1}))
    );
    assert!(config.controls_bottom());
}

#[test]
fn override_inserts_custom_when_base_has_none() {
    let mut config = ViewerConfig::from_value(json!({"yaw": 0})).unwrap();
    config.apply_overrides(&object(json!({"custom": {"controlsBottom": true}})));
    assert!(config.controls_bottom());
}

#[test]
fn unknown_fields_pass_through_merge_untouched() {
    let mut config = ViewerConfig::from_value(json!({
        "panorama": "tiles/pano.jpg",
        "hotSpots": [{"pitch": 1.0, "yaw": 2.0}]
    }))
    .unwrap();
    config.apply_overrides(&object(json!({"hfov": 90})));

    assert_eq!(config.get("panorama"), Some(&json!("tiles/pano.jpg")));
    assert_eq!(config.get("hotSpots"), Some(&json!([{"pitch": 1.0, "yaw": 2.0}])));
    assert_eq!(config.get("hfov"), Some(&json!(90)));
}

#[test]
fn base_path_derived_from_remote_url_directory() {
    let mut config = ViewerConfig::from_value(json!({"panorama": "img.jpg"})).unwrap();
    config.ensure_base_path_from("/panorama/project/config.json");
    assert_eq!(config.base_path(), Some("/panorama/project/"));
}

#[test]
fn explicit_base_path_survives_repair() {
    let mut config = ViewerConfig::from_value(json!({"basePath": "/elsewhere/"})).unwrap();
    config.ensure_base_path_from("/panorama/project/config.json");
    assert_eq!(config.base_path(), Some("/elsewhere/"));
}

#[test]
fn empty_base_path_is_repaired() {
    let mut config = ViewerConfig::from_value(json!({"basePath": ""})).unwrap();
    config.ensure_base_path_from("/panorama/project/config.json");
    assert_eq!(config.base_path(), Some("/panorama/project/"));
}

#[test]
fn directory_of_keeps_a_slashless_url_unchanged() {
    assert_eq!(directory_of("config.json"), "config.json");
    assert_eq!(directory_of("/config.json"), "/");
    assert_eq!(directory_of("https://host/pano/config.json"), "https://host/pano/");
}

#[test]
fn parse_distinguishes_empty_from_malformed() {
    assert!(matches!(
        ViewerConfig::parse(""),
        Err(ConfigError::NoConfiguration)
    ));
    assert!(matches!(
        ViewerConfig::parse("   \n"),
        Err(ConfigError::NoConfiguration)
    ));
    assert!(matches!(
        ViewerConfig::parse("{oops"),
        Err(ConfigError::MalformedConfiguration(_))
    ));
    assert!(matches!(
        ViewerConfig::parse("[1, 2]"),
        Err(ConfigError::NotAnObject)
    ));
    assert!(ViewerConfig::parse("{\"yaw\": 1}").is_ok());
}

#[test]
fn controls_bottom_requires_literal_true() {
    let truthy = ViewerConfig::from_value(json!({"custom": {"controlsBottom": true}})).unwrap();
    assert!(truthy.controls_bottom());

    for custom in [json!(1), json!("true"), json!(false), json!(null)] {
        let config =
            ViewerConfig::from_value(json!({"custom": {"controlsBottom": custom}})).unwrap();
        assert!(!config.controls_bottom(), "{custom} should not enable controls");
    }

    let absent = ViewerConfig::from_value(json!({"yaw": 1})).unwrap();
    assert!(!absent.controls_bottom());
}

#[test]
fn integer_coercion_follows_leading_digit_parse() {
    assert_eq!(coerce_int(&json!("abc")), 0);
    assert_eq!(coerce_int(&json!("7")), 7);
    assert_eq!(coerce_int(&json!("-5")), -5);
    assert_eq!(coerce_int(&json!("+3")), 3);
    assert_eq!(coerce_int(&json!("12px")), 12);
    assert_eq!(coerce_int(&json!("  8")), 8);
    assert_eq!(coerce_int(&json!(5.9)), 5);
    assert_eq!(coerce_int(&json!(-2)), -2);
    assert_eq!(coerce_int(&json!(true)), 0);
    assert_eq!(coerce_int(&json!(null)), 0);
    assert_eq!(coerce_int(&json!({})), 0);
}

#[test]
fn boolean_coercion_is_strict() {
    assert!(coerce_bool(&json!(true)));
    assert!(!coerce_bool(&json!(false)));
    assert!(!coerce_bool(&json!(1)));
    assert!(!coerce_bool(&json!("true")));
    assert!(!coerce_bool(&json!(null)));
}

#[test]
fn to_json_round_trips_through_serde() {
    let config = ViewerConfig::from_value(json!({"yaw": 20, "basePath": "/p/"})).unwrap();
    let text = config.to_json();
    let reparsed: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(reparsed, json!({"yaw": 20, "basePath": "/p/"}));
}
