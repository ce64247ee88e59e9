#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn default_matches_constants() {
    let c = EditorConfig::default();
    assert_eq!(c.hit_tolerance_px, 10.0);
    assert_eq!(c.min_thickness, 0.1);
    assert_eq!(c.axis_padding, 0.1);
    assert_eq!(c.grid_step_px, GRID_STEP_PX);
    assert_eq!(c.hit_rect_half_width_px, HIT_RECT_HALF_WIDTH_PX);
}

#[test]
fn empty_json_is_default() {
    assert_eq!(EditorConfig::from_json("").unwrap(), EditorConfig::default());
    assert_eq!(EditorConfig::from_json("  ").unwrap(), EditorConfig::default());
    assert_eq!(EditorConfig::from_json("{}").unwrap(), EditorConfig::default());
}

#[test]
fn partial_json_overrides_named_fields() {
    let c = EditorConfig::from_json(r#"{"hit_tolerance_px": 6, "grid_step_px": 0}"#).unwrap();
    assert_eq!(c.hit_tolerance_px, 6.0);
    assert_eq!(c.grid_step_px, 0.0);
    assert_eq!(c.min_thickness, MIN_THICKNESS);
}

#[test]
fn malformed_json_is_parse_error() {
    let err = EditorConfig::from_json("{not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid editor config:"));
}

#[test]
fn zero_tolerance_is_rejected() {
    let err = EditorConfig::from_json(r#"{"hit_tolerance_px": 0}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "hit_tolerance_px", .. }));
}

#[test]
fn negative_thickness_is_rejected() {
    let err = EditorConfig::from_json(r#"{"min_thickness": -1}"#).unwrap_err();
    assert!(matches!(err, ConfigError::OutOfRange { field: "min_thickness", .. }));
}

#[test]
fn negative_padding_is_rejected() {
    let err = EditorConfig::from_json(r#"{"axis_padding": -0.5}"#).unwrap_err();
    assert_eq!(err.to_string(), "config field `axis_padding` is out of range: -0.5");
}
