#![allow(clippy::float_cmp)]

use super::*;

fn hover(kind: HoverKind, value: f64) -> HoveredElement {
    HoveredElement { kind, index: 0, value, screen_x: 100.0, screen_y: 40.0 }
}

#[test]
fn depth_tooltip_text() {
    let t = Tooltip::for_hover(&hover(HoverKind::Depth, 1.819));
    assert_eq!(t.text, "Depth: 1.82 m");
}

#[test]
fn velocity_tooltip_text() {
    let t = Tooltip::for_hover(&hover(HoverKind::Velocity, 208.308));
    assert_eq!(t.text, "Velocity: 208.31 m/s");
}

#[test]
fn tooltip_is_offset_from_pointer() {
    let t = Tooltip::for_hover(&hover(HoverKind::Depth, 0.0));
    assert_eq!(t.screen_x, 100.0 + TOOLTIP_OFFSET_PX);
    assert_eq!(t.screen_y, 40.0 + TOOLTIP_OFFSET_PX);
}

#[test]
fn scatter_tooltip_text() {
    let t = Tooltip::for_point(&ScatterPoint::new(0.5, 250.0), Point::new(10.0, 20.0));
    assert_eq!(t.text, "Period: 0.500 s, Velocity: 250.000 m/s");
    assert_eq!(t.screen_x, 10.0 + TOOLTIP_OFFSET_PX);
}

#[test]
fn tooltip_serializes_camel_case() {
    let t = Tooltip::for_hover(&hover(HoverKind::Depth, 2.0));
    let json = serde_json::to_value(&t).unwrap();
    assert_eq!(json["text"], "Depth: 2.00 m");
    assert_eq!(json["screenX"], 112.0);
    assert_eq!(json["screenY"], 52.0);
}
