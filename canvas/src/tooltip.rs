//! Tooltip text and placement for hovered lines and points.

#[cfg(test)]
#[path = "tooltip_test.rs"]
mod tooltip_test;

use serde::Serialize;

use crate::camera::Point;
use crate::consts::TOOLTIP_OFFSET_PX;
use crate::hit::{HoverKind, HoveredElement};
use crate::scatter::ScatterPoint;

/// A label the host draws next to the pointer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tooltip {
    pub text: String,
    /// Left edge, in canvas pixels.
    pub screen_x: f64,
    /// Top edge, in canvas pixels.
    pub screen_y: f64,
}

impl Tooltip {
    /// Tooltip for a hovered or dragged layer line.
    #[must_use]
    pub fn for_hover(hover: &HoveredElement) -> Self {
        let text = match hover.kind {
            HoverKind::Depth => format!("Depth: {:.2} m", hover.value),
            HoverKind::Velocity => format!("Velocity: {:.2} m/s", hover.value),
        };
        Self::at(text, Point::new(hover.screen_x, hover.screen_y))
    }

    /// Tooltip for a hovered scatter point drawn at `screen`.
    #[must_use]
    pub fn for_point(point: &ScatterPoint, screen: Point) -> Self {
        Self::at(format!("Period: {:.3} s, Velocity: {:.3} m/s", point.x, point.y), screen)
    }

    fn at(text: String, anchor: Point) -> Self {
        Self { text, screen_x: anchor.x + TOOLTIP_OFFSET_PX, screen_y: anchor.y + TOOLTIP_OFFSET_PX }
    }
}
