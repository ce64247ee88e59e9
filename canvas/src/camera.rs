#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::axis::AxisLimits;

/// A point in either screen or axis space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the drawing surface in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True until the host has reported a usable canvas size.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Whether a screen point lies on the surface, edges included.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        (0.0..=self.width).contains(&pt.x) && (0.0..=self.height).contains(&pt.y)
    }
}

/// Affine mapping between axis units and screen pixels.
///
/// `xmin` maps to the left edge and `ymin` to the top edge, so depth grows
/// downward on screen. Cheap to rebuild; callers construct one from the
/// current limits and viewport whenever either changes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub limits: AxisLimits,
    pub viewport: Viewport,
}

impl Camera {
    #[must_use]
    pub fn new(limits: AxisLimits, viewport: Viewport) -> Self {
        Self { limits, viewport }
    }

    /// Axis x value to screen x.
    #[must_use]
    pub fn to_screen_x(&self, x: f64) -> f64 {
        (x - self.limits.xmin) / self.limits.x_span() * self.viewport.width
    }

    /// Axis y value to screen y.
    #[must_use]
    pub fn to_screen_y(&self, y: f64) -> f64 {
        (y - self.limits.ymin) / self.limits.y_span() * self.viewport.height
    }

    /// Screen x to axis x. Requires a non-empty viewport.
    #[must_use]
    pub fn from_screen_x(&self, sx: f64) -> f64 {
        sx / self.viewport.width * self.limits.x_span() + self.limits.xmin
    }

    /// Screen y to axis y. Requires a non-empty viewport.
    #[must_use]
    pub fn from_screen_y(&self, sy: f64) -> f64 {
        sy / self.viewport.height * self.limits.y_span() + self.limits.ymin
    }

    /// Convert an axis-space point to screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(self.to_screen_x(world.x), self.to_screen_y(world.y))
    }

    /// Convert a screen-space point to axis coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(self.from_screen_x(screen.x), self.from_screen_y(screen.y))
    }
}
