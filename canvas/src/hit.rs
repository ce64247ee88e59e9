//! Hit-testing against boundary and velocity lines.
//!
//! Lines are one or two pixels wide, far too thin to target directly, so a
//! pointer hits a line when it is within a screen-space tolerance of it.
//! Boundaries are tested first, top to bottom; only when no boundary matches
//! are velocity lines tested. This resolves the corners where a velocity line
//! meets a boundary in favour of the boundary.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Point};
use crate::doc::{Layer, LayerModel};

/// Which line was hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitPart {
    /// Boundary `k`, numbered `0..=len` from the top of the stack.
    Boundary(usize),
    /// The velocity line of layer `i`.
    Velocity(usize),
}

/// What kind of value a hovered line represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HoverKind {
    Depth,
    Velocity,
}

/// The line under the pointer, with the value it carries and where the
/// pointer was when it was found.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HoveredElement {
    pub kind: HoverKind,
    /// Boundary index for [`HoverKind::Depth`], layer index for [`HoverKind::Velocity`].
    pub index: usize,
    /// Depth or velocity, in axis units.
    pub value: f64,
    pub screen_x: f64,
    pub screen_y: f64,
}

impl HoveredElement {
    /// The hit part this element describes.
    #[must_use]
    pub fn part(&self) -> HitPart {
        match self.kind {
            HoverKind::Depth => HitPart::Boundary(self.index),
            HoverKind::Velocity => HitPart::Velocity(self.index),
        }
    }
}

/// Find the line under `screen_pt`, if any.
#[must_use]
pub fn hit_test(screen_pt: Point, doc: &LayerModel, camera: &Camera, tolerance_px: f64) -> Option<HitPart> {
    hit_boundary(screen_pt, doc, camera, tolerance_px).or_else(|| hit_velocity(screen_pt, doc, camera, tolerance_px))
}

fn hit_boundary(screen_pt: Point, doc: &LayerModel, camera: &Camera, tolerance_px: f64) -> Option<HitPart> {
    doc.boundary_depths()
        .into_iter()
        .position(|depth| (screen_pt.y - camera.to_screen_y(depth)).abs() < tolerance_px)
        .map(HitPart::Boundary)
}

fn hit_velocity(screen_pt: Point, doc: &LayerModel, camera: &Camera, tolerance_px: f64) -> Option<HitPart> {
    doc.layers()
        .iter()
        .position(|layer| {
            let (top, bottom) = screen_span(layer, camera);
            (screen_pt.x - camera.to_screen_x(layer.velocity)).abs() < tolerance_px
                && screen_pt.y >= top
                && screen_pt.y <= bottom
        })
        .map(HitPart::Velocity)
}

/// Describe `part` as a hovered element at `screen_pt`.
#[must_use]
pub fn describe(part: HitPart, screen_pt: Point, doc: &LayerModel) -> Option<HoveredElement> {
    let (kind, index, value) = match part {
        HitPart::Boundary(k) => (HoverKind::Depth, k, doc.boundary_depth(k)?),
        HitPart::Velocity(i) => (HoverKind::Velocity, i, doc.get(i)?.velocity),
    };
    Some(HoveredElement { kind, index, value, screen_x: screen_pt.x, screen_y: screen_pt.y })
}

/// Hit-test and describe in one step.
#[must_use]
pub fn hover_at(screen_pt: Point, doc: &LayerModel, camera: &Camera, tolerance_px: f64) -> Option<HoveredElement> {
    hit_test(screen_pt, doc, camera, tolerance_px).and_then(|part| describe(part, screen_pt, doc))
}

/// Screen-space `(top, bottom)` of a layer's depth interval.
#[must_use]
pub fn screen_span(layer: &Layer, camera: &Camera) -> (f64, f64) {
    let a = camera.to_screen_y(layer.start_depth);
    let b = camera.to_screen_y(layer.end_depth);
    (a.min(b), a.max(b))
}
