//! Scatter panel: uploaded period/velocity points with hover inspection.
//!
//! Points are read-only. Hover is tracked by index, so two points with equal
//! coordinates are still distinct and only one highlights at a time.

#[cfg(test)]
#[path = "scatter_test.rs"]
mod scatter_test;

use serde::{Deserialize, Serialize};

use crate::axis::{AxisBound, AxisError, AxisLimits};
use crate::camera::{Camera, Point, Viewport};
use crate::config::EditorConfig;
use crate::ingest;
use crate::render::{self, Scene};
use crate::tooltip::Tooltip;

/// One observation: `x` is period, `y` is velocity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn as_point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Actions returned from scatter handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum ScatterAction {
    PointsChanged(usize),
    HoverChanged(Option<usize>),
    LimitsChanged(AxisLimits),
    RenderNeeded,
}

/// Scatter panel state, independent of any browser element.
#[derive(Debug, Clone, Default)]
pub struct ScatterCore {
    pub points: Vec<ScatterPoint>,
    pub limits: AxisLimits,
    pub viewport: Viewport,
    pub dpr: f64,
    pub hovered: Option<usize>,
    pub config: EditorConfig,
}

impl ScatterCore {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self { dpr: 1.0, config, ..Default::default() }
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::new(self.limits, self.viewport)
    }

    /// Replace every point and fit the axes to them.
    pub fn load_points(&mut self, points: Vec<ScatterPoint>) -> Vec<ScatterAction> {
        self.points = points;
        self.hovered = None;
        let mut actions = vec![ScatterAction::PointsChanged(self.points.len()), ScatterAction::HoverChanged(None)];
        if let Some(limits) = ingest::scatter_limits(&self.points, self.config.axis_padding) {
            self.limits = limits;
            actions.push(ScatterAction::LimitsChanged(limits));
        }
        actions.push(ScatterAction::RenderNeeded);
        actions
    }

    /// Parse an uploaded file and load its points.
    pub fn load_text(&mut self, text: &str) -> Vec<ScatterAction> {
        let points = ingest::parse_scatter_file(text);
        log::info!("scatter panel loaded {} points", points.len());
        self.load_points(points)
    }

    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> Vec<ScatterAction> {
        self.viewport = Viewport::new(width, height);
        self.dpr = dpr;
        vec![ScatterAction::RenderNeeded]
    }

    /// Overwrite one axis bound from the host form.
    ///
    /// # Errors
    ///
    /// Returns the [`AxisError`] and keeps the previous limits if the edit would
    /// invert an axis.
    pub fn set_axis_bound(&mut self, bound: AxisBound, value: f64) -> Result<Vec<ScatterAction>, AxisError> {
        if let Err(e) = self.limits.set(bound, value) {
            log::warn!("rejected scatter axis edit: {e}");
            return Err(e);
        }
        Ok(vec![ScatterAction::LimitsChanged(self.limits), ScatterAction::RenderNeeded])
    }

    /// Update the hovered point for a pointer at `screen_pt`.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<ScatterAction> {
        if self.viewport.is_empty() {
            return Vec::new();
        }
        let next = self.nearest_point(screen_pt);
        self.set_hovered(next)
    }

    /// The pointer left the canvas.
    pub fn on_pointer_leave(&mut self) -> Vec<ScatterAction> {
        self.set_hovered(None)
    }

    fn set_hovered(&mut self, next: Option<usize>) -> Vec<ScatterAction> {
        if next == self.hovered {
            return Vec::new();
        }
        self.hovered = next;
        vec![ScatterAction::HoverChanged(next), ScatterAction::RenderNeeded]
    }

    /// Index of the closest point within the hit tolerance. Ties go to the
    /// lowest index.
    #[must_use]
    pub fn nearest_point(&self, screen_pt: Point) -> Option<usize> {
        let camera = self.camera();
        let tolerance = self.config.hit_tolerance_px;
        let mut best: Option<(usize, f64)> = None;
        for (i, point) in self.points.iter().enumerate() {
            let s = camera.world_to_screen(point.as_point());
            let dist = (s.x - screen_pt.x).hypot(s.y - screen_pt.y);
            if dist >= tolerance {
                continue;
            }
            if best.is_none_or(|(_, d)| dist < d) {
                best = Some((i, dist));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Tooltip for the hovered point.
    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        let point = self.points.get(self.hovered?)?;
        Some(Tooltip::for_point(point, self.camera().world_to_screen(point.as_point())))
    }

    #[must_use]
    pub fn scene(&self) -> Scene {
        render::scatter_scene(&self.points, &self.camera(), &self.config, self.hovered)
    }
}
