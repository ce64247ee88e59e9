//! Rendering: builds a display list from state and replays it on a 2D context.
//!
//! Scene construction ([`layer_scene`], [`scatter_scene`]) is pure and
//! browser-free so it can be tested natively. [`draw`] is the only function
//! that touches [`web_sys::CanvasRenderingContext2d`]; it receives a finished
//! [`Scene`] and produces pixels without mutating any application state.
//!
//! Every frame is a full redraw. There is no incremental diffing.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::camera::{Camera, Point, Viewport};
use crate::config::EditorConfig;
use crate::consts::{
    ACTIVE_LINE_WIDTH_PX, BOUNDARY_COLOR, GRID_COLOR, HOVER_POINT_COLOR, HOVER_POINT_RADIUS_PX, LINE_WIDTH_PX,
    POINT_COLOR, POINT_RADIUS_PX, VELOCITY_COLOR,
};
use crate::doc::LayerModel;
use crate::hit::{self, HitPart};
use crate::scatter::ScatterPoint;

/// A single draw call, in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Clear the whole surface.
    Clear,
    /// Stroke a straight segment.
    Line { from: Point, to: Point, color: &'static str, width: f64 },
    /// Fill an axis-aligned rectangle. `alpha` 0 makes a capture-only target.
    Rect { x: f64, y: f64, width: f64, height: f64, color: &'static str, alpha: f64 },
    /// Fill a circle.
    Circle { center: Point, radius: f64, color: &'static str },
}

/// An ordered list of draw commands for one frame.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub viewport: Viewport,
    pub cmds: Vec<DrawCmd>,
}

impl Scene {
    fn new(viewport: Viewport) -> Self {
        Self { viewport, cmds: vec![DrawCmd::Clear] }
    }

    fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    /// Count of commands matching a predicate.
    #[must_use]
    pub fn count(&self, pred: impl Fn(&DrawCmd) -> bool) -> usize {
        self.cmds.iter().filter(|c| pred(c)).count()
    }
}

// =============================================================
// Scene construction
// =============================================================

/// Build the layer editor frame.
///
/// `active` is the line to emphasise: the one being dragged, else the one
/// hovered.
#[must_use]
pub fn layer_scene(doc: &LayerModel, camera: &Camera, config: &EditorConfig, active: Option<HitPart>) -> Scene {
    let mut scene = Scene::new(camera.viewport);
    push_grid(&mut scene, config.grid_step_px);

    let width = camera.viewport.width;
    let half = config.hit_rect_half_width_px;

    for (k, depth) in doc.boundary_depths().into_iter().enumerate() {
        let y = camera.to_screen_y(depth);
        scene.push(DrawCmd::Line {
            from: Point::new(0.0, y),
            to: Point::new(width, y),
            color: BOUNDARY_COLOR,
            width: stroke_width(active == Some(HitPart::Boundary(k))),
        });
        scene.push(DrawCmd::Rect { x: 0.0, y: y - half, width, height: half * 2.0, color: BOUNDARY_COLOR, alpha: 0.0 });
    }

    for (i, layer) in doc.layers().iter().enumerate() {
        let x = camera.to_screen_x(layer.velocity);
        let (top, bottom) = hit::screen_span(layer, camera);
        scene.push(DrawCmd::Line {
            from: Point::new(x, top),
            to: Point::new(x, bottom),
            color: VELOCITY_COLOR,
            width: stroke_width(active == Some(HitPart::Velocity(i))),
        });
        scene.push(DrawCmd::Rect {
            x: x - half,
            y: top,
            width: half * 2.0,
            height: bottom - top,
            color: VELOCITY_COLOR,
            alpha: 0.0,
        });
    }

    scene
}

/// Build the scatter panel frame, emphasising the point at `hovered`.
#[must_use]
pub fn scatter_scene(
    points: &[ScatterPoint],
    camera: &Camera,
    config: &EditorConfig,
    hovered: Option<usize>,
) -> Scene {
    let mut scene = Scene::new(camera.viewport);
    push_grid(&mut scene, config.grid_step_px);

    for (i, point) in points.iter().enumerate() {
        if hovered == Some(i) {
            continue;
        }
        scene.push(DrawCmd::Circle {
            center: camera.world_to_screen(point.as_point()),
            radius: POINT_RADIUS_PX,
            color: POINT_COLOR,
        });
    }
    // Hovered point last so it sits on top.
    if let Some(point) = hovered.and_then(|i| points.get(i)) {
        scene.push(DrawCmd::Circle {
            center: camera.world_to_screen(point.as_point()),
            radius: HOVER_POINT_RADIUS_PX,
            color: HOVER_POINT_COLOR,
        });
    }

    scene
}

fn push_grid(scene: &mut Scene, step: f64) {
    if step <= 0.0 || scene.viewport.is_empty() {
        return;
    }
    let Viewport { width, height } = scene.viewport;

    let mut x = step;
    while x < width {
        scene.push(DrawCmd::Line { from: Point::new(x, 0.0), to: Point::new(x, height), color: GRID_COLOR, width: 1.0 });
        x += step;
    }
    let mut y = step;
    while y < height {
        scene.push(DrawCmd::Line { from: Point::new(0.0, y), to: Point::new(width, y), color: GRID_COLOR, width: 1.0 });
        y += step;
    }
}

fn stroke_width(active: bool) -> f64 {
    if active { ACTIVE_LINE_WIDTH_PX } else { LINE_WIDTH_PX }
}

// =============================================================
// Canvas output
// =============================================================

/// Fetch the 2D context of a canvas element.
///
/// # Errors
///
/// Returns `Err` if the browser refuses a 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Size the backing store to the CSS size times the device pixel ratio.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn resize_canvas(canvas: &HtmlCanvasElement, width_css: f64, height_css: f64, dpr: f64) {
    canvas.set_width(backing_px(width_css, dpr) as u32);
    canvas.set_height(backing_px(height_css, dpr) as u32);
}

/// Backing-store pixels for a CSS length. Never negative.
#[must_use]
pub fn backing_px(css: f64, dpr: f64) -> f64 {
    (css * dpr).round().max(0.0)
}

/// Replay a scene. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails.
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, dpr: f64) -> Result<(), JsValue> {
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;

    for cmd in &scene.cmds {
        match *cmd {
            DrawCmd::Clear => ctx.clear_rect(0.0, 0.0, scene.viewport.width, scene.viewport.height),
            DrawCmd::Line { from, to, color, width } => {
                ctx.set_stroke_style_str(color);
                ctx.set_line_width(width);
                ctx.begin_path();
                ctx.move_to(from.x, from.y);
                ctx.line_to(to.x, to.y);
                ctx.stroke();
            }
            DrawCmd::Rect { x, y, width, height, color, alpha } => {
                ctx.save();
                ctx.set_global_alpha(alpha);
                ctx.set_fill_style_str(color);
                ctx.fill_rect(x, y, width, height);
                ctx.restore();
            }
            DrawCmd::Circle { center, radius, color } => {
                ctx.set_fill_style_str(color);
                ctx.begin_path();
                ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
                ctx.fill();
            }
        }
    }

    Ok(())
}
