use web_sys::HtmlCanvasElement;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::axis::{AxisBound, AxisError, AxisLimits};
use crate::camera::{Camera, Point, Viewport};
use crate::config::EditorConfig;
use crate::doc::{Layer, LayerError, LayerModel};
use crate::hit::{self, HitPart, HoverKind, HoveredElement};
use crate::ingest;
use crate::input::{Button, DragKind, DragState, InputState, Modifiers, PointerEvent, PointerPhase};
use crate::render::{self, Scene};
use crate::tooltip::Tooltip;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

pub const CURSOR_DEFAULT: &str = "default";
pub const CURSOR_BOUNDARY: &str = "ns-resize";
pub const CURSOR_VELOCITY: &str = "ew-resize";

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// The layer stack was edited; carries the full new stack.
    LayersChanged(Vec<Layer>),
    HoverChanged(Option<HoveredElement>),
    LimitsChanged(AxisLimits),
    SetCursor(&'static str),
    RenderNeeded,
}

/// Layer editor state and logic, independent of any canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
pub struct EngineCore {
    pub doc: LayerModel,
    pub limits: AxisLimits,
    pub viewport: Viewport,
    pub dpr: f64,
    pub input: InputState,
    pub hover: Option<HoveredElement>,
    pub config: EditorConfig,
    cursor: &'static str,
    /// Last pointer position over the canvas; `None` once it has left.
    pointer: Option<Point>,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            doc: LayerModel::new(config.min_thickness),
            limits: AxisLimits::default(),
            viewport: Viewport::default(),
            dpr: 1.0,
            input: InputState::Idle,
            hover: None,
            config,
            cursor: CURSOR_DEFAULT,
            pointer: None,
        }
    }

    // --- Data inputs ---

    /// Replace the layer stack and fit the axes to it. Any gesture in
    /// progress is dropped.
    ///
    /// # Errors
    ///
    /// Returns the [`LayerError`] and keeps the current stack if `layers` is
    /// not a contiguous, ordered stack.
    pub fn load_layers(&mut self, layers: Vec<Layer>) -> Result<Vec<Action>, LayerError> {
        if let Err(e) = self.doc.replace(layers) {
            log::warn!("rejected layer model: {e}");
            return Err(e);
        }
        self.input = InputState::Idle;
        self.hover = None;
        log::info!("loaded {} layers", self.doc.len());

        let mut actions = vec![Action::LayersChanged(self.doc.layers().to_vec()), Action::HoverChanged(None)];
        if let Some(limits) = ingest::layer_limits(self.doc.layers(), self.config.axis_padding) {
            self.limits = limits;
            actions.push(Action::LimitsChanged(limits));
        }
        actions.extend(self.set_cursor(CURSOR_DEFAULT));
        actions.push(Action::RenderNeeded);
        Ok(actions)
    }

    /// Parse an uploaded model file and load it.
    ///
    /// # Errors
    ///
    /// Returns a [`LayerError`] if the paired records do not form a contiguous stack.
    pub fn load_model_text(&mut self, text: &str) -> Result<Vec<Action>, LayerError> {
        self.load_layers(ingest::parse_layer_file(text))
    }

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width: f64, height: f64, dpr: f64) -> Vec<Action> {
        self.viewport = Viewport::new(width, height);
        self.dpr = dpr;
        vec![Action::RenderNeeded]
    }

    /// Overwrite one axis bound from the host form.
    ///
    /// # Errors
    ///
    /// Returns the [`AxisError`] and keeps the previous limits if the edit
    /// would invert or empty an axis.
    pub fn set_axis_bound(&mut self, bound: AxisBound, value: f64) -> Result<Vec<Action>, AxisError> {
        if let Err(e) = self.limits.set(bound, value) {
            log::warn!("rejected axis edit {}={value}: {e}", bound.name());
            return Err(e);
        }
        Ok(vec![Action::LimitsChanged(self.limits), Action::RenderNeeded])
    }

    /// Replace all four axis bounds at once.
    ///
    /// # Errors
    ///
    /// Returns the [`AxisError`] and keeps the previous limits if `limits` is invalid.
    pub fn set_limits(&mut self, limits: AxisLimits) -> Result<Vec<Action>, AxisError> {
        limits.validate()?;
        self.limits = limits;
        Ok(vec![Action::LimitsChanged(limits), Action::RenderNeeded])
    }

    // --- Input events ---

    /// Dispatch a pointer event by phase.
    pub fn on_pointer_event(&mut self, ev: PointerEvent) -> Vec<Action> {
        match ev.phase {
            PointerPhase::Down => self.on_pointer_down(ev.point(), ev.button, ev.modifiers),
            PointerPhase::Move => self.on_pointer_move(ev.point()),
            PointerPhase::Up => self.on_pointer_up(),
            PointerPhase::Leave => self.on_pointer_leave(),
        }
    }

    /// Press: start a drag on the line under the pointer, or split a layer
    /// when shift is held.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, modifiers: Modifiers) -> Vec<Action> {
        if let InputState::Dragging(drag) = self.input {
            log::debug!("ignoring pointer-down during active drag {drag:?}");
            return Vec::new();
        }
        if button != Button::Primary || self.viewport.is_empty() {
            return Vec::new();
        }
        self.pointer = Some(screen_pt);

        // Computed fresh: the stored hover may be stale after a resize or load.
        let camera = self.camera();
        match hit::hit_test(screen_pt, &self.doc, &camera, self.config.hit_tolerance_px) {
            Some(HitPart::Velocity(i)) if modifiers.shift => self.split_layer(i, screen_pt),
            Some(part) => self.begin_drag(part, screen_pt),
            None if modifiers.shift => self.split_at(screen_pt),
            None => Vec::new(),
        }
    }

    /// Move: drag the captured line, or refresh the hover when idle.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.viewport.is_empty() {
            return Vec::new();
        }
        self.pointer = self.viewport.contains(screen_pt).then_some(screen_pt);
        match self.input {
            InputState::Idle => self.update_hover(screen_pt),
            InputState::Dragging(drag) => self.drag_to(drag, screen_pt),
        }
    }

    /// Release, wherever it happens. Always ends the drag, then settles the
    /// hover as an idle move at the last pointer position would, or clears it
    /// when the pointer is off the canvas.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        let InputState::Dragging(drag) = self.input else {
            return Vec::new();
        };
        self.input = InputState::Idle;
        log::debug!("drag ended on {:?} {}", drag.kind, drag.index);

        let mut actions = match self.pointer {
            Some(pt) => self.update_hover(pt),
            None => self.clear_hover(),
        };
        if !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// The pointer left the canvas. An active drag continues until release.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.pointer = None;
        if self.input.is_dragging() {
            return Vec::new();
        }
        self.clear_hover()
    }

    /// Split whichever layer contains the depth under `screen_pt`.
    pub fn split_at(&mut self, screen_pt: Point) -> Vec<Action> {
        if self.viewport.is_empty() {
            return Vec::new();
        }
        let depth = self.camera().from_screen_y(screen_pt.y);
        match self.doc.split_at_depth(depth) {
            Some(index) => {
                log::info!("split layer {index} at depth {depth:.3}");
                self.after_split(screen_pt)
            }
            None => Vec::new(),
        }
    }

    fn split_layer(&mut self, index: usize, screen_pt: Point) -> Vec<Action> {
        let depth = self.camera().from_screen_y(screen_pt.y);
        if !self.doc.split(index, depth) {
            return Vec::new();
        }
        log::info!("split layer {index} at depth {depth:.3}");
        self.after_split(screen_pt)
    }

    fn after_split(&mut self, screen_pt: Point) -> Vec<Action> {
        let mut actions = vec![Action::LayersChanged(self.doc.layers().to_vec())];
        actions.extend(self.update_hover(screen_pt));
        if !actions.contains(&Action::RenderNeeded) {
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    fn begin_drag(&mut self, part: HitPart, screen_pt: Point) -> Vec<Action> {
        let drag = DragState::from(part);
        self.input = InputState::Dragging(drag);
        self.hover = hit::describe(part, screen_pt, &self.doc);
        log::debug!("drag started on {:?} {}", drag.kind, drag.index);

        let mut actions = vec![Action::HoverChanged(self.hover)];
        actions.extend(self.set_cursor(cursor_for(Some(part))));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn drag_to(&mut self, drag: DragState, screen_pt: Point) -> Vec<Action> {
        let camera = self.camera();
        let (kind, applied) = match drag.kind {
            DragKind::Velocity => {
                let velocity = self.limits.clamp_x(camera.from_screen_x(screen_pt.x));
                (HoverKind::Velocity, self.doc.set_velocity(drag.index, velocity))
            }
            DragKind::Boundary => {
                let depth = camera.from_screen_y(screen_pt.y);
                (HoverKind::Depth, self.doc.move_boundary(drag.index, depth))
            }
        };
        let Some(value) = applied else {
            return Vec::new();
        };

        self.hover = Some(HoveredElement {
            kind,
            index: drag.index,
            value,
            screen_x: screen_pt.x,
            screen_y: screen_pt.y,
        });
        vec![
            Action::LayersChanged(self.doc.layers().to_vec()),
            Action::HoverChanged(self.hover),
            Action::RenderNeeded,
        ]
    }

    fn update_hover(&mut self, screen_pt: Point) -> Vec<Action> {
        let next = hit::hover_at(screen_pt, &self.doc, &self.camera(), self.config.hit_tolerance_px);
        if next == self.hover {
            return Vec::new();
        }
        self.hover = next;
        let mut actions = vec![Action::HoverChanged(next)];
        actions.extend(self.set_cursor(cursor_for(next.map(|h| h.part()))));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn clear_hover(&mut self) -> Vec<Action> {
        if self.hover.is_none() {
            return Vec::new();
        }
        self.hover = None;
        let mut actions = vec![Action::HoverChanged(None)];
        actions.extend(self.set_cursor(CURSOR_DEFAULT));
        actions.push(Action::RenderNeeded);
        actions
    }

    fn set_cursor(&mut self, cursor: &'static str) -> Option<Action> {
        if self.cursor == cursor {
            return None;
        }
        self.cursor = cursor;
        Some(Action::SetCursor(cursor))
    }

    // --- Queries ---

    /// The current screen mapping.
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera::new(self.limits, self.viewport)
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        self.doc.layers()
    }

    #[must_use]
    pub fn hover(&self) -> Option<HoveredElement> {
        self.hover
    }

    #[must_use]
    pub fn drag(&self) -> Option<DragState> {
        self.input.drag()
    }

    #[must_use]
    pub fn cursor(&self) -> &'static str {
        self.cursor
    }

    #[must_use]
    pub fn tooltip(&self) -> Option<Tooltip> {
        self.hover.as_ref().map(Tooltip::for_hover)
    }

    /// Build the current frame. The dragged line wins over the hovered one
    /// for emphasis.
    #[must_use]
    pub fn scene(&self) -> Scene {
        let active = self.drag().map(|d| d.part()).or_else(|| self.hover.map(|h| h.part()));
        render::layer_scene(&self.doc, &self.camera(), &self.config, active)
    }
}

fn cursor_for(part: Option<HitPart>) -> &'static str {
    match part {
        Some(HitPart::Boundary(_)) => CURSOR_BOUNDARY,
        Some(HitPart::Velocity(_)) => CURSOR_VELOCITY,
        None => CURSOR_DEFAULT,
    }
}

/// What the host should refresh after an event was applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Outcome {
    pub layers_changed: bool,
    pub hover_changed: bool,
    pub limits_changed: bool,
}

/// The full editor engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the canvas has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, config: EditorConfig) -> Result<Self, JsValue> {
        let ctx = render::context_2d(&canvas)?;
        Ok(Self { canvas, ctx, core: EngineCore::with_config(config) })
    }

    // --- Viewport ---

    /// Resize the backing store to `width_css * dpr` by `height_css * dpr` and redraw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<Outcome, JsValue> {
        render::resize_canvas(&self.canvas, width_css, height_css, dpr);
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        self.apply(actions)
    }

    // --- Delegated inputs ---

    /// # Errors
    ///
    /// Returns `Err` if the model is invalid or rendering fails.
    pub fn load_model_text(&mut self, text: &str) -> Result<Outcome, JsValue> {
        let actions = self.core.load_model_text(text).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if the edit is rejected or rendering fails.
    pub fn set_axis_bound(&mut self, bound: AxisBound, value: f64) -> Result<Outcome, JsValue> {
        let actions = self.core.set_axis_bound(bound, value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.apply(actions)
    }

    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    pub fn on_pointer_event(&mut self, ev: PointerEvent) -> Result<Outcome, JsValue> {
        let actions = self.core.on_pointer_event(ev);
        self.apply(actions)
    }

    /// Apply actions: update the cursor, redraw once if needed, and report
    /// what changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a DOM or `Canvas2D` call fails.
    pub fn apply(&self, actions: Vec<Action>) -> Result<Outcome, JsValue> {
        let mut outcome = Outcome::default();
        let mut render_needed = false;
        for action in actions {
            match action {
                Action::LayersChanged(_) => outcome.layers_changed = true,
                Action::HoverChanged(_) => outcome.hover_changed = true,
                Action::LimitsChanged(_) => outcome.limits_changed = true,
                Action::SetCursor(cursor) => self.canvas.style().set_property("cursor", cursor)?,
                Action::RenderNeeded => render_needed = true,
            }
        }
        if render_needed {
            self.render()?;
        }
        Ok(outcome)
    }

    // --- Render ---

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.scene(), self.core.dpr)
    }
}
