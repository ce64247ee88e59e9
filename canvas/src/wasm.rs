//! `wasm-bindgen` exports for the two panels.
//!
//! The host page owns the DOM: it forwards pointer events (as JSON-encoded
//! [`PointerEvent`]s) and file contents, and reads state back as JSON strings.
//! Pointer-up for the layer editor should be wired on `window` so a release
//! outside the canvas still ends the drag.

use std::fmt::Display;

use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::axis::AxisBound;
use crate::camera::Point;
use crate::config::EditorConfig;
use crate::doc::Layer;
use crate::engine::{Engine, Outcome};
use crate::input::{PointerEvent, PointerPhase};
use crate::render;
use crate::scatter::{ScatterAction, ScatterCore};

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(js_err)
}

fn parse_event(json: &str) -> Result<PointerEvent, JsValue> {
    serde_json::from_str(json).map_err(js_err)
}

/// Install the panic hook and route `log` output to the browser console.
///
/// # Errors
///
/// Returns `Err` if a logger was already installed.
#[wasm_bindgen(js_name = initLogging)]
pub fn init_logging() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).map_err(js_err)
}

// =============================================================
// Layer editor
// =============================================================

/// Interactive velocity-depth layer editor bound to one canvas.
#[wasm_bindgen]
pub struct LayerEditor {
    engine: Engine,
}

#[wasm_bindgen]
impl LayerEditor {
    /// Bind to `canvas`. `config_json` may be empty for defaults.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an invalid config or a canvas without a 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<LayerEditor, JsValue> {
        let config = EditorConfig::from_json(config_json).map_err(js_err)?;
        Ok(Self { engine: Engine::new(canvas, config)? })
    }

    /// Load an uploaded `depth density ignore velocity` file.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the records do not form a contiguous stack.
    #[wasm_bindgen(js_name = loadModel)]
    pub fn load_model(&mut self, text: &str) -> Result<(), JsValue> {
        self.engine.load_model_text(text)?;
        Ok(())
    }

    /// Replace the stack with a JSON array of `{startDepth, endDepth, velocity}`.
    ///
    /// # Errors
    ///
    /// Returns `Err` for malformed JSON or a non-contiguous stack.
    #[wasm_bindgen(js_name = setLayers)]
    pub fn set_layers(&mut self, json: &str) -> Result<(), JsValue> {
        let layers: Vec<Layer> = serde_json::from_str(json).map_err(js_err)?;
        let actions = self.engine.core.load_layers(layers).map_err(js_err)?;
        self.engine.apply(actions)?;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        self.engine.set_viewport(width_css, height_css, dpr)?;
        Ok(())
    }

    /// Set one of `xmin`, `xmax`, `ymin`, `ymax`.
    ///
    /// # Errors
    ///
    /// Returns `Err` for an unknown name or an edit that would invert the axis.
    #[wasm_bindgen(js_name = setAxis)]
    pub fn set_axis(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        let bound = AxisBound::from_name(name).map_err(js_err)?;
        self.engine.set_axis_bound(bound, value)?;
        Ok(())
    }

    /// Feed a JSON pointer event. Returns `true` when the layers changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` for malformed JSON or a failed redraw.
    pub fn pointer(&mut self, json: &str) -> Result<bool, JsValue> {
        let outcome = self.engine.on_pointer_event(parse_event(json)?)?;
        Ok(outcome.layers_changed)
    }

    /// Release from anywhere on the page.
    ///
    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    #[wasm_bindgen(js_name = pointerUp)]
    pub fn pointer_up(&mut self) -> Result<(), JsValue> {
        let actions = self.engine.core.on_pointer_up();
        self.engine.apply(actions)?;
        Ok(())
    }

    /// Shift-click handler for the plot area.
    ///
    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    #[wasm_bindgen(js_name = splitAt)]
    pub fn split_at(&mut self, x: f64, y: f64) -> Result<bool, JsValue> {
        let actions = self.engine.core.split_at(Point::new(x, y));
        let Outcome { layers_changed, .. } = self.engine.apply(actions)?;
        Ok(layers_changed)
    }

    /// Current stack as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn layers(&self) -> Result<String, JsValue> {
        to_json(self.engine.core.layers())
    }

    /// Current axis limits as JSON.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn limits(&self) -> Result<String, JsValue> {
        to_json(&self.engine.core.limits)
    }

    /// Tooltip for the hovered or dragged line as JSON, or `null`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn tooltip(&self) -> Result<String, JsValue> {
        to_json(&self.engine.core.tooltip())
    }

    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        self.engine.render()
    }
}

// =============================================================
// Scatter plot
// =============================================================

/// Read-only period/velocity scatter panel bound to one canvas.
#[wasm_bindgen]
pub struct ScatterPlot {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    core: ScatterCore,
}

#[wasm_bindgen]
impl ScatterPlot {
    /// # Errors
    ///
    /// Returns `Err` for an invalid config or a canvas without a 2D context.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas: HtmlCanvasElement, config_json: &str) -> Result<ScatterPlot, JsValue> {
        let config = EditorConfig::from_json(config_json).map_err(js_err)?;
        let ctx = render::context_2d(&canvas)?;
        Ok(Self { canvas, ctx, core: ScatterCore::with_config(config) })
    }

    /// Load an uploaded `velocity, period` file. Returns the point count.
    ///
    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    #[wasm_bindgen(js_name = loadPoints)]
    pub fn load_points(&mut self, text: &str) -> Result<usize, JsValue> {
        let actions = self.core.load_text(text);
        self.apply(&actions)?;
        Ok(self.core.points.len())
    }

    /// # Errors
    ///
    /// Returns `Err` if rendering fails.
    #[wasm_bindgen(js_name = setViewport)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) -> Result<(), JsValue> {
        render::resize_canvas(&self.canvas, width_css, height_css, dpr);
        let actions = self.core.set_viewport(width_css, height_css, dpr);
        self.apply(&actions)
    }

    /// # Errors
    ///
    /// Returns `Err` for an unknown name or an edit that would invert the axis.
    #[wasm_bindgen(js_name = setAxis)]
    pub fn set_axis(&mut self, name: &str, value: f64) -> Result<(), JsValue> {
        let bound = AxisBound::from_name(name).map_err(js_err)?;
        let actions = self.core.set_axis_bound(bound, value).map_err(js_err)?;
        self.apply(&actions)
    }

    /// Feed a JSON pointer event. Returns `true` when the hovered point changed.
    ///
    /// # Errors
    ///
    /// Returns `Err` for malformed JSON or a failed redraw.
    pub fn pointer(&mut self, json: &str) -> Result<bool, JsValue> {
        let ev = parse_event(json)?;
        let actions = match ev.phase {
            PointerPhase::Move => self.core.on_pointer_move(ev.point()),
            PointerPhase::Leave => self.core.on_pointer_leave(),
            PointerPhase::Down | PointerPhase::Up => Vec::new(),
        };
        self.apply(&actions)?;
        Ok(actions.iter().any(|a| matches!(a, ScatterAction::HoverChanged(_))))
    }

    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn limits(&self) -> Result<String, JsValue> {
        to_json(&self.core.limits)
    }

    /// # Errors
    ///
    /// Returns `Err` if serialization fails.
    pub fn tooltip(&self) -> Result<String, JsValue> {
        to_json(&self.core.tooltip())
    }

    /// # Errors
    ///
    /// Returns `Err` if any `Canvas2D` call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        render::draw(&self.ctx, &self.core.scene(), self.core.dpr)
    }
}

impl ScatterPlot {
    fn apply(&self, actions: &[ScatterAction]) -> Result<(), JsValue> {
        if actions.contains(&ScatterAction::RenderNeeded) {
            self.render()?;
        }
        Ok(())
    }
}
