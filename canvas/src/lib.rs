//! Browser engine for editing layered velocity-depth models.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns two
//! canvas panels: a layer editor where boundary and velocity lines are dragged
//! directly, and a read-only period/velocity scatter plot with hover
//! inspection. The host JavaScript layer wires DOM events and file uploads to
//! the [`wasm`] exports and reads state back as JSON.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Layer editor engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Layer stack with its adjacency invariant and edit operations |
//! | [`axis`] | Axis limits and their validation |
//! | [`camera`] | Axis-space to screen-space mapping |
//! | [`hit`] | Hit-testing boundary and velocity lines |
//! | [`input`] | Pointer event types and the drag state machine |
//! | [`ingest`] | Parsing uploaded model and scatter files, axis fitting |
//! | [`scatter`] | Scatter panel state and nearest-point hover |
//! | [`tooltip`] | Tooltip text for hovered elements |
//! | [`render`] | Display-list construction and Canvas2D replay |
//! | [`config`] | Runtime tunables parsed from JSON |
//! | [`wasm`] | `wasm-bindgen` exports |
//! | [`consts`] | Shared numeric constants (tolerances, sizes, colors) |

pub mod axis;
pub mod camera;
pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod hit;
pub mod ingest;
pub mod input;
pub mod render;
pub mod scatter;
pub mod tooltip;
pub mod wasm;
