//! Shared numeric constants for the canvas crate.

// ── Hit-testing ─────────────────────────────────────────────────

/// Screen-space distance in pixels within which a pointer hits a line.
pub const HIT_TOLERANCE_PX: f64 = 10.0;

/// Half-width of the invisible capture rectangle drawn around each line.
pub const HIT_RECT_HALF_WIDTH_PX: f64 = 10.0;

// ── Layer model ─────────────────────────────────────────────────

/// Thinnest a layer may become while a boundary is dragged, in depth units.
pub const MIN_THICKNESS: f64 = 0.1;

// ── Axes ────────────────────────────────────────────────────────

/// Fraction of the data span added on each side when suggesting axis limits.
pub const AXIS_PADDING_FRAC: f64 = 0.1;

// ── Drawing ─────────────────────────────────────────────────────

/// Spacing of background grid lines in screen pixels.
pub const GRID_STEP_PX: f64 = 50.0;

/// Stroke width for boundary and velocity lines.
pub const LINE_WIDTH_PX: f64 = 2.0;

/// Stroke width for the hovered or dragged line.
pub const ACTIVE_LINE_WIDTH_PX: f64 = 3.0;

/// Radius of a scatter point marker.
pub const POINT_RADIUS_PX: f64 = 4.0;

/// Radius of the hovered scatter point marker.
pub const HOVER_POINT_RADIUS_PX: f64 = 7.0;

/// Offset from the pointer to the top-left corner of a tooltip.
pub const TOOLTIP_OFFSET_PX: f64 = 12.0;

pub const BOUNDARY_COLOR: &str = "#000000";
pub const VELOCITY_COLOR: &str = "#D62728";
pub const GRID_COLOR: &str = "#E0E0E0";
pub const POINT_COLOR: &str = "#1F77B4";
pub const HOVER_POINT_COLOR: &str = "#FF7F0E";
