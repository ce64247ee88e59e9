//! Editor tuning knobs supplied by the host page as JSON.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{AXIS_PADDING_FRAC, GRID_STEP_PX, HIT_RECT_HALF_WIDTH_PX, HIT_TOLERANCE_PX, MIN_THICKNESS};

/// Error returned by [`EditorConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The JSON could not be parsed into a config.
    #[error("invalid editor config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A field holds a value the editor cannot work with.
    #[error("config field `{field}` is out of range: {value}")]
    OutOfRange { field: &'static str, value: f64 },
}

/// Interaction and drawing parameters. Every field is optional in JSON and
/// falls back to the crate constants.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Pointer-to-line distance, in pixels, that counts as a hit.
    pub hit_tolerance_px: f64,
    /// Thinnest a layer may be dragged to, in depth units.
    pub min_thickness: f64,
    /// Fraction of the data span added on each side of suggested axis limits.
    pub axis_padding: f64,
    /// Grid spacing in pixels; `0` disables the grid.
    pub grid_step_px: f64,
    /// Half-width of the transparent capture rectangle around each line.
    pub hit_rect_half_width_px: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            hit_tolerance_px: HIT_TOLERANCE_PX,
            min_thickness: MIN_THICKNESS,
            axis_padding: AXIS_PADDING_FRAC,
            grid_step_px: GRID_STEP_PX,
            hit_rect_half_width_px: HIT_RECT_HALF_WIDTH_PX,
        }
    }
}

impl EditorConfig {
    /// Parse and validate a config. An empty string yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::OutOfRange`] for unusable values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is finite and in range.
    ///
    /// # Errors
    ///
    /// Returns the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("hit_tolerance_px", self.hit_tolerance_px),
            ("min_thickness", self.min_thickness),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        let non_negative = [
            ("axis_padding", self.axis_padding),
            ("grid_step_px", self.grid_step_px),
            ("hit_rect_half_width_px", self.hit_rect_half_width_px),
        ];
        for (field, value) in non_negative {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::OutOfRange { field, value });
            }
        }
        Ok(())
    }
}
