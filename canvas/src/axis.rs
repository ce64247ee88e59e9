//! Axis bounds for a plot panel.
//!
//! `AxisLimits` is the `{xmin, xmax, ymin, ymax}` tuple edited by the host's
//! bounds form. Every edit goes through [`AxisLimits::set`], which rejects
//! values that would leave an axis empty or inverted and keeps the previous
//! value in that case.

#[cfg(test)]
#[path = "axis_test.rs"]
mod axis_test;

use serde::{Deserialize, Serialize};

/// Error returned when an axis edit would break the `min < max` ordering.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AxisError {
    /// The submitted value is NaN or infinite.
    #[error("axis bound {bound} must be finite, got {value}")]
    NonFinite { bound: &'static str, value: f64 },
    /// The x axis would be empty or inverted.
    #[error("x axis range is empty or inverted: xmin {min} >= xmax {max}")]
    InvertedX { min: f64, max: f64 },
    /// The y axis would be empty or inverted.
    #[error("y axis range is empty or inverted: ymin {min} >= ymax {max}")]
    InvertedY { min: f64, max: f64 },
    /// The host named a bound that does not exist.
    #[error("unknown axis bound `{0}`")]
    UnknownBound(String),
}

/// One of the four editable bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisBound {
    XMin,
    XMax,
    YMin,
    YMax,
}

impl AxisBound {
    /// Parse a form field name (`xmin`, `xmax`, `ymin`, `ymax`).
    ///
    /// # Errors
    ///
    /// Returns [`AxisError::UnknownBound`] for any other name.
    pub fn from_name(name: &str) -> Result<Self, AxisError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "xmin" => Ok(Self::XMin),
            "xmax" => Ok(Self::XMax),
            "ymin" => Ok(Self::YMin),
            "ymax" => Ok(Self::YMax),
            _ => Err(AxisError::UnknownBound(name.to_owned())),
        }
    }

    /// The form field name for this bound.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::XMin => "xmin",
            Self::XMax => "xmax",
            Self::YMin => "ymin",
            Self::YMax => "ymax",
        }
    }
}

/// Visible range of both plot axes, in axis units.
///
/// For the layer editor x is velocity and y is depth (increasing downward on
/// screen). For the scatter panel x is period and y is velocity.
///
/// Construct through [`AxisLimits::new`] and edit through [`AxisLimits::set`]
/// so that `xmin < xmax` and `ymin < ymax` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisLimits {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl Default for AxisLimits {
    fn default() -> Self {
        Self { xmin: 0.0, xmax: 1.0, ymin: 0.0, ymax: 1.0 }
    }
}

impl AxisLimits {
    /// Build validated limits.
    ///
    /// # Errors
    ///
    /// Returns an [`AxisError`] when a value is not finite or a range is empty
    /// or inverted.
    pub fn new(xmin: f64, xmax: f64, ymin: f64, ymax: f64) -> Result<Self, AxisError> {
        let limits = Self { xmin, xmax, ymin, ymax };
        limits.validate()?;
        Ok(limits)
    }

    /// Check the ordering invariant.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), AxisError> {
        for bound in [AxisBound::XMin, AxisBound::XMax, AxisBound::YMin, AxisBound::YMax] {
            let value = self.get(bound);
            if !value.is_finite() {
                return Err(AxisError::NonFinite { bound: bound.name(), value });
            }
        }
        if self.xmin >= self.xmax {
            return Err(AxisError::InvertedX { min: self.xmin, max: self.xmax });
        }
        if self.ymin >= self.ymax {
            return Err(AxisError::InvertedY { min: self.ymin, max: self.ymax });
        }
        Ok(())
    }

    /// Current value of one bound.
    #[must_use]
    pub fn get(&self, bound: AxisBound) -> f64 {
        match bound {
            AxisBound::XMin => self.xmin,
            AxisBound::XMax => self.xmax,
            AxisBound::YMin => self.ymin,
            AxisBound::YMax => self.ymax,
        }
    }

    /// Overwrite one bound. On error the limits are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an [`AxisError`] if the edit would break the invariant.
    pub fn set(&mut self, bound: AxisBound, value: f64) -> Result<(), AxisError> {
        let mut next = *self;
        match bound {
            AxisBound::XMin => next.xmin = value,
            AxisBound::XMax => next.xmax = value,
            AxisBound::YMin => next.ymin = value,
            AxisBound::YMax => next.ymax = value,
        }
        next.validate()?;
        *self = next;
        Ok(())
    }

    #[must_use]
    pub fn x_span(&self) -> f64 {
        self.xmax - self.xmin
    }

    #[must_use]
    pub fn y_span(&self) -> f64 {
        self.ymax - self.ymin
    }

    /// Clamp a value into `[xmin, xmax]`.
    #[must_use]
    pub fn clamp_x(&self, x: f64) -> f64 {
        x.max(self.xmin).min(self.xmax)
    }
}
