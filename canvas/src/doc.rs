//! Document model: velocity-depth layers and the store that owns them.
//!
//! A model is an ordered stack of [`Layer`]s. Adjacent layers share a
//! boundary: `layers[i].end_depth == layers[i + 1].start_depth`. Boundaries
//! are numbered `0..=len`; boundary `0` is the top of the first layer,
//! boundary `len` is the bottom of the last layer, and every boundary in
//! between is owned by two layers at once.
//!
//! [`LayerModel`] is the only way to mutate the stack and every mutation
//! preserves adjacency and the minimum thickness.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};

use crate::consts::MIN_THICKNESS;

/// A single layer with constant velocity over a depth interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    /// Top of the layer, in depth units.
    pub start_depth: f64,
    /// Bottom of the layer, in depth units. Always greater than `start_depth`.
    pub end_depth: f64,
    /// Velocity across the whole interval.
    pub velocity: f64,
}

impl Layer {
    #[must_use]
    pub fn new(start_depth: f64, end_depth: f64, velocity: f64) -> Self {
        Self { start_depth, end_depth, velocity }
    }

    #[must_use]
    pub fn thickness(&self) -> f64 {
        self.end_depth - self.start_depth
    }

    /// Whether `depth` lies strictly inside the layer (boundaries excluded).
    #[must_use]
    pub fn contains_depth(&self, depth: f64) -> bool {
        depth > self.start_depth && depth < self.end_depth
    }
}

/// Error returned when a layer list violates the model invariants.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LayerError {
    #[error("layer {index} has a non-finite depth or velocity")]
    NonFinite { index: usize },
    #[error("layer {index} is empty or inverted: start {start} >= end {end}")]
    Inverted { index: usize, start: f64, end: f64 },
    #[error("layer {index} starts at {start} but layer {prev} ends at {prev_end}")]
    Discontinuous { index: usize, prev: usize, start: f64, prev_end: f64 },
}

/// Ordered, contiguous stack of layers.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerModel {
    layers: Vec<Layer>,
    min_thickness: f64,
}

impl Default for LayerModel {
    fn default() -> Self {
        Self::new(MIN_THICKNESS)
    }
}

impl LayerModel {
    /// Create an empty model that keeps every layer at least `min_thickness` thick
    /// while boundaries are dragged.
    #[must_use]
    pub fn new(min_thickness: f64) -> Self {
        Self { layers: Vec::new(), min_thickness }
    }

    /// Build a model from a layer list, validating ordering and adjacency.
    ///
    /// # Errors
    ///
    /// Returns a [`LayerError`] describing the first offending layer.
    pub fn from_layers(layers: Vec<Layer>, min_thickness: f64) -> Result<Self, LayerError> {
        let mut model = Self::new(min_thickness);
        model.replace(layers)?;
        Ok(model)
    }

    /// Replace every layer. On error the current layers are kept.
    ///
    /// # Errors
    ///
    /// Returns a [`LayerError`] describing the first offending layer.
    pub fn replace(&mut self, layers: Vec<Layer>) -> Result<(), LayerError> {
        validate(&layers)?;
        self.layers = layers;
        Ok(())
    }

    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Layer> {
        self.layers.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.layers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    #[must_use]
    pub fn min_thickness(&self) -> f64 {
        self.min_thickness
    }

    /// Number of boundaries: `len + 1`, or zero for an empty model.
    #[must_use]
    pub fn boundary_count(&self) -> usize {
        if self.layers.is_empty() { 0 } else { self.layers.len() + 1 }
    }

    /// Depth of boundary `k`.
    #[must_use]
    pub fn boundary_depth(&self, k: usize) -> Option<f64> {
        if k == 0 {
            return self.layers.first().map(|l| l.start_depth);
        }
        self.layers.get(k - 1).map(|l| l.end_depth)
    }

    /// All boundary depths, shallowest first.
    #[must_use]
    pub fn boundary_depths(&self) -> Vec<f64> {
        (0..self.boundary_count())
            .filter_map(|k| self.boundary_depth(k))
            .collect()
    }

    /// Inclusive range boundary `k` may move within without thinning a
    /// neighbour below the minimum thickness. Outer boundaries are unbounded
    /// on their free side.
    #[must_use]
    pub fn boundary_range(&self, k: usize) -> Option<(f64, f64)> {
        let n = self.layers.len();
        if n == 0 || k > n {
            return None;
        }
        let lo = if k == 0 {
            f64::NEG_INFINITY
        } else {
            self.layers[k - 1].start_depth + self.min_thickness
        };
        let hi = if k == n {
            f64::INFINITY
        } else {
            self.layers[k].end_depth - self.min_thickness
        };
        Some((lo, hi))
    }

    /// Move boundary `k` toward `depth`, clamped to [`Self::boundary_range`].
    ///
    /// Inner boundaries update both adjacent layers. Returns the depth that was
    /// applied, or `None` when `k` is out of range or `depth` is NaN. When the
    /// neighbours are already too thin to allow any motion the boundary stays put.
    pub fn move_boundary(&mut self, k: usize, depth: f64) -> Option<f64> {
        if depth.is_nan() {
            return None;
        }
        let (lo, hi) = self.boundary_range(k)?;
        let current = self.boundary_depth(k)?;
        let applied = if lo > hi { current } else { depth.max(lo).min(hi) };

        if k > 0 {
            self.layers[k - 1].end_depth = applied;
        }
        if let Some(layer) = self.layers.get_mut(k) {
            layer.start_depth = applied;
        }
        Some(applied)
    }

    /// Overwrite the velocity of layer `index`. Returns the applied value.
    pub fn set_velocity(&mut self, index: usize, velocity: f64) -> Option<f64> {
        if !velocity.is_finite() {
            return None;
        }
        let layer = self.layers.get_mut(index)?;
        layer.velocity = velocity;
        Some(velocity)
    }

    /// Split layer `index` into two at `depth`, both halves keeping the
    /// original velocity. Returns `false` (and changes nothing) unless `depth`
    /// lies strictly inside the layer.
    pub fn split(&mut self, index: usize, depth: f64) -> bool {
        let Some(layer) = self.layers.get(index).copied() else {
            return false;
        };
        if !layer.contains_depth(depth) {
            return false;
        }
        self.layers[index].end_depth = depth;
        self.layers
            .insert(index + 1, Layer::new(depth, layer.end_depth, layer.velocity));
        true
    }

    /// Split whichever layer strictly contains `depth`. Returns the index of
    /// the split layer.
    pub fn split_at_depth(&mut self, depth: f64) -> Option<usize> {
        let index = self.layers.iter().position(|l| l.contains_depth(depth))?;
        self.split(index, depth).then_some(index)
    }

    /// Whether every pair of neighbours shares its boundary exactly.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_contiguous(&self) -> bool {
        self.layers.windows(2).all(|w| w[0].end_depth == w[1].start_depth)
    }
}

#[allow(clippy::float_cmp)]
fn validate(layers: &[Layer]) -> Result<(), LayerError> {
    for (index, layer) in layers.iter().enumerate() {
        if !(layer.start_depth.is_finite() && layer.end_depth.is_finite() && layer.velocity.is_finite()) {
            return Err(LayerError::NonFinite { index });
        }
        if layer.thickness() <= 0.0 {
            return Err(LayerError::Inverted { index, start: layer.start_depth, end: layer.end_depth });
        }
        if index > 0 {
            let prev_end = layers[index - 1].end_depth;
            if layer.start_depth != prev_end {
                return Err(LayerError::Discontinuous {
                    index,
                    prev: index - 1,
                    start: layer.start_depth,
                    prev_end,
                });
            }
        }
    }
    Ok(())
}
