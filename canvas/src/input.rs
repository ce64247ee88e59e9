//! Input model: modifier keys, buttons, pointer events, and the drag state machine.
//!
//! The host translates DOM pointer events into [`PointerEvent`] values in
//! canvas pixel space. [`InputState`] is the gesture being tracked between
//! pointer-down and pointer-up; at most one drag is ever active.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::hit::HitPart;

/// Keyboard modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Shift key is held. Shift-press inside a layer splits it.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button, pen contact, or single-finger touch.
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Stage of a pointer gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Down,
    Move,
    /// Released anywhere, including outside the canvas.
    Up,
    /// Left the canvas without releasing.
    Leave,
}

/// A pointer event in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub x: f64,
    pub y: f64,
    #[serde(default)]
    pub modifiers: Modifiers,
    pub phase: PointerPhase,
    #[serde(default)]
    pub button: Button,
}

impl PointerEvent {
    #[must_use]
    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// What a drag is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragKind {
    /// A depth boundary; `index` is the boundary number.
    Boundary,
    /// A layer's velocity line; `index` is the layer number.
    Velocity,
}

/// The element captured at pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragState {
    pub index: usize,
    pub kind: DragKind,
}

impl From<HitPart> for DragState {
    fn from(part: HitPart) -> Self {
        match part {
            HitPart::Boundary(index) => Self { index, kind: DragKind::Boundary },
            HitPart::Velocity(index) => Self { index, kind: DragKind::Velocity },
        }
    }
}

impl DragState {
    /// The hit part being dragged, for highlighting.
    #[must_use]
    pub fn part(&self) -> HitPart {
        match self.kind {
            DragKind::Boundary => HitPart::Boundary(self.index),
            DragKind::Velocity => HitPart::Velocity(self.index),
        }
    }
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No gesture in progress; pointer moves update the hover.
    #[default]
    Idle,
    /// A line is being dragged.
    Dragging(DragState),
}

impl InputState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging(_))
    }

    /// The active drag, if any.
    #[must_use]
    pub fn drag(&self) -> Option<DragState> {
        match self {
            Self::Idle => None,
            Self::Dragging(drag) => Some(*drag),
        }
    }
}
