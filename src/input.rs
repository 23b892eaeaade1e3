//! Input model: pointer samples and the drag-gesture state machine.
//!
//! The host delivers raw pointer events in playground-local coordinates;
//! hit-testing has already happened on its side, so a pointer-down names
//! the cube it landed on. `DragState` is the active gesture between
//! pointer-down and pointer-up. The `Dragging` variant is the session
//! itself: while it exists the engine processes move/up samples, and in
//! `Idle` they are ignored, which scopes the move/up "listeners" exactly
//! to the session lifetime.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::cube::CubeId;
use crate::geometry::{Point, Vec2};

/// A pointer sample delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer pressed on a cube. `target` is the topmost cube under the
    /// pointer, as reported by the host's hit-testing.
    Down { pos: Point, target: CubeId },
    /// Pointer moved while pressed.
    Move { pos: Point },
    /// Pointer released.
    Up,
}

/// Drag-gesture state machine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No drag in progress; move/up samples are ignored.
    #[default]
    Idle,
    /// A drag session is open for cube `id`.
    Dragging {
        /// The cube being dragged.
        id: CubeId,
        /// Fixed vector from the cube's origin to the initial hit point,
        /// captured once at drag start and never recomputed. Subtracting it
        /// from each pointer sample keeps the cube tracking the same grab
        /// point instead of jumping its origin to the pointer.
        grab_offset: Vec2,
    },
}

impl DragState {
    /// Whether a drag session is currently open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }
}
