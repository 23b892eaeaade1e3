//! Cube model: the draggable objects on the playground and the in-memory
//! store that owns them.
//!
//! This module defines the cube itself (`Cube`), its fixed three-swatch
//! palette (`Color`), and the runtime registry (`CubeStore`). The store is
//! the single piece of mutable state in the crate; the engine owns exactly
//! one and mutates it only through the update operations here. Iteration
//! order is insertion order, and snap detection's first-match rule depends
//! on it.

#[cfg(test)]
#[path = "cube_test.rs"]
mod cube_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Rect};

/// Unique identifier for a cube.
pub type CubeId = Uuid;

/// Fill color, one of the fixed three-swatch palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Violet,
    Yellow,
}

impl Color {
    /// The full palette, in swatch order.
    pub const PALETTE: [Color; 3] = [Color::Green, Color::Violet, Color::Yellow];

    /// CSS color string used by the rendering collaborator.
    #[must_use]
    pub fn css(self) -> &'static str {
        match self {
            Self::Green => "rgb(9 236 146)",
            Self::Violet => "rgb(115 0 255)",
            Self::Yellow => "rgb(255 209 0)",
        }
    }
}

/// A draggable, selectable, colorable rectangle.
///
/// `id`, `width`, and `height` are fixed for the cube's lifetime; position,
/// color, and selection are mutated in place by the engine. Committed
/// positions always satisfy `0 ≤ x ≤ size − width` and
/// `0 ≤ y ≤ size − height`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cube {
    /// Unique identifier, stable once created.
    pub id: CubeId,
    /// Left edge of the cube in playground-local coordinates.
    pub x: f64,
    /// Top edge of the cube in playground-local coordinates.
    pub y: f64,
    /// Width, immutable for the cube's lifetime.
    pub width: f64,
    /// Height, immutable for the cube's lifetime.
    pub height: f64,
    /// Current fill color.
    pub color: Color,
    /// Whether this cube is the current selection. At most one cube in a
    /// store has this set.
    pub selected: bool,
}

impl Cube {
    /// Create an unselected cube with a fresh id.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64, color: Color) -> Self {
        Self { id: Uuid::new_v4(), x, y, width, height, color, selected: false }
    }

    /// Top-left position as a point.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Bounding rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }
}

/// Ordered in-memory registry of cubes.
#[derive(Debug, Default)]
pub struct CubeStore {
    cubes: Vec<Cube>,
}

impl CubeStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { cubes: Vec::new() }
    }

    /// Append a cube. Registry order is insertion order.
    pub fn insert(&mut self, cube: Cube) {
        self.cubes.push(cube);
    }

    /// Return a reference to a cube by id.
    #[must_use]
    pub fn get(&self, id: CubeId) -> Option<&Cube> {
        self.cubes.iter().find(|c| c.id == id)
    }

    /// The currently selected cube, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&Cube> {
        self.cubes.iter().find(|c| c.selected)
    }

    /// Apply `f` to the single cube with `id`. Returns false if no such
    /// cube exists; no other cube is touched either way.
    pub fn update_one(&mut self, id: CubeId, f: impl FnOnce(&mut Cube)) -> bool {
        match self.cubes.iter_mut().find(|c| c.id == id) {
            Some(cube) => {
                f(cube);
                true
            }
            None => false,
        }
    }

    /// Apply `f` to every cube matching `pred`, in registry order.
    pub fn update_many(&mut self, pred: impl Fn(&Cube) -> bool, f: impl Fn(&mut Cube)) {
        for cube in self.cubes.iter_mut().filter(|c| pred(c)) {
            f(cube);
        }
    }

    /// All cubes in registry order.
    #[must_use]
    pub fn cubes(&self) -> &[Cube] {
        &self.cubes
    }

    /// Iterate cubes in registry order.
    pub fn iter(&self) -> impl Iterator<Item = &Cube> {
        self.cubes.iter()
    }

    /// Number of cubes in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cubes.len()
    }

    /// Returns `true` if the store contains no cubes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cubes.is_empty()
    }
}
