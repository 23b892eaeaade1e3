//! Geometry primitives: points, displacement vectors, axis-aligned
//! rectangles, interval overlap, and boundary clamping.
//!
//! Everything here is pure and unit-free; coordinates are playground-local
//! with the origin at the top-left corner.

#[cfg(test)]
#[path = "geometry_test.rs"]
mod geometry_test;

/// A point in playground-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl std::ops::Sub for Point {
    type Output = Vec2;

    fn sub(self, rhs: Self) -> Vec2 {
        Vec2 { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Sub<Vec2> for Point {
    type Output = Point;

    fn sub(self, rhs: Vec2) -> Point {
        Point { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// A displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Coordinate axis selector for interval tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Y,
}

/// An axis-aligned rectangle with a top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Center of the rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Euclidean distance between the centers of two rectangles.
    #[must_use]
    pub fn center_distance(&self, other: &Rect) -> f64 {
        let d = self.center() - other.center();
        d.x.hypot(d.y)
    }

    /// Whether the two rectangles' intervals on `axis` intersect.
    ///
    /// Strict on both ends: rectangles that merely touch do not overlap.
    /// Edge-snap detection uses this on the axis perpendicular to the
    /// candidate edge pair, so corner-only contact never qualifies as a
    /// full edge attachment.
    #[must_use]
    pub fn overlaps_on(&self, axis: Axis, other: &Rect) -> bool {
        match axis {
            Axis::X => self.x < other.x + other.width && self.x + self.width > other.x,
            Axis::Y => self.y < other.y + other.height && self.y + self.height > other.y,
        }
    }
}

/// Clamp a position component to the legal origin range `[0, max_origin]`.
///
/// `max_origin` is `playground size − cube extent` on the same axis. Every
/// committed position passes through this.
#[must_use]
pub fn clamp_position(value: f64, max_origin: f64) -> f64 {
    value.clamp(0.0, max_origin)
}
