//! Shared numeric constants for the playground engine.

// ── Playground ──────────────────────────────────────────────────

/// Side length of the square playground, in playground-local units.
pub const PLAYGROUND_SIZE: f64 = 800.0;

// ── Snapping ────────────────────────────────────────────────────

/// Maximum edge gap for the edge-adjacency strategy to snap two cubes flush.
pub const EDGE_SNAP_DISTANCE: f64 = 10.0;

/// Maximum center-to-center distance for the proximity strategy to group cubes.
pub const PROXIMITY_SNAP_DISTANCE: f64 = 30.0;

// ── Separation ──────────────────────────────────────────────────

/// Minimum scatter displacement when a group is separated, inclusive.
pub const SCATTER_MIN_DISTANCE: f64 = 50.0;

/// Maximum scatter displacement when a group is separated, exclusive.
pub const SCATTER_MAX_DISTANCE: f64 = 100.0;
