//! Engine configuration: snap strategy, boundary policy, playground size.
//!
//! Snap strategy and boundary policy are explicit, independently
//! configurable choices rather than one merged behavior; their semantics
//! differ materially (membership rules, whether snapping repositions the
//! dragged cube).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{EDGE_SNAP_DISTANCE, PLAYGROUND_SIZE, PROXIMITY_SNAP_DISTANCE};
use crate::cube::CubeId;

/// Which rule forms the stuck group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapStrategy {
    /// Snap when an edge pair is within [`EDGE_SNAP_DISTANCE`] with
    /// cross-axis overlap; the dragged cube is repositioned exactly flush
    /// and a two-member group forms.
    #[default]
    EdgeAdjacency,
    /// Group every cube whose center is within [`PROXIMITY_SNAP_DISTANCE`]
    /// of the dragged cube's center; positions are left where dragged.
    Proximity,
}

impl SnapStrategy {
    /// Strategy-specific snap threshold. The two thresholds are not
    /// interchangeable.
    #[must_use]
    pub fn snap_distance(self) -> f64 {
        match self {
            Self::EdgeAdjacency => EDGE_SNAP_DISTANCE,
            Self::Proximity => PROXIMITY_SNAP_DISTANCE,
        }
    }
}

/// How a dragged cube interacts with the playground walls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Clamp both axes; while the clamped X sits on the left or right wall
    /// the cube's Y is held at its last committed value for that update,
    /// and symmetrically for a clamped Y on the top or bottom wall.
    #[default]
    EdgeSlide,
    /// Clamp both axes independently, no axis freeze.
    Clamp,
}

/// Playground configuration consumed by the engine at construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundConfig {
    /// Side length of the square playground.
    pub size: f64,
    /// Group-formation rule.
    pub strategy: SnapStrategy,
    /// Wall interaction for single-cube drags.
    pub boundary: BoundaryPolicy,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            size: PLAYGROUND_SIZE,
            strategy: SnapStrategy::default(),
            boundary: BoundaryPolicy::default(),
        }
    }
}

impl PlaygroundConfig {
    /// Configuration with the boundary policy conventionally paired with
    /// the given strategy: edge-adjacency with edge-slide, proximity with
    /// plain clamping.
    #[must_use]
    pub fn for_strategy(strategy: SnapStrategy) -> Self {
        let boundary = match strategy {
            SnapStrategy::EdgeAdjacency => BoundaryPolicy::EdgeSlide,
            SnapStrategy::Proximity => BoundaryPolicy::Clamp,
        };
        Self { size: PLAYGROUND_SIZE, strategy, boundary }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveSize`] if `size` is zero, negative,
    /// or not finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.size));
        }
        Ok(())
    }
}

/// Construction-time configuration errors. Interaction-time preconditions
/// never error; they no-op instead.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("playground size must be positive and finite, got {0}")]
    NonPositiveSize(f64),
    #[error("cube {id} ({width}x{height}) does not fit a {size} playground")]
    CubeTooLarge { id: CubeId, width: f64, height: f64, size: f64 },
}
