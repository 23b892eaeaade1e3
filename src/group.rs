//! Grouping engine: snap detection, the stuck-group state machine,
//! group-relative movement, and scatter separation.
//!
//! The lifecycle is `Free → Stuck → Free` and nothing else. Exactly one
//! group can exist per session; it forms when snap detection fires on a
//! committed drag move and lives until an explicit separation. Detection
//! runs only while `Free`, so a stuck group never accumulates additional
//! members even when dragged next to a third cube.

#[cfg(test)]
#[path = "group_test.rs"]
mod group_test;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{SCATTER_MAX_DISTANCE, SCATTER_MIN_DISTANCE};
use crate::cube::{CubeId, CubeStore};
use crate::geometry::{Axis, Point, Vec2, clamp_position};

/// A set of cubes that move together until separated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StuckGroup {
    /// The cube whose drag triggered the snap.
    pub main: CubeId,
    /// Member ids, deduplicated, `main` included. Always at least two.
    pub members: Vec<CubeId>,
}

impl StuckGroup {
    /// Whether `id` is a member of this group.
    #[must_use]
    pub fn contains(&self, id: CubeId) -> bool {
        self.members.contains(&id)
    }
}

/// Group lifecycle state.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GroupState {
    /// No group exists; snap detection is active.
    #[default]
    Free,
    /// A group exists and moves as one; snap detection is suspended.
    Stuck(StuckGroup),
}

impl GroupState {
    /// The current group, if one exists.
    #[must_use]
    pub fn group(&self) -> Option<&StuckGroup> {
        match self {
            Self::Free => None,
            Self::Stuck(group) => Some(group),
        }
    }

    /// Whether a group currently exists.
    #[must_use]
    pub fn is_stuck(&self) -> bool {
        matches!(self, Self::Stuck(_))
    }
}

/// Outcome of snap detection.
///
/// `flush` is the exact-touch position the dragged cube must be committed
/// to (edge-adjacency only; proximity leaves positions where dragged).
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SnapHit {
    pub flush: Option<Point>,
    pub group: StuckGroup,
}

/// Edge-adjacency detection for the just-committed position of `dragged`.
///
/// Tests every other cube in registry order, and for each the four edge
/// pairings in a fixed order: dragged-left to other-right, dragged-right to
/// other-left, dragged-top to other-bottom, dragged-bottom to other-top. A
/// pairing qualifies when the edge gap is within `snap_distance` and the
/// rectangles overlap on the perpendicular axis. The first qualifying
/// pairing wins; no tie-break search happens beyond it.
pub(crate) fn detect_edge_snap(
    store: &CubeStore,
    dragged: CubeId,
    snap_distance: f64,
) -> Option<SnapHit> {
    let a = store.get(dragged)?.rect();

    for other in store.iter().filter(|c| c.id != dragged) {
        let b = other.rect();
        let pairings = [
            ((a.x - (b.x + b.width)).abs(), Axis::Y, Point::new(b.x + b.width, a.y)),
            ((a.x + a.width - b.x).abs(), Axis::Y, Point::new(b.x - a.width, a.y)),
            ((a.y - (b.y + b.height)).abs(), Axis::X, Point::new(a.x, b.y + b.height)),
            ((a.y + a.height - b.y).abs(), Axis::X, Point::new(a.x, b.y - a.height)),
        ];
        for (gap, cross_axis, flush) in pairings {
            if gap <= snap_distance && a.overlaps_on(cross_axis, &b) {
                return Some(SnapHit {
                    flush: Some(flush),
                    group: StuckGroup { main: dragged, members: vec![dragged, other.id] },
                });
            }
        }
    }
    None
}

/// Proximity detection for the just-committed position of `dragged`.
///
/// Every other cube whose center is strictly within `snap_distance` of the
/// dragged cube's center joins the group. No position snapping occurs.
pub(crate) fn detect_proximity_snap(
    store: &CubeStore,
    dragged: CubeId,
    snap_distance: f64,
) -> Option<SnapHit> {
    let a = store.get(dragged)?.rect();

    let mut members = vec![dragged];
    for other in store.iter().filter(|c| c.id != dragged) {
        if a.center_distance(&other.rect()) < snap_distance {
            members.push(other.id);
        }
    }
    if members.len() < 2 {
        return None;
    }
    Some(SnapHit { flush: None, group: StuckGroup { main: dragged, members } })
}

/// Move every group member by `delta`, all-or-nothing per axis.
///
/// If any member's prospective position would leave the playground on an
/// axis, no member moves on that axis for this update. Relative offsets
/// between members therefore never change while grouped. Returns `true` if
/// at least one axis was applied.
pub(crate) fn move_group(
    store: &mut CubeStore,
    group: &StuckGroup,
    delta: Vec2,
    size: f64,
) -> bool {
    let mut can_move_x = true;
    let mut can_move_y = true;

    for cube in store.iter().filter(|c| group.contains(c.id)) {
        let x = cube.x + delta.x;
        let y = cube.y + delta.y;
        if x < 0.0 || x > size - cube.width {
            can_move_x = false;
        }
        if y < 0.0 || y > size - cube.height {
            can_move_y = false;
        }
    }

    if !can_move_x && !can_move_y {
        return false;
    }
    store.update_many(
        |c| group.contains(c.id),
        |c| {
            if can_move_x {
                c.x += delta.x;
            }
            if can_move_y {
                c.y += delta.y;
            }
        },
    );
    true
}

/// Scatter every group member by a uniformly random direction in `[0, 2π)`
/// and distance in `[50, 100)`, clamped back into the playground.
pub(crate) fn scatter_group(
    store: &mut CubeStore,
    group: &StuckGroup,
    size: f64,
    rng: &mut impl Rng,
) {
    for &id in &group.members {
        let angle = rng.random_range(0.0..std::f64::consts::TAU);
        let distance = rng.random_range(SCATTER_MIN_DISTANCE..SCATTER_MAX_DISTANCE);
        store.update_one(id, |cube| {
            let x = cube.x + angle.cos() * distance;
            let y = cube.y + angle.sin() * distance;
            cube.x = clamp_position(x, size - cube.width);
            cube.y = clamp_position(y, size - cube.height);
        });
    }
}
