//! Top-level engine: wires pointer samples through the drag controller,
//! boundary constraints, snap detection, and group movement, and exposes
//! the commands and queries the host UI needs.
//!
//! The engine owns the cube store exclusively and mutates it only through
//! the store's update operations. Everything is synchronous: each entry
//! point runs its full pipeline (selection → proposal → constraint →
//! commit → detection → commit) before returning, so pointer events are
//! processed strictly in arrival order with no interleaving. Unmet
//! preconditions (unknown target, no selection, no active drag, no group)
//! never error; they no-op so a missed precondition can't crash the
//! interaction loop.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;
use serde::Serialize;
use tracing::debug;

use crate::config::{BoundaryPolicy, ConfigError, PlaygroundConfig, SnapStrategy};
use crate::cube::{Color, Cube, CubeId, CubeStore};
use crate::geometry::{Point, clamp_position};
use crate::group::{self, GroupState, SnapHit, StuckGroup};
use crate::input::{DragState, PointerEvent};

/// Actions returned from entry points for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Precondition not met; nothing changed.
    None,
    /// The selection moved to this cube.
    SelectionChanged { id: CubeId },
    /// The selected cube was recolored.
    ColorChanged { id: CubeId, color: Color },
    /// A single cube's position was committed.
    CubeMoved { id: CubeId },
    /// Every listed member moved by the same delta.
    GroupMoved { members: Vec<CubeId> },
    /// A stuck group formed from these members.
    GroupFormed { members: Vec<CubeId> },
    /// The stuck group was scattered and discarded.
    GroupSeparated,
}

/// Per-cube view consumed by the rendering collaborator, in registry order.
#[derive(Debug, Clone, Serialize)]
pub struct CubeSnapshot {
    pub id: CubeId,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: Color,
    /// CSS color string for direct use in a style attribute.
    pub css: &'static str,
    pub selected: bool,
    /// Whether this cube belongs to the current stuck group.
    pub in_group: bool,
}

/// The playground engine.
pub struct EngineCore {
    config: PlaygroundConfig,
    store: CubeStore,
    drag: DragState,
    group: GroupState,
}

/// The fixed seed cubes the playground opens with.
fn default_cubes() -> Vec<Cube> {
    let mut first = Cube::new(100.0, 100.0, 100.0, 100.0, Color::Green);
    first.selected = true;
    let second = Cube::new(300.0, 300.0, 80.0, 80.0, Color::Violet);
    vec![first, second]
}

impl EngineCore {
    /// Create an engine with the default seed cubes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the configuration is invalid.
    pub fn new(config: PlaygroundConfig) -> Result<Self, ConfigError> {
        Self::with_cubes(config, default_cubes())
    }

    /// Create an engine seeded with explicit cubes.
    ///
    /// Seed positions are clamped into the playground so the bounds
    /// invariant holds from the first snapshot, and at most the first
    /// `selected` flag is kept so the selection invariant does too.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveSize`] for an invalid playground
    /// size, or [`ConfigError::CubeTooLarge`] if any cube cannot fit.
    pub fn with_cubes(config: PlaygroundConfig, cubes: Vec<Cube>) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut store = CubeStore::new();
        let mut seen_selected = false;
        for mut cube in cubes {
            if cube.width > config.size || cube.height > config.size {
                return Err(ConfigError::CubeTooLarge {
                    id: cube.id,
                    width: cube.width,
                    height: cube.height,
                    size: config.size,
                });
            }
            cube.x = clamp_position(cube.x, config.size - cube.width);
            cube.y = clamp_position(cube.y, config.size - cube.height);
            if cube.selected && seen_selected {
                cube.selected = false;
            }
            seen_selected |= cube.selected;
            store.insert(cube);
        }
        Ok(Self { config, store, drag: DragState::Idle, group: GroupState::Free })
    }

    // --- Pointer events ---

    /// Dispatch a host pointer sample to the matching handler.
    pub fn on_pointer_event(&mut self, event: PointerEvent) -> Vec<Action> {
        match event {
            PointerEvent::Down { pos, target } => self.on_pointer_down(pos, target),
            PointerEvent::Move { pos } => self.on_pointer_move(pos),
            PointerEvent::Up => self.on_pointer_up(),
        }
    }

    /// Pointer pressed on `target`: select it and open a drag session.
    ///
    /// The grab offset (pointer minus cube origin) is captured here, once,
    /// and held for the whole session. No-op if `target` is unknown.
    pub fn on_pointer_down(&mut self, pos: Point, target: CubeId) -> Vec<Action> {
        let Some(cube) = self.store.get(target) else {
            return Vec::new();
        };
        let grab_offset = pos - cube.position();
        self.apply_selection(target);
        self.drag = DragState::Dragging { id: target, grab_offset };
        debug!(cube = %target, "drag begin");
        vec![Action::SelectionChanged { id: target }]
    }

    /// Pointer moved: propose, constrain, commit, then detect snapping.
    ///
    /// Ignored while no drag session is open. Feeding the same sample twice
    /// commits the same state both times.
    pub fn on_pointer_move(&mut self, pos: Point) -> Vec<Action> {
        let DragState::Dragging { id, grab_offset } = self.drag else {
            return Vec::new();
        };
        let Some(cube) = self.store.get(id) else {
            return Vec::new();
        };
        let current = cube.position();
        let proposed = pos - grab_offset;
        let committed = self.constrain(cube, proposed);

        if let GroupState::Stuck(group) = &self.group {
            if group.contains(id) {
                let group = group.clone();
                // Delta comes from the dragged cube's intended (unclamped)
                // move; per-axis all-or-nothing denial bounds the group.
                let delta = proposed - current;
                let moved = group::move_group(&mut self.store, &group, delta, self.config.size);
                return if moved {
                    vec![Action::GroupMoved { members: group.members }]
                } else {
                    Vec::new()
                };
            }
        }

        self.store.update_one(id, |c| {
            c.x = committed.x;
            c.y = committed.y;
        });
        let mut actions = vec![Action::CubeMoved { id }];

        if matches!(self.group, GroupState::Free) {
            if let Some(SnapHit { flush, group }) = self.detect_snap(id) {
                if let Some(flush) = flush {
                    // Exact-touch commit; still clamped so a snap near a
                    // wall can't push the cube out of the playground.
                    let size = self.config.size;
                    self.store.update_one(id, |c| {
                        c.x = clamp_position(flush.x, size - c.width);
                        c.y = clamp_position(flush.y, size - c.height);
                    });
                }
                debug!(members = group.members.len(), "group formed");
                actions.push(Action::GroupFormed { members: group.members.clone() });
                self.group = GroupState::Stuck(group);
            }
        }
        actions
    }

    /// Pointer released: close the drag session. No position changes;
    /// whatever was last committed stands.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        if self.drag.is_dragging() {
            debug!("drag end");
            self.drag = DragState::Idle;
        }
        Vec::new()
    }

    // --- Commands ---

    /// Make `id` the selection, clearing every other cube, in one pass.
    /// No-op if `id` is unknown.
    pub fn select_cube(&mut self, id: CubeId) -> Action {
        if self.store.get(id).is_none() {
            return Action::None;
        }
        self.apply_selection(id);
        Action::SelectionChanged { id }
    }

    /// Recolor the selected cube. No-op without a selection.
    pub fn change_color(&mut self, color: Color) -> Action {
        let Some(id) = self.store.selected().map(|c| c.id) else {
            return Action::None;
        };
        self.store.update_one(id, |c| c.color = color);
        Action::ColorChanged { id, color }
    }

    /// Scatter the stuck group and return to the free state. No-op while
    /// no group exists.
    pub fn separate(&mut self) -> Action {
        self.separate_with(&mut rand::rng())
    }

    /// Separation with a caller-supplied RNG, for deterministic replay.
    pub fn separate_with(&mut self, rng: &mut impl Rng) -> Action {
        let GroupState::Stuck(group) = std::mem::take(&mut self.group) else {
            return Action::None;
        };
        group::scatter_group(&mut self.store, &group, self.config.size, rng);
        debug!(members = group.members.len(), "group separated");
        Action::GroupSeparated
    }

    // --- Queries ---

    /// All cubes in registry order.
    #[must_use]
    pub fn cubes(&self) -> &[Cube] {
        self.store.cubes()
    }

    /// Id of the selected cube, if any.
    #[must_use]
    pub fn selection(&self) -> Option<CubeId> {
        self.store.selected().map(|c| c.id)
    }

    /// The current stuck group. Hosts disable their separate control while
    /// this is `None`.
    #[must_use]
    pub fn group(&self) -> Option<&StuckGroup> {
        self.group.group()
    }

    /// Whether a drag session is open.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    /// Render view of every cube, in registry order.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CubeSnapshot> {
        self.store
            .iter()
            .map(|c| CubeSnapshot {
                id: c.id,
                x: c.x,
                y: c.y,
                width: c.width,
                height: c.height,
                color: c.color,
                css: c.color.css(),
                selected: c.selected,
                in_group: self.group.group().is_some_and(|g| g.contains(c.id)),
            })
            .collect()
    }

    /// JSON form of [`snapshot`](Self::snapshot) for hosts across a wire.
    ///
    /// # Errors
    ///
    /// Returns any `serde_json` serialization error.
    pub fn snapshot_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.snapshot())
    }

    // --- Internals ---

    /// One atomic pass: `selected` becomes `(cube.id == id)` for every cube,
    /// so there is no observable state with zero or two selections.
    fn apply_selection(&mut self, id: CubeId) {
        self.store.update_many(|_| true, |c| c.selected = c.id == id);
    }

    /// Apply the configured boundary policy to a proposed position.
    fn constrain(&self, cube: &Cube, proposed: Point) -> Point {
        let max_x = self.config.size - cube.width;
        let max_y = self.config.size - cube.height;
        let cx = clamp_position(proposed.x, max_x);
        let cy = clamp_position(proposed.y, max_y);
        match self.config.boundary {
            BoundaryPolicy::Clamp => Point::new(cx, cy),
            BoundaryPolicy::EdgeSlide => {
                // A clamped axis sitting on a wall freezes the other axis
                // at its last committed value for this update.
                let pinned_x = cx <= 0.0 || cx >= max_x;
                let pinned_y = cy <= 0.0 || cy >= max_y;
                Point::new(
                    if pinned_y { cube.x } else { cx },
                    if pinned_x { cube.y } else { cy },
                )
            }
        }
    }

    /// Run the configured strategy's snap detection for the dragged cube.
    fn detect_snap(&self, dragged: CubeId) -> Option<SnapHit> {
        let distance = self.config.strategy.snap_distance();
        match self.config.strategy {
            SnapStrategy::EdgeAdjacency => group::detect_edge_snap(&self.store, dragged, distance),
            SnapStrategy::Proximity => group::detect_proximity_snap(&self.store, dragged, distance),
        }
    }
}
