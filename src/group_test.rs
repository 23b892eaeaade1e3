#![allow(clippy::clone_on_copy, clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::StdRng;
use uuid::Uuid;

use super::*;
use crate::cube::{Color, Cube};

const SIZE: f64 = 800.0;
const EDGE_SNAP: f64 = 10.0;
const PROXIMITY_SNAP: f64 = 30.0;

fn cube(x: f64, y: f64, w: f64, h: f64) -> Cube {
    Cube::new(x, y, w, h, Color::Green)
}

fn store_with(cubes: Vec<Cube>) -> CubeStore {
    let mut store = CubeStore::new();
    for c in cubes {
        store.insert(c);
    }
    store
}

fn pair(group: &StuckGroup) -> (CubeId, CubeId) {
    assert_eq!(group.members.len(), 2);
    (group.members[0], group.members[1])
}

// =============================================================
// StuckGroup / GroupState
// =============================================================

#[test]
fn group_contains_its_members() {
    let (a, b) = (Uuid::new_v4(), Uuid::new_v4());
    let group = StuckGroup { main: a, members: vec![a, b] };
    assert!(group.contains(a));
    assert!(group.contains(b));
    assert!(!group.contains(Uuid::new_v4()));
}

#[test]
fn default_group_state_is_free() {
    let state = GroupState::default();
    assert_eq!(state, GroupState::Free);
    assert!(state.group().is_none());
    assert!(!state.is_stuck());
}

#[test]
fn stuck_state_exposes_its_group() {
    let a = Uuid::new_v4();
    let group = StuckGroup { main: a, members: vec![a, Uuid::new_v4()] };
    let state = GroupState::Stuck(group.clone());
    assert!(state.is_stuck());
    assert_eq!(state.group(), Some(&group));
}

// =============================================================
// Edge-adjacency detection
// =============================================================

#[test]
fn right_edge_near_left_edge_snaps_flush() {
    // A's right edge at 295, B's left edge at 300: gap 5, vertical overlap.
    let a = cube(195.0, 320.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let store = store_with(vec![a, b]);

    let hit = detect_edge_snap(&store, id_a, EDGE_SNAP).unwrap();

    // Flush X is exactly other.left - width, Y untouched.
    assert_eq!(hit.flush, Some(Point::new(200.0, 320.0)));
    assert_eq!(hit.group.main, id_a);
    assert_eq!(pair(&hit.group), (id_a, id_b));
}

#[test]
fn left_edge_near_right_edge_snaps_flush() {
    // A's left edge at 385, B's right edge at 380: gap 5.
    let a = cube(385.0, 320.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    let hit = detect_edge_snap(&store, id_a, EDGE_SNAP).unwrap();
    assert_eq!(hit.flush, Some(Point::new(380.0, 320.0)));
}

#[test]
fn top_edge_near_bottom_edge_snaps_flush() {
    // A's top edge at 385, B's bottom edge at 380: gap 5, horizontal overlap.
    let a = cube(320.0, 385.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    let hit = detect_edge_snap(&store, id_a, EDGE_SNAP).unwrap();
    assert_eq!(hit.flush, Some(Point::new(320.0, 380.0)));
}

#[test]
fn bottom_edge_near_top_edge_snaps_flush() {
    // A's bottom edge at 295, B's top edge at 300: gap 5.
    let a = cube(320.0, 195.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    let hit = detect_edge_snap(&store, id_a, EDGE_SNAP).unwrap();
    assert_eq!(hit.flush, Some(Point::new(320.0, 200.0)));
}

#[test]
fn gap_beyond_snap_distance_does_not_snap() {
    // Gap of 20 on the nearest edge pairing.
    let a = cube(180.0, 320.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    assert!(detect_edge_snap(&store, id_a, EDGE_SNAP).is_none());
}

#[test]
fn corner_only_contact_does_not_snap() {
    // A's right edge is within range of B's left edge, but the rectangles
    // only touch at a corner: no cross-axis overlap, no snap.
    let a = cube(195.0, 380.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    assert!(detect_edge_snap(&store, id_a, EDGE_SNAP).is_none());
}

#[test]
fn first_registry_match_wins() {
    // Both b and c qualify; b was inserted first, so b is the partner.
    let a = cube(195.0, 320.0, 100.0, 100.0);
    let b = cube(300.0, 300.0, 80.0, 80.0);
    let c = cube(300.0, 310.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let store = store_with(vec![a, b, c]);

    let hit = detect_edge_snap(&store, id_a, EDGE_SNAP).unwrap();
    assert_eq!(pair(&hit.group), (id_a, id_b));
}

#[test]
fn edge_snap_unknown_dragged_id_is_none() {
    let store = store_with(vec![cube(0.0, 0.0, 100.0, 100.0)]);
    assert!(detect_edge_snap(&store, Uuid::new_v4(), EDGE_SNAP).is_none());
}

// =============================================================
// Proximity detection
// =============================================================

#[test]
fn centers_within_distance_form_a_group() {
    // Centers (150,150) and (160,155): distance ~11.2 < 30.
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(120.0, 115.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let store = store_with(vec![a, b]);

    let hit = detect_proximity_snap(&store, id_a, PROXIMITY_SNAP).unwrap();

    // No position snapping for proximity.
    assert_eq!(hit.flush, None);
    assert_eq!(hit.group.main, id_a);
    assert_eq!(pair(&hit.group), (id_a, id_b));
}

#[test]
fn centers_exactly_at_distance_do_not_group() {
    // Centers (150,150) and (180,150): distance exactly 30, strict compare.
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(140.0, 110.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    assert!(detect_proximity_snap(&store, id_a, PROXIMITY_SNAP).is_none());
}

#[test]
fn every_cube_in_range_joins_the_group() {
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(110.0, 105.0, 80.0, 80.0);
    let c = cube(105.0, 110.0, 80.0, 80.0);
    let far = cube(600.0, 600.0, 80.0, 80.0);
    let (id_a, id_b, id_c) = (a.id, b.id, c.id);
    let store = store_with(vec![a, b, c, far]);

    let hit = detect_proximity_snap(&store, id_a, PROXIMITY_SNAP).unwrap();
    assert_eq!(hit.group.members, vec![id_a, id_b, id_c]);
}

#[test]
fn isolated_cube_forms_no_group() {
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(600.0, 600.0, 80.0, 80.0);
    let id_a = a.id;
    let store = store_with(vec![a, b]);

    assert!(detect_proximity_snap(&store, id_a, PROXIMITY_SNAP).is_none());
}

// =============================================================
// Group movement
// =============================================================

#[test]
fn group_moves_as_one() {
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(200.0, 100.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    assert!(move_group(&mut store, &group, Vec2::new(10.0, 20.0), SIZE));

    assert_eq!(store.get(id_a).unwrap().position(), Point::new(110.0, 120.0));
    assert_eq!(store.get(id_b).unwrap().position(), Point::new(210.0, 120.0));
}

#[test]
fn non_members_do_not_move() {
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(200.0, 100.0, 80.0, 80.0);
    let other = cube(500.0, 500.0, 80.0, 80.0);
    let (id_a, id_b, id_other) = (a.id, b.id, other.id);
    let mut store = store_with(vec![a, b, other]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    move_group(&mut store, &group, Vec2::new(10.0, 20.0), SIZE);

    assert_eq!(store.get(id_other).unwrap().position(), Point::new(500.0, 500.0));
}

#[test]
fn x_denied_for_all_when_one_member_would_cross() {
    // b sits at the right wall (max origin 720 for an 80-wide cube); any
    // positive x delta is denied for the whole group, y still applies.
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(720.0, 100.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    assert!(move_group(&mut store, &group, Vec2::new(10.0, 20.0), SIZE));

    assert_eq!(store.get(id_a).unwrap().position(), Point::new(100.0, 120.0));
    assert_eq!(store.get(id_b).unwrap().position(), Point::new(720.0, 120.0));
}

#[test]
fn y_denied_for_all_when_one_member_would_cross() {
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(200.0, 0.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    assert!(move_group(&mut store, &group, Vec2::new(10.0, -20.0), SIZE));

    assert_eq!(store.get(id_a).unwrap().position(), Point::new(110.0, 100.0));
    assert_eq!(store.get(id_b).unwrap().position(), Point::new(210.0, 0.0));
}

#[test]
fn both_axes_denied_moves_nothing() {
    let a = cube(0.0, 0.0, 100.0, 100.0);
    let b = cube(200.0, 200.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    assert!(!move_group(&mut store, &group, Vec2::new(-10.0, -10.0), SIZE));

    assert_eq!(store.get(id_a).unwrap().position(), Point::new(0.0, 0.0));
    assert_eq!(store.get(id_b).unwrap().position(), Point::new(200.0, 200.0));
}

#[test]
fn member_offsets_never_change() {
    let a = cube(100.0, 100.0, 100.0, 100.0);
    let b = cube(720.0, 300.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    let offset_before =
        store.get(id_b).unwrap().position() - store.get(id_a).unwrap().position();

    // A mix of allowed and denied updates.
    move_group(&mut store, &group, Vec2::new(10.0, 20.0), SIZE);
    move_group(&mut store, &group, Vec2::new(50.0, -5.0), SIZE);
    move_group(&mut store, &group, Vec2::new(-30.0, 500.0), SIZE);

    let offset_after =
        store.get(id_b).unwrap().position() - store.get(id_a).unwrap().position();
    assert_eq!(offset_before, offset_after);
}

// =============================================================
// Scatter separation
// =============================================================

#[test]
fn scatter_displaces_members_within_range() {
    // Both cubes sit far enough from every wall that clamping can't
    // shorten the displacement; the raw range must hold exactly.
    let a = cube(300.0, 300.0, 80.0, 80.0);
    let b = cube(400.0, 400.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let before_a = a.position();
    let before_b = b.position();
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };
    let mut rng = StdRng::seed_from_u64(42);

    scatter_group(&mut store, &group, SIZE, &mut rng);

    for (id, before) in [(id_a, before_a), (id_b, before_b)] {
        let after = store.get(id).unwrap().position();
        let d = after - before;
        let distance = d.x.hypot(d.y);
        assert!((50.0..100.0).contains(&distance), "displacement {distance} out of range");
    }
}

#[test]
fn scatter_keeps_members_in_bounds() {
    // Corner cubes: clamping must hold the bounds invariant.
    let a = cube(0.0, 0.0, 100.0, 100.0);
    let b = cube(720.0, 720.0, 80.0, 80.0);
    let (id_a, id_b) = (a.id, b.id);
    let mut store = store_with(vec![a, b]);
    let group = StuckGroup { main: id_a, members: vec![id_a, id_b] };

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        scatter_group(&mut store, &group, SIZE, &mut rng);
        for c in store.iter() {
            assert!(c.x >= 0.0 && c.x <= SIZE - c.width);
            assert!(c.y >= 0.0 && c.y <= SIZE - c.height);
        }
    }
}
