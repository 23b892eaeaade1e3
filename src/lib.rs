//! Geometry and grouping engine for a drag-and-snap cube playground.
//!
//! The playground is a fixed-size bounded 2D area containing draggable
//! rectangular "cubes". The host feeds raw pointer samples into
//! [`engine::EngineCore`]; the engine converts them into committed position
//! updates (clamped to the playground), detects snap conditions between
//! cubes, maintains the single stuck group that results, and scatters it
//! apart on demand. Rendering, hit-testing, and DOM/event plumbing are the
//! host's responsibility: it reports which cube a pointer-down landed on and
//! redraws from [`engine::EngineCore::snapshot`] after every mutation.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level orchestrator [`engine::EngineCore`] and host-facing [`engine::Action`]s |
//! | [`cube`] | Cube model, color palette, and the ordered in-memory store |
//! | [`group`] | Stuck-group state machine, snap detection, and scatter separation |
//! | [`input`] | Pointer event types and the drag-gesture state machine |
//! | [`geometry`] | Points, rectangles, axis overlap, and boundary clamping |
//! | [`config`] | Snap strategy, boundary policy, and playground configuration |
//! | [`consts`] | Shared numeric constants (playground size, snap distances, etc.) |

pub mod config;
pub mod consts;
pub mod cube;
pub mod engine;
pub mod geometry;
pub mod group;
pub mod input;
