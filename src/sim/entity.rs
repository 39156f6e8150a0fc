//! Entity identity and the read-only collision surface
//!
//! Every simulated object carries a process-lifetime-unique id allocated
//! from the game state's monotonic counter. Identity equality is id
//! equality; recycled pipes keep their id. The set of entity kinds is
//! closed, so collision behavior is routed by matching on [`EntityKind`]
//! rather than by downcasting.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Unique entity identifier, monotonic and never reused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u32);

/// Closed set of entity kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityKind {
    Bird,
    Pipe,
}

/// Read-only surface the collision registry scans each frame.
///
/// Entities recompute their hit rectangles at the end of their own update,
/// so a scan that runs before any update sees the previous frame's geometry.
pub trait Entity {
    fn id(&self) -> EntityId;
    fn kind(&self) -> EntityKind;
    /// Hit rectangles in world coordinates
    fn collision_rects(&self) -> &[Rect];
}
