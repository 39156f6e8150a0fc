//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time comes from the host; the core keeps no clock
//! - Seeded RNG only
//! - No rendering, audio, or platform dependencies
//!
//! Frame order: collision dispatch runs against the previous frame's
//! rectangles, then every entity advances, then off-screen pipes recycle,
//! all within one [`tick`].

pub mod bird;
pub mod entity;
pub mod pipe;
pub mod rect;
pub mod registry;
pub mod state;
pub mod tick;

pub use bird::{Bird, BirdDrawData, BirdState};
pub use entity::{Entity, EntityId, EntityKind};
pub use pipe::{Pipe, PipeDrawData};
pub use rect::Rect;
pub use registry::{CollisionRegistry, Contact};
pub use state::GameState;
pub use tick::{TickInput, tick};
