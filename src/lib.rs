//! Gapwing - a side-scrolling gap-threading arcade game core
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collision dispatch, game state)
//! - `config`: Data-driven tunables with JSON loading
//! - `highscores`: In-memory session leaderboard
//!
//! The crate never draws, plays audio, or opens a window. A host shell calls
//! `sim::tick` once per frame with elapsed time and edge-triggered input,
//! then reads back score, liveness, and draw data for its own renderer.

pub mod config;
pub mod highscores;
pub mod sim;

pub use config::SimConfig;
pub use highscores::HighScores;

/// Game configuration constants
pub mod consts {
    /// World dimensions in pixels
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 360.0;
    /// Height of the ground strip at the bottom of the world
    pub const GROUND_HEIGHT: f32 = 60.0;
    /// Extra clearance between the bird and the ground line
    pub const FLOOR_MARGIN: f32 = 10.0;

    /// Bird hitbox
    pub const BIRD_WIDTH: f32 = 38.0;
    pub const BIRD_HEIGHT: f32 = 24.0;
    /// Downward acceleration while alive (pixels/s^2)
    pub const GRAVITY: f32 = 920.0;
    /// Downward acceleration once dead (stylized fast crash fall)
    pub const DEAD_GRAVITY: f32 = 5000.0;
    /// Vertical velocity set by a flap (pixels/s, negative is up)
    pub const FLAP_IMPULSE: f32 = -265.0;
    /// Initial downward drift at spawn
    pub const SPAWN_VELOCITY: f32 = 30.0;
    /// Wing animation: frame count and per-frame interval
    pub const ANIM_FRAMES: usize = 4;
    pub const ANIM_INTERVAL_MS: f32 = 60.0;

    /// Pipe geometry
    pub const PIPE_CAP_WIDTH: f32 = 52.0;
    pub const PIPE_CAP_HEIGHT: f32 = 24.0;
    pub const PIPE_BODY_WIDTH: f32 = 48.0;
    pub const PIPE_BODY_INSET: f32 = 2.0;
    /// Vertical opening between the pipe caps
    pub const PIPE_GAP: f32 = 90.0;
    /// Horizontal scroll speed shared by all pipes (pixels/s)
    pub const SCROLL_SPEED: f32 = 200.0;
    /// Horizontal distance between consecutive pipes
    pub const PIPE_SPACING: f32 = 200.0;
    /// X position of the first pipe at setup
    pub const PIPE_SPAWN_X: f32 = 600.0;
}
