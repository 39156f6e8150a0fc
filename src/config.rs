//! Data-driven simulation tunables
//!
//! All gameplay numbers in one serializable struct so a host can load a
//! variant from JSON without recompiling. `Default` mirrors the canonical
//! constants in [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Simulation tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// World width in pixels
    pub screen_width: f32,
    /// World height in pixels
    pub screen_height: f32,
    /// Height of the ground strip
    pub ground_height: f32,
    /// Clearance between the bird and the ground line
    pub floor_margin: f32,

    /// Downward acceleration while alive (pixels/s^2)
    pub gravity: f32,
    /// Downward acceleration once dead
    pub dead_gravity: f32,
    /// Vertical velocity set by a flap (negative is up)
    pub flap_impulse: f32,

    /// Horizontal scroll speed shared by all pipes (pixels/s)
    pub scroll_speed: f32,
    /// Horizontal distance between consecutive pipes
    pub pipe_spacing: f32,
    /// Vertical opening between the pipe caps
    pub pipe_gap: f32,
    /// Top clearance margin: upper bound of the upper pipe body
    pub pipe_begin: f32,
    /// X position of the first pipe at setup
    pub pipe_spawn_x: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            ground_height: GROUND_HEIGHT,
            floor_margin: FLOOR_MARGIN,
            gravity: GRAVITY,
            dead_gravity: DEAD_GRAVITY,
            flap_impulse: FLAP_IMPULSE,
            scroll_speed: SCROLL_SPEED,
            pipe_spacing: PIPE_SPACING,
            pipe_gap: PIPE_GAP,
            pipe_begin: 0.0,
            pipe_spawn_x: PIPE_SPAWN_X,
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Lower bound of the lower pipe body (the ground line)
    pub fn pipe_end(&self) -> f32 {
        self.screen_height - self.ground_height
    }

    /// Y threshold at which the bird hits the ground
    pub fn floor_y(&self) -> f32 {
        self.screen_height - self.ground_height - self.floor_margin - BIRD_HEIGHT
    }

    /// Bird spawn point
    pub fn bird_spawn(&self) -> glam::Vec2 {
        glam::Vec2::new(self.screen_width / 12.0, self.screen_height / 2.0 - 60.0)
    }

    /// Number of pipes in the recycling pool
    pub fn pool_size(&self) -> usize {
        (self.screen_width / 100.0) as usize
    }

    /// Inclusive integer range the gap position is drawn from
    pub fn gap_y_range(&self) -> (i32, i32) {
        let span = self.pipe_end() - self.pipe_begin - 2.0 * PIPE_CAP_HEIGHT - self.pipe_gap;
        let lo = self.pipe_begin as i32;
        (lo, lo + span.max(0.0) as i32)
    }
}
