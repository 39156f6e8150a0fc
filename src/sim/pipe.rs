//! Scrolling pipe obstacles
//!
//! A pipe is an upper/lower pair framing a vertical opening, parameterized
//! by `(x, gap_y, begin, end, gap)`. Every rectangle it exposes is a pure
//! function of those parameters, recomputed by [`Pipe::recompute_geometry`]
//! at the end of every mutator, so the geometry can never go stale between
//! a state change and the next read.
//!
//! Hit rectangles: four solid pieces (caps and bodies) plus a one-pixel
//! score trigger spanning exactly the opening. The trigger shares edges
//! with both caps; the strict overlap test keeps those edges from reading
//! as collisions.

use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::bird::Bird;
use super::entity::{Entity, EntityId, EntityKind};
use super::rect::Rect;

/// Index of the score trigger within the hit rect array
const TRIGGER: usize = 4;

/// Render-facing snapshot of a pipe
#[derive(Debug, Clone, Copy)]
pub struct PipeDrawData {
    pub upper_cap: Rect,
    pub upper_body: Rect,
    pub lower_cap: Rect,
    pub lower_body: Rect,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pipe {
    id: EntityId,
    /// Horizontal position of the left edge
    x: f32,
    /// Bottom edge of the upper pipe body; the opening starts one cap below
    gap_y: f32,
    /// Top clearance margin bounding the upper body
    begin: f32,
    /// Ground line bounding the lower body
    end: f32,
    /// Height of the opening
    gap: f32,
    scroll_speed: f32,
    /// Solids at 0..4, score trigger at 4
    rects: [Rect; 5],
}

impl Pipe {
    pub fn new(
        id: EntityId,
        x: f32,
        gap_y: f32,
        begin: f32,
        end: f32,
        gap: f32,
        scroll_speed: f32,
    ) -> Self {
        let mut pipe = Self {
            id,
            x,
            gap_y,
            begin,
            end,
            gap,
            scroll_speed,
            rects: [Rect::new(0.0, 0.0, 0.0, 0.0); 5],
        };
        pipe.recompute_geometry();
        pipe
    }

    /// Sole producer of derived rectangles. Body heights clamp to zero when
    /// the opening sits flush against either bound.
    fn recompute_geometry(&mut self) {
        let body_x = self.x + PIPE_BODY_INSET;
        let lower_cap_y = self.gap_y + PIPE_CAP_HEIGHT + self.gap;
        let lower_body_y = lower_cap_y + PIPE_CAP_HEIGHT;

        self.rects[0] = Rect::new(self.x, self.gap_y, PIPE_CAP_WIDTH, PIPE_CAP_HEIGHT);
        self.rects[1] = Rect::new(body_x, self.begin, PIPE_BODY_WIDTH, self.gap_y - self.begin);
        self.rects[2] = Rect::new(self.x, lower_cap_y, PIPE_CAP_WIDTH, PIPE_CAP_HEIGHT);
        self.rects[3] = Rect::new(body_x, lower_body_y, PIPE_BODY_WIDTH, self.end - lower_body_y);
        self.rects[TRIGGER] = Rect::new(self.x, self.gap_y + PIPE_CAP_HEIGHT, 1.0, self.gap);
    }

    /// Scroll left by the shared speed
    pub fn update(&mut self, dt: f32) {
        self.set_x(self.x - self.scroll_speed * dt);
    }

    pub fn set_x(&mut self, x: f32) {
        self.x = x;
        self.recompute_geometry();
    }

    /// Reposition the opening; used when recycling
    pub fn set_height(&mut self, gap_y: f32) {
        self.gap_y = gap_y;
        self.recompute_geometry();
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn gap_y(&self) -> f32 {
        self.gap_y
    }

    pub fn width(&self) -> f32 {
        PIPE_CAP_WIDTH
    }

    /// Right edge; at or left of zero means fully off-screen
    pub fn right(&self) -> f32 {
        self.x + PIPE_CAP_WIDTH
    }

    /// The four solid rectangles, excluding the score trigger
    pub fn solid_rects(&self) -> &[Rect] {
        &self.rects[..TRIGGER]
    }

    pub fn trigger_rect(&self) -> &Rect {
        &self.rects[TRIGGER]
    }

    /// Contact routing. The registry already confirmed some rect pair
    /// overlapped, so a miss on every solid means the trigger matched:
    /// a solid hit kills and returns, anything else is a gap pass.
    pub fn on_collision(&self, bird: &mut Bird) {
        for solid in self.solid_rects() {
            if solid.overlaps(bird.hit_rect()) {
                bird.kill();
                return;
            }
        }
        bird.queue_score();
    }

    pub fn draw_data(&self) -> PipeDrawData {
        PipeDrawData {
            upper_cap: self.rects[0],
            upper_body: self.rects[1],
            lower_cap: self.rects[2],
            lower_body: self.rects[3],
        }
    }
}

impl Entity for Pipe {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Pipe
    }

    fn collision_rects(&self) -> &[Rect] {
        &self.rects
    }
}
