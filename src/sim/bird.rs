//! The player-controlled bird
//!
//! A vertical physics integrator with three modes: `Idle` holds the
//! pre-game pose, `Active` runs the full simulation, `Dead` is terminal
//! until an explicit reset. Scoring is deferred by one frame so that a
//! frame carrying both a gap pass and a pipe hit resolves to death.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

use super::entity::{Entity, EntityId, EntityKind};
use super::rect::Rect;

/// Bird lifecycle mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BirdState {
    /// Pre-game pose: no gravity, input ignored
    Idle,
    /// Full simulation
    Active,
    /// Terminal until reset: heavy crash fall, input ignored, frame pinned
    Dead,
}

/// Render-facing snapshot of the bird
#[derive(Debug, Clone, Copy)]
pub struct BirdDrawData {
    pub rect: Rect,
    /// Rotation in degrees, render only
    pub angle: f32,
    /// Wing animation frame index
    pub frame: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    id: EntityId,
    pos: Vec2,
    vel_y: f32,
    angle: f32,
    state: BirdState,
    score: u32,
    score_pending: bool,
    in_collision: bool,
    frame: usize,
    frame_timer_ms: f32,
    floor_y: f32,
    hit_rect: [Rect; 1],
}

impl Bird {
    pub fn new(id: EntityId, pos: Vec2, floor_y: f32) -> Self {
        let mut bird = Self {
            id,
            pos,
            vel_y: SPAWN_VELOCITY,
            angle: 0.0,
            state: BirdState::Idle,
            score: 0,
            score_pending: false,
            in_collision: false,
            frame: 0,
            frame_timer_ms: 0.0,
            floor_y,
            hit_rect: [Rect::new(pos.x, pos.y, BIRD_WIDTH, BIRD_HEIGHT)],
        };
        bird.recompute_rect();
        bird
    }

    fn recompute_rect(&mut self) {
        self.hit_rect[0] = Rect::new(self.pos.x, self.pos.y, BIRD_WIDTH, BIRD_HEIGHT);
    }

    /// Advance one frame. `dt` is elapsed seconds since the previous frame,
    /// supplied by the host; this is variable-timestep Euler integration.
    pub fn update(&mut self, dt: f32) {
        // Commit a gap pass armed last frame, unless the same dispatch pass
        // also flagged a collision: death wins the tie.
        if self.score_pending && !self.in_collision && self.state == BirdState::Active {
            self.score += 1;
            self.score_pending = false;
            log::debug!("score committed: {}", self.score);
        }

        let accel = if self.state == BirdState::Dead {
            DEAD_GRAVITY
        } else {
            GRAVITY
        };

        if self.state != BirdState::Idle {
            self.vel_y += accel * dt;
            self.pos.y += self.vel_y * dt;
            if self.pos.y < 0.0 {
                self.pos.y = 0.0;
            }
        }

        if self.state != BirdState::Idle {
            if self.pos.y >= self.floor_y {
                self.kill();
                self.pos.y = self.floor_y;
                // Exponential approach to 90 degrees, then pinned exactly
                if self.angle < 90.0 {
                    self.angle += (90.0 - self.angle) * dt * 52.0;
                } else {
                    self.angle = 90.0;
                }
            } else {
                self.angle += (self.vel_y / 10.0 - self.angle) * dt * 15.0;
                // Cheap wrap guard, not a modulo: the hard reset at the
                // boundary is part of the visual spin behavior.
                if self.angle >= 360.0 || self.angle <= -360.0 {
                    self.angle = 0.0;
                }
            }
        }

        if self.state != BirdState::Dead {
            // Timer resets to zero on firing instead of subtracting the
            // threshold, so frame timing drifts slightly under variable dt.
            if self.frame_timer_ms >= ANIM_INTERVAL_MS {
                self.frame = (self.frame + 1) % ANIM_FRAMES;
                self.frame_timer_ms = 0.0;
            }
            self.frame_timer_ms += dt * 1000.0;
        } else {
            self.frame = 0;
        }

        self.recompute_rect();
        self.in_collision = false;
    }

    /// Launch impulse. Silent no-op while Idle or Dead.
    pub fn flap(&mut self) {
        if self.state == BirdState::Active {
            self.vel_y = FLAP_IMPULSE;
        }
    }

    /// Leave the pre-game pose and start simulating. Idle to Active only.
    pub fn activate(&mut self) {
        if self.state == BirdState::Idle {
            self.state = BirdState::Active;
            log::debug!("bird activated");
        }
    }

    /// End the run. Active to Dead only; idempotent afterwards.
    pub fn kill(&mut self) {
        if self.state == BirdState::Active {
            self.state = BirdState::Dead;
            log::debug!("bird died at y={:.1} with score {}", self.pos.y, self.score);
        }
    }

    /// Restart after death. Dead to Idle only; clears score, flags, and
    /// angle. The position is left alone; the caller repositions.
    pub fn reset(&mut self) {
        if self.state != BirdState::Dead {
            return;
        }
        self.state = BirdState::Idle;
        self.score = 0;
        self.score_pending = false;
        self.in_collision = false;
        self.angle = 0.0;
        self.vel_y = SPAWN_VELOCITY;
        self.frame = 0;
        self.frame_timer_ms = 0.0;
    }

    /// Arm a pending gap pass. The increment lands on the next update that
    /// sees no collision; arming twice before a commit changes nothing.
    pub fn queue_score(&mut self) {
        self.score_pending = true;
    }

    /// Collision callback: flags contact for this frame only. Death and
    /// scoring are driven by the pipe's own contact logic.
    pub fn on_collision(&mut self, _other: EntityId, _other_kind: EntityKind) {
        self.in_collision = true;
    }

    /// Move the bird, keeping its hit rect in sync
    pub fn reposition(&mut self, pos: Vec2) {
        self.pos = pos;
        self.recompute_rect();
    }

    pub fn state(&self) -> BirdState {
        self.state
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn vel_y(&self) -> f32 {
        self.vel_y
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn hit_rect(&self) -> &Rect {
        &self.hit_rect[0]
    }

    pub fn draw_data(&self) -> BirdDrawData {
        BirdDrawData {
            rect: self.hit_rect[0],
            angle: self.angle,
            frame: self.frame,
        }
    }
}

impl Entity for Bird {
    fn id(&self) -> EntityId {
        self.id
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Bird
    }

    fn collision_rects(&self) -> &[Rect] {
        &self.hit_rect
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_bird(y: f32) -> Bird {
        let mut bird = Bird::new(EntityId(0), Vec2::new(33.0, y), 266.0);
        bird.activate();
        bird
    }

    #[test]
    fn test_idle_immunity() {
        let mut bird = Bird::new(EntityId(0), Vec2::new(33.0, 120.0), 266.0);
        for _ in 0..50 {
            bird.update(0.25);
        }
        assert_eq!(bird.state(), BirdState::Idle);
        assert_eq!(bird.pos().y, 120.0);
        assert_eq!(bird.vel_y(), SPAWN_VELOCITY);
        assert_eq!(bird.angle(), 0.0);
    }

    #[test]
    fn test_flap_ignored_while_idle() {
        let mut bird = Bird::new(EntityId(0), Vec2::new(33.0, 120.0), 266.0);
        bird.flap();
        assert_eq!(bird.vel_y(), SPAWN_VELOCITY);
    }

    #[test]
    fn test_integration_matches_closed_form() {
        // Velocity-first Euler from rest:
        // y_N = y0 + a * dt^2 * N * (N + 1) / 2
        let mut bird = active_bird(100.0);
        // Cancel the spawn drift for a clean closed form
        bird.vel_y = 0.0;
        let dt = 0.01;
        let n = 10;
        for _ in 0..n {
            bird.update(dt);
        }
        let expected = 100.0 + GRAVITY * dt * dt * (n * (n + 1)) as f32 / 2.0;
        assert!((bird.pos().y - expected).abs() < 1e-3);
        assert!((bird.vel_y() - GRAVITY * dt * n as f32).abs() < 1e-3);
    }

    #[test]
    fn test_floor_death_once_and_flap_rejected() {
        let mut bird = active_bird(260.0);
        bird.vel_y = 200.0;
        bird.update(0.1);
        assert_eq!(bird.state(), BirdState::Dead);
        assert_eq!(bird.pos().y, 266.0);

        let vel_after_death = bird.vel_y();
        bird.flap();
        assert_eq!(bird.vel_y(), vel_after_death);
    }

    #[test]
    fn test_dead_bird_angle_pins_at_ninety() {
        let mut bird = active_bird(260.0);
        bird.vel_y = 200.0;
        for _ in 0..10 {
            bird.update(0.1);
        }
        assert_eq!(bird.state(), BirdState::Dead);
        assert_eq!(bird.angle(), 90.0);
        assert_eq!(bird.pos().y, 266.0);
    }

    #[test]
    fn test_one_second_fall_ends_on_floor() {
        let mut bird = active_bird(100.0);
        bird.vel_y = 0.0;
        for _ in 0..10 {
            bird.update(0.1);
        }
        // Unclamped the fall would pass 500px; the floor interrupts it
        assert_eq!(bird.state(), BirdState::Dead);
        assert_eq!(bird.pos().y, 266.0);
        assert_eq!(bird.angle(), 90.0);
    }

    #[test]
    fn test_ceiling_clamp() {
        let mut bird = active_bird(5.0);
        bird.vel_y = -400.0;
        bird.update(0.1);
        assert_eq!(bird.pos().y, 0.0);
    }

    #[test]
    fn test_score_commit_deferred_past_collision_frames() {
        let mut bird = active_bird(100.0);
        bird.queue_score();
        bird.on_collision(EntityId(1), EntityKind::Pipe);
        bird.update(0.001);
        assert_eq!(bird.score(), 0);

        // Collision flag cleared by the update; commit lands now
        bird.update(0.001);
        assert_eq!(bird.score(), 1);

        // No double commit
        bird.update(0.001);
        assert_eq!(bird.score(), 1);
    }

    #[test]
    fn test_queue_score_twice_commits_once() {
        let mut bird = active_bird(100.0);
        bird.queue_score();
        bird.queue_score();
        bird.update(0.001);
        assert_eq!(bird.score(), 1);
    }

    #[test]
    fn test_no_commit_while_dead() {
        let mut bird = active_bird(260.0);
        bird.vel_y = 200.0;
        bird.queue_score();
        bird.on_collision(EntityId(1), EntityKind::Pipe);
        bird.update(0.1);
        assert_eq!(bird.state(), BirdState::Dead);
        for _ in 0..5 {
            bird.update(0.1);
        }
        assert_eq!(bird.score(), 0);
    }

    #[test]
    fn test_animation_cycles_while_alive_and_pins_when_dead() {
        let mut bird = active_bird(100.0);
        bird.flap();

        // 30ms per update; the timer fires on the third call
        bird.update(0.03);
        bird.update(0.03);
        assert_eq!(bird.draw_data().frame, 0);
        bird.update(0.03);
        assert_eq!(bird.draw_data().frame, 1);

        // Cycle wraps modulo four: three more firings land back on frame 0
        for _ in 0..6 {
            bird.update(0.03);
        }
        assert_eq!(bird.draw_data().frame, 0);

        bird.vel_y = 1000.0;
        while bird.state() != BirdState::Dead {
            bird.update(0.05);
        }
        bird.update(0.05);
        assert_eq!(bird.draw_data().frame, 0);
    }

    #[test]
    fn test_reset_only_from_dead() {
        let mut bird = active_bird(100.0);
        bird.reset();
        assert_eq!(bird.state(), BirdState::Active);

        bird.vel_y = 1000.0;
        while bird.state() != BirdState::Dead {
            bird.update(0.05);
        }
        bird.queue_score();
        bird.reset();
        assert_eq!(bird.state(), BirdState::Idle);
        assert_eq!(bird.score(), 0);
        assert_eq!(bird.angle(), 0.0);
        assert_eq!(bird.vel_y(), SPAWN_VELOCITY);

        // Position is the caller's job; reset leaves it where it fell
        assert_eq!(bird.pos().y, 266.0);

        // The stale pending flag must not score after reactivation
        bird.activate();
        bird.update(0.001);
        assert_eq!(bird.score(), 0);
    }

    #[test]
    fn test_hit_rect_tracks_position() {
        let mut bird = active_bird(100.0);
        bird.update(0.1);
        let rect = *bird.hit_rect();
        assert_eq!(rect.min.y, bird.pos().y);
        assert_eq!(rect.size, Vec2::new(BIRD_WIDTH, BIRD_HEIGHT));
    }
}
