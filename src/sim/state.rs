//! Game state and the entity pool
//!
//! Owns the bird, the fixed-size pipe pool, the collision registry, and the
//! seeded RNG. The pool is built once at setup; pipes are recycled in
//! place, never destroyed, so the entity count is invariant for the life
//! of a run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

use super::bird::{Bird, BirdState};
use super::entity::{Entity, EntityId, EntityKind};
use super::pipe::Pipe;
use super::registry::{CollisionRegistry, Contact};

/// Complete simulation state, serializable for snapshots
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    pub bird: Bird,
    /// Fixed pool, ordered by construction
    pub pipes: Vec<Pipe>,
    pub registry: CollisionRegistry,
    /// Pool index of the most recently placed pipe; recycling chains off it
    pub last_pipe: usize,
    /// Simulation tick counter
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    /// Create a run: one idle bird and an evenly spaced pipe formation,
    /// all registered for collision dispatch.
    pub fn new(seed: u64, config: SimConfig) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut next_id = 0u32;

        let bird = Bird::new(EntityId(next_id), config.bird_spawn(), config.floor_y());
        next_id += 1;

        let mut pipes = Vec::with_capacity(config.pool_size());
        for i in 0..config.pool_size() {
            let gap_y = draw_gap_y(&mut rng, &config);
            let id = EntityId(next_id);
            next_id += 1;
            pipes.push(Pipe::new(
                id,
                config.pipe_spawn_x + i as f32 * config.pipe_spacing,
                gap_y,
                config.pipe_begin,
                config.pipe_end(),
                config.pipe_gap,
                config.scroll_speed,
            ));
        }

        let mut registry = CollisionRegistry::new();
        registry.register(bird.id());
        for pipe in &pipes {
            registry.register(pipe.id());
        }

        let last_pipe = pipes.len().saturating_sub(1);
        log::info!("run started: seed={seed}, {} pipes", pipes.len());

        Self {
            config,
            seed,
            rng,
            bird,
            pipes,
            registry,
            last_pipe,
            time_ticks: 0,
            next_id,
        }
    }

    /// Allocate a new entity id. Monotonic; ids are never reused.
    pub fn next_entity_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Draw a fresh gap position from the run RNG
    pub fn draw_gap_y(&mut self) -> f32 {
        draw_gap_y(&mut self.rng, &self.config)
    }

    /// One full dispatch pass over the rects the previous frame produced.
    /// Detection is collected first, then applied, so callbacks never run
    /// against half-scanned state.
    pub fn dispatch_collisions(&mut self) {
        let contacts = {
            let mut views: Vec<&dyn Entity> = Vec::with_capacity(1 + self.pipes.len());
            views.push(&self.bird);
            for pipe in &self.pipes {
                views.push(pipe);
            }
            self.registry.detect(&views)
        };
        self.apply_contacts(&contacts);
    }

    /// Invoke collision behavior on both parties of each contact, in the
    /// order the scan reported them: B hears about A, then A about B.
    fn apply_contacts(&mut self, contacts: &[Contact]) {
        for contact in contacts {
            match (contact.a_kind, contact.b_kind) {
                (EntityKind::Bird, EntityKind::Pipe) => {
                    if let Some(idx) = self.pipe_index(contact.b) {
                        self.pipes[idx].on_collision(&mut self.bird);
                        self.bird.on_collision(contact.b, EntityKind::Pipe);
                    }
                }
                (EntityKind::Pipe, EntityKind::Bird) => {
                    if let Some(idx) = self.pipe_index(contact.a) {
                        self.bird.on_collision(contact.a, EntityKind::Pipe);
                        self.pipes[idx].on_collision(&mut self.bird);
                    }
                }
                // Pipes never react to each other, and there is one bird
                _ => {}
            }
        }
    }

    fn pipe_index(&self, id: EntityId) -> Option<usize> {
        self.pipes.iter().position(|p| p.id() == id)
    }

    /// Restart after death: bird back to the spawn pose, pipes back to the
    /// initial formation with freshly drawn openings. No-op unless dead.
    pub fn reset(&mut self) {
        if self.bird.state() != BirdState::Dead {
            return;
        }
        self.bird.reset();
        self.bird.reposition(self.config.bird_spawn());
        for i in 0..self.pipes.len() {
            let gap_y = self.draw_gap_y();
            let pipe = &mut self.pipes[i];
            pipe.set_x(self.config.pipe_spawn_x + i as f32 * self.config.pipe_spacing);
            pipe.set_height(gap_y);
        }
        self.last_pipe = self.pipes.len().saturating_sub(1);
        log::info!("run reset at tick {}", self.time_ticks);
    }

    pub fn score(&self) -> u32 {
        self.bird.score()
    }

    pub fn is_alive(&self) -> bool {
        self.bird.state() != BirdState::Dead
    }
}

fn draw_gap_y(rng: &mut Pcg32, config: &SimConfig) -> f32 {
    let (lo, hi) = config.gap_y_range();
    rng.random_range(lo..=hi) as f32
}
