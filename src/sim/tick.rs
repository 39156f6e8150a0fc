//! Per-frame simulation driver
//!
//! One logical frame: apply host commands, dispatch collisions against the
//! previous frame's rectangles, advance the bird, then scroll and recycle
//! pipes. The host supplies elapsed time; the core keeps no clock.

use super::bird::BirdState;
use super::state::GameState;

/// Input commands for a single frame, all edge-triggered
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Primary action: launch the bird upward
    pub flap: bool,
    /// Leave the pre-game idle pose and start simulating
    pub activate: bool,
    /// Restart after death
    pub reset: bool,
}

/// Advance the game by one frame. `dt` is elapsed seconds since the
/// previous frame.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    if input.reset {
        state.reset();
    }
    if input.activate {
        state.bird.activate();
    }
    if input.flap {
        state.bird.flap();
    }

    // Scan before anything moves, so contacts reflect what was on screen
    // last frame.
    state.dispatch_collisions();

    state.bird.update(dt);

    // Pipes scroll only during live play. Recycling happens in the same
    // pass that moved the pipe off-screen: it is repositioned ahead of the
    // most recently placed pipe and given a fresh opening, and becomes the
    // new chain tail. The pool never grows or shrinks.
    if state.bird.state() == BirdState::Active {
        for i in 0..state.pipes.len() {
            state.pipes[i].update(dt);
            if state.pipes[i].right() <= 0.0 {
                let new_x = state.pipes[state.last_pipe].x() + state.config.pipe_spacing;
                let gap_y = state.draw_gap_y();
                state.pipes[i].set_x(new_x);
                state.pipes[i].set_height(gap_y);
                state.last_pipe = i;
                log::debug!("pipe recycled to x={new_x:.0}, gap_y={gap_y:.0}");
            }
        }
    }

    state.time_ticks += 1;
}
