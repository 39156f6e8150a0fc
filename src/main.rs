//! Gapwing entry point
//!
//! Headless demo driver: runs the simulation at a fixed 120 Hz cadence with
//! a small autopilot and reports the results. A rendering host would drive
//! the same tick/draw-data surface with real elapsed time and input.

use gapwing::consts::{BIRD_HEIGHT, PIPE_CAP_HEIGHT};
use gapwing::sim::{BirdState, GameState, TickInput, tick};
use gapwing::{HighScores, SimConfig};

/// Fixed demo timestep (120 Hz)
const DT: f32 = 1.0 / 120.0;
/// Frames per demo run before giving up (two minutes)
const MAX_FRAMES: u32 = 120 * 120;
/// Number of runs to play back to back
const RUNS: u32 = 3;

fn main() {
    env_logger::init();

    let mut seed = 1u64;
    let mut config = SimConfig::default();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                seed = args[i + 1].parse().unwrap_or_else(|_| {
                    log::warn!("bad --seed value {:?}, using 1", args[i + 1]);
                    1
                });
                i += 2;
            }
            "--config" if i + 1 < args.len() => {
                config = load_config(&args[i + 1]);
                i += 2;
            }
            other => {
                log::warn!("ignoring unknown argument {other:?}");
                i += 1;
            }
        }
    }

    let mut state = GameState::new(seed, config);
    let mut board = HighScores::new();

    for run in 1..=RUNS {
        let (score, ticks) = play_run(&mut state);
        log::info!("run {run}: score {score} in {ticks} ticks");
        if let Some(rank) = board.add_score(score, ticks) {
            log::info!("run {run} entered the board at rank {rank}");
        }
    }

    println!("seed {seed}: best {:?}", board.top_score());
    for (i, entry) in board.entries.iter().enumerate() {
        println!("  {}. {} ({} ticks)", i + 1, entry.score, entry.ticks);
    }
}

/// Drive one run from idle to death and return (score, run length)
fn play_run(state: &mut GameState) -> (u32, u64) {
    let start_tick = state.time_ticks;

    // Wake the bird up, then reset on the next death
    tick(
        state,
        &TickInput {
            activate: true,
            ..Default::default()
        },
        DT,
    );

    let mut frames = 0u32;
    while state.is_alive() && frames < MAX_FRAMES {
        let input = TickInput {
            flap: autopilot(state),
            ..Default::default()
        };
        tick(state, &input, DT);
        frames += 1;
    }

    let result = (state.score(), state.time_ticks - start_tick);

    if state.bird.state() == BirdState::Dead {
        tick(
            state,
            &TickInput {
                reset: true,
                ..Default::default()
            },
            DT,
        );
    }

    result
}

/// Flap whenever the bird is falling below the centerline of the next
/// opening ahead of it
fn autopilot(state: &GameState) -> bool {
    let bird = &state.bird;
    let bird_x = bird.pos().x;

    let target = state
        .pipes
        .iter()
        .filter(|p| p.right() > bird_x)
        .min_by(|a, b| a.x().total_cmp(&b.x()))
        .map(|p| p.gap_y() + PIPE_CAP_HEIGHT + state.config.pipe_gap / 2.0)
        .unwrap_or(state.config.screen_height / 2.0);

    bird.pos().y + BIRD_HEIGHT > target && bird.vel_y() > 0.0
}

/// Read a JSON config, falling back to defaults on any failure
fn load_config(path: &str) -> SimConfig {
    let parsed = std::fs::read_to_string(path)
        .map_err(|e| e.to_string())
        .and_then(|json| SimConfig::from_json(&json).map_err(|e| e.to_string()));
    match parsed {
        Ok(config) => config,
        Err(err) => {
            log::warn!("could not load config {path:?}: {err}; using defaults");
            SimConfig::default()
        }
    }
}
