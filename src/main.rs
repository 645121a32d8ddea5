//! Wrap Pong entry point
//!
//! Headless driver: runs the fixed-timestep loop against a simulated clock,
//! feeding seeded demo input and rendering into a vertex batch.

use std::path::PathBuf;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use wrap_pong::Settings;
use wrap_pong::consts::*;
use wrap_pong::platform::{Key, Keyboard};
use wrap_pong::renderer::{QuadBatch, render};
use wrap_pong::sim::{HeldActions, SimulationState, step};

/// Presses and releases random keys every few frames
struct DemoInput {
    rng: Pcg32,
    frames_until_change: u32,
}

impl DemoInput {
    fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            frames_until_change: 0,
        }
    }

    fn update(&mut self, keyboard: &mut Keyboard) {
        if self.frames_until_change > 0 {
            self.frames_until_change -= 1;
            return;
        }

        for key in Key::ALL {
            if self.rng.random_bool(0.3) {
                keyboard.press(key);
            } else {
                keyboard.release(key);
            }
        }
        self.frames_until_change = self.rng.random_range(5..30);
    }
}

/// Game instance holding all state
struct Game {
    state: SimulationState,
    keyboard: Keyboard,
    demo: Option<DemoInput>,
    batch: QuadBatch,
    accumulator: f32,
    steps: u64,
    bounces: u32,
    draws: u32,
}

impl Game {
    fn new(settings: &Settings) -> Self {
        Self {
            state: SimulationState::new(),
            keyboard: Keyboard::new(),
            demo: settings.demo_input.then(|| DemoInput::new(settings.seed)),
            batch: QuadBatch::new(),
            accumulator: 0.0,
            steps: 0,
            bounces: 0,
            draws: 0,
        }
    }

    /// Run simulation ticks for one display frame
    fn update(&mut self, dt: f32) -> Result<(), wrap_pong::SimError> {
        if let Some(demo) = self.demo.as_mut() {
            demo.update(&mut self.keyboard);
        }
        let input = HeldActions::sample(&self.keyboard);

        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let dir_before = self.state.ball.dir;
            step(&mut self.state, &input, SIM_DT)?;
            if self.state.ball.dir != dir_before {
                self.bounces += 1;
            }
            self.accumulator -= SIM_DT;
            substeps += 1;
            self.steps += 1;
        }

        Ok(())
    }

    fn draw(&mut self) {
        if !self.state.take_redraw() {
            return;
        }
        self.batch.clear();
        match render(&self.state, &mut self.batch) {
            Ok(()) => self.draws += 1,
            Err(never) => match never {},
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let settings_path = std::env::args().nth(1).map(PathBuf::from);
    let settings = Settings::load_or_default(settings_path.as_deref());
    log::info!(
        "Running {} frames at {:.4}s (demo input: {})",
        settings.frames,
        settings.frame_seconds,
        settings.demo_input
    );

    let mut game = Game::new(&settings);
    for _ in 0..settings.frames {
        game.update(settings.frame_seconds)?;
        game.draw();
    }

    log::info!(
        "Done: {} steps, {} bounces, {} draws, {} vertices in last batch",
        game.steps,
        game.bounces,
        game.draws,
        game.batch.vertices().len()
    );
    log::info!(
        "Ball at {} heading {}",
        game.state.ball.rect.position,
        game.state.ball.dir
    );

    if settings.dump_state {
        println!("{}", serde_json::to_string_pretty(&game.state)?);
    }

    Ok(())
}
