//! Wrap Pong - A two-player Pong where the ball wraps around the screen
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, paddles, ball, per-frame step)
//! - `renderer`: Projection of simulation state onto rectangle draw calls
//! - `platform`: Keyboard input provider
//! - `settings`: Driver configuration

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{SettingsError, SimError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep used by the driver (120 Hz)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen bounds
    pub const SCREEN_WIDTH: f32 = 1280.0;
    pub const SCREEN_HEIGHT: f32 = 720.0;

    /// Paddle vertical speed (pixels/s)
    pub const P_SPEED: f32 = 500.0;
    /// Ball speed (pixels/s, scales `ball_dir`)
    pub const B_SPEED: f32 = 1000.0;

    /// Initial layout
    pub const PADDLE_LEFT_POS: (f32, f32) = (100.0, 360.0);
    pub const PADDLE_RIGHT_POS: (f32, f32) = (1180.0, 360.0);
    pub const PADDLE_SIZE: (f32, f32) = (25.0, 100.0);
    pub const BALL_POS: (f32, f32) = (640.0, 360.0);
    pub const BALL_SIZE: (f32, f32) = (15.0, 15.0);
    pub const BALL_DIR: (f32, f32) = (1.0, 0.0);
}
