//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied timestep only
//! - No ambient or static state
//! - No rendering or platform dependencies

pub mod collision;
pub mod geometry;
pub mod state;
pub mod tick;

pub use collision::{Bounce, left_paddle_bounce, paddle_bounce, right_paddle_bounce};
pub use geometry::{Rect2, rotated};
pub use state::{Ball, Paddle, Side, SimulationState};
pub use tick::{Action, HeldActions, InputProvider, step};
