//! Per-frame simulation step
//!
//! Stages run in a fixed order and each one sees the positions written by
//! the stages before it: paddles, ball translation, paddle bounce, wrap.

use std::fmt;
use std::str::FromStr;

use super::collision::paddle_bounce;
use super::state::{Paddle, SimulationState};
use crate::error::SimError;

/// Logical player inputs, decoupled from physical keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    P1Up,
    P1Down,
    P2Up,
    P2Down,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::P1Up, Action::P1Down, Action::P2Up, Action::P2Down];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::P1Up => "p1_up",
            Action::P1Down => "p1_down",
            Action::P2Up => "p2_up",
            Action::P2Down => "p2_down",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| SimError::UnknownAction(s.to_string()))
    }
}

/// Reports whether an action is currently held
pub trait InputProvider {
    fn is_action_held(&self, action: Action) -> bool;
}

/// Input snapshot for a single step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeldActions {
    pub p1_up: bool,
    pub p1_down: bool,
    pub p2_up: bool,
    pub p2_down: bool,
}

impl HeldActions {
    /// Sample every action from another provider
    pub fn sample(input: &impl InputProvider) -> Self {
        Self {
            p1_up: input.is_action_held(Action::P1Up),
            p1_down: input.is_action_held(Action::P1Down),
            p2_up: input.is_action_held(Action::P2Up),
            p2_down: input.is_action_held(Action::P2Down),
        }
    }
}

impl InputProvider for HeldActions {
    fn is_action_held(&self, action: Action) -> bool {
        match action {
            Action::P1Up => self.p1_up,
            Action::P1Down => self.p1_down,
            Action::P2Up => self.p2_up,
            Action::P2Down => self.p2_down,
        }
    }
}

/// Up wins when both directions are held
fn control_paddle(paddle: &mut Paddle, up: bool, down: bool, dt: f32) {
    let moved_up = up && paddle.move_up(dt);
    if !moved_up && down {
        paddle.move_down(dt);
    }
}

/// Advance the simulation by `dt` seconds
///
/// `dt` must be finite and non-negative. Zero is allowed: nothing moves but
/// paddle bounces are still evaluated.
pub fn step(
    state: &mut SimulationState,
    input: &impl InputProvider,
    dt: f32,
) -> Result<(), SimError> {
    if !dt.is_finite() {
        return Err(SimError::NonFiniteDelta(dt));
    }
    if dt < 0.0 {
        return Err(SimError::NegativeDelta(dt));
    }

    control_paddle(
        &mut state.paddle_left,
        input.is_action_held(Action::P1Up),
        input.is_action_held(Action::P1Down),
        dt,
    );
    control_paddle(
        &mut state.paddle_right,
        input.is_action_held(Action::P2Up),
        input.is_action_held(Action::P2Down),
        dt,
    );

    state.ball.advance(dt);

    if let Some(bounce) = paddle_bounce(
        &state.paddle_left.rect,
        &state.paddle_right.rect,
        &state.ball.rect,
    ) {
        log::debug!(
            "frame {}: ball bounced off {:?} paddle at angle {:.3}",
            state.frame,
            bounce.side,
            bounce.angle
        );
        state.ball.dir = bounce.dir;
    }

    if state.ball.wrap() {
        log::trace!("frame {}: ball wrapped to {}", state.frame, state.ball.rect.position);
    }

    state.frame += 1;
    state.request_redraw();
    Ok(())
}
