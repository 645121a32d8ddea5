//! Simulation state and entities
//!
//! Everything a step reads or writes lives in [`SimulationState`], which the
//! frame loop owns and passes by reference.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::Rect2;
use crate::consts::*;

fn vec2(xy: (f32, f32)) -> Vec2 {
    Vec2::new(xy.0, xy.1)
}

/// Which side of the screen a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// A player's paddle. Only ever moves along y.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    pub rect: Rect2,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        let position = match side {
            Side::Left => PADDLE_LEFT_POS,
            Side::Right => PADDLE_RIGHT_POS,
        };
        Self {
            side,
            rect: Rect2::new(vec2(position), vec2(PADDLE_SIZE)),
        }
    }

    /// Move up (toward y = 0) for `dt` seconds, only if not already at the top
    ///
    /// The bound is checked against the pre-move position, so a large `dt`
    /// may overshoot.
    pub fn move_up(&mut self, dt: f32) -> bool {
        if self.rect.position.y > 0.0 {
            self.rect.position.y -= P_SPEED * dt;
            true
        } else {
            false
        }
    }

    /// Move down for `dt` seconds, only if not already at the bottom
    pub fn move_down(&mut self, dt: f32) -> bool {
        if self.rect.position.y < SCREEN_HEIGHT {
            self.rect.position.y += P_SPEED * dt;
            true
        } else {
            false
        }
    }
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect2,
    /// Travel direction, scaled by `B_SPEED`. Replaced on every bounce and
    /// never normalized.
    pub dir: Vec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            rect: Rect2::new(vec2(BALL_POS), vec2(BALL_SIZE)),
            dir: vec2(BALL_DIR),
        }
    }
}

impl Ball {
    /// Integrate position over `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.rect.position += self.dir * B_SPEED * dt;
    }

    /// Teleport to the opposite edge if outside the screen
    ///
    /// One axis check each, y first. Returns true if any wrap happened.
    pub fn wrap(&mut self) -> bool {
        let pos = &mut self.rect.position;
        let mut wrapped = false;

        if pos.y > SCREEN_HEIGHT {
            pos.y = 0.0;
            wrapped = true;
        } else if pos.y < 0.0 {
            pos.y = SCREEN_HEIGHT;
            wrapped = true;
        }

        if pos.x > SCREEN_WIDTH {
            pos.x = 0.0;
            wrapped = true;
        } else if pos.x < 0.0 {
            pos.x = SCREEN_WIDTH;
            wrapped = true;
        }

        wrapped
    }
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub paddle_left: Paddle,
    pub paddle_right: Paddle,
    pub ball: Ball,
    /// Completed steps
    pub frame: u64,
    /// Set by a step, consumed by the driver before rendering
    #[serde(skip)]
    redraw: bool,
}

impl Default for SimulationState {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationState {
    pub fn new() -> Self {
        Self {
            paddle_left: Paddle::new(Side::Left),
            paddle_right: Paddle::new(Side::Right),
            ball: Ball::default(),
            frame: 0,
            redraw: false,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.paddle_left,
            Side::Right => &self.paddle_right,
        }
    }

    /// Mark the state as ready to draw
    pub(crate) fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Consume the redraw signal
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = SimulationState::new();

        assert_eq!(state.paddle_left.rect.position, Vec2::new(100.0, 360.0));
        assert_eq!(state.paddle_left.rect.size, Vec2::new(25.0, 100.0));
        assert_eq!(state.paddle_right.rect.position, Vec2::new(1180.0, 360.0));
        assert_eq!(state.paddle_right.rect.size, Vec2::new(25.0, 100.0));
        assert_eq!(state.ball.rect.position, Vec2::new(640.0, 360.0));
        assert_eq!(state.ball.rect.size, Vec2::new(15.0, 15.0));
        assert_eq!(state.ball.dir, Vec2::new(1.0, 0.0));
        assert_eq!(state.frame, 0);
        assert_eq!(state.paddle(Side::Right).side, Side::Right);
    }

    #[test]
    fn test_paddle_move_bounds_use_pre_move_position() {
        let mut paddle = Paddle::new(Side::Left);

        paddle.rect.position.y = 0.0;
        assert!(!paddle.move_up(0.1));
        assert_eq!(paddle.rect.position.y, 0.0);

        // Just below the top: moves and overshoots past 0
        paddle.rect.position.y = 1.0;
        assert!(paddle.move_up(0.1));
        assert_eq!(paddle.rect.position.y, 1.0 - P_SPEED * 0.1);

        paddle.rect.position.y = 720.0;
        assert!(!paddle.move_down(0.1));
        assert_eq!(paddle.rect.position.y, 720.0);
    }

    #[test]
    fn test_ball_wrap_each_axis() {
        let mut ball = Ball::default();

        ball.rect.position = Vec2::new(640.0, 720.5);
        assert!(ball.wrap());
        assert_eq!(ball.rect.position, Vec2::new(640.0, 0.0));

        ball.rect.position = Vec2::new(-0.001, 300.0);
        assert!(ball.wrap());
        assert_eq!(ball.rect.position, Vec2::new(1280.0, 300.0));

        ball.rect.position = Vec2::new(1281.0, -2.0);
        assert!(ball.wrap());
        assert_eq!(ball.rect.position, Vec2::new(0.0, 720.0));
    }

    #[test]
    fn test_ball_wrap_keeps_closed_bounds() {
        let mut ball = Ball::default();
        for pos in [
            Vec2::new(0.0, 0.0),
            Vec2::new(1280.0, 720.0),
            Vec2::new(640.0, 360.0),
        ] {
            ball.rect.position = pos;
            assert!(!ball.wrap());
            assert_eq!(ball.rect.position, pos);
        }
    }

    #[test]
    fn test_take_redraw_consumes() {
        let mut state = SimulationState::new();
        assert!(!state.take_redraw());
        state.request_redraw();
        assert!(state.take_redraw());
        assert!(!state.take_redraw());
    }

    #[test]
    fn test_state_json_snapshot() {
        let state = SimulationState::new();
        let json = serde_json::to_string(&state).unwrap();
        let restored: SimulationState = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.ball.rect, state.ball.rect);
        assert_eq!(restored.paddle_right.side, Side::Right);
    }
}
