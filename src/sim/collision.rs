//! Paddle collision detection and response
//!
//! A bounce never reflects the incoming direction. The new direction is
//! derived from scratch: a unit vector pointing away from the paddle, tilted
//! by how far the hit was from the paddle's top edge.

use glam::Vec2;

use super::geometry::{Rect2, rotated};
use super::state::Side;

/// Outcome of testing the ball against both paddles
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounce {
    pub side: Side,
    pub angle: f32,
    pub dir: Vec2,
}

/// Direction after a left paddle hit
///
/// `angle = (paddle.y - ball.y) / paddle.height`, applied to `(1, 0)`.
pub fn left_paddle_bounce(paddle_left: &Rect2, ball: &Rect2) -> Bounce {
    let y_dist = paddle_left.position.y - ball.position.y;
    let angle = y_dist / paddle_left.size.y;
    Bounce {
        side: Side::Left,
        angle,
        dir: rotated(Vec2::X, angle),
    }
}

/// Direction after a right paddle hit
///
/// Normalizes by twice the *left* paddle's height, not the right one's,
/// so right-side bounces tilt half as much as left-side ones.
pub fn right_paddle_bounce(paddle_right: &Rect2, paddle_left: &Rect2, ball: &Rect2) -> Bounce {
    let y_dist = paddle_right.position.y - ball.position.y;
    let angle = y_dist / (paddle_left.size.y * 2.0);
    Bounce {
        side: Side::Right,
        angle,
        dir: rotated(Vec2::NEG_X, angle),
    }
}

/// Test the ball against both paddles, left first
///
/// A ball touching both paddles at once only bounces off the left one.
pub fn paddle_bounce(paddle_left: &Rect2, paddle_right: &Rect2, ball: &Rect2) -> Option<Bounce> {
    if ball.intersects(paddle_left) {
        Some(left_paddle_bounce(paddle_left, ball))
    } else if ball.intersects(paddle_right) {
        Some(right_paddle_bounce(paddle_right, paddle_left, ball))
    } else {
        None
    }
}
