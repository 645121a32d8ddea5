//! Rendering module
//!
//! The simulation only knows how to describe itself as colored rectangles.
//! Anything that can draw a rectangle implements [`Renderer`].

pub mod shapes;
pub mod vertex;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::SimulationState;

pub use shapes::QuadBatch;
pub use vertex::Vertex;

/// Fill colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Blue,
    Red,
    Black,
    White,
}

impl Color {
    pub const fn rgba(self) -> [f32; 4] {
        match self {
            Color::Blue => [0.0, 0.0, 1.0, 1.0],
            Color::Red => [1.0, 0.0, 0.0, 1.0],
            Color::Black => [0.0, 0.0, 0.0, 1.0],
            Color::White => [1.0, 1.0, 1.0, 1.0],
        }
    }
}

/// Left paddle, right paddle, ball
pub const PADDLE_LEFT_COLOR: Color = Color::Blue;
pub const PADDLE_RIGHT_COLOR: Color = Color::Red;
pub const BALL_COLOR: Color = Color::Black;

/// Draws axis-aligned rectangles
pub trait Renderer {
    type Error;

    /// `position` is the top-left corner
    fn draw_rectangle(
        &mut self,
        position: Vec2,
        size: Vec2,
        color: Color,
    ) -> Result<(), Self::Error>;
}

/// Issue the draw calls for the current state
///
/// Stops at the first renderer error and returns it unchanged.
pub fn render<R: Renderer>(state: &SimulationState, renderer: &mut R) -> Result<(), R::Error> {
    let entities = [
        (&state.paddle_left.rect, PADDLE_LEFT_COLOR),
        (&state.paddle_right.rect, PADDLE_RIGHT_COLOR),
        (&state.ball.rect, BALL_COLOR),
    ];

    for (rect, color) in entities {
        renderer.draw_rectangle(rect.position, rect.size, color)?;
    }
    Ok(())
}
