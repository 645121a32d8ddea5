//! Shape generation for 2D primitives

use std::convert::Infallible;

use glam::Vec2;

use super::vertex::Vertex;
use super::{Color, Renderer};

/// Generate vertices for a filled axis-aligned rectangle
///
/// Two triangles sharing the min-x/max-y to max-x/min-y diagonal.
pub fn rect(position: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    let min = position;
    let max = position + size;

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// CPU-side vertex list built from rectangle draw calls
///
/// Cleared and refilled once per frame, then uploaded with
/// [`Vertex::desc`] as its buffer layout.
#[derive(Debug, Default)]
pub struct QuadBatch {
    vertices: Vec<Vertex>,
}

impl QuadBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Number of rectangles in the batch
    pub fn quad_count(&self) -> usize {
        self.vertices.len() / 6
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

impl Renderer for QuadBatch {
    type Error = Infallible;

    fn draw_rectangle(
        &mut self,
        position: Vec2,
        size: Vec2,
        color: Color,
    ) -> Result<(), Infallible> {
        self.vertices.extend(rect(position, size, color.rgba()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render;
    use crate::sim::SimulationState;

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(5.0, 8.0), [1.0; 4]);

        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert!(xs.iter().all(|&x| x == 10.0 || x == 15.0));
        assert!(ys.iter().all(|&y| y == 20.0 || y == 28.0));
        assert!(verts.contains(&Vertex::new(15.0, 28.0, [1.0; 4])));
    }

    #[test]
    fn test_batch_collects_frame() {
        let state = SimulationState::new();
        let mut batch = QuadBatch::new();

        render(&state, &mut batch).unwrap();
        assert_eq!(batch.quad_count(), 3);
        assert_eq!(batch.vertices()[0].color, Color::Blue.rgba());
        assert_eq!(batch.vertices()[17].color, Color::Black.rgba());
        assert_eq!(batch.as_bytes().len(), 18 * std::mem::size_of::<Vertex>());

        batch.clear();
        assert_eq!(batch.quad_count(), 0);
    }
}
