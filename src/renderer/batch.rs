//! Frame batching: turns draw commands into one vertex list per frame

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use crate::sim::{Rect, RenderSurface};

/// A [`RenderSurface`] that tessellates everything it is asked to draw.
///
/// The GPU pass clears to transparent and then draws `vertices` in order.
#[derive(Debug, Clone)]
pub struct ShapeBatch {
    vertices: Vec<Vertex>,
    circle_segments: u32,
}

impl ShapeBatch {
    pub fn new(circle_segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            circle_segments,
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

impl RenderSurface for ShapeBatch {
    fn clear(&mut self, _region: Rect) {
        // Only whole-frame clears come through here; everything painted so far is gone
        self.vertices.clear();
    }

    fn fill_rect(&mut self, region: Rect, color: [f32; 4]) {
        self.vertices.extend(shapes::rect(region, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: [f32; 4]) {
        self.vertices
            .extend(shapes::circle(center, radius, color, self.circle_segments));
    }
}
