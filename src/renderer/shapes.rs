//! Triangle-list tessellation for the two drawing primitives

use std::f32::consts::PI;

use super::vertex::Vertex;
use super::{Color, Surface};
use crate::sim::Rect;

/// Default triangle count for ellipse fans
pub const DEFAULT_ELLIPSE_SEGMENTS: u32 = 24;

/// A [`Surface`] that records everything drawn as a flat triangle list,
/// ready to upload with `bytemuck::cast_slice`.
#[derive(Debug, Clone)]
pub struct VertexSurface {
    vertices: Vec<Vertex>,
    ellipse_segments: u32,
}

impl Default for VertexSurface {
    fn default() -> Self {
        Self::new(DEFAULT_ELLIPSE_SEGMENTS)
    }
}

impl VertexSurface {
    pub fn new(ellipse_segments: u32) -> Self {
        Self {
            vertices: Vec::new(),
            ellipse_segments: ellipse_segments.max(3),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Raw bytes of the vertex list
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Start a new frame
    pub fn clear(&mut self) {
        self.vertices.clear();
    }
}

impl Surface for VertexSurface {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let color = color.to_rgba();
        let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());

        // Two triangles
        self.vertices.push(Vertex::new(l, t, color));
        self.vertices.push(Vertex::new(r, t, color));
        self.vertices.push(Vertex::new(l, b, color));

        self.vertices.push(Vertex::new(l, b, color));
        self.vertices.push(Vertex::new(r, t, color));
        self.vertices.push(Vertex::new(r, b, color));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: Color) {
        let color = color.to_rgba();
        let center = bounds.center();
        let radii = bounds.size / 2.0;
        let segments = self.ellipse_segments;

        self.vertices.reserve((segments * 3) as usize);
        for i in 0..segments {
            let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
            let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

            // Triangle from center to edge
            self.vertices.push(Vertex::new(center.x, center.y, color));
            self.vertices.push(Vertex::new(
                center.x + radii.x * theta1.cos(),
                center.y + radii.y * theta1.sin(),
                color,
            ));
            self.vertices.push(Vertex::new(
                center.x + radii.x * theta2.cos(),
                center.y + radii.y * theta2.sin(),
                color,
            ));
        }
    }
}
