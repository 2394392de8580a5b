//! Rendering seam
//!
//! The simulation only needs two primitives: filled rectangles and filled
//! ellipses. Anything that can draw those implements [`Surface`].

pub mod shapes;
pub mod vertex;

pub use shapes::VertexSurface;
pub use vertex::Vertex;

use serde::{Deserialize, Serialize};

use crate::sim::Rect;

/// 8-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Normalized RGBA with full alpha
    pub fn to_rgba(self) -> [f32; 4] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        ]
    }
}

/// Drawing sink accepted by every entity's `draw`
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);
    /// Fill the ellipse inscribed in `bounds`
    fn fill_ellipse(&mut self, bounds: Rect, color: Color);
}
