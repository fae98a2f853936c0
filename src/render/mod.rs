//! Rasterization and compositing.
//!
//! [`ScreenTriangle`] is the hand-off type between the transform stages and
//! the rasterizer: three post-projection vertices carrying screen position,
//! inverse clip-space `w`, and a premultiplied attribute. Instances are
//! transient - created and discarded per triangle, never persisted.

mod compositor;
mod framebuffer;
mod pipeline;
mod rasterizer;

pub use compositor::composite_pixel;
pub use framebuffer::{FrameBuffer, DEPTH_FAR};
pub use pipeline::{RenderStats, Renderer, ScreenOrigin, Viewport};
pub use rasterizer::{rasterize, EdgeFunction, FillRule};

use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;

/// One post-projection vertex ready for rasterization.
///
/// The attribute is stored premultiplied by `1/w` so the compositor can
/// interpolate `attr/w` and `1/w` linearly in screen space and divide them
/// back out per pixel (perspective-correct interpolation).
#[derive(Clone, Copy, Debug)]
pub struct ScreenVertex {
    /// Screen-space position (integral after the viewport floor).
    pub position: Vec2,
    /// Reciprocal of the clip-space w component. Larger = nearer.
    pub w_inv: f32,
    /// Color attribute (channels in `[0, 255]`) divided by clip-space w.
    pub color_over_w: Vec3,
}

impl ScreenVertex {
    /// Build from a screen position, the vertex's clip-space `w`, and its
    /// color attribute with channels in `[0, 255]`.
    pub fn new(position: Vec2, clip_w: f32, color: Vec3) -> Self {
        let w_inv = 1.0 / clip_w;
        Self {
            position,
            w_inv,
            color_over_w: color * w_inv,
        }
    }
}

/// A triangle in screen space, the rasterizer's unit of work.
#[derive(Clone, Copy, Debug)]
pub struct ScreenTriangle {
    pub vertices: [ScreenVertex; 3],
}

impl ScreenTriangle {
    pub fn new(vertices: [ScreenVertex; 3]) -> Self {
        Self { vertices }
    }

    pub fn positions(&self) -> [Vec2; 3] {
        [
            self.vertices[0].position,
            self.vertices[1].position,
            self.vertices[2].position,
        ]
    }

    /// Doubled signed area of the screen-space triangle.
    pub fn signed_area2(&self) -> f32 {
        let [a, b, c] = self.positions();
        (b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)
    }

    /// Ensures positive winding so every edge function is non-negative
    /// inside the triangle.
    ///
    /// Swaps the first two vertices (positions and attributes together) when
    /// the signed area is negative. Returns the positive doubled area, or
    /// `None` for a zero-area triangle, which carries no coverage and would
    /// divide by zero during interpolation.
    pub fn normalize_winding(&mut self) -> Option<f32> {
        let area2 = self.signed_area2();
        if area2 == 0.0 {
            return None;
        }
        if area2 < 0.0 {
            self.vertices.swap(0, 1);
            return Some(-area2);
        }
        Some(area2)
    }
}
