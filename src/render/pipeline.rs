//! The per-mesh draw loop and its screen mapping.
//!
//! [`Renderer`] is an explicit context object: it owns the framebuffer and
//! the rasterization policies, and callers pass meshes, camera, and
//! projection into [`Renderer::draw_mesh`] per draw call. Rendering is fully
//! synchronous; each triangle runs the whole
//! transform -> visibility -> rasterize -> composite pipeline to completion
//! before the next one begins.

use log::{debug, trace};

use super::compositor::composite_pixel;
use super::framebuffer::FrameBuffer;
use super::rasterizer::{rasterize, FillRule};
use super::{ScreenTriangle, ScreenVertex};
use crate::camera::Camera;
use crate::clipper;
use crate::error::RenderError;
use crate::math::mat4::Mat4;
use crate::math::vec2::Vec2;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;
use crate::projection::Projection;

/// Which image row NDC y = +1 maps to.
///
/// NDC has y growing upward. Image formats (and this crate's framebuffer)
/// store row 0 first, so mapping to a top-left origin needs a vertical flip;
/// `BottomLeft` keeps NDC orientation and leaves row 0 at the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScreenOrigin {
    /// Row 0 is the top image row; NDC y is flipped. The default, matching
    /// the `image` crate's row convention.
    #[default]
    TopLeft,
    /// Row 0 is the bottom row; NDC y maps through unflipped.
    BottomLeft,
}

/// Maps normalized device coordinates to integer pixel coordinates.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub origin: ScreenOrigin,
}

impl Viewport {
    pub fn new(width: u32, height: u32, origin: ScreenOrigin) -> Self {
        Self {
            width,
            height,
            origin,
        }
    }

    /// `[-1, 1]` NDC to pixel coordinates: `floor((ndc + 1) * 0.5 * dim)`,
    /// with the y axis flipped for a top-left origin.
    pub fn to_screen(&self, ndc: Vec3) -> Vec2 {
        let x = ((ndc.x + 1.0) * 0.5 * self.width as f32).floor();
        let y = match self.origin {
            ScreenOrigin::TopLeft => ((1.0 - ndc.y) * 0.5 * self.height as f32).floor(),
            ScreenOrigin::BottomLeft => ((ndc.y + 1.0) * 0.5 * self.height as f32).floor(),
        };
        Vec2::new(x, y)
    }
}

/// Per-draw-call triangle accounting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Triangles taken from the index buffer.
    pub triangles: usize,
    /// Triangles that reached the rasterizer.
    pub drawn: usize,
    /// Triangles rejected by the clip-space visibility test.
    pub rejected: usize,
    /// Triangles with zero screen-space area.
    pub degenerate: usize,
    /// Triangles suppressed because a vertex normal could not be normalized.
    pub degenerate_normals: usize,
}

/// Software rendering context: framebuffer plus rasterization policies.
pub struct Renderer {
    framebuffer: FrameBuffer,
    fill_rule: FillRule,
    origin: ScreenOrigin,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            framebuffer: FrameBuffer::new(width, height),
            fill_rule: FillRule::default(),
            origin: ScreenOrigin::default(),
        }
    }

    pub fn set_fill_rule(&mut self, fill_rule: FillRule) {
        self.fill_rule = fill_rule;
    }

    pub fn fill_rule(&self) -> FillRule {
        self.fill_rule
    }

    pub fn set_screen_origin(&mut self, origin: ScreenOrigin) {
        self.origin = origin;
    }

    pub fn screen_origin(&self) -> ScreenOrigin {
        self.origin
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(
            self.framebuffer.width(),
            self.framebuffer.height(),
            self.origin,
        )
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.framebuffer
    }

    /// Hand the finished framebuffer back to the caller.
    pub fn into_framebuffer(self) -> FrameBuffer {
        self.framebuffer
    }

    /// Reset color and depth for a new frame.
    pub fn clear(&mut self, color: u32) {
        self.framebuffer.clear(color);
        self.framebuffer.clear_depth();
    }

    /// Rasterizes and composites one screen-space triangle.
    ///
    /// Winding is normalized here, so callers may pass vertices in either
    /// order. Returns false for a zero-area triangle, which is skipped.
    pub fn draw_triangle(&mut self, mut triangle: ScreenTriangle) -> bool {
        let Some(area2) = triangle.normalize_winding() else {
            return false;
        };
        let inv_area2 = 1.0 / area2;

        let points = triangle.positions();
        let width = self.framebuffer.width();
        let height = self.framebuffer.height();
        let framebuffer = &mut self.framebuffer;
        rasterize(&points, width, height, self.fill_rule, |x, y, weights| {
            composite_pixel(framebuffer, x, y, weights, inv_area2, &triangle);
        });
        true
    }

    /// Draws every triangle of a mesh.
    ///
    /// Triangles are processed in index order; the depth test makes the
    /// final framebuffer independent of that order for opaque geometry.
    /// Vertex colors are derived from the mesh normals
    /// (`|normalize(n)| * 255` per channel). An out-of-range index aborts
    /// the render; all other failures skip the affected triangle and are
    /// reported through [`RenderStats`].
    pub fn draw_mesh(
        &mut self,
        mesh: &Mesh,
        model: &Mat4,
        camera: &Camera,
        projection: &Projection,
    ) -> Result<RenderStats, RenderError> {
        let model_view = camera.view_matrix() * *model;
        let clip_from_view = projection.matrix();
        let viewport = self.viewport();
        let mut stats = RenderStats::default();

        for tri in mesh.indices().chunks_exact(3) {
            stats.triangles += 1;
            let indices = [tri[0], tri[1], tri[2]];

            let mut clip = [Vec4::point(0.0, 0.0, 0.0); 3];
            for (slot, &index) in clip.iter_mut().zip(&indices) {
                *slot = clip_from_view * (model_view * mesh.position(index)?);
            }

            if clipper::reject_triangle(&clip) {
                stats.rejected += 1;
                continue;
            }

            let mut vertex_colors = [Vec3::ZERO; 3];
            let mut normals_ok = true;
            for (slot, &index) in vertex_colors.iter_mut().zip(&indices) {
                match mesh.normal(index)?.try_normalize() {
                    Ok(unit) => *slot = unit.abs() * 255.0,
                    Err(_) => {
                        normals_ok = false;
                        break;
                    }
                }
            }
            if !normals_ok {
                trace!("suppressing triangle {indices:?}: degenerate vertex normal");
                stats.degenerate_normals += 1;
                continue;
            }

            let vertices = std::array::from_fn(|i| {
                let screen = viewport.to_screen(clip[i].perspective_divide());
                ScreenVertex::new(screen, clip[i].w, vertex_colors[i])
            });

            if self.draw_triangle(ScreenTriangle::new(vertices)) {
                stats.drawn += 1;
            } else {
                stats.degenerate += 1;
            }
        }

        debug!(
            "mesh pass: {} triangles, {} drawn, {} rejected, {} degenerate, {} bad normals",
            stats.triangles, stats.drawn, stats.rejected, stats.degenerate, stats.degenerate_normals
        );
        Ok(stats)
    }
}
