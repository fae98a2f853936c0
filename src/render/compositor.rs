//! Perspective-correct attribute interpolation and framebuffer writes.
//!
//! Linear interpolation in screen space is only affine-correct in clip
//! space; after the perspective divide, attributes must be interpolated as
//! `attr/w` together with `1/w` and divided back out per pixel. The
//! interpolated `1/w` doubles as the depth value: `1/w = 1/(-z_view)` grows
//! as geometry approaches the camera, so larger is nearer.

use super::framebuffer::FrameBuffer;
use super::ScreenTriangle;
use crate::colors;
use crate::math::vec3::Vec3;

/// Composites one covered pixel into the framebuffer.
///
/// `weights` are the raw edge-function values from the rasterizer and
/// `inv_area2` is the reciprocal of the triangle's doubled area; their
/// product is the barycentric coordinate of each vertex.
///
/// A near-zero interpolated `1/w` makes the attribute division blow up;
/// the channel clamp in [`colors::pack_clamped`] keeps any overshoot, Inf,
/// or NaN out of the color buffer. Best effort, not a correctness guarantee.
#[inline]
pub fn composite_pixel(
    framebuffer: &mut FrameBuffer,
    x: i32,
    y: i32,
    weights: [f32; 3],
    inv_area2: f32,
    triangle: &ScreenTriangle,
) {
    let [v0, v1, v2] = &triangle.vertices;
    let [l0, l1, l2] = [
        weights[0] * inv_area2,
        weights[1] * inv_area2,
        weights[2] * inv_area2,
    ];

    let w_inv = l0 * v0.w_inv + l1 * v1.w_inv + l2 * v2.w_inv;
    let color_over_w =
        v0.color_over_w * l0 + v1.color_over_w * l1 + v2.color_over_w * l2;
    let color: Vec3 = color_over_w / w_inv;

    framebuffer.set_pixel_with_depth(x, y, w_inv, colors::pack_clamped(color));
}
