//! Clip-space visibility testing.
//!
//! Visibility is decided in homogeneous clip space, before the perspective
//! divide. A vertex is inside the frustum iff
//!
//! ```text
//! -w <= x <= w
//! -w <= y <= w
//! -w <= z <= w
//! ```
//!
//! hold simultaneously. The test is trivial accept/reject only: a triangle is
//! discarded whole as soon as any single vertex fails any axis. Triangles
//! straddling a frustum plane are dropped rather than split into
//! sub-polygons; true Sutherland-Hodgman clipping is a deliberate non-goal.

use crate::math::vec4::Vec4;

/// The 6 planes of the canonical clip volume.
///
/// Each plane is a linear inequality on (x, y, z, w); the signed distance is
/// positive inside the volume.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrustumPlane {
    /// Left plane: x >= -w
    Left,
    /// Right plane: x <= w
    Right,
    /// Bottom plane: y >= -w
    Bottom,
    /// Top plane: y <= w
    Top,
    /// Near plane: z >= -w
    Near,
    /// Far plane: z <= w
    Far,
}

impl FrustumPlane {
    pub const ALL: [FrustumPlane; 6] = [
        FrustumPlane::Left,
        FrustumPlane::Right,
        FrustumPlane::Bottom,
        FrustumPlane::Top,
        FrustumPlane::Near,
        FrustumPlane::Far,
    ];

    /// Signed distance from a clip-space position to this plane.
    /// Positive or zero = inside the clip volume.
    pub fn signed_distance(&self, p: Vec4) -> f32 {
        match self {
            Self::Left => p.w + p.x,
            Self::Right => p.w - p.x,
            Self::Bottom => p.w + p.y,
            Self::Top => p.w - p.y,
            Self::Near => p.w + p.z,
            Self::Far => p.w - p.z,
        }
    }
}

/// True iff the clip-space position satisfies all six plane inequalities.
pub fn vertex_inside(p: Vec4) -> bool {
    FrustumPlane::ALL
        .iter()
        .all(|plane| plane.signed_distance(p) >= 0.0)
}

/// Conservative whole-triangle reject: the triangle is discarded if any
/// vertex lies outside any plane, even when the rest of it would be visible.
pub fn reject_triangle(vertices: &[Vec4; 3]) -> bool {
    vertices.iter().any(|&v| !vertex_inside(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn triangle_fully_inside_is_kept() {
        let tri = [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.5, 0.5, 0.5, 1.0),
            Vec4::new(-0.5, -0.5, -0.5, 1.0),
        ];
        assert!(!reject_triangle(&tri));
    }

    #[test]
    fn triangle_fully_outside_right_plane_is_rejected() {
        // All three vertices have x > w.
        let tri = [
            Vec4::new(2.0, 0.0, 0.0, 1.0),
            Vec4::new(3.0, 0.5, 0.0, 1.0),
            Vec4::new(2.5, -0.5, 0.0, 1.0),
        ];
        assert!(reject_triangle(&tri));
    }

    #[test]
    fn one_straddling_vertex_rejects_the_whole_triangle() {
        // Two vertices inside, one past the far plane: the conservative
        // policy drops the triangle instead of clipping it.
        let tri = [
            Vec4::new(0.0, 0.0, 0.0, 1.0),
            Vec4::new(0.2, 0.1, 0.0, 1.0),
            Vec4::new(0.0, 0.0, 1.5, 1.0),
        ];
        assert!(reject_triangle(&tri));
    }

    #[test]
    fn boundary_vertex_is_inside() {
        // x == w sits exactly on the right plane and is kept.
        assert!(vertex_inside(Vec4::new(1.0, 0.0, 0.0, 1.0)));
        assert!(!vertex_inside(Vec4::new(1.0001, 0.0, 0.0, 1.0)));
    }

    #[test]
    fn negative_w_vertex_is_never_inside() {
        // Behind the camera, w < 0 flips every inequality.
        assert!(!vertex_inside(Vec4::new(0.0, 0.0, 0.0, -1.0)));
    }
}
