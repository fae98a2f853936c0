//! Perspective projection parameters.
//!
//! The [`Projection`] struct is the single source of truth for the frustum
//! parameters (horizontal FOV, aspect ratio, near/far planes) and generates
//! the clip transform from them.

use crate::math::mat4::Mat4;

/// Symmetric perspective frustum for a right-handed, looking-down-negative-Z
/// camera. The generated matrix writes `-z_view` into the clip `w` component,
/// so visible geometry always has `w > 0`.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Horizontal field of view in radians.
    fov_x: f32,
    /// Aspect ratio (width / height).
    aspect_ratio: f32,
    /// Near clipping plane distance.
    z_near: f32,
    /// Far clipping plane distance.
    z_far: f32,
}

impl Projection {
    /// Creates a new projection with the given parameters.
    ///
    /// # Arguments
    /// * `fov_x` - Horizontal field of view in radians
    /// * `aspect_ratio` - Width divided by height
    /// * `z_near` - Near clipping plane distance (must be > 0)
    /// * `z_far` - Far clipping plane distance (must be > z_near)
    pub fn new(fov_x: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self {
            fov_x,
            aspect_ratio,
            z_near,
            z_far,
        }
    }

    /// Creates a projection from degrees instead of radians.
    pub fn from_degrees(fov_x_degrees: f32, aspect_ratio: f32, z_near: f32, z_far: f32) -> Self {
        Self::new(fov_x_degrees.to_radians(), aspect_ratio, z_near, z_far)
    }

    /// Returns the horizontal field of view in radians.
    pub fn fov_x(&self) -> f32 {
        self.fov_x
    }

    /// Returns the aspect ratio (width / height).
    pub fn aspect_ratio(&self) -> f32 {
        self.aspect_ratio
    }

    /// Returns the near clipping plane distance.
    pub fn z_near(&self) -> f32 {
        self.z_near
    }

    /// Returns the far clipping plane distance.
    pub fn z_far(&self) -> f32 {
        self.z_far
    }

    /// Updates the aspect ratio (typically called on resize).
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Generates the view-to-clip matrix.
    ///
    /// With `e = 1 / tan(fov_x / 2)`:
    ///
    /// ```text
    /// | e   0      0     0  |
    /// | 0   e*a    0     0  |
    /// | 0   0      sz    qz |
    /// | 0   0     -1     0  |
    /// ```
    ///
    /// where `sz = (n+f)/(n-f)` and `qz = 2nf/(n-f)`. The last row copies
    /// `-z_view` into `w`, so the perspective divide scales by view depth.
    pub fn matrix(&self) -> Mat4 {
        let e = 1.0 / (self.fov_x / 2.0).tan();
        let sx = e;
        let sy = e * self.aspect_ratio;
        let sz = (self.z_near + self.z_far) / (self.z_near - self.z_far);
        let qz = 2.0 * self.z_near * self.z_far / (self.z_near - self.z_far);

        Mat4::new([
            [sx, 0.0, 0.0, 0.0],
            [0.0, sy, 0.0, 0.0],
            [0.0, 0.0, sz, qz],
            [0.0, 0.0, -1.0, 0.0],
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn clip_w_is_negated_view_depth() {
        let proj = Projection::new(FRAC_PI_2, 1.0, 0.1, 100.0);
        let clip = proj.matrix() * Vec4::point(0.0, 0.0, -5.0);
        assert_relative_eq!(clip.w, 5.0, epsilon = 1e-6);
    }

    #[test]
    fn near_plane_maps_to_minus_one_far_to_plus_one() {
        let (near, far) = (0.1, 100.0);
        let proj = Projection::new(FRAC_PI_2, 1.0, near, far);
        let m = proj.matrix();

        let at_near = (m * Vec4::point(0.0, 0.0, -near)).perspective_divide();
        let at_far = (m * Vec4::point(0.0, 0.0, -far)).perspective_divide();
        assert_relative_eq!(at_near.z, -1.0, epsilon = 1e-4);
        assert_relative_eq!(at_far.z, 1.0, epsilon = 1e-4);
    }

    #[test]
    fn point_on_fov_edge_lands_on_unit_x() {
        // With a 90 degree horizontal FOV, a point at x == -z sits exactly on
        // the right frustum edge and projects to x = 1 in NDC.
        let proj = Projection::new(FRAC_PI_2, 1.0, 0.1, 100.0);
        let ndc = (proj.matrix() * Vec4::point(3.0, 0.0, -3.0)).perspective_divide();
        assert_relative_eq!(ndc.x, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn from_degrees_converts_correctly() {
        let proj = Projection::from_degrees(90.0, 1.0, 0.1, 100.0);
        assert_relative_eq!(proj.fov_x(), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn aspect_ratio_scales_y() {
        let aspect = 800.0 / 600.0;
        let proj = Projection::new(FRAC_PI_2, aspect, 0.1, 100.0);
        let m = proj.matrix();
        assert_relative_eq!(m.get(1, 1), m.get(0, 0) * aspect, epsilon = 1e-6);
    }
}
