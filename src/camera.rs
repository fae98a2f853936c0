//! Camera pose and view transform.
//!
//! # Coordinate System
//!
//! Right-handed, camera looking down **negative Z** in view space:
//! - X: positive right
//! - Y: positive up
//! - Z: positive toward the viewer
//!
//! The view matrix is the inverse of the camera's world transform: the
//! transpose of its rotation matrix, with the rotated camera position negated
//! and baked into the last column.

use crate::math::mat4::Mat4;
use crate::math::quat::Quat;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// Camera pose: position plus quaternion orientation. Immutable per draw
/// call; mutate between frames, not mid-render.
#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec3,
    pub orientation: Quat,
}

impl Camera {
    pub fn new(position: Vec3, orientation: Quat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Camera at `(0, 0, z)` with identity orientation, looking down -Z.
    pub fn towards_neg_z(z: f32) -> Self {
        Self::new(Vec3::new(0.0, 0.0, z), Quat::IDENTITY)
    }

    /// Builds the world-to-view matrix.
    ///
    /// The rotation part is the transpose (inverse) of the orientation's
    /// rotation matrix; the translation column moves the camera position to
    /// the origin.
    pub fn view_matrix(&self) -> Mat4 {
        let mut view = self.orientation.to_matrix().transpose();
        let t = view * Vec4::from_vec3(self.position, 1.0);
        view.set(0, 3, -t.x);
        view.set(1, 3, -t.y);
        view.set(2, 3, -t.z);
        view.set(3, 3, 1.0);
        view
    }
}
