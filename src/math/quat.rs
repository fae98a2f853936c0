//! Quaternion orientation algebra.
//!
//! Quaternions are stored as `(x, y, z, w)` with `w` the scalar part. A unit
//! norm is required for valid rotation semantics but is not enforced here;
//! callers normalize explicitly after composing rotations.

use std::ops::Mul;

use super::mat4::Mat4;
use super::vec3::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Builds a unit quaternion rotating by `angle` radians around `axis`.
    /// The axis must already be normalized.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let s = half.sin();
        Self::new(axis.x * s, axis.y * s, axis.z * s, half.cos())
    }

    /// The vector (imaginary) part.
    pub fn vector_part(&self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Returns the normalized quaternion. Call after composing rotations to
    /// keep the unit-norm invariant from drifting.
    pub fn normalize(&self) -> Self {
        let len = self.length();
        Self::new(self.x / len, self.y / len, self.z / len, self.w / len)
    }

    /// Rotates `v` by this quaternion, which must be unit length.
    ///
    /// Uses the expanded sandwich product
    /// `v' = v + 2w(q_vec x v) + 2 q_vec x (q_vec x v)`,
    /// which avoids constructing intermediate quaternions. Must agree with
    /// [`Quat::to_matrix`] for every unit quaternion.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let q_vec = self.vector_part();
        let t = q_vec.cross(v);
        v + t * (2.0 * self.w) + q_vec.cross(t) * 2.0
    }

    /// Expands this unit quaternion into a rotation matrix.
    pub fn to_matrix(&self) -> Mat4 {
        let (x, y, z, w) = (self.x, self.y, self.z, self.w);
        let xs = x * x;
        let ys = y * y;
        let zs = z * z;
        Mat4::new([
            [
                1.0 - 2.0 * ys - 2.0 * zs,
                2.0 * x * y - 2.0 * w * z,
                2.0 * x * z + 2.0 * w * y,
                0.0,
            ],
            [
                2.0 * x * y + 2.0 * w * z,
                1.0 - 2.0 * xs - 2.0 * zs,
                2.0 * y * z - 2.0 * w * x,
                0.0,
            ],
            [
                2.0 * x * z - 2.0 * w * y,
                2.0 * y * z + 2.0 * w * x,
                1.0 - 2.0 * xs - 2.0 * ys,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }
}

/// Hamilton product. Non-commutative; `a * b` applies `b` first, then `a`.
impl Mul<Quat> for Quat {
    type Output = Quat;

    fn mul(self, rhs: Quat) -> Self::Output {
        Quat::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::vec4::Vec4;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    fn assert_vec3_eq(a: Vec3, b: Vec3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-5);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-5);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-5);
    }

    #[test]
    fn identity_rotation_is_a_no_op() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_vec3_eq(Quat::IDENTITY.rotate(v), v);
    }

    #[test]
    fn quarter_turn_around_z_maps_x_to_y() {
        let q = Quat::from_axis_angle(Vec3::Z, FRAC_PI_2);
        assert_vec3_eq(q.rotate(Vec3::X), Vec3::Y);
    }

    #[test]
    fn rotate_agrees_with_matrix_form() {
        // The expanded sandwich product and the matrix expansion must be two
        // views of the same rotation.
        let axes = [
            Vec3::X,
            Vec3::Y,
            Vec3::Z,
            Vec3::new(1.0, 1.0, 1.0).normalize(),
            Vec3::new(-0.3, 0.8, 0.1).normalize(),
        ];
        let angles = [0.0, FRAC_PI_4, FRAC_PI_3, FRAC_PI_2, 2.5, -1.2];
        let v = Vec3::new(0.7, -1.3, 2.1);

        for axis in axes {
            for angle in angles {
                let q = Quat::from_axis_angle(axis, angle);
                let by_formula = q.rotate(v);
                let by_matrix = (q.to_matrix() * Vec4::from_vec3(v, 1.0)).to_vec3();
                assert_vec3_eq(by_formula, by_matrix);
            }
        }
    }

    #[test]
    fn composition_applies_right_factor_first() {
        let yaw = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let pitch = Quat::from_axis_angle(Vec3::X, FRAC_PI_2);
        let combined = (pitch * yaw).normalize();

        let v = Vec3::Z;
        assert_vec3_eq(combined.rotate(v), pitch.rotate(yaw.rotate(v)));
    }

    #[test]
    fn rotation_preserves_length() {
        let q = Quat::from_axis_angle(Vec3::new(0.5, 0.5, 0.70710678).normalize(), 1.8);
        let v = Vec3::new(3.0, -4.0, 12.0);
        assert_relative_eq!(q.rotate(v).length(), v.length(), epsilon = 1e-4);
    }
}
