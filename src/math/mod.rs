//! Fixed-size vector, matrix, and quaternion algebra.
//!
//! All types are plain `f32` structs with public fields. Nothing here carries
//! state; every operation returns a new value.

pub mod mat4;
pub mod quat;
pub mod vec2;
pub mod vec3;
pub mod vec4;
