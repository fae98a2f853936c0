//! Packed ARGB color helpers.
//!
//! The color buffer stores one `u32` per pixel in ARGB order. Conversions
//! from float channels clamp into the valid range so that interpolation
//! overshoot (or NaN/Inf from a near-zero `1/w`) never reaches the buffer.

use crate::math::vec3::Vec3;

pub const BLACK: u32 = 0xFF00_0000;
pub const WHITE: u32 = 0xFFFF_FFFF;
pub const RED: u32 = 0xFFFF_0000;
pub const GREEN: u32 = 0xFF00_FF00;
pub const BLUE: u32 = 0xFF00_00FF;

/// Pack 8-bit channels into an opaque ARGB word.
#[inline]
pub const fn pack(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}

/// Unpack an ARGB word into (r, g, b) channels.
#[inline]
pub const fn unpack(color: u32) -> (u8, u8, u8) {
    (
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Pack a float color with channels in `[0, 255]` into ARGB, clamping each
/// channel. `as u8` saturates and maps NaN to 0, so no out-of-range or
/// non-finite value can leak into the buffer.
#[inline]
pub fn pack_clamped(c: Vec3) -> u32 {
    pack(
        c.x.clamp(0.0, 255.0) as u8,
        c.y.clamp(0.0, 255.0) as u8,
        c.z.clamp(0.0, 255.0) as u8,
    )
}
