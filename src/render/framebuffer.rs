//! Owning color + depth framebuffer.
//!
//! The depth buffer stores `1/w` values (reciprocal of clip-space w). For a
//! camera looking down negative Z, `w = -z_view`, so `1/w` grows as geometry
//! approaches the camera: **larger is nearer**. The buffer is cleared to a
//! large negative sentinel so the first write at any pixel always wins.

use std::path::Path;

use crate::colors;

/// Depth-buffer clear value: far enough that any real `1/w` beats it.
pub const DEPTH_FAR: f32 = -65536.0;

/// Color (packed ARGB) and depth buffers of matching dimensions.
///
/// Owned by one render invocation at a time; both buffers are mutated in
/// place and never reallocated mid-render.
pub struct FrameBuffer {
    color_buffer: Vec<u32>,
    depth_buffer: Vec<f32>,
    width: u32,
    height: u32,
}

impl FrameBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let size = (width * height) as usize;
        Self {
            color_buffer: vec![colors::BLACK; size],
            depth_buffer: vec![DEPTH_FAR; size],
            width,
            height,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Fill the color buffer with one color.
    pub fn clear(&mut self, color: u32) {
        self.color_buffer.fill(color);
    }

    /// Reset every depth value to the far sentinel.
    pub fn clear_depth(&mut self) {
        self.depth_buffer.fill(DEPTH_FAR);
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32 {
            Some((y as u32 * self.width + x as u32) as usize)
        } else {
            None
        }
    }

    /// Set a pixel without depth testing (clears, overlays).
    /// Silently ignores out-of-bounds coordinates.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            self.color_buffer[idx] = color;
        }
    }

    /// Depth-tested pixel write.
    ///
    /// Writes color and depth only when `w_inv` is at least the stored depth
    /// (larger `1/w` = nearer). The `>=` comparison means a later triangle at
    /// exactly the same depth overwrites an earlier one.
    #[inline]
    pub fn set_pixel_with_depth(&mut self, x: i32, y: i32, w_inv: f32, color: u32) {
        if let Some(idx) = self.index(x, y) {
            if w_inv >= self.depth_buffer[idx] {
                self.depth_buffer[idx] = w_inv;
                self.color_buffer[idx] = color;
            }
        }
    }

    /// Get the color at (x, y), or None if out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<u32> {
        self.index(x, y).map(|idx| self.color_buffer[idx])
    }

    /// Get the depth value at (x, y), or None if out of bounds.
    #[inline]
    pub fn depth_at(&self, x: i32, y: i32) -> Option<f32> {
        self.index(x, y).map(|idx| self.depth_buffer[idx])
    }

    /// The raw color buffer, row-major from the top-left pixel.
    pub fn color_buffer(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Copy the color buffer into an RGBA image.
    pub fn to_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_fn(self.width, self.height, |x, y| {
            let (r, g, b) = colors::unpack(self.color_buffer[(y * self.width + x) as usize]);
            image::Rgba([r, g, b, 0xFF])
        })
    }

    /// Encode the color buffer to a file; the format follows the extension.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), image::ImageError> {
        self.to_image().save(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearer_write_replaces_farther_write() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel_with_depth(1, 1, 0.5, colors::RED);
        fb.set_pixel_with_depth(1, 1, 2.0, colors::GREEN);
        assert_eq!(fb.get_pixel(1, 1), Some(colors::GREEN));
        assert_eq!(fb.depth_at(1, 1), Some(2.0));
    }

    #[test]
    fn farther_write_is_occluded() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel_with_depth(2, 2, 2.0, colors::GREEN);
        fb.set_pixel_with_depth(2, 2, 0.5, colors::RED);
        assert_eq!(fb.get_pixel(2, 2), Some(colors::GREEN));
    }

    #[test]
    fn out_of_bounds_writes_are_ignored() {
        let mut fb = FrameBuffer::new(4, 4);
        fb.set_pixel_with_depth(-1, 0, 1.0, colors::RED);
        fb.set_pixel_with_depth(4, 4, 1.0, colors::RED);
        assert_eq!(fb.get_pixel(-1, 0), None);
        assert_eq!(fb.get_pixel(4, 4), None);
    }

    #[test]
    fn clear_resets_color_but_not_depth() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set_pixel_with_depth(0, 0, 1.0, colors::RED);
        fb.clear(colors::WHITE);
        assert_eq!(fb.get_pixel(0, 0), Some(colors::WHITE));
        assert_eq!(fb.depth_at(0, 0), Some(1.0));
        fb.clear_depth();
        assert_eq!(fb.depth_at(0, 0), Some(DEPTH_FAR));
    }
}
