//! A CPU-based software triangle rendering pipeline.
//!
//! Meshes go through model/view transformation, perspective projection,
//! clip-space visibility testing, incremental edge-function rasterization,
//! and perspective-correct depth-tested compositing, all on the CPU. The
//! finished frame can be handed off as raw pixels or written to an image
//! file.
//!
//! # Quick Start
//!
//! ```ignore
//! use triforge::prelude::*;
//!
//! let mut renderer = Renderer::new(1024, 1024);
//! renderer.clear(colors::BLACK);
//! let stats = renderer.draw_mesh(&mesh, &Mat4::identity(), &camera, &projection)?;
//! renderer.framebuffer().save("frame.png")?;
//! ```

// Public API - exposed to library consumers
pub mod camera;
pub mod colors;
pub mod error;
pub mod math;
pub mod mesh;
pub mod model;
pub mod projection;
pub mod render;

// Internal modules - used within the crate only
pub(crate) mod clipper;

// Re-export commonly needed types at crate root for convenience
pub use camera::Camera;
pub use error::RenderError;
pub use mesh::Mesh;
pub use model::{LoadError, Model};
pub use projection::Projection;
pub use render::{FillRule, FrameBuffer, RenderStats, Renderer, ScreenOrigin};

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use triforge::prelude::*;
/// ```
pub mod prelude {
    // Camera & projection
    pub use crate::camera::Camera;
    pub use crate::projection::Projection;

    // Geometry
    pub use crate::mesh::Mesh;
    pub use crate::model::Model;

    // Math
    pub use crate::math::mat4::Mat4;
    pub use crate::math::quat::Quat;
    pub use crate::math::vec2::Vec2;
    pub use crate::math::vec3::Vec3;
    pub use crate::math::vec4::Vec4;

    // Rendering
    pub use crate::colors;
    pub use crate::error::RenderError;
    pub use crate::render::{
        FillRule, FrameBuffer, RenderStats, Renderer, ScreenOrigin, ScreenTriangle, ScreenVertex,
    };
}
