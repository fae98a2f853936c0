//! Render pipeline error conditions.

use thiserror::Error;

/// Failures raised while processing a mesh through the pipeline.
///
/// Only [`RenderError::IndexOutOfRange`] aborts a render; a malformed mesh is
/// not recoverable locally. Degenerate geometry is handled per triangle by
/// the draw loop and never propagates out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// A mesh index referenced a vertex past the end of the position array.
    #[error("mesh index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: u32, len: usize },

    /// Attempted to normalize a zero-length vector.
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
}
