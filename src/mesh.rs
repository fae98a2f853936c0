//! Indexed triangle mesh data.

use crate::error::RenderError;
use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;

/// An indexed triangle mesh.
///
/// Positions are homogeneous with `w = 1` at input; normals are one per
/// vertex; indices come in triples, each forming one triangle. The mesh is
/// read-only input to the renderer - the draw loop never mutates it.
#[derive(Debug, Clone, Default)]
pub struct Mesh {
    positions: Vec<Vec4>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec4>, normals: Vec<Vec3>, indices: Vec<u32>) -> Self {
        Self {
            positions,
            normals,
            indices,
        }
    }

    pub fn positions(&self) -> &[Vec4] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Checks the index-range invariant: every index must reference a vertex
    /// that exists. The draw loop also checks per lookup, but validating up
    /// front lets callers reject a malformed mesh before rendering anything.
    pub fn validate(&self) -> Result<(), RenderError> {
        let len = self.positions.len();
        for &index in &self.indices {
            if index as usize >= len {
                return Err(RenderError::IndexOutOfRange { index, len });
            }
        }
        Ok(())
    }

    /// Position lookup with the index-range check applied.
    pub fn position(&self, index: u32) -> Result<Vec4, RenderError> {
        self.positions
            .get(index as usize)
            .copied()
            .ok_or(RenderError::IndexOutOfRange {
                index,
                len: self.positions.len(),
            })
    }

    /// Normal lookup with the index-range check applied.
    pub fn normal(&self, index: u32) -> Result<Vec3, RenderError> {
        self.normals
            .get(index as usize)
            .copied()
            .ok_or(RenderError::IndexOutOfRange {
                index,
                len: self.normals.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_triangle() -> Mesh {
        Mesh::new(
            vec![
                Vec4::point(30.0, 0.0, -50.0),
                Vec4::point(300.0, 100.0, -60.0),
                Vec4::point(-40.0, 50.0, -20.0),
            ],
            vec![
                Vec3::new(0.5, 0.2, 0.0),
                Vec3::new(0.8, 0.0, 0.5),
                Vec3::new(0.0, 0.8, 0.5),
            ],
            vec![0, 1, 2],
        )
    }

    #[test]
    fn valid_mesh_passes_validation() {
        let mesh = single_triangle();
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn out_of_range_index_is_reported() {
        let mesh = Mesh::new(vec![Vec4::point(0.0, 0.0, 0.0)], vec![Vec3::Z], vec![0, 1, 0]);
        assert_eq!(
            mesh.validate(),
            Err(RenderError::IndexOutOfRange { index: 1, len: 1 })
        );
        assert!(mesh.position(1).is_err());
    }
}
