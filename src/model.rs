//! OBJ model loading.
//!
//! A [`Model`] is a collection of [`Mesh`] instances loaded from a single OBJ
//! file via `tobj`. Loading is a collaborator concern: the render core only
//! consumes the resulting position/normal/index arrays.

use std::path::Path;

use thiserror::Error;

use crate::math::vec3::Vec3;
use crate::math::vec4::Vec4;
use crate::mesh::Mesh;

/// Failures while turning an OBJ file into renderable meshes.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to load OBJ file: {0}")]
    Obj(#[from] tobj::LoadError),

    #[error("mesh '{name}' has a position array whose length is not a multiple of 3")]
    MalformedPositions { name: String },
}

/// A named collection of meshes from one OBJ file.
pub struct Model {
    name: String,
    meshes: Vec<Mesh>,
}

impl Model {
    /// Load a model from an OBJ file.
    ///
    /// Faces are triangulated and re-indexed to a single index per vertex.
    /// When the file carries no normals, per-vertex normals are synthesized
    /// by accumulating area-weighted face normals.
    pub fn from_obj<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let name = path
            .as_ref()
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "model".to_string());

        let options = tobj::LoadOptions {
            triangulate: true,
            single_index: true,
            ..Default::default()
        };
        let (models, _materials) = tobj::load_obj(path.as_ref(), &options)?;

        let mut meshes = Vec::with_capacity(models.len());
        for model in models {
            let m = model.mesh;
            if m.positions.len() % 3 != 0 {
                return Err(LoadError::MalformedPositions { name: model.name });
            }

            let positions: Vec<Vec4> = m
                .positions
                .chunks_exact(3)
                .map(|p| Vec4::point(p[0], p[1], p[2]))
                .collect();

            let normals = if m.normals.len() == m.positions.len() {
                m.normals
                    .chunks_exact(3)
                    .map(|n| Vec3::new(n[0], n[1], n[2]))
                    .collect()
            } else {
                synthesize_normals(&positions, &m.indices)
            };

            meshes.push(Mesh::new(positions, normals, m.indices));
        }

        Ok(Self { name, meshes })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn meshes(&self) -> &[Mesh] {
        &self.meshes
    }

    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }
}

/// Per-vertex normals from area-weighted face normals.
///
/// The unnormalized cross product of two triangle edges is proportional to
/// the triangle's area, so summing raw cross products weights large faces
/// more. Vertices referenced by no triangle keep a zero normal; the draw
/// loop suppresses triangles with degenerate normals.
fn synthesize_normals(positions: &[Vec4], indices: &[u32]) -> Vec<Vec3> {
    let mut normals = vec![Vec3::ZERO; positions.len()];

    for tri in indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        if i0 >= positions.len() || i1 >= positions.len() || i2 >= positions.len() {
            continue; // validate() reports these later
        }

        let p0 = positions[i0].to_vec3();
        let p1 = positions[i1].to_vec3();
        let p2 = positions[i2].to_vec3();
        let face_normal = (p1 - p0).cross(p2 - p0);

        normals[i0] = normals[i0] + face_normal;
        normals[i1] = normals[i1] + face_normal;
        normals[i2] = normals[i2] + face_normal;
    }

    for n in &mut normals {
        if let Ok(unit) = n.try_normalize() {
            *n = unit;
        }
    }

    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn synthesized_normals_point_away_from_a_ccw_face() {
        let positions = vec![
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
        ];
        let normals = synthesize_normals(&positions, &[0, 1, 2]);

        for n in normals {
            assert_eq!(n, Vec3::Z);
        }
    }

    #[test]
    fn unreferenced_vertices_keep_zero_normals() {
        let positions = vec![
            Vec4::point(0.0, 0.0, 0.0),
            Vec4::point(1.0, 0.0, 0.0),
            Vec4::point(0.0, 1.0, 0.0),
            Vec4::point(9.0, 9.0, 9.0),
        ];
        let normals = synthesize_normals(&positions, &[0, 1, 2]);
        assert_eq!(normals[3], Vec3::ZERO);
    }
}
