//! CPU-side mesh storage: parallel per-vertex arrays plus triangle indices.

use corelib::CimString;

use crate::SceneError;

/// Triangle mesh with positions, optional normals/uvs (first channel only)
/// and indices, three per triangle. Attribute arrays are parallel: when
/// present, `normals` and `uvs` match `positions` element for element.
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub name: CimString,
    pub positions: Vec<[f32; 3]>,
    pub normals: Vec<[f32; 3]>,
    pub uvs: Vec<[f32; 2]>,
    pub indices: Vec<u32>,
    /// Index into the owning model's material list.
    pub material: Option<u32>,
}

impl Mesh {
    pub fn new(name: &str) -> Self {
        Self {
            name: CimString::from(name),
            ..Self::default()
        }
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Check structural invariants: non-empty geometry, parallel attribute
    /// arrays, whole triangles, indices in range.
    pub fn validate(&self) -> Result<(), SceneError> {
        if self.positions.is_empty() {
            return Err(self.invalid("has no vertices"));
        }
        if self.indices.is_empty() {
            return Err(self.invalid("has no triangles"));
        }
        if self.indices.len() % 3 != 0 {
            return Err(self.invalid("index count is not a multiple of 3"));
        }
        if !self.normals.is_empty() && self.normals.len() != self.positions.len() {
            return Err(self.invalid("normal count doesn't match vertex count"));
        }
        if !self.uvs.is_empty() && self.uvs.len() != self.positions.len() {
            return Err(self.invalid("uv count doesn't match vertex count"));
        }
        let limit = self.positions.len() as u32;
        if self.indices.iter().any(|&i| i >= limit) {
            return Err(self.invalid("index out of range"));
        }
        Ok(())
    }

    fn invalid(&self, reason: &str) -> SceneError {
        SceneError::InvalidMesh {
            name: self.name.as_str().to_owned(),
            reason: reason.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> Mesh {
        let mut mesh = Mesh::new("quad");
        mesh.positions = vec![
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 1.0, 0.0],
            [0.0, 1.0, 0.0],
        ];
        mesh.normals = vec![[0.0, 0.0, 1.0]; 4];
        mesh.uvs = vec![[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
        mesh.indices = vec![0, 1, 2, 0, 2, 3];
        mesh
    }

    #[test]
    fn valid_quad() {
        let mesh = quad();
        assert!(mesh.validate().is_ok());
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.triangle_count(), 2);
    }

    #[test]
    fn attributes_are_optional_but_parallel() {
        let mut mesh = quad();
        mesh.normals.clear();
        mesh.uvs.clear();
        assert!(mesh.validate().is_ok());

        mesh.normals = vec![[0.0, 0.0, 1.0]; 3];
        assert!(matches!(
            mesh.validate(),
            Err(SceneError::InvalidMesh { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_index() {
        let mut mesh = quad();
        mesh.indices[4] = 4;
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn rejects_partial_triangle() {
        let mut mesh = quad();
        mesh.indices.pop();
        assert!(mesh.validate().is_err());
    }

    #[test]
    fn rejects_empty_geometry() {
        assert!(Mesh::new("empty").validate().is_err());
    }
}
