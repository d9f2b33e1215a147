use super::*;
use crate::math::*;

/// Triangle mesh: every three consecutive indices form one triangle.
///
/// Positions and normals are parallel; a corner that had no normal carries the zero vector.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,
}

impl Mesh {
    pub fn new(positions: Vec<Vec3>, normals: Vec<Vec3>, indices: Vec<u32>) -> Result<Self, MeshError> {
        if positions.len() != normals.len() {
            return Err(MeshError::AttributeLengthMismatch { positions: positions.len(), normals: normals.len() });
        }
        if indices.len() % 3 != 0 {
            return Err(MeshError::IndexCountNotMultipleOfThree(indices.len()));
        }
        if let Some((position, &index)) = indices.iter().enumerate().find(|&(_, &i)| i as usize >= positions.len()) {
            return Err(MeshError::IndexOutOfRange { position, index, vertex_count: positions.len() });
        }
        Ok(Self { positions, normals, indices })
    }

    /// Builds a non-indexed mesh: indices are simply `0..positions.len()`.
    pub fn from_triangle_list(positions: Vec<Vec3>, normals: Vec<Vec3>) -> Result<Self, MeshError> {
        let indices = (0..positions.len() as u32).collect();
        Self::new(positions, normals, indices)
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn normals(&self) -> &[Vec3] {
        &self.normals
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Vec<Vec3> {
        vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0)]
    }

    #[test]
    fn test_triangle_list() {
        let mesh = Mesh::from_triangle_list(triangle(), vec![Vec3::new(0.0, 0.0, 1.0); 3]).unwrap();
        assert_eq!(mesh.indices(), &[0, 1, 2]);
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(mesh.index_count(), 3);
        assert_eq!(mesh.triangle_count(), 1);
    }

    #[test]
    fn test_rejects_partial_triangle() {
        let result = Mesh::new(triangle(), vec![Vec3::zero(); 3], vec![0, 1]);
        assert_eq!(result, Err(MeshError::IndexCountNotMultipleOfThree(2)));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let result = Mesh::new(triangle(), vec![Vec3::zero(); 3], vec![0, 1, 3]);
        assert_eq!(result, Err(MeshError::IndexOutOfRange { position: 2, index: 3, vertex_count: 3 }));
    }

    #[test]
    fn test_rejects_missing_normals() {
        let result = Mesh::new(triangle(), vec![Vec3::zero(); 2], vec![0, 1, 2]);
        assert_eq!(result, Err(MeshError::AttributeLengthMismatch { positions: 3, normals: 2 }));
    }
}
