use crate::error::ShapeError;
use crate::math::*;

/// Occluder geometry: a flat position buffer and a triangle-list index buffer, authored in model
/// space and placed into the scene by a row-major model-to-world matrix. Indices are validated
/// once, at construction, rather than trusted the way the teacher's `Mesh` trusts its
/// `indices: Vec<usize>`.
pub struct Occluder {
    positions: Vec<Point3D<ModelSpace>>,
    indices: Vec<u32>,
    model_to_world: Mat4<ModelSpace, WorldSpace>,
}

impl Occluder {
    /// `positions` is a flat buffer of xyz triples; a trailing partial triple is ignored.
    /// `model_to_world` is row-major, matching [`crate::math::mat4_from_row_major`]'s layout.
    pub fn new(positions: &[f32], indices: Vec<u32>, model_to_world: [f32; 16]) -> Result<Self, ShapeError> {
        if indices.len() % 3 != 0 {
            return Err(ShapeError::IndexCountNotMultipleOfThree(indices.len()));
        }

        let positions: Vec<Point3D<ModelSpace>> = positions
            .chunks_exact(3)
            .map(|p| Point3D::new(p[0], p[1], p[2]))
            .collect();

        let vertex_count = positions.len();
        if let Some(&index) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            return Err(ShapeError::IndexOutOfRange { index, vertex_count });
        }

        Ok(Occluder {
            positions,
            indices,
            model_to_world: mat4_from_row_major(model_to_world),
        })
    }

    pub(crate) fn model_to_world(&self) -> Mat4<ModelSpace, WorldSpace> {
        self.model_to_world
    }

    /// The occluder's triangles as index-resolved vertex triples, in submission order.
    pub(crate) fn triangles(&self) -> impl Iterator<Item = [Point3D<ModelSpace>; 3]> + '_ {
        self.indices.chunks_exact(3).map(move |tri| {
            [
                self.positions[tri[0] as usize],
                self.positions[tri[1] as usize],
                self.positions[tri[2] as usize],
            ]
        })
    }
}

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> (Vec<f32>, Vec<u32>) {
        #[rustfmt::skip]
        let positions = vec![
            -1.0, -1.0, 0.0,
            1.0, -1.0, 0.0,
            1.0, 1.0, 0.0,
            -1.0, 1.0, 0.0,
        ];
        let indices = vec![0, 1, 2, 0, 2, 3];
        (positions, indices)
    }

    #[test]
    fn valid_buffers_construct_and_yield_two_triangles() {
        let (positions, indices) = quad();
        let occluder = Occluder::new(&positions, indices, IDENTITY).unwrap();
        assert_eq!(occluder.triangles().count(), 2);
    }

    #[test]
    fn index_count_not_multiple_of_three_is_rejected() {
        let (positions, _) = quad();
        let err = Occluder::new(&positions, vec![0, 1, 2, 3], IDENTITY).unwrap_err();
        assert_eq!(err, ShapeError::IndexCountNotMultipleOfThree(4));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let (positions, _) = quad();
        let err = Occluder::new(&positions, vec![0, 1, 9], IDENTITY).unwrap_err();
        assert_eq!(err, ShapeError::IndexOutOfRange { index: 9, vertex_count: 4 });
    }
}
