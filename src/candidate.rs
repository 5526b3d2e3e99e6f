use crate::bounds::Bounds;
use crate::math::*;

/// Whether a candidate participates in occlusion culling at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CullMode {
    /// Run the normal bounding-volume probe.
    Test,
    /// Always report this candidate visible; `cull()` never probes its bound.
    Never,
}

/// A thing that might be hidden behind the scene's occluders: a placement, a cull-mode flag, and
/// the bound probed on its behalf.
pub struct Candidate {
    model_to_world: Mat4<ModelSpace, WorldSpace>,
    cull_mode: CullMode,
    bounds: Bounds,
}

impl Candidate {
    /// `model_to_world` is row-major, matching [`crate::math::mat4_from_row_major`]'s layout.
    pub fn new(model_to_world: [f32; 16], cull_mode: CullMode, bounds: Bounds) -> Self {
        Candidate {
            model_to_world: mat4_from_row_major(model_to_world),
            cull_mode,
            bounds,
        }
    }

    pub(crate) fn model_to_world(&self) -> Mat4<ModelSpace, WorldSpace> {
        self.model_to_world
    }

    pub fn cull_mode(&self) -> CullMode {
        self.cull_mode
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const IDENTITY: [f32; 16] = [
        1.0, 0.0, 0.0, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    ];

    #[test]
    fn accessors_round_trip_constructor_arguments() {
        let bounds = Bounds::Sphere { center: [0.0, 0.0, -5.0], radius: 1.0 };
        let candidate = Candidate::new(IDENTITY, CullMode::Never, bounds);
        assert_eq!(candidate.cull_mode(), CullMode::Never);
        match candidate.bounds() {
            Bounds::Sphere { center, radius } => {
                assert_eq!(center, [0.0, 0.0, -5.0]);
                assert_eq!(radius, 1.0);
            }
            _ => panic!("expected sphere bounds"),
        }
    }
}
