use crate::container::FixedVec;
use crate::geometry::CameraTriangle;
use crate::math::*;

/// Axis-aligned box, 6 faces x 2 triangles.
pub(crate) const MAX_BOX_TRIANGLES: usize = 12;
/// Wedge count used to approximate a bounding sphere's projected silhouette.
pub(crate) const SPHERE_SEGMENTS: usize = 16;

/// A candidate's bounding volume, authored in model space.
///
/// `extents` holds half-widths along each local axis (a box spans `center - extents` to
/// `center + extents`), matching the common "AABB half-size" convention.
#[derive(Copy, Clone, Debug)]
pub enum Bounds {
    Box { center: [f32; 3], extents: [f32; 3] },
    Sphere { center: [f32; 3], radius: f32 },
}

/// Transforms a box's 8 corners into camera space and emits the 12 triangles of its faces.
///
/// `view_model` is the combined model-to-camera matrix (`view * model_to_world`). Returns `None`
/// if any corner is not strictly behind the near plane: per 4.7, a bound that straddles (or lies
/// entirely outside) the near plane is reported "not occluded" by the caller rather than clipped,
/// since a box wrapped around the camera has no single well-formed screen footprint.
pub(crate) fn box_triangles(
    view_model: Mat4<ModelSpace, CameraSpace>,
    center: [f32; 3],
    extents: [f32; 3],
    near: f32,
) -> Option<FixedVec<CameraTriangle, MAX_BOX_TRIANGLES>> {
    let mut corners = [Point3D::<CameraSpace>::origin(); 8];
    for bx in 0..2 {
        for by in 0..2 {
            for bz in 0..2 {
                let sx = if bx == 0 { -1.0 } else { 1.0 };
                let sy = if by == 0 { -1.0 } else { 1.0 };
                let sz = if bz == 0 { -1.0 } else { 1.0 };
                let local = Point3D::<ModelSpace>::new(
                    center[0] + sx * extents[0],
                    center[1] + sy * extents[1],
                    center[2] + sz * extents[2],
                );
                corners[bx * 4 + by * 2 + bz] = (view_model * local.extend(1.0)).truncate();
            }
        }
    }

    let near_z = -near;
    if corners.iter().any(|c| c.z() > near_z) {
        return None;
    }

    // Each quad is listed CCW as seen from outside the box along its outward normal; back-face
    // culling in the clipper keeps only the half actually facing the camera.
    const FACES: [[usize; 4]; 6] = [
        [4, 6, 7, 5], // +X
        [0, 1, 3, 2], // -X
        [2, 3, 7, 6], // +Y
        [0, 4, 5, 1], // -Y
        [1, 5, 7, 3], // +Z
        [0, 2, 6, 4], // -Z
    ];

    let mut out = FixedVec::new();
    for quad in FACES.iter() {
        out.push(CameraTriangle::new(corners[quad[0]], corners[quad[1]], corners[quad[2]]));
        out.push(CameraTriangle::new(corners[quad[0]], corners[quad[2]], corners[quad[3]]));
    }
    Some(out)
}

/// Transforms a sphere into camera space and emits a fan of triangles over a polygonal
/// approximation of its silhouette disk.
///
/// The scale applied to `radius` is read from the length of `view_model`'s first model-space
/// basis column, i.e. a uniform scale is assumed (non-uniform scaling of a sphere bound is not
/// representable as a sphere regardless). All silhouette vertices are placed at the camera-space
/// depth of the sphere's nearest point, the conservative choice for an occludee probe: if even
/// the closest point of the bound is found occluded, the whole sphere is.
///
/// Returns `None` under the same near-plane conditions as [`box_triangles`].
pub(crate) fn sphere_triangles(
    view_model: Mat4<ModelSpace, CameraSpace>,
    center: [f32; 3],
    radius: f32,
    near: f32,
) -> Option<FixedVec<CameraTriangle, SPHERE_SEGMENTS>> {
    let center = Point3D::<ModelSpace>::new(center[0], center[1], center[2]);
    let cam_center = (view_model * center.extend(1.0)).truncate();
    let scale_basis = view_model.transpose().row(0).truncate();
    let scale = scale_basis.len();
    let cam_radius = radius * scale;

    let near_z = -near;
    let nearest_z = cam_center.z() + cam_radius;
    if nearest_z > near_z {
        return None;
    }

    let mut rim = [Point3D::<CameraSpace>::origin(); SPHERE_SEGMENTS];
    for (k, slot) in rim.iter_mut().enumerate() {
        let theta = std::f32::consts::TAU * (k as f32) / (SPHERE_SEGMENTS as f32);
        *slot = Point3D::new(
            cam_center.x() + cam_radius * theta.cos(),
            cam_center.y() + cam_radius * theta.sin(),
            nearest_z,
        );
    }
    let apex = Point3D::new(cam_center.x(), cam_center.y(), nearest_z);

    let mut out = FixedVec::new();
    for k in 0..SPHERE_SEGMENTS {
        let next = (k + 1) % SPHERE_SEGMENTS;
        out.push(CameraTriangle::new(apex, rim[k], rim[next]));
    }
    Some(out)
}
