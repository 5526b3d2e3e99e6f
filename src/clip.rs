use smallvec::SmallVec;

use crate::geometry::CameraTriangle;
use crate::math::*;

/// Back-face culls, then clips a camera-space triangle against the near plane.
///
/// Returns zero triangles (back-facing, or fully behind the near plane), one (unclipped, or the
/// 2-outside case), or two (the 2-inside / 1-outside case, triangulated as a quad).
pub fn clip_and_cull_near(tri: CameraTriangle, near: f32) -> SmallVec<[CameraTriangle; 2]> {
    let mut out = SmallVec::new();

    if tri.is_back_facing() {
        return out;
    }

    let near_z = -near;
    let inside = [
        tri.0[0].z() <= near_z,
        tri.0[1].z() <= near_z,
        tri.0[2].z() <= near_z,
    ];
    let inside_count = inside.iter().filter(|b| **b).count();

    match inside_count {
        0 => {}
        3 => out.push(tri),
        2 => {
            let o = inside.iter().position(|b| !*b).unwrap();
            let i0 = (o + 1) % 3;
            let i1 = (o + 2) % 3;
            let out0 = intersect_near(tri.0[o], tri.0[i0], near_z);
            let new1 = intersect_near(tri.0[o], tri.0[i1], near_z);
            out.push(CameraTriangle::new(out0, tri.0[i0], new1));
            out.push(CameraTriangle::new(new1, tri.0[i0], tri.0[i1]));
        }
        1 => {
            let i = inside.iter().position(|b| *b).unwrap();
            let o0 = (i + 1) % 3;
            let o1 = (i + 2) % 3;
            let p0 = intersect_near(tri.0[o0], tri.0[i], near_z);
            let p1 = intersect_near(tri.0[o1], tri.0[i], near_z);
            out.push(CameraTriangle::new(tri.0[i], p0, p1));
        }
        _ => unreachable!("inside_count is the count of 3 booleans"),
    }

    out
}

/// Intersection of the segment `origin -> target` with the near plane `z = near_z`, where
/// `origin` is outside (`z > near_z`) and `target` is inside (`z <= near_z`).
fn intersect_near(
    origin: Point3D<CameraSpace>,
    target: Point3D<CameraSpace>,
    near_z: f32,
) -> Point3D<CameraSpace> {
    let r = (origin.z() - near_z) / (origin.z() - target.z());
    origin + (target - origin) * r
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn ccw(v0: Point3D<CameraSpace>, v1: Point3D<CameraSpace>, v2: Point3D<CameraSpace>) -> CameraTriangle {
        CameraTriangle::new(v0, v1, v2)
    }

    #[test]
    fn fully_inside_triangle_passes_through_unchanged() {
        let tri = ccw(
            Point3D::new(-1.0, -1.0, -2.0),
            Point3D::new(1.0, -1.0, -2.0),
            Point3D::new(0.0, 1.0, -2.0),
        );
        let out = clip_and_cull_near(tri, 1.0);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn fully_outside_triangle_is_dropped() {
        let tri = ccw(
            Point3D::new(-1.0, -1.0, -0.5),
            Point3D::new(1.0, -1.0, -0.5),
            Point3D::new(0.0, 1.0, -0.5),
        );
        let out = clip_and_cull_near(tri, 1.0);
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn back_facing_triangle_is_dropped_before_clipping() {
        let tri = ccw(
            Point3D::new(-1.0, -1.0, -2.0),
            Point3D::new(0.0, 1.0, -2.0),
            Point3D::new(1.0, -1.0, -2.0),
        );
        let out = clip_and_cull_near(tri, 1.0);
        assert_eq!(out.len(), 0);
    }

    #[test]
    fn one_outside_vertex_produces_two_triangles_all_at_or_behind_near() {
        // v0 is behind the near plane (outside), v1/v2 are in front (inside).
        let tri = ccw(
            Point3D::new(0.0, 0.0, -0.5),
            Point3D::new(1.0, -1.0, -2.0),
            Point3D::new(-1.0, 1.0, -2.0),
        );
        let out = clip_and_cull_near(tri, 1.0);
        assert_eq!(out.len(), 2);
        for t in out.iter() {
            for v in t.0.iter() {
                assert!(v.z() <= -1.0 + 1e-5);
            }
        }
    }

    #[test]
    fn intersection_ratio_matches_expected_third() {
        // origin.z = -0.5, target.z = -2.0, near = 1.0 -> r = (-0.5 + 1) / (-0.5 - (-2)) = 1/3
        let origin = Point3D::<CameraSpace>::new(0.0, 0.0, -0.5);
        let target = Point3D::<CameraSpace>::new(3.0, 0.0, -2.0);
        let p = intersect_near(origin, target, -1.0);
        assert_abs_diff_eq!(p.x(), 1.0, epsilon = 1e-5);
        assert_abs_diff_eq!(p.z(), -1.0, epsilon = 1e-5);
    }

    #[test]
    fn two_outside_vertices_produce_one_triangle() {
        let tri = ccw(
            Point3D::new(0.0, 1.0, -2.0),
            Point3D::new(-1.0, -1.0, -0.5),
            Point3D::new(1.0, -1.0, -0.5),
        );
        let out = clip_and_cull_near(tri, 1.0);
        assert_eq!(out.len(), 1);
        for v in out[0].0.iter() {
            assert!(v.z() <= -1.0 + 1e-5);
        }
    }
}
