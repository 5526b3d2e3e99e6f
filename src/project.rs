use crate::camera::CameraContext;
use crate::geometry::{CameraTriangle, ScreenTriangle, ScreenVertex};
use crate::math::*;

/// Applies the projection matrix, the homogeneous divide, and the NDC-to-pixel mapping to a
/// single camera-space vertex. `w` on the output carries the original camera-space distance —
/// the w-buffer depth (`1/w`) is derived later by [`crate::edge::Edge::invert_z`], not here.
pub fn project_vertex(ctx: &CameraContext, v: Point3D<CameraSpace>) -> ScreenVertex {
    let clip = ctx.projection_matrix() * v.extend(1.0);
    let w = clip.w();
    let ndc_x = clip.x() / w;
    let ndc_y = clip.y() / w;
    let pixel_x = (ndc_x + 1.0) * ctx.clip_x() / 2.0;
    let pixel_y = (ndc_y + 1.0) * ctx.clip_y() / 2.0;
    ScreenVertex::new(pixel_x, pixel_y, w)
}

/// Projects all three vertices of a (already near-clipped) camera-space triangle.
pub fn project_triangle(ctx: &CameraContext, tri: CameraTriangle) -> ScreenTriangle {
    ScreenTriangle::new(
        project_vertex(ctx, tri.0[0]),
        project_vertex(ctx, tri.0[1]),
        project_vertex(ctx, tri.0[2]),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use approx::assert_abs_diff_eq;

    #[test]
    fn point_on_view_axis_projects_to_screen_center() {
        let ctx = CameraContext::new(Camera::default(), 1.0, 100.0, std::f32::consts::FRAC_PI_2, 8, 8).unwrap();
        let v = Point3D::<CameraSpace>::new(0.0, 0.0, -2.0);
        let sv = project_vertex(&ctx, v);
        assert_abs_diff_eq!(sv.x, ctx.clip_x() / 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sv.y, ctx.clip_y() / 2.0, epsilon = 1e-4);
        assert_abs_diff_eq!(sv.w, 2.0, epsilon = 1e-4);
    }
}
