use super::engine::{scan_triangle, RasterMode};
use crate::depth_buffer::DepthBuffer;
use crate::geometry::ScreenTriangle;

/// Rasterizes a screen-space occluder triangle, writing the conservative maximum depth into
/// every pixel of its (shrunk) footprint.
pub fn rasterize_occluder(tri: ScreenTriangle, clip_x: f32, clip_y: f32, depth: &mut DepthBuffer) {
    scan_triangle(tri, clip_x, clip_y, RasterMode::Occluder, |x, y, d| {
        depth.write_max(x, y, d);
        true
    });
}
