use super::engine::{scan_triangle, RasterMode};
use crate::depth_buffer::DepthBuffer;
use crate::geometry::ScreenTriangle;

/// Tests whether every pixel in `tri`'s (grown) footprint is occluded by `depth`, i.e. the
/// probe's conservative minimum depth at each pixel is no greater than the stored depth there.
///
/// A triangle that contributes no pixels at all (fully off the right/bottom of the viewport, or
/// degenerate) is reported as occluded — callers aggregating several triangles per candidate
/// should treat "no triangles survived clipping" as not-occluded rather than rely on this
/// vacuous truth.
pub fn probe_occluded(tri: ScreenTriangle, clip_x: f32, clip_y: f32, depth: &DepthBuffer) -> bool {
    let mut occluded = true;
    scan_triangle(tri, clip_x, clip_y, RasterMode::Probe, |x, y, d| {
        if d > depth.get(x, y) {
            occluded = false;
            false
        } else {
            true
        }
    });
    occluded
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::ScreenVertex;
    use crate::raster::rasterize_occluder;

    fn full_screen_triangles(w: f32) -> (ScreenTriangle, ScreenTriangle) {
        (
            ScreenTriangle::new(
                ScreenVertex::new(0.0, 0.0, w),
                ScreenVertex::new(8.0, 0.0, w),
                ScreenVertex::new(0.0, 8.0, w),
            ),
            ScreenTriangle::new(
                ScreenVertex::new(8.0, 0.0, w),
                ScreenVertex::new(8.0, 8.0, w),
                ScreenVertex::new(0.0, 8.0, w),
            ),
        )
    }

    #[test]
    fn candidate_behind_occluder_is_occluded() {
        let mut depth = DepthBuffer::new(8, 8);
        let (t0, t1) = full_screen_triangles(2.0); // occluder depth 0.5
        rasterize_occluder(t0, 7.0, 7.0, &mut depth);
        rasterize_occluder(t1, 7.0, 7.0, &mut depth);

        let (c0, c1) = full_screen_triangles(5.0); // candidate depth 0.2, farther away
        assert!(probe_occluded(c0, 7.0, 7.0, &depth));
        assert!(probe_occluded(c1, 7.0, 7.0, &depth));
    }

    #[test]
    fn candidate_in_front_of_occluder_is_not_occluded() {
        let mut depth = DepthBuffer::new(8, 8);
        let (t0, t1) = full_screen_triangles(2.0); // occluder depth 0.5
        rasterize_occluder(t0, 7.0, 7.0, &mut depth);
        rasterize_occluder(t1, 7.0, 7.0, &mut depth);

        let (c0, c1) = full_screen_triangles(1.5); // candidate depth 0.667, closer
        assert!(!probe_occluded(c0, 7.0, 7.0, &depth) || !probe_occluded(c1, 7.0, 7.0, &depth));
    }

    #[test]
    fn empty_depth_buffer_never_occludes() {
        let depth = DepthBuffer::new(8, 8);
        let (c0, _c1) = full_screen_triangles(2.0);
        assert!(!probe_occluded(c0, 7.0, 7.0, &depth));
    }
}
