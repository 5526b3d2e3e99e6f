use log::{debug, trace};

use crate::bounds::{self, Bounds};
use crate::camera::CameraContext;
use crate::candidate::{Candidate, CullMode};
use crate::clip::clip_and_cull_near;
use crate::depth_buffer::DepthBuffer;
use crate::error::Error;
use crate::geometry::CameraTriangle;
use crate::occluder::Occluder;
use crate::project::project_triangle;
use crate::raster::{probe_occluded, rasterize_occluder};

/// Orchestrates the whole pipeline: `render` rasterizes occluders into a w-buffer,
/// `cull` probes candidate bounds against that buffer.
///
/// A single instance owns its depth buffer; results of one `render` call are queried by any
/// number of subsequent `cull` calls until the next `render` clears and repopulates it.
pub struct Renderer {
    ctx: CameraContext,
    depth: DepthBuffer,
}

impl Renderer {
    pub fn new(ctx: CameraContext) -> Self {
        let mut depth = DepthBuffer::new(ctx.width(), ctx.height());
        // I1: depth values are 1/w for w >= near, so 1/near is the largest value that isn't a
        // numeric warning. A small relative tolerance absorbs extrapolation slop at pixel edges.
        depth.set_max_valid_depth((1.0 / ctx.near()) * 1.0000001);
        Renderer { ctx, depth }
    }

    pub fn context(&self) -> &CameraContext {
        &self.ctx
    }

    /// The w-buffer from the most recent `render` call, row-major, `y * width + x`.
    pub fn depth(&self) -> &[f32] {
        self.depth.as_slice()
    }

    /// Clears the depth buffer, then rasterizes every occluder triangle (C3 -> C4 -> C5). An
    /// empty occluder list is a no-op beyond the clear.
    pub fn render(&mut self, occluders: &[Occluder]) -> Result<(), Error> {
        self.depth.clear();
        if occluders.is_empty() {
            trace!("render: empty occluder list, depth buffer left clear");
            return Ok(());
        }

        let mut triangle_count = 0usize;
        for occluder in occluders {
            let view_model = self.ctx.view_matrix() * occluder.model_to_world();
            for verts in occluder.triangles() {
                let cam_tri = CameraTriangle::new(
                    (view_model * verts[0].extend(1.0)).truncate(),
                    (view_model * verts[1].extend(1.0)).truncate(),
                    (view_model * verts[2].extend(1.0)).truncate(),
                );
                for clipped in clip_and_cull_near(cam_tri, self.ctx.near()) {
                    let screen = project_triangle(&self.ctx, clipped);
                    rasterize_occluder(screen, self.ctx.clip_x(), self.ctx.clip_y(), &mut self.depth);
                    triangle_count += 1;
                }
            }
        }
        debug!(
            "render: {} occluders, {} triangles rasterized after clipping",
            occluders.len(),
            triangle_count
        );
        Ok(())
    }

    /// Probes every candidate's bound against the depth buffer from the last `render` call
    /// (C7 -> C3/C4 -> C6), returning a per-candidate visibility flag in input order.
    ///
    /// An empty candidate list returns an empty vector. `CullMode::Never` candidates are always
    /// reported visible without being probed.
    pub fn cull(&self, candidates: &[Candidate]) -> Vec<bool> {
        if candidates.is_empty() {
            trace!("cull: empty candidate list");
            return Vec::new();
        }
        candidates.iter().map(|c| self.is_visible(c)).collect()
    }

    fn is_visible(&self, candidate: &Candidate) -> bool {
        if candidate.cull_mode() == CullMode::Never {
            return true;
        }

        let view_model = self.ctx.view_matrix() * candidate.model_to_world();
        let near = self.ctx.near();
        let triangles = match candidate.bounds() {
            Bounds::Box { center, extents } => bounds::box_triangles(view_model, center, extents, near),
            Bounds::Sphere { center, radius } => bounds::sphere_triangles(view_model, center, radius, near),
        };

        let Some(triangles) = triangles else {
            trace!("cull: candidate bound intersects the near plane, reporting visible");
            return true;
        };

        let mut probed_any = false;
        for tri in triangles.iter() {
            for clipped in clip_and_cull_near(*tri, near) {
                probed_any = true;
                let screen = project_triangle(&self.ctx, clipped);
                if !probe_occluded(screen, self.ctx.clip_x(), self.ctx.clip_y(), &self.depth) {
                    return true;
                }
            }
        }

        if !probed_any {
            trace!("cull: candidate bound produced no on-screen triangles, reporting visible");
            return true;
        }
        false
    }
}
