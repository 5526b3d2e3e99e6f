use crate::edge::Edge;
use crate::geometry::ScreenTriangle;

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) enum RasterMode {
    /// Footprint shrinks (ceil/floor), written depth is the conservative maximum.
    Occluder,
    /// Footprint grows (floor/ceil), probed depth is the conservative minimum.
    Probe,
}

/// Per-scanline interpolation state for one (long edge, short edge) half of a triangle.
struct ScanlineState {
    start_line: i32,
    stop_line: i32,
    long_x: f32,
    long_z: f32,
    short_x: f32,
    short_z: f32,
    long_x_inc: f32,
    long_z_inc: f32,
    short_x_inc: f32,
    short_z_inc: f32,
}

impl ScanlineState {
    fn build(long: &Edge, short: &Edge, clip_y: f32) -> Option<Self> {
        let short_extent = short.y_extent();
        let long_extent = long.y_extent();
        if short_extent <= 0.0 || long_extent <= 0.0 {
            return None;
        }

        let long_x_inc = (long.x1 - long.x0) / long_extent;
        let long_z_inc = (long.z1 - long.z0) / long_extent;
        let short_x_inc = (short.x1 - short.x0) / short_extent;
        let short_z_inc = (short.z1 - short.z0) / short_extent;

        let to_short_start = short.y0 - long.y0;
        let mut long_x = long.x0 + long_x_inc * to_short_start;
        let mut long_z = long.z0 + long_z_inc * to_short_start;
        let mut short_x = short.x0;
        let mut short_z = short.z0;

        let start_line = short.y0.max(0.0).ceil() as i32;
        let stop_line = short.y1.min(clip_y).floor() as i32;
        if start_line > stop_line {
            return None;
        }

        let skip = start_line as f32 - short.y0;
        long_x += long_x_inc * skip;
        long_z += long_z_inc * skip;
        short_x += short_x_inc * skip;
        short_z += short_z_inc * skip;

        Some(ScanlineState {
            start_line,
            stop_line,
            long_x,
            long_z,
            short_x,
            short_z,
            long_x_inc,
            long_z_inc,
            short_x_inc,
            short_z_inc,
        })
    }
}

/// Scans `tri` and calls `sink(x, y, depth)` for every pixel in its (shrunk or grown, per
/// `mode`) footprint. `sink` returning `false` aborts the whole scan immediately — used by the
/// occlusion probe to short-circuit as soon as one uncovered pixel is found.
pub(crate) fn scan_triangle<F>(tri: ScreenTriangle, clip_x: f32, clip_y: f32, mode: RasterMode, mut sink: F)
where
    F: FnMut(usize, usize, f32) -> bool,
{
    let mut edges = [
        Edge::new(tri.0[0], tri.0[1]),
        Edge::new(tri.0[1], tri.0[2]),
        Edge::new(tri.0[2], tri.0[0]),
    ];
    for e in edges.iter_mut() {
        e.invert_z();
        match mode {
            RasterMode::Occluder => e.round_occluder_coordinates(),
            RasterMode::Probe => e.round_occludee_coordinates(),
        }
    }

    let long_idx = (0..3)
        .max_by(|&a, &b| edges[a].y_extent().partial_cmp(&edges[b].y_extent()).unwrap())
        .unwrap();
    let long = edges[long_idx];
    let shorts = [edges[(long_idx + 1) % 3], edges[(long_idx + 2) % 3]];

    if long.y_extent() <= 0.0 || long.y1 < 0.0 || long.y0 > clip_y {
        return;
    }

    // Orientation is constant for the whole triangle; derive it from whichever short edge has
    // non-zero extent (a triangle can have one degenerate short edge when a vertex lies exactly
    // on a scanline).
    let reference = if shorts[0].y_extent() > 0.0 { &shorts[0] } else { &shorts[1] };
    let long_is_right = edge_is_right_of(&long, reference);

    if (long_is_right && long.x0 < 0.0 && long.x1 < 0.0)
        || (!long_is_right && long.x0 > clip_x && long.x1 > clip_x)
    {
        return;
    }

    for short in shorts.iter() {
        if !scan_half(&long, short, clip_x, clip_y, long_is_right, mode, &mut sink) {
            return;
        }
    }
}

/// Whether `long` runs to the right of `short` over the y-range they share, breaking a tie at
/// a shared vertex by comparing how fast each edge's x moves per scanline.
fn edge_is_right_of(long: &Edge, short: &Edge) -> bool {
    let long_extent = long.y_extent();
    if long_extent <= 0.0 {
        return false;
    }
    let long_x_inc = (long.x1 - long.x0) / long_extent;
    let long_x_at_short_start = long.x0 + long_x_inc * (short.y0 - long.y0);

    const EPS: f32 = 1e-4;
    if (long_x_at_short_start - short.x0).abs() < EPS {
        let short_extent = short.y_extent();
        let short_x_inc = if short_extent > 0.0 {
            (short.x1 - short.x0) / short_extent
        } else {
            0.0
        };
        long_x_inc > short_x_inc
    } else {
        long_x_at_short_start > short.x0
    }
}

#[allow(clippy::too_many_arguments)]
fn scan_half<F>(
    long: &Edge,
    short: &Edge,
    clip_x: f32,
    clip_y: f32,
    long_is_right: bool,
    mode: RasterMode,
    sink: &mut F,
) -> bool
where
    F: FnMut(usize, usize, f32) -> bool,
{
    let Some(mut state) = ScanlineState::build(long, short, clip_y) else {
        return true;
    };

    let clip_x_i = clip_x as i32;

    for y in state.start_line..=state.stop_line {
        let (real_left_x, left_z, real_right_x, right_z) = if long_is_right {
            (state.short_x, state.short_z, state.long_x, state.long_z)
        } else {
            (state.long_x, state.long_z, state.short_x, state.short_z)
        };

        let (left_px, right_px) = match mode {
            RasterMode::Occluder => (real_left_x.ceil(), real_right_x.floor()),
            RasterMode::Probe => (real_left_x.floor(), real_right_x.ceil()),
        };

        let span = real_right_x - real_left_x;
        let z_at_left_px = if span.abs() > 1e-6 {
            left_z + (right_z - left_z) / span * (left_px - real_left_x)
        } else {
            left_z
        };
        let z_at_right_px = if span.abs() > 1e-6 {
            left_z + (right_z - left_z) / span * (right_px - real_left_x)
        } else {
            right_z
        };

        let px_span = right_px - left_px;
        let depth_inc = if px_span.abs() > 1e-6 {
            (z_at_right_px - z_at_left_px) / px_span
        } else {
            0.0
        };

        let left_i = (left_px as i32).max(0);
        let right_i = (right_px as i32).min(clip_x_i);

        if left_i <= right_i {
            for x in left_i..=right_i {
                let d0 = z_at_left_px + depth_inc * (x as f32 - left_px);
                let d1 = d0 + depth_inc;
                let depth = match mode {
                    RasterMode::Occluder => d0.max(d1),
                    RasterMode::Probe => d0.min(d1).max(0.0),
                };
                if !sink(x as usize, y as usize, depth) {
                    return false;
                }
            }
        }

        state.long_x += state.long_x_inc;
        state.long_z += state.long_z_inc;
        state.short_x += state.short_x_inc;
        state.short_z += state.short_z_inc;
    }

    true
}
