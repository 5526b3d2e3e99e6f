//! Optional inspection helpers, out of the core culling path (section 6's "optional
//! diagnostics"): turning a depth buffer into a viewable image, and flagging pixels where the
//! software renderer disagrees with an externally rendered reference image.

use crate::color::Color;
use crate::depth_buffer::DepthBuffer;

/// Maps every depth value to a grayscale RGBA pixel: `0` depth is black, `1` (and anything
/// larger, clamped) is white.
pub fn depth_to_color(depth: &DepthBuffer) -> Vec<[u8; 4]> {
    depth.as_slice().iter().map(|&d| Color::grayscale(d).to_rgba_bytes()).collect()
}

/// Flags pixels where this renderer wrote a depth (i.e. believes something is there) but the
/// corresponding pixel in an externally rendered image is still the clear color — a sign the
/// software and reference pipelines have diverged.
///
/// Panics if `external_rgba` is not exactly the depth buffer's length; a mismatched image size
/// is a caller bug, not a runtime condition worth a `Result`.
pub fn diff(depth: &DepthBuffer, external_rgba: &[[u8; 4]], clear_rgba: [u8; 4]) -> Vec<bool> {
    let pixels = depth.as_slice();
    assert_eq!(
        external_rgba.len(),
        pixels.len(),
        "external_rgba length {} doesn't match depth buffer length {}",
        external_rgba.len(),
        pixels.len()
    );
    pixels
        .iter()
        .zip(external_rgba.iter())
        .map(|(&d, &pixel)| d > 0.0 && pixel == clear_rgba)
        .collect()
}
