//! End-to-end scenarios exercising the public API only, mirroring the rendering/culling
//! scenarios used to validate this crate's conservativeness guarantees: W=8, H=8, near=1,
//! far=100, camera at the origin looking down -Z.

use occludance::{Bounds, Camera, CameraContext, Candidate, CullMode, Error, Occluder, Renderer, ShapeError};

const WIDTH: usize = 8;
const HEIGHT: usize = 8;
const NEAR: f32 = 1.0;
const FAR: f32 = 100.0;

const IDENTITY: [f32; 16] = [
    1.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, //
    0.0, 0.0, 0.0, 1.0,
];

fn renderer() -> Renderer {
    let ctx = CameraContext::new(Camera::default(), NEAR, FAR, std::f32::consts::FRAC_PI_2, WIDTH, HEIGHT).unwrap();
    Renderer::new(ctx)
}

fn full_screen_occluder(z: f32) -> Occluder {
    // A quad spanning well past the view frustum at the given camera-space depth, so its
    // projected footprint covers the whole 8x8 viewport.
    #[rustfmt::skip]
    let positions = vec![
        -10.0, -10.0, z,
        10.0, -10.0, z,
        10.0, 10.0, z,
        -10.0, 10.0, z,
    ];
    Occluder::new(&positions, vec![0, 1, 2, 0, 2, 3], IDENTITY).unwrap()
}

fn small_box_candidate(z: f32, mode: CullMode) -> Candidate {
    Candidate::new(IDENTITY, mode, Bounds::Box { center: [0.0, 0.0, z], extents: [0.2, 0.2, 0.2] })
}

#[test]
fn scenario_1_empty_scene() {
    let mut r = renderer();
    r.render(&[]).unwrap();
    assert!(r.depth().iter().all(|&d| d == 0.0));

    let visible = r.cull(&[small_box_candidate(-5.0, CullMode::Test)]);
    assert_eq!(visible, vec![true]);
}

#[test]
fn scenario_2_full_screen_occluder_fills_depth_buffer() {
    let mut r = renderer();
    r.render(&[full_screen_occluder(-2.0)]).unwrap();
    for &d in r.depth() {
        assert!((d - 0.5).abs() < 0.05, "expected depth near 0.5, got {d}");
    }
}

#[test]
fn scenario_3_candidate_behind_occluder_is_culled() {
    let mut r = renderer();
    r.render(&[full_screen_occluder(-2.0)]).unwrap();
    let visible = r.cull(&[small_box_candidate(-5.0, CullMode::Test)]);
    assert_eq!(visible, vec![false]);
}

#[test]
fn scenario_4_candidate_in_front_of_occluder_is_visible() {
    let mut r = renderer();
    r.render(&[full_screen_occluder(-2.0)]).unwrap();
    let visible = r.cull(&[small_box_candidate(-1.2, CullMode::Test)]);
    assert_eq!(visible, vec![true]);
}

#[test]
fn scenario_6_back_facing_occluder_writes_no_depth() {
    let mut r = renderer();
    #[rustfmt::skip]
    let positions = vec![
        -10.0, -10.0, -2.0,
        10.0, 10.0, -2.0,
        10.0, -10.0, -2.0,
    ];
    let occluder = Occluder::new(&positions, vec![0, 1, 2], IDENTITY).unwrap();
    r.render(&[occluder]).unwrap();
    assert!(r.depth().iter().all(|&d| d == 0.0));
}

#[test]
fn cull_mode_never_skips_the_probe_even_when_fully_occluded() {
    let mut r = renderer();
    r.render(&[full_screen_occluder(-2.0)]).unwrap();
    let visible = r.cull(&[small_box_candidate(-5.0, CullMode::Never)]);
    assert_eq!(visible, vec![true]);
}

#[test]
fn cull_preserves_candidate_order() {
    let mut r = renderer();
    r.render(&[full_screen_occluder(-2.0)]).unwrap();
    let visible = r.cull(&[
        small_box_candidate(-5.0, CullMode::Test),
        small_box_candidate(-1.2, CullMode::Test),
        small_box_candidate(-5.0, CullMode::Never),
    ]);
    assert_eq!(visible, vec![false, true, true]);
}

#[test]
fn sphere_candidate_behind_occluder_is_culled() {
    let mut r = renderer();
    r.render(&[full_screen_occluder(-2.0)]).unwrap();
    let candidate = Candidate::new(IDENTITY, CullMode::Test, Bounds::Sphere { center: [0.0, 0.0, -5.0], radius: 0.3 });
    let visible = r.cull(&[candidate]);
    assert_eq!(visible, vec![false]);
}

#[test]
fn ambient_zero_width_is_a_config_error() {
    let err = CameraContext::new(Camera::default(), NEAR, FAR, std::f32::consts::FRAC_PI_2, 0, HEIGHT);
    assert!(matches!(err, Err(Error::Config(_))));
}

#[test]
fn ambient_non_positive_near_is_a_config_error() {
    let err = CameraContext::new(Camera::default(), 0.0, FAR, std::f32::consts::FRAC_PI_2, WIDTH, HEIGHT);
    assert!(matches!(err, Err(Error::Config(_))));
}

#[test]
fn ambient_malformed_index_buffer_is_a_shape_error() {
    #[rustfmt::skip]
    let positions = vec![
        -1.0, -1.0, -2.0,
        1.0, -1.0, -2.0,
        0.0, 1.0, -2.0,
    ];
    let err = Occluder::new(&positions, vec![0, 1], IDENTITY).unwrap_err();
    assert_eq!(err, ShapeError::IndexCountNotMultipleOfThree(2));
}

#[test]
fn ambient_out_of_range_index_is_a_shape_error() {
    #[rustfmt::skip]
    let positions = vec![
        -1.0, -1.0, -2.0,
        1.0, -1.0, -2.0,
        0.0, 1.0, -2.0,
    ];
    let err = Occluder::new(&positions, vec![0, 1, 5], IDENTITY).unwrap_err();
    assert_eq!(err, ShapeError::IndexOutOfRange { index: 5, vertex_count: 3 });
}

#[test]
fn ambient_empty_render_and_cull_are_no_ops() {
    let mut r = renderer();
    assert!(r.render(&[]).is_ok());
    assert!(r.cull(&[]).is_empty());
}
