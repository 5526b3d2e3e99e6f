use crate::math::*;

/// A triangle in camera space, the input to the near-plane clipper. `w` is implicitly 1 for
/// every vertex (view transforms never introduce perspective).
#[derive(Copy, Clone, Debug)]
pub struct CameraTriangle(pub [Point3D<CameraSpace>; 3]);

impl CameraTriangle {
    pub fn new(v0: Point3D<CameraSpace>, v1: Point3D<CameraSpace>, v2: Point3D<CameraSpace>) -> Self {
        CameraTriangle([v0, v1, v2])
    }

    /// Signed area test in camera space. The cross product is taken as `e2 x e1`, not the
    /// more common `e1 x e2` — reversed to match the winding this crate treats as front-facing.
    pub fn is_back_facing(&self) -> bool {
        let v1 = self.0[0];
        let v2 = self.0[1];
        let v3 = self.0[2];
        let e1 = v2 - v1;
        let e2 = v3 - v1;
        let normal = e2.cross(e1);
        let to_v1 = v1 - Point3D::<CameraSpace>::origin();
        normal.dot(to_v1) > 0.0
    }
}

/// A vertex after projection: pixel-space x/y and the camera-space distance `w` the w-buffer
/// depth (`1/w`) is derived from. `w` is kept un-inverted until [`crate::edge::Edge::invert_z`]
/// runs, matching the pipeline boundary the projector and the edge builder agree on.
#[derive(Copy, Clone, Debug)]
pub struct ScreenVertex {
    pub x: f32,
    pub y: f32,
    pub w: f32,
}

impl ScreenVertex {
    pub fn new(x: f32, y: f32, w: f32) -> Self {
        ScreenVertex { x, y, w }
    }
}

#[derive(Copy, Clone, Debug)]
pub struct ScreenTriangle(pub [ScreenVertex; 3]);

impl ScreenTriangle {
    pub fn new(v0: ScreenVertex, v1: ScreenVertex, v2: ScreenVertex) -> Self {
        ScreenTriangle([v0, v1, v2])
    }
}
