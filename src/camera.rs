use crate::error::{ConfigError, Error};
use crate::math::*;

/// Position and orientation of the viewer in world space.
pub struct Camera {
    pos: Point3D<WorldSpace>,
    up: Vec3<WorldSpace>,
    dir: Vec3<WorldSpace>,
}

impl Camera {
    pub fn new(pos: Point3D<WorldSpace>, dir: Vec3<WorldSpace>, up: Vec3<WorldSpace>) -> Self {
        Camera {
            pos,
            up: up.normalize(),
            dir: dir.normalize(),
        }
    }

    pub fn position(&self) -> Point3D<WorldSpace> {
        self.pos
    }

    pub fn view_matrix(&self) -> Mat4<WorldSpace, CameraSpace> {
        // cam_transform = T * R, view = inverse(cam_transform) = inv(R) * inv(T)

        // Camera looks in negative z of its own space.
        // Camera space is left-handed just like world space.
        let cam_z = -self.dir;
        let cam_x = cam_z.cross(self.up).normalize();
        let cam_y = cam_x.cross(cam_z).normalize();

        let rotation_inv: Mat4<WorldSpace, CameraSpace> = mat4(
            cam_x.x(),
            cam_y.x(),
            cam_z.x(),
            0.0,
            cam_x.y(),
            cam_y.y(),
            cam_z.y(),
            0.0,
            cam_x.z(),
            cam_y.z(),
            cam_z.z(),
            0.0,
            0.0,
            0.0,
            0.0,
            1.0,
        )
        .transpose();

        let vec_to_pos: Vec3<WorldSpace> = self.pos - Point3D::<WorldSpace>::origin();
        let translation_inv: Mat4<WorldSpace, WorldSpace> = transform::translation_along(-vec_to_pos);

        rotation_inv * translation_inv
    }
}

impl Default for Camera {
    fn default() -> Camera {
        let pos = Point3D::<WorldSpace>::new(0.0, 0.0, 0.0);
        let up = vec3::<WorldSpace>(0.0, 1.0, 0.0);
        let dir = vec3::<WorldSpace>(0.0, 0.0, -1.0);

        Camera::new(pos, dir, up)
    }
}

/// Bundles a [`Camera`] with the frustum and viewport parameters needed to build a full
/// world-to-screen pipeline: view matrix, projection matrix, near plane, and the pixel
/// dimensions used to map NDC to screen coordinates (C4's `clipX`/`clipY`).
pub struct CameraContext {
    camera: Camera,
    near: f32,
    far: f32,
    width: usize,
    height: usize,
    view: Mat4<WorldSpace, CameraSpace>,
    projection: Mat4<CameraSpace, ClipSpace>,
}

impl CameraContext {
    pub fn new(
        camera: Camera,
        near: f32,
        far: f32,
        vert_fov: f32,
        width: usize,
        height: usize,
    ) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyViewport { width, height }.into());
        }
        if near <= 0.0 {
            return Err(ConfigError::NonPositiveNear(near).into());
        }

        let aspect_ratio = width as f32 / height as f32;
        let view = camera.view_matrix();
        let projection = project(near, far, aspect_ratio, vert_fov);

        Ok(CameraContext {
            camera,
            near,
            far,
            width,
            height,
            view,
            projection,
        })
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn view_matrix(&self) -> Mat4<WorldSpace, CameraSpace> {
        self.view
    }

    pub fn projection_matrix(&self) -> Mat4<CameraSpace, ClipSpace> {
        self.projection
    }

    /// World-to-clip-space matrix, `P * V`.
    pub fn view_projection_matrix(&self) -> Mat4<WorldSpace, ClipSpace> {
        self.projection * self.view
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// The rightmost addressable pixel column; NDC x = 1 maps exactly here, not to `width`.
    pub fn clip_x(&self) -> f32 {
        (self.width - 1) as f32
    }

    /// The bottommost addressable pixel row; NDC y = 1 maps exactly here, not to `height`.
    pub fn clip_y(&self) -> f32 {
        (self.height - 1) as f32
    }
}
