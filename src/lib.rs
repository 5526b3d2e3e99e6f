//! CPU-side occlusion-culling rasterizer.
//!
//! [`Renderer`] rasterizes occluder meshes into a w-buffer depth buffer (`render`), then answers
//! conservative visibility queries for candidate bounding volumes against that buffer (`cull`).
//! Everything is single-threaded and synchronous: a frame is `render` followed by any number of
//! `cull` calls, until the next `render` clears and repopulates the depth buffer.

pub mod bounds;
pub mod camera;
pub mod candidate;
mod clip;
mod color;
mod container;
pub mod depth_buffer;
pub mod diagnostics;
mod edge;
pub mod error;
mod geometry;
mod math;
pub mod occluder;
mod project;
mod raster;
mod renderer;

pub use bounds::Bounds;
pub use camera::{Camera, CameraContext};
pub use candidate::{Candidate, CullMode};
pub use depth_buffer::DepthBuffer;
pub use error::{ConfigError, Error, ShapeError};
pub use occluder::Occluder;
pub use renderer::Renderer;
