mod engine;
mod occluder;
mod probe;

pub use occluder::rasterize_occluder;
pub use probe::probe_occluded;
