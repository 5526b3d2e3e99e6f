use thiserror::Error;

/// Errors surfaced at the crate boundary. `NumericWarning` from the design notes is
/// deliberately not a variant here: it is a recoverable clamp, logged via `log::warn!` at the
/// depth-buffer write site ([`crate::depth_buffer::DepthBuffer::write_max`]), not something a
/// caller needs to handle.
#[derive(Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid renderer configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("invalid occluder geometry: {0}")]
    Shape(#[from] ShapeError),
}

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("viewport dimensions must be non-zero, got {width}x{height}")]
    EmptyViewport { width: usize, height: usize },

    #[error("near plane distance must be positive, got {0}")]
    NonPositiveNear(f32),
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShapeError {
    #[error("index buffer length {0} is not a multiple of 3")]
    IndexCountNotMultipleOfThree(usize),

    #[error("index {index} out of range for {vertex_count} vertices")]
    IndexOutOfRange { index: u32, vertex_count: usize },
}
