use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("Invalid dimensions for rectangle {index}: {width}x{height}")]
    InvalidDimension { index: usize, width: u32, height: u32 },
    #[error("Packing invariant violated: {0}")]
    InvariantViolation(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[cfg(feature = "image")]
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, PackError>;
