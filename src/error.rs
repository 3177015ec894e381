use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CompressionError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    ImageProcessing(#[from] image::ImageError),

    #[error("WebP encoding error: {0}")]
    WebpEncoding(String),

    #[error("Invalid quality value: {0}. Must be between 1 and 100")]
    InvalidQuality(u8),

    #[error("Invalid quality step: {0}. Must be greater than 0")]
    InvalidStep(u8),

    #[error("Invalid target size: {0} bytes. Must be greater than 0")]
    InvalidTargetSize(u64),

    #[error("Invalid quality range: minimum quality {min} is above starting quality {start}")]
    InvalidQualityRange { start: u8, min: u8 },

    #[error("Failed to create output directory: {}", .path.display())]
    DirectoryCreationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input path is not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Walkdir error: {0}")]
    WalkdirError(#[from] walkdir::Error),
}

pub type Result<T> = std::result::Result<T, CompressionError>;
