use std::path::PathBuf;

use thiserror::Error;

use crate::enums::ElementType;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Could not find file: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error(
        "File contains {actual} voxels, but dimensions {dimensions:?} require {expected}"
    )]
    SizeMismatch {
        dimensions: (usize, usize, usize),
        expected: usize,
        actual: usize,
    },

    #[error("Unsupported element type: {0}")]
    UnsupportedElementType(ElementType),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Three-way classification of [`ScanError`] used when reporting skipped scans
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    FileNotFound,
    SizeMismatch,
    IoFailure,
}

impl ScanError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScanError::FileNotFound { .. } => ErrorKind::FileNotFound,
            ScanError::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            ScanError::UnsupportedElementType(_) | ScanError::Io(_) | ScanError::Image(_) => {
                ErrorKind::IoFailure
            }
        }
    }
}
