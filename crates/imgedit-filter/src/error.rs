//! Error types for imgedit-filter
//!
//! Filter operations are pure: on error no output image is produced.

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgedit_core::Error),

    /// Invalid kernel
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),

    /// Kernel does not fit inside the image it slides over
    #[error("kernel size {size} exceeds image dimensions {width}x{height}")]
    KernelTooLarge {
        /// Kernel size in pixels
        size: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
