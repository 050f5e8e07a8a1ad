//! Error types for imgedit-transform

use thiserror::Error;

/// Errors that can occur during resizing
#[derive(Debug, Error)]
pub enum TransformError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] imgedit_core::Error),

    /// Error from a blur pre- or post-filter
    #[error("filter error: {0}")]
    Filter(#[from] imgedit_filter::FilterError),

    /// Interpolation token not recognized
    #[error("unknown interpolation: {0:?}")]
    UnknownInterpolation(String),

    /// Invalid scale factor or resize option
    #[error("invalid scale factor: {0}")]
    InvalidScaleFactor(String),

    /// Target dimensions are zero, or the source is too small for the mode
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// Result type for transform operations
pub type TransformResult<T> = Result<T, TransformError>;
