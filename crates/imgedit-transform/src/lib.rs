//! imgedit-transform - Image resizing for imgedit
//!
//! This crate provides resizing to an exact target size with five
//! interpolation modes:
//!
//! - Nearest neighbor
//! - Bilinear, switching to box-filter area averaging for strong reductions
//! - Bicubic (Catmull-Rom), with a box-filter pre-enlargement for strong
//!   reductions
//! - Bicubic smoother / sharper, bicubic followed by a Gaussian blur
//!
//! Each algorithm is a [`Resampler`]; [`resize`] picks one and applies the
//! shared pre- and post-filters.

mod error;
pub mod interp;
pub mod resample;
pub mod scale;

pub use error::{TransformError, TransformResult};
pub use resample::{Bicubic, Bilinear, BoxFilter, NearestNeighbor, Resampler};
pub use scale::{InterpolationMode, ResizeOptions, box_filter_resize, resize, resize_with_options};
