//! imgedit - Image editing engine for Rust
//!
//! # Overview
//!
//! imgedit works on 4-channel 8-bit ARGB images and provides:
//!
//! - Resizing with nearest-neighbor, bilinear, box-filter and bicubic
//!   resampling ([`transform`])
//! - Gaussian blur approximated by three box blurs ([`filter::blur`])
//! - Tone mapping: log, gamma and histogram equalization ([`filter::enhance`])
//! - Mean filtering ([`filter::convolve`])
//! - PNG, JPEG and GIF reading and PNG writing ([`io`])
//!
//! Every operation takes an [`Image`] by reference and returns a new one.
//!
//! # Example
//!
//! ```
//! use imgedit::Image;
//! use imgedit::transform::{InterpolationMode, resize};
//!
//! let image = Image::filled(64, 48, [255, 90, 120, 200]).unwrap();
//! let small = resize(&image, InterpolationMode::BicubicSmoother, 16, 12).unwrap();
//! let toned = imgedit::filter::gamma_correction(&small, 2.2).unwrap();
//! assert_eq!((toned.width(), toned.height()), (16, 12));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use imgedit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use imgedit_filter as filter;
pub use imgedit_io as io;
pub use imgedit_transform as transform;
