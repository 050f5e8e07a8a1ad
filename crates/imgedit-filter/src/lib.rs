//! imgedit-filter - Neighbourhood filtering and tone mapping
//!
//! This crate provides:
//!
//! - Gaussian blur approximated by three successive box blurs
//! - Mean filtering over the image interior
//! - Generic interior convolution with arbitrary kernels
//! - Tone mapping (logarithmic, gamma, histogram equalization)

pub mod blur;
pub mod convolve;
pub mod enhance;
mod error;
pub mod kernel;

pub use error::{FilterError, FilterResult};
pub use kernel::{Kernel, boxes_for_gaussian};

pub use blur::{BOX_PASSES, blur, box_blur};
pub use convolve::{convolve_interior, mean_filter};
pub use enhance::{
    TrcLut, equalize, equalize_trcs, gamma_correction, gamma_trc, log_correction, log_trc,
    trc_map,
};
