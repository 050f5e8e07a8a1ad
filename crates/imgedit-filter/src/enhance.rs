//! Tone mapping
//!
//! Point-wise remapping of channel values through 256-entry lookup tables:
//! logarithmic compression, gamma correction and global histogram
//! equalization.
//!
//! Every channel is remapped, alpha included. Equalization builds a separate
//! table per channel, so it can shift the color balance of the image.

use crate::{FilterError, FilterResult};
use imgedit_core::color::CHANNELS;
use imgedit_core::{Histogram, Image};
use log::debug;
use rayon::prelude::*;

/// A 256-entry lookup table for tone reproduction curve mapping.
///
/// Maps input channel values [0..255] to output channel values [0..255].
pub type TrcLut = [u8; 256];

/// Generate the logarithmic TRC: `c * ln(v + 1)` with `c = 255 / ln(256)`.
///
/// Computed in single precision and truncated, so the top entry may land
/// on 254.
pub fn log_trc() -> TrcLut {
    let c = 255.0f32 / 256.0f32.ln();
    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let mapped = c * (i as f32 + 1.0).ln();
        *entry = mapped.clamp(0.0, 255.0) as u8;
    }
    lut
}

/// Generate a gamma TRC: `255 * (v / 255) ^ gamma`, truncated.
///
/// # Arguments
///
/// * `gamma` - Exponent; must be > 0.0. Values > 1.0 darken the image and
///   values < 1.0 lighten it.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `gamma` is not a positive
/// finite number.
pub fn gamma_trc(gamma: f32) -> FilterResult<TrcLut> {
    if !gamma.is_finite() || gamma <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "gamma must be > 0.0, got {gamma}"
        )));
    }

    let mut lut = [0u8; 256];
    for (i, entry) in lut.iter_mut().enumerate() {
        let x = i as f32 / 255.0;
        let mapped = 255.0 * x.powf(gamma);
        *entry = mapped.clamp(0.0, 255.0) as u8;
    }
    Ok(lut)
}

/// Generate the per-channel histogram equalization TRCs.
///
/// Entry `v` of each table is `cumulative[v] * 255 / pixel_count`,
/// truncated.
pub fn equalize_trcs(hist: &Histogram) -> [TrcLut; CHANNELS] {
    let scale = 255.0 / hist.pixel_count().max(1) as f64;
    let mut luts = [[0u8; 256]; CHANNELS];
    for (lut, cum) in luts.iter_mut().zip(hist.cumulative.iter()) {
        for (entry, &count) in lut.iter_mut().zip(cum.iter()) {
            *entry = (count as f64 * scale).min(255.0) as u8;
        }
    }
    luts
}

/// Remap every channel of every pixel through its channel's table.
///
/// `luts` is indexed by channel (alpha, red, green, blue).
pub fn trc_map(image: &Image, luts: &[TrcLut; CHANNELS]) -> Image {
    let mut out = image.to_mut();
    let stride = out.stride();
    out.data_mut().par_chunks_mut(stride).for_each(|row| {
        for pixel in row.chunks_exact_mut(CHANNELS) {
            for (value, lut) in pixel.iter_mut().zip(luts.iter()) {
                *value = lut[*value as usize];
            }
        }
    });
    out.into()
}

/// Apply logarithmic correction to every channel.
///
/// Brightens dark values and compresses bright ones.
///
/// # Examples
///
/// ```
/// use imgedit_core::Image;
/// use imgedit_filter::log_correction;
///
/// let image = Image::filled(2, 2, [0, 0, 0, 0]).unwrap();
/// let out = log_correction(&image);
/// assert_eq!(out.get_pixel(0, 0), Some([0, 0, 0, 0]));
/// ```
pub fn log_correction(image: &Image) -> Image {
    let lut = log_trc();
    debug!("log correction {}x{}", image.width(), image.height());
    trc_map(image, &[lut; CHANNELS])
}

/// Apply gamma correction with exponent `gamma` to every channel.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `gamma` is not a positive
/// finite number.
pub fn gamma_correction(image: &Image, gamma: f32) -> FilterResult<Image> {
    let lut = gamma_trc(gamma)?;
    debug!(
        "gamma correction {}x{} gamma={gamma}",
        image.width(),
        image.height()
    );
    Ok(trc_map(image, &[lut; CHANNELS]))
}

/// Apply global histogram equalization independently per channel.
pub fn equalize(image: &Image) -> Image {
    let hist = image.histogram();
    let luts = equalize_trcs(&hist);
    debug!(
        "equalize {}x{} over {} pixels",
        image.width(),
        image.height(),
        hist.pixel_count()
    );
    trc_map(image, &luts)
}
