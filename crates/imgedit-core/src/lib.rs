//! imgedit Core - Basic data structures for image processing
//!
//! This crate provides the fundamental data structures used throughout
//! the imgedit image processing crates:
//!
//! - [`Image`] / [`ImageMut`] - The main image container (immutable / mutable)
//! - [`Histogram`] - Per-channel value distributions
//! - [`color`] - Channel layout and pixel helpers
//!
//! Every operation in the filter and transform crates takes an [`Image`]
//! by reference and returns a freshly allocated one; inputs are never
//! mutated.

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::{Histogram, Image, ImageMut};

/// Channel layout and helper functions for 4-channel 8-bit pixels.
///
/// # Pixel format
///
/// Pixels are stored as four interleaved bytes in (alpha, red, green, blue)
/// order. Every channel is treated as ordinary data by the numeric
/// operations; alpha is not interpreted as transparency.
pub mod color {
    /// A single pixel: `[alpha, red, green, blue]`.
    pub type Argb = [u8; 4];

    /// Number of channels per pixel
    pub const CHANNELS: usize = 4;

    /// Alpha channel (byte 0)
    pub const ALPHA: usize = 0;
    /// Red channel (byte 1)
    pub const RED: usize = 1;
    /// Green channel (byte 2)
    pub const GREEN: usize = 2;
    /// Blue channel (byte 3)
    pub const BLUE: usize = 3;

    /// Compose a pixel from its four channels.
    #[inline]
    pub fn compose_argb(a: u8, r: u8, g: u8, b: u8) -> Argb {
        [a, r, g, b]
    }

    /// Compose an opaque pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> Argb {
        [255, r, g, b]
    }

    /// Extract the alpha component.
    #[inline]
    pub fn alpha(pixel: Argb) -> u8 {
        pixel[ALPHA]
    }

    /// Extract the red component.
    #[inline]
    pub fn red(pixel: Argb) -> u8 {
        pixel[RED]
    }

    /// Extract the green component.
    #[inline]
    pub fn green(pixel: Argb) -> u8 {
        pixel[GREEN]
    }

    /// Extract the blue component.
    #[inline]
    pub fn blue(pixel: Argb) -> u8 {
        pixel[BLUE]
    }

    /// Clamp an integer channel value to `[0, 255]`.
    #[inline]
    pub fn clamp_channel(value: i32) -> u8 {
        value.clamp(0, 255) as u8
    }

    /// Convert a pixel to RGBA byte order (as used by most file formats).
    #[inline]
    pub fn to_rgba(pixel: Argb) -> [u8; 4] {
        [pixel[RED], pixel[GREEN], pixel[BLUE], pixel[ALPHA]]
    }

    /// Build a pixel from RGBA byte order.
    #[inline]
    pub fn from_rgba(rgba: [u8; 4]) -> Argb {
        [rgba[3], rgba[0], rgba[1], rgba[2]]
    }

}
