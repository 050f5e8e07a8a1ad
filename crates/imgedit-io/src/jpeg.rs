//! JPEG image format support
//!
//! Decoding only. Grayscale and RGB JPEGs decode to an opaque ARGB
//! [`Image`]; 16-bit grayscale keeps the first (high) byte of each
//! sample. CMYK JPEGs are rejected.

use crate::{IoError, IoResult};
use imgedit_core::color::{self, CHANNELS};
use imgedit_core::{Image, ImageMut};
use jpeg_decoder::{Decoder, PixelFormat};
use std::io::Read;

/// Read a JPEG image
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let samples = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::L16 => 2,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "JPEG pixel format {:?}",
                other
            )));
        }
    };

    let width = info.width as u32;
    let height = info.height as u32;
    if pixels.len() < width as usize * height as usize * samples {
        return Err(IoError::InvalidData(format!(
            "JPEG data too small for {}x{} image",
            width, height
        )));
    }

    let mut image = ImageMut::new(width, height)?;
    let row_len = width as usize * samples;
    for y in 0..height {
        let row = &pixels[y as usize * row_len..][..row_len];
        let out = image.row_mut(y);
        for (dst, src) in out.chunks_exact_mut(CHANNELS).zip(row.chunks_exact(samples)) {
            // L16 keeps the first byte of each sample pair
            let pixel = match samples {
                3 => color::compose_rgb(src[0], src[1], src[2]),
                _ => color::compose_rgb(src[0], src[0], src[0]),
            };
            dst.copy_from_slice(&pixel);
        }
    }

    Ok(image.into())
}
