//! GIF image format support
//!
//! Decoding only. The first frame is expanded through its palette to
//! ARGB; the transparent palette index, if any, gets alpha 0. Later frames
//! of an animation are ignored.

use crate::{IoError, IoResult};
use gif::{ColorOutput, DecodeOptions};
use imgedit_core::color::{self, CHANNELS};
use imgedit_core::{Image, ImageMut};
use std::io::Read;

/// Read the first frame of a GIF image
pub fn read_gif<R: Read>(reader: R) -> IoResult<Image> {
    let mut options = DecodeOptions::new();
    options.set_color_output(ColorOutput::RGBA);

    let mut decoder = options
        .read_info(reader)
        .map_err(|e| IoError::DecodeError(format!("GIF decode error: {}", e)))?;

    let frame = decoder
        .read_next_frame()
        .map_err(|e| IoError::DecodeError(format!("GIF frame error: {}", e)))?
        .ok_or_else(|| IoError::InvalidData("no frames in GIF".to_string()))?;

    let width = frame.width as u32;
    let height = frame.height as u32;
    let stride = width as usize * CHANNELS;
    if frame.buffer.len() < stride * height as usize {
        return Err(IoError::InvalidData(format!(
            "GIF frame too small for {}x{} image",
            width, height
        )));
    }

    let mut image = ImageMut::new(width, height)?;
    for y in 0..height {
        let row = &frame.buffer[y as usize * stride..][..stride];
        let out = image.row_mut(y);
        for (dst, src) in out.chunks_exact_mut(CHANNELS).zip(row.chunks_exact(CHANNELS)) {
            dst.copy_from_slice(&color::from_rgba([src[0], src[1], src[2], src[3]]));
        }
    }

    Ok(image.into())
}
