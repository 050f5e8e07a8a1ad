//! PNG image format support
//!
//! Every PNG color type decodes to a 4-channel ARGB [`Image`]: palettes and
//! sub-byte grayscale are expanded, 16-bit samples are reduced to their high
//! byte, and missing alpha becomes 255. Images are always written as 8-bit
//! RGBA.

use crate::{IoError, IoResult};
use imgedit_core::color::{self, CHANNELS};
use imgedit_core::{Image, ImageMut};
use png::{BitDepth, ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    if output_info.bit_depth != BitDepth::Eight {
        return Err(IoError::UnsupportedFormat(format!(
            "unexpected PNG output depth after expansion: {:?}",
            output_info.bit_depth
        )));
    }

    let width = output_info.width;
    let height = output_info.height;
    let samples = match output_info.color_type {
        ColorType::Grayscale => 1,
        ColorType::GrayscaleAlpha => 2,
        ColorType::Rgb => 3,
        ColorType::Rgba => 4,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unexpected PNG output color type: {:?}",
                other
            )));
        }
    };

    let bytes_per_row = output_info.line_size;
    let data = &buf[..output_info.buffer_size()];
    if bytes_per_row < width as usize * samples || data.len() < bytes_per_row * height as usize {
        return Err(IoError::InvalidData(format!(
            "PNG frame too small for {}x{} image",
            width, height
        )));
    }

    let mut image = ImageMut::new(width, height)?;
    for y in 0..height {
        let row = &data[y as usize * bytes_per_row..][..width as usize * samples];
        let out = image.row_mut(y);
        for (dst, src) in out.chunks_exact_mut(CHANNELS).zip(row.chunks_exact(samples)) {
            let pixel = match samples {
                1 => color::compose_argb(255, src[0], src[0], src[0]),
                2 => color::compose_argb(src[1], src[0], src[0], src[0]),
                3 => color::compose_rgb(src[0], src[1], src[2]),
                _ => color::from_rgba([src[0], src[1], src[2], src[3]]),
            };
            dst.copy_from_slice(&pixel);
        }
    }

    Ok(image.into())
}

/// Write a PNG image as 8-bit RGBA
pub fn write_png<W: Write>(image: &Image, writer: W) -> IoResult<()> {
    let mut encoder = Encoder::new(writer, image.width(), image.height());
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity(image.data().len());
    for pixel in image.data().chunks_exact(CHANNELS) {
        data.extend_from_slice(&color::to_rgba([pixel[0], pixel[1], pixel[2], pixel[3]]));
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    writer
        .finish()
        .map_err(|e| IoError::EncodeError(format!("PNG finish error: {}", e)))?;

    Ok(())
}
