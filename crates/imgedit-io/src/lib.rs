//! imgedit-io - Image I/O for imgedit
//!
//! Reads PNG, JPEG and GIF files into [`Image`] values and writes PNG.
//! Formats are detected from the file signature, not the file extension.
//!
//! # Examples
//!
//! ```
//! use imgedit_core::Image;
//! use imgedit_io::{ImageFormat, read_image_mem, write_image_mem};
//!
//! let image = Image::filled(3, 2, [255, 10, 20, 30]).unwrap();
//! let bytes = write_image_mem(&image, ImageFormat::Png).unwrap();
//! assert_eq!(read_image_mem(&bytes).unwrap(), image);
//! ```

mod error;
pub mod format;
pub mod gif;
pub mod jpeg;
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};
pub use self::gif::read_gif;
pub use self::jpeg::read_jpeg;
pub use self::png::{read_png, write_png};

use imgedit_core::Image;
use log::debug;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// Read an image from a file, detecting its format from the signature
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let format = detect_format(path)?;
    debug!("reading {} as {}", path.display(), format);
    match format {
        ImageFormat::Png => read_png(BufReader::new(File::open(path)?)),
        ImageFormat::Jpeg => read_jpeg(BufReader::new(File::open(path)?)),
        ImageFormat::Gif => read_gif(BufReader::new(File::open(path)?)),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Read an image from an in-memory buffer
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    match detect_format_from_bytes(data)? {
        ImageFormat::Png => read_png(Cursor::new(data)),
        ImageFormat::Jpeg => read_jpeg(data),
        ImageFormat::Gif => read_gif(data),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Write an image to a file in the given format
///
/// Only [`ImageFormat::Png`] can be written.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P, format: ImageFormat) -> IoResult<()> {
    let path = path.as_ref();
    debug!(
        "writing {}x{} image to {} as {}",
        image.width(),
        image.height(),
        path.display(),
        format
    );
    match format {
        ImageFormat::Png => write_png(image, BufWriter::new(File::create(path)?)),
        other => Err(IoError::UnsupportedFormat(other.to_string())),
    }
}

/// Encode an image to an in-memory buffer in the given format
pub fn write_image_mem(image: &Image, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        ImageFormat::Png => write_png(image, &mut buffer)?,
        other => return Err(IoError::UnsupportedFormat(other.to_string())),
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_write_format() {
        let image = Image::new(2, 2).unwrap();
        assert!(matches!(
            write_image_mem(&image, ImageFormat::Jpeg),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_unsupported_read_format() {
        let bmp = b"BM\x00\x00\x00\x00";
        assert!(matches!(
            read_image_mem(bmp),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_truncated_jpeg_routes_to_decoder() {
        let jpeg = [0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10];
        assert!(matches!(
            read_image_mem(&jpeg),
            Err(IoError::DecodeError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            read_image("/nonexistent/imgedit/missing.png"),
            Err(IoError::Io(_))
        ));
    }
}
