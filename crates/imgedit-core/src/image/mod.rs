//! Image - The main pixel container
//!
//! `Image` is a `width x height` grid of 4-channel 8-bit pixels.
//!
//! # Pixel layout
//!
//! - Image data is a flat, row-major `Vec<u8>`
//! - Every pixel occupies 4 consecutive bytes in (alpha, red, green, blue) order
//! - Rows are tightly packed (stride = `width * 4`)
//!
//! # Ownership model
//!
//! `Image` uses `Arc` for cheap cloning (shared ownership) and is immutable
//! once produced. To modify pixel data, convert to `ImageMut` via
//! [`Image::try_into_mut`] or [`Image::to_mut`], then convert back with
//! `Into<Image>`.

mod access;
mod clip;
mod histogram;

pub use histogram::{Histogram, LEVELS};

use crate::color::{Argb, CHANNELS};
use crate::error::{Error, Result};
use std::sync::Arc;

/// Internal image data
#[derive(Debug, PartialEq, Eq)]
struct ImageData {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Interleaved ARGB bytes, row-major
    data: Vec<u8>,
}

impl ImageData {
    fn zeroed(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let len = Self::byte_len(width, height);
        Ok(ImageData {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    #[inline]
    fn byte_len(width: u32, height: u32) -> usize {
        width as usize * height as usize * CHANNELS
    }

    #[inline]
    fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.stride() + x as usize * CHANNELS
    }
}

/// Image - Main pixel container
///
/// # Examples
///
/// ```
/// use imgedit_core::Image;
///
/// let image = Image::new(640, 480).unwrap();
/// assert_eq!(image.width(), 640);
/// assert_eq!(image.height(), 480);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    inner: Arc<ImageData>,
}

impl Image {
    /// Create a new image with every channel of every pixel set to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(Image {
            inner: Arc::new(ImageData::zeroed(width, height)?),
        })
    }

    /// Create a new image with every pixel set to `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Argb) -> Result<Self> {
        let mut inner = ImageData::zeroed(width, height)?;
        for chunk in inner.data.chunks_exact_mut(CHANNELS) {
            chunk.copy_from_slice(&pixel);
        }
        Ok(Image {
            inner: Arc::new(inner),
        })
    }

    /// Wrap an existing interleaved ARGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for a zero dimension and
    /// [`Error::InvalidParameter`] if `data.len() != width * height * 4`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = ImageData::byte_len(width, height);
        if data.len() != expected {
            return Err(Error::InvalidParameter(format!(
                "buffer holds {} bytes, {}x{} ARGB image needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Image {
            inner: Arc::new(ImageData {
                width,
                height,
                data,
            }),
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn pixel_count(&self) -> u64 {
        self.inner.width as u64 * self.inner.height as u64
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get raw access to the interleaved ARGB data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.inner.stride();
        &self.inner.data[start..start + self.inner.stride()]
    }

    /// Get the number of strong references to this image.
    #[inline]
    pub fn ref_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }

    /// Check if two images have the same width and height.
    pub fn sizes_equal(&self, other: &Image) -> bool {
        self.inner.width == other.inner.width && self.inner.height == other.inner.height
    }

    /// Create a deep copy of this image.
    ///
    /// Unlike `clone()` which shares data via Arc, this creates
    /// a completely independent copy.
    pub fn deep_clone(&self) -> Self {
        Image {
            inner: Arc::new(ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            }),
        }
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    pub fn try_into_mut(self) -> std::result::Result<ImageMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(ImageMut { inner: data }),
            Err(arc) => Err(Image { inner: arc }),
        }
    }

    /// Create a mutable copy of this image.
    ///
    /// Always copies, so the source stays untouched.
    pub fn to_mut(&self) -> ImageMut {
        ImageMut {
            inner: ImageData {
                width: self.inner.width,
                height: self.inner.height,
                data: self.inner.data.clone(),
            },
        }
    }

    /// Consume the image and return its interleaved ARGB buffer.
    ///
    /// Copies only when the data is shared.
    pub fn into_raw(self) -> Vec<u8> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => data.data,
            Err(arc) => arc.data.clone(),
        }
    }
}

/// Mutable image
///
/// Allows modification of image data. Convert back to an immutable
/// [`Image`] using `Into<Image>`.
#[derive(Debug)]
pub struct ImageMut {
    inner: ImageData,
}

impl ImageMut {
    /// Create a new zeroed mutable image.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        Ok(ImageMut {
            inner: ImageData::zeroed(width, height)?,
        })
    }

    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Bytes per row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.inner.stride()
    }

    /// Get raw access to the image data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable raw access to the image data.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Get the mutable bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row_mut(&mut self, y: u32) -> &mut [u8] {
        let stride = self.inner.stride();
        let start = y as usize * stride;
        &mut self.inner.data[start..start + stride]
    }
}

impl From<ImageMut> for Image {
    fn from(image: ImageMut) -> Self {
        Image {
            inner: Arc::new(image.inner),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let image = Image::new(3, 2).unwrap();
        assert_eq!(image.data().len(), 24);
        assert!(image.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_zero_dimension_rejected() {
        assert!(matches!(
            Image::new(0, 5),
            Err(Error::InvalidDimension {
                width: 0,
                height: 5
            })
        ));
        assert!(Image::new(5, 0).is_err());
    }

    #[test]
    fn test_from_raw_length_checked() {
        assert!(Image::from_raw(2, 2, vec![0; 16]).is_ok());
        assert!(matches!(
            Image::from_raw(2, 2, vec![0; 15]),
            Err(Error::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_filled() {
        let image = Image::filled(4, 3, [1, 2, 3, 4]).unwrap();
        for chunk in image.data().chunks_exact(4) {
            assert_eq!(chunk, &[1, 2, 3, 4]);
        }
    }

    #[test]
    fn test_clone_shares_data() {
        let a = Image::new(4, 4).unwrap();
        let b = a.clone();
        assert_eq!(a.ref_count(), 2);
        assert!(b.try_into_mut().is_err());
    }

    #[test]
    fn test_to_mut_leaves_source_untouched() {
        let src = Image::filled(2, 2, [9, 9, 9, 9]).unwrap();
        let mut m = src.to_mut();
        m.data_mut()[0] = 0;
        let modified: Image = m.into();
        assert_eq!(src.data()[0], 9);
        assert_eq!(modified.data()[0], 0);
    }

    #[test]
    fn test_row_access() {
        let mut m = ImageMut::new(2, 3).unwrap();
        m.row_mut(1).fill(7);
        let image: Image = m.into();
        assert!(image.row(0).iter().all(|&b| b == 0));
        assert!(image.row(1).iter().all(|&b| b == 7));
        assert_eq!(image.row(1).len(), image.stride());
    }

    #[test]
    fn test_into_raw_roundtrip() {
        let data: Vec<u8> = (0..16).collect();
        let image = Image::from_raw(2, 2, data.clone()).unwrap();
        assert_eq!(image.into_raw(), data);
    }
}
