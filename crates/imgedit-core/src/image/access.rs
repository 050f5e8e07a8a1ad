//! Pixel access functions
//!
//! Bounds-checked accessors for general use and unchecked accessors for
//! inner loops whose coordinates are in range by construction.

use super::{Image, ImageMut};
use crate::color::{Argb, CHANNELS};
use crate::error::{Error, Result};

#[inline]
fn read_pixel(data: &[u8], offset: usize) -> Argb {
    [
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ]
}

impl Image {
    /// Get the pixel at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(read_pixel(&self.inner.data, self.inner.offset(x, y)))
    }

    /// Get the pixel at (x, y) without bounds checking against the image
    /// dimensions.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Argb {
        read_pixel(&self.inner.data, self.inner.offset(x, y))
    }

    /// Get the pixel at (x, y) with both coordinates clamped into the image.
    #[inline]
    pub fn get_pixel_clamped(&self, x: i64, y: i64) -> Argb {
        let cx = x.clamp(0, self.inner.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.inner.height as i64 - 1) as u32;
        self.get_pixel_unchecked(cx, cy)
    }
}

impl ImageMut {
    /// Get the pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Argb> {
        if x >= self.inner.width || y >= self.inner.height {
            return None;
        }
        Some(read_pixel(&self.inner.data, self.inner.offset(x, y)))
    }

    /// Get the pixel at (x, y) without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> Argb {
        read_pixel(&self.inner.data, self.inner.offset(x, y))
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Argb) -> Result<()> {
        if x >= self.inner.width {
            return Err(Error::IndexOutOfBounds {
                index: x as usize,
                len: self.inner.width as usize,
            });
        }
        if y >= self.inner.height {
            return Err(Error::IndexOutOfBounds {
                index: y as usize,
                len: self.inner.height as usize,
            });
        }
        self.set_pixel_unchecked(x, y, pixel);
        Ok(())
    }

    /// Set the pixel at (x, y) without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if the computed offset falls outside the buffer.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, pixel: Argb) {
        let offset = self.inner.offset(x, y);
        self.inner.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
    }
}
