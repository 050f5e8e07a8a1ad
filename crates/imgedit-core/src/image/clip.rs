//! Rectangle clipping, tiling and stitching
//!
//! Plain copy operations used to split an image into patches and to place
//! two images side by side. No pixel values are modified.

use super::{Image, ImageMut};
use crate::color::CHANNELS;
use crate::error::{Error, Result};

impl Image {
    /// Copy the rectangle with top-left corner (x, y) and size w x h.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if `w` or `h` is 0 and
    /// [`Error::InvalidParameter`] if the rectangle does not lie entirely
    /// inside the image.
    ///
    /// # Examples
    ///
    /// ```
    /// use imgedit_core::Image;
    ///
    /// let image = Image::new(100, 80).unwrap();
    /// let clipped = image.clip_rectangle(10, 20, 50, 40).unwrap();
    /// assert_eq!(clipped.width(), 50);
    /// assert_eq!(clipped.height(), 40);
    /// ```
    pub fn clip_rectangle(&self, x: u32, y: u32, w: u32, h: u32) -> Result<Image> {
        if w == 0 || h == 0 {
            return Err(Error::InvalidDimension {
                width: w,
                height: h,
            });
        }
        let right = x as u64 + w as u64;
        let bottom = y as u64 + h as u64;
        if right > self.width() as u64 || bottom > self.height() as u64 {
            return Err(Error::InvalidParameter(format!(
                "rectangle ({x}, {y}, {w}, {h}) escapes {}x{} image",
                self.width(),
                self.height()
            )));
        }

        let mut out = ImageMut::new(w, h)?;
        let start = x as usize * CHANNELS;
        let len = w as usize * CHANNELS;
        for row in 0..h {
            let src = &self.row(y + row)[start..start + len];
            out.row_mut(row).copy_from_slice(src);
        }
        Ok(out.into())
    }

    /// Split the image into non-overlapping `tile_w x tile_h` patches.
    ///
    /// Produces `floor(width / tile_w) * floor(height / tile_h)` tiles;
    /// partial tiles at the right and bottom edges are dropped. Tiles are
    /// ordered column by column: every tile of the leftmost column from top
    /// to bottom, then the next column.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if a tile dimension is 0 or
    /// larger than the image.
    pub fn tiles(&self, tile_w: u32, tile_h: u32) -> Result<Vec<Image>> {
        if tile_w == 0 || tile_h == 0 || tile_w > self.width() || tile_h > self.height() {
            return Err(Error::InvalidParameter(format!(
                "tile size {tile_w}x{tile_h} does not fit {}x{} image",
                self.width(),
                self.height()
            )));
        }
        let nx = self.width() / tile_w;
        let ny = self.height() / tile_h;
        let mut tiles = Vec::with_capacity((nx * ny) as usize);
        for i in 0..nx {
            for j in 0..ny {
                tiles.push(self.clip_rectangle(i * tile_w, j * tile_h, tile_w, tile_h)?);
            }
        }
        Ok(tiles)
    }

    /// Place `left` and `right` side by side.
    ///
    /// The result is `left.width + right.width` wide and as tall as the
    /// taller input. Pixels covered by neither input are zero.
    pub fn concat_horizontal(left: &Image, right: &Image) -> Result<Image> {
        let width = left.width().checked_add(right.width()).ok_or_else(|| {
            Error::InvalidParameter("combined width overflows u32".to_string())
        })?;
        let height = left.height().max(right.height());
        let mut out = ImageMut::new(width, height)?;

        let left_len = left.stride();
        for y in 0..left.height() {
            out.row_mut(y)[..left_len].copy_from_slice(left.row(y));
        }
        for y in 0..right.height() {
            out.row_mut(y)[left_len..].copy_from_slice(right.row(y));
        }
        Ok(out.into())
    }
}
