//! Gaussian blur approximated by repeated box blurs
//!
//! A Gaussian of standard deviation `sigma` is approximated by three
//! successive box blurs whose widths come from [`boxes_for_gaussian`].
//! Each box blur is separable: a horizontal running-sum pass over every
//! row, then the same pass over every column.
//!
//! The running sum reproduces a fixed edge behaviour: the first `k/2`
//! outputs of a line hold the average of samples `[0, k)`, the window then
//! slides one sample ahead of the output position, and the last `k/2 + 1`
//! outputs repeat the final window average.

use crate::kernel::boxes_for_gaussian;
use crate::{FilterError, FilterResult};
use imgedit_core::color::CHANNELS;
use imgedit_core::Image;
use log::{debug, trace};
use rayon::prelude::*;

/// Number of box passes used to approximate a Gaussian.
pub const BOX_PASSES: u32 = 3;

/// Blur an image with a Gaussian approximation of standard deviation `sigma`.
///
/// # Arguments
///
/// * `image` - Input image
/// * `sigma` - Standard deviation in pixels, must be positive
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] for a non-positive or
/// non-finite `sigma`, and [`FilterError::KernelTooLarge`] if a box is wider
/// or taller than the image.
///
/// # Examples
///
/// ```
/// use imgedit_core::Image;
/// use imgedit_filter::blur;
///
/// let image = Image::filled(16, 16, [255, 40, 80, 120]).unwrap();
/// let blurred = blur(&image, 1.0).unwrap();
/// assert_eq!(blurred.get_pixel(8, 8), Some([255, 40, 80, 120]));
/// ```
pub fn blur(image: &Image, sigma: f64) -> FilterResult<Image> {
    let boxes = boxes_for_gaussian(sigma, BOX_PASSES)?;
    debug!(
        "blur {}x{} sigma={sigma} boxes={boxes:?}",
        image.width(),
        image.height()
    );

    let mut current = image.clone();
    for size in boxes {
        current = box_blur(&current, size)?;
    }
    Ok(current)
}

/// Apply one separable box blur with window `size`.
///
/// An even `size` is bumped to the next odd value.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `size` is 0 and
/// [`FilterError::KernelTooLarge`] if the window does not fit in either
/// dimension of the image.
pub fn box_blur(image: &Image, size: u32) -> FilterResult<Image> {
    if size == 0 {
        return Err(FilterError::InvalidParameters(
            "box blur size must be >= 1".into(),
        ));
    }
    let k = if size % 2 == 0 { size + 1 } else { size };
    let (w, h) = (image.width(), image.height());
    if k > w || k > h {
        return Err(FilterError::KernelTooLarge {
            size: k,
            width: w,
            height: h,
        });
    }
    trace!("box blur {w}x{h} k={k}");

    let horizontal = blur_rows(image.data(), w, h, k);
    let transposed = transpose(&horizontal, w, h);
    let vertical = blur_rows(&transposed, h, w, k);
    let data = transpose(&vertical, h, w);

    Ok(Image::from_raw(w, h, data)?)
}

/// Run the sliding box average over every row of an interleaved buffer.
fn blur_rows(src: &[u8], width: u32, height: u32, k: u32) -> Vec<u8> {
    let stride = width as usize * CHANNELS;
    let mut dst = vec![0u8; stride * height as usize];
    dst.par_chunks_mut(stride)
        .zip(src.par_chunks(stride))
        .for_each(|(out, row)| blur_line(row, out, width as usize, k as usize));
    dst
}

fn blur_line(row: &[u8], out: &mut [u8], width: usize, k: usize) {
    let half = k / 2;
    let inv = 1.0f32 / k as f32;
    let sample = |x: usize, c: usize| row[x * CHANNELS + c] as f32;

    let mut sum = [0f32; CHANNELS];
    for x in 0..k {
        for (c, s) in sum.iter_mut().enumerate() {
            *s += sample(x, c);
        }
    }
    let mut avg = sum.map(|s| s * inv);

    for i in 0..width {
        if i >= half && i + 1 + half < width {
            for c in 0..CHANNELS {
                sum[c] += sample(i + 1 + half, c) - sample(i - half, c);
                avg[c] = sum[c] * inv;
            }
        }
        let dst = &mut out[i * CHANNELS..(i + 1) * CHANNELS];
        for (d, a) in dst.iter_mut().zip(avg.iter()) {
            *d = *a as u8;
        }
    }
}

/// Swap rows and columns of an interleaved `width x height` buffer.
fn transpose(src: &[u8], width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (width as usize, height as usize);
    let mut out = vec![0u8; src.len()];
    for y in 0..h {
        for x in 0..w {
            let s = (y * w + x) * CHANNELS;
            let d = (x * h + y) * CHANNELS;
            out[d..d + CHANNELS].copy_from_slice(&src[s..s + CHANNELS]);
        }
    }
    out
}
