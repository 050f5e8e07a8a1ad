//! Spatial convolution
//!
//! Weighted-sum neighbourhood filtering over the interior of an image. A
//! pixel is rewritten only when the whole kernel fits around it; pixels
//! closer to the border than the kernel reach keep their source values.

use crate::kernel::Kernel;
use crate::{FilterError, FilterResult};
use imgedit_core::Image;
use imgedit_core::color::CHANNELS;
use log::{debug, trace};
use rayon::prelude::*;

/// Apply a `size x size` mean filter.
///
/// Every interior pixel becomes the truncated average of its neighbourhood;
/// the outer `(size - 1) / 2` rows and columns are copied unchanged.
///
/// # Arguments
///
/// * `image` - Input image
/// * `size` - Side length of the square window; must be a positive odd integer
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `size` is 0 or even. A
/// window wider or taller than the image leaves it unchanged.
///
/// # Examples
///
/// ```
/// use imgedit_core::Image;
/// use imgedit_filter::mean_filter;
///
/// let image = Image::filled(5, 5, [255, 12, 34, 56]).unwrap();
/// let out = mean_filter(&image, 3).unwrap();
/// assert_eq!(out, image);
/// ```
pub fn mean_filter(image: &Image, size: u32) -> FilterResult<Image> {
    if size == 0 || size % 2 == 0 {
        return Err(FilterError::InvalidParameters(format!(
            "mean filter size must be a positive odd integer, got {size}"
        )));
    }
    debug!(
        "mean filter {}x{} size={size}",
        image.width(),
        image.height()
    );
    if size > image.width() || size > image.height() {
        trace!("window wider than image, nothing to filter");
        return Ok(image.clone());
    }
    let kernel = Kernel::box_kernel(size)?;
    convolve_interior(image, &kernel)
}

/// Convolve the interior of an image with an arbitrary kernel.
///
/// For each pixel where the kernel fits entirely inside the image, every
/// channel becomes `|sum(w * v) / sum(w)|`, capped at 255 and truncated.
/// All other pixels are copied from the source.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if the kernel weights sum to zero.
pub fn convolve_interior(image: &Image, kernel: &Kernel) -> FilterResult<Image> {
    let ksum = kernel.sum();
    if ksum == 0.0 {
        return Err(FilterError::InvalidKernel(
            "kernel weights sum to zero".into(),
        ));
    }

    let (w, h) = (image.width(), image.height());
    let (kw, kh) = (kernel.width(), kernel.height());
    let (cx, cy) = (kernel.center_x(), kernel.center_y());
    let x_end = w.saturating_sub(kw - 1 - cx);
    let y_end = h.saturating_sub(kh - 1 - cy);

    let mut out = image.to_mut();
    if cx >= x_end || cy >= y_end {
        return Ok(out.into());
    }

    let stride = out.stride();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .filter(|(y, _)| (cy..y_end).contains(&(*y as u32)))
        .for_each(|(y, row)| {
            let y = y as u32;
            for x in cx..x_end {
                let mut acc = [0f32; CHANNELS];
                for ky in 0..kh {
                    let src = image.row(y + ky - cy);
                    for kx in 0..kw {
                        let weight = kernel.data()[(ky * kw + kx) as usize];
                        let offset = (x + kx - cx) as usize * CHANNELS;
                        for (a, &v) in acc.iter_mut().zip(&src[offset..offset + CHANNELS]) {
                            *a += v as f32 * weight;
                        }
                    }
                }
                let dst = &mut row[x as usize * CHANNELS..(x as usize + 1) * CHANNELS];
                for (d, a) in dst.iter_mut().zip(acc.iter()) {
                    *d = (a / ksum).abs().min(255.0) as u8;
                }
            }
        });

    Ok(out.into())
}
