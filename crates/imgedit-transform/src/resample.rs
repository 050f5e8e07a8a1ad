//! Resampling strategies
//!
//! Each strategy maps a source image onto an exact `width x height` grid.
//! Blur pre- and post-filtering is applied around these strategies by
//! [`crate::scale`]; the strategies themselves only sample and blend.
//!
//! # Coordinate conventions
//!
//! - Nearest neighbor and box filter map destination index `i` to source
//!   index `i * src / target` with integer arithmetic.
//! - Bilinear and bicubic map `i` to the virtual coordinate
//!   `i / target * (src - 1)`, so the right/bottom neighbour of the floor
//!   sample is always inside the image.

use crate::interp::{bicerp, bilerp};
use crate::{TransformError, TransformResult};
use imgedit_core::color::{Argb, CHANNELS};
use imgedit_core::{Image, ImageMut};
use rayon::prelude::*;

/// A resampling algorithm
pub trait Resampler {
    /// Resample `source` to exactly `width x height` pixels.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidDimensions`] if a target dimension
    /// is 0 or the source is too small for the algorithm.
    fn resample(&self, source: &Image, width: u32, height: u32) -> TransformResult<Image>;
}

/// Nearest-neighbor sampling
#[derive(Debug, Clone, Copy, Default)]
pub struct NearestNeighbor;

/// Bilinear interpolation over the 2x2 neighbourhood
#[derive(Debug, Clone, Copy, Default)]
pub struct Bilinear;

/// Area averaging over non-overlapping windows
///
/// When shrinking along an axis the window is `floor(src / target)` samples
/// wide; when enlarging each destination sample replicates one source
/// sample.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxFilter;

/// Catmull-Rom interpolation over the 4x4 neighbourhood
#[derive(Debug, Clone, Copy, Default)]
pub struct Bicubic;

impl Resampler for NearestNeighbor {
    fn resample(&self, source: &Image, width: u32, height: u32) -> TransformResult<Image> {
        check_target(width, height)?;
        let xs = index_map(width, source.width());
        let ys = index_map(height, source.height());
        render(width, height, |x, y| {
            source.get_pixel_unchecked(xs[x as usize], ys[y as usize])
        })
    }
}

impl Resampler for Bilinear {
    fn resample(&self, source: &Image, width: u32, height: u32) -> TransformResult<Image> {
        check_target(width, height)?;
        check_source(source, "bilinear")?;
        let xs = virtual_map(width, source.width());
        let ys = virtual_map(height, source.height());
        render(width, height, |i, j| {
            let (x, tx) = xs[i as usize];
            let (y, ty) = ys[j as usize];
            bilerp(
                source.get_pixel_unchecked(x, y),
                source.get_pixel_unchecked(x + 1, y),
                source.get_pixel_unchecked(x, y + 1),
                source.get_pixel_unchecked(x + 1, y + 1),
                tx,
                ty,
            )
        })
    }
}

impl Resampler for BoxFilter {
    fn resample(&self, source: &Image, width: u32, height: u32) -> TransformResult<Image> {
        check_target(width, height)?;
        let xs = window_map(width, source.width());
        let ys = window_map(height, source.height());
        render(width, height, |i, j| {
            let (x0, w) = xs[i as usize];
            let (y0, h) = ys[j as usize];
            let mut sum = [0u64; CHANNELS];
            for y in y0..y0 + h {
                let row = source.row(y);
                for x in x0..x0 + w {
                    let px = &row[x as usize * CHANNELS..(x as usize + 1) * CHANNELS];
                    for (s, &v) in sum.iter_mut().zip(px) {
                        *s += v as u64;
                    }
                }
            }
            let n = w as u64 * h as u64;
            sum.map(|s| (s / n).min(255) as u8)
        })
    }
}

impl Resampler for Bicubic {
    fn resample(&self, source: &Image, width: u32, height: u32) -> TransformResult<Image> {
        check_target(width, height)?;
        check_source(source, "bicubic")?;
        let xs = virtual_map(width, source.width());
        let ys = virtual_map(height, source.height());
        render(width, height, |i, j| {
            let (x, tx) = xs[i as usize];
            let (y, ty) = ys[j as usize];
            // outer ring clamped, inner 2x2 in range by construction
            let mut p = [[0u8; CHANNELS]; 16];
            for (r, dy) in (-1..=2i64).enumerate() {
                for (c, dx) in (-1..=2i64).enumerate() {
                    p[r * 4 + c] = source.get_pixel_clamped(x as i64 + dx, y as i64 + dy);
                }
            }
            bicerp(&p, tx, ty)
        })
    }
}

fn check_target(width: u32, height: u32) -> TransformResult<()> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions(format!(
            "target size must be positive, got {width}x{height}"
        )));
    }
    Ok(())
}

fn check_source(source: &Image, method: &str) -> TransformResult<()> {
    if source.width() < 2 || source.height() < 2 {
        return Err(TransformError::InvalidDimensions(format!(
            "{method} needs a source of at least 2x2, got {}x{}",
            source.width(),
            source.height()
        )));
    }
    Ok(())
}

/// Source index for each destination index: `i * src / target`.
fn index_map(target: u32, src: u32) -> Vec<u32> {
    (0..target)
        .map(|i| (i as u64 * src as u64 / target as u64) as u32)
        .collect()
}

/// Floor sample and fractional offset of `i / target * (src - 1)`.
///
/// The floor sample is capped at `src - 2` so its `+1` neighbour exists.
fn virtual_map(target: u32, src: u32) -> Vec<(u32, f64)> {
    let span = (src - 1) as f32;
    (0..target)
        .map(|i| {
            let v = i as f32 / target as f32 * span;
            let x = (v as u32).min(src - 2);
            (x, (v - x as f32) as f64)
        })
        .collect()
}

/// Window start and length along one axis for each destination index.
fn window_map(target: u32, src: u32) -> Vec<(u32, u32)> {
    if target <= src {
        let win = src / target;
        (0..target).map(|i| (i * win, win)).collect()
    } else {
        index_map(target, src).into_iter().map(|x| (x, 1)).collect()
    }
}

/// Build an image by evaluating `f(x, y)` for every pixel, one row per task.
fn render<F>(width: u32, height: u32, f: F) -> TransformResult<Image>
where
    F: Fn(u32, u32) -> Argb + Sync,
{
    let mut out = ImageMut::new(width, height)?;
    let stride = out.stride();
    out.data_mut()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(CHANNELS).enumerate() {
                px.copy_from_slice(&f(x as u32, y as u32));
            }
        });
    Ok(out.into())
}
