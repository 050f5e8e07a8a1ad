//! Convolution kernels
//!
//! Defines the 2D weight matrix used by the spatial filters and the
//! box-size solver used by the Gaussian blur approximation.

use crate::{FilterError, FilterResult};

/// A 2D convolution kernel
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel {
    /// Width of the kernel
    width: u32,
    /// Height of the kernel
    height: u32,
    /// X coordinate of the center
    cx: u32,
    /// Y coordinate of the center
    cy: u32,
    /// Kernel data (row-major order)
    data: Vec<f32>,
}

impl Kernel {
    /// Create a zero kernel with the given dimensions.
    ///
    /// The center is placed at `((width - 1) / 2, (height - 1) / 2)`.
    pub fn new(width: u32, height: u32) -> FilterResult<Self> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "kernel dimensions must be positive: {width}x{height}"
            )));
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .filter(|n| {
                n.checked_mul(size_of::<f32>())
                    .is_some_and(|bytes| bytes <= isize::MAX as usize)
            })
            .ok_or_else(|| {
                FilterError::InvalidKernel(format!("kernel {width}x{height} is too large"))
            })?;
        Ok(Kernel {
            width,
            height,
            cx: (width - 1) / 2,
            cy: (height - 1) / 2,
            data: vec![0.0; len],
        })
    }

    /// Create a kernel from a row-major slice of weights.
    pub fn from_slice(width: u32, height: u32, data: &[f32]) -> FilterResult<Self> {
        let mut kernel = Self::new(width, height)?;
        if data.len() != kernel.data.len() {
            return Err(FilterError::InvalidKernel(format!(
                "expected {} weights for a {width}x{height} kernel, got {}",
                kernel.data.len(),
                data.len()
            )));
        }
        kernel.data.copy_from_slice(data);
        Ok(kernel)
    }

    /// Create a uniform `size x size` box kernel with every weight 1.
    ///
    /// The weights are not normalized; convolution divides by [`Kernel::sum`].
    /// `size` must be odd so that the kernel has a center pixel.
    pub fn box_kernel(size: u32) -> FilterResult<Self> {
        if size == 0 || size % 2 == 0 {
            return Err(FilterError::InvalidKernel(format!(
                "box kernel size must be a positive odd integer, got {size}"
            )));
        }
        let mut kernel = Self::new(size, size)?;
        kernel.data.fill(1.0);
        Ok(kernel)
    }

    /// Get the kernel width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the kernel height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the center X coordinate.
    #[inline]
    pub fn center_x(&self) -> u32 {
        self.cx
    }

    /// Get the center Y coordinate.
    #[inline]
    pub fn center_y(&self) -> u32 {
        self.cy
    }

    /// Get the kernel data.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Get a value at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<f32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Get the sum of all kernel values.
    pub fn sum(&self) -> f32 {
        self.data.iter().sum()
    }
}

/// Compute `n` box sizes whose successive box blurs approximate a Gaussian
/// of standard deviation `sigma`.
///
/// The ideal averaging width `sqrt(12 sigma^2 / n + 1)` is bracketed by the
/// odd widths `wl <= w < wu = wl + 2`; the first `m` passes use `wl` and the
/// rest use `wu`, with `m` chosen so the summed variances match `sigma^2`.
/// `m` is rounded to nearest with ties going down.
///
/// # Errors
///
/// Returns [`FilterError::InvalidParameters`] if `sigma` is not a positive
/// finite number or `n` is 0.
///
/// # Example
///
/// ```
/// use imgedit_filter::boxes_for_gaussian;
///
/// assert_eq!(boxes_for_gaussian(1.0, 3).unwrap(), vec![1, 3, 3]);
/// ```
pub fn boxes_for_gaussian(sigma: f64, n: u32) -> FilterResult<Vec<u32>> {
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(FilterError::InvalidParameters(format!(
            "sigma must be positive, got {sigma}"
        )));
    }
    if n == 0 {
        return Err(FilterError::InvalidParameters(
            "number of boxes must be >= 1".into(),
        ));
    }

    let nf = n as f64;
    let variance = 12.0 * sigma * sigma;
    let w_ideal = (variance / nf + 1.0).sqrt();
    let mut wl = w_ideal.floor();
    if wl % 2.0 == 0.0 {
        wl -= 1.0;
    }
    let wu = wl + 2.0;

    let m_ideal = (variance - nf * wl * wl - 4.0 * nf * wl - 3.0 * nf) / (-4.0 * wl - 4.0);
    let m = (m_ideal - 0.5).ceil();

    Ok((0..n)
        .map(|i| if (i as f64) < m { wl as u32 } else { wu as u32 })
        .collect())
}
