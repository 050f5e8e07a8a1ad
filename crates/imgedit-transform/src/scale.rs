//! Image resizing
//!
//! [`resize`] selects a [`Resampler`] for the requested
//! [`InterpolationMode`] and wraps it with the shared pre- and
//! post-processing steps:
//!
//! | Mode | Pre-processing | Resampler | Post-processing |
//! |---|---|---|---|
//! | `NearestNeighbor` | | nearest | |
//! | `Bilinear`, `wScale >= 0.5` | | bilinear | blur `sigma = wScale` if `wScale < 1` |
//! | `Bilinear`, `wScale < 0.5` | | box filter | |
//! | `Bicubic` | box x4 if `wScale < 0.25` | bicubic | |
//! | `BicubicSmoother` | box x4 if `wScale < 0.25` | bicubic | blur `sigma = 1.15` |
//! | `BicubicSharper` | box x4 if `wScale < 0.25` | bicubic | blur `sigma = 1.05` |
//!
//! `wScale` is `target_width / source_width`. Only the horizontal ratio
//! drives these decisions. The thresholds and sigmas come from
//! [`ResizeOptions`].

use crate::resample::{Bicubic, Bilinear, BoxFilter, NearestNeighbor, Resampler};
use crate::{TransformError, TransformResult};
use imgedit_core::Image;
use imgedit_filter::blur;
use log::{debug, trace};
use std::fmt;
use std::str::FromStr;

/// Interpolation mode for [`resize`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InterpolationMode {
    /// Nearest-neighbor sampling, no blending
    NearestNeighbor,
    /// Bilinear blending, box filtering for strong reductions
    Bilinear,
    /// Catmull-Rom bicubic interpolation
    Bicubic,
    /// Bicubic followed by a sigma 1.15 blur
    BicubicSmoother,
    /// Bicubic followed by a sigma 1.05 blur
    ///
    /// Sharper only relative to [`InterpolationMode::BicubicSmoother`].
    BicubicSharper,
}

impl InterpolationMode {
    /// All modes, in declaration order
    pub const ALL: [InterpolationMode; 5] = [
        Self::NearestNeighbor,
        Self::Bilinear,
        Self::Bicubic,
        Self::BicubicSmoother,
        Self::BicubicSharper,
    ];

    /// Long name of the mode, as printed by `Display`
    pub fn name(self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nearest-neighbor",
            Self::Bilinear => "bilinear",
            Self::Bicubic => "bicubic",
            Self::BicubicSmoother => "bicubic-smoother",
            Self::BicubicSharper => "bicubic-sharper",
        }
    }

    /// Short command token of the mode
    pub fn token(self) -> &'static str {
        match self {
            Self::NearestNeighbor => "nn",
            Self::Bilinear => "bl",
            Self::Bicubic => "bc",
            Self::BicubicSmoother => "bcsmoother",
            Self::BicubicSharper => "bcsharper",
        }
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for InterpolationMode {
    type Err = TransformError;

    /// Parse a short token (`nn`, `bl`, `bc`, `bcsmoother`, `bcsharper`) or
    /// a long name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|mode| key == mode.token() || key == mode.name())
            .ok_or_else(|| TransformError::UnknownInterpolation(s.to_string()))
    }
}

/// Tuning for the pre- and post-processing around the resamplers
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeOptions {
    /// Smallest `wScale` resized with bilinear; below it the box filter is used
    pub bilinear_min_scale: f64,
    /// Bicubic modes box-enlarge the source first when `wScale` is below this
    pub bicubic_prescale_below: f64,
    /// Enlargement factor of the bicubic pre-scale
    pub bicubic_prescale_factor: u32,
    /// Blur sigma applied after [`InterpolationMode::BicubicSmoother`]
    pub smoother_sigma: f64,
    /// Blur sigma applied after [`InterpolationMode::BicubicSharper`]
    pub sharper_sigma: f64,
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            bilinear_min_scale: 0.5,
            bicubic_prescale_below: 0.25,
            bicubic_prescale_factor: 4,
            smoother_sigma: 1.15,
            sharper_sigma: 1.05,
        }
    }
}

impl ResizeOptions {
    /// Check that thresholds and sigmas are positive and the factor is >= 1.
    pub fn validate(&self) -> TransformResult<()> {
        let positive = [
            ("bilinear_min_scale", self.bilinear_min_scale),
            ("bicubic_prescale_below", self.bicubic_prescale_below),
            ("smoother_sigma", self.smoother_sigma),
            ("sharper_sigma", self.sharper_sigma),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(TransformError::InvalidScaleFactor(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if self.bicubic_prescale_factor == 0 {
            return Err(TransformError::InvalidScaleFactor(
                "bicubic_prescale_factor must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Resize an image to exactly `width x height` with the default options.
///
/// # Arguments
///
/// * `source` - Input image
/// * `mode` - Interpolation mode
/// * `width` - Target width, must be > 0
/// * `height` - Target height, must be > 0
///
/// # Errors
///
/// Returns [`TransformError::InvalidDimensions`] for a zero target size or a
/// source too small for the mode (bilinear and bicubic need 2x2), and
/// [`TransformError::Filter`] if the post-filter blur does not fit the
/// output.
///
/// # Examples
///
/// ```
/// use imgedit_core::Image;
/// use imgedit_transform::{InterpolationMode, resize};
///
/// let image = Image::filled(8, 6, [255, 1, 2, 3]).unwrap();
/// let out = resize(&image, InterpolationMode::NearestNeighbor, 4, 3).unwrap();
/// assert_eq!((out.width(), out.height()), (4, 3));
/// ```
pub fn resize(
    source: &Image,
    mode: InterpolationMode,
    width: u32,
    height: u32,
) -> TransformResult<Image> {
    resize_with_options(source, mode, width, height, &ResizeOptions::default())
}

/// Resize an image to exactly `width x height` with explicit options.
///
/// See [`resize`] for the errors. Invalid options are reported as
/// [`TransformError::InvalidScaleFactor`].
pub fn resize_with_options(
    source: &Image,
    mode: InterpolationMode,
    width: u32,
    height: u32,
    options: &ResizeOptions,
) -> TransformResult<Image> {
    options.validate()?;
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidDimensions(format!(
            "target size must be positive, got {width}x{height}"
        )));
    }

    let w_scale = width as f64 / source.width() as f64;
    debug!(
        "resize {}x{} -> {width}x{height} mode={mode} wScale={w_scale:.4}",
        source.width(),
        source.height()
    );

    match mode {
        InterpolationMode::NearestNeighbor => NearestNeighbor.resample(source, width, height),
        InterpolationMode::Bilinear => {
            if w_scale >= options.bilinear_min_scale {
                let out = Bilinear.resample(source, width, height)?;
                if w_scale < 1.0 {
                    trace!("bilinear anti-alias blur sigma={w_scale}");
                    return Ok(blur(&out, w_scale)?);
                }
                Ok(out)
            } else {
                trace!("bilinear below {}, using box filter", options.bilinear_min_scale);
                BoxFilter.resample(source, width, height)
            }
        }
        InterpolationMode::Bicubic => bicubic_resize(source, w_scale, width, height, options),
        InterpolationMode::BicubicSmoother => {
            let out = bicubic_resize(source, w_scale, width, height, options)?;
            Ok(blur(&out, options.smoother_sigma)?)
        }
        InterpolationMode::BicubicSharper => {
            let out = bicubic_resize(source, w_scale, width, height, options)?;
            Ok(blur(&out, options.sharper_sigma)?)
        }
    }
}

/// Resize by area averaging over non-overlapping windows.
///
/// Shrinking averages `floor(src / target)` samples per axis; enlarging
/// replicates source samples.
pub fn box_filter_resize(source: &Image, width: u32, height: u32) -> TransformResult<Image> {
    BoxFilter.resample(source, width, height)
}

fn bicubic_resize(
    source: &Image,
    w_scale: f64,
    width: u32,
    height: u32,
    options: &ResizeOptions,
) -> TransformResult<Image> {
    if w_scale < options.bicubic_prescale_below {
        let factor = options.bicubic_prescale_factor;
        let (pw, ph) = source
            .width()
            .checked_mul(factor)
            .zip(source.height().checked_mul(factor))
            .ok_or_else(|| {
                TransformError::InvalidDimensions(format!(
                    "pre-scaling {}x{} by {factor} overflows",
                    source.width(),
                    source.height()
                ))
            })?;
        trace!("bicubic pre-scale to {pw}x{ph}");
        let enlarged = BoxFilter.resample(source, pw, ph)?;
        return Bicubic.resample(&enlarged, width, height);
    }
    Bicubic.resample(source, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use imgedit_core::ImageMut;

    fn ramp(w: u32, h: u32) -> Image {
        let mut m = ImageMut::new(w, h).unwrap();
        for y in 0..h {
            for x in 0..w {
                let v = ((x * 7 + y * 13) % 256) as u8;
                m.set_pixel_unchecked(x, y, [255, v, 255 - v, v / 3]);
            }
        }
        m.into()
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("nn".parse::<InterpolationMode>().unwrap(), InterpolationMode::NearestNeighbor);
        assert_eq!(" BL ".parse::<InterpolationMode>().unwrap(), InterpolationMode::Bilinear);
        assert_eq!("bc".parse::<InterpolationMode>().unwrap(), InterpolationMode::Bicubic);
        assert_eq!(
            "bcsmoother".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::BicubicSmoother
        );
        assert_eq!(
            "BicUbic-Sharper".parse::<InterpolationMode>().unwrap(),
            InterpolationMode::BicubicSharper
        );
    }

    #[test]
    fn test_parse_unknown() {
        assert!(matches!(
            "lanczos".parse::<InterpolationMode>(),
            Err(TransformError::UnknownInterpolation(t)) if t == "lanczos"
        ));
    }

    #[test]
    fn test_display_roundtrips_through_parse() {
        for mode in InterpolationMode::ALL {
            assert_eq!(mode.to_string().parse::<InterpolationMode>().unwrap(), mode);
        }
        assert_eq!(InterpolationMode::NearestNeighbor.to_string(), "nearest-neighbor");
    }

    #[test]
    fn test_options_validate() {
        assert!(ResizeOptions::default().validate().is_ok());
        let bad = ResizeOptions {
            smoother_sigma: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            bad.validate(),
            Err(TransformError::InvalidScaleFactor(_))
        ));
        let bad = ResizeOptions {
            bicubic_prescale_factor: 0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_every_mode_hits_target_size() {
        let src = ramp(24, 18);
        for mode in InterpolationMode::ALL {
            for (w, h) in [(24, 18), (48, 30), (13, 11), (5, 4), (4, 5)] {
                let out = resize(&src, mode, w, h)
                    .unwrap_or_else(|e| panic!("{mode} {w}x{h}: {e}"));
                assert_eq!((out.width(), out.height()), (w, h), "{mode}");
            }
        }
    }

    #[test]
    fn test_bilinear_strong_reduction_uses_box_filter() {
        let src = ramp(40, 40);
        let out = resize(&src, InterpolationMode::Bilinear, 10, 10).unwrap();
        let expected = box_filter_resize(&src, 10, 10).unwrap();
        assert_eq!(out, expected);
    }

    #[test]
    fn test_bilinear_enlarge_has_no_blur() {
        let src = ramp(6, 6);
        let out = resize(&src, InterpolationMode::Bilinear, 12, 12).unwrap();
        let plain = Bilinear.resample(&src, 12, 12).unwrap();
        assert_eq!(out, plain);
    }

    #[test]
    fn test_bicubic_source_size_and_prescale() {
        // no pre-scale at wScale 1, so a 1x1 source is too small
        let src = Image::filled(1, 1, [255, 9, 9, 9]).unwrap();
        assert!(resize(&src, InterpolationMode::Bicubic, 1, 1).is_err());
        let big = Image::filled(20, 20, [255, 9, 9, 9]).unwrap();
        let out = resize(&big, InterpolationMode::Bicubic, 3, 3).unwrap();
        assert!(out.data().chunks_exact(4).all(|p| p == [255, 9, 9, 9]));
    }

    #[test]
    fn test_zero_target() {
        let src = ramp(4, 4);
        assert!(matches!(
            resize(&src, InterpolationMode::Bicubic, 0, 4),
            Err(TransformError::InvalidDimensions(_))
        ));
    }

    #[test]
    fn test_smoother_output_too_small_for_blur() {
        let src = ramp(8, 8);
        assert!(matches!(
            resize(&src, InterpolationMode::BicubicSmoother, 2, 2),
            Err(TransformError::Filter(_))
        ));
    }
}
