//! imgedit-test - Regression test harness for imgedit
//!
//! Provides [`RegParams`], which records numbered checks and reports every
//! failure at the end of a test, plus builders for the synthetic images the
//! regression tests run on. Two modes are supported:
//!
//! - **Compare**: run every check (default)
//! - **Display**: also write intermediate images as PNG for inspection
//!
//! # Usage
//!
//! ```ignore
//! use imgedit_test::{RegParams, uniform_image};
//!
//! let mut rp = RegParams::new("blur");
//! let image = uniform_image(16, 16, [255, 10, 20, 30]).unwrap();
//! rp.compare_values(16.0, image.width() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use imgedit_core::color::Argb;
use imgedit_core::{Error, Image, ImageMut};

/// Build an image with every pixel set to `pixel`.
pub fn uniform_image(width: u32, height: u32, pixel: Argb) -> TestResult<Image> {
    Ok(Image::filled(width, height, pixel)?)
}

/// Build an opaque image with distinct ramps in each color channel.
///
/// Red rises left to right, green rises top to bottom and blue is their
/// average, each spanning the full 0..=255 range.
pub fn gradient_image(width: u32, height: u32) -> TestResult<Image> {
    let mut m = ImageMut::new(width, height)?;
    let xs = width.max(2) - 1;
    let ys = height.max(2) - 1;
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / xs) as u8;
            let g = (y * 255 / ys) as u8;
            let b = ((r as u16 + g as u16) / 2) as u8;
            m.set_pixel_unchecked(x, y, [255, r, g, b]);
        }
    }
    Ok(m.into())
}

/// Build an image of `block x block` squares colored from `colors`.
///
/// Block `(bx, by)` takes `colors[(by * blocks_x + bx) % colors.len()]`
/// where `blocks_x = width / block` rounded up.
pub fn block_image(width: u32, height: u32, block: u32, colors: &[Argb]) -> TestResult<Image> {
    if colors.is_empty() || block == 0 {
        return Err(Error::InvalidParameter(format!(
            "block_image needs at least one color and block > 0, got {} colors and block {block}",
            colors.len()
        ))
        .into());
    }
    let mut m = ImageMut::new(width, height)?;
    let blocks_x = width.div_ceil(block);
    for y in 0..height {
        for x in 0..width {
            let index = ((y / block) * blocks_x + x / block) as usize % colors.len();
            m.set_pixel_unchecked(x, y, colors[index]);
        }
    }
    Ok(m.into())
}

/// Get the path to the workspace root
fn workspace_root() -> String {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    // imgedit-test is at crates/imgedit-test, so go up two directories
    format!("{}/../..", manifest_dir)
}

/// Get the path to the regout (regression output) directory
pub fn regout_dir() -> String {
    format!("{}/tests/regout", workspace_root())
}
