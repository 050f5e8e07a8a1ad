//! Blur regression test
//!
//! Checks the box widths chosen for the Gaussian approximation, stability
//! of flat images and the size limits of the running-sum passes.
//!
//! # Usage
//!
//! ```bash
//! cargo test -p imgedit-filter --test blur_reg
//! ```

use imgedit_filter::{BOX_PASSES, FilterError, blur, box_blur, boxes_for_gaussian};
use imgedit_test::{RegParams, gradient_image, uniform_image};

#[test]
fn blur_reg() {
    let mut rp = RegParams::new("blur");

    // Box widths for the sigmas used by resizing
    for (sigma, expected) in [
        (0.5, [1, 1, 1]),
        (1.0, [1, 3, 3]),
        (1.05, [1, 3, 3]),
        (1.15, [1, 3, 3]),
        (2.0, [3, 5, 5]),
    ] {
        let boxes = boxes_for_gaussian(sigma, BOX_PASSES).expect("boxes");
        eprintln!("  sigma {sigma}: {boxes:?}");
        rp.compare_values(BOX_PASSES as f64, boxes.len() as f64, 0.0);
        for (want, got) in expected.iter().zip(&boxes) {
            rp.compare_values(*want as f64, *got as f64, 0.0);
        }
    }

    // Flat images survive every pass unchanged
    let flat = uniform_image(32, 24, [255, 17, 128, 240]).expect("uniform");
    for sigma in [0.5, 1.0, 2.0] {
        let out = blur(&flat, sigma).expect("blur flat");
        rp.compare_images(&flat, &out);
    }

    // Size and opacity are preserved on a gradient
    let gradient = gradient_image(40, 30).expect("gradient");
    let out = blur(&gradient, 1.5).expect("blur gradient");
    rp.compare_values(40.0, out.width() as f64, 0.0);
    rp.compare_values(30.0, out.height() as f64, 0.0);
    let opaque = out.data().chunks_exact(4).all(|p| p[0] == 255);
    rp.compare_values(1.0, opaque as u8 as f64, 0.0);
    if rp.display() {
        rp.write_image_for_display(&out).expect("write display image");
    }

    assert!(rp.cleanup(), "blur regression test failed");
}

#[test]
fn blur_reg_limits() {
    // [3, 5, 5] does not fit a 4x4 image
    let small = uniform_image(4, 4, [255, 1, 2, 3]).expect("small");
    assert!(matches!(
        blur(&small, 2.0),
        Err(FilterError::KernelTooLarge { size: 5, .. })
    ));

    // [1, 3, 3] fits a 3x3 image exactly
    let tiny = uniform_image(3, 3, [255, 1, 2, 3]).expect("tiny");
    assert_eq!(blur(&tiny, 1.0).expect("tiny blur"), tiny);

    assert!(matches!(
        blur(&small, f64::NAN),
        Err(FilterError::InvalidParameters(_))
    ));
    assert!(box_blur(&small, 0).is_err());
}
