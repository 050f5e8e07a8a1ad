//! Pipeline regression test
//!
//! Chains resize, blur, tone mapping and mean filtering through the
//! umbrella crate and round-trips the result through PNG.
//!
//! # Usage
//!
//! ```bash
//! cargo test -p imgedit --test pipeline_reg
//! ```

use imgedit::filter::{blur, equalize, gamma_correction, log_correction, mean_filter};
use imgedit::io::{ImageFormat, read_image_mem, write_image_mem};
use imgedit::transform::{InterpolationMode, resize};
use imgedit_test::{RegParams, gradient_image};

#[test]
fn pipeline_reg() {
    let mut rp = RegParams::new("pipeline");

    let source = gradient_image(120, 90).expect("gradient");

    for mode in InterpolationMode::ALL {
        let token: InterpolationMode = mode.token().parse().expect("token");
        let small = resize(&source, token, 40, 30).expect("resize");
        let blurred = blur(&small, 1.0).expect("blur");
        let smoothed = mean_filter(&blurred, 3).expect("mean");
        let toned = gamma_correction(&smoothed, 0.8).expect("gamma");
        let logged = log_correction(&toned);
        let result = equalize(&logged);
        eprintln!("  {mode}: {}x{}", result.width(), result.height());

        rp.compare_values(40.0, result.width() as f64, 0.0);
        rp.compare_values(30.0, result.height() as f64, 0.0);

        let png = write_image_mem(&result, ImageFormat::Png).expect("encode");
        let decoded = read_image_mem(&png).expect("decode");
        rp.compare_images(&result, &decoded);

        if rp.display() {
            rp.write_image_for_display(&result).expect("write display image");
        }
    }

    assert!(rp.cleanup(), "pipeline regression test failed");
}
