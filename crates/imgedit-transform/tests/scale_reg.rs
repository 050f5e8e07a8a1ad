//! Scale regression test
//!
//! Resizes synthetic images with every interpolation mode and checks
//! output sizes, exact block averages and stability on flat input.
//!
//! # Usage
//!
//! ```bash
//! cargo test -p imgedit-transform --test scale_reg
//! ```

use imgedit_filter::blur;
use imgedit_test::{RegParams, block_image, gradient_image, uniform_image};
use imgedit_transform::{
    Bicubic, Bilinear, BoxFilter, InterpolationMode, Resampler, box_filter_resize, resize,
};

const BLOCK_COLORS: [[u8; 4]; 4] = [
    [255, 200, 0, 0],
    [255, 0, 200, 0],
    [255, 0, 0, 200],
    [128, 60, 90, 120],
];

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    let gradient = gradient_image(40, 30).expect("gradient");
    eprintln!("Gradient: {}x{}", gradient.width(), gradient.height());

    // Nearest neighbor at the source size is an exact copy
    let same = resize(&gradient, InterpolationMode::NearestNeighbor, 40, 30).expect("nn identity");
    rp.compare_images(&gradient, &same);

    // Nearest neighbor 2x enlargement replicates each source pixel
    let doubled = resize(&gradient, InterpolationMode::NearestNeighbor, 80, 60).expect("nn 2x");
    for (x, y) in [(0, 0), (13, 7), (39, 29)] {
        let src = gradient.get_pixel(x, y).expect("src pixel");
        let dst = doubled.get_pixel(2 * x + 1, 2 * y + 1).expect("dst pixel");
        rp.compare_values(src[1] as f64, dst[1] as f64, 0.0);
        rp.compare_values(src[2] as f64, dst[2] as f64, 0.0);
    }

    // Every mode returns exactly the requested size
    for mode in InterpolationMode::ALL {
        for (w, h) in [(80, 60), (20, 15), (7, 5), (5, 33)] {
            let out = resize(&gradient, mode, w, h).expect("resize");
            eprintln!("  {mode}: {w}x{h} -> {}x{}", out.width(), out.height());
            rp.compare_values(w as f64, out.width() as f64, 0.0);
            rp.compare_values(h as f64, out.height() as f64, 0.0);
            if rp.display() {
                rp.write_image_for_display(&out).expect("write display image");
            }
        }
    }

    assert!(rp.cleanup(), "scale regression test failed");
}

#[test]
fn scale_reg_block_average() {
    let mut rp = RegParams::new("scale_block");

    // 2x2 blocks reduced by 2 give one output pixel per block
    let blocks = block_image(4, 4, 2, &BLOCK_COLORS).expect("blocks");
    let reduced = box_filter_resize(&blocks, 2, 2).expect("box filter");
    for (i, (x, y)) in [(0, 0), (1, 0), (0, 1), (1, 1)].into_iter().enumerate() {
        let px = reduced.get_pixel(x, y).expect("pixel");
        for c in 0..4 {
            rp.compare_values(BLOCK_COLORS[i][c] as f64, px[c] as f64, 0.0);
        }
    }

    // Bilinear below half scale falls back to the box filter
    let big = block_image(8, 8, 4, &BLOCK_COLORS).expect("big blocks");
    let quarter = resize(&big, InterpolationMode::Bilinear, 2, 2).expect("bilinear 1/4");
    rp.compare_images(&reduced, &quarter);

    // Box filter enlargement replicates the blocks
    let enlarged = box_filter_resize(&blocks, 8, 8).expect("box enlarge");
    rp.compare_images(&big, &enlarged);

    assert!(rp.cleanup(), "scale block regression test failed");
}

#[test]
fn scale_reg_uniform() {
    let mut rp = RegParams::new("scale_uniform");

    let color = [255, 37, 142, 219];
    let flat = uniform_image(20, 16, color).expect("uniform");
    for mode in InterpolationMode::ALL {
        for (w, h) in [(30, 24), (10, 8), (4, 4)] {
            let out = resize(&flat, mode, w, h).expect("resize");
            let expected = uniform_image(w, h, color).expect("expected");
            eprintln!("  {mode}: uniform {w}x{h}");
            rp.compare_images(&expected, &out);
        }
    }

    assert!(rp.cleanup(), "scale uniform regression test failed");
}

#[test]
fn scale_reg_gradient_corners() {
    let mut rp = RegParams::new("scale_corners");

    // Enlargement samples the top-left corner exactly
    let gradient = gradient_image(16, 12).expect("gradient");
    for mode in [InterpolationMode::Bilinear, InterpolationMode::Bicubic] {
        let out = resize(&gradient, mode, 32, 24).expect("enlarge");
        let corner = out.get_pixel(0, 0).expect("corner");
        rp.compare_values(0.0, corner[1] as f64, 0.0);
        rp.compare_values(0.0, corner[2] as f64, 0.0);

        // red never decreases along the first row
        let row: Vec<u8> = (0..out.width())
            .map(|x| out.get_pixel(x, 0).expect("pixel")[1])
            .collect();
        let monotone = row.windows(2).all(|p| p[0] <= p[1]);
        rp.compare_values(1.0, monotone as u8 as f64, 0.0);
    }

    assert!(rp.cleanup(), "scale corner regression test failed");
}

#[test]
fn scale_reg_filter_stages() {
    let mut rp = RegParams::new("scale_stages");

    let src = block_image(30, 24, 3, &BLOCK_COLORS).expect("blocks");

    // Bilinear between 0.5 and 1 blurs with sigma = wScale
    let plain = Bilinear.resample(&src, 20, 16).expect("bilinear");
    let expected = blur(&plain, 20.0 / 30.0).expect("anti-alias blur");
    let out = resize(&src, InterpolationMode::Bilinear, 20, 16).expect("resize bl");
    rp.compare_images(&expected, &out);
    rp.compare_values(1.0, (out != plain) as u8 as f64, 0.0);

    // Smoother and sharper blur the bicubic result
    let plain = Bicubic.resample(&src, 24, 18).expect("bicubic");
    for (mode, sigma) in [
        (InterpolationMode::BicubicSmoother, 1.15),
        (InterpolationMode::BicubicSharper, 1.05),
    ] {
        let expected = blur(&plain, sigma).expect("post blur");
        let out = resize(&src, mode, 24, 18).expect("resize");
        eprintln!("  {mode}: post blur sigma {sigma}");
        rp.compare_images(&expected, &out);
        rp.compare_values(1.0, (out != plain) as u8 as f64, 0.0);
    }
    let out = resize(&src, InterpolationMode::Bicubic, 24, 18).expect("resize bc");
    rp.compare_images(&plain, &out);

    // Bicubic below a quarter scale box-enlarges the source by 4 first
    let src = block_image(40, 32, 4, &BLOCK_COLORS).expect("big blocks");
    let enlarged = BoxFilter.resample(&src, 160, 128).expect("pre-scale");
    let expected = Bicubic.resample(&enlarged, 8, 6).expect("bicubic");
    let out = resize(&src, InterpolationMode::Bicubic, 8, 6).expect("resize bc 1/5");
    rp.compare_images(&expected, &out);
    let direct = Bicubic.resample(&src, 8, 6).expect("direct");
    rp.compare_values(1.0, (out != direct) as u8 as f64, 0.0);

    assert!(rp.cleanup(), "scale filter stage regression test failed");
}

#[test]
fn scale_reg_large_reduction() {
    let mut rp = RegParams::new("scale_large");

    // Window sums of 4200 x 4200 samples exceed 32 bits
    let color = [255, 255, 200, 7];
    let flat = uniform_image(4200, 4200, color).expect("large");
    let expected = uniform_image(1, 1, color).expect("expected");
    rp.compare_images(&expected, &box_filter_resize(&flat, 1, 1).expect("box 1x1"));
    rp.compare_images(
        &expected,
        &resize(&flat, InterpolationMode::Bilinear, 1, 1).expect("bilinear 1x1"),
    );

    assert!(rp.cleanup(), "scale large reduction regression test failed");
}
