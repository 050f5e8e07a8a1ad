//! Per-channel interpolation kernels
//!
//! All blends work channel by channel in `f64` and truncate toward zero.

use imgedit_core::color::{Argb, CHANNELS, clamp_channel};

/// Linear blend from `a` (t = 0) to `b` (t = 1).
#[inline]
pub fn lerp(a: Argb, b: Argb, t: f64) -> Argb {
    let mut out = [0u8; CHANNELS];
    for c in 0..CHANNELS {
        let (a, b) = (a[c] as f64, b[c] as f64);
        out[c] = clamp_channel((a + t * (b - a)) as i32);
    }
    out
}

/// Bilinear blend of a 2x2 neighbourhood.
///
/// `top_left`/`top_right` are blended with `tx`, then the two rows are
/// blended with `ty`.
#[inline]
pub fn bilerp(
    top_left: Argb,
    top_right: Argb,
    bottom_left: Argb,
    bottom_right: Argb,
    tx: f64,
    ty: f64,
) -> Argb {
    lerp(lerp(top_left, top_right, tx), lerp(bottom_left, bottom_right, tx), ty)
}

/// Catmull-Rom cubic blend between `b` (t = 0) and `c` (t = 1), using `a`
/// and `d` as the outer support samples.
///
/// Overshoot is clamped into [0, 255].
#[inline]
pub fn cerp(a: Argb, b: Argb, c: Argb, d: Argb, t: f64) -> Argb {
    let mut out = [0u8; CHANNELS];
    for ch in 0..CHANNELS {
        let (a, b, c, d) = (a[ch] as f64, b[ch] as f64, c[ch] as f64, d[ch] as f64);
        let v = b
            + 0.5
                * t
                * (c - a + t * (2.0 * a - 5.0 * b + 4.0 * c - d + t * (3.0 * (b - c) + d - a)));
        out[ch] = clamp_channel(v as i32);
    }
    out
}

/// Bicubic blend of a 4x4 neighbourhood given in row-major order.
///
/// Each row is blended with `tx`, then the four row results with `ty`.
#[inline]
pub fn bicerp(p: &[Argb; 16], tx: f64, ty: f64) -> Argb {
    cerp(
        cerp(p[0], p[1], p[2], p[3], tx),
        cerp(p[4], p[5], p[6], p[7], tx),
        cerp(p[8], p[9], p[10], p[11], tx),
        cerp(p[12], p[13], p[14], p[15], tx),
        ty,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_truncates() {
        assert_eq!(lerp([0, 0, 10, 255], [255, 3, 20, 0], 0.5), [127, 1, 15, 127]);
        assert_eq!(lerp([9; 4], [200; 4], 0.0), [9; 4]);
        assert_eq!(lerp([9; 4], [200; 4], 1.0), [200; 4]);
    }

    #[test]
    fn test_bilerp_center() {
        let p = bilerp([0; 4], [100; 4], [100; 4], [200; 4], 0.5, 0.5);
        assert_eq!(p, [100; 4]);
    }

    #[test]
    fn test_cerp_endpoints() {
        let (a, b, c, d) = ([10; 4], [20; 4], [40; 4], [80; 4]);
        assert_eq!(cerp(a, b, c, d, 0.0), b);
        assert_eq!(cerp(a, b, c, d, 1.0), c);
    }

    #[test]
    fn test_cerp_linear_data_is_linear() {
        // collinear samples reproduce linear interpolation
        let v = cerp([0; 4], [10; 4], [20; 4], [30; 4], 0.5);
        assert_eq!(v, [15; 4]);
    }

    #[test]
    fn test_cerp_overshoot_clamped() {
        // 255 + 0.25 * (255 + 0.5 * -255) = 286.875
        let v = cerp([0; 4], [255; 4], [255; 4], [0; 4], 0.5);
        assert_eq!(v, [255; 4]);
        // 0 + 0.25 * (0 + 0.5 * (1530 - 0.5 * 1020)) = 127.5
        let v = cerp([255; 4], [0; 4], [255; 4], [0; 4], 0.5);
        assert_eq!(v, [127; 4]);
    }

    #[test]
    fn test_bicerp_uniform() {
        let p = [[7, 8, 9, 10]; 16];
        assert_eq!(bicerp(&p, 0.3, 0.8), [7, 8, 9, 10]);
    }
}
