//! Height extraction — turn one RGBA8 pixel into a scalar height in `[0, 1]`.
//!
//! Pure function of (pixel, mode); channels are bounded 0–255 so extraction
//! is total. The two passthrough modes never reach this code on the gradient
//! path: the pipeline short-circuits them before any kernel sampling (for
//! [`HeightMode::HeightmapPassthrough`] the pipeline reuses the `KeyedRgb`
//! mean to republish the height byte).

use std::sync::OnceLock;

use crate::config::HeightMode;

/// Perceptual-luminance weights for [`HeightMode::BiasedRgb`].
///
/// Fixed tuning constants (ITU-R BT.601 luma), not user-configurable.
const LUMA_R: f64 = 0.30;
const LUMA_G: f64 = 0.59;
const LUMA_B: f64 = 0.11;

/// Extract the height of one pixel according to `mode`. Returns `[0, 1]`.
#[inline]
pub fn extract(pixel: [u8; 4], mode: HeightMode) -> f64 {
    let [r, g, b, _a] = pixel;
    match mode {
        HeightMode::KeyedRgb => mean_rgb(r, g, b),
        HeightMode::Red => normalize(r),
        HeightMode::Green => normalize(g),
        HeightMode::Blue => normalize(b),
        HeightMode::BiasedRgb => {
            LUMA_R * normalize(r) + LUMA_G * normalize(g) + LUMA_B * normalize(b)
        }
        HeightMode::MinRgb => normalize(r.min(g).min(b)),
        HeightMode::MaxRgb => normalize(r.max(g).max(b)),
        HeightMode::Colorspace => {
            (srgb_to_linear(r) + srgb_to_linear(g) + srgb_to_linear(b)) / 3.0
        }
        // Grayscale-source convention: the first channel already stores
        // linear height, so only range normalization is applied.
        HeightMode::NormalizeOnly => normalize(r),
        // Passthrough modes bypass gradient work entirely; if a caller asks
        // anyway, fall back to the plain mean so the result stays in range.
        HeightMode::DuDvPassthrough | HeightMode::HeightmapPassthrough => mean_rgb(r, g, b),
    }
}

/// Map a channel byte to `[0, 1]`.
#[inline]
fn normalize(v: u8) -> f64 {
    v as f64 / 255.0
}

#[inline]
fn mean_rgb(r: u8, g: u8, b: u8) -> f64 {
    (r as u64 + g as u64 + b as u64) as f64 / (3.0 * 255.0)
}

/// Decode an sRGB channel byte to linear light (IEC 61966-2-1 transfer).
///
/// A 256-entry lookup table built once via [`OnceLock`] — `powf` per tap
/// would dominate the kernel loop on large images.
#[inline]
fn srgb_to_linear(v: u8) -> f64 {
    static LUT: OnceLock<[f64; 256]> = OnceLock::new();
    LUT.get_or_init(|| {
        std::array::from_fn(|i| {
            let c = i as f64 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        })
    })[v as usize]
}

// --- tests ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_channel_modes_pick_their_channel() {
        let px = [255, 0, 51, 9];
        assert_eq!(extract(px, HeightMode::Red), 1.0);
        assert_eq!(extract(px, HeightMode::Green), 0.0);
        assert!((extract(px, HeightMode::Blue) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn keyed_rgb_is_the_plain_mean() {
        assert!((extract([30, 60, 90, 0], HeightMode::KeyedRgb) - 60.0 / 255.0).abs() < 1e-12);
        // Alpha never contributes.
        assert_eq!(
            extract([30, 60, 90, 0], HeightMode::KeyedRgb),
            extract([30, 60, 90, 255], HeightMode::KeyedRgb)
        );
    }

    #[test]
    fn min_max_modes() {
        let px = [10, 200, 100, 255];
        assert!((extract(px, HeightMode::MinRgb) - 10.0 / 255.0).abs() < 1e-12);
        assert!((extract(px, HeightMode::MaxRgb) - 200.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn biased_rgb_weights_sum_to_one() {
        assert!((LUMA_R + LUMA_G + LUMA_B - 1.0).abs() < 1e-12);
        // So a gray pixel is a fixed point regardless of the weights.
        assert!((extract([77, 77, 77, 0], HeightMode::BiasedRgb) - 77.0 / 255.0).abs() < 1e-12);
        // Green dominates the perceptual weighting.
        assert!(
            extract([0, 128, 0, 0], HeightMode::BiasedRgb)
                > extract([128, 0, 0, 0], HeightMode::BiasedRgb)
        );
    }

    #[test]
    fn colorspace_endpoints_and_monotonicity() {
        assert_eq!(extract([0, 0, 0, 0], HeightMode::Colorspace), 0.0);
        assert!((extract([255, 255, 255, 0], HeightMode::Colorspace) - 1.0).abs() < 1e-9);
        // sRGB decode darkens the midtones relative to linear reading.
        let mid = extract([128, 128, 128, 0], HeightMode::Colorspace);
        assert!(mid < 128.0 / 255.0, "sRGB midgray should decode below 0.5 (got {mid})");
        let mut prev = -1.0;
        for v in 0..=255u8 {
            let h = extract([v, v, v, 0], HeightMode::Colorspace);
            assert!(h >= prev, "transfer must be monotonic (broke at {v})");
            prev = h;
        }
    }

    #[test]
    fn all_modes_stay_in_unit_range() {
        let pixels = [[0, 0, 0, 0], [255, 255, 255, 255], [13, 250, 7, 128]];
        let modes = [
            HeightMode::KeyedRgb,
            HeightMode::Red,
            HeightMode::Green,
            HeightMode::Blue,
            HeightMode::BiasedRgb,
            HeightMode::MinRgb,
            HeightMode::MaxRgb,
            HeightMode::Colorspace,
            HeightMode::NormalizeOnly,
            HeightMode::DuDvPassthrough,
            HeightMode::HeightmapPassthrough,
        ];
        for px in pixels {
            for mode in modes {
                let h = extract(px, mode);
                assert!(
                    (0.0..=1.0).contains(&h),
                    "{mode:?} on {px:?} left the unit range: {h}"
                );
            }
        }
    }
}
