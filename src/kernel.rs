//! Gradient filter bank — discrete derivative kernels over the height field.
//!
//! Every supported kernel factors into a smoothing vector applied across the
//! derivative axis and a derivative vector along it (`smooth ⊗ deriv`), so a
//! single accumulation routine serves all nine filter kinds; the tables below
//! are the only per-kind data. The y-kernel is the transpose of the x-kernel.
//!
//! Accumulated sums are divided by the kernel's total weight magnitude
//! (`sum(smooth) * sum(|deriv|)`), which makes a unit height step produce the
//! same gradient magnitude under every kernel — filter choice is a smoothing
//! decision, not a brightness one.

use crate::config::{ConversionConfig, FilterKind};
use crate::height;
use crate::sampling;

/// Separable kernel pair: `smooth` across the derivative axis, `deriv` along
/// it. Signed integer weights, immutable static data.
#[derive(Clone, Copy, Debug)]
pub struct Kernel {
    pub smooth: &'static [i32],
    pub deriv: &'static [i32],
}

const CENTER: [i32; 1] = [1];
const BINOMIAL_3: [i32; 3] = [1, 2, 1];
const BINOMIAL_5: [i32; 5] = [1, 4, 6, 4, 1];
const FLAT_3: [i32; 3] = [1, 1, 1];
const FLAT_5: [i32; 5] = [1, 1, 1, 1, 1];
const FLAT_7: [i32; 7] = [1, 1, 1, 1, 1, 1, 1];
const FLAT_9: [i32; 9] = [1, 1, 1, 1, 1, 1, 1, 1, 1];
const RAMP_3: [i32; 3] = [-1, 0, 1];
const RAMP_5: [i32; 5] = [-2, -1, 0, 1, 2];
const RAMP_7: [i32; 7] = [-3, -2, -1, 0, 1, 2, 3];
const RAMP_9: [i32; 9] = [-4, -3, -2, -1, 0, 1, 2, 3, 4];
/// `[-1, 0, 1]` convolved with `[1, 2, 1]` — the separable 5-tap Sobel ramp.
const SOBEL_RAMP_5: [i32; 5] = [-1, -2, 0, 2, 1];

impl FilterKind {
    /// Weight table for this filter kind.
    pub fn kernel(self) -> Kernel {
        match self {
            FilterKind::None => Kernel {
                smooth: &CENTER,
                deriv: &RAMP_3,
            },
            FilterKind::Sobel3x3 => Kernel {
                smooth: &BINOMIAL_3,
                deriv: &RAMP_3,
            },
            FilterKind::Sobel5x5 => Kernel {
                smooth: &BINOMIAL_5,
                deriv: &SOBEL_RAMP_5,
            },
            FilterKind::Prewitt3x3 => Kernel {
                smooth: &FLAT_3,
                deriv: &RAMP_3,
            },
            FilterKind::Prewitt5x5 => Kernel {
                smooth: &FLAT_5,
                deriv: &SOBEL_RAMP_5,
            },
            FilterKind::Box3x3 => Kernel {
                smooth: &FLAT_3,
                deriv: &RAMP_3,
            },
            FilterKind::Box5x5 => Kernel {
                smooth: &FLAT_5,
                deriv: &RAMP_5,
            },
            FilterKind::Box7x7 => Kernel {
                smooth: &FLAT_7,
                deriv: &RAMP_7,
            },
            FilterKind::Box9x9 => Kernel {
                smooth: &FLAT_9,
                deriv: &RAMP_9,
            },
        }
    }
}

impl Kernel {
    /// Total weight magnitude of the 2-D kernel: `sum(smooth) * sum(|deriv|)`.
    fn norm(&self) -> f64 {
        let s: i32 = self.smooth.iter().sum();
        let d: i32 = self.deriv.iter().map(|w| w.abs()).sum();
        (s * d) as f64
    }
}

/// Estimate the height gradient `(dx, dy)` at `(x, y)`.
///
/// Each tap is resolved through [`sampling::resolve`] (so kernels overhanging
/// the border follow the configured wrap/clamp policy) and extracted through
/// [`height::extract`]. Kernels wider than a tiny image alias through that
/// policy — accepted behavior, not an error.
pub fn gradient(
    input: &[u8],
    width: u32,
    height: u32,
    x: u32,
    y: u32,
    config: &ConversionConfig,
) -> (f64, f64) {
    let kernel = config.filter.kernel();
    let dx = directional(input, width, height, x, y, config, kernel, Axis::X);
    let dy = directional(input, width, height, x, y, config, kernel, Axis::Y);
    (dx, dy)
}

#[derive(Clone, Copy)]
enum Axis {
    X,
    Y,
}

/// One directional derivative: `deriv` runs along `axis`, `smooth` across it.
fn directional(
    input: &[u8],
    width: u32,
    height_px: u32,
    x: u32,
    y: u32,
    config: &ConversionConfig,
    kernel: Kernel,
    axis: Axis,
) -> f64 {
    let d_half = (kernel.deriv.len() / 2) as i64;
    let s_half = (kernel.smooth.len() / 2) as i64;

    let mut acc = 0.0;
    for (j, &s) in kernel.smooth.iter().enumerate() {
        let s_off = j as i64 - s_half;
        for (i, &d) in kernel.deriv.iter().enumerate() {
            let w = s * d;
            if w == 0 {
                continue;
            }
            let d_off = i as i64 - d_half;
            let (ox, oy) = match axis {
                Axis::X => (d_off, s_off),
                Axis::Y => (s_off, d_off),
            };
            let (sx, sy) = sampling::resolve(
                x as i64 + ox,
                y as i64 + oy,
                width,
                height_px,
                config.wrap_edges,
            );
            let idx = (sy as usize * width as usize + sx as usize) * 4;
            let px = [input[idx], input[idx + 1], input[idx + 2], input[idx + 3]];
            acc += w as f64 * height::extract(px, config.height_mode);
        }
    }
    acc / kernel.norm()
}

// --- tests ------------------------------------------------------------------
