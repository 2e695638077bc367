//! Conversion pipeline — the whole-buffer heightmap → normal map pass.
//!
//! One call converts one RGBA8 input buffer into one RGBA8 output buffer of
//! identical dimensions, synchronously. Validation (config, then buffer
//! lengths) happens before any pixel work, so an error never leaves a
//! half-written output. Each output pixel is a pure function of the input
//! buffer and the immutable config, so rows are partitioned across the rayon
//! pool: every worker writes only its own disjoint output rows while sharing
//! the input read-only.

use rayon::prelude::*;

use crate::config::{ConversionConfig, HeightMode};
use crate::{encode, height, kernel, normal};

/// Error returned when a conversion cannot start.
///
/// All variants are raised before any output byte is written; there are no
/// mid-conversion failure modes (sampling is bounds-resolved and
/// normalization is guarded).
#[derive(Debug, PartialEq)]
pub enum ConvertError {
    /// `scale` was zero, negative, NaN, or infinite. The engine rejects this
    /// rather than substituting a default.
    NonPositiveScale { scale: f32 },
    /// Input buffer length differs from `width * height * 4`.
    InputSizeMismatch { expected: usize, actual: usize },
    /// Output buffer length differs from `width * height * 4`.
    OutputSizeMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertError::NonPositiveScale { scale } => {
                write!(f, "scale must be finite and positive (got {scale})")
            }
            ConvertError::InputSizeMismatch { expected, actual } => write!(
                f,
                "input buffer holds {actual} bytes, expected {expected} (W*H*4)"
            ),
            ConvertError::OutputSizeMismatch { expected, actual } => write!(
                f,
                "output buffer holds {actual} bytes, expected {expected} (W*H*4)"
            ),
        }
    }
}

impl std::error::Error for ConvertError {}

/// Convert `input` into a freshly allocated normal map buffer.
///
/// The output is allocated only after validation succeeds. See
/// [`convert_into`] for the borrowing form.
pub fn convert(
    input: &[u8],
    width: u32,
    height: u32,
    config: &ConversionConfig,
) -> Result<Vec<u8>, ConvertError> {
    config.validate()?;
    let expected = byte_len(width, height);
    if input.len() != expected {
        return Err(ConvertError::InputSizeMismatch {
            expected,
            actual: input.len(),
        });
    }
    let mut output = vec![0u8; expected];
    convert_into(input, &mut output, width, height, config)?;
    Ok(output)
}

/// Convert `input` into a caller-owned `output` buffer.
///
/// Both buffers must hold exactly `width * height * 4` bytes of row-major
/// RGBA8 with top-left origin. The input is never mutated; on success every
/// output pixel has been assigned. Fails fast — on error the output is
/// untouched.
pub fn convert_into(
    input: &[u8],
    output: &mut [u8],
    width: u32,
    height: u32,
    config: &ConversionConfig,
) -> Result<(), ConvertError> {
    config.validate()?;
    let expected = byte_len(width, height);
    if input.len() != expected {
        return Err(ConvertError::InputSizeMismatch {
            expected,
            actual: input.len(),
        });
    }
    if output.len() != expected {
        return Err(ConvertError::OutputSizeMismatch {
            expected,
            actual: output.len(),
        });
    }
    if width == 0 || height == 0 {
        return Ok(());
    }

    let row_bytes = width as usize * 4;
    output
        .par_chunks_exact_mut(row_bytes)
        .enumerate()
        .for_each(|(y, row)| convert_row(input, row, y as u32, width, height, config));
    Ok(())
}

/// Fill one output row. Mode dispatch happens here, once per row, so the
/// per-tap loop stays branch-free on the selector enums.
fn convert_row(
    input: &[u8],
    row: &mut [u8],
    y: u32,
    width: u32,
    height_px: u32,
    config: &ConversionConfig,
) {
    let scale = config.scale as f64;
    match config.height_mode {
        HeightMode::DuDvPassthrough => {
            for x in 0..width {
                let px = read_pixel(input, width, x, y);
                let dx = encode::decode_component(px[0]);
                let dy = encode::decode_component(px[1]);
                let n = normal::build_raw(dx, dy, scale);
                write_pixel(row, x, encode::encode(n, 255, config.encoding));
            }
        }
        HeightMode::HeightmapPassthrough => {
            // Flat normal, height republished through alpha.
            let flat = [0.0, 0.0, 1.0];
            for x in 0..width {
                let px = read_pixel(input, width, x, y);
                let h = height::extract(px, HeightMode::KeyedRgb);
                let alpha = (h * 255.0).round().clamp(0.0, 255.0) as u8;
                write_pixel(row, x, encode::encode(flat, alpha, config.encoding));
            }
        }
        _ => {
            for x in 0..width {
                let (dx, dy) = kernel::gradient(input, width, height_px, x, y, config);
                let n = normal::build(dx, dy, scale);
                write_pixel(row, x, encode::encode(n, 255, config.encoding));
            }
        }
    }
}

#[inline]
fn read_pixel(input: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let idx = (y as usize * width as usize + x as usize) * 4;
    [input[idx], input[idx + 1], input[idx + 2], input[idx + 3]]
}

#[inline]
fn write_pixel(row: &mut [u8], x: u32, px: [u8; 4]) {
    let idx = x as usize * 4;
    row[idx..idx + 4].copy_from_slice(&px);
}

#[inline]
fn byte_len(width: u32, height: u32) -> usize {
    width as usize * height as usize * 4
}

// --- tests ------------------------------------------------------------------
