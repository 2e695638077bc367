//! Pixel encoding — pack a unit normal into output RGBA8 bytes.
//!
//! The 8-bit unsigned scheme maps each signed component from `[-1, 1]` to
//! `[0, 255]` via `round(c * 127.5 + 127.5)`, so a flat normal encodes as
//! `(128, 128, 255)`. Decoding is `byte / 127.5 - 1.0`, which recovers the
//! component within one quantization step.

use crate::config::Encoding;

/// Pack `normal` into RGBA8 under `encoding`, with the given alpha byte.
///
/// Alpha is 255 (full opacity) in every mode except heightmap passthrough,
/// where the pipeline threads the source height byte through instead.
#[inline]
pub fn encode(normal: [f64; 3], alpha: u8, encoding: Encoding) -> [u8; 4] {
    match encoding {
        Encoding::Unsigned8 => [
            encode_component(normal[0]),
            encode_component(normal[1]),
            encode_component(normal[2]),
            alpha,
        ],
    }
}

/// Map one signed component `[-1, 1]` to an unsigned byte.
#[inline]
pub fn encode_component(c: f64) -> u8 {
    (c * 127.5 + 127.5).round().clamp(0.0, 255.0) as u8
}

/// Inverse of [`encode_component`] up to quantization.
#[inline]
pub fn decode_component(byte: u8) -> f64 {
    byte as f64 / 127.5 - 1.0
}

// --- tests ------------------------------------------------------------------
