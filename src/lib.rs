//! `normalmap` — heightmap → tangent-space normal map conversion engine.
//!
//! # Architecture
//! The engine is a pure transformation over raw RGBA8 pixel buffers: callers
//! (image loaders, CLIs) hand in `(&[u8], width, height)` and receive the
//! converted buffer back. File formats, argument parsing, and error
//! presentation all live in the calling layer.
//!
//! Per pixel, [`kernel`] estimates the height gradient by convolving one of
//! nine derivative kernels over heights extracted by [`height`] (with
//! out-of-bounds taps resolved by [`sampling`]); [`normal`] turns the
//! gradient into a unit normal and [`encode`] packs it into output bytes.
//! [`convert`] orchestrates the row-major pass, partitioning rows across a
//! rayon pool — every output pixel depends only on the input buffer and the
//! immutable [`ConversionConfig`], so workers need no coordination.
//!
//! ```
//! use normalmap::{ConversionConfig, FilterKind, convert};
//!
//! // A 2×2 flat gray heightmap converts to all straight-up normals.
//! let input = [128u8; 16];
//! let config = ConversionConfig {
//!     filter: FilterKind::Sobel3x3,
//!     ..ConversionConfig::default()
//! };
//! let out = convert(&input, 2, 2, &config).unwrap();
//! assert_eq!(&out[..4], &[128, 128, 255, 255]);
//! ```

pub mod config;
pub mod convert;
pub mod encode;
pub mod height;
pub mod kernel;
pub mod normal;
pub mod sampling;

pub use config::{ConversionConfig, Encoding, FilterKind, HeightMode};
pub use convert::{ConvertError, convert, convert_into};
