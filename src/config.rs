//! Conversion configuration: filter choice, height source, edge policy,
//! gradient scale, and output encoding.
//!
//! All selectors are closed enums dispatched once when the pipeline starts —
//! never re-matched per tap inside the hot loop. Filter and height mode are
//! deliberately two independent fields: selecting a height source must not
//! overwrite the filter choice (or vice versa).

use crate::convert::ConvertError;

/// Gradient estimation kernel. See [`crate::kernel`] for the weight tables.
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum FilterKind {
    /// Plain central difference, radius 1, no cross-axis smoothing.
    None,
    /// Classic 3×3 Sobel operator (binomial smoothing rows).
    Sobel3x3,
    /// Separable-smoothed 5×5 extension of the Sobel operator.
    Sobel5x5,
    /// 3×3 Prewitt operator (unweighted smoothing rows).
    Prewitt3x3,
    /// 5×5 Prewitt operator (unweighted smoothing rows, Sobel-shaped ramp).
    Prewitt5x5,
    /// 3×3 box kernel — flat smoothing, weight grows linearly with distance.
    Box3x3,
    /// 5×5 box kernel.
    Box5x5,
    /// 7×7 box kernel.
    Box7x7,
    /// 9×9 box kernel.
    Box9x9,
}

/// How a source pixel becomes a scalar height in `[0, 1]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum HeightMode {
    /// Unweighted mean of R, G, B — the default when no channel dominates.
    KeyedRgb,
    /// Red channel only.
    Red,
    /// Green channel only.
    Green,
    /// Blue channel only.
    Blue,
    /// Perceptual-luminance weighted mean of R, G, B.
    BiasedRgb,
    /// Minimum of the three color channels.
    MinRgb,
    /// Maximum of the three color channels.
    MaxRgb,
    /// sRGB→linear decode per channel, then unweighted mean.
    Colorspace,
    /// First channel normalized to `[0, 1]`, nothing else — for sources that
    /// already store linear height.
    NormalizeOnly,
    /// Source R,G already hold (dx, dy); the gradient filter is bypassed.
    DuDvPassthrough,
    /// Republish the height through the output alpha channel under a flat
    /// normal; no gradient is computed.
    HeightmapPassthrough,
}

/// Output byte packing for the encoded normal.
///
/// Non-exhaustive so signed or 16-bit packings can be added without breaking
/// the pipeline contract.
#[non_exhaustive]
#[derive(Clone, Copy, PartialEq, Eq, Debug, serde::Serialize, serde::Deserialize)]
pub enum Encoding {
    /// `byte = round(c * 127.5 + 127.5)`, clamped to `[0, 255]`.
    Unsigned8,
}

/// Immutable per-run configuration for [`crate::convert::convert_into`].
#[derive(Clone, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
pub struct ConversionConfig {
    /// Gradient estimation kernel.
    pub filter: FilterKind,
    /// Height derivation from the source pixel.
    pub height_mode: HeightMode,
    /// `true` = toroidal wrap (tileable sources), `false` = edge clamp.
    pub wrap_edges: bool,
    /// Gradient multiplier — larger values produce steeper-looking normals.
    /// Must be finite and strictly positive.
    pub scale: f32,
    /// Output packing scheme.
    pub encoding: Encoding,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            filter: FilterKind::None,
            height_mode: HeightMode::KeyedRgb,
            wrap_edges: false,
            scale: 2.0,
            encoding: Encoding::Unsigned8,
        }
    }
}

impl ConversionConfig {
    /// Reject configurations the pipeline must not run with.
    ///
    /// A non-positive (or non-finite) scale is an error, never silently
    /// replaced by a default — default substitution belongs to the calling
    /// layer.
    pub fn validate(&self) -> Result<(), ConvertError> {
        // `!(x > 0.0)` also catches NaN.
        if !(self.scale > 0.0) || !self.scale.is_finite() {
            return Err(ConvertError::NonPositiveScale { scale: self.scale });
        }
        Ok(())
    }
}

// --- tests ------------------------------------------------------------------
