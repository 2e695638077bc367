//! Normal construction — turn a height gradient into a unit surface normal.
//!
//! Standard path: the gradient is negated (normals point away from the
//! descending slope), scaled, given a fixed z of 1, and normalized. With z
//! pinned at 1 before normalization the vector can never be zero, so a flat
//! gradient falls out as exactly `(0, 0, 1)` — straight up.
//!
//! DuDv sources store a signed slope direction directly, so that path scales
//! and normalizes *without* the sign flip.

/// Build the unit normal for gradient `(dx, dy)` under `scale`.
///
/// Degenerate input (non-finite components) collapses to the straight-up
/// normal rather than propagating NaN into the encoder.
#[inline]
pub fn build(dx: f64, dy: f64, scale: f64) -> [f64; 3] {
    normalize_with_unit_z(-dx * scale, -dy * scale)
}

/// Build a normal from derivative channels that already carry the slope
/// direction (DuDv sources). Same scale-and-normalize step as [`build`],
/// without the gradient negation.
#[inline]
pub fn build_raw(dx: f64, dy: f64, scale: f64) -> [f64; 3] {
    normalize_with_unit_z(dx * scale, dy * scale)
}

#[inline]
fn normalize_with_unit_z(nx: f64, ny: f64) -> [f64; 3] {
    let len = (nx * nx + ny * ny + 1.0).sqrt();
    if !len.is_finite() {
        return [0.0, 0.0, 1.0];
    }
    [nx / len, ny / len, 1.0 / len]
}

// --- tests ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn magnitude(n: [f64; 3]) -> f64 {
        (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt()
    }

    #[test]
    fn zero_gradient_is_exactly_straight_up() {
        assert_eq!(build(0.0, 0.0, 2.0), [0.0, 0.0, 1.0]);
        assert_eq!(build_raw(0.0, 0.0, 2.0), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn normals_are_unit_length() {
        for (dx, dy, scale) in [
            (0.5, -0.25, 2.0),
            (-1.0, 1.0, 10.0),
            (1e-9, 0.0, 1.0),
            (0.9, 0.9, 500.0),
        ] {
            let n = build(dx, dy, scale);
            assert!(
                (magnitude(n) - 1.0).abs() < 1e-5,
                "|build({dx}, {dy}, {scale})| = {}",
                magnitude(n)
            );
        }
    }

    #[test]
    fn rising_slope_tilts_against_the_gradient() {
        // Height increasing to the right (dx > 0) tilts the normal left.
        let n = build(0.5, 0.0, 2.0);
        assert!(n[0] < 0.0, "nx should be negative (got {})", n[0]);
        assert_eq!(n[1], 0.0);
        assert!(n[2] > 0.0, "nz stays non-negative");
    }

    #[test]
    fn raw_path_keeps_the_stored_sign() {
        let n = build_raw(0.5, 0.0, 2.0);
        assert!(n[0] > 0.0, "dudv +x slope should tilt +x (got {})", n[0]);
    }

    #[test]
    fn larger_scale_means_steeper_normal() {
        let shallow = build(0.25, 0.0, 1.0);
        let steep = build(0.25, 0.0, 8.0);
        assert!(
            steep[2] < shallow[2],
            "scale 8 should lower nz ({} vs {})",
            steep[2],
            shallow[2]
        );
    }

    #[test]
    fn degenerate_input_collapses_to_straight_up() {
        assert_eq!(build(f64::MAX, f64::MAX, 2.0), [0.0, 0.0, 1.0]);
        assert_eq!(build(f64::NAN, 0.0, 2.0), [0.0, 0.0, 1.0]);
    }
}
