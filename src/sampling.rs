//! Out-of-bounds coordinate resolution for neighbor sampling.
//!
//! Kernels reach past the image border; this module maps any integer
//! coordinate back into bounds using one of two policies:
//!
//! - **wrap** — toroidal: correct for tileable sources, where the left edge
//!   genuinely continues on the right.
//! - **clamp** — nearest-edge replication: correct for non-tiling sources
//!   that must not bleed normals across the border.

/// Resolve `(x, y)` to an in-bounds coordinate of a `width × height` image.
///
/// `wrap = true` wraps toroidally; `wrap = false` clamps to the nearest edge.
/// Both dimensions must be non-zero (callers guard the empty-image case
/// before sampling anything).
#[inline]
pub fn resolve(x: i64, y: i64, width: u32, height: u32, wrap: bool) -> (u32, u32) {
    debug_assert!(width > 0 && height > 0);
    if wrap {
        (wrap_axis(x, width), wrap_axis(y, height))
    } else {
        (clamp_axis(x, width), clamp_axis(y, height))
    }
}

/// `((c % n) + n) % n` — toroidal wrap that is correct for negative `c`.
#[inline]
fn wrap_axis(c: i64, n: u32) -> u32 {
    let n = n as i64;
    (((c % n) + n) % n) as u32
}

#[inline]
fn clamp_axis(c: i64, n: u32) -> u32 {
    c.clamp(0, n as i64 - 1) as u32
}

// --- tests ------------------------------------------------------------------
