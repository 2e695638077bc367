//! Demo caller for the conversion engine.
//!
//! Stands in for the I/O collaborators the engine deliberately does not own:
//! it synthesizes a heightmap (a radial bump on a step wedge), runs the
//! pipeline, and writes the result as a binary PPM next to the current
//! directory. Container formats and CLI parsing belong to this layer, never
//! to the engine.

use std::io::Write;

use normalmap::{ConversionConfig, FilterKind, convert};

const SIZE: u32 = 256;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = Vec::with_capacity((SIZE * SIZE * 4) as usize);
    let center = SIZE as f64 / 2.0;
    for y in 0..SIZE {
        for x in 0..SIZE {
            // Step wedge background with a smooth radial bump on top.
            let wedge = (x / 32) as f64 * 32.0;
            let dx = x as f64 - center;
            let dy = y as f64 - center;
            let r = (dx * dx + dy * dy).sqrt() / center;
            let bump = if r < 0.6 {
                ((0.6 - r) / 0.6 * std::f64::consts::FRAC_PI_2).sin() * 160.0
            } else {
                0.0
            };
            let v = (wedge * 0.4 + bump).min(255.0) as u8;
            input.extend_from_slice(&[v, v, v, 255]);
        }
    }

    let config = ConversionConfig {
        filter: FilterKind::Sobel3x3,
        scale: 4.0,
        ..ConversionConfig::default()
    };
    let normal_map = convert(&input, SIZE, SIZE, &config)?;

    // Minimal PPM writer — drops alpha, which a normal map does not need.
    let mut file = std::fs::File::create("step_wedge_normal.ppm")?;
    write!(file, "P6\n{SIZE} {SIZE}\n255\n")?;
    for px in normal_map.chunks_exact(4) {
        file.write_all(&px[..3])?;
    }
    println!("wrote step_wedge_normal.ppm ({SIZE}x{SIZE})");
    Ok(())
}
