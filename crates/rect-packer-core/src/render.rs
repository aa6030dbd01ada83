//! Debug rendering of a packing result.
//!
//! Every rectangle is filled with a random light color. Rasterizing doubles as an
//! independent check of the packer: a pixel outside the canvas or a pixel that is
//! already colored aborts the render with `PackError::InvariantViolation`.

use crate::error::{PackError, Result};
use crate::model::PackResult;
use image::{Rgb, RgbImage};
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::path::Path;
use tracing::info;

const BACKGROUND: Rgb<u8> = Rgb([0, 0, 0]);

/// Rasterizes `result` into an RGB canvas. Colors are drawn from a `seed`ed RNG.
pub fn render_debug_image(result: &PackResult, seed: u64) -> Result<RgbImage> {
    let (cw, ch) = (result.canvas_width, result.canvas_height);
    let mut canvas = RgbImage::from_pixel(cw, ch, BACKGROUND);
    let mut rng = StdRng::seed_from_u64(seed);

    for (i, r) in result.placements.iter().enumerate() {
        // Channels stay in 128..=255 so a filled pixel never equals the background.
        let color = Rgb([
            rng.gen_range(128..=255u8),
            rng.gen_range(128..=255u8),
            rng.gen_range(128..=255u8),
        ]);
        if !r.fits_canvas(cw, ch) {
            return Err(PackError::InvariantViolation(format!(
                "rectangle {i} at ({}, {}) size {}x{} exceeds canvas {cw}x{ch}",
                r.x, r.y, r.w, r.h
            )));
        }
        for y in r.y..r.y_end() {
            for x in r.x..r.x_end() {
                let px = canvas.get_pixel_mut(x, y);
                if *px != BACKGROUND {
                    return Err(PackError::InvariantViolation(format!(
                        "rectangle {i} overlaps another rectangle at pixel ({x}, {y})"
                    )));
                }
                *px = color;
            }
        }
    }
    Ok(canvas)
}

/// Renders `result` and writes it to `path`; the format follows the extension (`.bmp`, `.png`).
pub fn save_debug_image(result: &PackResult, path: impl AsRef<Path>, seed: u64) -> Result<()> {
    let path = path.as_ref();
    let img = render_debug_image(result, seed)?;
    img.save(path)?;
    info!(?path, width = img.width(), height = img.height(), "debug image written");
    Ok(())
}
