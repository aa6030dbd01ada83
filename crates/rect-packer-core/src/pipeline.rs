use crate::config::PackerConfig;
use crate::error::{PackError, Result};
use crate::model::{Frame, Layout, PackResult, Rect, Size};
use crate::packer::{ShelfPlacer, estimate_bounds, placement_order};
use tracing::{debug, instrument};

/// Packs `sizes` with the default configuration.
pub fn pack(sizes: &[Size]) -> Result<PackResult> {
    pack_with_config(sizes, PackerConfig::default())
}

#[instrument(skip_all, fields(count = sizes.len()))]
/// Packs `sizes` into a single canvas and returns placements aligned with the input.
///
/// Notes:
/// - `sizes` is not reordered; rectangles are placed by descending `w + h`, ties in input order.
/// - An empty input yields a 0x0 canvas.
/// - With `cfg.verify`, the result is re-checked and a broken invariant is returned as
///   `PackError::InvariantViolation`.
pub fn pack_with_config(sizes: &[Size], cfg: PackerConfig) -> Result<PackResult> {
    cfg.validate()?;
    validate_sizes(sizes, cfg.max_dimension)?;

    if sizes.is_empty() {
        return Ok(PackResult::default());
    }

    let bounds = estimate_bounds(sizes);
    debug!(width = bounds.width, height = bounds.height, "estimated canvas");

    let order = placement_order(sizes);
    let mut placer = ShelfPlacer::with_capacity(bounds, cfg.parallel, sizes.len());
    let mut placements = vec![Rect::default(); sizes.len()];
    for &idx in &order {
        placements[idx] = placer.place(sizes[idx]);
    }

    let canvas = placer.canvas();
    let result = PackResult {
        placements,
        canvas_width: canvas.width,
        canvas_height: canvas.height,
    };
    debug!(
        width = result.canvas_width,
        height = result.canvas_height,
        "packed"
    );

    if cfg.verify {
        verify_packing(sizes, &result)?;
    }
    Ok(result)
}

/// Rejects zero-sized rectangles and sides above `max_dimension`.
pub fn validate_sizes(sizes: &[Size], max_dimension: u32) -> Result<()> {
    for (index, s) in sizes.iter().enumerate() {
        if s.w == 0 || s.h == 0 || s.w > max_dimension || s.h > max_dimension {
            return Err(PackError::InvalidDimension {
                index,
                width: s.w,
                height: s.h,
            });
        }
    }
    Ok(())
}

/// Checks a result against its input: sizes preserved, every rectangle inside the
/// canvas, no two rectangles overlapping, and the canvas at least as wide as the
/// widest input.
pub fn verify_packing(sizes: &[Size], result: &PackResult) -> Result<()> {
    let violation = |msg: String| -> Result<()> { Err(PackError::InvariantViolation(msg)) };

    if sizes.len() != result.placements.len() {
        return violation(format!(
            "{} placements for {} rectangles",
            result.placements.len(),
            sizes.len()
        ));
    }
    let (cw, ch) = (result.canvas_width, result.canvas_height);
    for (i, (s, r)) in sizes.iter().zip(&result.placements).enumerate() {
        if r.size() != *s {
            return violation(format!(
                "rectangle {i} placed as {}x{}, expected {}x{}",
                r.w, r.h, s.w, s.h
            ));
        }
        if !r.fits_canvas(cw, ch) {
            return violation(format!(
                "rectangle {i} at ({}, {}) size {}x{} exceeds canvas {cw}x{ch}",
                r.x, r.y, r.w, r.h
            ));
        }
        if s.w > cw {
            return violation(format!("canvas width {cw} below rectangle {i} width {}", s.w));
        }
    }
    for i in 0..result.placements.len() {
        for j in (i + 1)..result.placements.len() {
            let (a, b) = (&result.placements[i], &result.placements[j]);
            if a.overlaps(b) {
                return violation(format!("rectangles {i} {a:?} and {j} {b:?} overlap"));
            }
        }
    }
    Ok(())
}

// ---------------- Keyed API ----------------

/// Packs keyed sizes. Inputs are (key, width, height); frames come back in input order.
pub fn pack_layout<K: Into<String>>(
    inputs: Vec<(K, u32, u32)>,
    cfg: PackerConfig,
) -> Result<Layout<String>> {
    let (keys, sizes): (Vec<String>, Vec<Size>) = inputs
        .into_iter()
        .map(|(k, w, h)| (k.into(), Size::new(w, h)))
        .unzip();
    let result = pack_with_config(&sizes, cfg)?;
    let frames = keys
        .into_iter()
        .zip(result.placements)
        .map(|(key, frame)| Frame { key, frame })
        .collect();
    Ok(Layout {
        width: result.canvas_width,
        height: result.canvas_height,
        frames,
    })
}
