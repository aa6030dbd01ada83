use crate::model::Size;

/// Initial canvas guess. The width is final; the height is a lower bound that grows during placement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CanvasBounds {
    pub width: u32,
    pub height: u32,
}

/// Estimates the starting canvas from the rectangle set.
///
/// The width is the larger of the widest rectangle and the power of two just below
/// `floor(sqrt(total_area))`, i.e. the side of a perfectly efficient square packing
/// rounded down. The height starts at the tallest rectangle.
pub fn estimate_bounds(sizes: &[Size]) -> CanvasBounds {
    let mut min_w = 0u32;
    let mut min_h = 0u32;
    let mut total_area = 0u64;
    for s in sizes {
        min_w = min_w.max(s.w);
        min_h = min_h.max(s.h);
        total_area += s.area();
    }
    let side = total_area.isqrt();
    CanvasBounds {
        width: min_w.max(prev_pow2_below(side)),
        height: min_h,
    }
}

/// Largest power of two strictly below `v`, or 0 when `v <= 1`.
pub fn prev_pow2_below(v: u64) -> u32 {
    if v <= 1 {
        return 0;
    }
    let p = 1u64 << (63 - (v - 1).leading_zeros());
    // v <= 2^32 for any sqrt of a u64, so p <= 2^31.
    p as u32
}
