//! Placement stages: bounds estimate, priority order, shelf search.

pub mod bounds;
pub mod order;
pub mod shelf;

pub use bounds::{CanvasBounds, estimate_bounds, prev_pow2_below};
pub use order::placement_order;
pub use shelf::{ShelfPlacer, ShelfState, first_overlap, place_rect};
