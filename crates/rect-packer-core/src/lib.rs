//! Greedy rectangle packer.
//!
//! Computes non-overlapping placements for a batch of axis-aligned rectangles and the
//! bounding canvas that contains them, the classic texture-atlas layout problem.
//!
//! - Bounds: canvas width from the widest rectangle and the rounded-down square side of the total area
//! - Order: descending `w + h`; equal keys form a shelf
//! - Placement: left-to-right scan per shelf, jumping past obstructions, wrapping one row at a time
//! - Debug rendering (feature `image`) re-checks every pixel for overlap
//!
//! Quick example:
//! ```
//! use rect_packer_core::{Size, pack};
//! # fn main() -> rect_packer_core::Result<()> {
//! let sizes = vec![Size::new(4, 4), Size::new(4, 4), Size::new(2, 2)];
//! let out = pack(&sizes)?;
//! assert!(out.canvas_width >= 4);
//! println!("{}", out.stats().summary());
//! # Ok(()) }
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pipeline;
#[cfg(feature = "image")]
pub mod render;

pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use pipeline::*;
#[cfg(feature = "image")]
pub use render::*;

/// Convenience prelude for common types and functions.
/// Importing `rect_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::config::{PackerConfig, PackerConfigBuilder};
    pub use crate::error::PackError;
    pub use crate::model::{Frame, Layout, PackResult, PackStats, Rect, Size};
    pub use crate::packer::{CanvasBounds, ShelfPlacer, ShelfState};
    pub use crate::{pack, pack_layout, pack_with_config, verify_packing};
}
