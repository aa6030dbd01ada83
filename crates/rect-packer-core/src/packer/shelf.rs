use super::bounds::CanvasBounds;
use crate::model::{Rect, Size};
use tracing::trace;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Below this many placed rectangles the parallel scan costs more than it saves.
#[cfg(feature = "parallel")]
const PARALLEL_SCAN_MIN: usize = 256;

/// Search state carried from one placement to the next.
///
/// `baseline_y` is where the next candidate scan starts; `key` is the `w + h` of the
/// active shelf. A rectangle with a different key opens a new shelf at y = 0, so the
/// baseline is only a starting hint: the overlap scan decides the final position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShelfState {
    pub baseline_y: u32,
    pub key: Option<u64>,
}

impl ShelfState {
    /// State to use for a rectangle with priority `key`.
    pub fn enter(self, key: u64) -> Self {
        if self.key == Some(key) {
            self
        } else {
            Self {
                baseline_y: 0,
                key: Some(key),
            }
        }
    }
}

/// Returns the first rectangle in `placed` (placement order) overlapping `candidate`.
pub fn first_overlap(placed: &[Rect], candidate: &Rect, parallel: bool) -> Option<Rect> {
    #[cfg(feature = "parallel")]
    {
        if parallel && placed.len() >= PARALLEL_SCAN_MIN {
            return placed
                .par_iter()
                .find_first(|r| r.overlaps(candidate))
                .copied();
        }
    }
    let _ = parallel;
    placed.iter().find(|r| r.overlaps(candidate)).copied()
}

/// Finds a free position for `size` given the rectangles already placed.
///
/// Starting at `(0, baseline_y)`, each obstruction moves the candidate to the
/// obstruction's right edge; when the rectangle would cross `canvas_width` the scan
/// wraps to `x = 0` one row lower. Every wrap increases `y`, and rows below all placed
/// rectangles are free, so the search terminates.
pub fn place_rect(
    placed: &[Rect],
    canvas_width: u32,
    state: ShelfState,
    size: Size,
    parallel: bool,
) -> (Rect, ShelfState) {
    let mut state = state.enter(size.semi_perimeter());
    let mut candidate = Rect::new(0, state.baseline_y, size.w, size.h);
    while let Some(other) = first_overlap(placed, &candidate, parallel) {
        candidate.x = other.x_end();
        if candidate.x_end() > canvas_width {
            candidate.x = 0;
            candidate.y += 1;
        }
    }
    state.baseline_y = candidate.y;
    (candidate, state)
}

/// Places rectangles one at a time and accumulates the canvas size.
#[derive(Debug, Clone)]
pub struct ShelfPlacer {
    canvas: CanvasBounds,
    placed: Vec<Rect>,
    state: ShelfState,
    parallel: bool,
}

impl ShelfPlacer {
    pub fn new(bounds: CanvasBounds, parallel: bool) -> Self {
        Self {
            canvas: bounds,
            placed: Vec::new(),
            state: ShelfState::default(),
            parallel,
        }
    }

    pub fn with_capacity(bounds: CanvasBounds, parallel: bool, capacity: usize) -> Self {
        Self {
            placed: Vec::with_capacity(capacity),
            ..Self::new(bounds, parallel)
        }
    }

    /// Places the next rectangle. Callers feed rectangles in priority order.
    pub fn place(&mut self, size: Size) -> Rect {
        let previous_key = self.state.key;
        let (rect, state) = place_rect(
            &self.placed,
            self.canvas.width,
            self.state,
            size,
            self.parallel,
        );
        if previous_key != state.key {
            trace!(key = ?state.key, "new shelf");
        }
        self.state = state;
        self.canvas.height = self.canvas.height.max(rect.y_end());
        self.placed.push(rect);
        trace!(x = rect.x, y = rect.y, w = rect.w, h = rect.h, "placed");
        rect
    }

    /// Current canvas; the height covers every placed rectangle.
    pub fn canvas(&self) -> CanvasBounds {
        self.canvas
    }

    pub fn state(&self) -> ShelfState {
        self.state
    }

    /// Rectangles in placement order.
    pub fn placed(&self) -> &[Rect] {
        &self.placed
    }
}
