use serde::{Deserialize, Serialize};

/// Input size of a rectangle to pack (pixels).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
    /// Packing priority key (`w + h`). Equal keys share a shelf.
    pub fn semi_perimeter(&self) -> u64 {
        self.w as u64 + self.h as u64
    }
    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }
}

impl From<(u32, u32)> for Size {
    fn from((w, h): (u32, u32)) -> Self {
        Self { w, h }
    }
}

/// Axis-aligned rectangle (pixels). `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }
    /// Exclusive right edge (`x + w`).
    pub fn x_end(&self) -> u32 {
        self.x + self.w
    }
    /// Exclusive bottom edge (`y + h`).
    pub fn y_end(&self) -> u32 {
        self.y + self.h
    }
    pub fn size(&self) -> Size {
        Size::new(self.w, self.h)
    }
    /// Strict interval overlap on both axes; shared edges do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.y < self.y_end()
            && self.y < other.y_end()
            && other.x < self.x_end()
            && self.x < other.x_end()
    }
    /// Returns true if `self` lies fully inside a `width` x `height` canvas anchored at the origin.
    pub fn fits_canvas(&self, width: u32, height: u32) -> bool {
        self.x_end() <= width && self.y_end() <= height
    }
}

/// Result of a packing run.
///
/// `placements[i]` is the placed rectangle for input `i`; input order is preserved
/// even though rectangles are placed in priority order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackResult {
    pub placements: Vec<Rect>,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

impl PackResult {
    pub fn len(&self) -> usize {
        self.placements.len()
    }
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
    /// Top-left position of input `index`.
    pub fn position(&self, index: usize) -> Option<(u32, u32)> {
        self.placements.get(index).map(|r| (r.x, r.y))
    }

    /// Computes packing statistics for this result.
    pub fn stats(&self) -> PackStats {
        let canvas_area = (self.canvas_width as u64) * (self.canvas_height as u64);
        let used_area: u64 = self.placements.iter().map(|r| r.size().area()).sum();
        let occupancy = if canvas_area > 0 {
            used_area as f64 / canvas_area as f64
        } else {
            0.0
        };
        PackStats {
            num_rects: self.placements.len(),
            canvas_width: self.canvas_width,
            canvas_height: self.canvas_height,
            canvas_area,
            used_area,
            occupancy,
        }
    }
}

/// A placed rectangle carrying a user key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame<K = String> {
    /// User-specified key (e.g., sprite name).
    pub key: K,
    /// Placed rectangle on the canvas.
    pub frame: Rect,
}

/// Keyed packing result, frames in input order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout<K = String> {
    pub width: u32,
    pub height: u32,
    pub frames: Vec<Frame<K>>,
}

impl<K> Layout<K> {
    pub fn stats(&self) -> PackStats {
        PackResult {
            placements: self.frames.iter().map(|f| f.frame).collect(),
            canvas_width: self.width,
            canvas_height: self.height,
        }
        .stats()
    }
}

/// Statistics about packing efficiency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PackStats {
    /// Number of rectangles placed.
    pub num_rects: usize,
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// `canvas_width * canvas_height`.
    pub canvas_area: u64,
    /// Sum of rectangle areas.
    pub used_area: u64,
    /// Occupancy ratio: used_area / canvas_area (0.0 to 1.0).
    /// Higher is better (less wasted space).
    pub occupancy: f64,
}

impl PackStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Rects: {}, Canvas: {}x{}, Occupancy: {:.2}%, Canvas Area: {} px², Used Area: {} px²",
            self.num_rects,
            self.canvas_width,
            self.canvas_height,
            self.occupancy * 100.0,
            self.canvas_area,
            self.used_area,
        )
    }

    /// Returns wasted space in pixels.
    pub fn wasted_area(&self) -> u64 {
        self.canvas_area.saturating_sub(self.used_area)
    }

    /// Returns wasted space as a percentage (0.0 to 100.0).
    pub fn waste_percentage(&self) -> f64 {
        if self.canvas_area > 0 {
            (self.wasted_area() as f64 / self.canvas_area as f64) * 100.0
        } else {
            0.0
        }
    }
}
