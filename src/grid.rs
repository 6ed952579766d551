//! Cell-grid coordinate quantization.
//!
//! Every drawing operation in this crate goes through a [`Grid`]: continuous
//! canvas coordinates are snapped to the top-left corner of the cell that
//! contains them, and a cell is painted as one `cell` × `cell` rectangle on
//! the surface. Quantized coordinates are always recomputed from the source
//! points, never cached.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::surface::Surface;

/// A pixel coordinate snapped to a cell boundary.
///
/// Both components are always congruent to 0 modulo the cell size of the grid
/// that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PixelCoord {
    /// X coordinate of the cell's top-left corner.
    pub x: i32,
    /// Y coordinate of the cell's top-left corner.
    pub y: i32,
}

impl PixelCoord {
    /// Create a new pixel coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Uniform square grid over the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    /// Cell edge length in pixels. Always positive.
    cell: i32,
}

impl Grid {
    /// Magnitude cap for quantized coordinates. Every axis delta and every
    /// doubled Bresenham error term derived from a pair of capped
    /// coordinates fits in `i32`.
    const COORD_LIMIT: i64 = 1 << 28;

    /// Create a grid with the given cell size in pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if `cell` is zero or negative.
    pub fn new(cell: i32) -> Result<Self> {
        if cell <= 0 {
            return Err(Error::InvalidCellSize { cell });
        }
        Ok(Self { cell })
    }

    /// Get the cell edge length in pixels.
    #[must_use]
    pub const fn cell(&self) -> i32 {
        self.cell
    }

    /// Snap a point to the top-left corner of its cell.
    ///
    /// Each axis is floored independently: `floor(v / cell) * cell`. Snapping
    /// is toward negative infinity, so negative coordinates land on the same
    /// uniform boundaries as positive ones; a plain `as i32` cast would
    /// truncate toward zero and give the cells touching zero twice the width.
    /// Idempotent: requantizing an already snapped coordinate is a no-op.
    ///
    /// Total over every `f32` input: coordinates beyond ±2^28 and infinities
    /// clamp to the outermost in-range cell, and NaN lands on the origin
    /// cell.
    #[must_use]
    pub fn quantize(&self, p: Point) -> PixelCoord {
        PixelCoord::new(self.snap(p.x), self.snap(p.y))
    }

    /// Snap one axis to its cell origin, clamped to the coordinate cap.
    fn snap(&self, v: f32) -> i32 {
        let max_cells = Self::COORD_LIMIT / i64::from(self.cell);
        let cells = ((v / self.cell as f32).floor() as i64).clamp(-max_cells, max_cells);
        (cells * i64::from(self.cell)) as i32
    }

    /// Paint the cell containing `p` as one filled rectangle.
    ///
    /// Issues exactly one `fill_rect` per call. Repeated fills of the same
    /// cell are harmless overdraw, not an error.
    pub fn fill_cell<S: Surface + ?Sized>(&self, surface: &mut S, p: Point, color: Rgba) {
        self.fill_cell_at(surface, self.quantize(p), color);
    }

    /// Paint the cell whose top-left corner is `coord`.
    pub fn fill_cell_at<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        coord: PixelCoord,
        color: Rgba,
    ) {
        surface.fill_rect(coord.x, coord.y, self.cell as u32, self.cell as u32, color);
    }
}
