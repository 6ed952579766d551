//! Segment rasterizers and algorithm selection.

mod line;

pub use line::{draw_line_bresenham, draw_line_dda};

use crate::color::Rgba;
use crate::geometry::Point;
use crate::grid::Grid;
use crate::surface::Surface;

/// Which segment walker to rasterize with.
///
/// Both walkers paint the same cells on axis-aligned and 45° segments and
/// may differ by at most the tie-breaking cells on other slopes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineAlgorithm {
    /// Digital differential analyzer: float steps, one sample per cell.
    #[default]
    Dda,
    /// Bresenham: integer error walk in cell-sized steps.
    Bresenham,
}

impl LineAlgorithm {
    /// Rasterize the segment `from` → `to` with the selected walker.
    pub fn draw<S: Surface + ?Sized>(
        self,
        surface: &mut S,
        grid: &Grid,
        from: Point,
        to: Point,
        color: Rgba,
    ) {
        match self {
            Self::Dda => draw_line_dda(surface, grid, from, to, color),
            Self::Bresenham => draw_line_bresenham(surface, grid, from, to, color),
        }
    }
}
