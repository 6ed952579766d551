//! Cell-quantized line rasterization.
//!
//! Two classic segment walkers, both painting whole grid cells instead of
//! single pixels. Endpoints are quantized up front so the step geometry is
//! derived from cell-aligned deltas, which keeps both walkers exact.

use crate::color::Rgba;
use crate::geometry::Point;
use crate::grid::{Grid, PixelCoord};
use crate::surface::Surface;

/// Rasterize a segment with the digital differential analyzer.
///
/// The cell count `L` is the larger quantized axis delta divided by the cell
/// size, and the walk paints exactly `L + 1` cells. Sampling starts from the
/// original unquantized `from`, so the sub-cell offset of the endpoint biases
/// which cell each intermediate sample lands in. Each running point is
/// quantized independently; nothing is carried over between samples.
///
/// When both endpoints fall in the same cell the deltas collapse to zero, so
/// that cell is painted once and the walk stops before dividing by `L`.
pub fn draw_line_dda<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &Grid,
    from: Point,
    to: Point,
    color: Rgba,
) {
    let q_from = grid.quantize(from);
    let q_to = grid.quantize(to);
    let dx = q_to.x - q_from.x;
    let dy = q_to.y - q_from.y;

    let steps = dx.abs().max(dy.abs()) / grid.cell();
    if steps == 0 {
        grid.fill_cell(surface, from, color);
        return;
    }

    let step_x = dx as f32 / steps as f32;
    let step_y = dy as f32 / steps as f32;
    let mut x = from.x;
    let mut y = from.y;
    for _ in 0..=steps {
        grid.fill_cell(surface, Point::new(x, y), color);
        x += step_x;
        y += step_y;
    }
}

/// Rasterize a segment with Bresenham's integer error walk.
///
/// Deltas, error terms, and steps all live in pixel units, with each step
/// moving a full cell (`±cell`) along its axis. Because the quantized
/// endpoints are congruent modulo the cell size, the walk lands exactly on
/// the terminal cell and paints `max(|dx|, |dy|) / cell + 1` cells total.
/// Coincident endpoints paint their shared cell once.
pub fn draw_line_bresenham<S: Surface + ?Sized>(
    surface: &mut S,
    grid: &Grid,
    from: Point,
    to: Point,
    color: Rgba,
) {
    let cell = grid.cell();
    let q_from = grid.quantize(from);
    let q_to = grid.quantize(to);

    let dx = (q_to.x - q_from.x).abs();
    let dy = (q_to.y - q_from.y).abs();
    let sx = if q_from.x < q_to.x { cell } else { -cell };
    let sy = if q_from.y < q_to.y { cell } else { -cell };

    let mut err = dx - dy;
    let mut x = q_from.x;
    let mut y = q_from.y;
    loop {
        grid.fill_cell_at(surface, PixelCoord::new(x, y), color);
        if x == q_to.x && y == q_to.y {
            break;
        }
        let e2 = 2 * err;
        if e2 > -dy {
            err -= dy;
            x += sx;
        }
        if e2 < dx {
            err += dx;
            y += sy;
        }
    }
}
