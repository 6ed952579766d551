//! Freehand segment sketching with randomized endpoints.
//!
//! Mirrors the interactive mode of the drawing surface: each request picks a
//! random segment confined to the lower half of the given bounds and walks it
//! with Bresenham. Sketches accumulate on the surface; nothing is cleared or
//! re-rendered between calls.

use rand::Rng;

use crate::color::Rgba;
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::raster::draw_line_bresenham;
use crate::surface::Surface;

/// Pick a random segment inside the lower half of `bounds`.
///
/// Endpoints land on whole pixels: x spans the full width, y only the bottom
/// half, with both upper limits exclusive. Degenerate bounds collapse to a
/// single pixel rather than an empty range.
pub fn random_segment<R: Rng + ?Sized>(bounds: Rect, rng: &mut R) -> (Point, Point) {
    let x0 = bounds.x as i32;
    let x1 = (bounds.x + bounds.width) as i32;
    let y0 = (bounds.y + bounds.height / 2.0) as i32;
    let y1 = (bounds.y + bounds.height) as i32;

    let x_range = x0..x1.max(x0 + 1);
    let y_range = y0..y1.max(y0 + 1);

    let from = Point::new(
        rng.random_range(x_range.clone()) as f32,
        rng.random_range(y_range.clone()) as f32,
    );
    let to = Point::new(
        rng.random_range(x_range) as f32,
        rng.random_range(y_range) as f32,
    );
    (from, to)
}

/// Sketch one random lower-half segment onto the surface.
///
/// Returns the chosen endpoints so callers can log or replay them.
pub fn sketch_segment<S, R>(
    surface: &mut S,
    grid: &Grid,
    bounds: Rect,
    color: Rgba,
    rng: &mut R,
) -> (Point, Point)
where
    S: Surface + ?Sized,
    R: Rng + ?Sized,
{
    let (from, to) = random_segment(bounds, rng);
    draw_line_bresenham(surface, grid, from, to, color);
    (from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    struct Recorder {
        cells: Vec<(i32, i32)>,
    }

    impl Surface for Recorder {
        fn fill_rect(&mut self, x: i32, y: i32, _w: u32, _h: u32, _color: Rgba) {
            self.cells.push((x, y));
        }
    }

    #[test]
    fn test_random_segment_stays_in_lower_half() {
        let bounds = Rect::from_size(800.0, 600.0);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..200 {
            let (from, to) = random_segment(bounds, &mut rng);
            for p in [from, to] {
                assert!(p.x >= 0.0 && p.x < 800.0);
                assert!(p.y >= 300.0 && p.y < 600.0);
                assert_eq!(p.x, p.x.trunc());
                assert_eq!(p.y, p.y.trunc());
            }
        }
    }

    #[test]
    fn test_random_segment_is_seed_deterministic() {
        let bounds = Rect::from_size(640.0, 480.0);
        let first = random_segment(bounds, &mut StdRng::seed_from_u64(42));
        let second = random_segment(bounds, &mut StdRng::seed_from_u64(42));

        assert_eq!(first, second);
    }

    #[test]
    fn test_random_segment_tolerates_degenerate_bounds() {
        let bounds = Rect::from_size(0.0, 0.0);
        let (from, to) = random_segment(bounds, &mut StdRng::seed_from_u64(1));

        assert_eq!(from, Point::ORIGIN);
        assert_eq!(to, Point::ORIGIN);
    }

    #[test]
    fn test_coincident_endpoints_paint_one_cell() {
        let grid = Grid::new(10).unwrap();
        // 1x2 bounds leave a single candidate pixel, so both endpoints match
        let bounds = Rect::from_size(1.0, 2.0);
        let mut rec = Recorder { cells: Vec::new() };
        let mut rng = StdRng::seed_from_u64(3);

        let (from, to) = sketch_segment(&mut rec, &grid, bounds, Rgba::BLACK, &mut rng);

        assert_eq!(from, to);
        assert_eq!(rec.cells, vec![(0, 0)]);
    }

    #[test]
    fn test_sketch_segment_walks_between_its_endpoints() {
        let grid = Grid::new(10).unwrap();
        let bounds = Rect::from_size(400.0, 300.0);
        let mut rec = Recorder { cells: Vec::new() };
        let mut rng = StdRng::seed_from_u64(99);

        let (from, to) = sketch_segment(&mut rec, &grid, bounds, Rgba::BLACK, &mut rng);

        let q_from = grid.quantize(from);
        let q_to = grid.quantize(to);
        assert_eq!(rec.cells[0], (q_from.x, q_from.y));
        assert_eq!(*rec.cells.last().unwrap(), (q_to.x, q_to.y));
    }

    #[test]
    fn test_sketches_accumulate_on_the_surface() {
        let grid = Grid::new(10).unwrap();
        let bounds = Rect::from_size(400.0, 300.0);
        let mut rec = Recorder { cells: Vec::new() };
        let mut rng = StdRng::seed_from_u64(5);

        sketch_segment(&mut rec, &grid, bounds, Rgba::BLACK, &mut rng);
        let after_first = rec.cells.len();
        sketch_segment(&mut rec, &grid, bounds, Rgba::BLACK, &mut rng);

        assert!(rec.cells.len() > after_first);
    }
}
