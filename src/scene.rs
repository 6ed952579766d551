//! Composed demo scene: grid, axes, and a figure stamped twice.
//!
//! Reproduces the reference drawing surface: a white background ruled with
//! one-pixel grid lines at every cell boundary, red three-pixel axes, the
//! figure rasterized once with the differential analyzer at the origin and
//! once with Bresenham in the right half. Layers paint in that order, so
//! later layers overdraw earlier ones.

use rand::Rng;

use crate::color::Rgba;
use crate::error::Result;
use crate::figure::{BuiltFigure, Figure};
use crate::geometry::{Point, Rect};
use crate::grid::Grid;
use crate::raster::LineAlgorithm;
use crate::sketch::sketch_segment;
use crate::surface::{Canvas, Surface};

/// Builder for a [`BuiltScene`].
#[derive(Debug, Clone)]
pub struct Scene {
    width: u32,
    height: u32,
    cell: i32,
    figure: Figure,
    background: Rgba,
    grid_color: Rgba,
    axis_color: Rgba,
    figure_color: Rgba,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            cell: 10,
            figure: Figure::gem(),
            background: Rgba::WHITE,
            grid_color: Rgba::BLACK,
            axis_color: Rgba::RED,
            figure_color: Rgba::GRAY,
        }
    }
}

impl Scene {
    /// Create a scene builder with the reference defaults: 800×600 canvas,
    /// 10-pixel cells, the gem figure.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas dimensions used by [`BuiltScene::to_canvas`].
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the grid cell size in pixels.
    #[must_use]
    pub fn cell(mut self, cell: i32) -> Self {
        self.cell = cell;
        self
    }

    /// Replace the figure drawn in both halves.
    #[must_use]
    pub fn figure(mut self, figure: Figure) -> Self {
        self.figure = figure;
        self
    }

    /// Set the background fill color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set the grid line color.
    #[must_use]
    pub fn grid_color(mut self, color: Rgba) -> Self {
        self.grid_color = color;
        self
    }

    /// Set the axis color.
    #[must_use]
    pub fn axis_color(mut self, color: Rgba) -> Self {
        self.axis_color = color;
        self
    }

    /// Set the figure and sketch fill color.
    #[must_use]
    pub fn figure_color(mut self, color: Rgba) -> Self {
        self.figure_color = color;
        self
    }

    /// Validate the cell size and figure and freeze the scene.
    ///
    /// # Errors
    ///
    /// Returns an error if the cell size is not positive or the figure fails
    /// validation.
    pub fn build(self) -> Result<BuiltScene> {
        let grid = Grid::new(self.cell)?;
        let figure = self.figure.build()?;
        Ok(BuiltScene {
            width: self.width,
            height: self.height,
            grid,
            figure,
            background: self.background,
            grid_color: self.grid_color,
            axis_color: self.axis_color,
            figure_color: self.figure_color,
        })
    }
}

/// A validated scene ready to render or sketch on.
#[derive(Debug, Clone)]
pub struct BuiltScene {
    width: u32,
    height: u32,
    grid: Grid,
    figure: BuiltFigure,
    background: Rgba,
    grid_color: Rgba,
    axis_color: Rgba,
    figure_color: Rgba,
}

impl BuiltScene {
    /// Configured canvas width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Configured canvas height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The scene's grid.
    #[must_use]
    pub const fn grid(&self) -> Grid {
        self.grid
    }

    /// Render the full scene onto `canvas`.
    ///
    /// Geometry follows the canvas dimensions, not the configured ones, so a
    /// scene can be re-rendered onto a resized canvas without rebuilding.
    pub fn render(&self, canvas: &mut Canvas) {
        let width = canvas.width() as i32;
        let height = canvas.height() as i32;
        let cell = self.grid.cell();

        canvas.clear(self.background);

        // One-pixel rules at every cell boundary
        for x in (0..width).step_by(cell as usize) {
            canvas.fill_rect(x, 0, 1, height as u32, self.grid_color);
        }
        for y in (0..height).step_by(cell as usize) {
            canvas.fill_rect(0, y, width as u32, 1, self.grid_color);
        }

        // Three-pixel axes: the horizontal one spans the full width, the
        // vertical one only reaches the horizontal
        canvas.fill_rect(0, height / 2 - 1, width as u32, 3, self.axis_color);
        canvas.fill_rect(
            width / 2 - 1,
            0,
            3,
            (height / 2) as u32,
            self.axis_color,
        );

        self.figure.render(
            canvas,
            &self.grid,
            LineAlgorithm::Dda,
            Point::ORIGIN,
            self.figure_color,
        );
        self.figure.render(
            canvas,
            &self.grid,
            LineAlgorithm::Bresenham,
            Point::new((width / 2) as f32, 0.0),
            self.figure_color,
        );
    }

    /// Sketch one random lower-half segment onto `canvas`.
    ///
    /// Sketches accumulate over whatever is already drawn. Returns the
    /// chosen endpoints.
    pub fn sketch<R: Rng + ?Sized>(&self, canvas: &mut Canvas, rng: &mut R) -> (Point, Point) {
        let bounds = Rect::from_size(canvas.width() as f32, canvas.height() as f32);
        sketch_segment(canvas, &self.grid, bounds, self.figure_color, rng)
    }

    /// Allocate a canvas with the configured dimensions and render into it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured dimensions are zero.
    pub fn to_canvas(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height)?;
        self.render(&mut canvas);
        Ok(canvas)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_default_scene_configuration() {
        let scene = Scene::new().build().unwrap();
        assert_eq!(scene.width(), 800);
        assert_eq!(scene.height(), 600);
        assert_eq!(scene.grid().cell(), 10);
    }

    #[test]
    fn test_build_rejects_bad_cell() {
        assert!(Scene::new().cell(0).build().is_err());
    }

    #[test]
    fn test_render_layers_in_paint_order() {
        let canvas = Scene::new().build().unwrap().to_canvas().unwrap();

        // Grid line at the origin, bare background just off it
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::BLACK));
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
        // Axes overdraw the grid rules they cross
        assert_eq!(canvas.get_pixel(400, 100), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(10, 300), Some(Rgba::RED));
    }

    #[test]
    fn test_render_stamps_figure_in_both_halves() {
        let canvas = Scene::new().build().unwrap().to_canvas().unwrap();

        // A cell on the gem's horizontal top edge, and its mirrored copy
        assert_eq!(canvas.get_pixel(155, 75), Some(Rgba::GRAY));
        assert_eq!(canvas.get_pixel(555, 75), Some(Rgba::GRAY));
    }

    #[test]
    fn test_render_follows_canvas_dimensions() {
        let scene = Scene::new().build().unwrap();
        let mut canvas = Canvas::new(200, 100).unwrap();

        scene.render(&mut canvas);

        // Rightmost grid rule sits at the canvas edge, not the scene's
        assert_eq!(canvas.get_pixel(190, 5), Some(Rgba::BLACK));
    }

    #[test]
    fn test_to_canvas_uses_configured_dimensions() {
        let canvas = Scene::new()
            .dimensions(320, 240)
            .build()
            .unwrap()
            .to_canvas()
            .unwrap();

        assert_eq!(canvas.width(), 320);
        assert_eq!(canvas.height(), 240);
    }

    #[test]
    fn test_sketch_stays_in_lower_half() {
        let scene = Scene::new().build().unwrap();
        let mut canvas = Canvas::new(200, 100).unwrap();
        let mut rng = StdRng::seed_from_u64(17);

        for _ in 0..20 {
            scene.sketch(&mut canvas, &mut rng);
        }

        let mut painted = 0usize;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get_pixel(x, y) != Some(Rgba::TRANSPARENT) {
                    painted += 1;
                    assert!(y >= 50, "painted pixel above the lower half at ({x}, {y})");
                }
            }
        }
        assert!(painted > 0);
    }
}
