//! Drawing surfaces.
//!
//! The rasterizers draw through [`Surface`], a single filled-rectangle
//! primitive. [`Canvas`] is the in-memory RGBA implementation used by the
//! scene, the output encoders, and the tests; anything else that can fill an
//! axis-aligned rectangle (a windowing backend, a recording stub) can stand in
//! by implementing the trait.
//!
//! A surface is a scoped resource: callers acquire it as a `&mut` borrow for
//! the duration of a draw sequence and it is released when the borrow ends,
//! on every exit path.

use crate::color::Rgba;
use crate::error::{Error, Result};

/// The drawing primitive the rasterization core consumes.
///
/// One call paints one axis-aligned rectangle in a single flat color.
/// Coordinates may lie partly or fully outside the surface; implementations
/// clip rather than fail.
pub trait Surface {
    /// Fill the rectangle with top-left `(x, y)` and size `w` × `h`.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba);
}

/// In-memory RGBA canvas.
///
/// Pixels are stored row-major, 4 bytes per pixel, with no padding between
/// rows, so [`pixels`](Canvas::pixels) can be handed straight to the PNG
/// encoder.
#[derive(Debug, Clone)]
pub struct Canvas {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// RGBA pixels in row-major order.
    pixels: Vec<u8>,
}

impl Canvas {
    /// Create a new canvas with the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trazar::surface::Canvas;
    ///
    /// let canvas = Canvas::new(800, 600).unwrap();
    /// assert_eq!(canvas.width(), 800);
    /// assert_eq!(canvas.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize) * 4;

        Ok(Self {
            width,
            height,
            pixels: vec![0; size],
        })
    }

    /// Get the width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Get the total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Get the raw pixel data as a tightly packed RGBA slice.
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Clear the canvas to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let [r, g, b, a] = color.to_array();
        for chunk in self.pixels.chunks_exact_mut(4) {
            chunk[0] = r;
            chunk[1] = g;
            chunk[2] = b;
            chunk[3] = a;
        }
    }

    /// Get the color at a specific pixel coordinate.
    ///
    /// Returns `None` if the coordinates are out of bounds.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let idx = self.pixel_index(x, y);
        Some(Rgba::from_array([
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        ]))
    }

    /// Set the color at a specific pixel coordinate.
    ///
    /// Does nothing if the coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }

        let idx = self.pixel_index(x, y);
        let [r, g, b, a] = color.to_array();
        self.pixels[idx] = r;
        self.pixels[idx + 1] = g;
        self.pixels[idx + 2] = b;
        self.pixels[idx + 3] = a;
    }

    /// Calculate the byte index for a pixel coordinate.
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}

impl Surface for Canvas {
    /// Fill a rectangle, clipped against the canvas bounds.
    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba) {
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(h)).min(i64::from(self.height));

        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let [r, g, b, a] = color.to_array();
        let rect_width = (x1 - x0) as usize;

        for row_y in y0..y1 {
            let row_start = ((row_y as usize) * (self.width as usize) + (x0 as usize)) * 4;
            let row = &mut self.pixels[row_start..row_start + rect_width * 4];

            for chunk in row.chunks_exact_mut(4) {
                chunk[0] = r;
                chunk[1] = g;
                chunk[2] = b;
                chunk[3] = a;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_canvas() {
        let canvas = Canvas::new(100, 50).unwrap();
        assert_eq!(canvas.width(), 100);
        assert_eq!(canvas.height(), 50);
        assert_eq!(canvas.pixel_count(), 5000);
        assert_eq!(canvas.pixels().len(), 5000 * 4);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(Canvas::new(0, 100).is_err());
        assert!(Canvas::new(100, 0).is_err());
        assert!(Canvas::new(0, 0).is_err());
    }

    #[test]
    fn test_clear() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        canvas.clear(Rgba::RED);

        for y in 0..10 {
            for x in 0..10 {
                assert_eq!(canvas.get_pixel(x, y), Some(Rgba::RED));
            }
        }
    }

    #[test]
    fn test_fill_rect() {
        let mut canvas = Canvas::new(100, 100).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.fill_rect(10, 10, 20, 20, Rgba::RED);

        // Inside rect
        assert_eq!(canvas.get_pixel(15, 15), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(10, 10), Some(Rgba::RED));
        assert_eq!(canvas.get_pixel(29, 29), Some(Rgba::RED));
        // Outside rect
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
        assert_eq!(canvas.get_pixel(30, 30), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_clips_negative_origin() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.fill_rect(-5, -5, 10, 10, Rgba::BLUE);

        // Only the overlapping quarter is painted
        assert_eq!(canvas.get_pixel(0, 0), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(4, 4), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_clips_overflow() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.fill_rect(15, 15, 10, 10, Rgba::BLUE);

        assert_eq!(canvas.get_pixel(15, 15), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(19, 19), Some(Rgba::BLUE));
        assert_eq!(canvas.get_pixel(14, 14), Some(Rgba::WHITE));
    }

    #[test]
    fn test_fill_rect_fully_outside_is_noop() {
        let mut canvas = Canvas::new(20, 20).unwrap();
        canvas.clear(Rgba::WHITE);
        canvas.fill_rect(100, 100, 10, 10, Rgba::BLUE);
        canvas.fill_rect(-50, -50, 10, 10, Rgba::BLUE);

        for y in 0..20 {
            for x in 0..20 {
                assert_eq!(canvas.get_pixel(x, y), Some(Rgba::WHITE));
            }
        }
    }

    #[test]
    fn test_set_get_pixel() {
        let mut canvas = Canvas::new(10, 10).unwrap();

        canvas.set_pixel(5, 5, Rgba::BLUE);
        assert_eq!(canvas.get_pixel(5, 5), Some(Rgba::BLUE));

        // Out of bounds
        assert_eq!(canvas.get_pixel(100, 100), None);
    }
}
