//! ASCII preview encoder.
//!
//! Downsamples a canvas into a grayscale character grid using the classic
//! ` .:-=+*#%@` ramp. Useful for eyeballing a rendered scene in a terminal
//! without opening the PNG.

use crate::surface::Canvas;

/// ASCII preview configuration.
#[derive(Debug, Clone)]
pub struct TextPreview {
    width: Option<u32>,
    height: Option<u32>,
    invert: bool,
}

impl Default for TextPreview {
    fn default() -> Self {
        Self::new()
    }
}

impl TextPreview {
    /// Grayscale ramp from dark to light (10 levels).
    const RAMP: &'static [char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

    /// Create a preview with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self {
            width: None,
            height: None,
            invert: false,
        }
    }

    /// Set the target width in characters.
    /// If not set, uses the canvas width capped at 80 columns.
    #[must_use]
    pub fn width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    /// Set the target height in lines.
    /// If not set, calculates from width to preserve aspect ratio.
    #[must_use]
    pub fn height(mut self, height: u32) -> Self {
        self.height = Some(height);
        self
    }

    /// Invert the output (light on dark vs dark on light).
    #[must_use]
    pub fn invert(mut self, invert: bool) -> Self {
        self.invert = invert;
        self
    }

    /// Render a canvas to a string.
    #[must_use]
    pub fn render(&self, canvas: &Canvas) -> String {
        let (target_w, target_h) = self.compute_dimensions(canvas);
        let mut output = String::with_capacity((target_w + 1) as usize * target_h as usize);

        let scale_x = canvas.width() as f32 / target_w as f32;
        let scale_y = canvas.height() as f32 / target_h as f32;

        for y in 0..target_h {
            for x in 0..target_w {
                let luma = self.sample_luma(canvas, x, y, scale_x, scale_y);
                output.push(Self::RAMP[Self::luma_to_index(luma)]);
            }
            output.push('\n');
        }

        output
    }

    /// Write output directly to stdout.
    pub fn print(&self, canvas: &Canvas) {
        print!("{}", self.render(canvas));
    }

    /// Compute target dimensions preserving aspect ratio.
    /// Characters are roughly twice as tall as wide, so the height is halved.
    fn compute_dimensions(&self, canvas: &Canvas) -> (u32, u32) {
        const CHAR_ASPECT: f32 = 2.0;
        let canvas_aspect = canvas.width() as f32 / canvas.height() as f32;

        match (self.width, self.height) {
            (Some(w), Some(h)) => (w, h),
            (Some(w), None) => {
                let h = (w as f32 / canvas_aspect / CHAR_ASPECT).round() as u32;
                (w, h.max(1))
            }
            (None, Some(h)) => {
                let w = (h as f32 * canvas_aspect * CHAR_ASPECT).round() as u32;
                (w.max(1), h)
            }
            (None, None) => {
                let w = 80u32.min(canvas.width());
                let h = (w as f32 / canvas_aspect / CHAR_ASPECT).round() as u32;
                (w, h.max(1))
            }
        }
    }

    /// Sample the luminance at a scaled position.
    fn sample_luma(&self, canvas: &Canvas, x: u32, y: u32, scale_x: f32, scale_y: f32) -> f32 {
        let fx = (x as f32 * scale_x).min((canvas.width() - 1) as f32);
        let fy = (y as f32 * scale_y).min((canvas.height() - 1) as f32);

        let luma = canvas
            .get_pixel(fx as u32, fy as u32)
            .map_or(0.0, crate::color::Rgba::luminance);

        if self.invert {
            1.0 - luma
        } else {
            luma
        }
    }

    /// Convert luminance (0.0-1.0) to a ramp index.
    fn luma_to_index(luma: f32) -> usize {
        let idx = (luma * (Self::RAMP.len() - 1) as f32).round() as usize;
        idx.min(Self::RAMP.len() - 1)
    }
}
