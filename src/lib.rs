//! # Trazar
//!
//! Cell-quantized 2D line rasterization for grid-ruled canvases.
//!
//! Trazar draws point-and-edge figures onto an in-memory RGBA canvas by
//! snapping every coordinate to a uniform cell grid and painting whole cells,
//! the way plotting algorithms are classically taught: one filled square per
//! step of the line walk.
//!
//! ## Features
//!
//! - **Pure Rust**: No windowing system, GUI toolkit, or GPU dependencies
//! - **Two walkers**: A float-stepping digital differential analyzer and
//!   Bresenham's integer error walk, selectable per segment
//! - **Cell grid**: Floor-based quantization that behaves uniformly on both
//!   sides of zero
//! - **Multiple outputs**: PNG files/bytes and ASCII terminal previews
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use trazar::prelude::*;
//!
//! // Rasterize the built-in gem scene and save it
//! let scene = Scene::new().build()?;
//! let canvas = scene.to_canvas()?;
//! PngEncoder::write_to_file(&canvas, "scene.png")?;
//! ```
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital
//!   plotter." *IBM Systems Journal*, 4(1), 25-30.

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in rasterization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types.
pub mod color;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Cell-grid coordinate quantization.
pub mod grid;

/// Drawing surfaces and the in-memory canvas.
pub mod surface;

// ============================================================================
// Rasterization Modules
// ============================================================================

/// Segment rasterizers (DDA and Bresenham).
pub mod raster;

/// Vertex-and-edge figures.
pub mod figure;

/// Randomized freehand segment sketching.
pub mod sketch;

/// Composed demo scene (grid, axes, figure stamps).
pub mod scene;

// ============================================================================
// Output Modules
// ============================================================================

/// Output encoders (PNG, ASCII preview).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trazar operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust,ignore
/// use trazar::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::figure::{BuiltFigure, Figure};
    pub use crate::geometry::{Point, Rect};
    pub use crate::grid::{Grid, PixelCoord};
    pub use crate::output::{PngEncoder, TextPreview};
    pub use crate::raster::{draw_line_bresenham, draw_line_dda, LineAlgorithm};
    pub use crate::scene::{BuiltScene, Scene};
    pub use crate::sketch::{random_segment, sketch_segment};
    pub use crate::surface::{Canvas, Surface};
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    #[test]
    fn test_default_scene_renders_end_to_end() {
        let canvas = Scene::new().build().unwrap().to_canvas().unwrap();
        assert_eq!(canvas.width(), 800);
        assert_eq!(canvas.height(), 600);
    }
}
