//! Output encoders.
//!
//! Rendered canvases leave the crate either as PNG files/bytes or as an
//! ASCII preview for quick terminal inspection.

mod png_encoder;
mod text;

pub use png_encoder::PngEncoder;
pub use text::TextPreview;
