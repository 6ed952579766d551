//! Error types for trazar operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trazar operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a canvas or scene.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Cell size must be a positive number of pixels.
    #[error("Invalid cell size: {cell} (must be positive)")]
    InvalidCellSize {
        /// Rejected cell size.
        cell: i32,
    },

    /// A figure needs at least one vertex.
    #[error("Figure has no vertices")]
    EmptyFigure,

    /// An edge references a vertex index outside the point set.
    #[error("Edge {from} -> {to} out of bounds (only {vertex_count} vertices)")]
    EdgeOutOfBounds {
        /// Originating vertex index.
        from: usize,
        /// Connected vertex index.
        to: usize,
        /// Number of vertices in the figure.
        vertex_count: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_cell_size_display() {
        let err = Error::InvalidCellSize { cell: -3 };
        assert!(err.to_string().contains("-3"));
    }

    #[test]
    fn test_edge_out_of_bounds_display() {
        let err = Error::EdgeOutOfBounds {
            from: 1,
            to: 9,
            vertex_count: 6,
        };
        assert!(err.to_string().contains('9'));
        assert!(err.to_string().contains('6'));
    }
}
