//! Vertex-and-edge figures rendered as rasterized segments.
//!
//! A figure is a point set plus a sparse adjacency map. Rendering walks the
//! adjacency in source-index order and rasterizes one segment per directed
//! entry; duplicate and mirrored entries simply overdraw. Vertices without
//! edges are never painted on their own.

use std::collections::BTreeMap;

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::grid::Grid;
use crate::raster::LineAlgorithm;
use crate::surface::Surface;

/// Builder for a line figure.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    points: Vec<Point>,
    edges: BTreeMap<usize, Vec<usize>>,
}

impl Figure {
    /// Create an empty figure builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in demo figure: a hexagonal gem outline with an inscribed
    /// triangle, nine edges over six vertices.
    #[must_use]
    pub fn gem() -> Self {
        Self::new()
            .point(200.0, 20.0)
            .point(100.0, 70.0)
            .point(100.0, 200.0)
            .point(300.0, 70.0)
            .point(300.0, 200.0)
            .point(200.0, 250.0)
            .connect(1, &[0, 2, 3, 5])
            .connect(3, &[0, 4, 5])
            .connect(5, &[2, 4])
    }

    /// Append a vertex and return its index order position.
    #[must_use]
    pub fn point(mut self, x: f32, y: f32) -> Self {
        self.points.push(Point::new(x, y));
        self
    }

    /// Connect `source` to each vertex in `targets`.
    ///
    /// Entries accumulate: connecting the same source twice extends its
    /// target list.
    #[must_use]
    pub fn connect(mut self, source: usize, targets: &[usize]) -> Self {
        self.edges
            .entry(source)
            .or_default()
            .extend_from_slice(targets);
        self
    }

    /// Validate the figure and freeze it for rendering.
    ///
    /// # Errors
    ///
    /// Returns an error if the figure has no vertices, or if any edge
    /// references a vertex index outside the point set.
    pub fn build(self) -> Result<BuiltFigure> {
        if self.points.is_empty() {
            return Err(Error::EmptyFigure);
        }
        let vertex_count = self.points.len();
        for (&source, targets) in &self.edges {
            if source >= vertex_count {
                return Err(Error::EdgeOutOfBounds {
                    from: source,
                    to: source,
                    vertex_count,
                });
            }
            for &target in targets {
                if target >= vertex_count {
                    return Err(Error::EdgeOutOfBounds {
                        from: source,
                        to: target,
                        vertex_count,
                    });
                }
            }
        }
        Ok(BuiltFigure {
            points: self.points,
            edges: self.edges,
        })
    }
}

/// A validated figure ready to render.
///
/// Every edge index is known to be in bounds, so rendering never fails.
#[derive(Debug, Clone)]
pub struct BuiltFigure {
    points: Vec<Point>,
    edges: BTreeMap<usize, Vec<usize>>,
}

impl BuiltFigure {
    /// Number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Total number of directed edge entries.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// The vertex positions, in insertion order.
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Rasterize every edge onto the surface, translated by `offset`.
    ///
    /// The offset shifts both endpoints before quantization, so the same
    /// figure can be stamped at several canvas positions. An empty adjacency
    /// map draws nothing.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        grid: &Grid,
        algorithm: LineAlgorithm,
        offset: Point,
        color: Rgba,
    ) {
        for (&source, targets) in &self.edges {
            for &target in targets {
                algorithm.draw(
                    surface,
                    grid,
                    self.points[source] + offset,
                    self.points[target] + offset,
                    color,
                );
            }
        }
    }
}
