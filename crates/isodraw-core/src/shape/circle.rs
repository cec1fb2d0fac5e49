use std::f64::consts::TAU;

use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    path::Path,
    shape::{ensure_count, ensure_finite_point},
    transform::MapPoints,
};

/// A regular polygon approximating a circle in a plane parallel to XY.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    origin: Point,
    radius: f64,
    vertices: usize,
    outline: Path,
}

impl Circle {
    /// Vertex count used when none is given.
    pub const DEFAULT_VERTICES: usize = 20;

    /// Creates a circle centered on `origin`.
    ///
    /// Vertex `i` sits at angle `i * 2π / vertices`, starting on the positive
    /// X axis and turning counter-clockwise.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for a non-finite origin or
    /// radius, or fewer than three vertices.
    pub fn new(origin: Point, radius: f64, vertices: usize) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let radius = ensure_finite("radius", radius)?;
        let vertices = ensure_count("vertices", vertices, 3)?;

        let outline = (0..vertices)
            .map(|i| {
                let angle = i as f64 * TAU / vertices as f64;
                let (sin, cos) = angle.sin_cos();
                origin.translate(radius * cos, radius * sin, 0.0)
            })
            .collect();

        Ok(Self {
            origin,
            radius,
            vertices,
            outline,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn vertices(&self) -> usize {
        self.vertices
    }

    /// Returns the outline of the circle
    pub fn path(&self) -> &Path {
        &self.outline
    }
}

impl MapPoints for Circle {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            outline: self.outline.map_points(f),
            ..self.clone()
        }
    }
}
