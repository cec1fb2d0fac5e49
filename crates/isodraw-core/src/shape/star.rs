use std::f64::consts::PI;

use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    path::Path,
    shape::{ensure_count, ensure_finite_point},
    transform::MapPoints,
};

/// A star outline in a plane parallel to XY.
///
/// The outline alternates between the outer and inner radius, starting with
/// an outer tip on the positive X axis, for `2 * points` vertices in total.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    origin: Point,
    outer_radius: f64,
    inner_radius: f64,
    points: usize,
    outline: Path,
}

impl Star {
    /// Creates a star centered on `origin` with `points` tips.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for non-finite input or
    /// fewer than two tips.
    pub fn new(
        origin: Point,
        outer_radius: f64,
        inner_radius: f64,
        points: usize,
    ) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let outer_radius = ensure_finite("outer_radius", outer_radius)?;
        let inner_radius = ensure_finite("inner_radius", inner_radius)?;
        let points = ensure_count("points", points, 2)?;

        let outline = (0..points * 2)
            .map(|i| {
                let radius = if i % 2 == 0 { outer_radius } else { inner_radius };
                let angle = i as f64 * PI / points as f64;
                let (sin, cos) = angle.sin_cos();
                origin.translate(radius * cos, radius * sin, 0.0)
            })
            .collect();

        Ok(Self {
            origin,
            outer_radius,
            inner_radius,
            points,
            outline,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }

    /// Returns the number of tips
    pub fn points(&self) -> usize {
        self.points
    }

    /// Returns the outline of the star
    pub fn path(&self) -> &Path {
        &self.outline
    }
}

impl MapPoints for Star {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            outline: self.outline.map_points(f),
            ..self.clone()
        }
    }
}
