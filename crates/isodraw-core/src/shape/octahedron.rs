use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2};

use crate::{
    error::GeometryError,
    geometry::Point,
    path::Path,
    shape::{Solid, ensure_finite_point},
    transform::{MapPoints, Rotatable, Scalable},
};

/// A regular-looking octahedron fitted inside the unit cube at its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Octahedron {
    origin: Point,
    solid: Solid,
}

impl Octahedron {
    /// Creates an octahedron inside the unit cube at `origin`.
    ///
    /// One upper and one lower triangle are swept four quarter turns around
    /// the vertical axis through the cube center, then the whole body is
    /// squeezed by `1/√2` horizontally so its equator becomes a square of
    /// side `1/√2` around the center.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for a non-finite origin.
    pub fn new(origin: Point) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let center = origin.translate(0.5, 0.5, 0.5);

        let upper = Path::new(vec![
            origin.translate(0.0, 0.0, 0.5),
            origin.translate(0.5, 0.5, 1.0),
            origin.translate(0.0, 1.0, 0.5),
        ]);
        let lower = Path::new(vec![
            origin.translate(0.0, 0.0, 0.5),
            origin.translate(0.0, 1.0, 0.5),
            origin.translate(0.5, 0.5, 0.0),
        ]);

        let mut solid = Solid::default();
        for turn in 0..4 {
            let angle = turn as f64 * FRAC_PI_2;
            solid.push(upper.rotate_z(center, angle));
            solid.push(lower.rotate_z(center, angle));
        }
        let solid = solid.scale(center, FRAC_1_SQRT_2, FRAC_1_SQRT_2, 1.0);

        Ok(Self { origin, solid })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn faces(&self) -> &[Path] {
        self.solid.faces()
    }
}

impl MapPoints for Octahedron {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            solid: self.solid.map_points(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_octahedron_has_eight_triangles() {
        let octahedron = Octahedron::new(Point::ORIGIN).unwrap();
        assert_eq!(octahedron.faces().len(), 8);
        assert!(octahedron.faces().iter().all(|face| face.len() == 3));
    }

    #[test]
    fn test_octahedron_vertices_are_equidistant_from_center() {
        let octahedron = Octahedron::new(Point::new(2.0, 2.0, 2.0)).unwrap();
        let center = Point::new(2.5, 2.5, 2.5);

        for face in octahedron.faces() {
            for p in face.points() {
                assert_approx_eq!(f64, p.distance(center), 0.5, epsilon = 1e-12);
            }
        }
    }
}
