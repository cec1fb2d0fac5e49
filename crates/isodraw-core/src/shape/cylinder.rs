use crate::{
    error::GeometryError,
    geometry::Point,
    path::Path,
    shape::{Circle, Solid},
    transform::MapPoints,
};

/// A circle extruded upwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Cylinder {
    origin: Point,
    radius: f64,
    vertices: usize,
    height: f64,
    solid: Solid,
}

impl Cylinder {
    /// Creates a cylinder whose base circle is centered on `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] under the same conditions
    /// as [`Circle::new`] and [`Solid::extrude`].
    pub fn new(
        origin: Point,
        radius: f64,
        vertices: usize,
        height: f64,
    ) -> Result<Self, GeometryError> {
        let base = Circle::new(origin, radius, vertices)?;
        let solid = Solid::extrude(base.path(), height)?;

        Ok(Self {
            origin: base.origin(),
            radius,
            vertices,
            height,
            solid,
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

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn faces(&self) -> &[Path] {
        self.solid.faces()
    }
}

impl MapPoints for Cylinder {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            solid: self.solid.map_points(f),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cylinder_faces() {
        let cylinder = Cylinder::new(Point::ORIGIN, 1.0, 12, 2.0).unwrap();
        // bottom, top and one side per vertex
        assert_eq!(cylinder.faces().len(), 14);
        assert_eq!(cylinder.faces()[0].len(), 12);
        assert!(cylinder.faces()[1].points().iter().all(|p| p.z() == 2.0));
    }

    #[test]
    fn test_cylinder_rejects_bad_parameters() {
        assert!(Cylinder::new(Point::ORIGIN, 1.0, 2, 1.0).is_err());
        assert!(Cylinder::new(Point::ORIGIN, 1.0, 12, f64::NAN).is_err());
    }
}
