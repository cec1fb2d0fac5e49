use crate::{
    error::GeometryError,
    geometry::Point,
    path::Path,
    shape::{Prism, Solid, ensure_finite_point},
    transform::{MapPoints, Scalable, Translatable},
};

/// An impossible-looking knot built from three bars.
///
/// Seen from the isometric viewpoint the bars appear to form a closed loop.
#[derive(Debug, Clone, PartialEq)]
pub struct Knot {
    origin: Point,
    solid: Solid,
}

impl Knot {
    /// Creates a knot anchored at `origin`.
    ///
    /// The bars are built at five times the final size, two patch faces hide
    /// the seam, and the result is shrunk about the world origin and nudged
    /// so it sits roughly within the unit cube before moving to `origin`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for a non-finite origin.
    pub fn new(origin: Point) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;

        let mut solid = Solid::default();
        for bar in [
            Prism::new(Point::ORIGIN, 5.0, 1.0, 1.0)?,
            Prism::new(Point::new(4.0, 1.0, 0.0), 1.0, 4.0, 1.0)?,
            Prism::new(Point::new(4.0, 4.0, -2.0), 1.0, 1.0, 3.0)?,
        ] {
            solid.extend(bar.solid().clone());
        }

        solid.push(Path::new(vec![
            Point::new(0.0, 0.0, 2.0),
            Point::new(0.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 1.0),
            Point::new(1.0, 0.0, 2.0),
        ]));
        solid.push(Path::new(vec![
            Point::new(0.0, 0.0, 2.0),
            Point::new(0.0, 1.0, 2.0),
            Point::new(0.0, 1.0, 1.0),
            Point::new(0.0, 0.0, 1.0),
        ]));

        let solid = solid
            .scale(Point::ORIGIN, 0.2, 0.2, 0.2)
            .translate(-0.1, 0.15, 0.4)
            .translate(origin.x(), origin.y(), origin.z());

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

impl MapPoints for Knot {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            solid: self.solid.map_points(f),
        }
    }
}
