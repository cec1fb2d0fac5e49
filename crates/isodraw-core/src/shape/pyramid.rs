use std::f64::consts::PI;

use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    path::Path,
    shape::{Solid, ensure_finite_point},
    transform::{MapPoints, Rotatable},
};

/// A four-sided pyramid over a `dx` by `dy` base, apex `dz` above its center.
#[derive(Debug, Clone, PartialEq)]
pub struct Pyramid {
    origin: Point,
    dx: f64,
    dy: f64,
    dz: f64,
    solid: Solid,
}

impl Pyramid {
    /// Creates a pyramid with a base corner at `origin`.
    ///
    /// The base itself is open; each side face and its opposite, obtained by
    /// a half turn around the vertical axis through the apex, are pushed in
    /// pairs.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for non-finite input.
    pub fn new(origin: Point, dx: f64, dy: f64, dz: f64) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let dx = ensure_finite("dx", dx)?;
        let dy = ensure_finite("dy", dy)?;
        let dz = ensure_finite("dz", dz)?;

        let apex = origin.translate(dx / 2.0, dy / 2.0, dz);
        let center = origin.translate(dx / 2.0, dy / 2.0, 0.0);

        let mut solid = Solid::default();

        let x_face = Path::new(vec![origin, origin.translate(dx, 0.0, 0.0), apex]);
        solid.push(x_face.rotate_z(center, PI));
        solid.push(x_face);

        let y_face = Path::new(vec![origin, apex, origin.translate(0.0, dy, 0.0)]);
        solid.push(y_face.rotate_z(center, PI));
        solid.push(y_face);

        Ok(Self {
            origin,
            dx,
            dy,
            dz,
            solid,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the base size and height as `(dx, dy, dz)`
    pub fn extent(&self) -> (f64, f64, f64) {
        (self.dx, self.dy, self.dz)
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn faces(&self) -> &[Path] {
        self.solid.faces()
    }
}

impl MapPoints for Pyramid {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            solid: self.solid.map_points(f),
            ..self.clone()
        }
    }
}
