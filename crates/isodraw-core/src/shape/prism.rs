use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    path::Path,
    shape::{Solid, ensure_finite_point},
    transform::{MapPoints, Translatable},
};

/// A rectangular box spanning `origin` to `origin + (dx, dy, dz)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prism {
    origin: Point,
    dx: f64,
    dy: f64,
    dz: f64,
    solid: Solid,
}

impl Prism {
    /// Creates a box with one corner at `origin`.
    ///
    /// The six faces are pushed in pairs: the two faces parallel to the XZ
    /// plane, the two parallel to YZ, then bottom and top.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for non-finite input.
    pub fn new(origin: Point, dx: f64, dy: f64, dz: f64) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let dx = ensure_finite("dx", dx)?;
        let dy = ensure_finite("dy", dy)?;
        let dz = ensure_finite("dz", dz)?;

        let mut solid = Solid::default();

        let front = Path::new(vec![
            origin,
            origin.translate(dx, 0.0, 0.0),
            origin.translate(dx, 0.0, dz),
            origin.translate(0.0, 0.0, dz),
        ]);
        solid.push(front.reverse().translate(0.0, dy, 0.0));
        solid.push(front);

        let side = Path::new(vec![
            origin,
            origin.translate(0.0, 0.0, dz),
            origin.translate(0.0, dy, dz),
            origin.translate(0.0, dy, 0.0),
        ]);
        solid.push(side.reverse().translate(dx, 0.0, 0.0));
        solid.push(side);

        let bottom = Path::new(vec![
            origin,
            origin.translate(dx, 0.0, 0.0),
            origin.translate(dx, dy, 0.0),
            origin.translate(0.0, dy, 0.0),
        ]);
        solid.push(bottom.translate(0.0, 0.0, dz));
        solid.push(bottom.reverse());

        Ok(Self {
            origin,
            dx,
            dy,
            dz,
            solid,
        })
    }

    /// Creates a unit cube at `origin`
    pub fn cube(origin: Point) -> Result<Self, GeometryError> {
        Self::new(origin, 1.0, 1.0, 1.0)
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Returns the extent along each axis as `(dx, dy, dz)`
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

impl MapPoints for Prism {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            solid: self.solid.map_points(f),
            ..self.clone()
        }
    }
}
