use crate::{
    error::GeometryError,
    geometry::Point,
    path::Path,
    shape::{Solid, ensure_count, ensure_finite_point},
    transform::{MapPoints, Translatable},
};

/// A flight of stairs filling the unit cube at its origin.
///
/// Steps climb along +Y and +Z and span the full unit width along X.
#[derive(Debug, Clone, PartialEq)]
pub struct Stairs {
    origin: Point,
    step_count: usize,
    solid: Solid,
}

impl Stairs {
    /// Creates a flight of `step_count` steps.
    ///
    /// Each step contributes a riser and a tread. Two zigzag faces close the
    /// sides at `x = 0` and `x = 1`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for a non-finite origin or
    /// a step count of zero.
    pub fn new(origin: Point, step_count: usize) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let step_count = ensure_count("step_count", step_count, 1)?;
        let step = 1.0 / step_count as f64;

        let mut solid = Solid::default();
        let mut zigzag = Path::new(vec![origin]);

        for i in 0..step_count {
            let corner = origin.translate(0.0, i as f64 * step, (i + 1) as f64 * step);

            // riser
            solid.push(Path::new(vec![
                corner,
                corner.translate(0.0, 0.0, -step),
                corner.translate(1.0, 0.0, -step),
                corner.translate(1.0, 0.0, 0.0),
            ]));
            // tread
            solid.push(Path::new(vec![
                corner,
                corner.translate(1.0, 0.0, 0.0),
                corner.translate(1.0, step, 0.0),
                corner.translate(0.0, step, 0.0),
            ]));

            zigzag.push(corner);
            zigzag.push(corner.translate(0.0, step, 0.0));
        }
        zigzag.push(origin.translate(0.0, 1.0, 0.0));

        solid.push(zigzag.reverse().translate(1.0, 0.0, 0.0));
        solid.push(zigzag);

        Ok(Self {
            origin,
            step_count,
            solid,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn solid(&self) -> &Solid {
        &self.solid
    }

    pub fn faces(&self) -> &[Path] {
        self.solid.faces()
    }
}

impl MapPoints for Stairs {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            solid: self.solid.map_points(f),
            ..self.clone()
        }
    }
}
