use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    path::Path,
    shape::ensure_finite_point,
    transform::MapPoints,
};

/// An axis-aligned rectangle in a plane parallel to XY.
///
/// The outline runs `origin`, `+x`, `+x+y`, `+y`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point,
    width: f64,
    height: f64,
    outline: Path,
}

impl Rectangle {
    /// Creates a rectangle with a corner at `origin`, `width` along X and
    /// `height` along Y.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] for non-finite input.
    pub fn new(origin: Point, width: f64, height: f64) -> Result<Self, GeometryError> {
        let origin = ensure_finite_point("origin", origin)?;
        let width = ensure_finite("width", width)?;
        let height = ensure_finite("height", height)?;

        let outline = Path::new(vec![
            origin,
            origin.translate(width, 0.0, 0.0),
            origin.translate(width, height, 0.0),
            origin.translate(0.0, height, 0.0),
        ]);

        Ok(Self {
            origin,
            width,
            height,
            outline,
        })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Returns the outline of the rectangle
    pub fn path(&self) -> &Path {
        &self.outline
    }
}

impl MapPoints for Rectangle {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            origin: f(self.origin),
            outline: self.outline.map_points(f),
            ..self.clone()
        }
    }
}
