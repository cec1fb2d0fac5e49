//! Shape factories for the closed set of shape kinds.
//!
//! Shapes come in two families:
//!
//! - **Flat** kinds are a single outline [`Path`]: [`Circle`], [`Rectangle`]
//!   and [`Star`].
//! - **Solid** kinds are a set of face paths stored in a [`Solid`]:
//!   [`Cylinder`], [`Knot`], [`Octahedron`], [`Prism`], [`Pyramid`] and
//!   [`Stairs`].
//!
//! Every kind keeps the parameters it was created with. The origin follows
//! later transforms; the scalar parameters describe the shape as built.

use log::trace;

use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    path::Path,
    transform::MapPoints,
};

mod circle;
mod cylinder;
mod knot;
mod octahedron;
mod prism;
mod pyramid;
mod rectangle;
mod stairs;
mod star;

pub use circle::Circle;
pub use cylinder::Cylinder;
pub use knot::Knot;
pub use octahedron::Octahedron;
pub use prism::Prism;
pub use pyramid::Pyramid;
pub use rectangle::Rectangle;
pub use stairs::Stairs;
pub use star::Star;

/// A set of face paths forming a 3D body.
///
/// `Solid` is the face storage for every solid kind. A bare solid, such as
/// the result of [`Solid::extrude`], can be drawn but has no kind of its own.
///
/// # Examples
///
/// ```
/// # use isodraw_core::{geometry::Point, shape::{Rectangle, Solid}};
/// let base = Rectangle::new(Point::ORIGIN, 2.0, 1.0).unwrap();
/// let slab = Solid::extrude(base.path(), 0.5).unwrap();
///
/// // bottom + top + one side per edge
/// assert_eq!(slab.faces().len(), 6);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Solid {
    faces: Vec<Path>,
}

impl Solid {
    /// Creates a solid from the given faces
    pub fn new(faces: Vec<Path>) -> Self {
        Self { faces }
    }

    /// Returns the faces of the solid
    pub fn faces(&self) -> &[Path] {
        &self.faces
    }

    /// Appends a face
    pub fn push(&mut self, face: Path) {
        self.faces.push(face);
    }

    /// Appends every face of another solid
    pub fn extend(&mut self, other: Solid) {
        self.faces.extend(other.faces);
    }

    /// Returns the total number of points across all faces
    pub fn point_count(&self) -> usize {
        self.faces.iter().map(Path::len).sum()
    }

    /// Extrudes a path upwards into a solid.
    ///
    /// The result has a bottom face (the path reversed so it faces down), a
    /// top face (the path lifted by `height`) and one quadrilateral side face
    /// per path edge, including the closing edge.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidArgument`] if `height` is not finite
    /// or the path is empty.
    pub fn extrude(path: &Path, height: f64) -> Result<Self, GeometryError> {
        let height = ensure_finite("height", height)?;
        if path.is_empty() {
            return Err(GeometryError::invalid_argument(
                "path",
                "cannot extrude an empty path",
            ));
        }

        let points = path.points();
        let top: Vec<Point> = points.iter().map(|p| p.translate(0.0, 0.0, height)).collect();
        let count = points.len();

        let mut solid = Solid::default();
        solid.push(path.reverse());
        solid.push(Path::new(top.clone()));
        for i in 0..count {
            let next = (i + 1) % count;
            solid.push(Path::new(vec![top[i], points[i], points[next], top[next]]));
        }

        trace!(sides = count, height; "Extruded path");
        Ok(solid)
    }
}

impl MapPoints for Solid {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        Self {
            faces: self.faces.iter().map(|face| face.map_points(f)).collect(),
        }
    }
}

/// Reject origins with non-finite coordinates.
pub(crate) fn ensure_finite_point(name: &'static str, point: Point) -> Result<Point, GeometryError> {
    if point.is_finite() {
        Ok(point)
    } else {
        Err(GeometryError::invalid_argument(
            name,
            format!("expected finite coordinates, got {point}"),
        ))
    }
}

/// Reject counts below `min`.
pub(crate) fn ensure_count(
    name: &'static str,
    value: usize,
    min: usize,
) -> Result<usize, GeometryError> {
    if value >= min {
        Ok(value)
    } else {
        Err(GeometryError::invalid_argument(
            name,
            format!("expected at least {min}, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::Translatable;

    fn square() -> Path {
        Path::new(vec![
            Point::new(0.0, 0.0, 0.0),
            Point::new(1.0, 0.0, 0.0),
            Point::new(1.0, 1.0, 0.0),
            Point::new(0.0, 1.0, 0.0),
        ])
    }

    #[test]
    fn test_extrude_face_layout() {
        let solid = Solid::extrude(&square(), 2.0).unwrap();
        let faces = solid.faces();

        assert_eq!(faces.len(), 6);
        assert_eq!(faces[0], square().reverse());
        assert!(faces[1].points().iter().all(|p| p.z() == 2.0));
        assert_eq!(
            faces[2].points(),
            &[
                Point::new(0.0, 0.0, 2.0),
                Point::new(0.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 0.0),
                Point::new(1.0, 0.0, 2.0),
            ]
        );
        // closing edge wraps around to the first point
        assert_eq!(faces[5].points()[2], Point::ORIGIN);
    }

    #[test]
    fn test_extrude_rejects_bad_input() {
        assert!(Solid::extrude(&Path::default(), 1.0).is_err());
        assert!(Solid::extrude(&square(), f64::NAN).is_err());
    }

    #[test]
    fn test_solid_point_count() {
        let solid = Solid::extrude(&square(), 1.0).unwrap();
        assert_eq!(solid.point_count(), 4 + 4 + 4 * 4);
    }

    #[test]
    fn test_solid_translate_keeps_topology() {
        let solid = Solid::extrude(&square(), 1.0).unwrap();
        let moved = solid.translate(3.0, 0.0, 0.0);
        assert_eq!(moved.faces().len(), solid.faces().len());
        assert_eq!(moved.point_count(), solid.point_count());
        assert_eq!(moved.faces()[1].points()[0], Point::new(3.0, 0.0, 1.0));
    }

    #[test]
    fn test_ensure_count() {
        assert_eq!(ensure_count("vertices", 3, 3), Ok(3));
        assert!(ensure_count("vertices", 2, 3).is_err());
    }
}
