//! Ordered point sequences.
//!
//! A [`Path`] describes a polygon boundary. Point order is significant:
//! downstream renderers expect faces wound counter-clockwise when seen from
//! outside a solid.

use crate::{geometry::Point, transform::MapPoints};

/// An ordered sequence of points.
///
/// # Examples
///
/// ```
/// # use isodraw_core::{geometry::Point, path::Path, transform::Translatable};
/// let path = Path::new(vec![
///     Point::new(0.0, 0.0, 0.0),
///     Point::new(1.0, 0.0, 0.0),
///     Point::new(1.0, 1.0, 0.0),
/// ]);
///
/// let lifted = path.translate(0.0, 0.0, 2.0);
/// assert_eq!(lifted.len(), 3);
/// assert_eq!(lifted.points()[2], Point::new(1.0, 1.0, 2.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    points: Vec<Point>,
}

impl Path {
    /// Creates a path from the given points, keeping their order
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns the points of the path in order
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the number of points in the path
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Checks if the path has no points
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Appends a point to the end of the path
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Returns a new path with the point order reversed.
    ///
    /// Reversing flips the winding, and with it the side a face is seen from.
    pub fn reverse(&self) -> Self {
        Self {
            points: self.points.iter().rev().copied().collect(),
        }
    }

    /// Returns the mean isometric depth of the path's points.
    ///
    /// An empty path has depth `0.0`.
    pub fn depth(&self) -> f64 {
        if self.points.is_empty() {
            return 0.0;
        }
        let total: f64 = self.points.iter().map(|p| p.depth()).sum();
        total / self.points.len() as f64
    }

    /// Returns the point coordinates as `[x, y, z]` triples, in path order
    pub fn to_coordinates(&self) -> Vec<[f64; 3]> {
        self.points.iter().map(|p| p.to_array()).collect()
    }
}

impl FromIterator<Point> for Path {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl MapPoints for Path {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        self.points.iter().map(|&p| f(p)).collect()
    }
}
