//! Geometric primitives for isometric scenes.
//!
//! This module provides the [`Point`] type, the unit every path, shape and
//! transform is built from.
//!
//! # Coordinate System
//!
//! Isodraw uses a right-handed world space viewed isometrically:
//!
//! ```text
//!          +Z
//!           │
//!           │
//!          ╱ ╲
//!        ╱     ╲
//!     +X         +Y
//! ```
//!
//! - **X-axis**: Runs down and to the right on screen
//! - **Y-axis**: Runs down and to the left on screen
//! - **Z-axis**: Points straight up
//!
//! All angles are in radians. Rotations follow the right-hand rule around the
//! positive axis.

use serde::{Deserialize, Serialize};

/// A 3D point in world space.
///
/// Points are immutable values; every operation returns a new point.
///
/// # Examples
///
/// ```
/// # use isodraw_core::geometry::Point;
/// let p = Point::new(1.0, 2.0, 3.0);
/// let moved = p.translate(1.0, 1.0, 1.0);
/// assert_eq!(moved, Point::new(2.0, 3.0, 4.0));
///
/// // A point built from x and y sits on the ground plane
/// assert_eq!(Point::from_xy(4.0, 5.0).z(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    x: f64,
    y: f64,
    #[serde(default)]
    z: f64,
}

impl Point {
    /// The world origin `(0, 0, 0)`.
    pub const ORIGIN: Point = Point::new(0.0, 0.0, 0.0);

    /// Creates a new point with the specified coordinates
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point on the ground plane (`z = 0`)
    pub const fn from_xy(x: f64, y: f64) -> Self {
        Self::new(x, y, 0.0)
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f64 {
        self.y
    }

    /// Returns the z-coordinate of the point
    pub fn z(self) -> f64 {
        self.z
    }

    /// Returns the coordinates as an `[x, y, z]` array
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Checks that every coordinate is finite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Moves the point by the given offsets.
    pub fn translate(self, dx: f64, dy: f64, dz: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            z: self.z + dz,
        }
    }

    /// Scales the point's offset from `origin` by a per-axis factor.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isodraw_core::geometry::Point;
    /// let origin = Point::new(1.0, 1.0, 1.0);
    /// let p = Point::new(2.0, 3.0, 1.0);
    ///
    /// let scaled = p.scale(origin, 2.0, 0.5, 10.0);
    /// assert_eq!(scaled, Point::new(3.0, 2.0, 1.0));
    /// ```
    pub fn scale(self, origin: Point, dx: f64, dy: f64, dz: f64) -> Self {
        let p = self.relative_to(origin);
        Self::new(p.x * dx, p.y * dy, p.z * dz).absolute_from(origin)
    }

    /// Rotates the point about an axis parallel to X passing through `origin`.
    pub fn rotate_x(self, origin: Point, angle: f64) -> Self {
        let p = self.relative_to(origin);
        let (sin, cos) = angle.sin_cos();
        let y = p.y * cos - p.z * sin;
        let z = p.y * sin + p.z * cos;
        Self::new(p.x, y, z).absolute_from(origin)
    }

    /// Rotates the point about an axis parallel to Y passing through `origin`.
    pub fn rotate_y(self, origin: Point, angle: f64) -> Self {
        let p = self.relative_to(origin);
        let (sin, cos) = angle.sin_cos();
        let x = p.x * cos - p.z * sin;
        let z = p.x * sin + p.z * cos;
        Self::new(x, p.y, z).absolute_from(origin)
    }

    /// Rotates the point about an axis parallel to Z passing through `origin`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use isodraw_core::geometry::Point;
    /// # use std::f64::consts::FRAC_PI_2;
    /// let p = Point::new(1.0, 0.0, 0.0).rotate_z(Point::ORIGIN, FRAC_PI_2);
    /// assert!(p.x().abs() < 1e-12);
    /// assert!((p.y() - 1.0).abs() < 1e-12);
    /// ```
    pub fn rotate_z(self, origin: Point, angle: f64) -> Self {
        let p = self.relative_to(origin);
        let (sin, cos) = angle.sin_cos();
        let x = p.x * cos - p.y * sin;
        let y = p.x * sin + p.y * cos;
        Self::new(x, y, p.z).absolute_from(origin)
    }

    /// Returns the isometric depth of the point.
    ///
    /// Larger depths are further away from the viewer. Downstream renderers
    /// use this to order faces back to front.
    pub fn depth(self) -> f64 {
        self.x + self.y - 2.0 * self.z
    }

    /// Calculates the Euclidean distance to another point
    pub fn distance(self, other: Point) -> f64 {
        let d = self.relative_to(other);
        (d.x * d.x + d.y * d.y + d.z * d.z).sqrt()
    }

    fn relative_to(self, origin: Point) -> Self {
        self.translate(-origin.x, -origin.y, -origin.z)
    }

    fn absolute_from(self, origin: Point) -> Self {
        self.translate(origin.x, origin.y, origin.z)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

/// Checks two points for equality within `epsilon` on every axis.
pub fn points_approx_eq(a: Point, b: Point, epsilon: f64) -> bool {
    (a.x - b.x).abs() <= epsilon && (a.y - b.y).abs() <= epsilon && (a.z - b.z).abs() <= epsilon
}
