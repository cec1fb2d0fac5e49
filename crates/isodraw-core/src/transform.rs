//! The affine transform capability set.
//!
//! Every geometry kind supports the same five operations with the same
//! argument shapes:
//!
//! - [`Translatable::translate`]
//! - [`Scalable::scale`]
//! - [`Rotatable::rotate_x`], [`Rotatable::rotate_y`], [`Rotatable::rotate_z`]
//!
//! Kinds opt in by implementing [`MapPoints`]; the three capability traits
//! are then provided through blanket implementations, so no kind can
//! support a different signature than any other.

use std::fmt;

use crate::geometry::Point;

/// A value whose geometry is made entirely of [`Point`]s.
///
/// Implementors return a new value of the same kind with `f` applied to
/// every point. The number of points and their grouping must not change.
pub trait MapPoints: Sized {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self;
}

/// Values that can be moved by an offset.
pub trait Translatable {
    fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self;
}

/// Values that can be scaled about an origin.
pub trait Scalable {
    fn scale(&self, origin: Point, dx: f64, dy: f64, dz: f64) -> Self;
}

/// Values that can be rotated about axes passing through an origin.
///
/// Angles are in radians.
pub trait Rotatable {
    fn rotate_x(&self, origin: Point, angle: f64) -> Self;
    fn rotate_y(&self, origin: Point, angle: f64) -> Self;
    fn rotate_z(&self, origin: Point, angle: f64) -> Self;
}

impl<T: MapPoints> Translatable for T {
    fn translate(&self, dx: f64, dy: f64, dz: f64) -> Self {
        self.map_points(&|p| p.translate(dx, dy, dz))
    }
}

impl<T: MapPoints> Scalable for T {
    fn scale(&self, origin: Point, dx: f64, dy: f64, dz: f64) -> Self {
        self.map_points(&|p| p.scale(origin, dx, dy, dz))
    }
}

impl<T: MapPoints> Rotatable for T {
    fn rotate_x(&self, origin: Point, angle: f64) -> Self {
        self.map_points(&|p| p.rotate_x(origin, angle))
    }

    fn rotate_y(&self, origin: Point, angle: f64) -> Self {
        self.map_points(&|p| p.rotate_y(origin, angle))
    }

    fn rotate_z(&self, origin: Point, angle: f64) -> Self {
        self.map_points(&|p| p.rotate_z(origin, angle))
    }
}

impl MapPoints for Point {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        f(*self)
    }
}

/// The axis a rotation turns around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "X"),
            Axis::Y => write!(f, "Y"),
            Axis::Z => write!(f, "Z"),
        }
    }
}

/// A named affine operation with its parameters.
///
/// `Scale` and `Rotate` carry their origin separately (see
/// [`crate::dispatch`]) because the origin arrives as an opaque value that
/// must be checked before it can be used as a [`Point`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Translate { dx: f64, dy: f64, dz: f64 },
    Scale { dx: f64, dy: f64, dz: f64 },
    Rotate { axis: Axis, angle: f64 },
}

impl Transform {
    /// Returns the operation name as the dispatcher reports it.
    pub fn name(&self) -> &'static str {
        match self {
            Transform::Translate { .. } => "Translate",
            Transform::Scale { .. } => "Scale",
            Transform::Rotate { axis: Axis::X, .. } => "RotateX",
            Transform::Rotate { axis: Axis::Y, .. } => "RotateY",
            Transform::Rotate { axis: Axis::Z, .. } => "RotateZ",
        }
    }

    /// Returns true if the operation needs an origin point.
    pub fn needs_origin(&self) -> bool {
        !matches!(self, Transform::Translate { .. })
    }

    /// Applies the operation to any value in the capability set.
    ///
    /// `origin` is ignored by `Translate`.
    pub fn apply_to<T>(&self, value: &T, origin: Point) -> T
    where
        T: Translatable + Scalable + Rotatable,
    {
        match *self {
            Transform::Translate { dx, dy, dz } => value.translate(dx, dy, dz),
            Transform::Scale { dx, dy, dz } => value.scale(origin, dx, dy, dz),
            Transform::Rotate {
                axis: Axis::X,
                angle,
            } => value.rotate_x(origin, angle),
            Transform::Rotate {
                axis: Axis::Y,
                angle,
            } => value.rotate_y(origin, angle),
            Transform::Rotate {
                axis: Axis::Z,
                angle,
            } => value.rotate_z(origin, angle),
        }
    }

    /// Returns every numeric parameter paired with its name.
    pub(crate) fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Transform::Translate { dx, dy, dz } | Transform::Scale { dx, dy, dz } => {
                vec![("dx", dx), ("dy", dy), ("dz", dz)]
            }
            Transform::Rotate { angle, .. } => vec![("angle", angle)],
        }
    }
}
