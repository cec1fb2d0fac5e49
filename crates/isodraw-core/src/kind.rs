//! Kind tags and opaque values.
//!
//! Callers at an untyped boundary (a host scripting environment, a scene
//! file) hand over [`Value`]s without static type information. The registry
//! resolves a value to its closed-set [`Kind`] with [`kind_of`], and the
//! dispatcher routes on that tag.

use std::{fmt, str::FromStr};

use crate::{
    color::Color,
    geometry::Point,
    path::Path,
    shape::{Circle, Cylinder, Knot, Octahedron, Prism, Pyramid, Rectangle, Solid, Stairs, Star},
    transform::MapPoints,
};

/// The closed set of geometry kinds, plus `Unknown` for everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Point,
    Path,
    Circle,
    Rectangle,
    Star,
    Cylinder,
    Knot,
    Octahedron,
    Prism,
    Pyramid,
    Stairs,
    Unknown,
}

impl Kind {
    /// Every kind in the closed set, `Unknown` excluded.
    pub const ALL: [Kind; 11] = [
        Kind::Point,
        Kind::Path,
        Kind::Circle,
        Kind::Rectangle,
        Kind::Star,
        Kind::Cylinder,
        Kind::Knot,
        Kind::Octahedron,
        Kind::Prism,
        Kind::Pyramid,
        Kind::Stairs,
    ];

    /// Returns the kind's name
    pub fn name(self) -> &'static str {
        match self {
            Kind::Point => "Point",
            Kind::Path => "Path",
            Kind::Circle => "Circle",
            Kind::Rectangle => "Rectangle",
            Kind::Star => "Star",
            Kind::Cylinder => "Cylinder",
            Kind::Knot => "Knot",
            Kind::Octahedron => "Octahedron",
            Kind::Prism => "Prism",
            Kind::Pyramid => "Pyramid",
            Kind::Stairs => "Stairs",
            Kind::Unknown => "Unknown",
        }
    }

    /// Returns true for kinds drawn as a single outline path
    pub fn is_flat(self) -> bool {
        matches!(
            self,
            Kind::Path | Kind::Circle | Kind::Rectangle | Kind::Star
        )
    }

    /// Returns true for kinds drawn as a set of faces
    pub fn is_solid(self) -> bool {
        matches!(
            self,
            Kind::Cylinder
                | Kind::Knot
                | Kind::Octahedron
                | Kind::Prism
                | Kind::Pyramid
                | Kind::Stairs
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = String;

    /// Parses a kind name, ignoring ASCII case. `Unknown` is not accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown geometry kind `{s}`"))
    }
}

/// A geometry value of one of the closed-set kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Point(Point),
    Path(Path),
    Circle(Circle),
    Rectangle(Rectangle),
    Star(Star),
    Cylinder(Cylinder),
    Knot(Knot),
    Octahedron(Octahedron),
    Prism(Prism),
    Pyramid(Pyramid),
    Stairs(Stairs),
}

impl Geometry {
    /// Returns the kind tag of this geometry. Never `Unknown`.
    pub fn kind(&self) -> Kind {
        match self {
            Geometry::Point(_) => Kind::Point,
            Geometry::Path(_) => Kind::Path,
            Geometry::Circle(_) => Kind::Circle,
            Geometry::Rectangle(_) => Kind::Rectangle,
            Geometry::Star(_) => Kind::Star,
            Geometry::Cylinder(_) => Kind::Cylinder,
            Geometry::Knot(_) => Kind::Knot,
            Geometry::Octahedron(_) => Kind::Octahedron,
            Geometry::Prism(_) => Kind::Prism,
            Geometry::Pyramid(_) => Kind::Pyramid,
            Geometry::Stairs(_) => Kind::Stairs,
        }
    }

    /// Returns the outline of a flat kind, or `None` for points and solids
    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Geometry::Path(path) => Some(path),
            Geometry::Circle(circle) => Some(circle.path()),
            Geometry::Rectangle(rect) => Some(rect.path()),
            Geometry::Star(star) => Some(star.path()),
            _ => None,
        }
    }

    /// Returns the faces of a solid kind, or `None` for points and flat kinds
    pub fn as_solid(&self) -> Option<&Solid> {
        match self {
            Geometry::Cylinder(shape) => Some(shape.solid()),
            Geometry::Knot(shape) => Some(shape.solid()),
            Geometry::Octahedron(shape) => Some(shape.solid()),
            Geometry::Prism(shape) => Some(shape.solid()),
            Geometry::Pyramid(shape) => Some(shape.solid()),
            Geometry::Stairs(shape) => Some(shape.solid()),
            _ => None,
        }
    }
}

impl MapPoints for Geometry {
    fn map_points(&self, f: &dyn Fn(Point) -> Point) -> Self {
        match self {
            Geometry::Point(p) => Geometry::Point(p.map_points(f)),
            Geometry::Path(path) => Geometry::Path(path.map_points(f)),
            Geometry::Circle(shape) => Geometry::Circle(shape.map_points(f)),
            Geometry::Rectangle(shape) => Geometry::Rectangle(shape.map_points(f)),
            Geometry::Star(shape) => Geometry::Star(shape.map_points(f)),
            Geometry::Cylinder(shape) => Geometry::Cylinder(shape.map_points(f)),
            Geometry::Knot(shape) => Geometry::Knot(shape.map_points(f)),
            Geometry::Octahedron(shape) => Geometry::Octahedron(shape.map_points(f)),
            Geometry::Prism(shape) => Geometry::Prism(shape.map_points(f)),
            Geometry::Pyramid(shape) => Geometry::Pyramid(shape.map_points(f)),
            Geometry::Stairs(shape) => Geometry::Stairs(shape.map_points(f)),
        }
    }
}

/// An opaque value as received at an untyped boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Geometry(Geometry),
    /// Faces without a kind of their own, e.g. an extruded path.
    Solid(Solid),
    Color(Color),
    Number(f64),
    Text(String),
}

impl Value {
    /// Returns a short description of what the value holds, for messages.
    pub fn describe(&self) -> &'static str {
        match self {
            Value::Geometry(geometry) => geometry.kind().name(),
            Value::Solid(_) => "Solid",
            Value::Color(_) => "Color",
            Value::Number(_) => "Number",
            Value::Text(_) => "Text",
        }
    }

    /// Returns the contained point, if the value is one
    pub fn as_point(&self) -> Option<Point> {
        match self {
            Value::Geometry(Geometry::Point(p)) => Some(*p),
            _ => None,
        }
    }

    /// Returns the contained geometry, if the value is one
    pub fn as_geometry(&self) -> Option<&Geometry> {
        match self {
            Value::Geometry(geometry) => Some(geometry),
            _ => None,
        }
    }
}

impl From<Point> for Value {
    fn from(point: Point) -> Self {
        Value::Geometry(Geometry::Point(point))
    }
}

impl From<Path> for Value {
    fn from(path: Path) -> Self {
        Value::Geometry(Geometry::Path(path))
    }
}

impl From<Geometry> for Value {
    fn from(geometry: Geometry) -> Self {
        Value::Geometry(geometry)
    }
}

impl From<Solid> for Value {
    fn from(solid: Solid) -> Self {
        Value::Solid(solid)
    }
}

impl From<Color> for Value {
    fn from(color: Color) -> Self {
        Value::Color(color)
    }
}

macro_rules! impl_from_shape {
    ($($kind:ident),* $(,)?) => {
        $(
            impl From<$kind> for Geometry {
                fn from(shape: $kind) -> Self {
                    Geometry::$kind(shape)
                }
            }

            impl From<$kind> for Value {
                fn from(shape: $kind) -> Self {
                    Value::Geometry(Geometry::$kind(shape))
                }
            }
        )*
    };
}

impl_from_shape!(
    Circle, Rectangle, Star, Cylinder, Knot, Octahedron, Prism, Pyramid, Stairs
);

/// Resolves an opaque value to its kind tag.
///
/// Values outside the closed set, including bare [`Solid`]s, resolve to
/// [`Kind::Unknown`] rather than failing.
///
/// # Examples
///
/// ```
/// # use isodraw_core::{color::Color, geometry::Point, kind::{Kind, Value, kind_of}};
/// assert_eq!(kind_of(&Value::from(Point::ORIGIN)), Kind::Point);
/// assert_eq!(kind_of(&Value::from(Color::rgb(255, 0, 0))), Kind::Unknown);
/// ```
pub fn kind_of(value: &Value) -> Kind {
    match value {
        Value::Geometry(geometry) => geometry.kind(),
        Value::Solid(_) | Value::Color(_) | Value::Number(_) | Value::Text(_) => Kind::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance_of(kind: Kind) -> Value {
        let o = Point::ORIGIN;
        match kind {
            Kind::Point => Value::from(o),
            Kind::Path => Value::from(Path::new(vec![o, o.translate(1.0, 0.0, 0.0)])),
            Kind::Circle => Circle::new(o, 1.0, 20).unwrap().into(),
            Kind::Rectangle => Rectangle::new(o, 1.0, 1.0).unwrap().into(),
            Kind::Star => Star::new(o, 2.0, 1.0, 5).unwrap().into(),
            Kind::Cylinder => Cylinder::new(o, 1.0, 20, 1.0).unwrap().into(),
            Kind::Knot => Knot::new(o).unwrap().into(),
            Kind::Octahedron => Octahedron::new(o).unwrap().into(),
            Kind::Prism => Prism::cube(o).unwrap().into(),
            Kind::Pyramid => Pyramid::new(o, 1.0, 1.0, 1.0).unwrap().into(),
            Kind::Stairs => Stairs::new(o, 3).unwrap().into(),
            Kind::Unknown => Value::Number(0.0),
        }
    }

    #[test]
    fn test_kind_of_every_factory() {
        for kind in Kind::ALL {
            assert_eq!(kind_of(&instance_of(kind)), kind);
        }
    }

    #[test]
    fn test_kind_of_non_geometry_is_unknown() {
        let rect = Rectangle::new(Point::ORIGIN, 1.0, 1.0).unwrap();
        let extruded = Solid::extrude(rect.path(), 1.0).unwrap();

        assert_eq!(kind_of(&Value::from(extruded)), Kind::Unknown);
        assert_eq!(kind_of(&Value::Number(3.0)), Kind::Unknown);
        assert_eq!(kind_of(&Value::Text("Prism".to_string())), Kind::Unknown);
        assert_eq!(kind_of(&Value::from(Color::default())), Kind::Unknown);
    }

    #[test]
    fn test_kind_families_are_disjoint() {
        for kind in Kind::ALL {
            assert!(!(kind.is_flat() && kind.is_solid()), "{kind}");
        }
        assert!(!Kind::Point.is_flat() && !Kind::Point.is_solid());
        assert!(Kind::Star.is_flat());
        assert!(Kind::Knot.is_solid());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("prism".parse::<Kind>(), Ok(Kind::Prism));
        assert_eq!("Octahedron".parse::<Kind>(), Ok(Kind::Octahedron));
        assert!("Unknown".parse::<Kind>().is_err());
        assert!("teapot".parse::<Kind>().is_err());
    }

    #[test]
    fn test_geometry_accessors() {
        let circle = instance_of(Kind::Circle);
        let geometry = circle.as_geometry().unwrap();
        assert_eq!(geometry.as_path().map(Path::len), Some(20));
        assert!(geometry.as_solid().is_none());

        let prism = instance_of(Kind::Prism);
        assert_eq!(
            prism.as_geometry().unwrap().as_solid().map(|s| s.faces().len()),
            Some(6)
        );
    }

    #[test]
    fn test_value_as_point() {
        assert_eq!(instance_of(Kind::Point).as_point(), Some(Point::ORIGIN));
        assert_eq!(instance_of(Kind::Prism).as_point(), None);
        assert_eq!(instance_of(Kind::Prism).describe(), "Prism");
    }
}
