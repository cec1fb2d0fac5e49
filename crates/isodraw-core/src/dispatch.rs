//! Applying a named transform to an opaque value.
//!
//! The dispatcher accepts values whose kind is only known at runtime,
//! validates the arguments, resolves the kind with [`kind_of`] and routes to
//! that kind's implementation of the capability set. Every kind receives the
//! exact same arguments.
//!
//! Validation happens before any coordinate is touched, so a call either
//! returns a fully transformed value or an error.
//!
//! # Examples
//!
//! ```
//! # use isodraw_core::{dispatch, geometry::Point, kind::{Kind, Value, kind_of}, shape::Prism};
//! let prism: Value = Prism::cube(Point::ORIGIN).unwrap().into();
//! let origin = Value::from(Point::new(0.5, 0.5, 0.0));
//!
//! let turned = dispatch::rotate_z(&prism, &origin, std::f64::consts::FRAC_PI_4).unwrap();
//! assert_eq!(kind_of(&turned), Kind::Prism);
//!
//! // The origin must be a point
//! assert!(dispatch::rotate_z(&prism, &prism, 1.0).is_err());
//! ```

use log::{debug, trace};

use crate::{
    error::{GeometryError, ensure_finite},
    geometry::Point,
    kind::{Value, kind_of},
    transform::{Axis, Transform},
};

/// Applies `transform` to `value`.
///
/// `origin` is required for every operation except `Translate`, where it is
/// ignored and may be `None`.
///
/// # Errors
///
/// - [`GeometryError::InvalidArgument`] if a numeric parameter is not finite,
///   or the operation needs an origin and `origin` is missing or not a point.
/// - [`GeometryError::UnsupportedKind`] if `value` resolves to
///   [`Kind::Unknown`](crate::kind::Kind::Unknown).
pub fn apply(
    value: &Value,
    transform: &Transform,
    origin: Option<&Value>,
) -> Result<Value, GeometryError> {
    for (name, parameter) in transform.parameters() {
        ensure_finite(name, parameter)?;
    }

    let origin = if transform.needs_origin() {
        resolve_origin(origin)?
    } else {
        Point::ORIGIN
    };

    let kind = kind_of(value);
    let geometry = match value {
        Value::Geometry(geometry) => geometry,
        _ => {
            debug!(operation = transform.name(), value = value.describe(); "Cannot dispatch transform");
            return Err(GeometryError::UnsupportedKind { kind });
        }
    };

    trace!(operation = transform.name(), kind = kind.name(); "Dispatching transform");
    Ok(Value::Geometry(transform.apply_to(geometry, origin)))
}

/// Moves `value` by `(dx, dy, dz)`.
pub fn translate(value: &Value, dx: f64, dy: f64, dz: f64) -> Result<Value, GeometryError> {
    apply(value, &Transform::Translate { dx, dy, dz }, None)
}

/// Scales `value` about `origin` by a per-axis factor.
pub fn scale(
    value: &Value,
    origin: &Value,
    dx: f64,
    dy: f64,
    dz: f64,
) -> Result<Value, GeometryError> {
    apply(value, &Transform::Scale { dx, dy, dz }, Some(origin))
}

/// Rotates `value` about the X axis through `origin`, `angle` in radians.
pub fn rotate_x(value: &Value, origin: &Value, angle: f64) -> Result<Value, GeometryError> {
    rotate(value, origin, Axis::X, angle)
}

/// Rotates `value` about the Y axis through `origin`, `angle` in radians.
pub fn rotate_y(value: &Value, origin: &Value, angle: f64) -> Result<Value, GeometryError> {
    rotate(value, origin, Axis::Y, angle)
}

/// Rotates `value` about the Z axis through `origin`, `angle` in radians.
pub fn rotate_z(value: &Value, origin: &Value, angle: f64) -> Result<Value, GeometryError> {
    rotate(value, origin, Axis::Z, angle)
}

fn rotate(value: &Value, origin: &Value, axis: Axis, angle: f64) -> Result<Value, GeometryError> {
    apply(value, &Transform::Rotate { axis, angle }, Some(origin))
}

fn resolve_origin(origin: Option<&Value>) -> Result<Point, GeometryError> {
    let Some(origin) = origin else {
        return Err(GeometryError::invalid_argument(
            "origin",
            "this operation requires an origin point",
        ));
    };

    let point = origin.as_point().ok_or_else(|| {
        GeometryError::invalid_argument(
            "origin",
            format!("expected a Point, got {}", origin.describe()),
        )
    })?;

    if !point.is_finite() {
        return Err(GeometryError::invalid_argument(
            "origin",
            format!("expected finite coordinates, got {point}"),
        ));
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use std::f64::consts::FRAC_PI_2;

    use super::*;
    use crate::{
        color::Color,
        geometry::points_approx_eq,
        kind::{Geometry, Kind},
        path::Path,
        shape::{Prism, Rectangle, Solid},
    };

    fn unit_prism() -> Value {
        Prism::cube(Point::ORIGIN).unwrap().into()
    }

    #[test]
    fn test_translate_point() {
        let moved = translate(&Value::from(Point::new(1.0, 2.0, 3.0)), 1.0, 1.0, 1.0).unwrap();
        assert_eq!(moved.as_point(), Some(Point::new(2.0, 3.0, 4.0)));
    }

    #[test]
    fn test_translate_zero_is_noop() {
        let prism = unit_prism();
        assert_eq!(translate(&prism, 0.0, 0.0, 0.0).unwrap(), prism);
    }

    #[test]
    fn test_result_keeps_kind() {
        let origin = Value::from(Point::ORIGIN);
        let prism = unit_prism();

        for result in [
            translate(&prism, 1.0, 0.0, 0.0),
            scale(&prism, &origin, 2.0, 2.0, 2.0),
            rotate_x(&prism, &origin, 1.0),
            rotate_y(&prism, &origin, 1.0),
            rotate_z(&prism, &origin, 1.0),
        ] {
            assert_eq!(kind_of(&result.unwrap()), Kind::Prism);
        }
    }

    #[test]
    fn test_input_is_not_mutated() {
        let prism = unit_prism();
        let before = prism.clone();
        let _ = translate(&prism, 5.0, 5.0, 5.0).unwrap();
        assert_eq!(prism, before);
    }

    #[test]
    fn test_rotate_path_quarter_turn() {
        let path = Value::from(Path::new(vec![Point::new(1.0, 0.0, 0.0)]));
        let rotated = rotate_z(&path, &Value::from(Point::ORIGIN), FRAC_PI_2).unwrap();

        let Value::Geometry(Geometry::Path(rotated)) = rotated else {
            panic!("expected a path");
        };
        assert!(points_approx_eq(
            rotated.points()[0],
            Point::new(0.0, 1.0, 0.0),
            1e-12
        ));
    }

    #[test]
    fn test_non_point_origin_is_invalid_argument() {
        let prism = unit_prism();
        let not_points = [
            unit_prism(),
            Value::from(Color::rgb(1, 2, 3)),
            Value::Number(0.0),
            Value::Text("origin".to_string()),
        ];

        for origin in &not_points {
            for result in [
                scale(&prism, origin, 1.0, 1.0, 1.0),
                rotate_x(&prism, origin, 0.0),
                rotate_y(&prism, origin, 0.0),
                rotate_z(&prism, origin, 0.0),
            ] {
                assert!(matches!(
                    result,
                    Err(GeometryError::InvalidArgument { name: "origin", .. })
                ));
            }
        }
    }

    #[test]
    fn test_missing_origin_is_invalid_argument() {
        let result = apply(
            &unit_prism(),
            &Transform::Rotate {
                axis: Axis::X,
                angle: 1.0,
            },
            None,
        );
        assert!(matches!(
            result,
            Err(GeometryError::InvalidArgument { name: "origin", .. })
        ));
    }

    #[test]
    fn test_non_finite_parameters_are_invalid_argument() {
        let prism = unit_prism();
        let origin = Value::from(Point::ORIGIN);

        assert!(matches!(
            translate(&prism, f64::NAN, 0.0, 0.0),
            Err(GeometryError::InvalidArgument { name: "dx", .. })
        ));
        assert!(matches!(
            scale(&prism, &origin, 1.0, 1.0, f64::INFINITY),
            Err(GeometryError::InvalidArgument { name: "dz", .. })
        ));
        assert!(matches!(
            rotate_y(&prism, &origin, f64::NEG_INFINITY),
            Err(GeometryError::InvalidArgument { name: "angle", .. })
        ));
        assert!(matches!(
            rotate_y(&prism, &Value::from(Point::new(f64::NAN, 0.0, 0.0)), 1.0),
            Err(GeometryError::InvalidArgument { name: "origin", .. })
        ));
    }

    #[test]
    fn test_unknown_kind_is_unsupported() {
        let rect = Rectangle::new(Point::ORIGIN, 1.0, 1.0).unwrap();
        let solid = Value::from(Solid::extrude(rect.path(), 1.0).unwrap());

        for value in [solid, Value::Number(1.0), Value::from(Color::default())] {
            assert_eq!(
                translate(&value, 1.0, 0.0, 0.0),
                Err(GeometryError::UnsupportedKind {
                    kind: Kind::Unknown
                })
            );
        }
    }

    #[test]
    fn test_argument_errors_take_precedence() {
        // An unknown value with a bad origin reports the argument first
        let result = rotate_x(&Value::Number(1.0), &Value::Number(2.0), 1.0);
        assert!(matches!(
            result,
            Err(GeometryError::InvalidArgument { .. })
        ));
    }
}
