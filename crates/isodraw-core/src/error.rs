//! Error types for geometry construction and transform dispatch.

use thiserror::Error;

use crate::kind::Kind;

/// Errors produced by shape factories and the transform dispatcher.
///
/// Both variants are local and recoverable. A failing call never returns a
/// partially transformed value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// The value's kind is outside the closed set and cannot be dispatched.
    #[error("unsupported kind `{kind}`: only points, paths and the nine shape kinds can be transformed")]
    UnsupportedKind { kind: Kind },

    /// A required argument was of the wrong kind or a number was not usable.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: &'static str, reason: String },
}

impl GeometryError {
    /// Create an [`GeometryError::InvalidArgument`] for the named parameter.
    pub fn invalid_argument(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}

/// Reject NaN and infinite parameters.
pub(crate) fn ensure_finite(name: &'static str, value: f64) -> Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::invalid_argument(
            name,
            format!("expected a finite number, got {value}"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_finite() {
        assert_eq!(ensure_finite("dx", 1.5), Ok(1.5));
        assert!(ensure_finite("dx", f64::NAN).is_err());
        assert!(ensure_finite("dx", f64::INFINITY).is_err());
        assert!(ensure_finite("dx", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = GeometryError::invalid_argument("origin", "expected a Point, got Color");
        assert_eq!(
            err.to_string(),
            "invalid argument `origin`: expected a Point, got Color"
        );

        let err = GeometryError::UnsupportedKind {
            kind: Kind::Unknown,
        };
        assert!(err.to_string().starts_with("unsupported kind `Unknown`"));
    }
}
