//! Error types for Isodraw operations.
//!
//! This module provides the main error type [`IsodrawError`] which wraps
//! the error conditions that can occur while building and evaluating
//! scenes.

use std::{io, ops::Range};

use thiserror::Error;

use isodraw_core::GeometryError;

/// The main error type for Isodraw operations.
///
/// # Diagnostic Variants
///
/// The `Scene` variant carries the scene source and, when known, the byte
/// range the error points at. This can be used for rich error reporting.
#[derive(Debug, Error)]
pub enum IsodrawError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    #[error("{message}")]
    Scene {
        message: String,
        span: Option<Range<usize>>,
        src: String,
    },

    #[error("step {step} (`{op}`) failed: {source}")]
    Step {
        step: usize,
        op: &'static str,
        #[source]
        source: Box<IsodrawError>,
    },

    #[error("Unknown binding `{0}`")]
    UnknownBinding(String),

    #[error("Drawing error: {0}")]
    Drawing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(String),
}

impl IsodrawError {
    /// Create a new `Scene` error with the associated source text.
    pub fn new_scene_error(
        message: impl Into<String>,
        span: Option<Range<usize>>,
        src: impl Into<String>,
    ) -> Self {
        Self::Scene {
            message: message.into(),
            span,
            src: src.into(),
        }
    }

    /// Attach the failing scene step to an error.
    pub fn in_step(self, step: usize, op: &'static str) -> Self {
        Self::Step {
            step,
            op,
            source: Box::new(self),
        }
    }

    /// Returns the innermost error, looking through `Step` wrappers.
    pub fn root_cause(&self) -> &IsodrawError {
        match self {
            Self::Step { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_error_display() {
        let err = IsodrawError::UnknownBinding("tower".to_string()).in_step(3, "rotate-z");
        assert_eq!(
            err.to_string(),
            "step 3 (`rotate-z`) failed: Unknown binding `tower`"
        );
    }

    #[test]
    fn test_export_error_display() {
        let err = IsodrawError::Export("unsupported value".to_string());
        assert_eq!(err.to_string(), "Export error: unsupported value");
        assert!(matches!(err.root_cause(), IsodrawError::Export(_)));
    }

    #[test]
    fn test_root_cause() {
        let err = IsodrawError::from(GeometryError::invalid_argument("origin", "not a point"))
            .in_step(1, "scale");
        assert!(matches!(
            err.root_cause(),
            IsodrawError::Geometry(GeometryError::InvalidArgument { name: "origin", .. })
        ));
    }
}
