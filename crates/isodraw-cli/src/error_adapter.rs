//! Error adapter for converting IsodrawError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.

use std::{fmt, ops::Range};

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use isodraw::{GeometryError, IsodrawError, kind::Kind};

/// Adapter for a scene syntax error with its source text.
pub struct DiagnosticAdapter<'a> {
    message: &'a str,
    span: Option<&'a Range<usize>>,
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(message: &'a str, span: Option<&'a Range<usize>>, src: &'a str) -> Self {
        Self { message, span, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("message", &self.message)
            .field("span", &self.span)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new("isodraw::scene"))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(
            "each [[step]] needs an `op` and the fields that operation takes",
        ))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.span?;
        let span = SourceSpan::new(span.start.into(), span.len());
        Some(Box::new(std::iter::once(LabeledSpan::new_primary_with_span(
            Some("here".to_string()),
            span,
        ))))
    }
}

/// Adapter for [`IsodrawError`] variants without source locations.
///
/// Step failures report the code and help of their root cause.
pub struct ErrorAdapter<'a>(pub &'a IsodrawError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(self.0)
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0.root_cause() {
            IsodrawError::Io(_) => "isodraw::io",
            IsodrawError::Geometry(GeometryError::UnsupportedKind { .. }) => {
                "isodraw::unsupported_kind"
            }
            IsodrawError::Geometry(GeometryError::InvalidArgument { .. }) => {
                "isodraw::invalid_argument"
            }
            IsodrawError::Scene { .. } => "isodraw::scene",
            IsodrawError::UnknownBinding(_) => "isodraw::binding",
            IsodrawError::Drawing(_) => "isodraw::drawing",
            IsodrawError::Config(_) => "isodraw::config",
            IsodrawError::Export(_) => "isodraw::export",
            IsodrawError::Step { .. } => return None,
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match self.0.root_cause() {
            IsodrawError::Geometry(GeometryError::UnsupportedKind { kind: Kind::Unknown }) => {
                "extruded solids can be drawn with add-shape but not transformed".to_string()
            }
            IsodrawError::Geometry(GeometryError::UnsupportedKind { .. }) => format!(
                "transforms accept {}",
                Kind::ALL.map(Kind::name).join(", ")
            ),
            IsodrawError::UnknownBinding(_) => {
                "bind a value with `let = \"name\"` on an earlier step".to_string()
            }
            _ => return None,
        };
        Some(Box::new(help))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        None
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        None
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A scene syntax error with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// An error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => std::error::Error::source(e),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an [`IsodrawError`] into a reportable error.
pub fn to_reportable(err: &IsodrawError) -> Reportable<'_> {
    match err {
        IsodrawError::Scene { message, span, src } => {
            Reportable::Diagnostic(DiagnosticAdapter::new(message, span.as_ref(), src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_error_is_diagnostic() {
        let err = IsodrawError::new_scene_error(
            "unknown variant `teleport`",
            Some(9..23),
            "[[step]]\nop = \"teleport\"\n",
        );

        let reportable = to_reportable(&err);
        match &reportable {
            Reportable::Diagnostic(d) => {
                assert_eq!(d.to_string(), "unknown variant `teleport`");
            }
            Reportable::Error(_) => panic!("Expected Diagnostic"),
        }

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 9);
        assert_eq!(labels[0].len(), 14);
    }

    #[test]
    fn test_scene_error_without_span_has_no_labels() {
        let err = IsodrawError::new_scene_error("bad", None, "");
        assert!(to_reportable(&err).labels().is_none());
    }

    #[test]
    fn test_step_error_uses_root_cause_code() {
        let err = IsodrawError::from(GeometryError::UnsupportedKind { kind: Kind::Unknown })
            .in_step(4, "translate");

        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(
            reportable.code().unwrap().to_string(),
            "isodraw::unsupported_kind"
        );
        assert!(reportable.help().is_some());
        assert!(reportable.to_string().starts_with("step 4 (`translate`) failed"));
    }

    #[test]
    fn test_export_error_code() {
        let err = IsodrawError::Export("unsupported value".to_string());

        let reportable = to_reportable(&err);
        assert!(matches!(reportable, Reportable::Error(_)));
        assert_eq!(reportable.code().unwrap().to_string(), "isodraw::export");
    }

    #[test]
    fn test_config_error() {
        let err = IsodrawError::Config("touch_radius must be a non-negative number".to_string());

        let reportable = to_reportable(&err);
        assert_eq!(reportable.code().unwrap().to_string(), "isodraw::config");
        assert!(reportable.help().is_none());
    }
}
