//! Configuration types for isometric drawings.
//!
//! This module provides configuration structures that control how a drawing
//! surface treats its items. All types implement [`serde::Deserialize`] for
//! flexible loading from external sources.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level application configuration combining drawing and style settings.
//! - [`DrawingConfig`] - Ordering and touch lookup options handed to the drawing surface.
//! - [`StyleConfig`] - Visual styling options such as background color.
//!
//! # Example
//!
//! ```
//! # use isodraw::config::AppConfig;
//! // Use default configuration
//! let config = AppConfig::default();
//! assert!(config.drawing().sort());
//! assert!(config.style().background_color().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use isodraw_core::color::Color;

/// Top-level application configuration combining drawing and style settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Drawing surface configuration section.
    #[serde(default)]
    drawing: DrawingConfig,

    /// Style configuration section.
    #[serde(default)]
    style: StyleConfig,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] with the specified drawing and style configurations.
    pub fn new(drawing: DrawingConfig, style: StyleConfig) -> Self {
        Self { drawing, style }
    }

    /// Returns the drawing configuration.
    pub fn drawing(&self) -> &DrawingConfig {
        &self.drawing
    }

    /// Returns the style configuration.
    pub fn style(&self) -> &StyleConfig {
        &self.style
    }
}

/// Options a drawing surface applies when ordering and looking up items.
///
/// Isodraw stores these and hands them on; the renderer that consumes the
/// drawing does the sorting, culling and hit-testing.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DrawingConfig {
    /// Sort items back to front before drawing. Paths must be wound
    /// counter-clockwise for sorting to be correct.
    sort: bool,

    /// Skip faces that point away from the viewer.
    cull: bool,

    /// Skip items that fall outside the view bounds.
    bounds_check: bool,

    /// Search items front to back when resolving a touch.
    reverse_sort_for_lookup: bool,

    /// Treat a touch as a circle of [`touch_radius`](Self::touch_radius)
    /// instead of a single point.
    touch_radius_lookup: bool,

    /// Radius of the touch circle, in screen pixels.
    touch_radius: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            sort: true,
            cull: false,
            bounds_check: false,
            reverse_sort_for_lookup: false,
            touch_radius_lookup: false,
            touch_radius: 1.0,
        }
    }
}

impl DrawingConfig {
    pub fn sort(&self) -> bool {
        self.sort
    }

    pub fn cull(&self) -> bool {
        self.cull
    }

    pub fn bounds_check(&self) -> bool {
        self.bounds_check
    }

    pub fn reverse_sort_for_lookup(&self) -> bool {
        self.reverse_sort_for_lookup
    }

    pub fn touch_radius_lookup(&self) -> bool {
        self.touch_radius_lookup
    }

    pub fn touch_radius(&self) -> f64 {
        self.touch_radius
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    pub fn with_cull(mut self, cull: bool) -> Self {
        self.cull = cull;
        self
    }

    pub fn with_bounds_check(mut self, bounds_check: bool) -> Self {
        self.bounds_check = bounds_check;
        self
    }

    pub fn with_reverse_sort_for_lookup(mut self, reverse: bool) -> Self {
        self.reverse_sort_for_lookup = reverse;
        self
    }

    /// Enables circular touch lookup with the given radius.
    pub fn with_touch_radius(mut self, radius: f64) -> Self {
        self.touch_radius_lookup = true;
        self.touch_radius = radius;
        self
    }

    /// Checks the values a file may have set out of range.
    ///
    /// # Errors
    ///
    /// Returns a message if the touch radius is negative or not finite.
    pub fn validate(&self) -> Result<(), String> {
        if !self.touch_radius.is_finite() || self.touch_radius < 0.0 {
            return Err(format!(
                "touch_radius must be a non-negative number, got {}",
                self.touch_radius
            ));
        }
        Ok(())
    }
}

/// Visual styling configuration for drawings.
///
/// Fields that are not set fall back to renderer defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    /// Background [`Color`] for drawings, as a CSS color string.
    #[serde(default)]
    background_color: Option<String>,
}

impl StyleConfig {
    /// Creates a style with the given background color string.
    pub fn with_background_color(color: impl Into<String>) -> Self {
        Self {
            background_color: Some(color.into()),
        }
    }

    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured color string cannot be parsed
    /// into a valid [`Color`].
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        self.background_color
            .as_deref()
            .map(Color::parse)
            .transpose()
            .map_err(|err| format!("Invalid background color in config: {err}"))
    }
}
