//! Isodraw - isometric geometry, transforms and drawing scenes.
//!
//! Shapes are built from points and paths, moved with translate, scale and
//! rotate transforms, and collected on a [`drawing::Drawing`] together with
//! their colors. Scenes describe that work as ordered TOML steps.

pub mod config;
pub mod drawing;
pub mod scene;

mod error;

pub use isodraw_core::{GeometryError, color, dispatch, geometry, kind, path, shape, transform};

pub use error::IsodrawError;

use log::{debug, info, trace};

use config::AppConfig;
use drawing::Drawing;
use scene::{Bindings, Evaluator, Scene};

/// The result of evaluating a scene: the drawing and every named value.
#[derive(Debug)]
pub struct Evaluation {
    drawing: Drawing,
    bindings: Bindings,
}

impl Evaluation {
    pub fn drawing(&self) -> &Drawing {
        &self.drawing
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    pub fn into_parts(self) -> (Drawing, Bindings) {
        (self.drawing, self.bindings)
    }
}

/// Builder for parsing and evaluating isodraw scenes.
///
/// # Examples
///
/// ```rust
/// use isodraw::{SceneBuilder, config::AppConfig};
///
/// let source = r##"
/// [[step]]
/// let = "cube"
/// op = "prism"
/// origin = [0, 0, 0]
///
/// [[step]]
/// op = "add-shape"
/// target = "cube"
/// color = "steelblue"
/// "##;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let scene = builder.parse(source).expect("Failed to parse");
/// let evaluation = builder.evaluate(&scene).expect("Failed to evaluate");
///
/// assert_eq!(evaluation.drawing().len(), 1);
/// ```
#[derive(Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse TOML scene source.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Scene`] carrying the source and the span of
    /// the offending text when the document is not a valid scene, including
    /// a step with a key its operation does not take.
    pub fn parse(&self, source: &str) -> Result<Scene, IsodrawError> {
        info!("Parsing scene");

        let scene = scene::parse(source)?;

        debug!(steps = scene.steps().len(); "Scene parsed successfully");
        trace!(scene:?; "Parsed scene");

        Ok(scene)
    }

    /// Evaluate a scene on a fresh drawing built from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Config`] for an unusable configuration and
    /// [`IsodrawError::Step`] naming the first step that failed.
    pub fn evaluate(&self, scene: &Scene) -> Result<Evaluation, IsodrawError> {
        let mut drawing = Drawing::from_config(&self.config)?;
        let bindings = self.evaluate_on(scene, &mut drawing)?;
        Ok(Evaluation { drawing, bindings })
    }

    /// Evaluate a scene on an existing drawing, keeping its items and
    /// listeners.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Step`] naming the first step that failed.
    /// Items added by earlier steps stay on the drawing.
    pub fn evaluate_on(&self, scene: &Scene, drawing: &mut Drawing) -> Result<Bindings, IsodrawError> {
        Evaluator::new(drawing).run(scene)
    }
}
