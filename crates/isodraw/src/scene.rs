//! Scene descriptions and their evaluation.
//!
//! A scene is an ordered list of steps. Each step runs one operation: a
//! shape factory, a transform, or a drawing edit. A step may bind its result
//! to a name with `let`; later steps refer to that name wherever a geometry
//! operand is expected.
//!
//! Scenes are written in TOML and read with [`parse`]:
//!
//! ```toml
//! [[step]]
//! let = "tower"
//! op = "prism"
//! origin = [0, 0, 0]
//! dx = 1
//! dy = 1
//! dz = 3
//!
//! [[step]]
//! let = "tilted"
//! op = "rotate-z"
//! target = "tower"
//! origin = [0.5, 0.5, 0]
//! angle = 0.785
//!
//! [[step]]
//! op = "add-shape"
//! target = "tilted"
//! color = "#3366cc"
//! ```
//!
//! Operands are either inline coordinates (`[x, y, z]` or `{ x, y, z }`) or
//! the name of an earlier binding. A name bound to something other than a
//! point, used where a point is needed, is an invalid argument.
//!
//! Every key of a step must belong to its operation. A misspelled key is a
//! scene error pointing at that key's value, never a silently ignored field.

use std::ops::Range;

use indexmap::IndexMap;
use log::{debug, info, trace, warn};
use serde::Deserialize;
use toml::Spanned;

use isodraw_core::{
    GeometryError,
    color::Color,
    dispatch,
    geometry::Point,
    kind::Value,
    path::Path,
    shape::{Circle, Cylinder, Knot, Octahedron, Prism, Pyramid, Rectangle, Solid, Stairs, Star},
};

use crate::{IsodrawError, drawing::Drawing};

/// Named values produced while evaluating a scene, in binding order.
pub type Bindings = IndexMap<String, Value>;

/// An ordered list of steps.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    steps: Vec<Step>,
}

impl Scene {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

/// One operation, optionally binding its result to a name.
#[derive(Debug, Clone)]
pub struct Step {
    binding: Option<String>,
    operation: Operation,
}

impl Step {
    pub fn new(binding: Option<&str>, operation: Operation) -> Self {
        Self {
            binding: binding.map(str::to_string),
            operation,
        }
    }

    pub fn binding(&self) -> Option<&str> {
        self.binding.as_deref()
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }
}

/// A geometry operand: inline coordinates or the name of a binding.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Operand {
    Point(Point),
    Name(String),
}

impl From<Point> for Operand {
    fn from(point: Point) -> Self {
        Operand::Point(point)
    }
}

impl From<&str> for Operand {
    fn from(name: &str) -> Self {
        Operand::Name(name.to_string())
    }
}

/// A color operand.
///
/// A string is looked up as a color binding first and parsed as a CSS color
/// otherwise. An integer is a packed ARGB value, alpha included.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ColorSpec {
    Argb(u32),
    Channels {
        red: u8,
        green: u8,
        blue: u8,
        #[serde(default = "opaque")]
        alpha: u8,
    },
    Named(String),
}

fn opaque() -> u8 {
    u8::MAX
}

fn one() -> f64 {
    1.0
}

fn default_vertices() -> usize {
    Circle::DEFAULT_VERTICES
}

/// Every operation a step can run.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "kebab-case", deny_unknown_fields)]
pub enum Operation {
    Point {
        at: Point,
    },
    Path {
        points: Vec<Operand>,
    },
    Circle {
        origin: Operand,
        radius: f64,
        #[serde(default = "default_vertices")]
        vertices: usize,
    },
    Rectangle {
        origin: Operand,
        #[serde(default = "one")]
        width: f64,
        #[serde(default = "one")]
        height: f64,
    },
    Star {
        origin: Operand,
        outer_radius: f64,
        inner_radius: f64,
        points: usize,
    },
    Cylinder {
        origin: Operand,
        #[serde(default = "one")]
        radius: f64,
        #[serde(default = "default_vertices")]
        vertices: usize,
        #[serde(default = "one")]
        height: f64,
    },
    Knot {
        origin: Operand,
    },
    Octahedron {
        origin: Operand,
    },
    Prism {
        origin: Operand,
        #[serde(default = "one")]
        dx: f64,
        #[serde(default = "one")]
        dy: f64,
        #[serde(default = "one")]
        dz: f64,
    },
    Pyramid {
        origin: Operand,
        #[serde(default = "one")]
        dx: f64,
        #[serde(default = "one")]
        dy: f64,
        #[serde(default = "one")]
        dz: f64,
    },
    Stairs {
        origin: Operand,
        step_count: usize,
    },
    Extrude {
        path: Operand,
        #[serde(default = "one")]
        height: f64,
    },
    Color {
        color: ColorSpec,
    },
    Translate {
        target: Operand,
        #[serde(default)]
        dx: f64,
        #[serde(default)]
        dy: f64,
        #[serde(default)]
        dz: f64,
    },
    /// Omitting both `dy` and `dz` scales uniformly by `dx`. Omitting only
    /// `dz` leaves Z unscaled.
    Scale {
        target: Operand,
        origin: Operand,
        dx: f64,
        dy: Option<f64>,
        dz: Option<f64>,
    },
    RotateX {
        target: Operand,
        origin: Operand,
        angle: f64,
    },
    RotateY {
        target: Operand,
        origin: Operand,
        angle: f64,
    },
    RotateZ {
        target: Operand,
        origin: Operand,
        angle: f64,
    },
    AddShape {
        target: Operand,
        color: ColorSpec,
    },
    AddPath {
        target: Operand,
        color: ColorSpec,
    },
    Clear,
}

impl Operation {
    /// Returns the operation name as written in scene files.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Point { .. } => "point",
            Operation::Path { .. } => "path",
            Operation::Circle { .. } => "circle",
            Operation::Rectangle { .. } => "rectangle",
            Operation::Star { .. } => "star",
            Operation::Cylinder { .. } => "cylinder",
            Operation::Knot { .. } => "knot",
            Operation::Octahedron { .. } => "octahedron",
            Operation::Prism { .. } => "prism",
            Operation::Pyramid { .. } => "pyramid",
            Operation::Stairs { .. } => "stairs",
            Operation::Extrude { .. } => "extrude",
            Operation::Color { .. } => "color",
            Operation::Translate { .. } => "translate",
            Operation::Scale { .. } => "scale",
            Operation::RotateX { .. } => "rotate-x",
            Operation::RotateY { .. } => "rotate-y",
            Operation::RotateZ { .. } => "rotate-z",
            Operation::AddShape { .. } => "add-shape",
            Operation::AddPath { .. } => "add-path",
            Operation::Clear => "clear",
        }
    }
}

/// The document shape before each step is matched to its operation.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawScene {
    #[serde(default)]
    step: Vec<Spanned<RawStep>>,
}

/// A step's keys in document order, each with the span of its value.
type RawStep = IndexMap<String, Spanned<toml::Value>>;

/// Parses TOML scene source.
///
/// # Errors
///
/// Returns [`IsodrawError::Scene`] carrying `source` and the span of the
/// offending value. Errors that belong to no single key, such as a missing
/// field, point at the step's `[[step]]` header.
pub fn parse(source: &str) -> Result<Scene, IsodrawError> {
    let raw: RawScene = toml::from_str(source).map_err(|err| {
        IsodrawError::new_scene_error(err.message().trim(), err.span(), source)
    })?;

    let steps = raw
        .step
        .into_iter()
        .map(|step| parse_step(step, source))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Scene::new(steps))
}

fn parse_step(step: Spanned<RawStep>, source: &str) -> Result<Step, IsodrawError> {
    let header = step.span();
    let mut fields = step.into_inner();

    let binding = match fields.shift_remove("let") {
        None => None,
        Some(value) => {
            let span = value.span();
            match value.into_inner() {
                toml::Value::String(name) => Some(name),
                other => {
                    return Err(IsodrawError::new_scene_error(
                        format!("`let` must be a string, found {}", other.type_str()),
                        Some(span),
                        source,
                    ));
                }
            }
        }
    };

    let operation = deserialize_operation(&fields).map_err(|err| {
        let span = error_span(&fields, &err).unwrap_or(header);
        IsodrawError::new_scene_error(err.message().trim(), Some(span), source)
    })?;

    Ok(Step { binding, operation })
}

fn deserialize_operation(fields: &RawStep) -> Result<Operation, toml::de::Error> {
    let table: toml::Table = fields
        .iter()
        .map(|(key, value)| (key.clone(), value.get_ref().clone()))
        .collect();
    Operation::deserialize(toml::Value::Table(table))
}

/// Finds the value an operation error is about.
///
/// Field errors do not name their field, so each key is dropped in turn: the
/// first key whose absence changes the error is the one at fault.
fn error_span(fields: &RawStep, err: &toml::de::Error) -> Option<Range<usize>> {
    let message = err.message();
    if message.starts_with("missing field") {
        return None;
    }
    if message.contains("unknown variant") {
        return fields.get("op").map(Spanned::span);
    }
    if let Some(name) = message
        .strip_prefix("unknown field `")
        .and_then(|rest| rest.split('`').next())
    {
        return fields.get(name).map(Spanned::span);
    }

    fields
        .iter()
        .filter(|(key, _)| key.as_str() != "op")
        .find_map(|(key, value)| {
            let mut rest = fields.clone();
            rest.shift_remove(key);
            let changed = match deserialize_operation(&rest) {
                Ok(_) => true,
                Err(other) => other.message() != message,
            };
            changed.then(|| value.span())
        })
}

/// Runs scene steps against a drawing, tracking bindings.
pub(crate) struct Evaluator<'a> {
    drawing: &'a mut Drawing,
    bindings: Bindings,
}

impl<'a> Evaluator<'a> {
    pub(crate) fn new(drawing: &'a mut Drawing) -> Self {
        Self {
            drawing,
            bindings: Bindings::new(),
        }
    }

    /// Runs every step in order, stopping at the first failure.
    pub(crate) fn run(mut self, scene: &Scene) -> Result<Bindings, IsodrawError> {
        info!(steps = scene.steps.len(); "Evaluating scene");

        for (index, step) in scene.steps.iter().enumerate() {
            let op = step.operation.name();
            let produced = self
                .run_operation(&step.operation)
                .map_err(|err| err.in_step(index + 1, op))?;

            match (produced, &step.binding) {
                (Some(value), Some(name)) => {
                    trace!(name, kind = value.describe(); "Binding value");
                    if self.bindings.insert(name.clone(), value).is_some() {
                        debug!(name; "Binding shadowed");
                    }
                }
                (Some(value), None) => {
                    debug!(step = index + 1, op, kind = value.describe(); "Discarding unbound result");
                }
                (None, Some(name)) => {
                    warn!(step = index + 1, op, name; "Operation produces no value to bind");
                }
                (None, None) => {}
            }
        }

        info!(bindings = self.bindings.len(), items = self.drawing.len(); "Scene evaluated");
        Ok(self.bindings)
    }

    fn run_operation(&mut self, operation: &Operation) -> Result<Option<Value>, IsodrawError> {
        let value = match operation {
            Operation::Point { at } => Value::from(*at),
            Operation::Path { points } => {
                let points = points
                    .iter()
                    .map(|operand| self.point(operand, "points"))
                    .collect::<Result<Vec<_>, _>>()?;
                Value::from(Path::new(points))
            }
            Operation::Circle {
                origin,
                radius,
                vertices,
            } => Circle::new(self.origin(origin)?, *radius, *vertices)?.into(),
            Operation::Rectangle {
                origin,
                width,
                height,
            } => Rectangle::new(self.origin(origin)?, *width, *height)?.into(),
            Operation::Star {
                origin,
                outer_radius,
                inner_radius,
                points,
            } => Star::new(self.origin(origin)?, *outer_radius, *inner_radius, *points)?.into(),
            Operation::Cylinder {
                origin,
                radius,
                vertices,
                height,
            } => Cylinder::new(self.origin(origin)?, *radius, *vertices, *height)?.into(),
            Operation::Knot { origin } => Knot::new(self.origin(origin)?)?.into(),
            Operation::Octahedron { origin } => Octahedron::new(self.origin(origin)?)?.into(),
            Operation::Prism { origin, dx, dy, dz } => {
                Prism::new(self.origin(origin)?, *dx, *dy, *dz)?.into()
            }
            Operation::Pyramid { origin, dx, dy, dz } => {
                Pyramid::new(self.origin(origin)?, *dx, *dy, *dz)?.into()
            }
            Operation::Stairs { origin, step_count } => {
                Stairs::new(self.origin(origin)?, *step_count)?.into()
            }
            Operation::Extrude { path, height } => {
                let value = self.resolve(path)?;
                let outline = value
                    .as_geometry()
                    .and_then(|geometry| geometry.as_path())
                    .ok_or_else(|| {
                        GeometryError::invalid_argument(
                            "path",
                            format!("expected a Path, got {}", value.describe()),
                        )
                    })?;
                Solid::extrude(outline, *height)?.into()
            }
            Operation::Color { color } => Value::from(self.color(color)?),
            Operation::Translate { target, dx, dy, dz } => {
                dispatch::translate(&self.resolve(target)?, *dx, *dy, *dz)?
            }
            Operation::Scale {
                target,
                origin,
                dx,
                dy,
                dz,
            } => {
                let (dy, dz) = match (dy, dz) {
                    (None, None) => (*dx, *dx),
                    (dy, dz) => (dy.unwrap_or(*dx), dz.unwrap_or(1.0)),
                };
                dispatch::scale(
                    &self.resolve(target)?,
                    &self.resolve(origin)?,
                    *dx,
                    dy,
                    dz,
                )?
            }
            Operation::RotateX {
                target,
                origin,
                angle,
            } => dispatch::rotate_x(&self.resolve(target)?, &self.resolve(origin)?, *angle)?,
            Operation::RotateY {
                target,
                origin,
                angle,
            } => dispatch::rotate_y(&self.resolve(target)?, &self.resolve(origin)?, *angle)?,
            Operation::RotateZ {
                target,
                origin,
                angle,
            } => dispatch::rotate_z(&self.resolve(target)?, &self.resolve(origin)?, *angle)?,
            Operation::AddShape { target, color } => {
                let color = self.color(color)?;
                let value = self.resolve(target)?;
                self.drawing.add_shape(&value, color)?;
                return Ok(None);
            }
            Operation::AddPath { target, color } => {
                let color = self.color(color)?;
                let value = self.resolve(target)?;
                self.drawing.add_path(&value, color)?;
                return Ok(None);
            }
            Operation::Clear => {
                self.drawing.clear();
                return Ok(None);
            }
        };

        Ok(Some(value))
    }

    /// Resolves an operand to a value. Inline coordinates become a point.
    fn resolve(&self, operand: &Operand) -> Result<Value, IsodrawError> {
        match operand {
            Operand::Point(point) => Ok(Value::from(*point)),
            Operand::Name(name) => self
                .bindings
                .get(name)
                .cloned()
                .ok_or_else(|| IsodrawError::UnknownBinding(name.clone())),
        }
    }

    fn origin(&self, operand: &Operand) -> Result<Point, IsodrawError> {
        self.point(operand, "origin")
    }

    fn point(&self, operand: &Operand, name: &'static str) -> Result<Point, IsodrawError> {
        let value = self.resolve(operand)?;
        value.as_point().ok_or_else(|| {
            GeometryError::invalid_argument(
                name,
                format!("expected a Point, got {}", value.describe()),
            )
            .into()
        })
    }

    fn color(&self, spec: &ColorSpec) -> Result<Color, IsodrawError> {
        match spec {
            ColorSpec::Argb(argb) => Ok(Color::from_argb(*argb)),
            ColorSpec::Channels {
                red,
                green,
                blue,
                alpha,
            } => Ok(Color::rgba(*red, *green, *blue, *alpha)),
            ColorSpec::Named(name) => match self.bindings.get(name) {
                Some(Value::Color(color)) => Ok(*color),
                Some(other) => Err(GeometryError::invalid_argument(
                    "color",
                    format!("`{name}` is a {}, not a Color", other.describe()),
                )
                .into()),
                None => Color::parse(name).map_err(|err| {
                    GeometryError::invalid_argument("color", err).into()
                }),
            },
        }
    }
}
