//! The drawing surface model.
//!
//! A [`Drawing`] collects colored paths and shapes for a renderer to consume.
//! It does no projection or rasterization; it keeps the items in insertion
//! order along with the [`DrawingConfig`] the renderer should honor, and it
//! notifies registered [`DrawingListener`]s about clears and clicks.
//!
//! Hit-testing belongs to the renderer. Once the renderer knows which face
//! of which item was touched it reports it through [`Drawing::click`], and
//! the drawing turns that into a [`ClickEvent`] for listeners.

use std::fmt;

use log::{debug, info, warn};

use isodraw_core::{
    color::Color,
    kind::{Kind, Value},
    path::Path,
};

use crate::{
    IsodrawError,
    config::{AppConfig, DrawingConfig},
};

/// Receives notifications from a [`Drawing`].
///
/// All methods default to doing nothing.
pub trait DrawingListener {
    /// Called after every item has been removed.
    fn on_clear(&mut self) {}

    /// Called when a face of an item was clicked.
    fn on_click(&mut self, _event: &ClickEvent) {}
}

/// The payload of a click on a drawn face.
#[derive(Debug, Clone, PartialEq)]
pub struct ClickEvent {
    item: usize,
    shape_type: &'static str,
    points: Vec<[f64; 3]>,
}

impl ClickEvent {
    /// Index of the clicked item, in insertion order
    pub fn item(&self) -> usize {
        self.item
    }

    /// Kind name of the clicked item, `"Shape"` for kindless solids
    pub fn shape_type(&self) -> &'static str {
        self.shape_type
    }

    /// The clicked face's points as `[x, y, z]` triples, in path order
    pub fn points(&self) -> &[[f64; 3]] {
        &self.points
    }
}

/// A colored path or shape on the drawing.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    kind: Kind,
    faces: Vec<Path>,
    color: Color,
}

impl Item {
    /// The item's kind, `Unknown` for kindless solids
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Name reported to listeners for this item.
    pub fn shape_type(&self) -> &'static str {
        match self.kind {
            Kind::Unknown => "Shape",
            kind => kind.name(),
        }
    }

    /// The item's faces. Flat items have exactly one.
    pub fn faces(&self) -> &[Path] {
        &self.faces
    }

    pub fn color(&self) -> Color {
        self.color
    }
}

/// A collection of colored items with its drawing options.
pub struct Drawing {
    config: DrawingConfig,
    background: Color,
    items: Vec<Item>,
    listeners: Vec<Box<dyn DrawingListener>>,
}

impl Drawing {
    /// Creates an empty drawing.
    pub fn new(config: DrawingConfig, background: Color) -> Self {
        Self {
            config,
            background,
            items: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Creates an empty drawing from application configuration.
    ///
    /// The background defaults to transparent.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Config`] if the drawing options are out of
    /// range or the background color does not parse.
    pub fn from_config(config: &AppConfig) -> Result<Self, IsodrawError> {
        config.drawing().validate().map_err(IsodrawError::Config)?;
        let background = config
            .style()
            .background_color()
            .map_err(IsodrawError::Config)?
            .unwrap_or(Color::TRANSPARENT);

        Ok(Self::new(config.drawing().clone(), background))
    }

    pub fn config(&self) -> &DrawingConfig {
        &self.config
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Registers a listener for clear and click notifications.
    pub fn add_listener(&mut self, listener: Box<dyn DrawingListener>) {
        self.listeners.push(listener);
    }

    /// Adds a solid shape and returns its item index.
    ///
    /// Accepts the six solid kinds and kindless solids such as extrusions.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Drawing`] for points, flat kinds and
    /// non-geometry values.
    pub fn add_shape(&mut self, value: &Value, color: Color) -> Result<usize, IsodrawError> {
        let (kind, faces) = match value {
            Value::Solid(solid) => (Kind::Unknown, solid.faces().to_vec()),
            Value::Geometry(geometry) => match geometry.as_solid() {
                Some(solid) => (geometry.kind(), solid.faces().to_vec()),
                None => return Err(invalid_item("shape", value)),
            },
            _ => return Err(invalid_item("shape", value)),
        };

        Ok(self.push(Item { kind, faces, color }))
    }

    /// Adds a path or flat shape and returns its item index.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Drawing`] for points, solids and non-geometry
    /// values.
    pub fn add_path(&mut self, value: &Value, color: Color) -> Result<usize, IsodrawError> {
        let geometry = value
            .as_geometry()
            .ok_or_else(|| invalid_item("path", value))?;
        let path = geometry
            .as_path()
            .ok_or_else(|| invalid_item("path", value))?;

        Ok(self.push(Item {
            kind: geometry.kind(),
            faces: vec![path.clone()],
            color,
        }))
    }

    /// Removes every item and notifies listeners.
    pub fn clear(&mut self) {
        info!(items = self.items.len(); "Clearing drawing");
        self.items.clear();
        for listener in &mut self.listeners {
            listener.on_clear();
        }
    }

    /// Reports a click on face `face` of item `item` and notifies listeners.
    ///
    /// # Errors
    ///
    /// Returns [`IsodrawError::Drawing`] if either index is out of range.
    pub fn click(&mut self, item: usize, face: usize) -> Result<ClickEvent, IsodrawError> {
        let clicked = self.items.get(item).ok_or_else(|| {
            IsodrawError::Drawing(format!(
                "no item {item}, the drawing has {} items",
                self.items.len()
            ))
        })?;
        let path = clicked.faces.get(face).ok_or_else(|| {
            IsodrawError::Drawing(format!(
                "item {item} has no face {face}, it has {} faces",
                clicked.faces.len()
            ))
        })?;

        let event = ClickEvent {
            item,
            shape_type: clicked.shape_type(),
            points: path.to_coordinates(),
        };
        debug!(item, face, shape_type = event.shape_type; "Item clicked");

        for listener in &mut self.listeners {
            listener.on_click(&event);
        }
        Ok(event)
    }

    fn push(&mut self, item: Item) -> usize {
        debug!(kind = item.kind.name(), faces = item.faces.len(); "Adding item");
        self.items.push(item);
        self.items.len() - 1
    }
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new(DrawingConfig::default(), Color::TRANSPARENT)
    }
}

impl fmt::Debug for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drawing")
            .field("config", &self.config)
            .field("background", &self.background)
            .field("items", &self.items)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

fn invalid_item(expected: &str, value: &Value) -> IsodrawError {
    warn!(expected, got = value.describe(); "Rejected drawing item");
    IsodrawError::Drawing(format!(
        "invalid {expected} type: expected a {expected}, got {}",
        value.describe()
    ))
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use isodraw_core::{
        geometry::Point,
        shape::{Circle, Prism, Rectangle, Solid},
    };

    use super::*;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        clicks: Vec<ClickEvent>,
    }

    struct RecordingListener(Rc<RefCell<Recorder>>);

    impl DrawingListener for RecordingListener {
        fn on_clear(&mut self) {
            self.0.borrow_mut().clears += 1;
        }

        fn on_click(&mut self, event: &ClickEvent) {
            self.0.borrow_mut().clicks.push(event.clone());
        }
    }

    fn red() -> Color {
        Color::rgb(255, 0, 0)
    }

    #[test]
    fn test_add_shape_accepts_solids() {
        let mut drawing = Drawing::default();
        let prism = Value::from(Prism::cube(Point::ORIGIN).unwrap());
        let rect = Rectangle::new(Point::ORIGIN, 1.0, 1.0).unwrap();
        let slab = Value::from(Solid::extrude(rect.path(), 0.5).unwrap());

        assert_eq!(drawing.add_shape(&prism, red()).unwrap(), 0);
        assert_eq!(drawing.add_shape(&slab, red()).unwrap(), 1);
        assert_eq!(drawing.items()[0].kind(), Kind::Prism);
        assert_eq!(drawing.items()[0].faces().len(), 6);
        assert_eq!(drawing.items()[1].shape_type(), "Shape");
    }

    #[test]
    fn test_add_shape_rejects_flat_values() {
        let mut drawing = Drawing::default();
        let circle = Value::from(Circle::new(Point::ORIGIN, 1.0, 8).unwrap());

        assert!(drawing.add_shape(&circle, red()).is_err());
        assert!(drawing.add_shape(&Value::from(Point::ORIGIN), red()).is_err());
        assert!(drawing.add_shape(&Value::Number(1.0), red()).is_err());
        assert!(drawing.is_empty());
    }

    #[test]
    fn test_add_path_accepts_flat_kinds() {
        let mut drawing = Drawing::default();
        let circle = Value::from(Circle::new(Point::ORIGIN, 1.0, 8).unwrap());
        let path = Value::from(Path::new(vec![Point::ORIGIN, Point::new(1.0, 0.0, 0.0)]));

        drawing.add_path(&circle, red()).unwrap();
        drawing.add_path(&path, red()).unwrap();

        assert_eq!(drawing.len(), 2);
        assert_eq!(drawing.items()[0].kind(), Kind::Circle);
        assert_eq!(drawing.items()[0].faces()[0].len(), 8);
        assert_eq!(drawing.items()[1].shape_type(), "Path");
    }

    #[test]
    fn test_add_path_rejects_solids() {
        let mut drawing = Drawing::default();
        let prism = Value::from(Prism::cube(Point::ORIGIN).unwrap());
        let err = drawing.add_path(&prism, red()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Drawing error: invalid path type: expected a path, got Prism"
        );
    }

    #[test]
    fn test_clear_notifies_listeners() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut drawing = Drawing::default();
        drawing.add_listener(Box::new(RecordingListener(Rc::clone(&recorder))));

        drawing
            .add_shape(&Value::from(Prism::cube(Point::ORIGIN).unwrap()), red())
            .unwrap();
        drawing.clear();

        assert!(drawing.is_empty());
        assert_eq!(recorder.borrow().clears, 1);
    }

    #[test]
    fn test_click_reports_face_points() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut drawing = Drawing::default();
        drawing.add_listener(Box::new(RecordingListener(Rc::clone(&recorder))));

        let rect = Value::from(Rectangle::new(Point::ORIGIN, 2.0, 1.0).unwrap());
        drawing.add_path(&rect, red()).unwrap();

        let event = drawing.click(0, 0).unwrap();
        assert_eq!(event.shape_type(), "Rectangle");
        assert_eq!(
            event.points(),
            &[
                [0.0, 0.0, 0.0],
                [2.0, 0.0, 0.0],
                [2.0, 1.0, 0.0],
                [0.0, 1.0, 0.0]
            ]
        );
        assert_eq!(recorder.borrow().clicks, vec![event]);
    }

    #[test]
    fn test_click_out_of_range() {
        let mut drawing = Drawing::default();
        assert!(drawing.click(0, 0).is_err());

        let rect = Value::from(Rectangle::new(Point::ORIGIN, 2.0, 1.0).unwrap());
        drawing.add_path(&rect, red()).unwrap();
        assert!(drawing.click(0, 1).is_err());
    }

    #[test]
    fn test_from_config() {
        let drawing = Drawing::from_config(&AppConfig::default()).unwrap();
        assert_eq!(drawing.background(), Color::TRANSPARENT);
        assert!(drawing.config().sort());
    }
}
