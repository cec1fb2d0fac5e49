//! TOML export of evaluated drawings.
//!
//! The document carries the drawing options, the background color and one
//! `[[item]]` table per drawn item, faces listed as `[x, y, z]` triples.

use serde::Serialize;

use isodraw::{IsodrawError, config::DrawingConfig, drawing::Drawing};

#[derive(Debug, Serialize)]
struct DrawingDocument<'a> {
    background: String,
    drawing: &'a DrawingConfig,
    item: Vec<ItemDocument>,
}

#[derive(Debug, Serialize)]
struct ItemDocument {
    #[serde(rename = "type")]
    shape_type: &'static str,
    color: String,
    faces: Vec<Vec<[f64; 3]>>,
}

/// Serializes `drawing` into a TOML document.
///
/// # Errors
///
/// Returns [`IsodrawError::Export`] if the document cannot be serialized.
pub fn render(drawing: &Drawing) -> Result<String, IsodrawError> {
    let document = DrawingDocument {
        background: drawing.background().to_string(),
        drawing: drawing.config(),
        item: drawing
            .items()
            .iter()
            .map(|item| ItemDocument {
                shape_type: item.shape_type(),
                color: item.color().to_string(),
                faces: item.faces().iter().map(|face| face.to_coordinates()).collect(),
            })
            .collect(),
    };

    toml::to_string(&document).map_err(|err| IsodrawError::Export(err.to_string()))
}
