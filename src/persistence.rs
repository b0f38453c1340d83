//! JSON save/load of a [`Scene`].
//!
//! The document layout is fixed: a `background-color` string and a `Shapes`
//! array whose order is the z-order (first element rearmost). Colors travel
//! in the canonical `0xrrggbbaa` string form. Loading is validate-then-commit:
//! a document parses completely into a fresh `Scene` or not at all, so a bad
//! file can never damage the scene currently on screen.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::color::Color;
use crate::scene::Scene;
use crate::shape::{Point, ShapeKind, Style};

/// Errors from scene save/load.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Required structure is missing or a value does not parse (unknown shape
    /// type, bad color string, non-numeric dimension, ...).
    #[error("malformed scene document: {0}")]
    Malformed(String),

    #[error("scene file I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Serialize, Deserialize)]
struct SceneDoc {
    #[serde(rename = "background-color")]
    background_color: Color,
    #[serde(rename = "Shapes")]
    shapes: Vec<ShapeDoc>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ShapeDoc {
    #[serde(rename = "Type")]
    kind: ShapeKind,
    #[serde(rename = "Coordinates")]
    coordinates: CoordinatesDoc,
    #[serde(rename = "Dimensions")]
    dimensions: DimensionsDoc,
    #[serde(rename = "fill-color")]
    fill_color: Color,
    #[serde(rename = "border-color")]
    border_color: Color,
    #[serde(rename = "border-width")]
    border_width: f64,
}

/// True position of the shape (top-left or center), never its size.
#[derive(Debug, Serialize, Deserialize)]
struct CoordinatesDoc {
    #[serde(rename = "x-location")]
    x: f64,
    #[serde(rename = "y-location")]
    y: f64,
}

/// Width/height for rectangles, radii for ellipses.
#[derive(Debug, Serialize, Deserialize)]
struct DimensionsDoc {
    width: f64,
    height: f64,
}

impl From<&Scene> for SceneDoc {
    fn from(scene: &Scene) -> Self {
        let shapes = scene
            .shapes()
            .iter()
            .map(|shape| {
                let origin = shape.origin();
                let (width, height) = shape.dimensions();
                ShapeDoc {
                    kind: shape.kind(),
                    coordinates: CoordinatesDoc {
                        x: origin.x,
                        y: origin.y,
                    },
                    dimensions: DimensionsDoc { width, height },
                    fill_color: shape.fill,
                    border_color: shape.outline,
                    border_width: shape.outline_thickness,
                }
            })
            .collect();
        Self {
            background_color: scene.background(),
            shapes,
        }
    }
}

impl From<SceneDoc> for Scene {
    fn from(doc: SceneDoc) -> Self {
        let mut scene = Scene::new();
        scene.set_background(doc.background_color);
        for shape in doc.shapes {
            scene.append_shape(
                shape.kind,
                Point::new(shape.coordinates.x, shape.coordinates.y),
                (shape.dimensions.width, shape.dimensions.height),
                Style {
                    fill: shape.fill_color,
                    outline: shape.border_color,
                    outline_thickness: shape.border_width,
                },
            );
        }
        scene
    }
}

/// Renders the scene as a pretty-printed JSON document.
pub fn serialize_scene(scene: &Scene) -> Result<String, DocumentError> {
    serde_json::to_string_pretty(&SceneDoc::from(scene))
        .map_err(|err| DocumentError::Malformed(err.to_string()))
}

/// Parses a JSON document into a new scene. Shape ids are freshly assigned;
/// array order becomes the z-order.
pub fn deserialize_scene(json: &str) -> Result<Scene, DocumentError> {
    let doc: SceneDoc =
        serde_json::from_str(json).map_err(|err| DocumentError::Malformed(err.to_string()))?;
    Ok(doc.into())
}

/// Writes the scene to `path` as JSON. The in-memory scene is untouched
/// either way.
pub fn save_scene(scene: &Scene, path: &Path) -> Result<(), DocumentError> {
    let json = serialize_scene(scene)?;
    fs::write(path, json)?;
    info!("saved {} shape(s) to {}", scene.len(), path.display());
    Ok(())
}

/// Reads and parses a scene file. Only returns a scene if the whole document
/// validated — callers swap it in on success, so a failed load leaves their
/// current scene exactly as it was.
pub fn load_scene(path: &Path) -> Result<Scene, DocumentError> {
    let json = fs::read_to_string(path)?;
    let scene = deserialize_scene(&json)?;
    info!("loaded {} shape(s) from {}", scene.len(), path.display());
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_shapes_array_is_malformed() {
        let err = deserialize_scene(r#"{ "background-color": "0xffe4c4ff" }"#).unwrap_err();
        assert!(matches!(err, DocumentError::Malformed(_)));
    }

    #[test]
    fn unknown_shape_type_is_malformed() {
        let json = r#"{
            "background-color": "0xffe4c4ff",
            "Shapes": [{
                "Type": "Triangle",
                "Coordinates": { "x-location": 0.0, "y-location": 0.0 },
                "Dimensions": { "width": 10.0, "height": 10.0 },
                "fill-color": "0xff6666ff",
                "border-color": "0x99cc99ff",
                "border-width": 5.0
            }]
        }"#;
        assert!(matches!(
            deserialize_scene(json).unwrap_err(),
            DocumentError::Malformed(_)
        ));
    }

    #[test]
    fn bad_color_string_is_malformed() {
        let json = r#"{
            "background-color": "not-a-color",
            "Shapes": []
        }"#;
        assert!(matches!(
            deserialize_scene(json).unwrap_err(),
            DocumentError::Malformed(_)
        ));
    }

    #[test]
    fn non_numeric_dimension_is_malformed() {
        let json = r#"{
            "background-color": "0xffe4c4ff",
            "Shapes": [{
                "Type": "Rectangle",
                "Coordinates": { "x-location": 0.0, "y-location": 0.0 },
                "Dimensions": { "width": "wide", "height": 10.0 },
                "fill-color": "0xff6666ff",
                "border-color": "0x99cc99ff",
                "border-width": 5.0
            }]
        }"#;
        assert!(matches!(
            deserialize_scene(json).unwrap_err(),
            DocumentError::Malformed(_)
        ));
    }

    #[test]
    fn named_colors_load() {
        let json = r##"{
            "background-color": "bisque",
            "Shapes": [{
                "Type": "Ellipse",
                "Coordinates": { "x-location": 50.0, "y-location": 60.0 },
                "Dimensions": { "width": 20.0, "height": 10.0 },
                "fill-color": "yellow",
                "border-color": "#99cc99",
                "border-width": 2.5
            }]
        }"##;
        let scene = deserialize_scene(json).unwrap();
        assert_eq!(scene.background(), Color::from_rgb(0xff, 0xe4, 0xc4));
        let shape = &scene.shapes()[0];
        assert_eq!(shape.kind(), ShapeKind::Ellipse);
        assert_eq!(shape.origin(), Point::new(50.0, 60.0));
        assert_eq!(shape.dimensions(), (20.0, 10.0));
        assert_eq!(shape.fill, Color::YELLOW);
    }
}
