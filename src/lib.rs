#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod editor;
pub mod input;
pub mod panels;
pub mod persistence;
pub mod scene;
pub mod shape;
pub mod snapshot;

pub use app::SketchApp;
pub use color::{Color, ColorParseError};
pub use editor::{EditorState, Mode};
pub use input::PointerEvent;
pub use persistence::{deserialize_scene, load_scene, save_scene, serialize_scene, DocumentError};
pub use scene::{Scene, DEFAULT_BACKGROUND};
pub use shape::{Point, Shape, ShapeGeometry, ShapeId, ShapeKind, Style};
pub use snapshot::{export_png, render_scene, SnapshotError};
