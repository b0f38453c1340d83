use serde::{Deserialize, Serialize};

use crate::color::Color;

/// A point in canvas coordinates (logical pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Identifier of a shape within one scene. Ids are never reused while the
/// scene lives; a reset starts the counter over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(pub(crate) u64);

/// The two shape kinds the editor knows how to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

/// Geometry of a shape. Rectangles anchor at their top-left corner, ellipses
/// at their center. Dimensions can go negative while a create-drag travels
/// up or left of the anchor; such shapes are drawn as nothing and hit nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ShapeGeometry {
    Rectangle {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Ellipse {
        center_x: f64,
        center_y: f64,
        radius_x: f64,
        radius_y: f64,
    },
}

/// Fill, outline color and outline thickness, as applied to new shapes and
/// mirrored by the style pickers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f64,
}

pub const DEFAULT_FILL: Color = Color::from_rgb(0xff, 0x66, 0x66);
pub const DEFAULT_OUTLINE: Color = Color::from_rgb(0x99, 0xcc, 0x99);
pub const DEFAULT_OUTLINE_THICKNESS: f64 = 5.0;
/// Upper bound of the thickness slider. The model itself stores whatever it
/// is handed; the range is a UI contract.
pub const MAX_OUTLINE_THICKNESS: f64 = 20.0;

impl Default for Style {
    fn default() -> Self {
        Self {
            fill: DEFAULT_FILL,
            outline: DEFAULT_OUTLINE,
            outline_thickness: DEFAULT_OUTLINE_THICKNESS,
        }
    }
}

/// One shape in the scene: identity, geometry and styling.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    pub(crate) id: ShapeId,
    pub geometry: ShapeGeometry,
    pub fill: Color,
    pub outline: Color,
    pub outline_thickness: f64,
}

impl Shape {
    pub(crate) fn new(id: ShapeId, kind: ShapeKind, origin: Point, style: Style) -> Self {
        let geometry = match kind {
            ShapeKind::Rectangle => ShapeGeometry::Rectangle {
                x: origin.x,
                y: origin.y,
                width: 0.0,
                height: 0.0,
            },
            ShapeKind::Ellipse => ShapeGeometry::Ellipse {
                center_x: origin.x,
                center_y: origin.y,
                radius_x: 0.0,
                radius_y: 0.0,
            },
        };
        Self {
            id,
            geometry,
            fill: style.fill,
            outline: style.outline,
            outline_thickness: style.outline_thickness,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        match self.geometry {
            ShapeGeometry::Rectangle { .. } => ShapeKind::Rectangle,
            ShapeGeometry::Ellipse { .. } => ShapeKind::Ellipse,
        }
    }

    /// Anchor point: top-left for rectangles, center for ellipses.
    pub fn origin(&self) -> Point {
        match self.geometry {
            ShapeGeometry::Rectangle { x, y, .. } => Point::new(x, y),
            ShapeGeometry::Ellipse { center_x, center_y, .. } => Point::new(center_x, center_y),
        }
    }

    /// Width/height for rectangles, radii for ellipses.
    pub fn dimensions(&self) -> (f64, f64) {
        match self.geometry {
            ShapeGeometry::Rectangle { width, height, .. } => (width, height),
            ShapeGeometry::Ellipse { radius_x, radius_y, .. } => (radius_x, radius_y),
        }
    }

    /// Moves the anchor to `point`, keeping the dimensions.
    pub fn move_to(&mut self, point: Point) {
        match &mut self.geometry {
            ShapeGeometry::Rectangle { x, y, .. } => {
                *x = point.x;
                *y = point.y;
            }
            ShapeGeometry::Ellipse { center_x, center_y, .. } => {
                *center_x = point.x;
                *center_y = point.y;
            }
        }
    }

    /// Recomputes the dimensions from a drag point as `drag − anchor`.
    /// Dragging past the anchor produces negative dimensions on purpose.
    pub fn resize_to(&mut self, drag: Point) {
        match &mut self.geometry {
            ShapeGeometry::Rectangle { x, y, width, height } => {
                *width = drag.x - *x;
                *height = drag.y - *y;
            }
            ShapeGeometry::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            } => {
                *radius_x = drag.x - *center_x;
                *radius_y = drag.y - *center_y;
            }
        }
    }

    /// Whether `point` lies on the shape. Degenerate shapes (zero or negative
    /// dimensions) contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        match self.geometry {
            ShapeGeometry::Rectangle { x, y, width, height } => {
                width > 0.0
                    && height > 0.0
                    && point.x >= x
                    && point.x <= x + width
                    && point.y >= y
                    && point.y <= y + height
            }
            ShapeGeometry::Ellipse {
                center_x,
                center_y,
                radius_x,
                radius_y,
            } => {
                if radius_x <= 0.0 || radius_y <= 0.0 {
                    return false;
                }
                let nx = (point.x - center_x) / radius_x;
                let ny = (point.y - center_y) / radius_y;
                nx * nx + ny * ny <= 1.0
            }
        }
    }
}
