use log::debug;

use crate::input::PointerEvent;
use crate::scene::Scene;
use crate::shape::{ShapeId, ShapeKind, Style};

/// Interaction mode, chosen from the tools panel. The mode decides what
/// pointer events do to the scene; switching modes replaces it wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Select,
    Remove,
    CreateRectangle,
    CreateEllipse,
}

/// An in-flight pointer drag. Held between a press and its release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Gesture {
    #[default]
    Idle,
    /// A create-drag sizing the shape it just inserted.
    Creating(ShapeId),
    /// A select-drag moving the shape under the cursor.
    Moving(ShapeId),
}

/// The whole interaction state, as a small value: every operation consumes a
/// state and returns the next one, so there is no ambient mutable mode or
/// selection to fall out of sync.
///
/// Selection is exclusive: zero or one shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorState {
    pub mode: Mode,
    pub selection: Option<ShapeId>,
    gesture: Gesture,
}

impl EditorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switches the interaction mode. Cancels any in-flight gesture; the
    /// selection survives a mode change.
    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        Self {
            mode,
            selection: self.selection,
            gesture: Gesture::Idle,
        }
    }

    /// Drops the selection (used when the selected shape leaves the scene,
    /// e.g. after a load replaces it).
    #[must_use]
    pub fn cleared(self) -> Self {
        Self {
            selection: None,
            gesture: Gesture::Idle,
            ..self
        }
    }

    /// Feeds one pointer event through the state machine, mutating the scene
    /// as the current mode dictates and returning the next state.
    ///
    /// `prefs` is read when creating (new shapes take the current style) and
    /// written when selecting (the pickers mirror the selected shape).
    #[must_use]
    pub fn apply(self, scene: &mut Scene, prefs: &mut Style, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Pressed(point) => {
                match self.mode {
                    Mode::CreateRectangle | Mode::CreateEllipse => {
                        let kind = if self.mode == Mode::CreateRectangle {
                            ShapeKind::Rectangle
                        } else {
                            ShapeKind::Ellipse
                        };
                        let id = scene.create_shape(kind, point, *prefs);
                        debug!("created {kind:?} at ({}, {})", point.x, point.y);
                        Self {
                            selection: None,
                            gesture: Gesture::Creating(id),
                            ..self
                        }
                    }
                    Mode::Select => match scene.shape_at(point) {
                        Some(id) => {
                            // Mirror the shape's style into the pickers.
                            if let Some(shape) = scene.get(id) {
                                *prefs = Style {
                                    fill: shape.fill,
                                    outline: shape.outline,
                                    outline_thickness: shape.outline_thickness,
                                };
                            }
                            Self {
                                selection: Some(id),
                                gesture: Gesture::Moving(id),
                                ..self
                            }
                        }
                        None => Self {
                            selection: None,
                            gesture: Gesture::Idle,
                            ..self
                        },
                    },
                    Mode::Remove => {
                        let mut next = self;
                        if let Some(id) = scene.shape_at(point) {
                            scene.delete_shape(id);
                            debug!("removed shape at ({}, {})", point.x, point.y);
                            if next.selection == Some(id) {
                                next.selection = None;
                            }
                        }
                        next
                    }
                }
            }
            PointerEvent::Dragged(point) => {
                match self.gesture {
                    Gesture::Creating(id) => scene.resize_shape(id, point),
                    Gesture::Moving(id) => scene.move_shape(id, point),
                    Gesture::Idle => {}
                }
                self
            }
            PointerEvent::Released(_) => Self {
                gesture: Gesture::Idle,
                ..self
            },
        }
    }
}
