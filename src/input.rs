use egui::Response;

use crate::shape::Point;

/// Pointer activity on the canvas, in canvas coordinates.
///
/// The editor state machine consumes these; they are the only channel through
/// which mouse input reaches the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed(Point),
    Dragged(Point),
    Released(Point),
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            Self::Pressed(p) | Self::Dragged(p) | Self::Released(p) => p,
        }
    }
}

/// Translates the canvas response of one frame into pointer events.
///
/// egui reports drags in screen coordinates; positions are rebased onto the
/// canvas origin so the scene never sees panel offsets.
pub fn collect_canvas_events(response: &Response, canvas: egui::Rect) -> Vec<PointerEvent> {
    let mut events = Vec::new();
    let Some(pos) = response.interact_pointer_pos() else {
        return events;
    };
    let point = Point::new(f64::from(pos.x - canvas.min.x), f64::from(pos.y - canvas.min.y));

    if response.drag_started() {
        events.push(PointerEvent::Pressed(point));
    } else if response.dragged() {
        events.push(PointerEvent::Dragged(point));
    }
    if response.drag_stopped() {
        events.push(PointerEvent::Released(point));
    }
    events
}
