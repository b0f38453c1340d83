use eframe::egui::{self, Pos2, Stroke, Vec2};

use crate::app::{to_color32, SketchApp};
use crate::input;
use crate::shape::{Shape, ShapeGeometry};

/// The drawing canvas: paints the scene and feeds pointer activity into the
/// editor state machine.
pub fn central_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::drag());
        let canvas = response.rect;
        app.canvas_rect = Some(canvas);

        for event in input::collect_canvas_events(&response, canvas) {
            app.editor = app.editor.apply(&mut app.scene, &mut app.prefs, event);
        }

        painter.rect_filled(canvas, 0.0, to_color32(app.scene.background()));
        for shape in app.scene.shapes() {
            paint_shape(&painter, canvas, shape);
        }

        // The selection highlight is paint-only; the shape's stored outline
        // color is untouched.
        if let Some(shape) = app.editor.selection.and_then(|id| app.scene.get(id)) {
            paint_highlight(&painter, canvas, shape);
        }
    });
}

fn screen_rect(canvas: egui::Rect, x: f64, y: f64, width: f64, height: f64) -> egui::Rect {
    egui::Rect::from_min_size(
        canvas.min + Vec2::new(x as f32, y as f32),
        Vec2::new(width as f32, height as f32),
    )
}

fn screen_pos(canvas: egui::Rect, x: f64, y: f64) -> Pos2 {
    canvas.min + Vec2::new(x as f32, y as f32)
}

fn paint_shape(painter: &egui::Painter, canvas: egui::Rect, shape: &Shape) {
    let fill = to_color32(shape.fill);
    let stroke = Stroke::new(shape.outline_thickness as f32, to_color32(shape.outline));
    match shape.geometry {
        ShapeGeometry::Rectangle { x, y, width, height } => {
            if width <= 0.0 || height <= 0.0 {
                return;
            }
            let rect = screen_rect(canvas, x, y, width, height);
            painter.rect_filled(rect, 0.0, fill);
            painter.rect_stroke(rect, 0.0, stroke);
        }
        ShapeGeometry::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        } => {
            if radius_x <= 0.0 || radius_y <= 0.0 {
                return;
            }
            painter.add(egui::Shape::Ellipse(egui::epaint::EllipseShape {
                center: screen_pos(canvas, center_x, center_y),
                radius: Vec2::new(radius_x as f32, radius_y as f32),
                fill,
                stroke,
            }));
        }
    }
}

fn paint_highlight(painter: &egui::Painter, canvas: egui::Rect, shape: &Shape) {
    let stroke = Stroke::new(
        (shape.outline_thickness as f32).max(2.0),
        egui::Color32::YELLOW,
    );
    match shape.geometry {
        ShapeGeometry::Rectangle { x, y, width, height } => {
            if width <= 0.0 || height <= 0.0 {
                return;
            }
            painter.rect_stroke(screen_rect(canvas, x, y, width, height), 0.0, stroke);
        }
        ShapeGeometry::Ellipse {
            center_x,
            center_y,
            radius_x,
            radius_y,
        } => {
            if radius_x <= 0.0 || radius_y <= 0.0 {
                return;
            }
            painter.add(egui::Shape::Ellipse(egui::epaint::EllipseShape {
                center: screen_pos(canvas, center_x, center_y),
                radius: Vec2::new(radius_x as f32, radius_y as f32),
                fill: egui::Color32::TRANSPARENT,
                stroke,
            }));
        }
    }
}
