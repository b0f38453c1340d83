use eframe::egui::{self, Slider};

use crate::app::{from_color32, to_color32, SketchApp};
use crate::editor::Mode;
use crate::shape::MAX_OUTLINE_THICKNESS;

/// Side panel with the mode buttons, z-order controls, style pickers and the
/// file actions.
pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel").show(ctx, |ui| {
        ui.heading("Tools");
        ui.separator();

        mode_buttons(app, ui);
        ui.separator();

        z_order_buttons(app, ui);
        ui.separator();

        style_pickers(app, ui);
        ui.separator();

        file_actions(app, ui);

        if let Some(status) = &app.status {
            ui.separator();
            ui.label(status.clone());
        }
    });
}

fn mode_buttons(app: &mut SketchApp, ui: &mut egui::Ui) {
    let mut mode = app.editor.mode;
    ui.horizontal_wrapped(|ui| {
        ui.selectable_value(&mut mode, Mode::Select, "Select");
        ui.selectable_value(&mut mode, Mode::Remove, "Remove");
        ui.selectable_value(&mut mode, Mode::CreateRectangle, "Rectangle");
        ui.selectable_value(&mut mode, Mode::CreateEllipse, "Ellipse");
    });
    if mode != app.editor.mode {
        app.editor = app.editor.with_mode(mode);
    }
}

fn z_order_buttons(app: &mut SketchApp, ui: &mut egui::Ui) {
    let selected = app.editor.selection;
    ui.horizontal(|ui| {
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("To front"))
            .clicked()
        {
            if let Some(id) = selected {
                app.scene.bring_to_front(id);
            }
        }
        if ui
            .add_enabled(selected.is_some(), egui::Button::new("To back"))
            .clicked()
        {
            if let Some(id) = selected {
                app.scene.send_to_back(id);
            }
        }
    });
}

fn style_pickers(app: &mut SketchApp, ui: &mut egui::Ui) {
    let selected = app.editor.selection;

    ui.horizontal(|ui| {
        ui.label("Background:");
        let mut background = to_color32(app.scene.background());
        if color_button(ui, &mut background) {
            app.scene.set_background(from_color32(background));
        }
    });

    ui.horizontal(|ui| {
        ui.label("Fill:");
        let mut fill = to_color32(app.prefs.fill);
        if color_button(ui, &mut fill) {
            app.prefs.fill = from_color32(fill);
            if let Some(id) = selected {
                app.scene.set_fill(id, app.prefs.fill);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Outline:");
        let mut outline = to_color32(app.prefs.outline);
        if color_button(ui, &mut outline) {
            app.prefs.outline = from_color32(outline);
            if let Some(id) = selected {
                app.scene.set_outline(id, app.prefs.outline);
            }
        }
    });

    ui.horizontal(|ui| {
        ui.label("Thickness:");
        // The slider is where the [0, 20] range is enforced; the scene takes
        // the value as-is.
        if ui
            .add(Slider::new(&mut app.prefs.outline_thickness, 0.0..=MAX_OUTLINE_THICKNESS))
            .changed()
        {
            if let Some(id) = selected {
                app.scene.set_outline_thickness(id, app.prefs.outline_thickness);
            }
        }
    });
}

fn file_actions(app: &mut SketchApp, ui: &mut egui::Ui) {
    if ui.button("New").clicked() {
        app.reset();
    }

    ui.horizontal(|ui| {
        ui.label("File:");
        ui.text_edit_singleline(&mut app.file_path);
    });
    ui.horizontal(|ui| {
        if ui.button("Save").clicked() {
            app.save();
        }
        if ui.button("Load").clicked() {
            app.load();
        }
    });

    ui.horizontal(|ui| {
        ui.label("Snapshot:");
        ui.text_edit_singleline(&mut app.snapshot_path);
    });
    if ui.button("Export PNG").clicked() {
        app.export_snapshot();
    }
}

fn color_button(ui: &mut egui::Ui, color: &mut egui::Color32) -> bool {
    egui::color_picker::color_edit_button_srgba(ui, color, egui::color_picker::Alpha::OnlyBlend)
        .changed()
}
