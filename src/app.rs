use std::path::Path;

use eframe::egui;
use log::{error, info, warn};

use crate::color::Color;
use crate::editor::EditorState;
use crate::panels;
use crate::persistence;
use crate::scene::Scene;
use crate::shape::Style;
use crate::snapshot;

/// Pixel size used for snapshot export before the canvas has ever been laid
/// out (e.g. export triggered on the very first frame).
const FALLBACK_SNAPSHOT_SIZE: (u32, u32) = (800, 600);

pub struct SketchApp {
    pub(crate) scene: Scene,
    pub(crate) editor: EditorState,
    pub(crate) prefs: Style,
    /// Path used by the Save/Load buttons.
    pub(crate) file_path: String,
    /// Path used by the snapshot button.
    pub(crate) snapshot_path: String,
    /// Outcome of the last file operation, shown once in the tools panel.
    pub(crate) status: Option<String>,
    /// Canvas rect of the previous frame; sizes the snapshot.
    pub(crate) canvas_rect: Option<egui::Rect>,
}

impl Default for SketchApp {
    fn default() -> Self {
        Self {
            scene: Scene::new(),
            editor: EditorState::new(),
            prefs: Style::default(),
            file_path: "scene.json".to_owned(),
            snapshot_path: "snapshot.png".to_owned(),
            status: None,
            canvas_rect: None,
        }
    }
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// New document: empty scene, default styling, Select mode.
    pub(crate) fn reset(&mut self) {
        self.scene.reset();
        self.editor = EditorState::new();
        self.prefs = Style::default();
        self.status = None;
    }

    pub(crate) fn save(&mut self) {
        match persistence::save_scene(&self.scene, Path::new(&self.file_path)) {
            Ok(()) => self.status = Some(format!("Saved {}", self.file_path)),
            Err(err) => {
                error!("save failed: {err}");
                self.status = Some(format!("Save failed: {err}"));
            }
        }
    }

    /// Loads from the path field. The current scene is replaced only after
    /// the file parsed completely; on failure it stays as it was.
    pub(crate) fn load(&mut self) {
        let path = self.file_path.clone();
        self.load_from(Path::new(&path));
    }

    pub(crate) fn load_from(&mut self, path: &Path) {
        match persistence::load_scene(path) {
            Ok(scene) => {
                self.scene = scene;
                self.editor = self.editor.cleared();
                self.status = Some(format!("Loaded {}", path.display()));
            }
            Err(err) => {
                error!("load failed: {err}");
                self.status = Some(format!("Load failed: {err}"));
            }
        }
    }

    pub(crate) fn export_snapshot(&mut self) {
        let (width, height) = match self.canvas_rect {
            Some(rect) => (rect.width() as u32, rect.height() as u32),
            None => FALLBACK_SNAPSHOT_SIZE,
        };
        match snapshot::export_png(&self.scene, width, height, Path::new(&self.snapshot_path)) {
            Ok(()) => self.status = Some(format!("Exported {}", self.snapshot_path)),
            Err(err) => {
                error!("snapshot failed: {err}");
                self.status = Some(format!("Snapshot failed: {err}"));
            }
        }
    }

    /// Scene files can be dropped onto the window instead of typed into the
    /// path field.
    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let dropped: Vec<egui::DroppedFile> = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let Some(path) = file.path else {
                warn!("dropped file has no path: {}", file.name);
                continue;
            };
            if path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json")) {
                info!("loading dropped file {}", path.display());
                self.file_path = path.display().to_string();
                self.load_from(&path);
            } else {
                warn!("ignoring dropped non-scene file: {}", path.display());
            }
        }
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_dropped_files(ctx);
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

pub(crate) fn to_color32(color: Color) -> egui::Color32 {
    egui::Color32::from_rgba_unmultiplied(color.r, color.g, color.b, color.a)
}

pub(crate) fn from_color32(color: egui::Color32) -> Color {
    let [r, g, b, a] = color.to_srgba_unmultiplied();
    Color::new(r, g, b, a)
}
