use egui::{Color32, Pos2};
use log::{error, info};

use crate::app::CanvasApp;
use crate::document::Document;
use crate::shape::{Shape, ShapeId, ShapeKind};

/// A detached copy of the selected shape's editable fields. Nothing touches
/// the live shape until "Apply"; switching the selection discards pending
/// edits.
struct ShapeEdit {
    id: ShapeId,
    kind: ShapeKind,
    pos: Pos2,
    width: f32,
    height: f32,
    fill: Color32,
    stroke: Color32,
    stroke_width: f32,
    /// The stored shape this copy was taken from. If the live shape moves
    /// on from it (a drag, an applied edit), the form re-syncs.
    base: Shape,
}

impl ShapeEdit {
    fn from_shape(shape: &Shape) -> Self {
        Self {
            id: shape.id,
            kind: shape.kind,
            pos: shape.pos,
            width: shape.width,
            height: shape.height,
            fill: shape.fill,
            stroke: shape.stroke,
            stroke_width: shape.stroke_width,
            base: shape.clone(),
        }
    }
}

/// The property-editing form for the selected shape. Holds the pending edit
/// copy across frames.
#[derive(Default)]
pub struct PropertiesPanel {
    edit: Option<ShapeEdit>,
}

impl PropertiesPanel {
    /// Rebuilds the edit copy whenever the selection points somewhere new
    /// or the stored shape has changed underneath it, dropping unapplied
    /// edits in both cases.
    fn sync(&mut self, doc: &Document, selected: Option<ShapeId>) {
        self.edit = match selected.and_then(|id| doc.get(id)) {
            None => None,
            Some(shape) => self
                .edit
                .take()
                .filter(|e| e.id == shape.id && e.base == *shape)
                .or_else(|| Some(ShapeEdit::from_shape(shape))),
        };
    }

    pub fn ui(&mut self, ui: &mut egui::Ui, doc: &mut Document, selected: Option<ShapeId>) {
        ui.heading("Properties");
        self.sync(doc, selected);

        let Some(edit) = &mut self.edit else {
            ui.label("Select a shape to edit it.");
            return;
        };

        // Kind is identity; the store refuses to change it, so the form
        // only displays it.
        ui.horizontal(|ui| {
            ui.label("Kind:");
            ui.label(edit.kind.label());
        });
        ui.horizontal(|ui| {
            ui.label("X:");
            ui.add(egui::DragValue::new(&mut edit.pos.x).speed(1.0));
            ui.label("Y:");
            ui.add(egui::DragValue::new(&mut edit.pos.y).speed(1.0));
        });
        ui.horizontal(|ui| {
            ui.label("Width:");
            ui.add(
                egui::DragValue::new(&mut edit.width)
                    .speed(1.0)
                    .range(1.0..=4096.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Height:");
            ui.add(
                egui::DragValue::new(&mut edit.height)
                    .speed(1.0)
                    .range(1.0..=4096.0),
            );
        });
        ui.horizontal(|ui| {
            ui.label("Fill:");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut edit.fill,
                egui::color_picker::Alpha::Opaque,
            );
        });
        ui.horizontal(|ui| {
            ui.label("Stroke:");
            egui::color_picker::color_edit_button_srgba(
                ui,
                &mut edit.stroke,
                egui::color_picker::Alpha::Opaque,
            );
        });
        ui.horizontal(|ui| {
            ui.label("Stroke width:");
            ui.add(
                egui::DragValue::new(&mut edit.stroke_width)
                    .speed(0.1)
                    .range(0.5..=20.0),
            );
        });

        if ui.button("Apply Changes").clicked() {
            info!("applying property edits to {}", edit.id);
            let result = doc.update(edit.id, |shape| {
                shape.pos = edit.pos;
                shape.width = edit.width;
                shape.height = edit.height;
                shape.fill = edit.fill;
                shape.stroke = edit.stroke;
                shape.stroke_width = edit.stroke_width;
            });
            if let Err(err) = result {
                // Only reachable with a stale id, which is a bug.
                error!("property edit rejected: {err}");
            }
        }
    }
}

/// Side panel wrapper around [`PropertiesPanel::ui`].
pub fn properties_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::SidePanel::right("properties_panel")
        .resizable(true)
        .default_width(200.0)
        .show(ctx, |ui| {
            app.properties_ui(ui);
        });
}
