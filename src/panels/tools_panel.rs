use crate::app::CanvasApp;
use crate::shape::ShapeKind;

/// Toolbar: one toggle button per shape kind, plus the defaults applied to
/// newly created shapes.
pub fn tools_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(true)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            for kind in ShapeKind::ALL {
                let armed = app.controller().tools().is_armed(kind);
                if ui.selectable_label(armed, kind.label()).clicked() {
                    log::info!("tool toggled from UI: {}", kind.label());
                    app.controller_mut().tools_mut().arm(kind);
                }
            }

            ui.separator();
            ui.label("New shape defaults");

            let defaults = &mut app.controller_mut().tools_mut().defaults;
            ui.horizontal(|ui| {
                ui.label("Fill:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut defaults.fill,
                    egui::color_picker::Alpha::Opaque,
                );
            });
            ui.horizontal(|ui| {
                ui.label("Stroke:");
                egui::color_picker::color_edit_button_srgba(
                    ui,
                    &mut defaults.stroke,
                    egui::color_picker::Alpha::Opaque,
                );
            });
            ui.horizontal(|ui| {
                ui.label("Stroke width:");
                ui.add(egui::Slider::new(&mut defaults.stroke_width, 0.5..=10.0));
            });

            ui.separator();
            ui.label(format!(
                "Zoom: {:.0}%",
                app.controller().viewport().scale() * 100.0
            ));
            ui.label(format!("Shapes: {}", app.document().len()));
        });
}
