use crate::app::CanvasApp;

/// The canvas itself: allocates the paintable area, feeds this frame's raw
/// input through the interaction controller, then paints the document and
/// any transient previews.
pub fn central_panel(app: &mut CanvasApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());

            app.handle_input(ctx, response.rect);
            app.paint(&painter, response.rect);
        });
}
