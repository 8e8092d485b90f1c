#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

fn main() -> eframe::Result {
    env_logger::init();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Shape Canvas"),
        ..Default::default()
    };
    eframe::run_native(
        "shape_canvas",
        native_options,
        Box::new(|cc| Ok(Box::new(shape_canvas::CanvasApp::new(cc)))),
    )
}
