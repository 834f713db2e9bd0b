//! Object detector entry point.

// Application modules
mod app;
mod components;
mod config;
mod display;
mod events;
mod pages;

use app::App;

fn main() {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Object Detector - MobileNet-SSD"),
        ..Default::default()
    };

    let result = eframe::run_native(
        "ObjectDetector",
        native_options,
        Box::new(|cc| {
            cc.egui_ctx.set_theme(egui::Theme::Dark);

            let mut style = (*cc.egui_ctx.style()).clone();
            style.visuals.window_fill = egui::Color32::from_rgb(15, 23, 42);
            style.visuals.panel_fill = egui::Color32::from_rgb(15, 23, 42);
            cc.egui_ctx.set_style(style);

            Ok(Box::new(App::new(&cc.egui_ctx)))
        }),
    );

    if let Err(e) = result {
        eprintln!("Failed to start the application: {}", e);
        std::process::exit(1);
    }
}
