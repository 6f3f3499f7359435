mod ui;

use eframe::egui;

use crate::ui::ConverterApp;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Temperature Converter")
            .with_inner_size([440.0, 460.0])
            .with_min_inner_size([380.0, 400.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Temperature Converter",
        options,
        Box::new(|_cc| Ok(Box::new(ConverterApp::new()))),
    )
}
