//! inkseal: a desktop client for a remote document signing service

use eframe::egui;

mod app;
mod state;
mod ui;

fn main() -> eframe::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    tracing::info!("Starting inkseal");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("inkseal")
            .with_inner_size([680.0, 520.0])
            .with_min_inner_size([480.0, 360.0]),
        ..Default::default()
    };

    eframe::run_native(
        "inkseal",
        native_options,
        Box::new(|cc| Ok(Box::new(app::App::new(cc)))),
    )
}
