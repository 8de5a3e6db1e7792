mod app;
mod convert;
mod labels;
mod panels;
mod states;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Nearest Neighbor Upsampler")
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Upsampler",
        options,
        Box::new(|_cc| Ok(Box::new(app::UpsamplerApp::new()))),
    )
}
