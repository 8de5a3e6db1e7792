use crate::app::UpsamplerApp;

pub fn show(ctx: &egui::Context, app: &mut UpsamplerApp) {
    let labels = app.labels();
    egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
        ui.add_space(2.0);

        // Log area — fixed height for 3 lines, scrollable.
        let line_height = ui.text_style_height(&egui::TextStyle::Body);
        let spacing = ui.spacing().item_spacing.y;
        let log_height = line_height * 3.0 + spacing * 2.0;

        egui::ScrollArea::vertical()
            .max_height(log_height)
            .min_scrolled_height(log_height)
            .stick_to_bottom(true)
            .show(ui, |ui| {
                if app.ui_state.log_messages.is_empty() {
                    // Reserve space to prevent layout jump.
                    for _ in 0..3 {
                        ui.label("");
                    }
                } else {
                    for msg in &app.ui_state.log_messages {
                        ui.label(msg);
                    }
                }
            });

        // Status line
        ui.horizontal(|ui| {
            if let Some(ref size) = app.viewport.image_size {
                ui.label(format!("{}: {}x{}", labels.output, size[0], size[1]));
                ui.separator();
            }
            ui.label(format!("{}: {:.0}%", labels.zoom, app.viewport.zoom * 100.0));
            if app.viewport.display_scale < 1.0 {
                ui.separator();
                ui.label(format!(
                    "{}: {:.0}%",
                    labels.preview,
                    app.viewport.display_scale * 100.0
                ));
            }
        });

        ui.add_space(2.0);
    });
}
