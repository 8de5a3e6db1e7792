use upsampler_core::batch::LoadMode;
use upsampler_core::dimensions::SyncMode;
use upsampler_core::settings::{InputErrorReporting, Language};

use crate::app::UpsamplerApp;
use crate::panels::helpers::enum_combo;

pub fn show(ctx: &egui::Context, app: &mut UpsamplerApp) {
    if !app.ui_state.show_preferences {
        return;
    }
    let labels = app.labels();
    let mut open = true;

    egui::Window::new(labels.preferences)
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            let settings = &mut app.settings;
            egui::Grid::new("preferences_grid")
                .num_columns(1)
                .spacing([8.0, 6.0])
                .show(ui, |ui| {
                    enum_combo(ui, labels.language, &mut settings.language, &[Language::English, Language::Spanish]);
                    ui.end_row();
                    enum_combo(ui, labels.load_mode, &mut settings.load_mode, &[LoadMode::Single, LoadMode::Batch]);
                    ui.end_row();
                    enum_combo(ui, labels.sync_mode, &mut settings.sync_mode, &[SyncMode::Live, SyncMode::OnCommit]);
                    ui.end_row();
                    enum_combo(
                        ui,
                        labels.input_errors,
                        &mut settings.input_errors,
                        &[InputErrorReporting::Dialog, InputErrorReporting::Silent],
                    );
                    ui.end_row();

                    ui.checkbox(&mut settings.success_toast, labels.success_toast);
                    ui.end_row();
                    ui.add_enabled(
                        settings.success_toast,
                        egui::Slider::new(&mut settings.success_toast_ms, 500..=10_000)
                            .text(labels.toast_duration),
                    );
                    ui.end_row();

                    ui.add(
                        egui::Slider::new(&mut settings.scale_step, 0.1..=4.0)
                            .text(labels.scale_step)
                            .clamping(egui::SliderClamping::Always),
                    );
                    ui.end_row();
                    ui.add(
                        egui::Slider::new(&mut settings.min_step_scale, 0.1..=4.0)
                            .text(labels.min_step_scale)
                            .clamping(egui::SliderClamping::Always),
                    );
                    ui.end_row();
                });
        });

    app.ui_state.show_preferences = open;
}
