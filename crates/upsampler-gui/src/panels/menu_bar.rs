use anyhow::Context;
use upsampler_core::settings::{CanvasBackground, Settings};

use crate::app::UpsamplerApp;
use crate::panels::helpers::enum_combo;

const OPEN: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::O);
const SAVE: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::S);
const QUIT: egui::KeyboardShortcut = egui::KeyboardShortcut::new(egui::Modifiers::COMMAND, egui::Key::Q);

pub fn show(ctx: &egui::Context, app: &mut UpsamplerApp) {
    let labels = app.labels();
    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button(labels.menu_file, |ui| {
                if ui.add(egui::Button::new(labels.load).shortcut_text(ctx.format_shortcut(&OPEN))).clicked() {
                    ui.close();
                    open_files(ctx, app);
                }

                let save_label = if app.batch.as_ref().is_some_and(|b| b.len() > 1) {
                    labels.save_all
                } else {
                    labels.save
                };
                let can_save = app.batch.is_some();
                if ui
                    .add_enabled(can_save, egui::Button::new(save_label).shortcut_text(ctx.format_shortcut(&SAVE)))
                    .clicked()
                {
                    ui.close();
                    app.save();
                }

                ui.separator();

                if ui.button(labels.import_settings).clicked() {
                    ui.close();
                    import_settings(ctx, app);
                }

                if ui.button(labels.export_settings).clicked() {
                    ui.close();
                    export_settings(app);
                }

                ui.separator();

                if ui.add(egui::Button::new(labels.quit).shortcut_text(ctx.format_shortcut(&QUIT))).clicked() {
                    ui.close();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.menu_button(labels.menu_edit, |ui| {
                if ui.button(labels.preferences).clicked() {
                    ui.close();
                    app.ui_state.show_preferences = true;
                }
                if ui.button(labels.reset_defaults).clicked() {
                    ui.close();
                    app.apply_settings(ctx, Settings::default());
                    app.ui_state.add_log("Settings reset to defaults".into());
                }
            });

            ui.menu_button(labels.menu_view, |ui| {
                let mut on_top = app.settings.always_on_top;
                if ui.checkbox(&mut on_top, labels.always_on_top).changed() {
                    app.set_always_on_top(ctx, on_top);
                }
                enum_combo(
                    ui,
                    labels.background,
                    &mut app.settings.background,
                    &[CanvasBackground::Black, CanvasBackground::Gray, CanvasBackground::White],
                );
            });

            ui.menu_button(labels.menu_help, |ui| {
                if ui.button(labels.about).clicked() {
                    ui.close();
                    app.ui_state.show_about = true;
                }
            });
        });

        // Keyboard shortcuts (consumed outside menus)
        if ctx.input_mut(|i| i.consume_shortcut(&OPEN)) {
            open_files(ctx, app);
        }
        if ctx.input_mut(|i| i.consume_shortcut(&SAVE)) {
            app.save();
        }
        if ctx.input_mut(|i| i.consume_shortcut(&QUIT)) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    });
}

/// Native file picker; multi-select only when batch loading.
pub fn open_files(ctx: &egui::Context, app: &mut UpsamplerApp) {
    let dialog = rfd::FileDialog::new()
        .add_filter("Image files", upsampler_core::consts::SUPPORTED_EXTENSIONS)
        .add_filter("All files", &["*"]);
    let paths = match app.settings.load_mode {
        upsampler_core::batch::LoadMode::Batch => dialog.pick_files().unwrap_or_default(),
        upsampler_core::batch::LoadMode::Single => dialog.pick_file().into_iter().collect(),
    };
    app.open_paths(ctx, paths);
}

fn import_settings(ctx: &egui::Context, app: &mut UpsamplerApp) {
    let Some(path) = rfd::FileDialog::new().add_filter("TOML", &["toml"]).pick_file() else {
        return;
    };
    let result = Settings::load(&path)
        .with_context(|| format!("Could not import settings from {}", path.display()));
    match result {
        Ok(settings) => {
            app.apply_settings(ctx, settings);
            app.ui_state.add_log(format!("Settings imported from {}", path.display()));
        }
        Err(e) => app.ui_state.show_error(format!("{e:#}")),
    }
}

fn export_settings(app: &mut UpsamplerApp) {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("TOML", &["toml"])
        .set_file_name("upsampler.toml")
        .save_file()
    else {
        return;
    };
    let result = app
        .settings
        .save(&path)
        .with_context(|| format!("Could not export settings to {}", path.display()));
    match result {
        Ok(()) => app.ui_state.add_log(format!("Settings exported to {}", path.display())),
        Err(e) => app.ui_state.show_error(format!("{e:#}")),
    }
}
