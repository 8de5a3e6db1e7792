use crate::app::UpsamplerApp;
use crate::states::DialogKind;

/// Modal message box, transient toast and the About window.
pub fn show(ctx: &egui::Context, app: &mut UpsamplerApp) {
    let labels = app.labels();

    if let Some(dialog) = app.ui_state.dialog.as_ref() {
        let title = match dialog.kind {
            DialogKind::Error => labels.error_title,
            DialogKind::Info => labels.success_title,
        };
        let mut dismissed = false;
        let modal = egui::Modal::new(egui::Id::new("message_dialog")).show(ctx, |ui| {
            ui.set_max_width(360.0);
            ui.heading(title);
            ui.add_space(6.0);
            ui.label(&dialog.message);
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                if ui.button(labels.ok).clicked() {
                    dismissed = true;
                }
            });
        });
        if dismissed || modal.should_close() {
            app.ui_state.dialog = None;
        }
    }

    if let Some(toast) = app.ui_state.toast.as_ref() {
        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::CENTER_BOTTOM, [0.0, -96.0])
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(&toast.message).color(egui::Color32::LIGHT_GREEN));
                });
            });
    }

    if app.ui_state.show_about {
        egui::Window::new(labels.about)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading(labels.app_title);
                    ui.label(labels.about_tagline);
                    ui.add_space(8.0);
                    ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                    ui.add_space(8.0);
                    if ui.button(labels.close).clicked() {
                        app.ui_state.show_about = false;
                    }
                });
            });
    }
}
