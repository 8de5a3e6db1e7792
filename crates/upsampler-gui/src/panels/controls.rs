use upsampler_core::dimensions::{DimensionField, SyncMode};
use upsampler_core::settings::CanvasBackground;

use crate::app::UpsamplerApp;
use crate::panels::helpers::{enum_combo, section_header};
use crate::panels::menu_bar::open_files;

const LEFT_PANEL_WIDTH: f32 = 260.0;
const FIELD_WIDTH: f32 = 90.0;

pub fn show(ctx: &egui::Context, app: &mut UpsamplerApp) {
    egui::SidePanel::left("controls")
        .default_width(LEFT_PANEL_WIDTH)
        .resizable(true)
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.set_min_width(LEFT_PANEL_WIDTH - 20.0);

                file_section(ctx, ui, app);
                ui.separator();
                size_section(ctx, ui, app);
                ui.separator();
                actions_section(ctx, ui, app);
                ui.separator();
                canvas_section(ctx, ui, app);
            });
        });
}

fn file_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut UpsamplerApp) {
    let labels = app.labels();
    let position = app
        .batch
        .as_ref()
        .map(|b| format!("{}/{}", b.current_index() + 1, b.len()));
    section_header(ui, labels.section_file, position.as_deref());
    ui.add_space(4.0);

    ui.horizontal(|ui| {
        if ui.button(labels.load).clicked() {
            open_files(ctx, app);
        }

        let can_browse = app.batch.as_ref().is_some_and(|b| b.len() > 1);
        if ui.add_enabled(can_browse, egui::Button::new("<")).clicked() {
            app.select_prev(ctx);
        }
        if ui.add_enabled(can_browse, egui::Button::new(">")).clicked() {
            app.select_next(ctx);
        }
    });

    if let Some(batch) = app.batch.as_ref() {
        let current = batch.current();
        ui.label(current.display_name());
        ui.small(format!("{}x{}", current.width(), current.height()));
    }
}

fn size_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut UpsamplerApp) {
    let labels = app.labels();
    section_header(ui, labels.section_size, None);
    ui.add_space(4.0);

    let enabled = app.form.state().is_some();
    ui.add_enabled_ui(enabled, |ui| {
        egui::Grid::new("size_fields")
            .num_columns(2)
            .spacing([8.0, 4.0])
            .show(ui, |ui| {
                ui.label(labels.scale_factor);
                scale_field(ctx, ui, app);
                ui.end_row();

                ui.label(labels.width);
                dimension_field(ctx, ui, app, DimensionField::Width);
                ui.end_row();

                ui.label(labels.height);
                dimension_field(ctx, ui, app, DimensionField::Height);
                ui.end_row();
            });
    });

    if let Some(state) = app.form.state() {
        ui.small(format!(
            "{}: {}x{}",
            labels.output, state.width, state.height
        ));
    }
}

/// Scale entry. Up/Down step the factor while it has focus.
fn scale_field(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut UpsamplerApp) {
    let id = egui::Id::new("scale_field");
    if ui.memory(|m| m.has_focus(id)) {
        let (up, down) = ui.input_mut(|i| {
            (
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowUp),
                i.consume_key(egui::Modifiers::NONE, egui::Key::ArrowDown),
            )
        });
        if up {
            app.step_scale(ctx, true);
        } else if down {
            app.step_scale(ctx, false);
        }
    }

    let response = ui.add(
        egui::TextEdit::singleline(&mut app.form.scale_text)
            .id(id)
            .desired_width(FIELD_WIDTH),
    );
    handle_field_response(ctx, app, &response, DimensionField::Scale);
}

fn dimension_field(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    app: &mut UpsamplerApp,
    field: DimensionField,
) {
    let response = ui.add(
        egui::TextEdit::singleline(app.form.text_mut(field)).desired_width(FIELD_WIDTH),
    );
    handle_field_response(ctx, app, &response, field);
}

fn handle_field_response(
    ctx: &egui::Context,
    app: &mut UpsamplerApp,
    response: &egui::Response,
    field: DimensionField,
) {
    if response.changed() && app.settings.sync_mode == SyncMode::Live {
        app.field_edited(ctx, field);
    }
    // Enter surrenders focus on a singleline edit, so this covers both.
    if response.lost_focus() {
        app.commit_field(ctx, field);
    }
}

fn actions_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut UpsamplerApp) {
    let labels = app.labels();
    let loaded = app.batch.is_some();
    let save_label = if app.batch.as_ref().is_some_and(|b| b.len() > 1) {
        labels.save_all
    } else {
        labels.save
    };

    ui.horizontal(|ui| {
        if ui.add_enabled(loaded, egui::Button::new(labels.process)).clicked() {
            app.process(ctx);
        }
        if ui.add_enabled(loaded, egui::Button::new(save_label)).clicked() {
            app.save();
        }
    });
}

fn canvas_section(ctx: &egui::Context, ui: &mut egui::Ui, app: &mut UpsamplerApp) {
    let labels = app.labels();
    section_header(ui, labels.section_view, None);
    ui.add_space(4.0);

    enum_combo(
        ui,
        labels.background,
        &mut app.settings.background,
        &[CanvasBackground::Black, CanvasBackground::Gray, CanvasBackground::White],
    );

    let mut on_top = app.settings.always_on_top;
    if ui.checkbox(&mut on_top, labels.always_on_top).changed() {
        app.set_always_on_top(ctx, on_top);
    }
}
