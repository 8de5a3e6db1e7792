use std::path::PathBuf;
use std::time::{Duration, Instant};

use tracing::{info, warn};
use upsampler_core::batch::{ImageBatch, LoadMode};
use upsampler_core::consts::MAX_PREVIEW_SIDE;
use upsampler_core::dimensions::{DimensionField, DimensionForm, ScaleState};
use upsampler_core::error::UpsamplerError;
use upsampler_core::io::naming;
use upsampler_core::resample::{preview_fit, render};
use upsampler_core::save::{save_outputs, SaveScope};
use upsampler_core::settings::{InputErrorReporting, Settings};

use crate::convert::dynamic_to_color_image;
use crate::labels::{labels, Labels};
use crate::panels;
use crate::states::{UIState, ViewportState};

pub struct UpsamplerApp {
    pub settings: Settings,
    pub batch: Option<ImageBatch>,
    pub form: DimensionForm,
    pub ui_state: UIState,
    pub viewport: ViewportState,
    /// Title last sent to the window, so it is only resent on language change.
    applied_title: Option<&'static str>,
}

impl UpsamplerApp {
    pub fn new() -> Self {
        Self {
            settings: Settings::default(),
            batch: None,
            form: DimensionForm::new(),
            ui_state: UIState::default(),
            viewport: ViewportState::default(),
            applied_title: None,
        }
    }

    pub fn labels(&self) -> &'static Labels {
        labels(self.settings.language)
    }

    /// Replace the loaded images with `paths` and show the first one.
    pub fn open_paths(&mut self, ctx: &egui::Context, paths: Vec<PathBuf>) {
        if paths.is_empty() {
            return;
        }
        match ImageBatch::open(&paths, self.settings.load_mode) {
            Ok((batch, skipped)) => {
                for s in skipped {
                    self.ui_state
                        .add_log(format!("Skipped {}: {}", s.path.display(), s.reason));
                }
                self.ui_state.add_log(format!("Loaded {} image(s)", batch.len()));
                self.batch = Some(batch);
                self.show_current(ctx, false);
            }
            Err(e) => {
                let msg = format!("{}: {e}", self.labels().load_failed);
                self.ui_state.show_error(msg);
            }
        }
    }

    /// Point the fields at the current image and redraw. A fresh load starts
    /// at native size; browsing the batch keeps the committed scale.
    fn show_current(&mut self, ctx: &egui::Context, keep_scale: bool) {
        let Some(batch) = self.batch.as_ref() else {
            return;
        };
        let current = batch.current();
        match current.base_size() {
            Ok(base) => {
                info!(path = %current.path().display(), keep_scale, "showing image");
                if keep_scale {
                    self.form.rebase(base);
                } else {
                    self.form.load(base);
                }
                self.viewport.reset_view();
                self.process(ctx);
            }
            Err(e) => self.ui_state.show_error(e.to_string()),
        }
    }

    pub fn select_next(&mut self, ctx: &egui::Context) {
        if let Some(batch) = self.batch.as_mut() {
            batch.select_next();
            self.show_current(ctx, true);
        }
    }

    pub fn select_prev(&mut self, ctx: &egui::Context) {
        if let Some(batch) = self.batch.as_mut() {
            batch.select_prev();
            self.show_current(ctx, true);
        }
    }

    /// Resample the current image at the committed size and upload it.
    pub fn process(&mut self, ctx: &egui::Context) {
        let (Some(batch), Some(state)) = (self.batch.as_ref(), self.form.state()) else {
            return;
        };
        let source = batch.current();
        let output = render(&source.image, &state);
        let (preview, display_scale) = preview_fit(&output, MAX_PREVIEW_SIDE);

        let texture = ctx.load_texture(
            "viewport",
            dynamic_to_color_image(&preview),
            egui::TextureOptions::NEAREST,
        );
        self.viewport.texture = Some(texture);
        self.viewport.image_size = Some([state.width as usize, state.height as usize]);
        self.viewport.display_scale = display_scale;
        self.viewport.viewing_label = format!(
            "{} ({}/{})",
            source.display_name(),
            batch.current_index() + 1,
            batch.len()
        );
    }

    /// Push a field's text through the reconciler.
    pub fn commit_field(&mut self, ctx: &egui::Context, field: DimensionField) {
        let result = self.form.commit(field);
        self.after_update(ctx, result);
    }

    /// Live mode: a field changed while typing.
    pub fn field_edited(&mut self, ctx: &egui::Context, field: DimensionField) {
        if self.form.edited(field, self.settings.sync_mode).is_some() {
            self.process(ctx);
        }
    }

    /// Arrow-key step on the scale field; `up` adds, otherwise subtracts.
    pub fn step_scale(&mut self, ctx: &egui::Context, up: bool) {
        let step = self.settings.scale_step;
        let delta = if up { step } else { -step };
        let result = self.form.step(delta, self.settings.min_step_scale);
        self.after_update(ctx, result);
    }

    fn after_update(
        &mut self,
        ctx: &egui::Context,
        result: upsampler_core::error::Result<Option<ScaleState>>,
    ) {
        match result {
            Ok(Some(_)) => self.process(ctx),
            Ok(None) => {}
            Err(e) if e.is_input_error() => self.report_input_error(e),
            Err(e) => self.ui_state.show_error(e.to_string()),
        }
    }

    fn report_input_error(&mut self, err: UpsamplerError) {
        match self.settings.input_errors {
            InputErrorReporting::Dialog => {
                let msg = format!("{}\n\n{err}", self.labels().invalid_input);
                self.ui_state.show_error(msg);
            }
            InputErrorReporting::Silent => {
                warn!(error = %err, "input rejected");
            }
        }
    }

    /// Write the resized output(s) next to their sources.
    pub fn save(&mut self) {
        let (Some(batch), Some(state)) = (self.batch.as_ref(), self.form.state()) else {
            return;
        };
        let scope = self.save_scope();
        let labels = self.labels();

        match save_outputs(batch, &state, scope, naming::now()) {
            Ok(paths) => {
                for p in &paths {
                    self.ui_state.add_log(format!("Saved: {}", p.display()));
                }
                let msg = if paths.len() > 1 {
                    labels.saved_many
                } else {
                    labels.saved_one
                };
                if self.settings.success_toast {
                    let duration = Duration::from_millis(self.settings.success_toast_ms);
                    self.ui_state.show_toast(msg.to_string(), duration);
                } else {
                    self.ui_state.show_info(msg.to_string());
                }
            }
            Err(e) => {
                self.ui_state.show_error(format!("{}: {e}", labels.save_failed));
            }
        }
    }

    /// Batch loading saves every loaded image; single loading just the one shown.
    pub fn save_scope(&self) -> SaveScope {
        match self.settings.load_mode {
            LoadMode::Batch => SaveScope::All,
            LoadMode::Single => SaveScope::Current,
        }
    }

    pub fn set_always_on_top(&mut self, ctx: &egui::Context, on: bool) {
        self.settings.always_on_top = on;
        let level = if on {
            egui::viewport::WindowLevel::AlwaysOnTop
        } else {
            egui::viewport::WindowLevel::Normal
        };
        ctx.send_viewport_cmd(egui::ViewportCommand::WindowLevel(level));
    }

    /// Swap in new settings and push the ones with window side effects.
    pub fn apply_settings(&mut self, ctx: &egui::Context, settings: Settings) {
        let on_top = settings.always_on_top;
        self.settings = settings;
        self.set_always_on_top(ctx, on_top);
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            let dropped: Vec<PathBuf> = i
                .raw
                .dropped_files
                .iter()
                .filter_map(|f| f.path.clone())
                .collect();
            (!i.raw.hovered_files.is_empty(), dropped)
        });
        self.ui_state.drop_hover = hovering;

        let paths: Vec<PathBuf> = dropped
            .into_iter()
            .filter(|p| upsampler_core::io::image_io::is_supported_image(p))
            .collect();
        self.open_paths(ctx, paths);
    }

    fn sync_title(&mut self, ctx: &egui::Context) {
        let title = self.labels().app_title;
        if self.applied_title != Some(title) {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.to_string()));
            self.applied_title = Some(title);
        }
    }

    fn tick_toast(&mut self, ctx: &egui::Context) {
        if let Some(remaining) = self.ui_state.expire_toast(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

impl Default for UpsamplerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl eframe::App for UpsamplerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.sync_title(ctx);
        self.handle_dropped_files(ctx);
        self.tick_toast(ctx);

        panels::menu_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewport::show(ctx, self);
        panels::dialogs::show(ctx, self);
        panels::preferences::show(ctx, self);
    }
}
