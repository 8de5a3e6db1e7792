use serde::{Deserialize, Serialize};

use super::{format_scale, BaseSize, DimensionField, DimensionReconciler, ScaleState};
use crate::error::Result;

/// When typed values are pushed through the reconciler.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SyncMode {
    /// Every keystroke is tried; the other fields follow as soon as the text parses.
    Live,
    /// Only Enter or leaving the field applies the value.
    #[default]
    OnCommit,
}

impl std::fmt::Display for SyncMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Live => write!(f, "Live"),
            Self::OnCommit => write!(f, "On Enter"),
        }
    }
}

/// Text buffers for the scale/width/height fields, backed by a reconciler.
///
/// Buffers may hold half-typed text; the reconciler only ever holds a
/// committed, consistent state. Without a loaded image every operation is a
/// no-op returning `Ok(None)`.
#[derive(Clone, Debug, Default)]
pub struct DimensionForm {
    reconciler: Option<DimensionReconciler>,
    pub scale_text: String,
    pub width_text: String,
    pub height_text: String,
}

impl DimensionForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start over for a newly loaded image.
    pub fn load(&mut self, base: BaseSize) {
        match self.reconciler.as_mut() {
            Some(r) => r.reset(base),
            None => self.reconciler = Some(DimensionReconciler::new(base)),
        }
        self.revert();
    }

    /// Switch to another image of the batch, keeping the committed scale.
    ///
    /// Falls back to native size when that scale is not valid for `base`,
    /// e.g. when it would round a side to zero.
    pub fn rebase(&mut self, base: BaseSize) {
        let Some(scale) = self.state().map(|s| s.scale) else {
            self.load(base);
            return;
        };
        self.load(base);
        if let Some(reconciler) = self.reconciler.as_mut() {
            if reconciler.set_scale(scale).is_err() {
                reconciler.reset(base);
            }
        }
        self.revert();
    }

    pub fn state(&self) -> Option<ScaleState> {
        self.reconciler.as_ref().map(DimensionReconciler::state)
    }

    pub fn text(&self, field: DimensionField) -> &str {
        match field {
            DimensionField::Scale => &self.scale_text,
            DimensionField::Width => &self.width_text,
            DimensionField::Height => &self.height_text,
        }
    }

    pub fn text_mut(&mut self, field: DimensionField) -> &mut String {
        match field {
            DimensionField::Scale => &mut self.scale_text,
            DimensionField::Width => &mut self.width_text,
            DimensionField::Height => &mut self.height_text,
        }
    }

    /// A buffer changed. In live mode, try to apply it and refresh the other
    /// two fields; parse failures are ignored while typing.
    pub fn edited(&mut self, field: DimensionField, mode: SyncMode) -> Option<ScaleState> {
        if mode != SyncMode::Live {
            return None;
        }
        let text = self.text(field).to_string();
        let state = self.reconciler.as_mut()?.apply(field, &text).ok()?;
        self.write_except(field, state);
        Some(state)
    }

    /// Apply the buffer for `field`. On failure all three buffers go back
    /// to the committed state and the error is returned.
    pub fn commit(&mut self, field: DimensionField) -> Result<Option<ScaleState>> {
        let text = self.text(field).to_string();
        let Some(reconciler) = self.reconciler.as_mut() else {
            return Ok(None);
        };
        match reconciler.apply(field, &text) {
            Ok(state) => {
                self.write_all(state);
                Ok(Some(state))
            }
            Err(e) => {
                self.revert();
                Err(e)
            }
        }
    }

    /// Up/Down arrow behavior on the scale field.
    ///
    /// Steps from the typed scale when it parses to a positive number,
    /// otherwise from the committed one.
    pub fn step(&mut self, delta: f64, min: f64) -> Result<Option<ScaleState>> {
        let typed = self
            .scale_text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|s| s.is_finite() && *s > 0.0);
        let Some(reconciler) = self.reconciler.as_mut() else {
            return Ok(None);
        };
        let result = match typed {
            Some(scale) => reconciler.set_scale((scale + delta).max(min)),
            None => reconciler.step_scale(delta, min),
        };
        self.revert();
        result.map(Some)
    }

    /// Rewrite every buffer from the committed state.
    pub fn revert(&mut self) {
        match self.state() {
            Some(state) => self.write_all(state),
            None => {
                self.scale_text.clear();
                self.width_text.clear();
                self.height_text.clear();
            }
        }
    }

    fn write_all(&mut self, state: ScaleState) {
        self.scale_text = format_scale(state.scale);
        self.width_text = state.width.to_string();
        self.height_text = state.height.to_string();
    }

    fn write_except(&mut self, field: DimensionField, state: ScaleState) {
        if field != DimensionField::Scale {
            self.scale_text = format_scale(state.scale);
        }
        if field != DimensionField::Width {
            self.width_text = state.width.to_string();
        }
        if field != DimensionField::Height {
            self.height_text = state.height.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(w: u32, h: u32) -> DimensionForm {
        let mut form = DimensionForm::new();
        form.load(BaseSize::new(w, h).unwrap());
        form
    }

    #[test]
    fn test_live_edit_keeps_partial_text() {
        let mut form = loaded(10, 20);
        form.width_text = "2".into();
        let state = form.edited(DimensionField::Width, SyncMode::Live).unwrap();
        assert_eq!(state.height, 4);
        assert_eq!(form.width_text, "2");
        assert_eq!(form.height_text, "4");
    }

    #[test]
    fn test_commit_mode_ignores_edits() {
        let mut form = loaded(10, 20);
        form.width_text = "30".into();
        assert!(form.edited(DimensionField::Width, SyncMode::OnCommit).is_none());
        assert_eq!(form.height_text, "20");
    }

    #[test]
    fn test_no_image_is_noop() {
        let mut form = DimensionForm::new();
        form.scale_text = "abc".into();
        assert!(form.commit(DimensionField::Scale).unwrap().is_none());
        assert!(form.step(0.5, 0.5).unwrap().is_none());
    }
}
