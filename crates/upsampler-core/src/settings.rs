use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::batch::LoadMode;
use crate::consts::{DEFAULT_MIN_STEP_SCALE, DEFAULT_SCALE_STEP, DEFAULT_SUCCESS_TOAST_MS};
use crate::dimensions::SyncMode;
use crate::error::{Result, UpsamplerError};

/// How rejected field input is reported.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputErrorReporting {
    /// Modal dialog naming the bad value.
    #[default]
    Dialog,
    /// Field quietly reverts.
    Silent,
}

impl std::fmt::Display for InputErrorReporting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dialog => write!(f, "Dialog"),
            Self::Silent => write!(f, "Silent"),
        }
    }
}

/// UI language for labels and messages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    English,
    Spanish,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::English => write!(f, "English"),
            Self::Spanish => write!(f, "Español"),
        }
    }
}

/// Preview canvas color behind the image.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CanvasBackground {
    Black,
    #[default]
    Gray,
    White,
}

impl CanvasBackground {
    /// Gray level used to paint the canvas.
    pub fn gray_level(&self) -> u8 {
        match self {
            Self::Black => 0,
            Self::Gray => 128,
            Self::White => 255,
        }
    }
}

impl std::fmt::Display for CanvasBackground {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Black => write!(f, "Black"),
            Self::Gray => write!(f, "Gray"),
            Self::White => write!(f, "White"),
        }
    }
}

/// Application behavior and view preferences.
///
/// Missing keys in a TOML file fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub load_mode: LoadMode,
    pub sync_mode: SyncMode,
    pub input_errors: InputErrorReporting,
    /// Show a transient "saved" notice instead of a dialog.
    pub success_toast: bool,
    pub success_toast_ms: u64,
    pub language: Language,
    pub scale_step: f64,
    pub min_step_scale: f64,
    pub background: CanvasBackground,
    pub always_on_top: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            load_mode: LoadMode::default(),
            sync_mode: SyncMode::default(),
            input_errors: InputErrorReporting::default(),
            success_toast: true,
            success_toast_ms: DEFAULT_SUCCESS_TOAST_MS,
            language: Language::default(),
            scale_step: DEFAULT_SCALE_STEP,
            min_step_scale: DEFAULT_MIN_STEP_SCALE,
            background: CanvasBackground::default(),
            always_on_top: false,
        }
    }
}

impl Settings {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(content).map_err(|e| UpsamplerError::Settings(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| UpsamplerError::Settings(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "settings imported");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_toml_string()?)?;
        info!(path = %path.display(), "settings exported");
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.scale_step.is_finite() && self.scale_step > 0.0) {
            return Err(UpsamplerError::Settings(format!(
                "scale_step must be positive, got {}",
                self.scale_step
            )));
        }
        if !(self.min_step_scale.is_finite() && self.min_step_scale > 0.0) {
            return Err(UpsamplerError::Settings(format!(
                "min_step_scale must be positive, got {}",
                self.min_step_scale
            )));
        }
        Ok(())
    }
}
