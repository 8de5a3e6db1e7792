pub mod form;

use std::fmt;

use tracing::debug;

use crate::consts::{DEFAULT_SCALE, MAX_OUTPUT_DIMENSION};
use crate::error::{Result, UpsamplerError};

pub use form::{DimensionForm, SyncMode};

/// One of the three user-editable quantities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DimensionField {
    Scale,
    Width,
    Height,
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scale => write!(f, "scale factor"),
            Self::Width => write!(f, "width"),
            Self::Height => write!(f, "height"),
        }
    }
}

/// Native size of the source image. Both sides are non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BaseSize {
    width: u32,
    height: u32,
}

impl BaseSize {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(UpsamplerError::InvalidDimensions {
                width: width as u64,
                height: height as u64,
            });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Output size for `scale`, rounded half away from zero.
    ///
    /// Fails when either side rounds to 0 or exceeds [`MAX_OUTPUT_DIMENSION`].
    pub fn scaled(&self, scale: f64) -> Result<(u32, u32)> {
        let w = scale_side(self.width, scale);
        let h = scale_side(self.height, scale);
        let limit = MAX_OUTPUT_DIMENSION as f64;
        if !(1.0..=limit).contains(&w) || !(1.0..=limit).contains(&h) {
            return Err(UpsamplerError::InvalidDimensions {
                width: saturating_u64(w),
                height: saturating_u64(h),
            });
        }
        Ok((w as u32, h as u32))
    }
}

fn scale_side(side: u32, scale: f64) -> f64 {
    (side as f64 * scale).round()
}

fn saturating_u64(v: f64) -> u64 {
    if v.is_finite() && v > 0.0 {
        v.min(u64::MAX as f64) as u64
    } else {
        0
    }
}

/// Committed scale factor and output size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleState {
    pub scale: f64,
    pub width: u32,
    pub height: u32,
}

impl ScaleState {
    /// Identity state for an image of `base` size.
    pub fn native(base: BaseSize) -> Self {
        Self {
            scale: DEFAULT_SCALE,
            width: base.width,
            height: base.height,
        }
    }
}

/// Keeps scale, width and height consistent with a fixed base size.
///
/// Every successful update leaves `width == round(W0 * scale)` and
/// `height == round(H0 * scale)`. A failed update leaves the state untouched.
#[derive(Clone, Debug)]
pub struct DimensionReconciler {
    base: BaseSize,
    state: ScaleState,
}

impl DimensionReconciler {
    pub fn new(base: BaseSize) -> Self {
        Self {
            base,
            state: ScaleState::native(base),
        }
    }

    pub fn state(&self) -> ScaleState {
        self.state
    }

    /// Swap in a new source image: back to scale 1.0 at native size.
    pub fn reset(&mut self, base: BaseSize) {
        self.base = base;
        self.state = ScaleState::native(base);
    }

    pub fn set_scale(&mut self, scale: f64) -> Result<ScaleState> {
        let scale = positive(DimensionField::Scale, scale)?;
        let (width, height) = self.base.scaled(scale)?;
        self.commit(ScaleState { scale, width, height })
    }

    pub fn set_width(&mut self, width: u32) -> Result<ScaleState> {
        positive(DimensionField::Width, width as f64)?;
        let scale = width as f64 / self.base.width as f64;
        let (_, height) = self.base.scaled(scale)?;
        self.commit(ScaleState { scale, width, height })
    }

    pub fn set_height(&mut self, height: u32) -> Result<ScaleState> {
        positive(DimensionField::Height, height as f64)?;
        let scale = height as f64 / self.base.height as f64;
        let (width, _) = self.base.scaled(scale)?;
        self.commit(ScaleState { scale, width, height })
    }

    /// Parse `text` as the given field and apply it.
    ///
    /// Width and height accept fractional input, rounded to the nearest pixel.
    pub fn apply(&mut self, field: DimensionField, text: &str) -> Result<ScaleState> {
        let value = parse_number(field, text)?;
        match field {
            DimensionField::Scale => self.set_scale(value),
            DimensionField::Width => self.set_width(to_pixels(field, value)?),
            DimensionField::Height => self.set_height(to_pixels(field, value)?),
        }
    }

    /// Add `delta` to the scale factor, never going below `min`.
    pub fn step_scale(&mut self, delta: f64, min: f64) -> Result<ScaleState> {
        self.set_scale((self.state.scale + delta).max(min))
    }

    fn commit(&mut self, state: ScaleState) -> Result<ScaleState> {
        debug!(
            scale = state.scale,
            width = state.width,
            height = state.height,
            "dimensions reconciled"
        );
        self.state = state;
        Ok(state)
    }
}

/// Shortest text that parses back to `scale`, with at least one decimal
/// (`2.0`, `1.5`, `0.3333333333333333`).
pub fn format_scale(scale: f64) -> String {
    if scale.fract() == 0.0 {
        format!("{scale:.1}")
    } else {
        format!("{scale}")
    }
}

fn parse_number(field: DimensionField, text: &str) -> Result<f64> {
    text.trim()
        .parse::<f64>()
        .map_err(|_| UpsamplerError::InvalidInput {
            field,
            value: text.to_string(),
        })
}

fn positive(field: DimensionField, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(UpsamplerError::NonPositive { field, value })
    }
}

fn to_pixels(field: DimensionField, value: f64) -> Result<u32> {
    let value = positive(field, value)?.round();
    if value < 1.0 {
        return Err(UpsamplerError::NonPositive { field, value });
    }
    // Saturates; oversized values are rejected by `BaseSize::scaled`.
    Ok(value as u32)
}
