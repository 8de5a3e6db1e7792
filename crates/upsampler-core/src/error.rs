use thiserror::Error;

use crate::dimensions::DimensionField;

#[derive(Error, Debug)]
pub enum UpsamplerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid {field}: {value:?} is not a number")]
    InvalidInput { field: DimensionField, value: String },

    #[error("Invalid {field}: {value} must be a positive number")]
    NonPositive { field: DimensionField, value: f64 },

    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u64, height: u64 },

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("No image could be loaded")]
    EmptyBatch,

    #[error("Settings error: {0}")]
    Settings(String),
}

impl UpsamplerError {
    /// Errors caused by what the user typed into a field, as opposed to I/O.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput { .. } | Self::NonPositive { .. } | Self::InvalidDimensions { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UpsamplerError>;
