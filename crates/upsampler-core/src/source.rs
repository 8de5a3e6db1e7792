use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::dimensions::BaseSize;
use crate::error::Result;

/// A decoded input image and the file it came from.
#[derive(Clone, Debug)]
pub struct SourceImage {
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl SourceImage {
    pub fn new(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn base_size(&self) -> Result<BaseSize> {
        BaseSize::new(self.width(), self.height())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for display, or the full path when there is none.
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
