use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, UpsamplerError};
use crate::io::image_io::load_image;
use crate::source::SourceImage;

/// How many of the picked or dropped files are kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadMode {
    /// Only the first file.
    Single,
    /// Every file, browsable with Prev/Next.
    #[default]
    Batch,
}

impl std::fmt::Display for LoadMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single => write!(f, "Single image"),
            Self::Batch => write!(f, "Batch"),
        }
    }
}

/// A file that could not be decoded, with the reason.
#[derive(Clone, Debug)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Loaded images and the one currently shown. Never empty.
#[derive(Clone, Debug)]
pub struct ImageBatch {
    images: Vec<SourceImage>,
    current: usize,
}

impl ImageBatch {
    /// Build a batch from already decoded images.
    pub fn from_images(images: Vec<SourceImage>) -> Result<Self> {
        if images.is_empty() {
            return Err(UpsamplerError::EmptyBatch);
        }
        Ok(Self { images, current: 0 })
    }

    /// Decode `paths` according to `mode`. Unreadable files are skipped and
    /// returned alongside the batch; if none load, the batch is an error.
    pub fn open<P: AsRef<Path>>(paths: &[P], mode: LoadMode) -> Result<(Self, Vec<SkippedFile>)> {
        let take = match mode {
            LoadMode::Single => 1,
            LoadMode::Batch => paths.len(),
        };

        let mut images = Vec::with_capacity(take);
        let mut skipped = Vec::new();
        for path in paths.iter().take(take) {
            let path = path.as_ref();
            match load_image(path) {
                Ok(img) => images.push(img),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable image");
                    skipped.push(SkippedFile {
                        path: path.to_path_buf(),
                        reason: e.to_string(),
                    });
                }
            }
        }

        let batch = Self::from_images(images)?;
        info!(count = batch.len(), skipped = skipped.len(), "batch opened");
        Ok((batch, skipped))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &SourceImage {
        &self.images[self.current]
    }

    pub fn images(&self) -> &[SourceImage] {
        &self.images
    }

    /// Advance to the next image, wrapping to the first.
    pub fn select_next(&mut self) -> &SourceImage {
        self.current = (self.current + 1) % self.images.len();
        self.current()
    }

    /// Step back to the previous image, wrapping to the last.
    pub fn select_prev(&mut self) -> &SourceImage {
        self.current = (self.current + self.images.len() - 1) % self.images.len();
        self.current()
    }
}
