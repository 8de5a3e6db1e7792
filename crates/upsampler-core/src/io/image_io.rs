use std::path::Path;

use image::{DynamicImage, ImageFormat};
use tracing::info;

use crate::consts::SUPPORTED_EXTENSIONS;
use crate::error::Result;
use crate::source::SourceImage;

/// Decode an image file, format detected from its contents.
pub fn load_image(path: &Path) -> Result<SourceImage> {
    let image = image::ImageReader::open(path)?
        .with_guessed_format()?
        .decode()?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "image loaded"
    );
    Ok(SourceImage::new(path, image))
}

/// Save as PNG regardless of the path's extension.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    image.save_with_format(path, ImageFormat::Png)?;
    info!(
        path = %path.display(),
        width = image.width(),
        height = image.height(),
        "image saved"
    );
    Ok(())
}

/// Whether the extension is one the open dialog offers. Used to filter
/// drag-and-drop payloads, which may contain anything.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}
