use std::path::PathBuf;

use chrono::NaiveDateTime;
use tracing::info;

use crate::batch::ImageBatch;
use crate::dimensions::ScaleState;
use crate::error::Result;
use crate::io::image_io::save_png;
use crate::io::naming::output_path;
use crate::resample::resize_nearest;

/// Which images a save action writes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SaveScope {
    /// Only the image on screen, at the committed width and height.
    #[default]
    Current,
    /// Every image in the batch, each at the committed scale factor.
    All,
}

/// Resize and write PNGs next to their sources.
///
/// The current image is written at exactly `state.width` x `state.height`;
/// the others are scaled by `state.scale` from their own native size. Stops
/// at the first failure.
pub fn save_outputs(
    batch: &ImageBatch,
    state: &ScaleState,
    scope: SaveScope,
    timestamp: NaiveDateTime,
) -> Result<Vec<PathBuf>> {
    let indices: Vec<usize> = match scope {
        SaveScope::Current => vec![batch.current_index()],
        SaveScope::All => (0..batch.len()).collect(),
    };

    let mut written = Vec::with_capacity(indices.len());
    for index in indices {
        let source = &batch.images()[index];
        let (width, height) = if index == batch.current_index() {
            (state.width, state.height)
        } else {
            source.base_size()?.scaled(state.scale)?
        };

        let output = resize_nearest(&source.image, width, height);
        let path = output_path(source.path(), state.scale, timestamp);
        save_png(&output, &path)?;
        written.push(path);
    }

    info!(count = written.len(), scale = state.scale, "outputs saved");
    Ok(written)
}
