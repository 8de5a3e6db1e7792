use image::imageops::FilterType;
use image::DynamicImage;

use crate::dimensions::ScaleState;

/// Nearest-neighbor resize to exactly `width` x `height`.
pub fn resize_nearest(image: &DynamicImage, width: u32, height: u32) -> DynamicImage {
    image.resize_exact(width, height, FilterType::Nearest)
}

/// Resize to the output size held by `state`.
pub fn render(image: &DynamicImage, state: &ScaleState) -> DynamicImage {
    resize_nearest(image, state.width, state.height)
}

/// Shrink `image` so neither side exceeds `max_side`, for on-screen preview.
///
/// Returns the image to display and the factor it was scaled by (1.0 when
/// it already fits). Uses nearest-neighbor so the blocky look survives.
pub fn preview_fit(image: &DynamicImage, max_side: u32) -> (DynamicImage, f32) {
    let (w, h) = (image.width(), image.height());
    let longest = w.max(h);
    if longest <= max_side || longest == 0 {
        return (image.clone(), 1.0);
    }
    let factor = max_side as f64 / longest as f64;
    let pw = ((w as f64 * factor).round() as u32).max(1);
    let ph = ((h as f64 * factor).round() as u32).max(1);
    (resize_nearest(image, pw, ph), factor as f32)
}
