/// Largest output side accepted by the reconciler, in pixels.
/// 32768x32768 RGBA8 is already 4 GiB.
pub const MAX_OUTPUT_DIMENSION: u32 = 32_768;

/// Scale factor a freshly loaded image starts at.
pub const DEFAULT_SCALE: f64 = 1.0;

/// Amount the Up/Down keys add to or remove from the scale factor.
pub const DEFAULT_SCALE_STEP: f64 = 0.5;

/// Lower bound the Down key will not step below.
pub const DEFAULT_MIN_STEP_SCALE: f64 = 0.5;

/// How long the "saved" notice stays on screen, in milliseconds.
pub const DEFAULT_SUCCESS_TOAST_MS: u64 = 2_000;

/// Longest side of the texture uploaded for preview. Larger outputs are
/// shown downscaled; the saved file is always full size.
pub const MAX_PREVIEW_SIDE: u32 = 4_096;

/// strftime pattern for the timestamp embedded in output file names.
pub const OUTPUT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d--%H-%M-%S";

/// File extensions offered by the open dialog.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif", "webp", "tif", "tiff"];
