#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};

use upsampler_core::dimensions::BaseSize;
use upsampler_core::source::SourceImage;

/// Image whose pixel at (x, y) encodes its own coordinates, so resampling
/// can be checked pixel by pixel.
pub fn coordinate_image(width: u32, height: u32) -> DynamicImage {
    let img = RgbaImage::from_fn(width, height, |x, y| Rgba([x as u8, y as u8, 0, 255]));
    DynamicImage::ImageRgba8(img)
}

/// Write a coordinate image as PNG into `dir` and return its path.
pub fn write_test_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    coordinate_image(width, height)
        .save_with_format(&path, image::ImageFormat::Png)
        .expect("write test PNG");
    path
}

pub fn source(path: &Path, width: u32, height: u32) -> SourceImage {
    SourceImage::new(path, coordinate_image(width, height))
}

pub fn base(width: u32, height: u32) -> BaseSize {
    BaseSize::new(width, height).expect("non-zero base size")
}
