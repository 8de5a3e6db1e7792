use std::path::Path;

use chrono::NaiveDate;

use upsampler_core::io::image_io::is_supported_image;
use upsampler_core::io::naming::{output_file_name, output_path};

fn stamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, 1)
        .unwrap()
        .and_hms_opt(9, 3, 7)
        .unwrap()
}

#[test]
fn test_output_file_name_embeds_name_scale_and_time() {
    let name = output_file_name(Path::new("/tmp/pics/sprite.png"), 2.0, stamp());
    assert_eq!(name, "sprite.png_2.0_2024-05-01--09-03-07.png");
}

#[test]
fn test_fractional_scale_in_name() {
    let name = output_file_name(Path::new("tile.jpg"), 1.5, stamp());
    assert_eq!(name, "tile.jpg_1.5_2024-05-01--09-03-07.png");
}

#[test]
fn test_output_path_is_next_to_source() {
    let path = output_path(Path::new("/data/art/hero.jpeg"), 4.0, stamp());
    assert_eq!(path.parent(), Some(Path::new("/data/art")));
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));
}

#[test]
fn test_output_path_without_parent_dir() {
    let path = output_path(Path::new("a.png"), 1.0, stamp());
    assert_eq!(path, Path::new("a.png_1.0_2024-05-01--09-03-07.png"));
}

#[test]
fn test_supported_extensions() {
    assert!(is_supported_image(Path::new("a.PNG")));
    assert!(is_supported_image(Path::new("b.jpeg")));
    assert!(!is_supported_image(Path::new("notes.txt")));
    assert!(!is_supported_image(Path::new("no_extension")));
}
