mod common;

use upsampler_core::batch::{ImageBatch, LoadMode};
use upsampler_core::error::UpsamplerError;

use common::write_test_png;

#[test]
fn test_batch_loads_all_files() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_test_png(dir.path(), "a.png", 4, 3),
        write_test_png(dir.path(), "b.png", 8, 2),
        write_test_png(dir.path(), "c.png", 1, 1),
    ];

    let (batch, skipped) = ImageBatch::open(&paths, LoadMode::Batch).unwrap();
    assert_eq!(batch.len(), 3);
    assert!(skipped.is_empty());
    assert_eq!(batch.current_index(), 0);
    assert_eq!(batch.current().width(), 4);
    assert_eq!(batch.current().display_name(), "a.png");
}

#[test]
fn test_single_mode_keeps_first_only() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_test_png(dir.path(), "a.png", 4, 3),
        write_test_png(dir.path(), "b.png", 8, 2),
    ];

    let (batch, _) = ImageBatch::open(&paths, LoadMode::Single).unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.current().path(), paths[0].as_path());
}

#[test]
fn test_navigation_wraps() {
    let dir = tempfile::tempdir().unwrap();
    let paths = vec![
        write_test_png(dir.path(), "a.png", 1, 1),
        write_test_png(dir.path(), "b.png", 2, 2),
        write_test_png(dir.path(), "c.png", 3, 3),
    ];
    let (mut batch, _) = ImageBatch::open(&paths, LoadMode::Batch).unwrap();

    assert_eq!(batch.select_prev().width(), 3);
    assert_eq!(batch.current_index(), 2);
    assert_eq!(batch.select_next().width(), 1);
    assert_eq!(batch.select_next().width(), 2);
    assert_eq!(batch.select_next().width(), 3);
    assert_eq!(batch.select_next().width(), 1);
}

#[test]
fn test_unreadable_files_are_skipped() {
    let dir = tempfile::tempdir().unwrap();
    let bad = dir.path().join("broken.png");
    std::fs::write(&bad, b"definitely not a png").unwrap();
    let missing = dir.path().join("missing.png");
    let good = write_test_png(dir.path(), "good.png", 5, 5);

    let (batch, skipped) =
        ImageBatch::open(&[bad.clone(), missing, good], LoadMode::Batch).unwrap();
    assert_eq!(batch.len(), 1);
    assert_eq!(skipped.len(), 2);
    assert_eq!(skipped[0].path, bad);
}

#[test]
fn test_nothing_loadable_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let err = ImageBatch::open(&[missing], LoadMode::Batch).unwrap_err();
    assert!(matches!(err, UpsamplerError::EmptyBatch));

    let none: [std::path::PathBuf; 0] = [];
    assert!(ImageBatch::open(&none, LoadMode::Single).is_err());
}
