mod common;

use image::GenericImageView;

use upsampler_core::consts::MAX_PREVIEW_SIDE;
use upsampler_core::dimensions::DimensionReconciler;
use upsampler_core::resample::{preview_fit, render, resize_nearest};

use common::{base, coordinate_image};

#[test]
fn test_upscale_repeats_pixels() {
    let img = coordinate_image(2, 2);
    let out = resize_nearest(&img, 4, 4);
    assert_eq!(out.dimensions(), (4, 4));
    for y in 0..4 {
        for x in 0..4 {
            let p = out.get_pixel(x, y).0;
            assert_eq!((p[0], p[1]), ((x / 2) as u8, (y / 2) as u8), "at ({x}, {y})");
        }
    }
}

#[test]
fn test_output_has_no_blended_values() {
    let img = coordinate_image(3, 5);
    let out = resize_nearest(&img, 7, 11);
    for (_, _, p) in out.pixels() {
        assert!(p.0[0] < 3);
        assert!(p.0[1] < 5);
        assert_eq!(p.0[3], 255);
    }
}

#[test]
fn test_render_uses_state_size() {
    let img = coordinate_image(9, 6);
    let mut r = DimensionReconciler::new(base(9, 6));
    let state = r.set_scale(1.5).unwrap();
    let out = render(&img, &state);
    assert_eq!(out.dimensions(), (state.width, state.height));
    assert_eq!(out.dimensions(), (14, 9));
}

#[test]
fn test_downscale() {
    let img = coordinate_image(8, 8);
    let out = resize_nearest(&img, 2, 2);
    assert_eq!(out.dimensions(), (2, 2));
}

#[test]
fn test_preview_fit_passthrough() {
    let img = coordinate_image(16, 8);
    let (preview, factor) = preview_fit(&img, MAX_PREVIEW_SIDE);
    assert_eq!(preview.dimensions(), (16, 8));
    assert_eq!(factor, 1.0);
}

#[test]
fn test_preview_fit_shrinks_longest_side() {
    let img = coordinate_image(200, 50);
    let (preview, factor) = preview_fit(&img, 100);
    assert_eq!(preview.dimensions(), (100, 25));
    assert!((factor - 0.5).abs() < 1e-6);
}
