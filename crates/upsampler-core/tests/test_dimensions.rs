mod common;

use approx::assert_relative_eq;

use upsampler_core::consts::MAX_OUTPUT_DIMENSION;
use upsampler_core::dimensions::{format_scale, BaseSize, DimensionField, DimensionReconciler};
use upsampler_core::error::UpsamplerError;

use common::base;

#[test]
fn test_new_starts_at_native_size() {
    let r = DimensionReconciler::new(base(640, 480));
    let s = r.state();
    assert_relative_eq!(s.scale, 1.0);
    assert_eq!((s.width, s.height), (640, 480));
}

#[test]
fn test_zero_base_rejected() {
    assert!(matches!(
        BaseSize::new(0, 10),
        Err(UpsamplerError::InvalidDimensions { width: 0, height: 10 })
    ));
}

#[test]
fn test_scale_rounds_both_sides() {
    let (w0, h0) = (37u32, 23u32);
    let mut r = DimensionReconciler::new(base(w0, h0));
    for s in [0.1, 0.25, 0.5, 1.0, 1.3, 1.5, 2.0, 2.75, 3.333, 7.9, 16.0] {
        let state = r.set_scale(s).unwrap();
        assert_eq!(state.width, (w0 as f64 * s).round() as u32, "scale {s}");
        assert_eq!(state.height, (h0 as f64 * s).round() as u32, "scale {s}");
        assert_relative_eq!(state.scale, s);
    }
}

#[test]
fn test_scale_rounds_half_away_from_zero() {
    let mut r = DimensionReconciler::new(base(3, 5));
    let s = r.set_scale(1.5).unwrap();
    // 4.5 -> 5, 7.5 -> 8
    assert_eq!((s.width, s.height), (5, 8));
}

#[test]
fn test_double_width_doubles_everything() {
    let mut r = DimensionReconciler::new(base(120, 75));
    let s = r.set_width(240).unwrap();
    assert_relative_eq!(s.scale, 2.0);
    assert_eq!(s.width, 240);
    assert_eq!(s.height, 150);
}

#[test]
fn test_height_drives_scale_and_width() {
    let mut r = DimensionReconciler::new(base(100, 40));
    let s = r.set_height(10).unwrap();
    assert_relative_eq!(s.scale, 0.25);
    assert_eq!((s.width, s.height), (25, 10));
}

#[test]
fn test_width_keeps_invariant_for_odd_ratios() {
    let (w0, h0) = (7u32, 3u32);
    let mut r = DimensionReconciler::new(base(w0, h0));
    for w in 1..=50u32 {
        let Ok(s) = r.set_width(w) else { continue };
        assert_eq!(s.width, w);
        assert_eq!(s.width, (w0 as f64 * s.scale).round() as u32);
        assert_eq!(s.height, (h0 as f64 * s.scale).round() as u32);
    }
}

#[test]
fn test_width_that_collapses_height_is_rejected() {
    let mut r = DimensionReconciler::new(base(100, 1));
    let before = r.state();
    let err = r.set_width(10).unwrap_err();
    assert!(matches!(err, UpsamplerError::InvalidDimensions { height: 0, .. }));
    assert_eq!(r.state(), before);
}

#[test]
fn test_non_numeric_input_leaves_state() {
    let mut r = DimensionReconciler::new(base(50, 40));
    r.set_scale(2.0).unwrap();
    let before = r.state();

    for field in [DimensionField::Scale, DimensionField::Width, DimensionField::Height] {
        let err = r.apply(field, "abc").unwrap_err();
        assert!(matches!(err, UpsamplerError::InvalidInput { .. }));
        assert!(err.is_input_error());
        assert_eq!(r.state(), before);
    }
}

#[test]
fn test_non_positive_input_leaves_state() {
    let mut r = DimensionReconciler::new(base(50, 40));
    let before = r.state();

    for (field, text) in [
        (DimensionField::Scale, "0"),
        (DimensionField::Scale, "-1.5"),
        (DimensionField::Scale, "NaN"),
        (DimensionField::Scale, "inf"),
        (DimensionField::Width, "0"),
        (DimensionField::Height, "-3"),
        (DimensionField::Width, "0.2"),
    ] {
        let err = r.apply(field, text).unwrap_err();
        assert!(
            matches!(err, UpsamplerError::NonPositive { .. }),
            "{field} {text:?} gave {err}"
        );
        assert_eq!(r.state(), before);
    }
}

#[test]
fn test_oversized_output_rejected() {
    let mut r = DimensionReconciler::new(base(1000, 1000));
    let err = r.set_scale(100.0).unwrap_err();
    assert!(matches!(err, UpsamplerError::InvalidDimensions { .. }));
    let err = r.set_width(MAX_OUTPUT_DIMENSION + 1).unwrap_err();
    assert!(matches!(err, UpsamplerError::InvalidDimensions { .. }));
    assert_eq!(r.state().width, 1000);
}

#[test]
fn test_apply_accepts_whitespace_and_fractional_pixels() {
    let mut r = DimensionReconciler::new(base(10, 10));
    let s = r.apply(DimensionField::Width, " 20.4 ").unwrap();
    assert_eq!((s.width, s.height), (20, 20));
    let s = r.apply(DimensionField::Scale, "3").unwrap();
    assert_eq!((s.width, s.height), (30, 30));
}

#[test]
fn test_step_scale_clamps_to_minimum() {
    let mut r = DimensionReconciler::new(base(10, 20));
    let s = r.step_scale(0.5, 0.5).unwrap();
    assert_relative_eq!(s.scale, 1.5);
    r.step_scale(-0.5, 0.5).unwrap();
    r.step_scale(-0.5, 0.5).unwrap();
    let s = r.step_scale(-0.5, 0.5).unwrap();
    assert_relative_eq!(s.scale, 0.5);
    assert_eq!((s.width, s.height), (5, 10));
}

#[test]
fn test_reset_returns_to_native_size() {
    let mut r = DimensionReconciler::new(base(10, 20));
    r.set_scale(4.0).unwrap();
    r.reset(base(300, 200));
    let s = r.state();
    assert_relative_eq!(s.scale, 1.0);
    assert_eq!((s.width, s.height), (300, 200));
}

#[test]
fn test_format_scale() {
    assert_eq!(format_scale(2.0), "2.0");
    assert_eq!(format_scale(1.5), "1.5");
    assert_eq!(format_scale(0.25), "0.25");
}
