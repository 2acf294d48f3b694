use sampling_studio::core::{linspace, SamplingError};
use sampling_studio::dsp::{compute_error, reconstruct, resample, sinc, ErrorSummary, SampleSet};
use std::f64::consts::PI;

#[test]
fn test_sinc_values() {
    assert_eq!(sinc(0.0), 1.0);
    assert!(sinc(1.0).abs() < 1e-15);
    assert!(sinc(-3.0).abs() < 1e-15);
    assert!((sinc(0.5) - 2.0 / PI).abs() < 1e-15);
    assert_eq!(sinc(0.25), sinc(-0.25));
}

#[test]
fn test_reconstruction_passes_through_markers() {
    let period = 0.1;
    let markers = SampleSet {
        markers_x: (0..8).map(|n| n as f64 * period).collect(),
        markers_y: vec![0.3, -1.2, 0.8, 2.0, 0.0, -0.5, 1.1, 0.4],
    };

    let rebuilt = reconstruct(&markers, period, &markers.markers_x).unwrap();
    for (r, y) in rebuilt.iter().zip(&markers.markers_y) {
        assert!((r - y).abs() < 1e-12);
    }
}

#[test]
fn test_reconstruction_of_band_limited_sine() {
    // 1 Hz sampled at 16 Hz; check the middle of the record where
    // truncation of the sinc sum is negligible
    let period = 1.0 / 16.0;
    let n = 256;
    let markers_x: Vec<f64> = (0..n).map(|i| i as f64 * period).collect();
    let markers_y: Vec<f64> = markers_x.iter().map(|t| (2.0 * PI * t).sin()).collect();
    let markers = SampleSet { markers_x, markers_y };

    let target = linspace(7.0, 9.0, 101);
    let rebuilt = reconstruct(&markers, period, &target).unwrap();
    for (t, r) in target.iter().zip(&rebuilt) {
        assert!((r - (2.0 * PI * t).sin()).abs() < 0.05);
    }
}

#[test]
fn test_reconstruction_of_empty_set_is_zero() {
    let rebuilt = reconstruct(&SampleSet::empty(), 0.5, &[0.0, 1.0]).unwrap();
    assert_eq!(rebuilt, vec![0.0, 0.0]);
}

#[test]
fn test_zero_period_rejected() {
    let err = reconstruct(&SampleSet::empty(), 0.0, &[0.0]).unwrap_err();
    assert!(matches!(err, SamplingError::DivisionByZero(_)));
}

#[test]
fn test_resample_linear_data_is_exact() {
    let source_x = linspace(0.0, 5.0, 11);
    let source_y: Vec<f64> = source_x.iter().map(|x| 3.0 * x - 1.0).collect();
    let target = linspace(0.0, 5.0, 37);

    let out = resample(&source_x, &source_y, &target).unwrap();
    for (x, y) in target.iter().zip(&out) {
        assert!((y - (3.0 * x - 1.0)).abs() < 1e-9);
    }
}

#[test]
fn test_resample_smooth_signal() {
    let source_x = linspace(0.0, 1.0, 41);
    let source_y: Vec<f64> = source_x.iter().map(|x| (2.0 * PI * x).sin()).collect();
    let target = linspace(0.0, 1.0, 333);

    let out = resample(&source_x, &source_y, &target).unwrap();
    for (x, y) in target.iter().zip(&out) {
        assert!((y - (2.0 * PI * x).sin()).abs() < 1e-4);
    }
}

#[test]
fn test_resample_outside_domain_is_extrapolation() {
    let err = resample(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], &[0.5, 2.5]).unwrap_err();
    assert_eq!(
        err,
        SamplingError::Extrapolation { target: 2.5, min: 0.0, max: 2.0 }
    );

    let err = resample(&[0.0, 1.0, 2.0], &[0.0, 1.0, 4.0], &[-0.1]).unwrap_err();
    assert!(matches!(err, SamplingError::Extrapolation { .. }));
}

#[test]
fn test_resample_needs_two_points() {
    let err = resample(&[1.0], &[1.0], &[1.0]).unwrap_err();
    assert_eq!(err, SamplingError::InsufficientData { required: 2, actual: 1 });
}

#[test]
fn test_error_is_raw_difference() {
    let error = compute_error(&[1.0, 2.0, 3.0], &[0.5, 2.0, 4.0]).unwrap();
    assert_eq!(error, vec![0.5, 0.0, -1.0]);
}

#[test]
fn test_error_requires_common_grid() {
    let err = compute_error(&[1.0, 2.0], &[1.0]).unwrap_err();
    assert_eq!(err, SamplingError::LengthMismatch { left: 2, right: 1 });
}

#[test]
fn test_error_summary() {
    let summary = ErrorSummary::from_residual(&[3.0, -4.0]);
    assert!((summary.rms - (12.5f64).sqrt()).abs() < 1e-12);
    assert_eq!(summary.peak, 4.0);
    assert_eq!(summary.mean, -0.5);

    assert_eq!(ErrorSummary::from_residual(&[]), ErrorSummary::default());
}
