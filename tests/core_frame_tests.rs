use sampling_studio::core::frame::{RAW_SERIES, RECONSTRUCTED_SERIES};
use sampling_studio::core::{RenderFrame, SamplingError, TimeSeries};

#[test]
fn test_frame_creation() {
    let frame = RenderFrame::new(3);
    assert_eq!(frame.sequence_id, 3);
    assert!(frame.series.is_empty());
    assert!(frame.metadata.is_empty());
    assert!(!frame.has_reconstruction());
}

#[test]
fn test_frame_with_series() {
    let mut frame = RenderFrame::new(1);
    frame.insert_series(RAW_SERIES, vec![0.0, 1.0], vec![2.0, 3.0]);
    frame.insert_series(RECONSTRUCTED_SERIES, vec![0.0], vec![2.0]);

    let raw = frame.get(RAW_SERIES).unwrap();
    assert_eq!(raw.x, vec![0.0, 1.0]);
    assert_eq!(raw.y, vec![2.0, 3.0]);
    assert!(frame.has_reconstruction());
}

#[test]
fn test_series_accessors() {
    let series = TimeSeries::new(vec![0.5, 1.0, 1.5], vec![3.0, 2.0, 1.0]).unwrap();
    assert_eq!(series.len(), 3);
    assert_eq!(series.min_time(), Some(0.5));
    assert_eq!(series.max_time(), Some(1.5));

    let replaced = series.with_amplitude(vec![0.0; 3]).unwrap();
    assert_eq!(replaced.time(), series.time());
    assert_eq!(replaced.amplitude(), &[0.0, 0.0, 0.0]);
}

#[test]
fn test_series_rejects_wrong_amplitude_length() {
    let series = TimeSeries::new(vec![0.0, 1.0], vec![1.0, 1.0]).unwrap();
    assert_eq!(
        series.with_amplitude(vec![1.0]).unwrap_err(),
        SamplingError::LengthMismatch { left: 2, right: 1 }
    );
}
