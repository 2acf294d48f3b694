use sampling_studio::core::SamplingError;
use sampling_studio::dsp::noise::{noise_power, population_variance};
use sampling_studio::dsp::NoiseInjector;
use std::f64::consts::PI;

fn sine(n: usize) -> Vec<f64> {
    (0..n).map(|i| (2.0 * PI * i as f64 / 50.0).sin()).collect()
}

#[test]
fn test_population_variance() {
    assert_eq!(population_variance(&[1.0, 3.0]), 1.0);
    assert_eq!(population_variance(&[2.0; 8]), 0.0);
    assert_eq!(population_variance(&[]), 0.0);
}

#[test]
fn test_noise_power_from_snr() {
    assert!((noise_power(2.0, 10.0) - 0.2).abs() < 1e-12);
    assert!((noise_power(1.0, 0.0) - 1.0).abs() < 1e-12);
    assert_eq!(noise_power(1.0, f64::INFINITY), 0.0);
}

#[test]
fn test_infinite_snr_leaves_signal_unchanged() {
    let mut injector = NoiseInjector::new(Some(7));
    let signal = sine(500);
    let out = injector.add_noise(&signal, f64::INFINITY).unwrap();
    assert_eq!(out, signal);
}

#[test]
fn test_very_high_snr_is_near_identity() {
    let mut injector = NoiseInjector::new(Some(7));
    let signal = sine(500);
    let out = injector.add_noise(&signal, 200.0).unwrap();
    for (a, b) in out.iter().zip(&signal) {
        assert!((a - b).abs() < 1e-6);
    }
}

#[test]
fn test_constant_signal_gets_no_noise() {
    let mut injector = NoiseInjector::new(Some(1));
    let out = injector.add_noise(&[3.0; 16], 0.0).unwrap();
    assert_eq!(out, vec![3.0; 16]);
}

#[test]
fn test_noise_variance_matches_snr() {
    let mut injector = NoiseInjector::new(Some(42));
    let signal = sine(20_000);
    let signal_power = population_variance(&signal);

    let out = injector.add_noise(&signal, 10.0).unwrap();
    let noise: Vec<f64> = out.iter().zip(&signal).map(|(o, s)| o - s).collect();

    // Noise variance ~ P / snr_linear, total variance ~ P * (1 + 1 / snr_linear)
    let expected_noise = signal_power / 10.0;
    assert!((population_variance(&noise) - expected_noise).abs() < 0.05 * expected_noise);

    let expected_total = signal_power * 1.1;
    assert!((population_variance(&out) - expected_total).abs() < 0.05 * expected_total);
}

#[test]
fn test_seeded_injectors_are_reproducible() {
    let signal = sine(100);
    let a = NoiseInjector::new(Some(99)).add_noise(&signal, 5.0).unwrap();
    let b = NoiseInjector::new(Some(99)).add_noise(&signal, 5.0).unwrap();
    let c = NoiseInjector::new(Some(100)).add_noise(&signal, 5.0).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_reseed_restarts_sequence() {
    let signal = sine(64);
    let mut injector = NoiseInjector::new(Some(5));
    let first = injector.add_noise(&signal, 3.0).unwrap();
    injector.reseed(5);
    assert_eq!(injector.add_noise(&signal, 3.0).unwrap(), first);
}

#[test]
fn test_invalid_snr_rejected() {
    let mut injector = NoiseInjector::new(Some(0));
    assert!(matches!(
        injector.add_noise(&[0.0, 1.0], f64::NAN),
        Err(SamplingError::InvalidSnr(_))
    ));
    assert_eq!(
        injector.add_noise(&[0.0, 1.0], f64::NEG_INFINITY),
        Err(SamplingError::InvalidSnr(f64::NEG_INFINITY))
    );
}
