//! Additive white Gaussian noise at a target signal-to-noise ratio

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

use crate::core::{SamplingError, SamplingResult};

/// Population variance (mean squared deviation from the mean)
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n
}

/// Noise power that yields `snr_db` against a signal of `signal_power`
pub fn noise_power(signal_power: f64, snr_db: f64) -> f64 {
    signal_power / 10f64.powf(snr_db / 10.0)
}

/// Gaussian noise source with an owned, optionally seeded RNG
#[derive(Debug, Clone)]
pub struct NoiseInjector {
    rng: StdRng,
}

impl NoiseInjector {
    /// Seeded injectors reproduce the same noise sequence
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Return `amplitudes` plus one independent noise draw per point
    pub fn add_noise(&mut self, amplitudes: &[f64], snr_db: f64) -> SamplingResult<Vec<f64>> {
        if snr_db.is_nan() || snr_db == f64::NEG_INFINITY {
            return Err(SamplingError::InvalidSnr(snr_db));
        }

        let power = noise_power(population_variance(amplitudes), snr_db);
        let std_dev = power.sqrt();
        if std_dev == 0.0 {
            return Ok(amplitudes.to_vec());
        }

        let distribution =
            Normal::new(0.0, std_dev).map_err(|_| SamplingError::InvalidSnr(snr_db))?;

        Ok(amplitudes
            .iter()
            .map(|a| a + distribution.sample(&mut self.rng))
            .collect())
    }
}

impl Default for NoiseInjector {
    fn default() -> Self {
        Self::new(None)
    }
}
