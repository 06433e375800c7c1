//! Noise calibration and Additive White Gaussian Noise generation
//!
//! Noise RMS is derived from a target SNR against a fixed reference
//! signal RMS. Gaussian samples use the Box-Muller transform.

use rand::Rng;
use std::f64::consts::PI;

use crate::utils::db_to_linear;

/// Default reference signal RMS amplitude (volts) of the bench setup
pub const DEFAULT_REFERENCE_RMS: f64 = 0.144;

/// Calibration offset added to the requested SNR.
///
/// Compensates the peak-to-average structure of the centered waveform
/// relative to the reference RMS. Must stay at 3 dB.
pub const DEFAULT_SNR_OFFSET_DB: f64 = 3.0;

/// Requested SNR plus the calibration offset
#[inline]
pub fn effective_snr_db(snr_db: f64, offset_db: f64) -> f64 {
    snr_db + offset_db
}

/// Noise RMS realizing `snr_db` against `reference_rms`
///
/// sigma = A_ref / 10^((SNR + offset) / 20). RMS is an amplitude ratio,
/// hence 20 and not 10.
#[inline]
pub fn noise_rms(snr_db: f64, reference_rms: f64, offset_db: f64) -> f64 {
    reference_rms / db_to_linear(effective_snr_db(snr_db, offset_db))
}

/// Zero-mean Gaussian sample source with fixed standard deviation
///
/// Draws uniforms from the caller's RNG, so sequences are reproducible
/// whenever that RNG is seeded.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    /// Standard deviation (= noise RMS for zero mean)
    std_dev: f64,

    /// Cached second sample from Box-Muller
    cached: Option<f64>,
}

impl GaussianNoise {
    pub fn new(std_dev: f64) -> Self {
        Self {
            std_dev,
            cached: None,
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Generate next Gaussian noise sample using Box-Muller transform
    pub fn next_sample<R: Rng>(&mut self, rng: &mut R) -> f64 {
        if let Some(cached) = self.cached.take() {
            return cached * self.std_dev;
        }

        let u1: f64 = rng.gen();
        let u2: f64 = rng.gen();

        // Avoid log(0)
        let u1 = u1.max(1e-10);

        let r = (-2.0 * u1.ln()).sqrt();
        let theta = 2.0 * PI * u2;

        self.cached = Some(r * theta.sin());

        r * theta.cos() * self.std_dev
    }

    /// Fill a fresh vector with `len` samples
    pub fn sequence<R: Rng>(&mut self, len: usize, rng: &mut R) -> Vec<f64> {
        (0..len).map(|_| self.next_sample(rng)).collect()
    }
}

/// SNR-to-noise calibration for one synthesis call
#[derive(Debug, Clone, Copy)]
pub struct NoiseCalibrator {
    snr_db: f64,
    reference_rms: f64,
    offset_db: f64,
}

impl NoiseCalibrator {
    pub fn new(snr_db: f64, reference_rms: f64, offset_db: f64) -> Self {
        Self {
            snr_db,
            reference_rms,
            offset_db,
        }
    }

    pub fn effective_snr_db(&self) -> f64 {
        effective_snr_db(self.snr_db, self.offset_db)
    }

    pub fn noise_rms(&self) -> f64 {
        noise_rms(self.snr_db, self.reference_rms, self.offset_db)
    }

    /// Draw one zero-mean noise sequence of `len` samples
    pub fn draw<R: Rng>(&self, len: usize, rng: &mut R) -> Vec<f64> {
        let sigma = self.noise_rms();
        log::info!(
            "Noise RMS for {} dB effective SNR is: {}",
            self.effective_snr_db(),
            sigma
        );
        GaussianNoise::new(sigma).sequence(len, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::{mean, std_dev};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_noise_rms_24db() {
        // 24 + 3 = 27 dB -> 0.144 / 22.387
        let sigma = noise_rms(24.0, 0.144, DEFAULT_SNR_OFFSET_DB);
        assert!((sigma - 0.006433).abs() < 1e-6, "sigma = {}", sigma);
        assert!((sigma - 0.144 / 10f64.powf(27.0 / 20.0)).abs() < 1e-15);
    }

    #[test]
    fn test_noise_rms_operational_ladder() {
        for &snr in &[24.0, 18.0, 12.0, 9.0, 6.0] {
            for &a_ref in &[0.144, 0.5, 1.0] {
                let sigma = noise_rms(snr, a_ref, DEFAULT_SNR_OFFSET_DB);
                let expected = a_ref / 10f64.powf((snr + 3.0) / 20.0);
                assert!(
                    (sigma - expected).abs() < 1e-12,
                    "SNR {} dB, A_ref {}: expected {}, got {}",
                    snr, a_ref, expected, sigma
                );
            }
        }
    }

    #[test]
    fn test_noise_rms_6db_step_halves_sigma() {
        let a = noise_rms(12.0, 0.144, 3.0);
        let b = noise_rms(18.0, 0.144, 3.0);
        assert!((a / b - 10f64.powf(0.3)).abs() < 1e-12);
    }

    #[test]
    fn test_effective_snr_offset() {
        let cal = NoiseCalibrator::new(24.0, 0.144, DEFAULT_SNR_OFFSET_DB);
        assert_eq!(cal.effective_snr_db(), 27.0);
    }

    #[test]
    fn test_noise_statistics() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut noise = GaussianNoise::new(1.0);
        let samples = noise.sequence(10000, &mut rng);

        let m = mean(&samples);
        assert!(m.abs() < 0.1, "Mean {} should be close to 0", m);

        let s = std_dev(&samples);
        assert!((s - 1.0).abs() < 0.05, "Std {} should be close to 1", s);
    }

    #[test]
    fn test_calibrated_draw_matches_sigma() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let cal = NoiseCalibrator::new(12.0, 0.144, DEFAULT_SNR_OFFSET_DB);
        let samples = cal.draw(50000, &mut rng);

        assert_eq!(samples.len(), 50000);
        let s = std_dev(&samples);
        let sigma = cal.noise_rms();
        assert!((s - sigma).abs() / sigma < 0.05, "measured {} vs {}", s, sigma);
    }

    #[test]
    fn test_noise_deterministic() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(42);
        let mut rng2 = ChaCha8Rng::seed_from_u64(42);

        let mut noise1 = GaussianNoise::new(0.5);
        let mut noise2 = GaussianNoise::new(0.5);

        for _ in 0..100 {
            assert_eq!(noise1.next_sample(&mut rng1), noise2.next_sample(&mut rng2));
        }
    }

    #[test]
    fn test_noise_is_gaussian() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut noise = GaussianNoise::new(1.0);

        let num_samples = 100000usize;
        let samples = noise.sequence(num_samples, &mut rng);

        let m = mean(&samples);
        let s = std_dev(&samples);

        // ~68% within 1σ, ~95% within 2σ
        let within_1sigma = samples.iter()
            .filter(|&x| (x - m).abs() < s)
            .count() as f64 / num_samples as f64;
        let within_2sigma = samples.iter()
            .filter(|&x| (x - m).abs() < 2.0 * s)
            .count() as f64 / num_samples as f64;

        assert!((within_1sigma - 0.683).abs() < 0.02,
            "1σ coverage {} should be ~0.683", within_1sigma);
        assert!((within_2sigma - 0.954).abs() < 0.01,
            "2σ coverage {} should be ~0.954", within_2sigma);
    }

    #[test]
    fn test_noise_numerical_stability() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut noise = GaussianNoise::new(1.0);

        for _ in 0..200_000 {
            let sample = noise.next_sample(&mut rng);
            assert!(sample.is_finite());
        }
    }
}
