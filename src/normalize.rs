//! Combiner and min-max normalizer
//!
//! Scales a zero-mean waveform to the reference RMS, adds shared noise,
//! lifts it by half the reference RMS, then rescales by its observed range.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};
use crate::utils::min_max;

/// Relative range below which a sequence counts as constant
pub const DEGENERATE_RANGE: f64 = 1e-12;

/// Output scale of the normalizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationMode {
    /// (x - max) / (max - min): maximum at 0, minimum at -1
    #[default]
    MaxAnchored,
    /// (x - min) / (max - min): minimum at 0, maximum at 1
    Unit,
}

impl NormalizationMode {
    pub fn apply(&self, samples: &[f64]) -> Result<Vec<f64>> {
        match self {
            NormalizationMode::MaxAnchored => normalize_max_anchored(samples),
            NormalizationMode::Unit => normalize_unit_range(samples),
        }
    }
}

/// x[i] = centered[i] * A_ref + noise[i] + A_ref / 2
///
/// # Panics
/// Panics if `centered` and `noise` differ in length
pub fn combine(centered: &[f64], noise: &[f64], reference_rms: f64) -> Vec<f64> {
    assert_eq!(
        centered.len(),
        noise.len(),
        "Noise length must match signal length"
    );
    let dc = reference_rms / 2.0;
    centered
        .iter()
        .zip(noise)
        .map(|(s, n)| s * reference_rms + n + dc)
        .collect()
}

/// Observed (min, max), rejecting empty, non-finite and flat inputs
fn checked_range(samples: &[f64]) -> Result<(f64, f64)> {
    let (lo, hi) = min_max(samples)
        .ok_or_else(|| SynthError::DegenerateSequence("empty or NaN sequence".into()))?;

    if !lo.is_finite() || !hi.is_finite() {
        return Err(SynthError::DegenerateSequence(format!(
            "non-finite bounds [{}, {}]",
            lo, hi
        )));
    }

    let scale = lo.abs().max(hi.abs()).max(f64::MIN_POSITIVE);
    if hi - lo <= scale * DEGENERATE_RANGE {
        return Err(SynthError::DegenerateSequence(format!(
            "constant sequence of {} samples (min {}, max {})",
            samples.len(),
            lo,
            hi
        )));
    }

    Ok((lo, hi))
}

/// Max-anchored min-max normalization into [-1, 0]
///
/// The largest sample maps to exactly 0 and the smallest to exactly -1.
pub fn normalize_max_anchored(samples: &[f64]) -> Result<Vec<f64>> {
    let (lo, hi) = checked_range(samples)?;
    let range = hi - lo;
    Ok(samples.iter().map(|x| (x - hi) / range).collect())
}

/// Conventional min-max normalization into [0, 1]
pub fn normalize_unit_range(samples: &[f64]) -> Result<Vec<f64>> {
    let (lo, hi) = checked_range(samples)?;
    let range = hi - lo;
    Ok(samples.iter().map(|x| (x - lo) / range).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_scales_and_offsets() {
        let out = combine(&[-0.5, 0.5], &[0.0, 0.01], 0.144);
        assert!((out[0] - 0.0).abs() < 1e-15);
        assert!((out[1] - (0.144 + 0.01)).abs() < 1e-15);
    }

    #[test]
    #[should_panic(expected = "Noise length")]
    fn test_combine_length_mismatch() {
        let _ = combine(&[0.5], &[0.0, 0.0], 0.144);
    }

    #[test]
    fn test_max_anchored_endpoints() {
        let out = normalize_max_anchored(&[0.3, -0.7, 1.9, 0.0]).unwrap();
        assert_eq!(out[2], 0.0);
        assert_eq!(out[1], -1.0);
        assert!(out.iter().all(|&x| (-1.0..=0.0).contains(&x)));
    }

    #[test]
    fn test_max_anchored_is_affine() {
        let out = normalize_max_anchored(&[0.0, 1.0, 2.0, 4.0]).unwrap();
        assert_eq!(out, vec![-1.0, -0.75, -0.5, 0.0]);
    }

    #[test]
    fn test_unit_range_endpoints() {
        let out = normalize_unit_range(&[0.0, 1.0, 2.0, 4.0]).unwrap();
        assert_eq!(out, vec![0.0, 0.25, 0.5, 1.0]);
    }

    #[test]
    fn test_constant_sequence_rejected() {
        let err = normalize_max_anchored(&[0.072; 10]).unwrap_err();
        assert!(matches!(err, SynthError::DegenerateSequence(_)));
    }

    #[test]
    fn test_all_zero_rejected() {
        assert!(normalize_unit_range(&[0.0; 4]).is_err());
    }

    #[test]
    fn test_empty_and_nan_rejected() {
        assert!(normalize_max_anchored(&[]).is_err());
        assert!(normalize_max_anchored(&[1.0, f64::NAN]).is_err());
        assert!(normalize_max_anchored(&[1.0, f64::INFINITY]).is_err());
    }

    #[test]
    fn test_mode_dispatch() {
        let x = [1.0, 3.0];
        assert_eq!(NormalizationMode::default(), NormalizationMode::MaxAnchored);
        assert_eq!(NormalizationMode::MaxAnchored.apply(&x).unwrap(), vec![-1.0, 0.0]);
        assert_eq!(NormalizationMode::Unit.apply(&x).unwrap(), vec![0.0, 1.0]);
    }
}
