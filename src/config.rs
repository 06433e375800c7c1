//! Synthesis configuration
//!
//! Every constant of the measurement setup (oversampling, SNR offset,
//! reference RMS) is an explicit field so the engine stays a pure
//! function of its inputs.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SynthError};
use crate::expander::DEFAULT_OVERSAMPLING;
use crate::noise::{DEFAULT_REFERENCE_RMS, DEFAULT_SNR_OFFSET_DB};
use crate::normalize::NormalizationMode;

/// Default number of symbols per stream
pub const DEFAULT_POINT_COUNT: usize = 300;

/// Fewest symbols that can feed min-max normalization in calibrated mode
pub const MIN_CALIBRATED_POINTS: usize = 2;

/// Pipeline state, fixed for the whole call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SynthMode {
    /// Raw symbols / levels, no noise, no normalization
    NoiseFree,
    /// Noise calibrated to the requested SNR, normalized output
    Calibrated { snr_db: f64 },
}

/// Parameters of one synthesis call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SynthConfig {
    /// Symbols per stream (N)
    pub point_count: usize,
    /// Target SNR in dB; `None` selects noise-free mode
    pub snr_db: Option<f64>,
    /// Reference signal RMS amplitude (A_ref)
    pub reference_rms: f64,
    /// Samples held per symbol (R)
    pub oversampling: usize,
    /// Calibration offset added to `snr_db`
    pub snr_offset_db: f64,
    /// Output scale of calibrated streams
    pub normalization: NormalizationMode,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            snr_db: None,
            reference_rms: DEFAULT_REFERENCE_RMS,
            oversampling: DEFAULT_OVERSAMPLING,
            snr_offset_db: DEFAULT_SNR_OFFSET_DB,
            normalization: NormalizationMode::MaxAnchored,
        }
    }
}

impl SynthConfig {
    /// Noise-free configuration with `point_count` symbols
    pub fn noise_free(point_count: usize) -> Self {
        Self {
            point_count,
            ..Default::default()
        }
    }

    /// Calibrated configuration at `snr_db`
    pub fn calibrated(point_count: usize, snr_db: f64) -> Self {
        Self {
            point_count,
            snr_db: Some(snr_db),
            ..Default::default()
        }
    }

    pub fn with_point_count(mut self, point_count: usize) -> Self {
        self.point_count = point_count;
        self
    }

    pub fn with_snr_db(mut self, snr_db: Option<f64>) -> Self {
        self.snr_db = snr_db;
        self
    }

    pub fn with_reference_rms(mut self, reference_rms: f64) -> Self {
        self.reference_rms = reference_rms;
        self
    }

    pub fn with_oversampling(mut self, oversampling: usize) -> Self {
        self.oversampling = oversampling;
        self
    }

    pub fn with_normalization(mut self, normalization: NormalizationMode) -> Self {
        self.normalization = normalization;
        self
    }

    pub fn mode(&self) -> SynthMode {
        match self.snr_db {
            Some(snr_db) => SynthMode::Calibrated { snr_db },
            None => SynthMode::NoiseFree,
        }
    }

    /// Output length of an expanded stream (N x R)
    pub fn sample_count(&self) -> usize {
        self.point_count * self.oversampling
    }

    /// Reject parameters before anything is drawn
    pub fn validate(&self) -> Result<()> {
        if self.point_count == 0 {
            return Err(SynthError::invalid("point_count", "must be at least 1"));
        }
        if self.oversampling == 0 {
            return Err(SynthError::invalid("oversampling", "must be at least 1"));
        }
        if !self.reference_rms.is_finite() || self.reference_rms <= 0.0 {
            return Err(SynthError::invalid(
                "reference_rms",
                format!("must be positive and finite, got {}", self.reference_rms),
            ));
        }
        if !self.snr_offset_db.is_finite() {
            return Err(SynthError::invalid("snr_offset_db", "must be finite"));
        }
        if let Some(snr_db) = self.snr_db {
            if !snr_db.is_finite() {
                return Err(SynthError::invalid(
                    "snr_db",
                    format!("must be finite, got {}", snr_db),
                ));
            }
            if self.point_count < MIN_CALIBRATED_POINTS {
                return Err(SynthError::DegenerateSequence(format!(
                    "{} symbol(s) hold a constant signal level; need at least {}",
                    self.point_count, MIN_CALIBRATED_POINTS
                )));
            }
        }
        Ok(())
    }
}
