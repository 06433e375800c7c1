//! NIF interface for Elixir
//!
//! Exposes the synthesizer to `SignalSynth.Native`. Every call takes an
//! explicit seed so a run can be replayed bit-for-bit from Elixir.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustler::{Atom, NifResult, NifStruct};

use crate::config::SynthConfig;
use crate::engine::Synthesizer;
use crate::error::SynthError;
use crate::modulations::ModulationKind;
use crate::noise::{self, DEFAULT_SNR_OFFSET_DB};
use crate::normalize::NormalizationMode;
use crate::output;

rustler::atoms! {
    ok,
}

/// Synthesis parameters from Elixir
#[derive(NifStruct, Debug, Clone)]
#[module = "SignalSynth.Config"]
pub struct NifSynthConfig {
    pub point_count: u64,
    pub snr_db: Option<f64>,
    pub reference_rms: f64,
    pub oversampling: u64,
    pub snr_offset_db: f64,
    /// "max_anchored" or "unit"
    pub normalization: String,
}

impl NifSynthConfig {
    pub fn into_config(self) -> Result<SynthConfig, SynthError> {
        let normalization = match self.normalization.as_str() {
            "max_anchored" => NormalizationMode::MaxAnchored,
            "unit" => NormalizationMode::Unit,
            other => {
                return Err(SynthError::invalid(
                    "normalization",
                    format!("unknown mode {:?}", other),
                ))
            }
        };

        Ok(SynthConfig {
            point_count: self.point_count as usize,
            snr_db: self.snr_db,
            reference_rms: self.reference_rms,
            oversampling: self.oversampling as usize,
            snr_offset_db: self.snr_offset_db,
            normalization,
        })
    }
}

fn to_term(err: SynthError) -> rustler::Error {
    rustler::Error::Term(Box::new(err.to_string()))
}

fn build(config: NifSynthConfig) -> NifResult<Synthesizer> {
    config
        .into_config()
        .and_then(Synthesizer::new)
        .map_err(to_term)
}

// ============================================================================
// Synthesis NIFs
// ============================================================================

/// Synthesize and write both artifacts
///
/// Returns `{:ok, {primary_path, pam4_path}}`.
#[rustler::nif(schedule = "DirtyIo")]
pub fn synth_write(
    config: NifSynthConfig,
    output_name: String,
    seed: u64,
) -> NifResult<(Atom, (String, String))> {
    let config = config.into_config().map_err(to_term)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let artifacts = output::synthesize(&output_name, &config, &mut rng).map_err(to_term)?;

    Ok((
        ok(),
        (
            artifacts.primary.to_string_lossy().into_owned(),
            artifacts.secondary.to_string_lossy().into_owned(),
        ),
    ))
}

/// Synthesize both streams in memory
///
/// Returns `{:ok, {binary, pam4}}` as float lists.
#[rustler::nif(schedule = "DirtyCpu")]
pub fn synth_generate(config: NifSynthConfig, seed: u64) -> NifResult<(Atom, (Vec<f64>, Vec<f64>))> {
    let synth = build(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let out = synth.synthesize(&mut rng).map_err(to_term)?;
    Ok((ok(), (out.binary.to_f64(), out.pam4.to_f64())))
}

/// Synthesize and return a single stream ("binary" or "pam4")
#[rustler::nif(schedule = "DirtyCpu")]
pub fn synth_stream(config: NifSynthConfig, modulation: String, seed: u64) -> NifResult<(Atom, Vec<f64>)> {
    let kind: ModulationKind = modulation.parse().map_err(to_term)?;
    let synth = build(config)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let out = synth.synthesize(&mut rng).map_err(to_term)?;
    Ok((ok(), out.stream(kind).to_f64()))
}

/// Calibrated noise RMS for a target SNR
#[rustler::nif]
pub fn synth_noise_rms(snr_db: f64, reference_rms: f64, offset_db: Option<f64>) -> f64 {
    noise::noise_rms(snr_db, reference_rms, offset_db.unwrap_or(DEFAULT_SNR_OFFSET_DB))
}
