//! Signal Synth - Baseband test waveform synthesizer
//!
//! Generates binary and PAM-4 sample-and-hold waveforms, adds Gaussian
//! noise calibrated to a target SNR against a reference RMS amplitude,
//! and min-max normalizes the result. Both streams of a call share one
//! noise draw. Plotting and spectrum analysis live downstream and only
//! consume the headerless single-column files written here.

pub mod config;
pub mod engine;
pub mod error;
pub mod expander;
pub mod ladder;
pub mod modulations;
pub mod nif;
pub mod noise;
pub mod normalize;
pub mod output;
pub mod symbols;
pub mod traits;
pub mod utils;

// Re-export core types for convenience
pub use config::{SynthConfig, SynthMode};
pub use engine::{StreamOutput, Synthesis, Synthesizer};
pub use error::{Result, SynthError};
pub use expander::SampleAndHold;
pub use modulations::{Binary, ModulationKind, Pam4};
pub use noise::{noise_rms, GaussianNoise, NoiseCalibrator};
pub use normalize::NormalizationMode;
pub use output::{artifact_paths, read_sequence, synthesize, synthesize_entropy, write_sequence, Artifacts};
pub use traits::Modulation;

rustler::init!("Elixir.SignalSynth.Native");
