//! Synthesis pipeline
//!
//! Generator → Expander → (calibrated only) Noise Calibrator → Combiner/Normalizer.
//! Both modulation streams run through the same parametrized pipeline and
//! share one noise draw per call.

use rand::Rng;

use crate::config::{SynthConfig, SynthMode};
use crate::error::Result;
use crate::expander::SampleAndHold;
use crate::modulations::ModulationKind;
use crate::noise::NoiseCalibrator;
use crate::normalize::combine;
use crate::symbols::generate_symbols;


/// One stream's output sequence
#[derive(Debug, Clone, PartialEq)]
pub enum StreamOutput {
    /// Raw, unexpanded symbol indices
    Symbols(Vec<u8>),
    /// Real-valued samples
    Samples(Vec<f64>),
}

impl StreamOutput {
    pub fn len(&self) -> usize {
        match self {
            StreamOutput::Symbols(s) => s.len(),
            StreamOutput::Samples(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values as f64 regardless of representation
    pub fn to_f64(&self) -> Vec<f64> {
        match self {
            StreamOutput::Symbols(s) => s.iter().map(|&v| v as f64).collect(),
            StreamOutput::Samples(s) => s.clone(),
        }
    }
}

/// Result of one synthesis call
#[derive(Debug, Clone)]
pub struct Synthesis {
    pub mode: SynthMode,
    /// Calibrated noise standard deviation, `None` in noise-free mode
    pub noise_rms: Option<f64>,
    pub binary: StreamOutput,
    pub pam4: StreamOutput,
}

impl Synthesis {
    pub fn stream(&self, kind: ModulationKind) -> &StreamOutput {
        match kind {
            ModulationKind::Binary => &self.binary,
            ModulationKind::Pam4 => &self.pam4,
        }
    }
}

/// Stateless waveform synthesizer bound to a validated configuration
#[derive(Debug, Clone)]
pub struct Synthesizer {
    config: SynthConfig,
    expander: SampleAndHold,
}

impl Synthesizer {
    pub fn new(config: SynthConfig) -> Result<Self> {
        config.validate()?;
        let expander = SampleAndHold::new(config.oversampling);
        Ok(Self { config, expander })
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    /// Run the pipeline once against `rng`
    ///
    /// Draw order is fixed: binary symbols, PAM-4 symbols, then a single
    /// noise sequence shared by both streams.
    pub fn synthesize<R: Rng>(&self, rng: &mut R) -> Result<Synthesis> {
        let n = self.config.point_count;

        let binary_symbols = generate_symbols(ModulationKind::Binary.modulation(), n, rng);
        let pam4_symbols = generate_symbols(ModulationKind::Pam4.modulation(), n, rng);
        log::debug!("Drew {} symbols per stream", n);

        let mode = self.config.mode();
        let (noise_rms, noise) = match mode {
            SynthMode::NoiseFree => (None, None),
            SynthMode::Calibrated { snr_db } => {
                let calibrator = NoiseCalibrator::new(
                    snr_db,
                    self.config.reference_rms,
                    self.config.snr_offset_db,
                );
                let noise = calibrator.draw(self.config.sample_count(), rng);
                (Some(calibrator.noise_rms()), Some(noise))
            }
        };

        let binary = self.stream(ModulationKind::Binary, binary_symbols, noise.as_deref())?;
        let pam4 = self.stream(ModulationKind::Pam4, pam4_symbols, noise.as_deref())?;

        Ok(Synthesis {
            mode,
            noise_rms,
            binary,
            pam4,
        })
    }

    /// One modulation stream through expand → combine → normalize
    fn stream(
        &self,
        kind: ModulationKind,
        symbols: Vec<u8>,
        noise: Option<&[f64]>,
    ) -> Result<StreamOutput> {
        let modulation = kind.modulation();

        let Some(noise) = noise else {
            // Noise-free binary is emitted at symbol rate; PAM-4 as held levels
            return Ok(match kind {
                ModulationKind::Binary => StreamOutput::Symbols(symbols),
                ModulationKind::Pam4 => StreamOutput::Samples(
                    self.expander.expand_symbols(modulation, &symbols, false),
                ),
            });
        };

        let centered = self.expander.expand_symbols(modulation, &symbols, true);
        let combined = combine(&centered, noise, self.config.reference_rms);
        let normalized = self.config.normalization.apply(&combined)?;
        log::debug!(
            "{} stream: {} samples normalized ({:?})",
            modulation.name(),
            normalized.len(),
            self.config.normalization
        );

        Ok(StreamOutput::Samples(normalized))
    }
}
