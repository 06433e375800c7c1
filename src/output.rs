//! Artifact writer
//!
//! Each call produces two headerless single-column text files: the
//! binary stream under the requested name and the PAM-4 stream under the
//! same name prefixed with `PAM4_`.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{SynthConfig, SynthMode};
use crate::engine::{StreamOutput, Synthesis, Synthesizer};
use crate::error::{Result, SynthError};
use crate::modulations::ModulationKind;

/// Files written by one synthesis call
#[derive(Debug, Clone)]
pub struct Artifacts {
    /// Binary stream
    pub primary: PathBuf,
    /// PAM-4 stream
    pub secondary: PathBuf,
    pub synthesis: Synthesis,
}

/// Path of `kind`'s artifact for `output_name`
///
/// The stream prefix goes on the file name; the parent directory is kept.
pub fn artifact_path(output_name: impl AsRef<Path>, kind: ModulationKind) -> Result<PathBuf> {
    let output_name = output_name.as_ref();
    let file_name = output_name
        .file_name()
        .ok_or_else(|| {
            SynthError::invalid(
                "output_name",
                format!("{} has no file name", output_name.display()),
            )
        })?
        .to_string_lossy();

    let prefixed = format!("{}{}", kind.modulation().artifact_prefix(), file_name);
    Ok(output_name.with_file_name(prefixed))
}

/// (primary, secondary) artifact paths for `output_name`
pub fn artifact_paths(output_name: impl AsRef<Path>) -> Result<(PathBuf, PathBuf)> {
    let output_name = output_name.as_ref();
    Ok((
        artifact_path(output_name, ModulationKind::Binary)?,
        artifact_path(output_name, ModulationKind::Pam4)?,
    ))
}

/// Write one value per line, no header
pub fn write_sequence(path: impl AsRef<Path>, output: &StreamOutput) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| SynthError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    let result = match output {
        StreamOutput::Symbols(symbols) => symbols
            .iter()
            .try_for_each(|s| writeln!(writer, "{}", s)),
        StreamOutput::Samples(samples) => samples
            .iter()
            .try_for_each(|x| writeln!(writer, "{}", x)),
    };

    result
        .and_then(|_| writer.flush())
        .map_err(|e| SynthError::io(path, e))
}

/// Read a headerless single-column file back; blank lines are skipped
pub fn read_sequence(path: impl AsRef<Path>) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| SynthError::io(path, e))?;

    let mut values = Vec::new();
    for (idx, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| SynthError::io(path, e))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<f64>().map_err(|_| SynthError::Malformed {
            path: path.to_path_buf(),
            line: idx + 1,
            value: trimmed.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Synthesize both streams and write them next to each other
///
/// Write failures are returned as-is; a retry would redraw the noise.
pub fn synthesize<R: Rng>(
    output_name: impl AsRef<Path>,
    config: &SynthConfig,
    rng: &mut R,
) -> Result<Artifacts> {
    let (primary, secondary) = artifact_paths(output_name)?;
    let synthesis = Synthesizer::new(config.clone())?.synthesize(rng)?;

    write_sequence(&primary, &synthesis.binary)?;
    write_sequence(&secondary, &synthesis.pam4)?;

    match synthesis.mode {
        SynthMode::NoiseFree => {
            log::info!("Saved pure binary signal → {}", primary.display())
        }
        SynthMode::Calibrated { snr_db } => log::info!(
            "Saved noisy signal with SNR = {} dB → {}",
            snr_db,
            primary.display()
        ),
    }

    Ok(Artifacts {
        primary,
        secondary,
        synthesis,
    })
}

/// [`synthesize`] with a freshly seeded generator
pub fn synthesize_entropy(output_name: impl AsRef<Path>, config: &SynthConfig) -> Result<Artifacts> {
    let mut rng = ChaCha8Rng::seed_from_u64(rand::random());
    synthesize(output_name, config, &mut rng)
}
