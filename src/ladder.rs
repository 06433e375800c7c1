//! Operational SNR ladder
//!
//! A bench session uses one pure reference capture plus noisy captures
//! at a fixed set of SNRs. Each rung is a separate call with fresh noise.

use std::path::Path;

use rand::Rng;

use crate::config::SynthConfig;
use crate::error::Result;
use crate::output::{synthesize, Artifacts};

/// Target SNRs (dB) of the noisy rungs, highest first
pub const OPERATIONAL_SNR_DB: [f64; 5] = [24.0, 18.0, 12.0, 9.0, 6.0];

/// File name of the noise-free rung
pub const PURE_FILE_NAME: &str = "pure_binary.csv";

/// File name of the rung at `snr_db`, e.g. `noisy_signal_12dB.csv`
pub fn ladder_file_name(snr_db: f64) -> String {
    format!("noisy_signal_{}dB.csv", snr_db)
}

/// Write the pure rung and every [`OPERATIONAL_SNR_DB`] rung into `dir`
///
/// `base` supplies point count, reference RMS and the other fixed fields;
/// its `snr_db` is overridden per rung.
pub fn synthesize_ladder<R: Rng>(
    dir: impl AsRef<Path>,
    base: &SynthConfig,
    rng: &mut R,
) -> Result<Vec<Artifacts>> {
    let dir = dir.as_ref();
    let mut rungs = Vec::with_capacity(OPERATIONAL_SNR_DB.len() + 1);

    let pure = base.clone().with_snr_db(None);
    rungs.push(synthesize(dir.join(PURE_FILE_NAME), &pure, rng)?);

    for &snr_db in &OPERATIONAL_SNR_DB {
        let config = base.clone().with_snr_db(Some(snr_db));
        rungs.push(synthesize(dir.join(ladder_file_name(snr_db)), &config, rng)?);
    }

    log::info!("Wrote {} ladder rungs to {}", rungs.len(), dir.display());
    Ok(rungs)
}
