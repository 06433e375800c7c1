//! Binary (on-off) alphabet
//!
//! Symbol 0 → 0.0
//! Symbol 1 → 1.0

use crate::traits::Modulation;

/// Two-level unipolar alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct Binary;

impl Modulation for Binary {
    fn order(&self) -> usize {
        2
    }

    fn level(&self, sym: u8) -> f64 {
        (sym & 0x01) as f64
    }

    fn name(&self) -> &'static str {
        "binary"
    }

    fn artifact_prefix(&self) -> &'static str {
        ""
    }
}
