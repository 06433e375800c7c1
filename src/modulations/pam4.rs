//! PAM-4 alphabet
//!
//! Symbols {0, 1, 2, 3} divided by 3 give evenly spaced levels
//! {0, 1/3, 2/3, 1}; centering yields {-1/2, -1/6, +1/6, +1/2}.

use crate::traits::Modulation;

/// Four-level pulse-amplitude alphabet
#[derive(Debug, Clone, Copy, Default)]
pub struct Pam4;

impl Modulation for Pam4 {
    fn order(&self) -> usize {
        4
    }

    fn level(&self, sym: u8) -> f64 {
        (sym & 0x03) as f64 / 3.0
    }

    fn name(&self) -> &'static str {
        "pam4"
    }

    fn artifact_prefix(&self) -> &'static str {
        "PAM4_"
    }
}
