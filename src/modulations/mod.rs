//! Modulation implementations
//!
//! - Binary (1 bit/symbol, levels {0, 1})
//! - PAM-4 (2 bits/symbol, levels {0, 1/3, 2/3, 1})

mod binary;
mod pam4;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SynthError;
use crate::traits::Modulation;

pub use binary::Binary;
pub use pam4::Pam4;

/// Runtime modulation selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModulationKind {
    Binary,
    Pam4,
}

impl ModulationKind {
    /// Both streams, in the order their symbols are drawn
    pub const ALL: [ModulationKind; 2] = [ModulationKind::Binary, ModulationKind::Pam4];

    /// Borrow the level mapping for this kind
    pub fn modulation(&self) -> &'static dyn Modulation {
        match self {
            ModulationKind::Binary => &Binary,
            ModulationKind::Pam4 => &Pam4,
        }
    }
}

impl fmt::Display for ModulationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.modulation().name())
    }
}

impl FromStr for ModulationKind {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "binary" | "bpsk" | "nrz" => Ok(ModulationKind::Binary),
            "pam4" | "pam-4" | "pam_4" => Ok(ModulationKind::Pam4),
            other => Err(SynthError::UnsupportedModulation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!("binary".parse::<ModulationKind>().unwrap(), ModulationKind::Binary);
        assert_eq!("BPSK".parse::<ModulationKind>().unwrap(), ModulationKind::Binary);
        assert_eq!("pam4".parse::<ModulationKind>().unwrap(), ModulationKind::Pam4);
        assert_eq!(" PAM-4 ".parse::<ModulationKind>().unwrap(), ModulationKind::Pam4);
    }

    #[test]
    fn test_parse_unknown_is_fatal() {
        let err = "qam16".parse::<ModulationKind>().unwrap_err();
        assert!(matches!(err, SynthError::UnsupportedModulation(ref m) if m == "qam16"));
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(ModulationKind::Binary.to_string(), "binary");
        assert_eq!(ModulationKind::Pam4.to_string(), "pam4");
    }

    #[test]
    fn test_draw_order() {
        assert_eq!(ModulationKind::ALL[0], ModulationKind::Binary);
        assert_eq!(ModulationKind::ALL[1], ModulationKind::Pam4);
    }
}
