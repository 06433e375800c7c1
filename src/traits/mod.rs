//! Core traits for the synthesis engine
//!
//! A modulation is the only axis the two output streams differ on;
//! everything else in the pipeline is shared.

mod modulation;

pub use modulation::Modulation;
