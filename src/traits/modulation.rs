//! Modulation trait - Symbol ↔ amplitude level mapping
//!
//! Defines the alphabet size and how symbol indices map onto a
//! unipolar [0, 1] level scale. Knows nothing about oversampling or noise.

/// Baseband amplitude alphabet
///
/// Implementations define the discrete levels of a pulse-amplitude stream.
/// Used by the symbol generator (alphabet size) and the expander (levels).
pub trait Modulation: Send + Sync {
    /// Number of symbols in the alphabet (2 for binary, 4 for PAM-4)
    fn order(&self) -> usize;

    /// Bits per symbol (log2 of order)
    fn bits_per_symbol(&self) -> usize {
        (self.order() as f64).log2() as usize
    }

    /// Map a symbol index to its unipolar level
    ///
    /// # Arguments
    /// * `sym` - Symbol index (0 to order-1, higher bits are masked off)
    ///
    /// # Returns
    /// Level in the closed interval [0, 1]
    fn level(&self, sym: u8) -> f64;

    /// Map a symbol index to its zero-mean level in [-0.5, 0.5]
    fn centered_level(&self, sym: u8) -> f64 {
        self.level(sym) - 0.5
    }

    /// Short lowercase name used in logs
    fn name(&self) -> &'static str;

    /// File name prefix for this stream's artifact
    fn artifact_prefix(&self) -> &'static str;
}
