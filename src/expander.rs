//! Sample-and-hold expander
//!
//! Oversamples a symbol stream by holding each value for a fixed
//! number of output samples. No interpolation, no pulse shaping.

use crate::traits::Modulation;

/// Default samples held per symbol
pub const DEFAULT_OVERSAMPLING: usize = 10;

/// Fixed-factor sample-and-hold oversampler
#[derive(Debug, Clone, Copy)]
pub struct SampleAndHold {
    factor: usize,
}

impl SampleAndHold {
    /// Create an expander holding each value `factor` times
    ///
    /// # Panics
    /// Panics if `factor` is zero
    pub fn new(factor: usize) -> Self {
        assert!(factor > 0, "Oversampling factor must be at least 1");
        Self { factor }
    }

    /// Samples per symbol
    pub fn factor(&self) -> usize {
        self.factor
    }

    /// Repeat every value `factor` times contiguously
    pub fn expand(&self, values: &[f64]) -> Vec<f64> {
        let mut out = Vec::with_capacity(values.len() * self.factor);
        for &v in values {
            out.extend(std::iter::repeat(v).take(self.factor));
        }
        out
    }

    /// Map symbols through `modulation` and expand
    ///
    /// `centered` selects zero-mean levels (noise path) over the
    /// unipolar [0, 1] levels (noise-free path).
    pub fn expand_symbols(&self, modulation: &dyn Modulation, symbols: &[u8], centered: bool) -> Vec<f64> {
        let levels: Vec<f64> = symbols
            .iter()
            .map(|&s| {
                if centered {
                    modulation.centered_level(s)
                } else {
                    modulation.level(s)
                }
            })
            .collect();
        self.expand(&levels)
    }
}

impl Default for SampleAndHold {
    fn default() -> Self {
        Self::new(DEFAULT_OVERSAMPLING)
    }
}
