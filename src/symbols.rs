//! Symbol generator
//!
//! Draws i.i.d. symbols uniformly over a modulation's alphabet.

use rand::Rng;

use crate::traits::Modulation;

/// Draw `count` independent symbols uniform over `0..order`
///
/// Consumes exactly one range draw per symbol from `rng`.
pub fn generate_symbols<R: Rng>(modulation: &dyn Modulation, count: usize, rng: &mut R) -> Vec<u8> {
    let order = modulation.order() as u8;
    (0..count).map(|_| rng.gen_range(0..order)).collect()
}
