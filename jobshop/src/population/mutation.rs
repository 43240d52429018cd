use rand::{seq::index, Rng};

use crate::chromosome::Chromosome;

/// With probability `rate`, swaps the genes at two distinct random positions.
///
/// Returns whether a swap happened. Chromosomes with fewer than two genes are
/// left alone.
pub fn swap_mutation<R: Rng + ?Sized>(chromosome: &mut Chromosome, rate: f64, rng: &mut R) -> bool {
    if chromosome.len() < 2 || !rng.gen_bool(rate.clamp(0.0, 1.0)) {
        return false;
    }

    let positions = index::sample(rng, chromosome.len(), 2);
    chromosome.swap(positions.index(0), positions.index(1));

    true
}
