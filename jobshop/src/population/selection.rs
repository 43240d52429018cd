use rand::{seq::index, Rng};

use crate::catalog::Time;

/// Index of the winner of a tournament over `size` distinct random entries.
///
/// Lower makespan wins; on ties the first contender drawn is kept. Panics on
/// an empty slice.
pub fn tournament_select<R: Rng + ?Sized>(makespans: &[Time], size: usize, rng: &mut R) -> usize {
    let contenders = index::sample(rng, makespans.len(), size.clamp(1, makespans.len()));

    let mut winner = contenders.index(0);
    for contender in contenders.iter().skip(1) {
        if makespans[contender] < makespans[winner] {
            winner = contender;
        }
    }

    winner
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn full_tournament_finds_minimum() {
        let mut rng = StdRng::seed_from_u64(1);
        let makespans = [9, 4, 7];

        for _ in 0..10 {
            assert_eq!(tournament_select(&makespans, 3, &mut rng), 1);
        }
    }

    #[test]
    fn ties_do_not_panic() {
        let mut rng = StdRng::seed_from_u64(2);
        let makespans = [5, 5, 5];

        for _ in 0..10 {
            assert!(tournament_select(&makespans, 3, &mut rng) < 3);
        }
    }

    #[test]
    fn winner_is_never_worse_than_two_others() {
        let mut rng = StdRng::seed_from_u64(3);
        let makespans: Vec<Time> = (0..20).collect();

        for _ in 0..200 {
            let winner = tournament_select(&makespans, 3, &mut rng);
            // three distinct contenders, so the two largest values can never win
            assert!(winner < 18);
        }
    }

    #[test]
    fn size_one_is_uniform_pick() {
        let mut rng = StdRng::seed_from_u64(4);
        let makespans = [1, 2, 3, 4];

        let picks: Vec<usize> = (0..50)
            .map(|_| tournament_select(&makespans, 1, &mut rng))
            .collect();
        assert!(picks.iter().any(|&pick| pick != 0));
    }
}
