//! Random cell selection.
//!
//! The rules only need "pick an index below n"; everything else is derived
//! here so the exclusion constraints hold for any source.

use soroban_sdk::Env;

use crate::grid::{Neighbors, GRID_CELLS};

pub trait RandomSource {
    /// Value in `[0, bound)`, or 0 when `bound == 0`.
    fn below(&mut self, bound: u32) -> u32;

    /// Uniform cell in `[0, 100)`, never one of `exclude`. Duplicate and
    /// out-of-range exclusions are ignored.
    fn random_cell(&mut self, exclude: &[u32]) -> u32 {
        let excluded = |cell: u32| exclude.contains(&cell);
        let blocked = (0..GRID_CELLS).filter(|c| excluded(*c)).count() as u32;
        let mut pick = self.below(GRID_CELLS - blocked);
        for cell in (0..GRID_CELLS).filter(|c| !excluded(*c)) {
            if pick == 0 {
                return cell;
            }
            pick -= 1;
        }
        0
    }

    /// Uniform neighbour of `origin`, never equal to `exclude`.
    ///
    /// Every cell has at least two neighbours, so one is always left after
    /// the exclusion; `origin` is only returned if that ever stops holding.
    fn random_adjacent_cell(&mut self, origin: u32, exclude: Option<u32>) -> u32 {
        let mut options = Neighbors::of(origin);
        if let Some(skip) = exclude {
            options = options.without(skip);
        }
        if options.is_empty() {
            return origin;
        }
        options.get(self.below(options.len())).unwrap_or(origin)
    }
}

/// Host PRNG of the current invocation.
pub struct PrngSource<'a> {
    env: &'a Env,
}

impl<'a> PrngSource<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }
}

impl RandomSource for PrngSource<'_> {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        self.env.prng().gen_range::<u64>(0..=u64::from(bound - 1)) as u32
    }
}

/// Always answers `value % bound`.
#[cfg(test)]
pub(crate) struct Fixed(pub u32);

#[cfg(test)]
impl RandomSource for Fixed {
    fn below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            0
        } else {
            self.0 % bound
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid;

    #[test]
    fn random_cell_skips_excluded_cell() {
        for pick in 0..GRID_CELLS {
            let cell = Fixed(pick).random_cell(&[7]);
            assert!(cell < GRID_CELLS);
            assert_ne!(cell, 7);
        }
        assert_eq!(Fixed(6).random_cell(&[7]), 6);
        assert_eq!(Fixed(7).random_cell(&[7]), 8);
        assert_eq!(Fixed(98).random_cell(&[7]), 99);
    }

    #[test]
    fn random_cell_skips_every_excluded_cell() {
        for pick in 0..GRID_CELLS {
            let cell = Fixed(pick).random_cell(&[7, 42]);
            assert!(cell < GRID_CELLS);
            assert_ne!(cell, 7);
            assert_ne!(cell, 42);
        }
        assert_eq!(Fixed(41).random_cell(&[7, 42]), 43);
        assert_eq!(Fixed(97).random_cell(&[7, 42]), 99);
        // Repeated or off-grid exclusions do not shrink the range further.
        assert_eq!(Fixed(98).random_cell(&[7, 7, 300]), 99);
    }

    #[test]
    fn random_cell_without_exclusion_covers_whole_grid() {
        assert_eq!(Fixed(0).random_cell(&[]), 0);
        assert_eq!(Fixed(99).random_cell(&[]), 99);
        assert_eq!(Fixed(100).random_cell(&[]), 0);
    }

    #[test]
    fn adjacent_cell_is_a_neighbour_and_not_excluded() {
        for origin in 0..GRID_CELLS {
            for pick in 0..4 {
                for skip in Neighbors::of(origin).iter() {
                    let cell = Fixed(pick).random_adjacent_cell(origin, Some(skip));
                    assert!(grid::is_adjacent(origin, cell), "{} -> {}", origin, cell);
                    assert_ne!(cell, skip);
                }
            }
        }
    }

    #[test]
    fn prng_source_stays_in_range() {
        use soroban_sdk::testutils::Address as _;

        let env = Env::default();
        let token = soroban_sdk::Address::generate(&env);
        let contract_id = env.register(crate::TreasureHunt, (&token,));
        env.as_contract(&contract_id, || {
            let mut rng = PrngSource::new(&env);
            for _ in 0..200 {
                assert!(rng.below(100) < 100);
                assert_eq!(rng.below(1), 0);
            }
            assert_eq!(rng.below(0), 0);
        });
    }
}
