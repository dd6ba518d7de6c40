//! Two-unit generation scheduler.
//!
//! Unit A is the calling thread and computes rows `[1, height / 2)`.
//! Unit B is the single thread of a private rayon pool and computes rows
//! `[height / 2, height - 1)`. Each generation exchanges exactly one token
//! in each direction: spawning B's band is the start signal, and leaving
//! the scope is the completion signal. The destination board and the dirty
//! flags are split with `split_at_mut`, so the two bands can never alias.

use log::{debug, trace};

use super::board::BoardPair;
use super::kernel::advance_band;
use super::rules::RuleTable;

pub struct DualUnit {
    pool: rayon::ThreadPool,
    height: usize,
    split_row: usize,
}

impl DualUnit {
    pub fn new(height: usize) -> Self {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(1)
            .thread_name(|_| "duolife-unit-b".to_string())
            .build()
            .expect("failed to build DuoLife worker unit");
        debug!("worker unit started for {height} rows, split at {}", height / 2);
        Self {
            pool,
            height,
            split_row: height / 2,
        }
    }

    /// First row owned by unit B.
    #[inline]
    pub fn split_row(&self) -> usize {
        self.split_row
    }

    /// Compute one generation into the next board of `boards`.
    ///
    /// Returns once both bands are complete. The caller swaps afterwards.
    pub fn advance(&self, rules: &RuleTable, boards: &mut BoardPair, dirty: &mut [bool]) {
        let (current, next) = boards.split();
        let height = self.height;
        let split = self.split_row;
        assert_eq!(current.height(), height, "board height changed under scheduler");
        assert_eq!(dirty.len(), height, "one dirty flag per row");

        let width_in_words = current.width_in_words();
        let interior = &mut next.words_mut()[width_in_words..(height - 1) * width_in_words];
        let (band_a, band_b) = interior.split_at_mut((split - 1) * width_in_words);
        let (dirty_a, dirty_b) = dirty[1..height - 1].split_at_mut(split - 1);

        self.pool.in_place_scope(|scope| {
            trace!("unit A signals unit B");
            scope.spawn(move |_| {
                advance_band(rules, current, split, band_b, dirty_b);
                trace!("unit B done");
            });
            advance_band(rules, current, 1, band_a, dirty_a);
            trace!("unit A done, waiting on unit B");
        });
    }
}

#[cfg(test)]
mod tests {
    use super::DualUnit;
    use crate::duolife::board::BoardPair;
    use crate::duolife::kernel::advance_interior;
    use crate::duolife::rules::RuleTable;

    use rand::RngCore;
    use rand::SeedableRng;

    fn random_pair(width: usize, height: usize, seed: u64) -> BoardPair {
        let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
        let mut pair = BoardPair::new(width, height);
        for word in pair.current_mut().words_mut() {
            *word = rng.next_u32() & rng.next_u32();
        }
        pair
    }

    #[test]
    fn split_row_is_half_height() {
        assert_eq!(DualUnit::new(480).split_row(), 240);
        assert_eq!(DualUnit::new(3).split_row(), 1);
    }

    #[test]
    fn split_matches_single_pass() {
        let rules = RuleTable::new();
        for (width, height, seed) in [(64, 3, 1u64), (32, 4, 2), (96, 17, 3), (160, 64, 4)] {
            let unit = DualUnit::new(height);
            let mut split = random_pair(width, height, seed);
            let mut single = random_pair(width, height, seed);
            let mut split_dirty = vec![false; height];
            let mut single_dirty = vec![false; height];

            for _ in 0..6 {
                unit.advance(&rules, &mut split, &mut split_dirty);
                {
                    let (current, next) = single.split();
                    advance_interior(&rules, current, next, &mut single_dirty);
                }
                split.swap();
                single.swap();
                assert_eq!(split.current(), single.current());
                assert_eq!(split_dirty, single_dirty);
            }
        }
    }
}
