//! Grid cell selection.
//!
//! Pure selection logic: a mine count picks a target size from a fixed
//! policy table, then unique cells are drawn by rejection sampling from an
//! injected random source.

use super::TOTAL_CELLS;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{HashSet, VecDeque};
use thiserror::Error;

/// Source of uniform randomness.
///
/// Injected so tests can script the exact draw sequence.
pub trait RandomSource {
    /// Next uniform integer in `[0, bound)`.
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Random source backed by the thread-local RNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        rand::thread_rng().gen_range(0..bound)
    }
}

/// Scripted random source for tests: yields the given values in order,
/// folded into range. An exhausted script keeps yielding 0.
#[derive(Clone, Debug)]
pub struct SequenceRandom {
    values: VecDeque<usize>,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Self {
        Self { values: values.into_iter().collect() }
    }
}

impl RandomSource for SequenceRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.values.pop_front().unwrap_or(0) % bound
    }
}

/// Rejected mine count.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("mine count must be between 1 and 8, got {0}")]
pub struct MineCountError(u8);

/// Number of mines the player expects on the board, 1 through 8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct MineCount(u8);

impl MineCount {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 8;

    /// Accepts counts in `[1, 8]`.
    pub fn new(count: u8) -> Option<Self> {
        (Self::MIN..=Self::MAX).contains(&count).then_some(Self(count))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MineCount {
    type Error = MineCountError;

    fn try_from(count: u8) -> Result<Self, Self::Error> {
        Self::new(count).ok_or(MineCountError(count))
    }
}

impl From<MineCount> for u8 {
    fn from(count: MineCount) -> Self {
        count.0
    }
}

/// How many cells to mark for the given mine count.
///
/// Counts 1 through 4 draw uniformly from a two-value band that shifts
/// down one step per extra mine; 5 and 6 share the {3, 4} band; 7 and 8
/// are pinned at exactly 3.
pub fn pick_count(mines: MineCount, rng: &mut dyn RandomSource) -> usize {
    match mines.get() {
        1 => 7 + rng.next_index(2),
        2 => 6 + rng.next_index(2),
        3 => 5 + rng.next_index(2),
        4 => 4 + rng.next_index(2),
        5 | 6 => 3 + rng.next_index(2),
        _ => 3,
    }
}

/// Select a fresh set of unique cell indices for the given mine count.
///
/// Rejection sampling: uniform draws over the 25 cells, duplicates
/// discarded, until the target size is reached. Indices carry no meaning
/// beyond addressing a cell.
pub fn predict(mines: MineCount, rng: &mut dyn RandomSource) -> HashSet<u8> {
    let target = pick_count(mines, rng);

    let mut cells = HashSet::with_capacity(target);
    while cells.len() < target {
        cells.insert(rng.next_index(TOTAL_CELLS) as u8);
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mines(count: u8) -> MineCount {
        MineCount::new(count).unwrap()
    }

    #[test]
    fn test_mine_count_bounds() {
        assert!(MineCount::new(0).is_none());
        assert!(MineCount::new(1).is_some());
        assert!(MineCount::new(8).is_some());
        assert!(MineCount::new(9).is_none());
    }

    #[test]
    fn test_mine_count_deserializes_with_validation() {
        let ok: MineCount = serde_json::from_str("3").unwrap();
        assert_eq!(ok.get(), 3);

        assert!(serde_json::from_str::<MineCount>("0").is_err());
        assert!(serde_json::from_str::<MineCount>("9").is_err());
    }

    #[test]
    fn test_pick_count_bands() {
        // 200 draws per count comfortably covers both band values.
        let bands: [(u8, [usize; 2]); 6] = [
            (1, [7, 8]),
            (2, [6, 7]),
            (3, [5, 6]),
            (4, [4, 5]),
            (5, [3, 4]),
            (6, [3, 4]),
        ];

        let mut rng = ThreadRandom;
        for (count, band) in bands {
            for _ in 0..200 {
                let picked = pick_count(mines(count), &mut rng);
                assert!(band.contains(&picked), "mines={} picked {}", count, picked);
            }
        }
    }

    #[test]
    fn test_pick_count_pinned_for_high_mines() {
        let mut rng = ThreadRandom;
        for count in [7, 8] {
            for _ in 0..200 {
                assert_eq!(pick_count(mines(count), &mut rng), 3);
            }
        }
    }

    #[test]
    fn test_pick_count_scripted_band_edges() {
        // First draw selects within the band: 0 picks the low value, 1 the high.
        let mut low = SequenceRandom::new([0]);
        assert_eq!(pick_count(mines(1), &mut low), 7);

        let mut high = SequenceRandom::new([1]);
        assert_eq!(pick_count(mines(1), &mut high), 8);
    }

    #[test]
    fn test_predict_cells_are_unique_and_in_range() {
        let mut rng = ThreadRandom;
        for count in 1..=8 {
            for _ in 0..100 {
                let cells = predict(mines(count), &mut rng);
                assert!(cells.iter().all(|&c| (c as usize) < TOTAL_CELLS));
                // HashSet already guarantees uniqueness; check the size policy.
                match count {
                    1 => assert!([7, 8].contains(&cells.len())),
                    2 => assert!([6, 7].contains(&cells.len())),
                    3 => assert!([5, 6].contains(&cells.len())),
                    4 => assert!([4, 5].contains(&cells.len())),
                    5 | 6 => assert!([3, 4].contains(&cells.len())),
                    _ => assert_eq!(cells.len(), 3),
                }
            }
        }
    }

    #[test]
    fn test_predict_discards_duplicate_draws() {
        // Band draw 1 -> target 4, then 9 is drawn three times but kept once.
        let mut rng = SequenceRandom::new([1, 9, 9, 9, 2, 5, 17]);
        let cells = predict(mines(5), &mut rng);

        let expected: HashSet<u8> = [9, 2, 5, 17].into_iter().collect();
        assert_eq!(cells, expected);
    }

    #[test]
    fn test_predict_exact_set_for_pinned_count() {
        let mut rng = SequenceRandom::new([24, 0, 12]);
        let cells = predict(mines(7), &mut rng);

        let expected: HashSet<u8> = [24, 0, 12].into_iter().collect();
        assert_eq!(cells, expected);
    }
}
