//! Predictor view-model state.

use super::engine::{predict, MineCount, RandomSource};
use super::seed::{SeedError, ServerSeed};
use std::collections::HashSet;

/// State behind the predictor screen: the bets-made counter and the
/// currently highlighted cells.
///
/// Both are session-scoped; a fresh process starts from zero.
#[derive(Debug, Default)]
pub struct PredictorState {
    bets_made: u64,
    selected: HashSet<u8>,
}

impl PredictorState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Predictions made so far. Increments by exactly one per accepted
    /// submission, never decrements.
    pub fn bets_made(&self) -> u64 {
        self.bets_made
    }

    /// Cells highlighted by the most recent prediction.
    pub fn selected(&self) -> &HashSet<u8> {
        &self.selected
    }

    /// Run one prediction action.
    ///
    /// The seed is format-checked and otherwise unused; the draw comes
    /// entirely from `rng`. A rejected seed leaves all state untouched.
    /// On success the previous selection is replaced wholesale.
    pub fn submit(
        &mut self,
        seed_input: &str,
        mines: MineCount,
        rng: &mut dyn RandomSource,
    ) -> Result<&HashSet<u8>, SeedError> {
        let _seed: ServerSeed = seed_input.parse()?;

        self.selected = predict(mines, rng);
        self.bets_made += 1;
        Ok(&self.selected)
    }
}
