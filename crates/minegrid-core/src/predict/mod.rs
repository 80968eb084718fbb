//! The predictor: seed validation and grid cell selection.

mod engine;
mod seed;
mod state;

pub use engine::{
    pick_count, predict, MineCount, MineCountError, RandomSource, SequenceRandom, ThreadRandom,
};
pub use seed::{SeedError, ServerSeed};
pub use state::PredictorState;

/// The board is square, 5 cells per side.
pub const GRID_SIZE: usize = 5;

/// Total number of cells on the board.
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE;
