pub mod belief;
pub mod constants;
pub mod coords;
pub mod eval;
pub mod fight;
pub mod game;
pub mod random;
pub mod search;
pub mod types;

pub use belief::{ensure_on_board, BeliefState, BoardError, PlayerState};
pub use constants::*;
pub use coords::{
    coords_of, distance, format_square, index_of, is_valid, is_valid_index_step, is_valid_step,
    neighbors,
};
pub use eval::Evaluator;
pub use fight::{outcome, FightOracle, Outcome};
pub use game::{BoardView, PlayerAlgorithm};
pub use random::{FixedRandom, RandomSource, SeededRandom};
pub use search::{SearchResult, Searcher};
pub use types::{Cell, FightInfo, JokerChange, Move, Placement, PieceType, PlayerId};
