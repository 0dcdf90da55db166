pub mod config;
pub mod heuristic;
pub mod one_ply;
pub mod placement;
pub mod player;
pub mod selfplay;

pub use config::{ConfigError, PlayerConfig};
pub use heuristic::{EvalWeights, HeuristicEval};
pub use one_ply::OnePlySearcher;
pub use placement::{generate as generate_placement, PieceLimits, PlacementError, PlacementRegion};
pub use player::{AutoPlayer, PlayerError};
pub use selfplay::{
    BoxedPlayer, EndReason, GameRecord, Referee, RefereeConfig, RefereeError, TurnRecord,
};
