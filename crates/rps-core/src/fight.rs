use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_WIN_THRESHOLD;
use crate::random::RandomSource;
use crate::types::PieceType;

/// Predicts fights from the belief state's point of view. `None` stands for
/// a piece whose type has not been revealed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FightOracle {
    pub unknown_win_threshold: f64,
}

impl Default for FightOracle {
    fn default() -> Self {
        Self::new(UNKNOWN_WIN_THRESHOLD)
    }
}

impl FightOracle {
    pub const fn new(unknown_win_threshold: f64) -> Self {
        Self {
            unknown_win_threshold,
        }
    }

    /// Whether the attacker is expected to take the defender's cell.
    ///
    /// Rule-decided losses are checked before any draw is taken, so the
    /// random source is only consumed when exactly one side is unknown. Two
    /// unknown pieces count as equal types.
    pub fn resolve(
        &self,
        attacker: Option<PieceType>,
        defender: Option<PieceType>,
        rng: &mut dyn RandomSource,
    ) -> bool {
        if defender_holds(attacker, defender) {
            return false;
        }
        if attacker.is_none() || defender.is_none() {
            return rng.uniform() >= self.unknown_win_threshold;
        }
        true
    }
}

fn defender_holds(attacker: Option<PieceType>, defender: Option<PieceType>) -> bool {
    match (attacker, defender) {
        (Some(PieceType::Flag), _) => true,
        (None, None) => true,
        (Some(a), Some(d)) if a == d => true,
        (Some(a), Some(d)) if d.beats(a) => true,
        (a, Some(PieceType::Bomb)) => a != Some(PieceType::Bomb),
        _ => false,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    AttackerWins,
    DefenderWins,
    BothLose,
}

/// True fight result between two revealed types, as a referee applies it.
pub const fn outcome(attacker: PieceType, defender: PieceType) -> Outcome {
    if attacker as u8 == defender as u8 {
        return Outcome::BothLose;
    }
    match (attacker, defender) {
        (_, PieceType::Bomb) => Outcome::DefenderWins,
        (PieceType::Flag, _) => Outcome::DefenderWins,
        (_, PieceType::Flag) => Outcome::AttackerWins,
        (PieceType::Bomb, _) => Outcome::AttackerWins,
        _ if defender.beats(attacker) => Outcome::DefenderWins,
        _ => Outcome::AttackerWins,
    }
}
