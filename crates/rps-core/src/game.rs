use crate::types::{FightInfo, JokerChange, Move, Placement, PlayerId};

/// Read-only view of the true board the game driver exposes once, after both
/// sides have placed their pieces.
pub trait BoardView {
    fn owner(&self, position: usize) -> Option<PlayerId>;
}

impl BoardView for Vec<Option<PlayerId>> {
    fn owner(&self, position: usize) -> Option<PlayerId> {
        self.get(position).copied().flatten()
    }
}

impl<const N: usize> BoardView for [Option<PlayerId>; N] {
    fn owner(&self, position: usize) -> Option<PlayerId> {
        self.get(position).copied().flatten()
    }
}

/// What a game driver calls on a player, one call at a time.
pub trait PlayerAlgorithm {
    type Error;

    fn initial_positions(&mut self, player: PlayerId) -> Result<Vec<Placement>, Self::Error>;

    fn notify_initial_board(
        &mut self,
        board: &dyn BoardView,
        fights: &[FightInfo],
    ) -> Result<(), Self::Error>;

    fn notify_opponent_move(&mut self, mv: Move) -> Result<(), Self::Error>;

    fn notify_fight_result(&mut self, fight: &FightInfo) -> Result<(), Self::Error>;

    fn get_move(&mut self) -> Result<Option<Move>, Self::Error>;

    fn get_joker_change(&mut self) -> Result<Option<JokerChange>, Self::Error>;
}
