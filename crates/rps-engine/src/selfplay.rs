use rps_core::{
    is_valid_index_step, outcome, Cell, FightInfo, JokerChange, Move, Outcome, PieceType,
    Placement, PlayerAlgorithm, PlayerId, BOARD_CELLS,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::player::PlayerError;

pub type BoxedPlayer = Box<dyn PlayerAlgorithm<Error = PlayerError>>;

#[derive(Debug, Error)]
pub enum RefereeError {
    #[error("player {} failed: {source}", .player.number())]
    Player {
        player: PlayerId,
        #[source]
        source: PlayerError,
    },
    #[error("player {} placed an illegal piece at {position}", .player.number())]
    IllegalPlacement { player: PlayerId, position: usize },
    #[error("player {} attempted illegal move {mv:?}", .player.number())]
    IllegalMove { player: PlayerId, mv: Move },
    #[error("player {} attempted illegal joker change {change:?}", .player.number())]
    IllegalJokerChange {
        player: PlayerId,
        change: JokerChange,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EndReason {
    FlagsCaptured,
    NoMovingPieces,
    BothPassed,
    MoveLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub player: PlayerId,
    pub mv: Option<Move>,
    pub fight: Option<FightInfo>,
    pub joker_change: Option<JokerChange>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub placements: Vec<(PlayerId, Vec<Placement>)>,
    pub initial_fights: Vec<FightInfo>,
    pub turns: Vec<TurnRecord>,
    pub winner: Option<PlayerId>,
    pub reason: EndReason,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefereeConfig {
    pub max_moves: u32,
}

impl Default for RefereeConfig {
    fn default() -> Self {
        Self { max_moves: 500 }
    }
}

/// Minimal game driver holding the true board. Every cell it stores has a
/// revealed type; for jokers that is the current disguise.
#[derive(Debug, Clone)]
pub struct Referee {
    config: RefereeConfig,
    board: [Cell; BOARD_CELLS],
}

impl Referee {
    pub fn new(config: RefereeConfig) -> Self {
        Self {
            config,
            board: [Cell::EMPTY; BOARD_CELLS],
        }
    }

    pub fn board(&self) -> &[Cell] {
        &self.board
    }

    pub fn owners(&self) -> Vec<Option<PlayerId>> {
        self.board.iter().map(|cell| cell.owner).collect()
    }

    pub fn play(&mut self, players: &mut [BoxedPlayer; 2]) -> Result<GameRecord, RefereeError> {
        self.board = [Cell::EMPTY; BOARD_CELLS];

        let mut placements = Vec::with_capacity(2);
        let mut initial_fights = Vec::new();
        for id in PlayerId::ALL {
            let layout = players[id.index()]
                .initial_positions(id)
                .map_err(|source| RefereeError::Player { player: id, source })?;
            self.apply_layout(id, &layout, &mut initial_fights)?;
            placements.push((id, layout));
        }

        let owners = self.owners();
        for id in PlayerId::ALL {
            players[id.index()]
                .notify_initial_board(&owners, &initial_fights)
                .map_err(|source| RefereeError::Player { player: id, source })?;
        }

        let mut turns = Vec::new();
        let mut passes = 0u8;
        let mut mover = PlayerId::One;
        let (winner, reason) = loop {
            if let Some(end) = self.game_over(mover) {
                break end;
            }
            if turns.len() >= self.config.max_moves as usize {
                break (None, EndReason::MoveLimit);
            }

            let turn = self.play_turn(players, mover)?;
            passes = if turn.mv.is_none() { passes + 1 } else { 0 };
            turns.push(turn);
            if passes >= 2 {
                break (None, EndReason::BothPassed);
            }
            mover = mover.opponent();
        };

        log::info!(
            "game over after {} turns: {:?} ({:?})",
            turns.len(),
            winner.map(PlayerId::number),
            reason
        );
        Ok(GameRecord {
            placements,
            initial_fights,
            turns,
            winner,
            reason,
        })
    }

    fn apply_layout(
        &mut self,
        player: PlayerId,
        layout: &[Placement],
        fights: &mut Vec<FightInfo>,
    ) -> Result<(), RefereeError> {
        let mut seen = [false; BOARD_CELLS];
        for placement in layout {
            let position = placement.position;
            let legal_kind = !placement.joker
                || PieceType::JOKER_REPRESENTATIONS.contains(&placement.kind);
            if position >= BOARD_CELLS || seen[position] || !legal_kind {
                return Err(RefereeError::IllegalPlacement { player, position });
            }
            seen[position] = true;

            let incoming = placement.cell(player);
            match self.board[position].kind {
                None => self.board[position] = incoming,
                Some(resident) => {
                    let fight = self.fight(position, incoming, self.board[position]);
                    log::debug!("initial fight at {position}: {resident:?} vs {:?}", placement.kind);
                    fights.push(fight);
                }
            }
        }
        Ok(())
    }

    /// Resolves `attacker` against the occupant of `position`, updates the
    /// board and reports the outcome.
    fn fight(&mut self, position: usize, attacker: Cell, defender: Cell) -> FightInfo {
        let (Some(a_owner), Some(a_kind)) = (attacker.owner, attacker.kind) else {
            return self.unopposed(position, attacker);
        };
        let (Some(d_owner), Some(d_kind)) = (defender.owner, defender.kind) else {
            return self.unopposed(position, attacker);
        };

        let mut pieces = [a_kind; 2];
        pieces[a_owner.index()] = a_kind;
        pieces[d_owner.index()] = d_kind;

        let winner = match outcome(a_kind, d_kind) {
            Outcome::AttackerWins => {
                self.board[position] = attacker;
                Some(a_owner)
            }
            Outcome::DefenderWins => Some(d_owner),
            Outcome::BothLose => {
                self.board[position] = Cell::EMPTY;
                None
            }
        };
        FightInfo {
            position,
            winner,
            pieces,
        }
    }

    fn unopposed(&mut self, position: usize, cell: Cell) -> FightInfo {
        self.board[position] = cell;
        let kind = cell.kind.unwrap_or(PieceType::Flag);
        FightInfo {
            position,
            winner: cell.owner,
            pieces: [kind; 2],
        }
    }

    fn play_turn(
        &mut self,
        players: &mut [BoxedPlayer; 2],
        mover: PlayerId,
    ) -> Result<TurnRecord, RefereeError> {
        let other = mover.opponent();
        let wrap =
            |player: PlayerId| move |source: PlayerError| RefereeError::Player { player, source };

        let mv = players[mover.index()].get_move().map_err(wrap(mover))?;
        let mut record = TurnRecord {
            player: mover,
            mv,
            fight: None,
            joker_change: None,
        };
        let Some(mv) = mv else {
            return Ok(record);
        };
        if !self.is_legal_move(mover, mv) {
            return Err(RefereeError::IllegalMove { player: mover, mv });
        }

        players[other.index()]
            .notify_opponent_move(mv)
            .map_err(wrap(other))?;

        let attacker = self.board[mv.from];
        self.board[mv.from] = Cell::EMPTY;
        if self.board[mv.to].is_empty() {
            self.board[mv.to] = attacker;
        } else {
            let defender = self.board[mv.to];
            let fight = self.fight(mv.to, attacker, defender);
            log::debug!("fight at {}: winner {:?}", mv.to, fight.winner);
            for id in PlayerId::ALL {
                players[id.index()]
                    .notify_fight_result(&fight)
                    .map_err(wrap(id))?;
            }
            record.fight = Some(fight);
        }

        if let Some(change) = players[mover.index()]
            .get_joker_change()
            .map_err(wrap(mover))?
        {
            let cell = self.board.get(change.position).copied().unwrap_or_default();
            let legal = cell.owner == Some(mover)
                && cell.joker
                && PieceType::JOKER_REPRESENTATIONS.contains(&change.kind);
            if !legal {
                return Err(RefereeError::IllegalJokerChange {
                    player: mover,
                    change,
                });
            }
            self.board[change.position].kind = Some(change.kind);
            record.joker_change = Some(change);
        }

        Ok(record)
    }

    fn is_legal_move(&self, player: PlayerId, mv: Move) -> bool {
        if !is_valid_index_step(mv.from, mv.to) {
            return false;
        }
        let piece = self.board[mv.from];
        piece.owner == Some(player) && piece.is_mobile() && !self.board[mv.to].is_owned_by(player)
    }

    fn count(&self, player: PlayerId, filter: impl Fn(&Cell) -> bool) -> usize {
        self.board
            .iter()
            .filter(|cell| cell.is_owned_by(player) && filter(*cell))
            .count()
    }

    /// Flags are checked before mobility; the side to move loses if it has
    /// nothing that can move.
    fn game_over(&self, mover: PlayerId) -> Option<(Option<PlayerId>, EndReason)> {
        let flags = PlayerId::ALL.map(|id| self.count(id, |c| c.kind == Some(PieceType::Flag)));
        match (flags[0] == 0, flags[1] == 0) {
            (true, true) => return Some((None, EndReason::FlagsCaptured)),
            (true, false) => return Some((Some(PlayerId::Two), EndReason::FlagsCaptured)),
            (false, true) => return Some((Some(PlayerId::One), EndReason::FlagsCaptured)),
            (false, false) => {}
        }

        let movers = PlayerId::ALL.map(|id| self.count(id, Cell::is_mobile));
        match (movers[0] == 0, movers[1] == 0) {
            (true, true) => Some((None, EndReason::NoMovingPieces)),
            _ if movers[mover.index()] == 0 => {
                Some((Some(mover.opponent()), EndReason::NoMovingPieces))
            }
            _ => None,
        }
    }
}

impl Default for Referee {
    fn default() -> Self {
        Self::new(RefereeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_collision_is_a_fight() {
        let mut referee = Referee::default();
        let mut fights = Vec::new();
        let rock = [Placement {
            position: 12,
            kind: PieceType::Rock,
            joker: false,
        }];
        let paper = [Placement {
            position: 12,
            kind: PieceType::Paper,
            joker: false,
        }];
        referee.apply_layout(PlayerId::One, &rock, &mut fights).unwrap();
        referee.apply_layout(PlayerId::Two, &paper, &mut fights).unwrap();

        assert_eq!(fights.len(), 1);
        assert_eq!(fights[0].winner, Some(PlayerId::Two));
        assert_eq!(fights[0].piece(PlayerId::One), PieceType::Rock);
        assert_eq!(fights[0].piece(PlayerId::Two), PieceType::Paper);
        assert_eq!(referee.board()[12].owner, Some(PlayerId::Two));
    }

    #[test]
    fn duplicate_placement_is_rejected() {
        let mut referee = Referee::default();
        let twice = [
            Placement {
                position: 3,
                kind: PieceType::Rock,
                joker: false,
            },
            Placement {
                position: 3,
                kind: PieceType::Flag,
                joker: false,
            },
        ];
        let err = referee.apply_layout(PlayerId::One, &twice, &mut Vec::new());
        assert!(matches!(
            err,
            Err(RefereeError::IllegalPlacement { position: 3, .. })
        ));
    }

    #[test]
    fn missing_flag_ends_the_game() {
        let mut referee = Referee::default();
        referee.board[0] = Cell::known(PlayerId::One, PieceType::Rock);
        referee.board[1] = Cell::known(PlayerId::One, PieceType::Flag);
        referee.board[9] = Cell::known(PlayerId::Two, PieceType::Rock);
        assert_eq!(
            referee.game_over(PlayerId::One),
            Some((Some(PlayerId::One), EndReason::FlagsCaptured))
        );
    }

    #[test]
    fn immobile_side_to_move_loses() {
        let mut referee = Referee::default();
        referee.board[0] = Cell::known(PlayerId::One, PieceType::Bomb);
        referee.board[1] = Cell::known(PlayerId::One, PieceType::Flag);
        referee.board[8] = Cell::known(PlayerId::Two, PieceType::Flag);
        referee.board[9] = Cell::known(PlayerId::Two, PieceType::Rock);
        assert_eq!(
            referee.game_over(PlayerId::One),
            Some((Some(PlayerId::Two), EndReason::NoMovingPieces))
        );
        assert_eq!(referee.game_over(PlayerId::Two), None);
    }
}
