use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

use crate::constants::{BOARD_CELLS, BOARD_WIDTH};
use crate::types::{Cell, Move, PieceType, PlayerId};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell index {index} is outside the board")]
    OutOfBounds { index: usize },
    #[error("no move has been recorded yet")]
    EmptyHistory,
}

/// What one side is believed to hold. Flags and jokers are subsets of
/// `pieces`; a position is in at most one side's `pieces`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub id: PlayerId,
    pub flags: BTreeSet<usize>,
    pub jokers: BTreeSet<usize>,
    pub pieces: BTreeSet<usize>,
}

impl PlayerState {
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            flags: BTreeSet::new(),
            jokers: BTreeSet::new(),
            pieces: BTreeSet::new(),
        }
    }

    fn forget(&mut self, position: usize) {
        self.flags.remove(&position);
        self.jokers.remove(&position);
        self.pieces.remove(&position);
    }
}

/// A player's private model of the whole board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeliefState {
    cells: [Cell; BOARD_CELLS],
    me: PlayerState,
    other: PlayerState,
    history: Vec<Move>,
}

impl BeliefState {
    pub fn new(me: PlayerId) -> Self {
        Self {
            cells: [Cell::EMPTY; BOARD_CELLS],
            me: PlayerState::new(me),
            other: PlayerState::new(me.opponent()),
            history: Vec::new(),
        }
    }

    pub fn me(&self) -> &PlayerState {
        &self.me
    }

    pub fn other(&self) -> &PlayerState {
        &self.other
    }

    pub fn player(&self, id: PlayerId) -> &PlayerState {
        if id == self.me.id {
            &self.me
        } else {
            &self.other
        }
    }

    fn player_mut(&mut self, id: PlayerId) -> &mut PlayerState {
        if id == self.me.id {
            &mut self.me
        } else {
            &mut self.other
        }
    }

    pub fn cell(&self, position: usize) -> Option<&Cell> {
        self.cells.get(position)
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn owner(&self, position: usize) -> Option<PlayerId> {
        self.cell(position).and_then(|cell| cell.owner)
    }

    pub fn kind(&self, position: usize) -> Option<PieceType> {
        self.cell(position).and_then(|cell| cell.kind)
    }

    pub fn place(&mut self, cell: Cell, position: usize) -> Result<(), BoardError> {
        ensure_on_board(position)?;
        let Some(owner) = cell.owner else {
            return Ok(());
        };
        if self.cells[position].owner.is_some() {
            self.remove(position)?;
        }

        let side = self.player_mut(owner);
        match cell.kind {
            Some(PieceType::Flag) | None => {
                side.flags.insert(position);
            }
            Some(_) if cell.joker => {
                side.jokers.insert(position);
            }
            Some(_) => {}
        }
        side.pieces.insert(position);
        self.cells[position] = cell;
        Ok(())
    }

    pub fn remove(&mut self, position: usize) -> Result<(), BoardError> {
        ensure_on_board(position)?;
        let Some(owner) = self.cells[position].owner else {
            return Ok(());
        };
        self.player_mut(owner).forget(position);
        self.cells[position] = Cell::EMPTY;
        Ok(())
    }

    /// Drops the flag suspicion on a piece without touching anything else.
    pub fn clear_flag_belief(&mut self, position: usize) -> Result<(), BoardError> {
        ensure_on_board(position)?;
        if let Some(owner) = self.cells[position].owner {
            self.player_mut(owner).flags.remove(&position);
        }
        Ok(())
    }

    /// Empty cells stay empty.
    pub fn mark_joker(&mut self, position: usize) -> Result<(), BoardError> {
        ensure_on_board(position)?;
        if self.cells[position].owner.is_some() {
            self.cells[position].joker = true;
        }
        Ok(())
    }

    /// Overwrites the believed type of an occupied cell. Sets are untouched.
    pub fn set_kind(&mut self, position: usize, kind: Option<PieceType>) -> Result<(), BoardError> {
        ensure_on_board(position)?;
        if self.cells[position].owner.is_some() {
            self.cells[position].kind = kind;
        }
        Ok(())
    }

    /// Exchanges the contents of `a` and `b`. Both endpoints lose any flag
    /// suspicion afterwards, since whatever sits there has moved.
    pub fn relocate(&mut self, a: usize, b: usize) -> Result<(), BoardError> {
        ensure_on_board(a)?;
        ensure_on_board(b)?;
        let first = self.cells[a];
        let second = self.cells[b];

        self.remove(a)?;
        self.remove(b)?;
        self.place(first, b)?;
        self.place(second, a)?;

        self.clear_flag_belief(a)?;
        self.clear_flag_belief(b)
    }

    /// Moves the piece at `mv.from` onto `mv.to`, discarding whatever was
    /// there. This is the attacker-wins form of a move.
    pub fn execute(&mut self, mv: Move) -> Result<(), BoardError> {
        self.relocate(mv.from, mv.to)?;
        self.remove(mv.from)
    }

    pub fn record_move(&mut self, mv: Move) {
        self.history.push(mv);
    }

    pub fn last_move(&self) -> Result<Move, BoardError> {
        self.history.last().copied().ok_or(BoardError::EmptyHistory)
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Pieces of `player` believed to be of `kind`, derived from the board.
    pub fn count(&self, player: PlayerId, kind: PieceType) -> usize {
        self.player(player)
            .pieces
            .iter()
            .filter(|&&pos| self.cells[pos].kind == Some(kind))
            .count()
    }

    /// Pieces that may move: everything except known bombs and flags.
    pub fn moving_pieces(&self, player: PlayerId) -> usize {
        self.player(player)
            .pieces
            .iter()
            .filter(|&&pos| self.cells[pos].is_mobile())
            .count()
    }
}

impl fmt::Display for BeliefState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, line) in self.cells.chunks(BOARD_WIDTH).enumerate() {
            write!(f, "{row} ")?;
            for cell in line {
                let code = match cell.owner {
                    Some(owner) if owner == self.me.id => cell.code(),
                    Some(_) => cell.code().to_ascii_lowercase(),
                    None => '.',
                };
                write!(f, "{code}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub fn ensure_on_board(position: usize) -> Result<(), BoardError> {
    if position < BOARD_CELLS {
        Ok(())
    } else {
        Err(BoardError::OutOfBounds { index: position })
    }
}
