use serde::{Deserialize, Serialize};

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PlayerId {
    One = 1,
    Two = 2,
}

impl PlayerId {
    pub const ALL: [Self; 2] = [Self::One, Self::Two];

    pub const fn opponent(self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }

    pub const fn number(self) -> u8 {
        self as u8
    }

    pub const fn from_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::One),
            2 => Some(Self::Two),
            _ => None,
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::One => 0,
            Self::Two => 1,
        }
    }
}

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PieceType {
    Rock = 0,
    Paper = 1,
    Scissors = 2,
    Bomb = 3,
    Flag = 4,
}

impl PieceType {
    pub const ALL: [Self; 5] = [
        Self::Rock,
        Self::Paper,
        Self::Scissors,
        Self::Bomb,
        Self::Flag,
    ];

    /// Types a joker may display. Flag is never one of them.
    pub const JOKER_REPRESENTATIONS: [Self; 4] =
        [Self::Rock, Self::Paper, Self::Scissors, Self::Bomb];

    pub const fn code(self) -> char {
        match self {
            Self::Rock => 'R',
            Self::Paper => 'P',
            Self::Scissors => 'S',
            Self::Bomb => 'B',
            Self::Flag => 'F',
        }
    }

    pub const fn from_code(code: char) -> Option<Self> {
        match code {
            'R' => Some(Self::Rock),
            'P' => Some(Self::Paper),
            'S' => Some(Self::Scissors),
            'B' => Some(Self::Bomb),
            'F' => Some(Self::Flag),
            _ => None,
        }
    }

    /// Bombs and flags never leave their cell.
    pub const fn is_mobile(self) -> bool {
        !matches!(self, Self::Bomb | Self::Flag)
    }

    /// Plain rock > scissors > paper > rock. Bomb and flag beat nothing here.
    pub const fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors)
                | (Self::Scissors, Self::Paper)
                | (Self::Paper, Self::Rock)
        )
    }
}

/// Knowledge about one board cell. An empty cell has no owner, no type and
/// no joker mark; `kind == None` on an owned cell means the type is unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub owner: Option<PlayerId>,
    pub kind: Option<PieceType>,
    pub joker: bool,
}

impl Cell {
    pub const EMPTY: Self = Self {
        owner: None,
        kind: None,
        joker: false,
    };

    pub const fn known(owner: PlayerId, kind: PieceType) -> Self {
        Self {
            owner: Some(owner),
            kind: Some(kind),
            joker: false,
        }
    }

    pub const fn joker(owner: PlayerId, kind: PieceType) -> Self {
        Self {
            owner: Some(owner),
            kind: Some(kind),
            joker: true,
        }
    }

    pub const fn unknown(owner: PlayerId) -> Self {
        Self {
            owner: Some(owner),
            kind: None,
            joker: false,
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.owner.is_none()
    }

    pub fn is_owned_by(&self, player: PlayerId) -> bool {
        self.owner == Some(player)
    }

    /// Unknown pieces count as mobile until proven otherwise.
    pub fn is_mobile(&self) -> bool {
        self.owner.is_some() && self.kind.map_or(true, PieceType::is_mobile)
    }

    pub fn code(&self) -> char {
        match (self.owner, self.kind) {
            (None, _) => '.',
            (Some(_), None) => '?',
            (Some(_), Some(_)) if self.joker => 'J',
            (Some(_), Some(kind)) => kind.code(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: usize,
    pub to: usize,
}

impl Move {
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct JokerChange {
    pub position: usize,
    pub kind: PieceType,
}

impl JokerChange {
    pub const fn new(position: usize, kind: PieceType) -> Self {
        Self { position, kind }
    }
}

/// One piece of an initial layout. `kind` is a joker's starting disguise
/// when `joker` is set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    pub position: usize,
    pub kind: PieceType,
    pub joker: bool,
}

impl Placement {
    pub const fn cell(&self, owner: PlayerId) -> Cell {
        Cell {
            owner: Some(owner),
            kind: Some(self.kind),
            joker: self.joker,
        }
    }
}

/// Outcome of a fight as reported by the game driver. `pieces` holds the
/// type each player showed, indexed by `PlayerId::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FightInfo {
    pub position: usize,
    pub winner: Option<PlayerId>,
    pub pieces: [PieceType; 2],
}

impl FightInfo {
    pub const fn piece(&self, player: PlayerId) -> PieceType {
        self.pieces[player.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_code_round_trip() {
        for kind in PieceType::ALL {
            assert_eq!(PieceType::from_code(kind.code()), Some(kind));
        }
        assert_eq!(PieceType::from_code('J'), None);
    }

    #[test]
    fn player_number_conversion() {
        assert_eq!(PlayerId::from_number(1), Some(PlayerId::One));
        assert_eq!(PlayerId::from_number(2), Some(PlayerId::Two));
        assert_eq!(PlayerId::from_number(0), None);
        assert_eq!(PlayerId::One.opponent(), PlayerId::Two);
        assert_eq!(PlayerId::Two.number(), 2);
    }

    #[test]
    fn rock_paper_scissors_cycle() {
        assert!(PieceType::Rock.beats(PieceType::Scissors));
        assert!(PieceType::Scissors.beats(PieceType::Paper));
        assert!(PieceType::Paper.beats(PieceType::Rock));
        assert!(!PieceType::Rock.beats(PieceType::Paper));
        assert!(!PieceType::Rock.beats(PieceType::Rock));
        assert!(!PieceType::Bomb.beats(PieceType::Rock));
    }

    #[test]
    fn unknown_cell_is_mobile() {
        assert!(Cell::unknown(PlayerId::Two).is_mobile());
        assert!(!Cell::known(PlayerId::Two, PieceType::Bomb).is_mobile());
        assert!(!Cell::EMPTY.is_mobile());
        assert_eq!(Cell::joker(PlayerId::One, PieceType::Rock).code(), 'J');
        assert_eq!(Cell::unknown(PlayerId::One).code(), '?');
    }
}
