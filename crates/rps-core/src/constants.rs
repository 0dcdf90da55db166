pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const BOARD_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT;

pub const FLAG_LIMIT: u8 = 1;
pub const BOMB_LIMIT: u8 = 2;
pub const JOKER_LIMIT: u8 = 2;
pub const ROCK_LIMIT: u8 = 2;
pub const PAPER_LIMIT: u8 = 5;
pub const SCISSORS_LIMIT: u8 = 1;

/// Draw at or above which an attack involving an unknown piece succeeds.
pub const UNKNOWN_WIN_THRESHOLD: f64 = 0.5;

/// Multiplied by the player number and added to the base seed so the two
/// players never share a layout.
pub const SEED_STRIDE: u64 = 7_919;

/// Orthogonal steps ordered so that neighbor indices come out ascending.
pub const STEPS: [(i32, i32); 4] = [(0, -1), (-1, 0), (1, 0), (0, 1)];

