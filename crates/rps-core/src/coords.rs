use arrayvec::ArrayVec;

use crate::constants::{BOARD_CELLS, BOARD_HEIGHT, BOARD_WIDTH, STEPS};

pub const fn is_valid(x: i32, y: i32) -> bool {
    x >= 0 && y >= 0 && (x as usize) < BOARD_WIDTH && (y as usize) < BOARD_HEIGHT
}

/// Both ends on the board and exactly one orthogonal step apart.
pub const fn is_valid_step(x: i32, y: i32, nx: i32, ny: i32) -> bool {
    is_valid(x, y) && is_valid(nx, ny) && (nx - x).abs() + (ny - y).abs() == 1
}

pub const fn index_of(x: i32, y: i32) -> Option<usize> {
    if is_valid(x, y) {
        Some(y as usize * BOARD_WIDTH + x as usize)
    } else {
        None
    }
}

pub const fn coords_of(index: usize) -> Option<(i32, i32)> {
    if index < BOARD_CELLS {
        Some(((index % BOARD_WIDTH) as i32, (index / BOARD_WIDTH) as i32))
    } else {
        None
    }
}

pub const fn x_of(index: usize) -> i32 {
    (index % BOARD_WIDTH) as i32
}

pub const fn y_of(index: usize) -> i32 {
    (index / BOARD_WIDTH) as i32
}

pub const fn is_valid_index_step(from: usize, to: usize) -> bool {
    from < BOARD_CELLS
        && to < BOARD_CELLS
        && is_valid_step(x_of(from), y_of(from), x_of(to), y_of(to))
}

pub const fn distance(a: usize, b: usize) -> u32 {
    (x_of(a) - x_of(b)).unsigned_abs() + (y_of(a) - y_of(b)).unsigned_abs()
}

/// On-board orthogonal neighbors in ascending index order.
pub fn neighbors(index: usize) -> ArrayVec<usize, 4> {
    let mut out = ArrayVec::new();
    let Some((x, y)) = coords_of(index) else {
        return out;
    };
    for (dx, dy) in STEPS {
        if let Some(next) = index_of(x + dx, y + dy) {
            out.push(next);
        }
    }
    out
}

pub fn format_square(index: usize) -> String {
    format!("({},{})", x_of(index), y_of(index))
}
