use rps_core::{
    coords_of, distance, format_square, index_of, is_valid, is_valid_index_step, is_valid_step,
    neighbors, BOARD_CELLS,
};

#[test]
fn index_and_coords_agree_over_the_board() {
    for index in 0..BOARD_CELLS {
        let (x, y) = coords_of(index).unwrap();
        assert_eq!(index_of(x, y), Some(index));
    }
    assert_eq!(index_of(3, 4), Some(43));
    assert_eq!(coords_of(43), Some((3, 4)));
}

#[test]
fn off_board_inputs_are_rejected() {
    assert!(!is_valid(-1, 0));
    assert!(!is_valid(0, 10));
    assert!(!is_valid(10, 9));
    assert_eq!(index_of(10, 0), None);
    assert_eq!(coords_of(BOARD_CELLS), None);
}

#[test]
fn steps_are_single_orthogonal_moves() {
    assert!(is_valid_step(4, 4, 4, 5));
    assert!(is_valid_step(4, 4, 3, 4));
    assert!(!is_valid_step(4, 4, 5, 5));
    assert!(!is_valid_step(4, 4, 4, 4));
    assert!(!is_valid_step(0, 0, -1, 0));
}

#[test]
fn row_wrap_is_not_a_step() {
    // 9 is the last cell of row 0 and 10 the first of row 1
    assert!(!is_valid_index_step(9, 10));
    assert!(is_valid_index_step(9, 19));
    assert!(!is_valid_index_step(99, 100));
}

#[test]
fn neighbors_are_ascending_and_clipped() {
    assert_eq!(neighbors(55).as_slice(), &[45, 54, 56, 65]);
    assert_eq!(neighbors(0).as_slice(), &[1, 10]);
    assert_eq!(neighbors(99).as_slice(), &[89, 98]);
    assert_eq!(neighbors(9).as_slice(), &[8, 19]);
    assert!(neighbors(BOARD_CELLS).is_empty());
}

#[test]
fn distance_is_manhattan() {
    assert_eq!(distance(0, 99), 18);
    assert_eq!(distance(43, 43), 0);
    assert_eq!(distance(9, 10), 10);
    assert_eq!(distance(12, 34), distance(34, 12));
}

#[test]
fn square_format_is_x_then_y() {
    assert_eq!(format_square(43), "(3,4)");
}
