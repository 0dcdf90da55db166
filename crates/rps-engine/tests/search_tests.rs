use rps_core::{
    BeliefState, Cell, FixedRandom, JokerChange, Move, PieceType, PlayerId, Searcher,
};
use rps_engine::OnePlySearcher;

fn with_pieces(pieces: &[(Cell, usize)]) -> BeliefState {
    let mut state = BeliefState::new(PlayerId::One);
    for &(cell, pos) in pieces {
        state.place(cell, pos).unwrap();
    }
    state
}

#[test]
fn captures_known_losing_enemy() {
    let state = with_pieces(&[
        (Cell::known(PlayerId::One, PieceType::Rock), 5),
        (Cell::known(PlayerId::Two, PieceType::Scissors), 15),
    ]);
    let result = OnePlySearcher::default().best_move(&state, &mut FixedRandom::new(0.0));

    assert_eq!(result.best, Some(Move::new(5, 15)));
    assert_eq!(result.score, 34.0);
    assert_eq!(result.baseline, 18.0);
    assert_eq!(result.candidates, 3);
}

#[test]
fn ties_keep_the_first_candidate() {
    let state = with_pieces(&[(Cell::known(PlayerId::One, PieceType::Rock), 44)]);
    let result = OnePlySearcher::default().best_move(&state, &mut FixedRandom::new(0.0));
    assert_eq!(result.best, Some(Move::new(44, 34)));
    assert_eq!(result.candidates, 4);
}

#[test]
fn never_undoes_the_last_move() {
    let mut state = with_pieces(&[(Cell::known(PlayerId::One, PieceType::Rock), 44)]);
    state.record_move(Move::new(34, 44));
    let result = OnePlySearcher::default().best_move(&state, &mut FixedRandom::new(0.0));

    assert_eq!(result.best, Some(Move::new(44, 43)));
    assert_eq!(result.candidates, 3);
}

#[test]
fn never_moves_onto_own_pieces() {
    let state = with_pieces(&[
        (Cell::known(PlayerId::One, PieceType::Rock), 0),
        (Cell::known(PlayerId::One, PieceType::Flag), 1),
        (Cell::known(PlayerId::One, PieceType::Bomb), 10),
    ]);
    let result = OnePlySearcher::default().best_move(&state, &mut FixedRandom::new(0.0));
    assert_eq!(result.best, None);
    assert_eq!(result.candidates, 0);
}

#[test]
fn skips_attacks_predicted_to_fail() {
    let state = with_pieces(&[
        (Cell::known(PlayerId::One, PieceType::Rock), 0),
        (Cell::known(PlayerId::One, PieceType::Flag), 10),
        (Cell::unknown(PlayerId::Two), 1),
    ]);
    let searcher = OnePlySearcher::default();
    let result = searcher.best_move(&state, &mut FixedRandom::new(0.1));
    assert_eq!(result.best, None);

    let result = searcher.best_move(&state, &mut FixedRandom::new(0.9));
    assert_eq!(result.best, Some(Move::new(0, 1)));
}

#[test]
fn reveals_the_counter_to_an_adjacent_enemy() {
    let state = with_pieces(&[
        (Cell::joker(PlayerId::One, PieceType::Scissors), 0),
        (Cell::known(PlayerId::Two, PieceType::Rock), 1),
    ]);
    let result = OnePlySearcher::default().best_reveal(&state, &mut FixedRandom::new(0.0));

    assert_eq!(result.best, Some(JokerChange::new(0, PieceType::Paper)));
    assert_eq!(result.baseline, 11.0);
    assert_eq!(result.score, 18.0);
    assert_eq!(result.candidates, 3);
}

#[test]
fn keeps_disguise_when_nothing_improves() {
    let state = with_pieces(&[
        (Cell::joker(PlayerId::One, PieceType::Rock), 0),
        (Cell::known(PlayerId::Two, PieceType::Scissors), 1),
    ]);
    let result = OnePlySearcher::default().best_reveal(&state, &mut FixedRandom::new(0.0));
    assert_eq!(result.best, None);
    assert_eq!(result.baseline, 18.0);
}

#[test]
fn no_jokers_no_reveal() {
    let state = with_pieces(&[(Cell::known(PlayerId::One, PieceType::Rock), 0)]);
    let result = OnePlySearcher::default().best_reveal(&state, &mut FixedRandom::new(0.0));
    assert_eq!(result.best, None);
    assert_eq!(result.candidates, 0);
}

#[test]
fn lone_joker_keeps_its_disguise() {
    let state = with_pieces(&[
        (Cell::joker(PlayerId::One, PieceType::Rock), 0),
        (Cell::known(PlayerId::Two, PieceType::Paper), 99),
    ]);
    let result = OnePlySearcher::default().best_reveal(&state, &mut FixedRandom::new(0.0));
    assert_eq!(result.best, None);
    assert_eq!(result.score, result.baseline);
    assert_eq!(result.candidates, 3);
}
