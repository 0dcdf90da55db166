use rps_core::{outcome, FightOracle, FixedRandom, Outcome, PieceType};

use PieceType::{Bomb, Flag, Paper, Rock, Scissors};

fn predicts(attacker: Option<PieceType>, defender: Option<PieceType>, draw: f64) -> bool {
    FightOracle::default().resolve(attacker, defender, &mut FixedRandom::new(draw))
}

#[test]
fn known_pairs_ignore_the_draw() {
    for attacker in PieceType::ALL {
        for defender in PieceType::ALL {
            assert_eq!(
                predicts(Some(attacker), Some(defender), 0.0),
                predicts(Some(attacker), Some(defender), 0.99),
                "{attacker:?} vs {defender:?}"
            );
        }
    }
}

#[test]
fn known_pairs_follow_the_cycle() {
    assert!(predicts(Some(Rock), Some(Scissors), 0.0));
    assert!(predicts(Some(Paper), Some(Rock), 0.0));
    assert!(predicts(Some(Scissors), Some(Paper), 0.0));
    assert!(!predicts(Some(Scissors), Some(Rock), 0.99));
    assert!(!predicts(Some(Rock), Some(Paper), 0.99));
    assert!(!predicts(Some(Paper), Some(Scissors), 0.99));
}

#[test]
fn equal_types_are_not_a_win() {
    for kind in PieceType::ALL {
        assert!(!predicts(Some(kind), Some(kind), 0.99));
    }
}

#[test]
fn bombs_and_flags() {
    assert!(predicts(Some(Rock), Some(Flag), 0.0));
    assert!(predicts(Some(Bomb), Some(Paper), 0.0));
    assert!(!predicts(Some(Scissors), Some(Bomb), 0.99));
    assert!(!predicts(Some(Flag), Some(Scissors), 0.99));
}

#[test]
fn unknown_sides_use_the_threshold() {
    let oracle = FightOracle::new(0.3);
    assert!(oracle.resolve(None, Some(Rock), &mut FixedRandom::new(0.3)));
    assert!(!oracle.resolve(None, Some(Rock), &mut FixedRandom::new(0.29)));
    assert!(oracle.resolve(Some(Scissors), None, &mut FixedRandom::new(0.8)));
    assert!(!oracle.resolve(Some(Paper), None, &mut FixedRandom::new(0.1)));
}

#[test]
fn two_unknown_pieces_are_a_tie() {
    let oracle = FightOracle::new(0.0);
    assert!(!oracle.resolve(None, None, &mut FixedRandom::new(0.99)));
}

#[test]
fn referee_outcome_is_antisymmetric_for_mobile_types() {
    for attacker in [Rock, Paper, Scissors] {
        for defender in [Rock, Paper, Scissors] {
            let forward = outcome(attacker, defender);
            let backward = outcome(defender, attacker);
            match forward {
                Outcome::BothLose => assert_eq!(backward, Outcome::BothLose),
                Outcome::AttackerWins => assert_eq!(backward, Outcome::DefenderWins),
                Outcome::DefenderWins => assert_eq!(backward, Outcome::AttackerWins),
            }
        }
    }
}

#[test]
fn referee_flag_and_bomb_rules() {
    assert_eq!(outcome(Flag, Rock), Outcome::DefenderWins);
    assert_eq!(outcome(Rock, Flag), Outcome::AttackerWins);
    assert_eq!(outcome(Bomb, Bomb), Outcome::BothLose);
    assert_eq!(outcome(Scissors, Bomb), Outcome::DefenderWins);
    assert_eq!(outcome(Bomb, Flag), Outcome::AttackerWins);
}
