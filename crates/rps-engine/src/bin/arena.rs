use rps_core::PlayerId;
use rps_engine::{AutoPlayer, BoxedPlayer, EndReason, PlayerConfig, Referee, RefereeConfig};

fn score_rate(wins: u32, draws: u32, games: u32) -> f64 {
    if games == 0 {
        return 0.0;
    }
    (f64::from(wins) + 0.5 * f64::from(draws)) / f64::from(games)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    let num_games: u32 = args.get(1).and_then(|s| s.parse().ok()).unwrap_or(100);
    let max_moves: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(500);
    let base_seed: u64 = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);
    let config = match args.get(4) {
        Some(path) => match PlayerConfig::from_path(path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("Cannot load config '{path}': {err}");
                std::process::exit(2);
            }
        },
        None => PlayerConfig::default(),
    };

    eprintln!("Running {num_games} games (max {max_moves} moves) from seed {base_seed}...");

    let mut wins = [0u32; 2];
    let mut draws = 0u32;
    let mut total_turns = 0usize;
    let mut referee = Referee::new(RefereeConfig { max_moves });

    for game in 0..num_games {
        let seed = base_seed.wrapping_add(u64::from(game));
        let mut players: [BoxedPlayer; 2] = [
            Box::new(AutoPlayer::new(PlayerConfig {
                seed: Some(seed),
                ..config.clone()
            })),
            Box::new(AutoPlayer::new(PlayerConfig {
                seed: Some(seed),
                ..config.clone()
            })),
        ];

        let record = match referee.play(&mut players) {
            Ok(record) => record,
            Err(err) => {
                eprintln!("Game {}: aborted: {err}", game + 1);
                continue;
            }
        };
        total_turns += record.turns.len();

        let verdict = match record.winner {
            Some(winner) => {
                wins[winner.index()] = wins[winner.index()].saturating_add(1);
                format!("player {} wins", winner.number())
            }
            None => {
                draws = draws.saturating_add(1);
                "draw".to_string()
            }
        };
        let reason = match record.reason {
            EndReason::FlagsCaptured => "flags captured",
            EndReason::NoMovingPieces => "no moving pieces",
            EndReason::BothPassed => "both passed",
            EndReason::MoveLimit => "move limit",
        };
        eprintln!(
            "Game {}/{num_games}: {} turns, {verdict} ({reason})",
            game + 1,
            record.turns.len()
        );
    }

    let one = PlayerId::One.index();
    let two = PlayerId::Two.index();
    let avg_turns = if num_games == 0 {
        0.0
    } else {
        total_turns as f64 / f64::from(num_games)
    };
    eprintln!(
        "Player 1: {}W/{}L/{draws}D | score {:.3} | avg {avg_turns:.1} turns",
        wins[one],
        wins[two],
        score_rate(wins[one], draws, num_games)
    );
}
