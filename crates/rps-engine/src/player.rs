use rps_core::{
    BeliefState, BoardError, BoardView, Cell, FightInfo, FightOracle, JokerChange, Move,
    PieceType, Placement, PlayerAlgorithm, PlayerId, RandomSource, Searcher, SeededRandom,
    BOARD_CELLS, SEED_STRIDE,
};
use thiserror::Error;

use crate::config::PlayerConfig;
use crate::heuristic::HeuristicEval;
use crate::one_ply::OnePlySearcher;
use crate::placement::{self, PlacementError};

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Placement(#[from] PlacementError),
}

/// Automated player. Owns its belief state for one game and answers the
/// driver's calls one at a time.
pub struct AutoPlayer {
    config: PlayerConfig,
    state: BeliefState,
    searcher: OnePlySearcher,
    rng: Box<dyn RandomSource>,
    reseed: bool,
}

impl std::fmt::Debug for AutoPlayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AutoPlayer")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("searcher", &self.searcher)
            .field("rng", &"<RandomSource>")
            .field("reseed", &self.reseed)
            .finish()
    }
}

impl AutoPlayer {
    /// Randomness is seeded when the player learns its number, from
    /// `config.seed` offset by that number.
    pub fn new(config: PlayerConfig) -> Self {
        let mut player = Self::with_random(config, Box::new(SeededRandom::from_entropy()));
        player.reseed = true;
        player
    }

    /// Uses `rng` as is for placement and every fight prediction.
    pub fn with_random(config: PlayerConfig, rng: Box<dyn RandomSource>) -> Self {
        let oracle = FightOracle::new(config.unknown_win_threshold);
        let eval = HeuristicEval::new(config.weights, oracle, usize::from(config.limits.flag));
        Self {
            searcher: OnePlySearcher::with_eval(oracle, Box::new(eval)),
            state: BeliefState::new(PlayerId::One),
            config,
            rng,
            reseed: false,
        }
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn state(&self) -> &BeliefState {
        &self.state
    }

    pub fn id(&self) -> PlayerId {
        self.state.me().id
    }

    /// Starts from a given belief state instead of a generated layout.
    pub fn load_state(&mut self, state: BeliefState) {
        self.state = state;
    }

    fn seed_for(&self, player: PlayerId) -> u64 {
        let base = self.config.seed.unwrap_or_else(rand::random);
        base.wrapping_add(u64::from(player.number()).wrapping_mul(SEED_STRIDE))
    }

    /// Once no more opponent pieces than the flag limit remain suspected,
    /// those pieces are taken to be the flags.
    fn settle_flag_candidates(&mut self) -> Result<(), BoardError> {
        let suspects = &self.state.other().flags;
        if suspects.len() > usize::from(self.config.limits.flag) {
            return Ok(());
        }
        let other = self.state.other().id;
        if self.state.count(other, PieceType::Flag) == suspects.len() {
            return Ok(());
        }
        let suspects: Vec<usize> = suspects.iter().copied().collect();
        for &position in &suspects {
            self.state.set_kind(position, Some(PieceType::Flag))?;
        }
        log::debug!(
            "player {} settles opponent flags at {suspects:?}",
            self.id().number()
        );
        Ok(())
    }
}

impl PlayerAlgorithm for AutoPlayer {
    type Error = PlayerError;

    fn initial_positions(&mut self, player: PlayerId) -> Result<Vec<Placement>, PlayerError> {
        if self.reseed {
            self.rng = Box::new(SeededRandom::new(self.seed_for(player)));
        }
        self.state = BeliefState::new(player);

        let placements =
            placement::generate(&self.config.limits, &self.config.region, self.rng.as_mut())?;
        for placement in &placements {
            self.state.place(placement.cell(player), placement.position)?;
        }
        log::debug!("player {} placed {} pieces", player.number(), placements.len());
        Ok(placements)
    }

    fn notify_initial_board(
        &mut self,
        board: &dyn BoardView,
        fights: &[FightInfo],
    ) -> Result<(), PlayerError> {
        let me = self.id();
        for fight in fights {
            if fight.winner == Some(me) {
                continue;
            }
            self.state.remove(fight.position)?;
            if let Some(winner) = fight.winner {
                self.state
                    .place(Cell::known(winner, fight.piece(winner)), fight.position)?;
            }
        }

        let other = me.opponent();
        for position in 0..BOARD_CELLS {
            if board.owner(position) == Some(other) && self.state.owner(position).is_none() {
                self.state.place(Cell::unknown(other), position)?;
            }
        }
        log::debug!(
            "player {} sees {} opponent pieces after {} initial fights",
            me.number(),
            self.state.other().pieces.len(),
            fights.len()
        );
        Ok(())
    }

    fn notify_opponent_move(&mut self, mv: Move) -> Result<(), PlayerError> {
        rps_core::ensure_on_board(mv.from)?;
        rps_core::ensure_on_board(mv.to)?;
        let other = self.state.other().id;
        if self.state.owner(mv.from) != Some(other) {
            log::warn!("ignoring opponent move {mv:?}: no opponent piece at origin");
            return Ok(());
        }

        self.state.record_move(mv);
        self.state.mark_joker(mv.from)?;
        if self.state.kind(mv.from).is_some_and(|kind| !kind.is_mobile()) {
            self.state.set_kind(mv.from, None)?;
        }
        self.state.clear_flag_belief(mv.from)?;

        if self.state.owner(mv.to).is_none() {
            self.state.relocate(mv.from, mv.to)?;
        }
        Ok(())
    }

    fn notify_fight_result(&mut self, fight: &FightInfo) -> Result<(), PlayerError> {
        rps_core::ensure_on_board(fight.position)?;
        let last = self.state.last_move()?;
        if fight.position != last.to {
            log::warn!(
                "ignoring fight at {} while the pending move ends at {}",
                fight.position,
                last.to
            );
            return Ok(());
        }

        let Some(winner) = fight.winner else {
            self.state.remove(last.from)?;
            self.state.remove(last.to)?;
            return Ok(());
        };

        if self.state.owner(last.to) == Some(winner) {
            self.state.remove(last.from)?;
        } else {
            self.state.execute(last)?;
        }

        if winner != self.id() {
            self.state.set_kind(last.to, Some(fight.piece(winner)))?;
            self.state.clear_flag_belief(last.to)?;
        }
        Ok(())
    }

    fn get_move(&mut self) -> Result<Option<Move>, PlayerError> {
        let result = self.searcher.best_move(&self.state, self.rng.as_mut());
        let Some(mv) = result.best else {
            log::debug!("player {} has no move", self.id().number());
            return Ok(None);
        };
        log::debug!(
            "player {} moves {mv:?} ({:.2} -> {:.2}, {} candidates)",
            self.id().number(),
            result.baseline,
            result.score,
            result.candidates
        );

        self.state.record_move(mv);
        if self.state.owner(mv.to).is_none() {
            self.state.relocate(mv.from, mv.to)?;
        }
        self.settle_flag_candidates()?;
        Ok(Some(mv))
    }

    fn get_joker_change(&mut self) -> Result<Option<JokerChange>, PlayerError> {
        let result = self.searcher.best_reveal(&self.state, self.rng.as_mut());
        let Some(change) = result.best else {
            return Ok(None);
        };
        if self.state.kind(change.position) == Some(change.kind) {
            return Ok(None);
        }
        log::debug!(
            "player {} shows joker at {} as {:?}",
            self.id().number(),
            change.position,
            change.kind
        );
        self.state.set_kind(change.position, Some(change.kind))?;
        Ok(Some(change))
    }
}
