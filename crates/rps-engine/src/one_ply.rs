use arrayvec::ArrayVec;
use rps_core::{
    neighbors, BeliefState, Evaluator, FightOracle, JokerChange, Move, PieceType, RandomSource,
    SearchResult, Searcher,
};

use crate::heuristic::HeuristicEval;

/// Single-ply selector: every candidate is applied to a throwaway copy of the
/// belief state and scored; the best one wins, first found on ties.
pub struct OnePlySearcher {
    eval: Box<dyn Evaluator>,
    oracle: FightOracle,
}

impl std::fmt::Debug for OnePlySearcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnePlySearcher")
            .field("eval", &"<Evaluator>")
            .field("oracle", &self.oracle)
            .finish()
    }
}

impl Default for OnePlySearcher {
    fn default() -> Self {
        Self::with_eval(FightOracle::default(), Box::new(HeuristicEval::default()))
    }
}

impl OnePlySearcher {
    pub fn with_eval(oracle: FightOracle, eval: Box<dyn Evaluator>) -> Self {
        Self { eval, oracle }
    }

    /// Cells the piece at `from` may step onto: on the board, one orthogonal
    /// step away, not held by its own side, and either empty or expected to
    /// fall to the attack. Bombs, flags and foreign pieces yield nothing.
    pub fn destinations(
        &self,
        state: &BeliefState,
        from: usize,
        rng: &mut dyn RandomSource,
    ) -> ArrayVec<usize, 4> {
        let mut out = ArrayVec::new();
        let Some(piece) = state.cell(from).copied() else {
            return out;
        };
        if piece.owner != Some(state.me().id) || !piece.is_mobile() {
            return out;
        }

        for to in neighbors(from) {
            let Some(target) = state.cell(to) else {
                continue;
            };
            match target.owner {
                None => out.push(to),
                Some(owner) if owner == state.me().id => {}
                Some(_) => {
                    if self.oracle.resolve(piece.kind, target.kind, rng) {
                        out.push(to);
                    }
                }
            }
        }
        out
    }

    fn score_after_move(
        &self,
        state: &BeliefState,
        mv: Move,
        rng: &mut dyn RandomSource,
    ) -> Option<f32> {
        let mut scratch = state.clone();
        if let Err(err) = scratch.execute(mv) {
            log::warn!("skipping candidate {mv:?}: {err}");
            return None;
        }
        Some(self.eval.evaluate(&scratch, rng))
    }

    fn score_after_reveal(
        &self,
        state: &BeliefState,
        change: JokerChange,
        rng: &mut dyn RandomSource,
    ) -> Option<f32> {
        let mut scratch = state.clone();
        if let Err(err) = scratch.set_kind(change.position, Some(change.kind)) {
            log::warn!("skipping reveal {change:?}: {err}");
            return None;
        }
        Some(self.eval.evaluate(&scratch, rng))
    }
}

impl Searcher for OnePlySearcher {
    fn best_move(&self, state: &BeliefState, rng: &mut dyn RandomSource) -> SearchResult<Move> {
        let baseline = self.eval.evaluate(state, rng);
        let previous = state.last_move().ok();
        let mut result = SearchResult::none(baseline);

        for &from in &state.me().pieces {
            for to in self.destinations(state, from, rng) {
                let mv = Move::new(from, to);
                if previous == Some(mv.reversed()) {
                    continue;
                }
                let Some(score) = self.score_after_move(state, mv, rng) else {
                    continue;
                };
                result.candidates += 1;
                if result.best.is_none() || score > result.score {
                    result.best = Some(mv);
                    result.score = score;
                }
            }
        }

        result
    }

    /// The current disguises hold the baseline score; a relabel is only
    /// reported when it scores strictly higher.
    fn best_reveal(
        &self,
        state: &BeliefState,
        rng: &mut dyn RandomSource,
    ) -> SearchResult<JokerChange> {
        let baseline = self.eval.evaluate(state, rng);
        let mut result = SearchResult::none(baseline);

        for &position in &state.me().jokers {
            let current = state.kind(position);
            for kind in PieceType::JOKER_REPRESENTATIONS {
                if current == Some(kind) {
                    continue;
                }
                let change = JokerChange::new(position, kind);
                let Some(score) = self.score_after_reveal(state, change, rng) else {
                    continue;
                };
                result.candidates += 1;
                if score > result.score {
                    result.best = Some(change);
                    result.score = score;
                }
            }
        }

        result
    }
}
