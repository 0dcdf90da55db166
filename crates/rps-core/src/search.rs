use crate::belief::BeliefState;
use crate::random::RandomSource;
use crate::types::{JokerChange, Move};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult<T> {
    pub best: Option<T>,
    /// Score of the state after `best`, or `baseline` when there is none.
    pub score: f32,
    /// Score of the untouched state.
    pub baseline: f32,
    pub candidates: u32,
}

impl<T> SearchResult<T> {
    pub fn none(baseline: f32) -> Self {
        Self {
            best: None,
            score: baseline,
            baseline,
            candidates: 0,
        }
    }
}

pub trait Searcher {
    fn best_move(&self, state: &BeliefState, rng: &mut dyn RandomSource) -> SearchResult<Move>;

    fn best_reveal(
        &self,
        state: &BeliefState,
        rng: &mut dyn RandomSource,
    ) -> SearchResult<JokerChange>;
}
