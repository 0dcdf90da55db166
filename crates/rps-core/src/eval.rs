use crate::belief::BeliefState;
use crate::random::RandomSource;

/// Scores a belief state from the point of view of its own player; higher is
/// better. The random source settles fights against unrevealed pieces.
pub trait Evaluator {
    fn evaluate(&self, state: &BeliefState, rng: &mut dyn RandomSource) -> f32;
}
