use rps_core::{
    distance, neighbors, BeliefState, Evaluator, FightOracle, PlayerId, RandomSource, FLAG_LIMIT,
};
use serde::{Deserialize, Serialize};

/// Named weights of the board heuristic. Positive terms are good for the
/// evaluated player.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per own piece an adjacent enemy could take, scaled by 1 / own movers.
    pub danger: f32,
    /// Per own piece that could take an adjacent enemy, scaled the same way.
    pub threat: f32,
    /// Per moving piece of advantage over the opponent.
    pub material: f32,
    /// Per opponent piece still suspected to be a flag.
    pub suspected_flags: f32,
    /// Times the mean k-nearest distance from suspected flags to own movers.
    pub flag_distance: f32,
    /// k for the nearest-piece average, as a share of own moving pieces.
    pub proximity_ratio: f32,
    pub all_pieces_captured: f32,
    pub all_flags_captured: f32,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            danger: -4.0,
            threat: 3.0,
            material: 9.0,
            suspected_flags: -2.5,
            flag_distance: -1.5,
            proximity_ratio: 0.66,
            all_pieces_captured: 10.0,
            all_flags_captured: 15.0,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct HeuristicEval {
    weights: EvalWeights,
    oracle: FightOracle,
    flag_limit: usize,
}

impl HeuristicEval {
    pub fn new(weights: EvalWeights, oracle: FightOracle, flag_limit: usize) -> Self {
        Self {
            weights,
            oracle,
            flag_limit,
        }
    }

    pub fn weights(&self) -> &EvalWeights {
        &self.weights
    }

    /// Some adjacent enemy that is not a flag candidate and may move would
    /// win attacking `position`, or would trade with it as the same known type.
    pub fn in_danger(
        &self,
        state: &BeliefState,
        position: usize,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(piece) = state.cell(position).copied() else {
            return false;
        };
        let Some(owner) = piece.owner else {
            return false;
        };
        let enemy = state.player(owner.opponent());

        neighbors(position).into_iter().any(|next| {
            let Some(cell) = state.cell(next) else {
                return false;
            };
            cell.owner == Some(enemy.id)
                && !enemy.flags.contains(&next)
                && cell.is_mobile()
                && ((cell.kind.is_some() && cell.kind == piece.kind)
                    || self.oracle.resolve(cell.kind, piece.kind, rng))
        })
    }

    /// `position` could take some adjacent enemy. Suspected flags always count.
    pub fn is_threatening(
        &self,
        state: &BeliefState,
        position: usize,
        rng: &mut dyn RandomSource,
    ) -> bool {
        let Some(piece) = state.cell(position).copied() else {
            return false;
        };
        let Some(owner) = piece.owner else {
            return false;
        };
        let enemy = state.player(owner.opponent());

        neighbors(position).into_iter().any(|next| {
            let Some(cell) = state.cell(next) else {
                return false;
            };
            if cell.owner != Some(enemy.id) {
                return false;
            }
            enemy.flags.contains(&next) || self.oracle.resolve(piece.kind, cell.kind, rng)
        })
    }

    /// Mean over (a bounded sample of) suspected enemy flags of the average
    /// distance to the `k` nearest own moving pieces. Zero when either side
    /// of the measurement is empty.
    pub fn flag_proximity(&self, state: &BeliefState) -> f32 {
        let movers: Vec<usize> = state
            .me()
            .pieces
            .iter()
            .copied()
            .filter(|&pos| state.cell(pos).is_some_and(|cell| cell.is_mobile()))
            .collect();
        let candidates = self.flag_sample(state);
        if movers.is_empty() || candidates.is_empty() {
            return 0.0;
        }

        let k = ((self.weights.proximity_ratio * movers.len() as f32) as usize).max(1);
        let total: f32 = candidates
            .iter()
            .map(|&flag| k_nearest_distance(&movers, flag, k))
            .sum();
        total / candidates.len() as f32
    }

    /// All suspected flags, or an evenly strided subset of them once there
    /// are more than `max((opponent pieces + 1) / 2, flag limit)`.
    fn flag_sample(&self, state: &BeliefState) -> Vec<usize> {
        let flags: Vec<usize> = state.other().flags.iter().copied().collect();
        let budget = ((state.other().pieces.len() + 1) / 2).max(self.flag_limit);
        if flags.len() <= budget || budget == 0 {
            return flags;
        }
        (0..budget).map(|i| flags[i * flags.len() / budget]).collect()
    }
}

impl Default for HeuristicEval {
    fn default() -> Self {
        Self::new(
            EvalWeights::default(),
            FightOracle::default(),
            usize::from(FLAG_LIMIT),
        )
    }
}

impl Evaluator for HeuristicEval {
    fn evaluate(&self, state: &BeliefState, rng: &mut dyn RandomSource) -> f32 {
        let w = &self.weights;
        let me: PlayerId = state.me().id;
        let other: PlayerId = state.other().id;
        let mine = state.moving_pieces(me);
        let theirs = state.moving_pieces(other);

        let mut score = 0.0f32;

        if mine > 0 {
            let share = 1.0 / mine as f32;
            for &pos in &state.me().pieces {
                if !state.cell(pos).is_some_and(|cell| cell.is_mobile()) {
                    continue;
                }
                if self.in_danger(state, pos, rng) {
                    score += w.danger * share;
                }
                if self.is_threatening(state, pos, rng) {
                    score += w.threat * share;
                }
            }
        }

        score += w.material * (mine as f32 - theirs as f32);
        score += w.suspected_flags * state.other().flags.len() as f32;
        score += w.flag_distance * self.flag_proximity(state);

        if state.other().pieces.is_empty() {
            score += w.all_pieces_captured;
        }
        if state.other().flags.is_empty() {
            score += w.all_flags_captured;
        }

        score
    }
}

fn k_nearest_distance(movers: &[usize], target: usize, k: usize) -> f32 {
    let mut dist: Vec<u32> = movers
        .iter()
        .filter(|&&pos| pos != target)
        .map(|&pos| distance(pos, target))
        .collect();
    if dist.is_empty() {
        return 0.0;
    }
    dist.sort_unstable();
    let taken = k.min(dist.len());
    dist[..taken].iter().sum::<u32>() as f32 / taken as f32
}
