use rps_core::{
    PieceType, Placement, RandomSource, BOARD_HEIGHT, BOARD_WIDTH, BOMB_LIMIT, FLAG_LIMIT,
    JOKER_LIMIT, PAPER_LIMIT, ROCK_LIMIT, SCISSORS_LIMIT,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("placement region has no cells")]
    EmptyRegion,
    #[error("{pieces} pieces do not fit into {cells} cells")]
    TooManyPieces { pieces: usize, cells: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieceLimits {
    pub flag: u8,
    pub bomb: u8,
    pub joker: u8,
    pub rock: u8,
    pub paper: u8,
    pub scissors: u8,
}

impl Default for PieceLimits {
    fn default() -> Self {
        Self {
            flag: FLAG_LIMIT,
            bomb: BOMB_LIMIT,
            joker: JOKER_LIMIT,
            rock: ROCK_LIMIT,
            paper: PAPER_LIMIT,
            scissors: SCISSORS_LIMIT,
        }
    }
}

impl PieceLimits {
    pub fn total(&self) -> usize {
        [
            self.flag,
            self.bomb,
            self.joker,
            self.rock,
            self.paper,
            self.scissors,
        ]
        .iter()
        .map(|&n| usize::from(n))
        .sum()
    }

    /// Batches in placement order; `None` marks the joker batch.
    fn batches(&self) -> [(Option<PieceType>, u8); 6] {
        [
            (Some(PieceType::Flag), self.flag),
            (Some(PieceType::Bomb), self.bomb),
            (None, self.joker),
            (Some(PieceType::Rock), self.rock),
            (Some(PieceType::Paper), self.paper),
            (Some(PieceType::Scissors), self.scissors),
        ]
    }
}

/// Rows `start_row..end_row` a player may place into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementRegion {
    pub start_row: u8,
    pub end_row: u8,
}

impl Default for PlacementRegion {
    fn default() -> Self {
        Self {
            start_row: 0,
            end_row: BOARD_HEIGHT as u8,
        }
    }
}

impl PlacementRegion {
    pub fn cells(&self) -> impl Iterator<Item = usize> {
        let start = usize::from(self.start_row).min(BOARD_HEIGHT);
        let end = usize::from(self.end_row).min(BOARD_HEIGHT);
        (start * BOARD_WIDTH)..(end.max(start) * BOARD_WIDTH)
    }

    pub fn len(&self) -> usize {
        self.cells().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scatters the configured pieces uniformly over the free cells of `region`.
/// Jokers start disguised as a uniformly drawn joker representation.
pub fn generate(
    limits: &PieceLimits,
    region: &PlacementRegion,
    rng: &mut dyn RandomSource,
) -> Result<Vec<Placement>, PlacementError> {
    let mut free: Vec<usize> = region.cells().collect();
    if free.is_empty() {
        return Err(PlacementError::EmptyRegion);
    }
    if limits.total() > free.len() {
        return Err(PlacementError::TooManyPieces {
            pieces: limits.total(),
            cells: free.len(),
        });
    }

    let mut placements = Vec::with_capacity(limits.total());
    for (kind, count) in limits.batches() {
        for _ in 0..count {
            let position = free.swap_remove(rng.below(free.len()));
            let placement = match kind {
                Some(kind) => Placement {
                    position,
                    kind,
                    joker: false,
                },
                None => Placement {
                    position,
                    kind: PieceType::JOKER_REPRESENTATIONS
                        [rng.below(PieceType::JOKER_REPRESENTATIONS.len())],
                    joker: true,
                },
            };
            placements.push(placement);
        }
    }
    Ok(placements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rps_core::FixedRandom;

    #[test]
    fn default_limits_total_thirteen() {
        assert_eq!(PieceLimits::default().total(), 13);
    }

    #[test]
    fn region_rows_map_to_cells() {
        let region = PlacementRegion {
            start_row: 6,
            end_row: 10,
        };
        assert_eq!(region.len(), 40);
        assert_eq!(region.cells().next(), Some(60));
        let inverted = PlacementRegion {
            start_row: 5,
            end_row: 2,
        };
        assert!(inverted.is_empty());
    }

    #[test]
    fn too_small_region_is_rejected() {
        let region = PlacementRegion {
            start_row: 0,
            end_row: 1,
        };
        let err = generate(&PieceLimits::default(), &region, &mut FixedRandom::new(0.0));
        assert_eq!(
            err,
            Err(PlacementError::TooManyPieces {
                pieces: 13,
                cells: 10
            })
        );
    }
}
