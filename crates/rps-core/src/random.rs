use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for fight guesses and piece placement. Swapped for a
/// fixed source in tests.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn uniform(&mut self) -> f64;

    /// Uniform index in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize;
}

#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandom {
    fn uniform(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Always returns the same draw; indices cycle through `indices`, or 0 when
/// none were given.
#[derive(Debug, Clone, Default)]
pub struct FixedRandom {
    draw: f64,
    indices: Vec<usize>,
    cursor: usize,
}

impl FixedRandom {
    pub fn new(draw: f64) -> Self {
        Self {
            draw,
            indices: Vec::new(),
            cursor: 0,
        }
    }

    pub fn with_indices(draw: f64, indices: Vec<usize>) -> Self {
        Self {
            draw,
            indices,
            cursor: 0,
        }
    }
}

impl RandomSource for FixedRandom {
    fn uniform(&mut self) -> f64 {
        self.draw
    }

    fn below(&mut self, bound: usize) -> usize {
        if self.indices.is_empty() {
            return 0;
        }
        let value = self.indices[self.cursor % self.indices.len()];
        self.cursor += 1;
        value % bound.max(1)
    }
}
