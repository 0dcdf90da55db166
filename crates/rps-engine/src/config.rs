use std::path::Path;

use rps_core::UNKNOWN_WIN_THRESHOLD;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::heuristic::EvalWeights;
use crate::placement::{PieceLimits, PlacementRegion};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Evaluator weights, piece limits, placement region and randomness. Every
/// field has a default, so a partial JSON document can override one weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub weights: EvalWeights,
    pub limits: PieceLimits,
    pub region: PlacementRegion,
    /// Draw at or above which a fight against an unknown piece is predicted won.
    pub unknown_win_threshold: f64,
    /// Base seed; each player offsets it by its number. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            weights: EvalWeights::default(),
            limits: PieceLimits::default(),
            region: PlacementRegion::default(),
            unknown_win_threshold: UNKNOWN_WIN_THRESHOLD,
            seed: None,
        }
    }
}

impl PlayerConfig {
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    pub fn from_json_str(input: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(input)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.unknown_win_threshold) {
            return Err(ConfigError::Invalid(format!(
                "unknown_win_threshold {} is outside [0, 1]",
                self.unknown_win_threshold
            )));
        }
        if self.limits.flag == 0 {
            return Err(ConfigError::Invalid("at least one flag is required".into()));
        }
        if self.region.is_empty() {
            return Err(ConfigError::Invalid("placement region is empty".into()));
        }
        if self.limits.total() > self.region.len() {
            return Err(ConfigError::Invalid(format!(
                "{} pieces do not fit into {} cells",
                self.limits.total(),
                self.region.len()
            )));
        }
        if !(0.0..=1.0).contains(&self.weights.proximity_ratio) {
            return Err(ConfigError::Invalid(format!(
                "proximity_ratio {} is outside [0, 1]",
                self.weights.proximity_ratio
            )));
        }
        Ok(())
    }
}
