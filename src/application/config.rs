use crate::domain::{Algorithm, DEFAULT_LIVE_PROBABILITY};
use thiserror::Error;

/// Configuration errors surfaced before a simulation is built.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("live probability must be within [0, 1], got {0}")]
    LiveProbability(f64),

    #[error("updates per second must be a positive number, got {0}")]
    UpdateRate(f32),
}

/// Settings for a simulation run
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    /// Edge length of the cube; zero or negative gives an empty lattice
    pub grid_size: i32,
    pub live_probability: f64,
    /// Fixed RNG seed for reproducible runs (OS entropy when None)
    pub seed: Option<u64>,
    pub updates_per_second: f32,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            grid_size: 10,
            live_probability: DEFAULT_LIVE_PROBABILITY,
            seed: None,
            updates_per_second: 4.0,
            algorithm: Algorithm::default(),
        }
    }
}

impl SimulationConfig {
    /// Reject settings the simulation can't honor.
    /// Grid size is deliberately left unchecked.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&self.live_probability) {
            return Err(ConfigError::LiveProbability(self.live_probability));
        }
        if !self.updates_per_second.is_finite() || self.updates_per_second <= 0.0 {
            return Err(ConfigError::UpdateRate(self.updates_per_second));
        }
        Ok(self)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_grid_size(mut self, grid_size: i32) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_live_probability(mut self, live_probability: f64) -> Self {
        self.live_probability = live_probability;
        self
    }
}
