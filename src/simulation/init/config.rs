use serde::{Deserialize, Serialize};

use crate::spatial::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use crate::systems::executor::{default_workers, Parallelism, MAX_WORKERS, MIN_WORKERS};

use super::controller::{DEFAULT_INTERVAL_MS, SPEED_MAX};

pub const DEFAULT_SEED: u32 = 12345;

/// Engine settings, as loaded from a host's JSON
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct LifeConfig {
    pub board_size: u32,
    pub parallelism: Parallelism,
    pub workers: usize,
    pub track_age: bool,
    pub display: bool,
    pub interval_ms: u32,
    pub fastest: bool,
    pub seed: u32,
    pub perf_metrics: bool,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            parallelism: Parallelism::default(),
            workers: default_workers(),
            track_age: false,
            display: true,
            interval_ms: DEFAULT_INTERVAL_MS,
            fastest: false,
            seed: DEFAULT_SEED,
            perf_metrics: false,
        }
    }
}

impl LifeConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: LifeConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.board_size == 0 || self.board_size > MAX_BOARD_SIZE {
            return Err(format!(
                "boardSize {} outside 1..={}",
                self.board_size, MAX_BOARD_SIZE
            ));
        }
        if !(MIN_WORKERS..=MAX_WORKERS).contains(&self.workers) {
            return Err(format!(
                "workers {} outside {}..={}",
                self.workers, MIN_WORKERS, MAX_WORKERS
            ));
        }
        if self.interval_ms > SPEED_MAX {
            return Err(format!("intervalMs {} above {}", self.interval_ms, SPEED_MAX));
        }
        Ok(())
    }
}
