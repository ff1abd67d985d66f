//! Runtime configuration read from `BLOCKFALL_*` environment variables.

use std::time::{SystemTime, UNIX_EPOCH};

/// Driver configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Seed for the shape generator.
    pub seed: u32,
    /// JSONL session log destination, if logging is on.
    pub log_path: Option<String>,
    /// Terminal columns per board cell.
    pub cell_width: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            log_path: None,
            cell_width: 2,
        }
    }
}

impl Config {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`], with variables supplied by `lookup`.
    ///
    /// Unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup("BLOCKFALL_SEED")
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup("BLOCKFALL_LOG_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let cell_width = lookup("BLOCKFALL_CELL_WIDTH")
            .and_then(|s| s.trim().parse::<u16>().ok())
            .filter(|w| (1..=4).contains(w))
            .unwrap_or(2);

        Self {
            seed,
            log_path,
            cell_width,
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}
