//! Game configuration from environment variables.
//!
//! - `TUI_BLOCKS_WIDTH`: board width (default: 10)
//! - `TUI_BLOCKS_HEIGHT`: board height (default: 20)
//! - `TUI_BLOCKS_SEED`: RNG seed (default: derived from the clock)
//! - `TUI_BLOCKS_LOG_PATH`: log file; logging is off when unset
//! - `TUI_BLOCKS_LOG_LEVEL`: trace, debug, info, warn or error (default: info)

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{bail, Context, Result};
use tracing::Level;

use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, MAX_BOARD_DIM, MIN_BOARD_DIM};

pub const ENV_WIDTH: &str = "TUI_BLOCKS_WIDTH";
pub const ENV_HEIGHT: &str = "TUI_BLOCKS_HEIGHT";
pub const ENV_SEED: &str = "TUI_BLOCKS_SEED";
pub const ENV_LOG_PATH: &str = "TUI_BLOCKS_LOG_PATH";
pub const ENV_LOG_LEVEL: &str = "TUI_BLOCKS_LOG_LEVEL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u8,
    pub height: u8,
    pub seed: u32,
    pub log_path: Option<PathBuf>,
    pub log_level: Level,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            seed: 1,
            log_path: None,
            log_level: Level::INFO,
        }
    }
}

impl GameConfig {
    /// Read the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let width = match get(ENV_WIDTH) {
            Some(v) => parse_dimension(ENV_WIDTH, &v)?,
            None => BOARD_WIDTH,
        };
        let height = match get(ENV_HEIGHT) {
            Some(v) => parse_dimension(ENV_HEIGHT, &v)?,
            None => BOARD_HEIGHT,
        };
        let seed = match get(ENV_SEED) {
            Some(v) => v
                .parse::<u32>()
                .with_context(|| format!("{ENV_SEED}={v:?} is not a valid seed"))?,
            None => seed_from_clock(),
        };
        let log_level = match get(ENV_LOG_LEVEL) {
            Some(v) => v
                .parse::<Level>()
                .with_context(|| format!("{ENV_LOG_LEVEL}={v:?} is not a log level"))?,
            None => Level::INFO,
        };

        Ok(Self {
            width,
            height,
            seed,
            log_path: get(ENV_LOG_PATH).map(PathBuf::from),
            log_level,
        })
    }
}

fn parse_dimension(key: &str, value: &str) -> Result<u8> {
    let dim = value
        .parse::<u8>()
        .with_context(|| format!("{key}={value:?} is not a number"))?;
    if !(MIN_BOARD_DIM..=MAX_BOARD_DIM).contains(&dim) {
        bail!("{key}={dim} is outside {MIN_BOARD_DIM}..={MAX_BOARD_DIM}");
    }
    Ok(dim)
}

/// Seed mixed from the wall clock
pub fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = GameConfig::from_lookup(lookup(&[(ENV_SEED, "9")])).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.seed, 9);
        assert_eq!(config.log_path, None);
        assert_eq!(config.log_level, Level::INFO);
    }

    #[test]
    fn reads_all_values() {
        let config = GameConfig::from_lookup(lookup(&[
            (ENV_WIDTH, "12"),
            (ENV_HEIGHT, " 24 "),
            (ENV_SEED, "77"),
            (ENV_LOG_PATH, "/tmp/blocks.log"),
            (ENV_LOG_LEVEL, "debug"),
        ]))
        .unwrap();
        assert_eq!(config.width, 12);
        assert_eq!(config.height, 24);
        assert_eq!(config.seed, 77);
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/blocks.log")));
        assert_eq!(config.log_level, Level::DEBUG);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            GameConfig::from_lookup(lookup(&[(ENV_WIDTH, "  "), (ENV_LOG_PATH, "")])).unwrap();
        assert_eq!(config.width, 10);
        assert_eq!(config.log_path, None);
    }

    #[test]
    fn rejects_bad_values() {
        assert!(GameConfig::from_lookup(lookup(&[(ENV_WIDTH, "3")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_HEIGHT, "65")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_WIDTH, "wide")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_SEED, "-1")])).is_err());
        assert!(GameConfig::from_lookup(lookup(&[(ENV_LOG_LEVEL, "loud")])).is_err());
    }
}
