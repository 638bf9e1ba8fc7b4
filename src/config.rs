//! Runtime configuration for the terminal game.
//!
//! Read from `BLOCKFALL_*` environment variables. Values that are missing or
//! fail to parse fall back to the defaults.

use std::env;
use std::path::PathBuf;

use crate::core::PieceFactory;
use crate::types::{
    PieceKind, DEFAULT_COLS, DEFAULT_ROWS, GRAVITY_MS, INPUT_REPEAT_MS, MAX_DIMENSION,
    MIN_DIMENSION,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub gravity_ms: u32,
    pub input_repeat_ms: u32,
    pub seed: Option<u64>,
    /// Scripted piece order, cycled forever. Overrides `seed`.
    pub pieces: Option<Vec<PieceKind>>,
    /// Enables file logging when set.
    pub log_dir: Option<PathBuf>,
    pub log_level: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            gravity_ms: GRAVITY_MS,
            input_repeat_ms: INPUT_REPEAT_MS,
            seed: None,
            pieces: None,
            log_dir: None,
            log_level: "info".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let rows = var("BLOCKFALL_ROWS")
            .and_then(|s| s.parse::<usize>().ok())
            .map_or(defaults.rows, clamp_dimension);
        let cols = var("BLOCKFALL_COLS")
            .and_then(|s| s.parse::<usize>().ok())
            .map_or(defaults.cols, clamp_dimension);

        let gravity_ms = var("BLOCKFALL_GRAVITY_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.gravity_ms);
        let input_repeat_ms = var("BLOCKFALL_INPUT_REPEAT_MS")
            .and_then(|s| s.parse::<u32>().ok())
            .filter(|&ms| ms > 0)
            .unwrap_or(defaults.input_repeat_ms);

        let seed = var("BLOCKFALL_SEED").and_then(|s| s.parse().ok());
        let pieces = var("BLOCKFALL_PIECES").and_then(|s| parse_pieces(&s));

        let log_dir = var("BLOCKFALL_LOG_DIR").map(PathBuf::from);
        let log_level = var("BLOCKFALL_LOG_LEVEL").unwrap_or(defaults.log_level);

        Self {
            rows,
            cols,
            gravity_ms,
            input_repeat_ms,
            seed,
            pieces,
            log_dir,
            log_level,
        }
    }

    /// Piece source for a new board: scripted, seeded or entropy, in that order.
    pub fn factory(&self) -> PieceFactory {
        match (&self.pieces, self.seed) {
            (Some(kinds), _) => PieceFactory::sequence(kinds.iter().copied()),
            (None, Some(seed)) => PieceFactory::seeded(seed),
            (None, None) => PieceFactory::new(),
        }
    }
}

fn clamp_dimension(n: usize) -> usize {
    n.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Parse letters like `"iotszjl"` (spaces and commas ignored). Any unknown
/// letter rejects the whole list.
fn parse_pieces(s: &str) -> Option<Vec<PieceKind>> {
    let kinds = s
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| PieceKind::from_str(c.encode_utf8(&mut [0; 4])))
        .collect::<Option<Vec<_>>>()?;
    (!kinds.is_empty()).then_some(kinds)
}
