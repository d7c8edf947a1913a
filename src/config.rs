//! Runtime configuration from environment variables and argv

use std::env;

use crate::output::OutputFormat;

pub const DEFAULT_DATASET_COUNT: usize = 1000;
pub const DEFAULT_INVALID_LIMIT: usize = 100;
pub const DEFAULT_SEED: u64 = 0;

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(msg) => write!(f, "Invalid configuration value: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Configuration loaded from environment variables
///
/// Unset or unparsable variables fall back to defaults; the only hard
/// constraint is `invalid_limit >= 1`, which the collector relies on.
#[derive(Debug, Clone)]
pub struct Config {
    pub dataset_count: usize,
    pub invalid_limit: usize,
    pub seed: u64,
    pub rows_per_dataset: usize,
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let dataset_count = env::var("DATASET_COUNT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_DATASET_COUNT);

        let invalid_limit = env::var("INVALID_LIMIT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_INVALID_LIMIT);

        if invalid_limit == 0 {
            return Err(ConfigError::InvalidValue(
                "INVALID_LIMIT must be at least 1".to_string(),
            ));
        }

        let seed = env::var("GENERATOR_SEED")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_SEED);

        let rows_per_dataset = env::var("ROWS_PER_DATASET")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(crate::generator::DEFAULT_ROWS_PER_DATASET);

        Ok(Self {
            dataset_count,
            invalid_limit,
            seed,
            rows_per_dataset,
            format: Self::parse_format_from_args(),
        })
    }

    pub fn parse_format_from_args() -> OutputFormat {
        let args: Vec<String> = env::args().collect();
        if let Some(idx) = args.iter().position(|x| x == "--format") {
            match args.get(idx + 1).map(|s| s.as_str()) {
                Some("json") => return OutputFormat::Json,
                Some("table") => return OutputFormat::Table,
                _ => {}
            }
        }
        OutputFormat::Table
    }
}
