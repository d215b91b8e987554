//! Memoization cache configuration.
//!
//! Values come from code or from the environment:
//!
//! - `LAMBDAS_MEMO_CAPACITY`: initial number of entries reserved per cache
//! - `LAMBDAS_MEMO_SHARDS`: number of lock shards per cache, rounded up to a
//!   power of two of at least 2

use crate::error::ConfigError;
use std::env;

pub const MEMO_CAPACITY_ENV: &str = "LAMBDAS_MEMO_CAPACITY";
pub const MEMO_SHARDS_ENV: &str = "LAMBDAS_MEMO_SHARDS";

/// Sizing of the concurrent map backing a memoized interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MemoConfig {
    pub initial_capacity: usize,
    pub shard_amount: usize,
}

impl Default for MemoConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            shard_amount: normalize_shard_amount(num_cpus::get() * 4),
        }
    }
}

impl MemoConfig {
    /// Creates a config, normalising `shard_amount` to a power of two of at least 2.
    ///
    /// # Examples
    ///
    /// ```
    /// use lambdas::MemoConfig;
    ///
    /// let config = MemoConfig::new(64, 3);
    /// assert_eq!(config.initial_capacity, 64);
    /// assert_eq!(config.shard_amount, 4);
    /// ```
    pub fn new(initial_capacity: usize, shard_amount: usize) -> Self {
        Self {
            initial_capacity,
            shard_amount: normalize_shard_amount(shard_amount),
        }
    }

    pub fn with_initial_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }

    pub fn with_shard_amount(mut self, shard_amount: usize) -> Self {
        self.shard_amount = normalize_shard_amount(shard_amount);
        self
    }

    /// Reads the config from the process environment.
    ///
    /// Unset variables fall back to [`MemoConfig::default`]; set but malformed
    /// variables are reported.
    pub fn try_from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the config from the process environment, falling back to the
    /// default (with a warning) when a variable is malformed.
    pub fn from_env_or_default() -> Self {
        Self::try_from_env().unwrap_or_else(|error| {
            log::warn!("Ignoring memoization config from environment: {}", error);
            Self::default()
        })
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(MEMO_CAPACITY_ENV) {
            config.initial_capacity = parse_unsigned(MEMO_CAPACITY_ENV, &raw)?;
        }

        if let Some(raw) = lookup(MEMO_SHARDS_ENV) {
            config = config.with_shard_amount(parse_unsigned(MEMO_SHARDS_ENV, &raw)?);
        }

        Ok(config)
    }
}

fn parse_unsigned(key: &'static str, raw: &str) -> Result<usize, ConfigError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidNumber {
            key,
            value: raw.to_string(),
        })
}

// dashmap panics unless the shard amount is a power of two greater than one.
fn normalize_shard_amount(shard_amount: usize) -> usize {
    shard_amount
        .max(2)
        .checked_next_power_of_two()
        .unwrap_or(1 << (usize::BITS - 1))
}
