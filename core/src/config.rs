//! Benchmark configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Default number of fork-join cycles averaged per run
pub const DEFAULT_DURATION_CYCLES: u32 = 4;

/// Default cool-down slept before every run
pub const DEFAULT_COOL_DOWN: Duration = Duration::from_millis(1500);

/// Default upper bound of the outer summation loop
pub const DEFAULT_SUM_UPPER_LIMIT: i64 = 50_000;

/// Default upper bound of the inner multiplication loop
pub const DEFAULT_MUL_UPPER_LIMIT: i64 = 10_000;

/// Default result channel capacity
pub const DEFAULT_CHANNEL_CAPACITY: usize = 16;

/// Default stack size for worker threads.
///
/// The kernel needs a handful of locals, nothing more, so a fixed small
/// stack suffices. Hosts with unusual requirements can override it through
/// [`BenchConfig::with_worker_stack_size`].
pub const DEFAULT_WORKER_STACK_SIZE: usize = 256 * 1024;

/// Benchmark configuration
///
/// Defines how a benchmark run behaves: how many cycles are averaged, how
/// long the cool-down between runs is, the workload bounds, and the sizing
/// of the result channel and worker fan-out. The orchestrator takes a
/// config by value at construction; there is no mid-run mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Number of fork-join cycles averaged per run
    pub duration_cycles: u32,

    /// Delay slept before the first cycle of every run
    pub cool_down: Duration,

    /// Upper bound of the outer summation loop, split across workers
    pub sum_upper_limit: i64,

    /// Upper bound of the inner multiplication loop, identical for every worker
    pub mul_upper_limit: i64,

    /// Capacity of the bounded result channel
    pub channel_capacity: usize,

    /// Maximum number of workers spawned per cycle; higher requests clamp
    pub max_workers: usize,

    /// Stack size handed to every worker thread
    pub worker_stack_size: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            duration_cycles: DEFAULT_DURATION_CYCLES,
            cool_down: DEFAULT_COOL_DOWN,
            sum_upper_limit: DEFAULT_SUM_UPPER_LIMIT,
            mul_upper_limit: DEFAULT_MUL_UPPER_LIMIT,
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            max_workers: DEFAULT_CHANNEL_CAPACITY,
            worker_stack_size: DEFAULT_WORKER_STACK_SIZE,
        }
    }
}

impl BenchConfig {
    /// Create a config from the three run-shaping knobs.
    ///
    /// Zero values are silently replaced with their defaults so a benchmark
    /// built from unchecked input always remains runnable. `max_workers`
    /// follows `channel_capacity`, which keeps a full fan-out from ever
    /// outsizing the channel.
    pub fn new(duration_cycles: u32, cool_down_ms: u64, channel_capacity: usize) -> Self {
        let mut config = Self::default();
        if duration_cycles > 0 {
            config.duration_cycles = duration_cycles;
        }
        if cool_down_ms > 0 {
            config.cool_down = Duration::from_millis(cool_down_ms);
        }
        if channel_capacity > 0 {
            config.channel_capacity = channel_capacity;
            config.max_workers = channel_capacity;
        }
        config
    }

    /// Set the outer summation bound
    pub fn with_sum_upper_limit(mut self, limit: i64) -> Self {
        self.sum_upper_limit = limit;
        self
    }

    /// Set the inner multiplication bound
    pub fn with_mul_upper_limit(mut self, limit: i64) -> Self {
        self.mul_upper_limit = limit;
        self
    }

    /// Set the worker fan-out limit
    pub fn with_max_workers(mut self, max_workers: usize) -> Self {
        self.max_workers = max_workers;
        self
    }

    /// Set the worker thread stack size
    pub fn with_worker_stack_size(mut self, bytes: usize) -> Self {
        self.worker_stack_size = bytes;
        self
    }

    /// Set the cool-down delay
    pub fn with_cool_down(mut self, cool_down: Duration) -> Self {
        self.cool_down = cool_down;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.channel_capacity == 0 {
            return Err(Error::config("channel capacity must be at least 1"));
        }
        if self.max_workers == 0 {
            return Err(Error::config("max_workers must be at least 1"));
        }
        if self.sum_upper_limit < 0 || self.mul_upper_limit < 0 {
            return Err(Error::config("workload bounds must be non-negative"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.duration_cycles, 4);
        assert_eq!(config.cool_down, Duration::from_millis(1500));
        assert_eq!(config.sum_upper_limit, 50_000);
        assert_eq!(config.mul_upper_limit, 10_000);
        assert_eq!(config.channel_capacity, 16);
        assert_eq!(config.max_workers, 16);
    }

    #[test]
    fn test_config_zero_values_fall_back_to_defaults() {
        let config = BenchConfig::new(0, 0, 0);
        assert_eq!(config.duration_cycles, 4);
        assert_eq!(config.cool_down, Duration::from_millis(1500));
        assert_eq!(config.channel_capacity, 16);
        assert_eq!(config.max_workers, 16);
    }

    #[test]
    fn test_config_explicit_values_kept() {
        let config = BenchConfig::new(8, 250, 4);
        assert_eq!(config.duration_cycles, 8);
        assert_eq!(config.cool_down, Duration::from_millis(250));
        assert_eq!(config.channel_capacity, 4);
        assert_eq!(config.max_workers, 4);
    }

    #[test]
    fn test_config_builder_pattern() {
        let config = BenchConfig::default()
            .with_sum_upper_limit(100)
            .with_mul_upper_limit(50)
            .with_max_workers(2)
            .with_cool_down(Duration::from_millis(1));

        assert_eq!(config.sum_upper_limit, 100);
        assert_eq!(config.mul_upper_limit, 50);
        assert_eq!(config.max_workers, 2);
        assert_eq!(config.cool_down, Duration::from_millis(1));
    }

    #[test]
    fn test_config_validation_zero_workers() {
        let config = BenchConfig::default().with_max_workers(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validation_negative_bounds() {
        let config = BenchConfig::default().with_sum_upper_limit(-1);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_serialization() {
        let config = BenchConfig::new(2, 100, 8).with_sum_upper_limit(1000);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BenchConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.duration_cycles, 2);
        assert_eq!(deserialized.sum_upper_limit, 1000);
        assert_eq!(deserialized.channel_capacity, 8);
    }
}
