//! Benchmark orchestration

use std::thread;
use std::time::Instant;

use crate::affinity::EXECUTION_CORES;
use crate::channel::ResultChannel;
use crate::config::BenchConfig;
use crate::error::{Error, Result};
use crate::partition::partition;
use crate::worker::ComputeTask;

use super::aggregator::{aggregate_cycles, CycleRecord, RunReport};

/// Pinning policy: worker index `j` runs on core
/// `(j + CORE_OFFSET) % EXECUTION_CORES`, so consecutive workers alternate
/// cores and a single worker lands opposite the collection thread.
pub const CORE_OFFSET: usize = 1;

/// Orchestrator driving the fork-join benchmark cycle
///
/// Owns the configuration and the shared result channel. Each call to
/// [`run`] partitions the workload, spawns one pinned [`ComputeTask`] per
/// partition, drains exactly that many results from the channel, and
/// repeats for the configured number of cycles before reducing to means.
///
/// The collection loop is the sole serialization point: results arrive in
/// completion order, not spawn order, and the aggregate is deterministic
/// because summation commutes. There is no cancellation and no timeout;
/// a task that never completes hangs the run.
///
/// [`run`]: Orchestrator::run
#[derive(Debug)]
pub struct Orchestrator {
    config: BenchConfig,
    channel: ResultChannel,
}

impl Orchestrator {
    /// Create an orchestrator from the three run-shaping knobs.
    ///
    /// Zero values fall back to defaults (see [`BenchConfig::new`]); the
    /// result channel is sized to `channel_capacity` and `max_workers`
    /// follows it, so a full fan-out can never outsize the channel.
    pub fn new(duration_cycles: u32, cool_down_ms: u64, channel_capacity: usize) -> Self {
        Self::from_config(BenchConfig::new(duration_cycles, cool_down_ms, channel_capacity))
    }

    /// Create an orchestrator from a full configuration.
    ///
    /// A `max_workers` larger than `channel_capacity` is accepted but
    /// logged: once every producer blocks in `send` with the consumer done
    /// receiving, the run deadlocks.
    pub fn from_config(config: BenchConfig) -> Self {
        if config.max_workers > config.channel_capacity {
            tracing::warn!(
                max_workers = config.max_workers,
                channel_capacity = config.channel_capacity,
                "worker limit exceeds channel capacity, full fan-out will deadlock"
            );
        }

        let channel = ResultChannel::new(config.channel_capacity);
        Self { config, channel }
    }

    /// Current configuration
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Upper bound of the outer summation loop
    pub fn sum_upper_limit(&self) -> i64 {
        self.config.sum_upper_limit
    }

    /// Set the upper bound of the outer summation loop
    pub fn set_sum_upper_limit(&mut self, limit: i64) {
        self.config.sum_upper_limit = limit;
    }

    /// Upper bound of the inner multiplication loop
    pub fn mul_upper_limit(&self) -> i64 {
        self.config.mul_upper_limit
    }

    /// Set the upper bound of the inner multiplication loop
    pub fn set_mul_upper_limit(&mut self, limit: i64) {
        self.config.mul_upper_limit = limit;
    }

    /// Worker fan-out limit
    pub fn max_workers(&self) -> usize {
        self.config.max_workers
    }

    /// Set the worker fan-out limit
    pub fn set_max_workers(&mut self, max_workers: usize) {
        self.config.max_workers = max_workers;
    }

    /// Run the benchmark with the requested number of workers.
    ///
    /// Sleeps the cool-down (before the first cycle too), clamps the
    /// request to `max_workers`, then times `duration_cycles` fork-join
    /// rounds and reduces them to truncating means. Returns the full
    /// per-cycle report; the headline number is
    /// [`RunReport::mean_elapsed_ms`].
    ///
    /// # Errors
    ///
    /// `requested_workers == 0` or a negative workload bound is a
    /// configuration error; a worker thread failing to spawn is an IO
    /// error. Nothing else fails: over-requesting workers clamps.
    pub fn run(&self, requested_workers: usize) -> Result<RunReport> {
        if requested_workers == 0 {
            return Err(Error::config("at least one worker is required"));
        }

        // Cool down before the first cycle as well, so back-to-back runs
        // start from a comparable scheduling state.
        thread::sleep(self.config.cool_down);

        let workers = if requested_workers > self.config.max_workers {
            tracing::warn!(
                requested = requested_workers,
                limit = self.config.max_workers,
                "worker limit reached, clamping"
            );
            self.config.max_workers
        } else {
            requested_workers
        };

        let started_at = chrono::Utc::now();
        tracing::info!(
            workers,
            cycles = self.config.duration_cycles,
            sum_upper_limit = self.config.sum_upper_limit,
            mul_upper_limit = self.config.mul_upper_limit,
            "Starting benchmark"
        );

        let mut records = Vec::with_capacity(self.config.duration_cycles as usize);
        for cycle in 0..self.config.duration_cycles {
            records.push(self.run_cycle(cycle, workers)?);
        }

        let (mean_elapsed_ms, mean_sum) = aggregate_cycles(&records);
        tracing::info!(workers, mean_elapsed_ms, mean_sum, "Benchmark complete");

        Ok(RunReport {
            workers,
            cycles: self.config.duration_cycles,
            mean_elapsed_ms: mean_elapsed_ms as f64,
            mean_sum,
            started_at,
            records,
        })
    }

    /// One fork-join round: partition, spawn pinned tasks, drain exactly
    /// as many results, time the whole thing.
    fn run_cycle(&self, cycle: u32, workers: usize) -> Result<CycleRecord> {
        let partitions = partition(self.config.sum_upper_limit, workers)?;

        let start = Instant::now();

        for (j, span) in partitions.into_iter().enumerate() {
            let task = ComputeTask::new(
                j,
                (j + CORE_OFFSET) % EXECUTION_CORES,
                span,
                self.config.mul_upper_limit,
                self.channel.sender(),
            );
            // Completion is observed through the channel; tasks release
            // themselves and are never joined.
            task.spawn(self.config.worker_stack_size)?;
        }

        let mut sum: i64 = 0;
        for received in 0..workers {
            let part = self.channel.recv();
            tracing::debug!(cycle, received, part, "Partial result received");
            sum += part;
        }

        let elapsed_ms = start.elapsed().as_millis() as u64;
        tracing::debug!(cycle, elapsed_ms, sum, "Cycle finished");

        Ok(CycleRecord {
            cycle,
            elapsed_ms,
            sum,
        })
    }
}
