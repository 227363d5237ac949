//! Worker module executing one partition of the benchmark workload
//!
//! The ComputeTask is the execution unit of corebench, responsible for one
//! pass of **pin -> accumulate -> deliver -> terminate**.
//!
//! Unlike a load-generation worker that loops until told to stop, a compute
//! task is intentionally one-shot: it is constructed fresh for every
//! benchmark cycle, runs the multiply-accumulate kernel over the partition
//! it exclusively owns, pushes exactly one partial result into the shared
//! channel, and tears itself down. The orchestrator never joins it;
//! completion is observed only through the channel.
//!
//! # Example
//!
//! ```ignore
//! use corebench_core::{partition, ComputeTask, ResultChannel};
//!
//! let channel = ResultChannel::new(2);
//! let spans = partition(100, 2)?;
//! for (j, span) in spans.into_iter().enumerate() {
//!     ComputeTask::new(j, j % 2, span, 50, channel.sender())
//!         .spawn(256 * 1024)?;
//! }
//! let total: i64 = (0..2).map(|_| channel.recv()).sum();
//! ```

mod executor;

pub use executor::ComputeTask;

#[cfg(test)]
mod tests;
