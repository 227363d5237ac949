//! Orchestrator for the fork-join benchmark lifecycle
//!
//! The Orchestrator coordinates a complete benchmark run:
//! - Cooling down before the first cycle
//! - Partitioning the workload and spawning pinned compute tasks
//! - Draining partial results from the shared bounded channel
//! - Timing every cycle and reducing to means
//!
//! # Example
//!
//! ```ignore
//! use corebench_core::Orchestrator;
//!
//! let bench = Orchestrator::new(4, 1500, 16);
//! let report = bench.run(2)?;
//! println!("{} ms", report.mean_elapsed_ms);
//! ```

mod aggregator;
mod executor;

pub use aggregator::{aggregate_cycles, CycleRecord, RunReport};
pub use executor::{Orchestrator, CORE_OFFSET};
