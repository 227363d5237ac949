//! CLI argument parsing and command dispatch

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "corebench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark at a single worker count
    Run {
        /// Number of concurrent workers
        #[arg(short, long, default_value_t = 2)]
        workers: usize,

        #[command(flatten)]
        workload: WorkloadArgs,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Benchmark every worker count from 1 up and compare speedups
    Sweep {
        /// Highest worker count to benchmark
        #[arg(short, long, default_value_t = 2)]
        max_workers: usize,

        #[command(flatten)]
        workload: WorkloadArgs,
    },
}

/// Workload and run-shaping knobs shared by all commands
#[derive(Args)]
pub struct WorkloadArgs {
    /// Cycles averaged per worker count
    #[arg(long, default_value_t = 4)]
    pub cycles: u32,

    /// Cool-down before each run, in milliseconds
    #[arg(long, default_value_t = 1500)]
    pub cooldown_ms: u64,

    /// Upper bound of the outer summation loop
    #[arg(long, default_value_t = 50_000)]
    pub sum_limit: i64,

    /// Upper bound of the inner multiplication loop
    #[arg(long, default_value_t = 10_000)]
    pub mul_limit: i64,

    /// Result channel capacity (also the worker fan-out limit)
    #[arg(long, default_value_t = 16)]
    pub capacity: usize,
}
