//! corebench - dual-core compute benchmark harness

use anyhow::Result;
use clap::Parser;

use corebench_core::{Orchestrator, RunReport};

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    match cli.command {
        cli::Commands::Run {
            workers,
            workload,
            json,
        } => run(workers, &workload, json),
        cli::Commands::Sweep {
            max_workers,
            workload,
        } => sweep(max_workers, &workload),
    }
}

fn build_orchestrator(workload: &cli::WorkloadArgs) -> Orchestrator {
    let mut bench = Orchestrator::new(workload.cycles, workload.cooldown_ms, workload.capacity);
    bench.set_sum_upper_limit(workload.sum_limit);
    bench.set_mul_upper_limit(workload.mul_limit);
    bench
}

fn run(workers: usize, workload: &cli::WorkloadArgs, json: bool) -> Result<()> {
    let bench = build_orchestrator(workload);
    let report = bench.run(workers)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_summary(&report);
    }

    Ok(())
}

fn sweep(max_workers: usize, workload: &cli::WorkloadArgs) -> Result<()> {
    let bench = build_orchestrator(workload);

    let mut baseline_ms = None;
    println!("workers  mean elapsed (ms)  speedup");
    for workers in 1..=max_workers {
        let report = bench.run(workers)?;
        let baseline = *baseline_ms.get_or_insert(report.mean_elapsed_ms);

        let speedup = if report.mean_elapsed_ms > 0.0 {
            baseline / report.mean_elapsed_ms
        } else {
            1.0
        };
        println!(
            "{:>7}  {:>17.0}  {:>6.2}x",
            report.workers, report.mean_elapsed_ms, speedup
        );
    }

    Ok(())
}

fn print_summary(report: &RunReport) {
    println!(
        "{} workers, {} cycles: mean {} ms, result {}",
        report.workers, report.cycles, report.mean_elapsed_ms, report.mean_sum
    );
    for record in &report.records {
        println!(
            "  cycle {}: {} ms, sum {}",
            record.cycle, record.elapsed_ms, record.sum
        );
    }
}
