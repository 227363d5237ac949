//! Cycle aggregation and run reporting

use serde::{Deserialize, Serialize};

/// Timing and result of one fork-join cycle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleRecord {
    /// Zero-based cycle index within the run
    pub cycle: u32,

    /// Wall-clock time of the cycle in whole milliseconds
    pub elapsed_ms: u64,

    /// Sum of all partial results received in the cycle
    pub sum: i64,
}

/// Aggregated outcome of one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Number of workers actually spawned per cycle (after clamping)
    pub workers: usize,

    /// Number of cycles averaged
    pub cycles: u32,

    /// Mean wall-clock time per cycle in milliseconds
    pub mean_elapsed_ms: f64,

    /// Mean aggregate sum per cycle
    pub mean_sum: i64,

    /// When the run started (after the cool-down)
    pub started_at: chrono::DateTime<chrono::Utc>,

    /// Per-cycle measurements
    pub records: Vec<CycleRecord>,
}

impl RunReport {
    /// Total wall-clock time across all cycles in milliseconds
    pub fn total_elapsed_ms(&self) -> u64 {
        self.records.iter().map(|r| r.elapsed_ms).sum()
    }
}

/// Reduce per-cycle records to `(mean elapsed ms, mean sum)`.
///
/// Both means truncate: totals are accumulated as integers and divided by
/// the cycle count, dropping any remainder.
pub fn aggregate_cycles(records: &[CycleRecord]) -> (u64, i64) {
    if records.is_empty() {
        return (0, 0);
    }

    let total_ms: u64 = records.iter().map(|r| r.elapsed_ms).sum();
    let total_sum: i64 = records.iter().map(|r| r.sum).sum();
    let cycles = records.len() as u64;

    (total_ms / cycles, total_sum / cycles as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(cycle: u32, elapsed_ms: u64, sum: i64) -> CycleRecord {
        CycleRecord {
            cycle,
            elapsed_ms,
            sum,
        }
    }

    #[test]
    fn test_aggregate_empty() {
        assert_eq!(aggregate_cycles(&[]), (0, 0));
    }

    #[test]
    fn test_aggregate_single_cycle() {
        assert_eq!(aggregate_cycles(&[record(0, 12, 100)]), (12, 100));
    }

    #[test]
    fn test_aggregate_mean_truncates() {
        let records = [record(0, 3, 10), record(1, 4, 11)];
        // 7 / 2 and 21 / 2, both floored.
        assert_eq!(aggregate_cycles(&records), (3, 10));
    }

    #[test]
    fn test_report_total_elapsed() {
        let report = RunReport {
            workers: 2,
            cycles: 2,
            mean_elapsed_ms: 3.0,
            mean_sum: 10,
            started_at: chrono::Utc::now(),
            records: vec![record(0, 3, 10), record(1, 4, 11)],
        };
        assert_eq!(report.total_elapsed_ms(), 7);
    }

    #[test]
    fn test_report_serialization() {
        let report = RunReport {
            workers: 2,
            cycles: 1,
            mean_elapsed_ms: 5.0,
            mean_sum: 42,
            started_at: chrono::Utc::now(),
            records: vec![record(0, 5, 42)],
        };

        let json = serde_json::to_string(&report).unwrap();
        let deserialized: RunReport = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.workers, 2);
        assert_eq!(deserialized.mean_sum, 42);
        assert_eq!(deserialized.records.len(), 1);
    }
}
