//! Workload partitioning across workers

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Contiguous half-open sub-range `[start, end)` of the outer summation
/// domain, assigned to exactly one compute task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    /// First index of the range (inclusive)
    pub start: i64,

    /// One past the last index of the range (exclusive)
    pub end: i64,
}

impl Partition {
    /// Number of outer-loop iterations covered by this partition
    pub fn len(&self) -> i64 {
        self.end - self.start
    }

    /// Whether the partition covers no iterations
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Split `[0, total)` into `parts` ordered, contiguous, disjoint partitions.
///
/// The split is a deterministic floor division: every partition gets
/// `total / parts` elements and the last one additionally absorbs the
/// `total % parts` remainder. `parts == 0` and a negative `total` are
/// rejected.
pub fn partition(total: i64, parts: usize) -> Result<Vec<Partition>> {
    if parts == 0 {
        return Err(Error::config("cannot partition a workload into zero parts"));
    }
    if total < 0 {
        return Err(Error::config(format!(
            "workload bound must be non-negative, got {total}"
        )));
    }

    let parts = parts as i64;
    let chunk = total / parts;

    let mut partitions = Vec::with_capacity(parts as usize);
    for j in 0..parts {
        let start = chunk * j;
        let mut end = chunk * (j + 1);
        if j == parts - 1 {
            end += total % parts;
        }
        partitions.push(Partition { start, end });
    }

    Ok(partitions)
}
