//! Tests for the worker module

use super::ComputeTask;
use crate::partition::Partition;

use crossbeam_channel::bounded;

/// Reference kernel: Σ i*j over [start, end) × [0, inner)
fn brute_force(span: Partition, inner: i64) -> i64 {
    let mut acc = 0i64;
    for i in span.start..span.end {
        for j in 0..inner {
            acc += i * j;
        }
    }
    acc
}

#[test]
fn test_task_computes_partial_sum() {
    let (tx, rx) = bounded(1);
    let span = Partition { start: 2, end: 5 };

    ComputeTask::new(0, 0, span, 4, tx).run();

    // Σ_{i=2..4} Σ_{j=0..3} i*j = (2+3+4) * (0+1+2+3)
    assert_eq!(rx.recv().unwrap(), 54);
}

#[test]
fn test_task_delivers_exactly_one_result() {
    let (tx, rx) = bounded(4);
    let span = Partition { start: 0, end: 10 };

    ComputeTask::new(0, 0, span, 5, tx).run();

    assert_eq!(rx.try_iter().count(), 1);
}

#[test]
fn test_task_empty_partition_yields_zero() {
    let (tx, rx) = bounded(1);
    let span = Partition { start: 7, end: 7 };

    ComputeTask::new(0, 1, span, 1000, tx).run();

    assert_eq!(rx.recv().unwrap(), 0);
}

#[test]
fn test_task_matches_reference_kernel() {
    let (tx, rx) = bounded(1);
    let span = Partition { start: 13, end: 57 };

    ComputeTask::new(0, 0, span, 31, tx).run();

    assert_eq!(rx.recv().unwrap(), brute_force(span, 31));
}

#[test]
fn test_core_assignment_wraps_modulo_two() {
    let (tx, _rx) = bounded(1);
    let span = Partition { start: 0, end: 1 };

    let task = ComputeTask::new(3, 5, span, 1, tx);
    assert_eq!(task.core(), 1);
    assert_eq!(task.id(), 3);
}

#[test]
fn test_spawned_task_runs_on_named_thread() {
    let (tx, rx) = bounded(1);
    let span = Partition { start: 0, end: 100 };

    let handle = ComputeTask::new(7, 0, span, 10, tx)
        .spawn(128 * 1024)
        .expect("spawn failed");

    assert_eq!(handle.thread().name(), Some("compute-7"));
    assert_eq!(rx.recv().unwrap(), brute_force(span, 10));
    handle.join().unwrap();
}

#[test]
fn test_dropped_receiver_does_not_panic_task() {
    let (tx, rx) = bounded(1);
    drop(rx);
    let span = Partition { start: 0, end: 3 };

    // The result has nowhere to go; the task must still terminate cleanly.
    ComputeTask::new(0, 0, span, 3, tx).run();
}
