//! Compute task execution

use std::thread::{self, JoinHandle};

use crossbeam_channel::Sender;

use crate::affinity::{self, EXECUTION_CORES};
use crate::error::Result;
use crate::partition::Partition;

/// One unit of concurrent execution computing a partial double sum.
///
/// A task exclusively owns its partition and its accumulator; the cloned
/// channel sender is the only shared resource it touches. It produces
/// exactly one result, `Σ i*j` over `[start, end) × [0, inner_limit)`,
/// delivered with a blocking send.
pub struct ComputeTask {
    id: usize,
    core: usize,
    span: Partition,
    inner_limit: i64,
    results: Sender<i64>,
}

impl ComputeTask {
    /// Create a task over `span` with the fixed inner bound
    /// `[0, inner_limit)`. `core` is reduced modulo the number of execution
    /// cores.
    pub fn new(
        id: usize,
        core: usize,
        span: Partition,
        inner_limit: i64,
        results: Sender<i64>,
    ) -> Self {
        Self {
            id,
            core: core % EXECUTION_CORES,
            span,
            inner_limit,
            results,
        }
    }

    /// Task index within its cycle
    pub fn id(&self) -> usize {
        self.id
    }

    /// Execution core this task is pinned to
    pub fn core(&self) -> usize {
        self.core
    }

    /// Outer-loop range assigned to this task
    pub fn span(&self) -> Partition {
        self.span
    }

    /// Run the kernel on the calling thread and deliver the result.
    ///
    /// Consumes the task; everything task-local is released when this
    /// returns. The send blocks until the channel has room.
    pub fn run(self) {
        if !affinity::pin_current_thread(self.core) {
            tracing::debug!(
                task_id = self.id,
                core = self.core,
                "core pinning unavailable, running unpinned"
            );
        }

        tracing::info!(
            task_id = self.id,
            core = self.core,
            start = self.span.start,
            end = self.span.end,
            "Worker started"
        );

        let sum = self.accumulate();

        if self.results.send(sum).is_err() {
            // Receiver gone; the result has nowhere to go and the run that
            // spawned us is already over.
            tracing::debug!(task_id = self.id, "result channel closed, dropping result");
        }
    }

    /// The multiply-accumulate kernel.
    ///
    /// The accumulator is not overflow-checked: bounds whose double sum
    /// exceeds `i64::MAX` wrap silently in release builds and panic in
    /// debug builds. The default bounds stay well below that.
    fn accumulate(&self) -> i64 {
        let mut acc: i64 = 0;
        for i in self.span.start..self.span.end {
            for j in 0..self.inner_limit {
                acc += i * j;
            }
        }
        acc
    }

    /// Spawn the task on its own named thread with the given stack size.
    ///
    /// The returned handle may be dropped; the task releases its own
    /// resources on termination and is never joined by the orchestrator.
    pub fn spawn(self, stack_size: usize) -> Result<JoinHandle<()>> {
        let builder = thread::Builder::new()
            .name(format!("compute-{}", self.id))
            .stack_size(stack_size);
        Ok(builder.spawn(move || self.run())?)
    }
}

impl std::fmt::Debug for ComputeTask {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComputeTask")
            .field("id", &self.id)
            .field("core", &self.core)
            .field("span", &self.span)
            .field("inner_limit", &self.inner_limit)
            .finish()
    }
}
