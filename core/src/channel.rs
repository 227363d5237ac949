//! Bounded result channel for worker-to-orchestrator delivery

use crossbeam_channel::{bounded, Receiver, Sender};

/// Bounded FIFO carrying one partial result per compute task.
///
/// The orchestrator creates a single channel and hands a cloned [`sender`]
/// to every task it spawns; values are copied into the channel, never
/// referenced. `send` blocks while the channel is at capacity and [`recv`]
/// blocks while it is empty. Neither has a timeout, mirroring the
/// orchestrator's own blocking collection loop.
///
/// [`sender`]: ResultChannel::sender
/// [`recv`]: ResultChannel::recv
#[derive(Debug)]
pub struct ResultChannel {
    capacity: usize,
    tx: Sender<i64>,
    rx: Receiver<i64>,
}

impl ResultChannel {
    /// Create a channel holding at most `capacity` pending results.
    ///
    /// Capacity is fixed for the lifetime of the channel. Callers are
    /// expected to size it at least as large as the worker fan-out; a
    /// smaller channel is a latent deadlock once every producer blocks in
    /// `send` while the consumer has stopped receiving.
    pub fn new(capacity: usize) -> Self {
        let (tx, rx) = bounded(capacity);
        Self { capacity, tx, rx }
    }

    /// Maximum number of pending results
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Clone a producer handle for one compute task
    pub fn sender(&self) -> Sender<i64> {
        self.tx.clone()
    }

    /// Remove and return the oldest pending result, blocking until one is
    /// present.
    pub fn recv(&self) -> i64 {
        // The channel keeps its own sender alive, so disconnection is
        // unobservable here; recv blocks indefinitely instead.
        self.rx
            .recv()
            .expect("result channel disconnected while a sender is held")
    }
}
