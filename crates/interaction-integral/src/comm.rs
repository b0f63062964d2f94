//! Collective reduction across mesh partitions.
//!
//! `sum_all` has all-reduce semantics: every partition must call it, it
//! blocks until all partial sums are in, and every partition receives the
//! same total. A partition that never calls it stalls the others; that is
//! the caller's responsibility.

use std::sync::{Arc, Barrier, Mutex, PoisonError};

/// All-reduce communicator over the partitions of one mesh
pub trait Communicator: Send + Sync {
    /// Index of the calling partition
    fn rank(&self) -> usize;

    /// Number of participating partitions
    fn size(&self) -> usize;

    /// Global sum of `local` over all partitions
    fn sum_all(&self, local: f64) -> f64;
}

/// Single-partition communicator; the global sum is the local value
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialCommunicator;

impl Communicator for SerialCommunicator {
    fn rank(&self) -> usize {
        0
    }

    fn size(&self) -> usize {
        1
    }

    fn sum_all(&self, local: f64) -> f64 {
        local
    }
}

struct GroupState {
    barrier: Barrier,
    slots: Mutex<Vec<f64>>,
}

/// Factory for in-process partitions running on separate threads
pub struct ThreadGroup;

impl ThreadGroup {
    /// Create one communicator per partition.
    ///
    /// Each returned communicator is meant to move to its own thread.
    pub fn communicators(size: usize) -> Vec<ThreadCommunicator> {
        let state = Arc::new(GroupState {
            barrier: Barrier::new(size),
            slots: Mutex::new(vec![0.0; size]),
        });
        (0..size)
            .map(|rank| ThreadCommunicator {
                rank,
                size,
                state: Arc::clone(&state),
            })
            .collect()
    }
}

/// Communicator for one thread-backed partition
pub struct ThreadCommunicator {
    rank: usize,
    size: usize,
    state: Arc<GroupState>,
}

impl Communicator for ThreadCommunicator {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn sum_all(&self, local: f64) -> f64 {
        // A poisoned lock only means another partition panicked; the slot
        // values are still plain numbers.
        self.state
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)[self.rank] = local;
        self.state.barrier.wait();

        // Rank order keeps the result bit-identical on every partition
        let total: f64 = self
            .state
            .slots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .sum();

        // Nobody may overwrite a slot before everyone has read the total
        self.state.barrier.wait();
        total
    }
}
