/*!
 * Scheduling Engine
 * Policy-driven multi-core scheduling with preemption
 *
 * # Organization
 *
 * - **job**: per-job record and response accounting
 * - **policy**: the six-policy comparator and preemption predicates
 * - **queue**: stable policy-ordered ready queue
 * - **cores**: fixed core-slot table and its scan queries
 * - **operations**: the event entry points driven by the simulator
 * - **stats**: aggregate counters, averages, and snapshots
 */

use log::{info, trace};

mod cores;
mod job;
mod operations;
mod policy;
mod queue;
mod stats;

use cores::CoreTable;
use queue::ReadyQueue;

pub use policy::Policy;
pub use stats::{JobStats, SchedulerStats};

use crate::core::errors::SchedulerError;
use crate::core::types::SimResult;

/// Multi-core scheduling engine
///
/// Owns the core table, the ready queue, and the aggregate counters.
/// The driving simulator delivers events in tick order through
/// [`new_job`](Scheduler::new_job), [`job_finished`](Scheduler::job_finished),
/// and [`quantum_expired`](Scheduler::quantum_expired); every operation
/// runs to completion synchronously. Dropping the engine releases any
/// jobs still held in core slots or the queue.
#[derive(Debug)]
pub struct Scheduler {
    policy: Policy,
    cores: CoreTable,
    queue: ReadyQueue,
    stats: stats::Aggregates,
}

impl Scheduler {
    /// Create an engine with `cores` empty slots under `policy`
    ///
    /// # Panics
    /// Panics if `cores` is zero; use [`try_new`](Scheduler::try_new)
    /// for caller-supplied configuration.
    pub fn new(cores: usize, policy: Policy) -> Self {
        assert!(cores >= 1, "scheduler requires at least one core");
        info!("scheduler initialized: policy={}, cores={}", policy, cores);

        Self {
            policy,
            cores: CoreTable::new(cores),
            queue: ReadyQueue::new(policy),
            stats: stats::Aggregates::default(),
        }
    }

    /// Checked constructor for configuration read at run time
    pub fn try_new(cores: usize, policy: Policy) -> SimResult<Self> {
        if cores == 0 {
            return Err(SchedulerError::ZeroCores);
        }
        Ok(Self::new(cores, policy))
    }

    /// Active scheduling policy
    #[inline]
    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }

    /// Number of core slots
    #[inline]
    #[must_use]
    pub fn cores(&self) -> usize {
        self.cores.len()
    }

    /// Jobs currently held by the engine, running and pending
    #[must_use]
    pub fn len(&self) -> usize {
        self.cores.busy_count() + self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Log the ready queue in dispatch order
    ///
    /// Side-effect-only debug helper; each entry prints as
    /// `id(priority)`.
    pub fn show_queue(&self) {
        let line = self
            .queue
            .iter()
            .map(|job| format!("{}({})", job.id, job.priority))
            .collect::<Vec<_>>()
            .join(" ");
        trace!("ready queue: [{}]", line);
    }
}
