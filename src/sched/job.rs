/*!
 * Job Record
 * Per-job bookkeeping for dispatch and response accounting
 */

use crate::core::types::{JobId, Priority, Tick};

/// One unit of work announced by the simulator
///
/// A job is owned by exactly one container at any time: a core slot
/// while running, or the ready queue while pending. Transfers move the
/// value, so a job can neither be duplicated nor lost.
#[derive(Debug, Clone)]
pub(crate) struct Job {
    pub id: JobId,
    pub priority: Priority,
    pub arrival_time: Tick,
    pub original_run_time: Tick,
    /// Work left to do. Only the preemptive shortest-job policy keeps
    /// this current; every other policy leaves it at the original value.
    pub remaining_run_time: Tick,
    /// Tick at which `remaining_run_time` was last brought up to date.
    pub last_checked_time: Tick,
    /// Delta between first dispatch and arrival; `None` until the job
    /// first reaches a core.
    pub response_time: Option<Tick>,
}

impl Job {
    pub fn new(id: JobId, now: Tick, run_time: Tick, priority: Priority) -> Self {
        Self {
            id,
            priority,
            arrival_time: now,
            original_run_time: run_time,
            remaining_run_time: run_time,
            last_checked_time: now,
            response_time: None,
        }
    }

    /// Record the job reaching a core; the first dispatch wins
    pub fn dispatch(&mut self, now: Tick) {
        if self.response_time.is_none() {
            self.response_time = Some(now - self.arrival_time);
        }
    }

    /// Forget a dispatch that never executed
    ///
    /// A victim whose response time was set at this very tick was
    /// dispatched and preempted without running a single tick; it must
    /// not count as having responded. This is the only path that unsets
    /// a response time.
    pub fn retract_dispatch(&mut self, now: Tick) {
        if self.response_time == Some(now - self.arrival_time) {
            self.response_time = None;
        }
    }

    /// Bring `remaining_run_time` up to the current tick
    pub fn refresh_remaining(&mut self, now: Tick) {
        let elapsed = now - self.last_checked_time;
        self.remaining_run_time = self.remaining_run_time.saturating_sub(elapsed);
        self.last_checked_time = now;
    }
}

impl PartialEq for Job {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Job {}
