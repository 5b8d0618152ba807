/*!
 * Core Table
 * Fixed table of core slots, each holding at most one running job
 */

use super::job::Job;
use crate::core::types::{CoreId, Priority, Tick};

/// Ordered core slots
///
/// The table is small; every query is a linear scan.
#[derive(Debug)]
pub(crate) struct CoreTable {
    slots: Vec<Option<Job>>,
}

impl CoreTable {
    pub fn new(cores: usize) -> Self {
        let mut slots = Vec::with_capacity(cores);
        slots.resize_with(cores, || None);
        Self { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Lowest-indexed empty slot, if any
    pub fn find_idle(&self) -> Option<CoreId> {
        self.slots.iter().position(Option::is_none)
    }

    pub fn get(&self, core: CoreId) -> Option<&Job> {
        self.slots[core].as_ref()
    }

    /// Remove and return the job running on `core`
    pub fn take(&mut self, core: CoreId) -> Option<Job> {
        self.slots[core].take()
    }

    /// Place a job on an empty slot
    pub fn install(&mut self, core: CoreId, job: Job) {
        debug_assert!(
            self.slots[core].is_none(),
            "installing onto occupied core {}",
            core
        );
        self.slots[core] = Some(job);
    }

    /// Occupied slots with their core indices
    pub fn running(&self) -> impl Iterator<Item = (CoreId, &Job)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(core, slot)| slot.as_ref().map(|job| (core, job)))
    }

    pub fn busy_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Bring every running job's remaining time up to `now`
    pub fn refresh_remaining(&mut self, now: Tick) {
        for job in self.slots.iter_mut().flatten() {
            job.refresh_remaining(now);
        }
    }

    /// Preemption candidate under preemptive shortest-job scheduling
    ///
    /// The occupied slot with the largest remaining run time. The scan
    /// keeps the first-found maximum, so ties resolve to the lowest
    /// index. Callers refresh remaining times first.
    pub fn longest_remaining(&self) -> Option<CoreId> {
        let mut worst: Option<(CoreId, Tick)> = None;
        for (core, job) in self.running() {
            let beats = worst.map_or(true, |(_, remaining)| job.remaining_run_time > remaining);
            if beats {
                worst = Some((core, job.remaining_run_time));
            }
        }
        worst.map(|(core, _)| core)
    }

    /// Preemption candidate under preemptive priority scheduling
    ///
    /// The running job with the numerically largest priority; equal
    /// priorities resolve to the later arrival.
    pub fn lowest_precedence(&self) -> Option<CoreId> {
        let mut worst: Option<(CoreId, Priority, Tick)> = None;
        for (core, job) in self.running() {
            let beats = worst.map_or(true, |(_, priority, arrived)| {
                job.priority > priority || (job.priority == priority && job.arrival_time > arrived)
            });
            if beats {
                worst = Some((core, job.priority, job.arrival_time));
            }
        }
        worst.map(|(core, _, _)| core)
    }
}
