/*!
 * Scheduler Statistics
 * Aggregate accounting and end-of-run averages
 */

use super::job::Job;
use super::policy::Policy;
use super::Scheduler;
use crate::core::types::{CoreId, JobId, Priority, Tick};
use serde::{Deserialize, Serialize};

/// Running totals, folded in only on completion
#[derive(Debug, Default)]
pub(crate) struct Aggregates {
    pub waiting_total: u64,
    pub turnaround_total: u64,
    pub response_total: u64,
    pub finished_jobs: u64,
    pub dispatches: u64,
    pub preemptions: u64,
    pub quantum_rotations: u64,
}

impl Aggregates {
    pub fn record_completion(&mut self, job: &Job, now: Tick) {
        self.waiting_total += now - job.arrival_time - job.original_run_time;
        self.turnaround_total += now - job.arrival_time;
        self.response_total += job
            .response_time
            .expect("completed job was never dispatched");
        self.finished_jobs += 1;
    }
}

/// Point-in-time scheduler statistics
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SchedulerStats {
    pub policy: Policy,
    pub cores: usize,
    pub active_jobs: usize,
    pub finished_jobs: u64,
    pub dispatches: u64,
    pub preemptions: u64,
    pub quantum_rotations: u64,
}

/// Per-job snapshot for debugging and the driving harness
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct JobStats {
    pub id: JobId,
    pub priority: Priority,
    pub arrival_time: Tick,
    pub original_run_time: Tick,
    pub remaining_run_time: Tick,
    pub response_time: Option<Tick>,
    /// Core the job is running on; `None` while pending
    pub core: Option<CoreId>,
}

impl JobStats {
    fn snapshot(job: &Job, core: Option<CoreId>) -> Self {
        Self {
            id: job.id,
            priority: job.priority,
            arrival_time: job.arrival_time,
            original_run_time: job.original_run_time,
            remaining_run_time: job.remaining_run_time,
            response_time: job.response_time,
            core,
        }
    }
}

impl Scheduler {
    /// Snapshot of the engine's counters
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats {
            policy: self.policy,
            cores: self.cores.len(),
            active_jobs: self.len(),
            finished_jobs: self.stats.finished_jobs,
            dispatches: self.stats.dispatches,
            preemptions: self.stats.preemptions,
            quantum_rotations: self.stats.quantum_rotations,
        }
    }

    /// Average waiting time across finished jobs
    ///
    /// Meaningful only once at least one job has finished.
    pub fn avg_waiting_time(&self) -> f64 {
        self.finished_guard();
        self.stats.waiting_total as f64 / self.stats.finished_jobs as f64
    }

    /// Average turnaround time across finished jobs
    ///
    /// Meaningful only once at least one job has finished.
    pub fn avg_turnaround_time(&self) -> f64 {
        self.finished_guard();
        self.stats.turnaround_total as f64 / self.stats.finished_jobs as f64
    }

    /// Average response time across finished jobs
    ///
    /// Meaningful only once at least one job has finished.
    pub fn avg_response_time(&self) -> f64 {
        self.finished_guard();
        self.stats.response_total as f64 / self.stats.finished_jobs as f64
    }

    /// Snapshot one job by id, wherever it currently resides
    pub fn job_stats(&self, id: JobId) -> Option<JobStats> {
        if let Some((core, job)) = self.cores.running().find(|(_, job)| job.id == id) {
            return Some(JobStats::snapshot(job, Some(core)));
        }
        self.queue
            .iter()
            .find(|job| job.id == id)
            .map(|job| JobStats::snapshot(job, None))
    }

    /// Snapshot every live job: running jobs in core order, then
    /// pending jobs in queue order
    pub fn all_job_stats(&self) -> Vec<JobStats> {
        let mut stats: Vec<JobStats> = self
            .cores
            .running()
            .map(|(core, job)| JobStats::snapshot(job, Some(core)))
            .collect();
        stats.extend(self.queue.iter().map(|job| JobStats::snapshot(job, None)));
        stats
    }

    fn finished_guard(&self) {
        debug_assert!(
            self.stats.finished_jobs > 0,
            "averages requested before any job finished"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_completion_arithmetic() {
        let mut aggregates = Aggregates::default();

        let mut job = Job::new(1, 2, 5, 0);
        job.dispatch(4); // response = 2
        aggregates.record_completion(&job, 12);

        assert_eq!(aggregates.turnaround_total, 10);
        assert_eq!(aggregates.waiting_total, 5);
        assert_eq!(aggregates.response_total, 2);
        assert_eq!(aggregates.finished_jobs, 1);
    }

    #[test]
    fn test_completion_sums_accumulate() {
        let mut aggregates = Aggregates::default();

        let mut first = Job::new(1, 0, 3, 0);
        first.dispatch(0);
        aggregates.record_completion(&first, 3);

        let mut second = Job::new(2, 1, 2, 0);
        second.dispatch(3);
        aggregates.record_completion(&second, 5);

        assert_eq!(aggregates.finished_jobs, 2);
        assert_eq!(aggregates.turnaround_total, 3 + 4);
        assert_eq!(aggregates.waiting_total, 0 + 2);
        assert_eq!(aggregates.response_total, 0 + 2);
    }
}
