/*!
 * Scheduling Policies
 * Policy-dependent queue ordering and preemption rules
 */

use super::job::Job;
use crate::core::errors::SchedulerError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Scheduling policy, fixed at start-up
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// First come, first served
    Fcfs,
    /// Shortest job first (non-preemptive)
    Sjf,
    /// Preemptive shortest job first
    Psjf,
    /// Priority order, lower value wins (non-preemptive)
    Pri,
    /// Preemptive priority
    Ppri,
    /// Round-robin with an externally driven quantum
    RoundRobin,
}

impl Policy {
    /// Whether a new arrival may evict a running job
    #[inline]
    #[must_use]
    pub const fn is_preemptive(self) -> bool {
        matches!(self, Policy::Psjf | Policy::Ppri)
    }

    /// Whether the simulator drives this policy with quantum expirations
    #[inline]
    #[must_use]
    pub const fn uses_quantum(self) -> bool {
        matches!(self, Policy::RoundRobin)
    }

    /// Ready-queue total order between two pending jobs
    ///
    /// The FIFO policies rank every newcomer after the whole queue, so
    /// insertion degenerates to an append. Under the other policies a
    /// tie compares `Equal` and the queue inserts after equals, keeping
    /// the order stable.
    pub(crate) fn compare(self, a: &Job, b: &Job) -> Ordering {
        match self {
            Policy::Fcfs | Policy::RoundRobin => Ordering::Greater,
            Policy::Sjf => a.original_run_time.cmp(&b.original_run_time),
            Policy::Psjf => a.remaining_run_time.cmp(&b.remaining_run_time),
            Policy::Pri | Policy::Ppri => a
                .priority
                .cmp(&b.priority)
                .then_with(|| a.arrival_time.cmp(&b.arrival_time)),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Policy::Fcfs => "fcfs",
            Policy::Sjf => "sjf",
            Policy::Psjf => "psjf",
            Policy::Pri => "pri",
            Policy::Ppri => "ppri",
            Policy::RoundRobin => "round_robin",
        };
        f.write_str(name)
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fcfs" => Ok(Policy::Fcfs),
            "sjf" => Ok(Policy::Sjf),
            "psjf" => Ok(Policy::Psjf),
            "pri" => Ok(Policy::Pri),
            "ppri" => Ok(Policy::Ppri),
            "rr" | "round_robin" => Ok(Policy::RoundRobin),
            other => Err(SchedulerError::InvalidPolicy(other.into())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(id: u32, arrival: u64, run: u64, priority: u32) -> Job {
        Job::new(id, arrival, run, priority)
    }

    #[test]
    fn test_fifo_policies_always_rank_after() {
        let a = job(1, 5, 1, 0);
        let b = job(2, 0, 99, 9);

        assert_eq!(Policy::Fcfs.compare(&a, &b), Ordering::Greater);
        assert_eq!(Policy::RoundRobin.compare(&a, &b), Ordering::Greater);
        // Unconditional, even with arguments swapped
        assert_eq!(Policy::Fcfs.compare(&b, &a), Ordering::Greater);
    }

    #[test]
    fn test_sjf_orders_by_original_run_time() {
        let short = job(1, 0, 2, 0);
        let long = job(2, 0, 7, 0);

        assert_eq!(Policy::Sjf.compare(&short, &long), Ordering::Less);
        assert_eq!(Policy::Sjf.compare(&long, &short), Ordering::Greater);
    }

    #[test]
    fn test_psjf_orders_by_remaining_run_time() {
        let mut a = job(1, 0, 9, 0);
        let b = job(2, 0, 5, 0);
        assert_eq!(Policy::Psjf.compare(&a, &b), Ordering::Greater);

        // Progress changes the ranking
        a.remaining_run_time = 3;
        assert_eq!(Policy::Psjf.compare(&a, &b), Ordering::Less);
    }

    #[test]
    fn test_priority_tie_breaks_on_arrival() {
        let early = job(1, 2, 5, 4);
        let late = job(2, 6, 5, 4);
        let better = job(3, 9, 5, 1);

        assert_eq!(Policy::Pri.compare(&early, &late), Ordering::Less);
        assert_eq!(Policy::Ppri.compare(&better, &early), Ordering::Less);
    }

    #[test]
    fn test_policy_predicates() {
        assert!(Policy::Psjf.is_preemptive());
        assert!(Policy::Ppri.is_preemptive());
        assert!(!Policy::Sjf.is_preemptive());
        assert!(!Policy::RoundRobin.is_preemptive());

        assert!(Policy::RoundRobin.uses_quantum());
        assert!(!Policy::Fcfs.uses_quantum());
    }

    #[test]
    fn test_parse_and_display() {
        for name in ["fcfs", "sjf", "psjf", "pri", "ppri", "round_robin"] {
            let policy: Policy = name.parse().unwrap();
            assert_eq!(policy.to_string(), name);
        }
        assert_eq!("rr".parse::<Policy>().unwrap(), Policy::RoundRobin);
        assert_eq!("PPRI".parse::<Policy>().unwrap(), Policy::Ppri);

        assert!(matches!(
            "lottery".parse::<Policy>(),
            Err(SchedulerError::InvalidPolicy(_))
        ));
    }
}
