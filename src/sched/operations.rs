/*!
 * Scheduler Event Operations
 * Arrival, completion, and quantum-expiration entry points
 */

use super::job::Job;
use super::policy::Policy;
use super::Scheduler;
use crate::core::types::{CoreId, JobId, Priority, Tick};
use log::debug;

impl Scheduler {
    /// A new job has been announced by the simulator
    ///
    /// Returns the core the job was placed or preempted onto, or `None`
    /// when no scheduling change is required.
    pub fn new_job(
        &mut self,
        id: JobId,
        now: Tick,
        run_time: Tick,
        priority: Priority,
    ) -> Option<CoreId> {
        debug_assert!(run_time >= 1, "job {} announced with zero run time", id);

        let job = Job::new(id, now, run_time, priority);

        if let Some(core) = self.cores.find_idle() {
            self.place(core, job, now);
            debug!("job {} arrived at tick {}: idle core {}", id, now, core);
            return Some(core);
        }

        match self.policy {
            Policy::Psjf => {
                // Every arrival refreshes remaining times, preemption or not
                self.cores.refresh_remaining(now);
                let worst = self
                    .cores
                    .longest_remaining()
                    .expect("no idle core, so the table cannot be empty");
                let remaining = self
                    .cores
                    .get(worst)
                    .expect("worst-running core is occupied")
                    .remaining_run_time;
                if remaining > run_time {
                    return Some(self.preempt(worst, job, now));
                }
            }
            Policy::Ppri => {
                let worst = self
                    .cores
                    .lowest_precedence()
                    .expect("no idle core, so the table cannot be empty");
                let worst_priority = self
                    .cores
                    .get(worst)
                    .expect("worst-running core is occupied")
                    .priority;
                if worst_priority > priority {
                    return Some(self.preempt(worst, job, now));
                }
            }
            _ => {}
        }

        debug!("job {} arrived at tick {}: queued", id, now);
        self.queue.push(job);
        None
    }

    /// The job on `core` has run to completion
    ///
    /// Folds the finished job's times into the aggregates and refills
    /// the core from the queue head. Returns the id of the job now
    /// running on `core`, or `None` when it goes idle.
    pub fn job_finished(&mut self, core: CoreId, id: JobId, now: Tick) -> Option<JobId> {
        let job = self
            .cores
            .take(core)
            .expect("job_finished delivered for an idle core");
        debug_assert_eq!(job.id, id, "finished job does not match core {}", core);

        self.stats.record_completion(&job, now);
        debug!("job {} finished at tick {} on core {}", id, now, core);

        let next = self.queue.pop()?;
        let next_id = next.id;
        self.place(core, next, now);
        debug!("job {} dispatched to core {}", next_id, core);
        Some(next_id)
    }

    /// The round-robin quantum has elapsed on `core`
    ///
    /// The running job, if any, rotates to the queue tail and the head
    /// takes the core. Returns the id of the job now running on `core`,
    /// or `None` when both the core and the queue are empty.
    pub fn quantum_expired(&mut self, core: CoreId, now: Tick) -> Option<JobId> {
        debug_assert!(
            self.policy.uses_quantum(),
            "quantum_expired under policy {}",
            self.policy
        );

        match self.cores.take(core) {
            Some(running) => {
                debug!("quantum expired on core {}: job {} rotated out", core, running.id);
                self.queue.push(running);
            }
            None if self.queue.is_empty() => return None,
            None => {}
        }

        let next = self.queue.pop().expect("queue is non-empty at this point");
        let next_id = next.id;
        self.place(core, next, now);
        self.stats.quantum_rotations += 1;
        Some(next_id)
    }

    /// Install a job on an empty core, settling its bookkeeping
    fn place(&mut self, core: CoreId, mut job: Job, now: Tick) {
        if self.policy == Policy::Psjf {
            job.last_checked_time = now;
        }
        job.dispatch(now);
        self.cores.install(core, job);
        self.stats.dispatches += 1;
    }

    /// Evict the victim on `core`, return it to the queue, install `job`
    fn preempt(&mut self, core: CoreId, job: Job, now: Tick) -> CoreId {
        let mut victim = self
            .cores
            .take(core)
            .expect("preemption targets an occupied core");
        victim.retract_dispatch(now);
        debug!("job {} preempts job {} on core {}", job.id, victim.id, core);
        self.queue.push(victim);
        self.place(core, job, now);
        self.stats.preemptions += 1;
        core
    }
}
