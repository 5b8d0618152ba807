/*!
 * Core Types
 * Common types used across the engine
 */

/// Job ID type
pub type JobId = u32;

/// Core slot index type
pub type CoreId = usize;

/// Simulated time in integer ticks
pub type Tick = u64;

/// Priority level (lower value = higher precedence)
pub type Priority = u32;

/// Common result type for engine operations
pub type SimResult<T> = Result<T, super::errors::SchedulerError>;
