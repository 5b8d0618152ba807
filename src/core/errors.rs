/*!
 * Error Types
 * Centralized error handling with thiserror
 */

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("Invalid scheduling policy: {0}")]
    InvalidPolicy(String),

    #[error("Core count must be at least 1")]
    ZeroCores,
}
