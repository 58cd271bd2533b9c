/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::Pid;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Simulator errors with serialization support
///
/// Every variant is raised before a run starts; a simulation over validated
/// input never fails part-way.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process {pid}: {reason}")]
    #[diagnostic(
        code(scheduler::invalid_process),
        help("Process ids must be unique and positive, arrival >= 0 and burst > 0.")
    )]
    InvalidProcess { pid: Pid, reason: String },

    #[error("Invalid configuration: {0}")]
    #[diagnostic(
        code(scheduler::invalid_configuration),
        help("Round-Robin requires a positive time quantum.")
    )]
    InvalidConfiguration(String),

    #[error("Unknown scheduling policy '{0}'")]
    #[diagnostic(
        code(scheduler::unknown_policy),
        help("Valid: fcfs, sjf, srtf, priority, priority_p, rr (or 1-6).")
    )]
    UnknownPolicy(String),

    #[error("Parse error on line {line}: {reason}")]
    #[diagnostic(
        code(scheduler::parse_error),
        help("Rows must be 'id,arrival,burst[,priority]' or whitespace separated.")
    )]
    Parse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    #[diagnostic(
        code(scheduler::io_error),
        help("Filesystem operation failed. Check the path and permissions.")
    )]
    Io(String),
}

impl SchedulerError {
    pub(crate) fn invalid_process(pid: Pid, reason: impl Into<String>) -> Self {
        SchedulerError::InvalidProcess {
            pid,
            reason: reason.into(),
        }
    }
}

// Implement conversion from std::io::Error
impl From<std::io::Error> for SchedulerError {
    fn from(err: std::io::Error) -> Self {
        SchedulerError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for SchedulerError {
    fn from(err: serde_json::Error) -> Self {
        SchedulerError::Io(format!("JSON encoding failed: {}", err))
    }
}
