/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use super::types::ProcessId;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Scheduling engine errors
///
/// Every variant is recoverable: the engine keeps its prior state after a
/// rejected call.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Invalid process input: {0}")]
    #[diagnostic(
        code(scheduler::invalid_input),
        help("Process ids must be non-empty, arrival time must be >= 0 and burst time >= 1.")
    )]
    InvalidInput(String),

    #[error("Process {0} is already registered")]
    #[diagnostic(
        code(scheduler::duplicate_id),
        help("Use a different process id or clear the scheduler first.")
    )]
    DuplicateId(ProcessId),

    #[error("Invalid time quantum: {0} (must be >= 1)")]
    #[diagnostic(
        code(scheduler::invalid_quantum),
        help("Supply a time quantum of at least one tick.")
    )]
    InvalidQuantum(i64),

    #[error("No processes to simulate")]
    #[diagnostic(
        code(scheduler::no_processes),
        help("Add at least one process before running the simulation.")
    )]
    NoProcesses,
}

/// Configuration loading errors
#[derive(Error, Debug, Diagnostic)]
pub enum ConfigError {
    #[error("Failed to read workload file {path}: {source}")]
    #[diagnostic(
        code(config::io_error),
        help("Check that the workload file exists and is readable.")
    )]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse workload: {0}")]
    #[diagnostic(
        code(config::parse_error),
        help("Workload files are JSON: {{\"time_quantum\": 3, \"processes\": [{{\"id\": \"P1\", \"arrival_time\": 0, \"burst_time\": 5}}]}}")
    )]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for {key}: {value}")]
    #[diagnostic(
        code(config::invalid_value),
        help("Review the RR_SIM_* environment variables.")
    )]
    InvalidValue { key: &'static str, value: String },
}

/// Unified simulator error type with miette diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum SimError {
    #[error("Scheduler error: {0}")]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("Configuration error: {0}")]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    #[diagnostic(
        code(sim::export_error),
        help("Run a simulation before exporting its trace.")
    )]
    Export(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduler_error_serialization() {
        let err = SchedulerError::DuplicateId(ProcessId::from("P1"));
        let json = serde_json::to_string(&err).unwrap();
        assert_eq!(json, r#"{"error_type":"duplicate_id","details":"P1"}"#);

        let back: SchedulerError = serde_json::from_str(&json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_error_kinds_are_distinguishable() {
        let errors = [
            SchedulerError::InvalidInput("burst".into()),
            SchedulerError::DuplicateId("P1".into()),
            SchedulerError::InvalidQuantum(0),
            SchedulerError::NoProcesses,
        ];
        for (i, a) in errors.iter().enumerate() {
            for (j, b) in errors.iter().enumerate() {
                assert_eq!(
                    std::mem::discriminant(a) == std::mem::discriminant(b),
                    i == j
                );
            }
        }
    }

    #[test]
    fn test_sim_error_wraps_scheduler_error() {
        let err: SimError = SchedulerError::NoProcesses.into();
        assert!(matches!(err, SimError::Scheduler(SchedulerError::NoProcesses)));
        assert_eq!(err.to_string(), "Scheduler error: No processes to simulate");
    }
}
