/*!
 * Round-Robin Scheduling Simulator
 * Deterministic fixed-quantum CPU scheduling with replayable history
 */

pub mod config;
pub mod core;
pub mod export;
pub mod history;
pub mod monitoring;
pub mod process;
pub mod scheduler;

// Re-exports
pub use crate::core::errors::{ConfigError, SchedulerError, SchedulerResult, SimError};
pub use crate::core::types::{ProcessId, SimResult, Ticks};
pub use config::{OutputFormat, ProcessSpec, SimulationConfig, Workload};
pub use export::{color_for, RunReport, TraceExport};
pub use history::{HistorySnapshot, Playback, ProcessSnapshot};
pub use monitoring::init_tracing;
pub use process::{Process, ProcessState};
pub use scheduler::{GanttEntry, RoundRobinScheduler, Statistics, TimeQuantum};
