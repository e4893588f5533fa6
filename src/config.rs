/*!
 * Simulation Configuration
 * Workload files and environment overrides
 *
 * Environment variables:
 * - RR_SIM_WORKLOAD: workload JSON path (default: built-in sample)
 * - RR_SIM_QUANTUM: time quantum, overrides the workload file
 * - RR_SIM_OUTPUT: `trace` (default) or `json`
 */

use crate::core::errors::{ConfigError, SchedulerResult};
use crate::core::limits::{DEFAULT_TIME_QUANTUM, ENV_OUTPUT, ENV_QUANTUM, ENV_WORKLOAD};
use crate::scheduler::RoundRobinScheduler;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

/// One process entry of a workload file
///
/// Times are signed so negative values reach process validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    pub id: String,
    pub arrival_time: i64,
    pub burst_time: i64,
}

/// A set of processes plus an optional quantum
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_quantum: Option<i64>,
    pub processes: Vec<ProcessSpec>,
}

impl Workload {
    /// Four-process demonstration workload
    pub fn sample() -> Self {
        let processes = [("P1", 0, 8), ("P2", 1, 4), ("P3", 2, 9), ("P4", 3, 5)]
            .into_iter()
            .map(|(id, arrival_time, burst_time)| ProcessSpec {
                id: id.to_string(),
                arrival_time,
                burst_time,
            })
            .collect();

        Self {
            time_quantum: Some(DEFAULT_TIME_QUANTUM as i64),
            processes,
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let workload = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            processes = workload.processes.len(),
            "Workload loaded"
        );
        Ok(workload)
    }

    /// Register every process with a fresh scheduler
    pub fn build_scheduler(&self) -> SchedulerResult<RoundRobinScheduler> {
        let mut scheduler = RoundRobinScheduler::new();
        for spec in &self.processes {
            scheduler.add(spec.id.as_str(), spec.arrival_time, spec.burst_time)?;
        }
        Ok(scheduler)
    }
}

/// What the binary prints after a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Trace,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" | "text" | "txt" => Ok(Self::Trace),
            "json" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                key: ENV_OUTPUT,
                value: s.to_string(),
            }),
        }
    }
}

/// Fully resolved configuration for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub workload: Workload,
    pub time_quantum: i64,
    pub output: OutputFormat,
    pub workload_path: Option<PathBuf>,
}

impl SimulationConfig {
    /// Resolve from the process environment
    ///
    /// An explicit path (first CLI argument) wins over RR_SIM_WORKLOAD.
    pub fn from_env(path_arg: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::resolve(path_arg, |key| std::env::var(key).ok())
    }

    /// Resolve with a custom variable lookup
    pub fn resolve(
        path_arg: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let workload_path = path_arg.or_else(|| lookup(ENV_WORKLOAD).map(PathBuf::from));

        let workload = match &workload_path {
            Some(path) => Workload::from_path(path)?,
            None => Workload::sample(),
        };

        let time_quantum = match lookup(ENV_QUANTUM) {
            Some(raw) => raw
                .trim()
                .parse::<i64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: ENV_QUANTUM,
                    value: raw.clone(),
                })?,
            None => workload
                .time_quantum
                .unwrap_or(DEFAULT_TIME_QUANTUM as i64),
        };

        let output = match lookup(ENV_OUTPUT) {
            Some(raw) => raw.parse()?,
            None => OutputFormat::default(),
        };

        info!(
            workload = workload_path
                .as_ref()
                .map_or_else(|| "<sample>".to_string(), |p| p.display().to_string()),
            time_quantum,
            ?output,
            "Configuration resolved"
        );

        Ok(Self {
            workload,
            time_quantum,
            output,
            workload_path,
        })
    }
}
