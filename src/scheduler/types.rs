/*!
 * Scheduler Types
 * Domain types for the round-robin engine
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::MIN_TIME_QUANTUM;
use crate::core::types::{ProcessId, Ticks};
use serde::{Deserialize, Deserializer, Serialize};

/// Time quantum configuration
///
/// Maximum CPU time granted per dispatch before preemption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create new time quantum, rejecting anything below one tick
    pub fn new(ticks: i64) -> SchedulerResult<Self> {
        if ticks < MIN_TIME_QUANTUM {
            return Err(SchedulerError::InvalidQuantum(ticks));
        }
        Ok(Self(ticks as Ticks))
    }

    #[inline(always)]
    pub const fn as_ticks(&self) -> Ticks {
        self.0
    }
}

impl<'de> Deserialize<'de> for TimeQuantum {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let ticks = i64::deserialize(deserializer)?;
        Self::new(ticks).map_err(serde::de::Error::custom)
    }
}

/// One CPU interval `[start, end)` held by a single process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GanttEntry {
    pub process_id: ProcessId,
    pub start: Ticks,
    pub end: Ticks,
}

impl GanttEntry {
    #[inline]
    pub fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Aggregate metrics over the completed processes of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    /// Completed processes per tick
    pub throughput: f64,
    /// Percentage of the makespan the CPU was busy
    pub cpu_utilization: f64,
    pub completed: usize,
    pub makespan: Ticks,
    pub busy_time: Ticks,
}
