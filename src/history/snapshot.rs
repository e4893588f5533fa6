/*!
 * History Snapshots
 * Immutable, self-sufficient records of the whole system at one instant
 */

use crate::core::types::{ProcessId, Ticks};
use crate::process::{Process, ProcessState};
use serde::{Deserialize, Serialize};

/// Per-process view inside a snapshot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSnapshot {
    pub id: ProcessId,
    pub state: ProcessState,
    pub remaining_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl From<&Process> for ProcessSnapshot {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id().clone(),
            state: p.state(),
            remaining_time: p.remaining_time(),
            waiting_time: p.waiting_time(),
            turnaround_time: p.turnaround_time(),
        }
    }
}

/// Scheduler state at one simulated-time checkpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySnapshot {
    pub time: Ticks,
    /// Process holding the CPU, `None` when idle or between dispatches
    pub current_process_id: Option<ProcessId>,
    /// Ready queue, head first
    pub ready_queue_ids: Vec<ProcessId>,
    /// Terminated processes in completion order
    pub completed_process_ids: Vec<ProcessId>,
    /// Every registered process, in arrival order
    pub processes: Vec<ProcessSnapshot>,
}

impl HistorySnapshot {
    /// True when no process holds the CPU at this checkpoint
    #[inline]
    pub fn is_idle(&self) -> bool {
        self.current_process_id.is_none()
    }

    /// Look up one process by id
    pub fn process(&self, id: &str) -> Option<&ProcessSnapshot> {
        self.processes.iter().find(|p| p.id == *id)
    }
}
