/*!
 * Process Types
 * The schedulable unit of work and its derived metrics
 */

use super::validation::{validate_arrival_time, validate_burst_time, validate_id};
use crate::core::errors::SchedulerResult;
use crate::core::types::{ProcessId, Ticks};
use serde::{Deserialize, Serialize};

/// Process state
///
/// `Ready` and `Waiting` both mean "queued, not on the CPU"; `Waiting`
/// additionally means the process has run at least once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessState {
    /// Eligible and queued, never dispatched yet in this run
    Ready,
    /// Holding the CPU
    Running,
    /// Preempted after a slice, back in the ready queue
    Waiting,
    /// All work done (absorbing)
    Terminated,
}

impl ProcessState {
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ready => "ready",
            Self::Running => "running",
            Self::Waiting => "waiting",
            Self::Terminated => "terminated",
        }
    }

    #[inline]
    pub const fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// One schedulable unit of work
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Process {
    id: ProcessId,
    arrival_time: Ticks,
    burst_time: Ticks,
    pub(crate) remaining_time: Ticks,
    pub(crate) waiting_time: Ticks,
    pub(crate) turnaround_time: Ticks,
    pub(crate) completion_time: Ticks,
    pub(crate) start_time: Option<Ticks>,
    pub(crate) state: ProcessState,
}

impl Process {
    /// Create a process, validating its fields
    ///
    /// Times are accepted as signed integers so that negative input is
    /// reported as [`SchedulerError::InvalidInput`](crate::SchedulerError)
    /// instead of being unrepresentable at the call site. Surrounding
    /// whitespace is stripped from the id.
    pub fn new(
        id: impl Into<ProcessId>,
        arrival_time: i64,
        burst_time: i64,
    ) -> SchedulerResult<Self> {
        let id = validate_id(id.into())?;
        let arrival_time = validate_arrival_time(arrival_time)?;
        let burst_time = validate_burst_time(burst_time)?;

        Ok(Self {
            id,
            arrival_time,
            burst_time,
            remaining_time: burst_time,
            waiting_time: 0,
            turnaround_time: 0,
            completion_time: 0,
            start_time: None,
            state: ProcessState::Ready,
        })
    }

    /// Restore the pre-simulation state so the process can be re-run
    pub fn reset(&mut self) {
        self.remaining_time = self.burst_time;
        self.waiting_time = 0;
        self.turnaround_time = 0;
        self.completion_time = 0;
        self.start_time = None;
        self.state = ProcessState::Ready;
    }

    #[inline]
    pub fn id(&self) -> &ProcessId {
        &self.id
    }

    #[inline]
    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    #[inline]
    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    #[inline]
    pub fn remaining_time(&self) -> Ticks {
        self.remaining_time
    }

    #[inline]
    pub fn waiting_time(&self) -> Ticks {
        self.waiting_time
    }

    #[inline]
    pub fn turnaround_time(&self) -> Ticks {
        self.turnaround_time
    }

    #[inline]
    pub fn completion_time(&self) -> Ticks {
        self.completion_time
    }

    /// Time of the first dispatch, if the process has run
    #[inline]
    pub fn start_time(&self) -> Option<Ticks> {
        self.start_time
    }

    #[inline]
    pub fn state(&self) -> ProcessState {
        self.state
    }

    /// Time between arrival and first dispatch
    pub fn response_time(&self) -> Option<Ticks> {
        self.start_time.map(|start| start - self.arrival_time)
    }
}
