/*!
 * JSON Run Report
 * Serializable summary of a run for external players and tooling
 */

use super::palette::color_for;
use crate::core::types::{ProcessId, Ticks};
use crate::history::HistorySnapshot;
use crate::process::Process;
use crate::scheduler::{GanttEntry, RoundRobinScheduler, Statistics, TimeQuantum};
use serde::Serialize;

/// Final metrics of one process
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessReport {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<Ticks>,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_time: Option<Ticks>,
    pub color: &'static str,
}

impl From<&Process> for ProcessReport {
    fn from(p: &Process) -> Self {
        Self {
            id: p.id().clone(),
            arrival_time: p.arrival_time(),
            burst_time: p.burst_time(),
            start_time: p.start_time(),
            completion_time: p.completion_time(),
            waiting_time: p.waiting_time(),
            turnaround_time: p.turnaround_time(),
            response_time: p.response_time(),
            color: color_for(p.id().as_str()),
        }
    }
}

/// Everything a run produced
#[derive(Debug, Clone, Serialize)]
pub struct RunReport<'a> {
    pub time_quantum: TimeQuantum,
    pub makespan: Ticks,
    pub idle_ticks: Ticks,
    pub processes: Vec<ProcessReport>,
    pub gantt_chart: &'a [GanttEntry],
    pub history: &'a [HistorySnapshot],
    pub statistics: Option<Statistics>,
}

impl<'a> RunReport<'a> {
    /// Report of the scheduler's last run; `None` if it has not run
    pub fn from_scheduler(scheduler: &'a RoundRobinScheduler) -> Option<Self> {
        Some(Self {
            time_quantum: scheduler.time_quantum()?,
            makespan: scheduler.current_time(),
            idle_ticks: scheduler.idle_ticks(),
            processes: scheduler.processes().iter().map(ProcessReport::from).collect(),
            gantt_chart: scheduler.gantt_chart(),
            history: scheduler.history(),
            statistics: scheduler.statistics(),
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
