/*!
 * Scheduler Statistics
 * Aggregate metrics derived from the final process set and Gantt list
 */

use super::types::{GanttEntry, Statistics};
use super::RoundRobinScheduler;
use crate::core::types::Ticks;
use crate::process::Process;

impl Statistics {
    /// Compute metrics over `completed` processes for a run of `makespan` ticks
    ///
    /// Returns `None` when nothing completed or the makespan is zero.
    pub fn compute<'p>(
        completed: impl IntoIterator<Item = &'p Process>,
        gantt: &[GanttEntry],
        makespan: Ticks,
    ) -> Option<Self> {
        let (count, total_waiting, total_turnaround) = completed.into_iter().fold(
            (0usize, 0 as Ticks, 0 as Ticks),
            |(count, waiting, turnaround), p| {
                (count + 1, waiting + p.waiting_time(), turnaround + p.turnaround_time())
            },
        );

        if count == 0 || makespan == 0 {
            return None;
        }

        let busy_time: Ticks = gantt.iter().map(GanttEntry::duration).sum();
        let makespan_f = makespan as f64;

        Some(Self {
            avg_waiting_time: total_waiting as f64 / count as f64,
            avg_turnaround_time: total_turnaround as f64 / count as f64,
            throughput: count as f64 / makespan_f,
            cpu_utilization: 100.0 * busy_time as f64 / makespan_f,
            completed: count,
            makespan,
            busy_time,
        })
    }
}

impl RoundRobinScheduler {
    /// Statistics of the last successful run, `None` if there is none
    ///
    /// Recomputed on every call; never mutates the engine.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::compute(
            self.completed.iter().map(|&index| &self.processes[index]),
            &self.gantt,
            self.current_time,
        )
    }
}
