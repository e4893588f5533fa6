/*!
 * Round-Robin Scheduler
 * Owns the process collection and runs fixed-quantum simulations
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::types::{ProcessId, Ticks};
use crate::history::HistorySnapshot;
use crate::monitoring::SimulationSpan;
use crate::process::Process;
use ahash::AHashSet;
use tracing::{info, warn};

mod simulation;
mod stats;
pub mod types;

use simulation::Simulation;
pub use types::{GanttEntry, Statistics, TimeQuantum};

/// Round-robin scheduling engine
///
/// Processes live once in an arrival-ordered arena; the completed list holds
/// indices into it. Gantt entries and history snapshots are append-only
/// during a run and exposed only as shared slices afterwards.
#[derive(Debug, Default)]
pub struct RoundRobinScheduler {
    // Ascending arrival time, ties in insertion order
    processes: Vec<Process>,
    ids: AHashSet<ProcessId>,

    // Results of the last successful run
    completed: Vec<usize>,
    gantt: Vec<GanttEntry>,
    history: Vec<HistorySnapshot>,
    quantum: Option<TimeQuantum>,
    current_time: Ticks,
    idle_ticks: Ticks,
}

impl RoundRobinScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a process
    ///
    /// Keeps the collection ordered by arrival time; processes with equal
    /// arrival times keep their insertion order. Results of a previous run
    /// are discarded since they no longer describe the registered set.
    pub fn add_process(&mut self, process: Process) -> SchedulerResult<()> {
        if self.ids.contains(process.id()) {
            warn!(pid = %process.id(), "Rejected duplicate process id");
            return Err(SchedulerError::DuplicateId(process.id().clone()));
        }

        let position = self
            .processes
            .partition_point(|p| p.arrival_time() <= process.arrival_time());
        info!(
            pid = %process.id(),
            arrival = process.arrival_time(),
            burst = process.burst_time(),
            "Process added to scheduler"
        );
        self.ids.insert(process.id().clone());
        self.processes.insert(position, process);
        self.discard_run();
        Ok(())
    }

    /// Create and register a process in one step
    pub fn add(
        &mut self,
        id: impl Into<ProcessId>,
        arrival_time: i64,
        burst_time: i64,
    ) -> SchedulerResult<()> {
        self.add_process(Process::new(id, arrival_time, burst_time)?)
    }

    /// Remove every process and all results
    pub fn clear(&mut self) {
        self.processes.clear();
        self.ids.clear();
        self.discard_run();
        info!("Scheduler cleared");
    }

    /// Run the simulation to completion with the given quantum
    ///
    /// Returns the makespan. Rejected calls leave the previous run's
    /// results untouched.
    pub fn run(&mut self, time_quantum: i64) -> SchedulerResult<Ticks> {
        let quantum = match TimeQuantum::new(time_quantum) {
            Ok(quantum) => quantum,
            Err(e) => {
                warn!(time_quantum, "Rejected invalid time quantum");
                return Err(e);
            }
        };
        if self.processes.is_empty() {
            warn!("Rejected run with no processes");
            return Err(SchedulerError::NoProcesses);
        }

        let span = SimulationSpan::new(quantum.as_ticks(), self.processes.len());
        let outcome = span
            .span()
            .in_scope(|| Simulation::new(&mut self.processes, quantum).run());
        span.finish(outcome.makespan);

        self.completed = outcome.completed;
        self.gantt = outcome.gantt;
        self.history = outcome.history;
        self.quantum = Some(quantum);
        self.current_time = outcome.makespan;
        self.idle_ticks = outcome.idle_ticks;

        info!(
            makespan = self.current_time,
            idle_ticks = self.idle_ticks,
            dispatches = self.gantt.len(),
            snapshots = self.history.len(),
            "Simulation complete"
        );
        Ok(self.current_time)
    }

    fn discard_run(&mut self) {
        self.completed.clear();
        self.gantt.clear();
        self.history.clear();
        self.quantum = None;
        self.current_time = 0;
        self.idle_ticks = 0;
        self.processes.iter_mut().for_each(Process::reset);
    }

    /// Registered processes, arrival-ordered
    pub fn processes(&self) -> &[Process] {
        &self.processes
    }

    pub fn process(&self, id: &str) -> Option<&Process> {
        self.processes.iter().find(|p| p.id() == id)
    }

    /// Completed processes in completion order
    pub fn completed(&self) -> impl Iterator<Item = &Process> + '_ {
        self.completed.iter().map(|&index| &self.processes[index])
    }

    pub fn gantt_chart(&self) -> &[GanttEntry] {
        &self.gantt
    }

    pub fn history(&self) -> &[HistorySnapshot] {
        &self.history
    }

    /// Quantum of the last successful run
    pub fn time_quantum(&self) -> Option<TimeQuantum> {
        self.quantum
    }

    /// Makespan of the last successful run (0 before any run)
    pub fn current_time(&self) -> Ticks {
        self.current_time
    }

    /// Idle ticks recorded in the last successful run
    pub fn idle_ticks(&self) -> Ticks {
        self.idle_ticks
    }

    pub fn has_run(&self) -> bool {
        self.quantum.is_some()
    }

    pub fn len(&self) -> usize {
        self.processes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
