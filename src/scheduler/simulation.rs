/*!
 * Round-Robin Simulation
 * The single synchronous pass that advances simulated time
 */

use super::types::{GanttEntry, TimeQuantum};
use crate::core::types::Ticks;
use crate::history::{HistorySnapshot, ProcessSnapshot};
use crate::process::{Process, ProcessState};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Everything one run produces, committed to the engine in one step
#[derive(Debug)]
pub(super) struct SimulationOutcome {
    pub makespan: Ticks,
    pub completed: Vec<usize>,
    pub gantt: Vec<GanttEntry>,
    pub history: Vec<HistorySnapshot>,
    pub idle_ticks: Ticks,
}

/// In-flight simulation state
///
/// `processes` is the arrival-ordered arena; the ready queue and completed
/// list hold indices into it. Processes `[next_arrival..]` have not arrived.
pub(super) struct Simulation<'a> {
    processes: &'a mut [Process],
    quantum: Ticks,
    time: Ticks,
    next_arrival: usize,
    ready_queue: VecDeque<usize>,
    last_dispatch_end: Vec<Option<Ticks>>,
    completed: Vec<usize>,
    gantt: Vec<GanttEntry>,
    history: Vec<HistorySnapshot>,
    idle_ticks: Ticks,
}

impl<'a> Simulation<'a> {
    /// Reset every process and prepare an empty run
    pub fn new(processes: &'a mut [Process], quantum: TimeQuantum) -> Self {
        processes.iter_mut().for_each(Process::reset);
        let len = processes.len();

        Self {
            processes,
            quantum: quantum.as_ticks(),
            time: 0,
            next_arrival: 0,
            ready_queue: VecDeque::with_capacity(len),
            last_dispatch_end: vec![None; len],
            completed: Vec::with_capacity(len),
            gantt: Vec::new(),
            history: Vec::new(),
            idle_ticks: 0,
        }
    }

    /// Run to completion
    ///
    /// Terminates because every dispatch strictly decreases the dispatched
    /// process's remaining time and arrived processes never return to pending.
    pub fn run(mut self) -> SimulationOutcome {
        while self.next_arrival < self.processes.len() || !self.ready_queue.is_empty() {
            self.admit_arrivals();

            match self.ready_queue.pop_front() {
                Some(index) => self.dispatch(index),
                None => self.idle_tick(),
            }
        }

        SimulationOutcome {
            makespan: self.time,
            completed: self.completed,
            gantt: self.gantt,
            history: self.history,
            idle_ticks: self.idle_ticks,
        }
    }

    /// Move every arrived process to the ready queue tail, in arena order
    fn admit_arrivals(&mut self) {
        while let Some(process) = self.processes.get_mut(self.next_arrival) {
            if process.arrival_time() > self.time {
                break;
            }
            process.state = ProcessState::Ready;
            trace!(pid = %process.id(), time = self.time, "Process arrived");
            self.ready_queue.push_back(self.next_arrival);
            self.next_arrival += 1;
        }
    }

    fn idle_tick(&mut self) {
        self.time += 1;
        self.idle_ticks += 1;
        trace!(time = self.time, "CPU idle");
        self.record(None);
    }

    /// Give one process the CPU for at most one quantum
    fn dispatch(&mut self, index: usize) {
        let now = self.time;
        let eligible_since = self.last_dispatch_end[index];

        let process = &mut self.processes[index];
        if process.start_time.is_none() {
            process.start_time = Some(now);
        }
        process.waiting_time += now - eligible_since.unwrap_or(process.arrival_time());
        process.state = ProcessState::Running;

        let slice = self.quantum.min(process.remaining_time);
        let entry = GanttEntry {
            process_id: process.id().clone(),
            start: now,
            end: now + slice,
        };

        self.record(Some(index));

        debug!(
            pid = %entry.process_id,
            start = entry.start,
            end = entry.end,
            "Dispatched process"
        );
        self.gantt.push(entry);
        self.time += slice;
        self.last_dispatch_end[index] = Some(self.time);

        let process = &mut self.processes[index];
        process.remaining_time -= slice;

        if process.remaining_time == 0 {
            process.completion_time = self.time;
            process.turnaround_time = process.completion_time - process.arrival_time();
            process.state = ProcessState::Terminated;
            debug!(
                pid = %process.id(),
                completion = process.completion_time,
                turnaround = process.turnaround_time,
                waiting = process.waiting_time,
                "Process terminated"
            );
            self.completed.push(index);
        } else {
            process.state = ProcessState::Waiting;
            self.ready_queue.push_back(index);
        }

        self.record(None);
    }

    /// Append a snapshot of the whole system at the current time
    fn record(&mut self, current: Option<usize>) {
        let id_of = |index: &usize| self.processes[*index].id().clone();

        let snapshot = HistorySnapshot {
            time: self.time,
            current_process_id: current.as_ref().map(id_of),
            ready_queue_ids: self.ready_queue.iter().map(id_of).collect(),
            completed_process_ids: self.completed.iter().map(id_of).collect(),
            processes: self.processes.iter().map(ProcessSnapshot::from).collect(),
        };
        self.history.push(snapshot);
    }
}
