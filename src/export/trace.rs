/*!
 * Trace Export
 * Line-oriented text rendering of a complete run
 *
 * Everything is derived from the history and statistics, so the same run
 * always renders to the same bytes.
 */

use crate::core::limits::{EMPTY_LIST_LABEL, IDLE_LABEL, TRACE_RULE, TRACE_TITLE};
use crate::core::types::ProcessId;
use crate::history::HistorySnapshot;
use crate::scheduler::{RoundRobinScheduler, Statistics, TimeQuantum};
use std::fmt;

/// Text trace of one run
#[derive(Debug, Clone)]
pub struct TraceExport<'a> {
    time_quantum: TimeQuantum,
    process_count: usize,
    history: &'a [HistorySnapshot],
    statistics: Option<Statistics>,
}

impl<'a> TraceExport<'a> {
    /// Build from raw parts; `None` for an empty history
    pub fn new(
        time_quantum: TimeQuantum,
        process_count: usize,
        history: &'a [HistorySnapshot],
        statistics: Option<Statistics>,
    ) -> Option<Self> {
        if history.is_empty() {
            return None;
        }
        Some(Self {
            time_quantum,
            process_count,
            history,
            statistics,
        })
    }

    /// Build from the scheduler's last run; `None` if it has not run
    pub fn from_scheduler(scheduler: &'a RoundRobinScheduler) -> Option<Self> {
        Self::new(
            scheduler.time_quantum()?,
            scheduler.len(),
            scheduler.history(),
            scheduler.statistics(),
        )
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

// Fractional digits at which every reported statistic prints exactly
const EXACT_DIGITS: usize = 100;

/// Fixed-point text with `digits` decimals, exact ties rounded away from zero
fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return format!("{:.*}", digits, value);
    }

    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format!("{:.*}", digits, value);
    };
    let rest = &frac_part[digits..];
    let is_tie = rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0');
    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    // Round the kept digits up by one unit in the last place
    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..digits].bytes())
        .collect();
    let mut carry = true;
    for digit in kept.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            carry = false;
            break;
        }
    }
    if carry {
        kept.insert(0, b'1');
    }

    let split = kept.len() - digits;
    let mut out = String::with_capacity(kept.len() + 2);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(kept[..split].iter().map(|&b| b as char));
    if digits > 0 {
        out.push('.');
        out.extend(kept[split..].iter().map(|&b| b as char));
    }
    out
}

fn join_ids(ids: &[ProcessId]) -> String {
    if ids.is_empty() {
        return EMPTY_LIST_LABEL.to_string();
    }
    ids.iter()
        .map(ProcessId::as_str)
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for TraceExport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_time = self.history.last().map_or(0, |s| s.time);

        writeln!(f, "{}", TRACE_TITLE)?;
        writeln!(f, "{}", TRACE_RULE)?;
        writeln!(f, "Time Quantum: {}", self.time_quantum.as_ticks())?;
        writeln!(f, "Total Processes: {}", self.process_count)?;
        writeln!(f, "Total Simulation Time: {}", total_time)?;
        writeln!(f)?;

        writeln!(f, "Time\tCurrent Process\tReady Queue\tCompleted Processes")?;
        writeln!(f, "----\t---------------\t-----------\t-------------------")?;

        for snapshot in self.history {
            let current = snapshot
                .current_process_id
                .as_ref()
                .map_or(IDLE_LABEL, ProcessId::as_str);
            writeln!(
                f,
                "{}\t{}\t\t{}\t\t{}",
                snapshot.time,
                current,
                join_ids(&snapshot.ready_queue_ids),
                join_ids(&snapshot.completed_process_ids)
            )?;
        }

        if let Some(stats) = &self.statistics {
            writeln!(f)?;
            writeln!(f, "Statistics:")?;
            writeln!(
                f,
                "- Average Waiting Time: {}",
                to_fixed(stats.avg_waiting_time, 2)
            )?;
            writeln!(
                f,
                "- Average Turnaround Time: {}",
                to_fixed(stats.avg_turnaround_time, 2)
            )?;
            writeln!(f, "- Throughput: {}", to_fixed(stats.throughput, 3))?;
            writeln!(f, "- CPU Utilization: {}%", to_fixed(stats.cpu_utilization, 1))?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_trace_before_run() {
        let mut scheduler = RoundRobinScheduler::new();
        assert!(TraceExport::from_scheduler(&scheduler).is_none());

        scheduler.add("P1", 0, 1).unwrap();
        assert!(TraceExport::from_scheduler(&scheduler).is_none());
    }

    #[test]
    fn test_single_process_trace() {
        let mut scheduler = RoundRobinScheduler::new();
        scheduler.add("P1", 0, 2).unwrap();
        scheduler.run(4).unwrap();

        let trace = TraceExport::from_scheduler(&scheduler).unwrap().render();
        let expected = "\
Round Robin Scheduling Execution Trace
=========================================
Time Quantum: 4
Total Processes: 1
Total Simulation Time: 2

Time\tCurrent Process\tReady Queue\tCompleted Processes
----\t---------------\t-----------\t-------------------
0\tP1\t\t-\t\t-
2\tIDLE\t\t-\t\tP1

Statistics:
- Average Waiting Time: 0.00
- Average Turnaround Time: 2.00
- Throughput: 0.500
- CPU Utilization: 100.0%
";
        assert_eq!(trace, expected);
    }

    #[test]
    fn test_to_fixed_rounds_ties_up() {
        assert_eq!(to_fixed(6.25, 1), "6.3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
        assert_eq!(to_fixed(0.0625, 3), "0.063");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(-2.5, 0), "-3");
        assert_eq!(to_fixed(99.5, 0), "100");
        assert_eq!(to_fixed(9.95, 1), "9.9");
    }

    #[test]
    fn test_to_fixed_matches_plain_formatting_off_ties() {
        assert_eq!(to_fixed(13.0, 2), "13.00");
        assert_eq!(to_fixed(4.0 / 26.0, 3), "0.154");
        assert_eq!(to_fixed(400.0 / 7.0, 1), "57.1");
        assert_eq!(to_fixed(1.005, 2), "1.00");
        assert_eq!(to_fixed(9.96, 1), "10.0");
    }

    #[test]
    fn test_join_ids() {
        assert_eq!(join_ids(&[]), "-");
        assert_eq!(join_ids(&[ProcessId::from("P1"), ProcessId::from("P2")]), "P1 P2");
    }
}
