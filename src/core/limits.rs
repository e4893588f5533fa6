/*!
 * Simulator Limits and Constants
 *
 * Centralized location for defaults, labels, and magic numbers.
 */

use super::types::Ticks;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Default round-robin time quantum (ticks)
/// Used when neither the workload file nor RR_SIM_QUANTUM provides one
pub const DEFAULT_TIME_QUANTUM: Ticks = 3;

/// Smallest accepted time quantum
pub const MIN_TIME_QUANTUM: i64 = 1;

/// Smallest accepted burst time
pub const MIN_BURST_TIME: i64 = 1;

// =============================================================================
// TRACE EXPORT
// =============================================================================

/// Trace title line
pub const TRACE_TITLE: &str = "Round Robin Scheduling Execution Trace";

/// Underline printed below the title
pub const TRACE_RULE: &str = "=========================================";

/// Current-process column value when the CPU is not held
pub const IDLE_LABEL: &str = "IDLE";

/// Placeholder for an empty id list
pub const EMPTY_LIST_LABEL: &str = "-";

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Workload file path
pub const ENV_WORKLOAD: &str = "RR_SIM_WORKLOAD";

/// Time quantum override
pub const ENV_QUANTUM: &str = "RR_SIM_QUANTUM";

/// Output format (`trace` or `json`)
pub const ENV_OUTPUT: &str = "RR_SIM_OUTPUT";

/// JSON log output toggle
pub const ENV_TRACE_JSON: &str = "RR_SIM_TRACE_JSON";
