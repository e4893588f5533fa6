/*!
 * Process Input Validation
 * Field checks applied before a process can be registered
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::MIN_BURST_TIME;
use crate::core::types::{ProcessId, Ticks};

/// Validate a process id and strip surrounding whitespace
pub(super) fn validate_id(id: ProcessId) -> SchedulerResult<ProcessId> {
    let trimmed = id.as_str().trim();
    if trimmed.is_empty() {
        return Err(SchedulerError::InvalidInput(
            "process id cannot be empty".to_string(),
        ));
    }
    if trimmed.len() == id.as_str().len() {
        return Ok(id);
    }
    Ok(ProcessId::from(trimmed))
}

/// Validate arrival time (>= 0)
pub(super) fn validate_arrival_time(arrival_time: i64) -> SchedulerResult<Ticks> {
    Ticks::try_from(arrival_time).map_err(|_| {
        SchedulerError::InvalidInput(format!(
            "arrival time must be >= 0, got {}",
            arrival_time
        ))
    })
}

/// Validate burst time (>= 1)
pub(super) fn validate_burst_time(burst_time: i64) -> SchedulerResult<Ticks> {
    if burst_time < MIN_BURST_TIME {
        return Err(SchedulerError::InvalidInput(format!(
            "burst time must be >= {}, got {}",
            MIN_BURST_TIME, burst_time
        )));
    }
    Ok(burst_time as Ticks)
}
