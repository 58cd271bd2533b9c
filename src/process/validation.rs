/*!
 * Process Descriptor Validation
 * Reject malformed input before any simulation starts
 */

use super::types::ProcessDescriptor;
use crate::core::errors::SchedulerError;
use crate::core::types::{SchedulerResult, Ticks};
use std::collections::HashSet;

/// Validate a single descriptor
pub(super) fn validate_descriptor(desc: &ProcessDescriptor) -> SchedulerResult<()> {
    if desc.id == 0 {
        return Err(SchedulerError::invalid_process(
            desc.id,
            "process id must be positive",
        ));
    }

    if desc.arrival_time < 0 {
        return Err(SchedulerError::invalid_process(
            desc.id,
            format!("arrival time {} is negative", desc.arrival_time),
        ));
    }

    if desc.burst_time <= 0 {
        return Err(SchedulerError::invalid_process(
            desc.id,
            format!("burst time {} must be positive", desc.burst_time),
        ));
    }

    Ok(())
}

/// Validate a whole set: every descriptor, id uniqueness, then the time range
pub(super) fn validate_set(descriptors: &[ProcessDescriptor]) -> SchedulerResult<()> {
    let mut seen = HashSet::with_capacity(descriptors.len());

    for desc in descriptors {
        validate_descriptor(desc)?;

        if !seen.insert(desc.id) {
            return Err(SchedulerError::invalid_process(desc.id, "duplicate process id"));
        }
    }

    validate_horizon(descriptors)
}

/// The last completion can be no later than `max(arrival) + sum(burst)`;
/// that bound must fit the clock type.
fn validate_horizon(descriptors: &[ProcessDescriptor]) -> SchedulerResult<()> {
    let latest_arrival = descriptors.iter().map(|d| d.arrival_time).max().unwrap_or(0);

    let mut horizon = latest_arrival;
    for desc in descriptors {
        horizon = horizon.checked_add(desc.burst_time).ok_or_else(|| {
            SchedulerError::invalid_process(
                desc.id,
                "arrival and burst times overflow the simulation clock",
            )
        })?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_descriptor() {
        assert!(validate_descriptor(&ProcessDescriptor::new(1, 0, 1)).is_ok());
        assert!(validate_descriptor(&ProcessDescriptor::new(9, 40, 3).with_priority(-2)).is_ok());
    }

    #[test]
    fn test_rejects_bad_fields() {
        assert!(validate_descriptor(&ProcessDescriptor::new(0, 0, 1)).is_err());
        assert!(validate_descriptor(&ProcessDescriptor::new(1, -1, 1)).is_err());
        assert!(validate_descriptor(&ProcessDescriptor::new(1, 0, 0)).is_err());
        assert!(validate_descriptor(&ProcessDescriptor::new(1, 0, -4)).is_err());
    }

    #[test]
    fn test_rejects_duplicates() {
        let set = [
            ProcessDescriptor::new(1, 0, 2),
            ProcessDescriptor::new(2, 1, 2),
            ProcessDescriptor::new(1, 3, 2),
        ];
        match validate_set(&set) {
            Err(SchedulerError::InvalidProcess { pid, reason }) => {
                assert_eq!(pid, 1);
                assert!(reason.contains("duplicate"));
            }
            other => panic!("expected duplicate rejection, got {:?}", other),
        }
    }

    #[test]
    fn test_rejects_clock_overflow() {
        let late = [ProcessDescriptor::new(1, Ticks::MAX - 2, 5)];
        assert!(matches!(
            validate_set(&late),
            Err(SchedulerError::InvalidProcess { pid: 1, .. })
        ));

        let huge = [
            ProcessDescriptor::new(1, 0, Ticks::MAX / 2 + 1),
            ProcessDescriptor::new(2, 0, Ticks::MAX / 2 + 1),
        ];
        assert!(matches!(
            validate_set(&huge),
            Err(SchedulerError::InvalidProcess { pid: 2, .. })
        ));

        // Right at the limit is still accepted
        let edge = [ProcessDescriptor::new(1, Ticks::MAX - 5, 5)];
        assert!(validate_set(&edge).is_ok());
    }

    #[test]
    fn test_empty_set_is_valid() {
        assert!(validate_set(&[]).is_ok());
    }
}
