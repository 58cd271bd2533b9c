/*!
 * Process Types
 * Immutable process descriptors and per-run runtime state
 */

use crate::core::types::{Pid, Priority, Ticks, DEFAULT_PRIORITY};
use serde::{Deserialize, Serialize};

/// Immutable description of a process to be scheduled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProcessDescriptor {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

fn default_priority() -> Priority {
    DEFAULT_PRIORITY
}

impl ProcessDescriptor {
    #[inline]
    #[must_use]
    pub const fn new(id: Pid, arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: DEFAULT_PRIORITY,
        }
    }

    #[inline]
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}

/// Mutable bookkeeping for one process during one run
///
/// Each run owns a fresh copy, so two policies simulated over the same
/// descriptors never observe each other's progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRuntimeState {
    pub descriptor: ProcessDescriptor,
    pub remaining_time: Ticks,
    /// Time of first dispatch
    pub start_time: Option<Ticks>,
    pub completion_time: Option<Ticks>,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

impl ProcessRuntimeState {
    #[must_use]
    pub fn new(descriptor: ProcessDescriptor) -> Self {
        Self {
            descriptor,
            remaining_time: descriptor.burst_time,
            start_time: None,
            completion_time: None,
            waiting_time: 0,
            turnaround_time: 0,
        }
    }

    #[inline(always)]
    pub const fn id(&self) -> Pid {
        self.descriptor.id
    }

    /// Arrived by `now` and still has work left
    #[inline(always)]
    pub const fn is_ready(&self, now: Ticks) -> bool {
        self.descriptor.arrival_time <= now && self.remaining_time > 0
    }

    #[inline(always)]
    pub const fn is_finished(&self) -> bool {
        self.remaining_time == 0
    }

    /// Run for `slice` units starting at `now`; returns true on completion
    pub(crate) fn execute(&mut self, now: Ticks, slice: Ticks) -> bool {
        assert!(
            slice > 0 && slice <= self.remaining_time,
            "slice {} out of range for process {} with {} remaining",
            slice,
            self.id(),
            self.remaining_time
        );

        self.start_time.get_or_insert(now);
        self.remaining_time -= slice;

        if self.remaining_time == 0 {
            self.complete(now + slice);
            true
        } else {
            false
        }
    }

    fn complete(&mut self, at: Ticks) {
        self.completion_time = Some(at);
        self.turnaround_time = at - self.descriptor.arrival_time;
        self.waiting_time = self.turnaround_time - self.descriptor.burst_time;
    }

    /// Time from arrival to first dispatch
    pub fn response_time(&self) -> Option<Ticks> {
        self.start_time.map(|s| s - self.descriptor.arrival_time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runtime_state_lifecycle() {
        let desc = ProcessDescriptor::new(1, 2, 5).with_priority(3);
        let mut state = ProcessRuntimeState::new(desc);

        assert!(!state.is_ready(1));
        assert!(state.is_ready(2));
        assert_eq!(state.start_time, None);

        assert!(!state.execute(4, 2));
        assert_eq!(state.start_time, Some(4));
        assert_eq!(state.remaining_time, 3);

        assert!(state.execute(9, 3));
        assert!(state.is_finished());
        assert!(!state.is_ready(20));
        assert_eq!(state.start_time, Some(4));
        assert_eq!(state.completion_time, Some(12));
        assert_eq!(state.turnaround_time, 10);
        assert_eq!(state.waiting_time, 5);
        assert_eq!(state.response_time(), Some(2));
    }

    #[test]
    #[should_panic]
    fn test_overrun_is_fatal() {
        let mut state = ProcessRuntimeState::new(ProcessDescriptor::new(1, 0, 2));
        state.execute(0, 3);
    }

    #[test]
    fn test_descriptor_default_priority() {
        let desc: ProcessDescriptor =
            serde_json::from_str(r#"{"id": 7, "arrival_time": 0, "burst_time": 4}"#).unwrap();
        assert_eq!(desc.priority, DEFAULT_PRIORITY);
    }
}
