/*!
 * Timeline Recorder
 * Contiguous, time-ordered execution segments for one run
 */

use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who holds the processor during a segment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Occupant {
    Process(Pid),
    Idle,
}

impl Occupant {
    #[inline]
    pub const fn pid(&self) -> Option<Pid> {
        match self {
            Self::Process(pid) => Some(*pid),
            Self::Idle => None,
        }
    }

    #[inline]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Process(pid) => write!(f, "P{}", pid),
            Self::Idle => f.write_str("idle"),
        }
    }
}

/// Half-open interval `[start_time, end_time)` held by one occupant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineSegment {
    pub occupant: Occupant,
    pub start_time: Ticks,
    pub end_time: Ticks,
}

impl TimelineSegment {
    #[inline]
    pub const fn duration(&self) -> Ticks {
        self.end_time - self.start_time
    }
}

/// Append-only segment log
///
/// Every append starts where the previous segment ended, so the recorded
/// timeline is contiguous by construction.
#[derive(Debug, Clone)]
pub struct TimelineRecorder {
    origin: Ticks,
    segments: Vec<TimelineSegment>,
}

impl TimelineRecorder {
    pub fn new(origin: Ticks) -> Self {
        Self {
            origin,
            segments: Vec::new(),
        }
    }

    /// Current end of the recorded timeline
    #[inline]
    pub fn end(&self) -> Ticks {
        self.segments.last().map_or(self.origin, |s| s.end_time)
    }

    #[inline]
    pub fn origin(&self) -> Ticks {
        self.origin
    }

    /// Run `pid` for `duration`, merging into the last segment if it already
    /// belongs to `pid`
    pub fn extend(&mut self, pid: Pid, duration: Ticks) {
        self.append(Occupant::Process(pid), duration, true);
    }

    /// Run `pid` for `duration` as a fresh dispatch, never merging
    pub fn dispatch(&mut self, pid: Pid, duration: Ticks) {
        self.append(Occupant::Process(pid), duration, false);
    }

    /// Leave the processor idle for `duration`
    pub fn idle(&mut self, duration: Ticks) {
        self.append(Occupant::Idle, duration, true);
    }

    fn append(&mut self, occupant: Occupant, duration: Ticks, merge: bool) {
        assert!(duration > 0, "timeline segment must have positive length");

        let start = self.end();
        if merge {
            if let Some(last) = self.segments.last_mut() {
                if last.occupant == occupant {
                    last.end_time += duration;
                    return;
                }
            }
        }

        self.segments.push(TimelineSegment {
            occupant,
            start_time: start,
            end_time: start + duration,
        });
    }

    #[inline]
    pub fn segments(&self) -> &[TimelineSegment] {
        &self.segments
    }

    /// Total time some process held the processor
    pub fn busy_time(&self) -> Ticks {
        self.segments
            .iter()
            .filter(|s| !s.occupant.is_idle())
            .map(TimelineSegment::duration)
            .sum()
    }

    /// Length from origin to end, idle gaps included
    pub fn span(&self) -> Ticks {
        self.end() - self.origin
    }

    pub fn into_segments(self) -> Vec<TimelineSegment> {
        self.segments
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_coalesces() {
        let mut timeline = TimelineRecorder::new(0);
        timeline.extend(1, 1);
        timeline.extend(1, 1);
        timeline.extend(2, 3);
        timeline.extend(1, 1);

        assert_eq!(
            timeline.segments(),
            &[
                TimelineSegment { occupant: Occupant::Process(1), start_time: 0, end_time: 2 },
                TimelineSegment { occupant: Occupant::Process(2), start_time: 2, end_time: 5 },
                TimelineSegment { occupant: Occupant::Process(1), start_time: 5, end_time: 6 },
            ]
        );
    }

    #[test]
    fn test_dispatch_keeps_boundaries() {
        let mut timeline = TimelineRecorder::new(0);
        timeline.dispatch(3, 2);
        timeline.dispatch(3, 2);
        assert_eq!(timeline.segments().len(), 2);
        assert_eq!(timeline.segments()[1].start_time, 2);
        assert_eq!(timeline.end(), 4);
    }

    #[test]
    fn test_idle_and_busy_time() {
        let mut timeline = TimelineRecorder::new(3);
        timeline.extend(1, 2);
        timeline.idle(1);
        timeline.idle(2);
        timeline.extend(2, 4);

        assert_eq!(timeline.segments().len(), 3);
        assert_eq!(timeline.segments()[0].start_time, 3);
        assert_eq!(timeline.segments()[1].duration(), 3);
        assert_eq!(timeline.busy_time(), 6);
        assert_eq!(timeline.span(), 9);
    }

    #[test]
    fn test_empty_timeline() {
        let timeline = TimelineRecorder::new(0);
        assert_eq!(timeline.end(), 0);
        assert_eq!(timeline.span(), 0);
        assert!(timeline.segments().is_empty());
    }

    #[test]
    #[should_panic]
    fn test_zero_length_segment_is_fatal() {
        TimelineRecorder::new(0).idle(0);
    }
}
