/*!
 * Scheduling Metrics
 * Averages and CPU utilization derived from a finished run
 */

use super::timeline::TimelineRecorder;
use crate::core::types::Ticks;
use crate::process::ProcessRuntimeState;
use serde::{Deserialize, Serialize};

/// Aggregate figures for one run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Summary {
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    /// Percentage of the run's span during which a process held the CPU
    pub cpu_utilization: f64,
}

/// Compute averages over all processes and utilization over the timeline
///
/// An empty process set or a zero-length span yields zeros rather than a
/// division fault.
pub fn summarize(states: &[ProcessRuntimeState], timeline: &TimelineRecorder) -> Summary {
    if states.is_empty() {
        return Summary::default();
    }

    let count = states.len() as f64;
    let mean = |f: fn(&ProcessRuntimeState) -> Ticks| -> f64 {
        states.iter().map(|s| f(s) as f64).sum::<f64>() / count
    };

    let total_burst: Ticks = states.iter().map(|s| s.descriptor.burst_time).sum();
    let span = timeline.span();

    Summary {
        avg_waiting_time: mean(|s| s.waiting_time),
        avg_turnaround_time: mean(|s| s.turnaround_time),
        avg_response_time: mean(|s| s.response_time().unwrap_or(0)),
        cpu_utilization: utilization(total_burst, span),
    }
}

#[inline]
fn utilization(busy: Ticks, span: Ticks) -> f64 {
    if span <= 0 {
        0.0
    } else {
        busy as f64 / span as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;

    fn finished(id: u32, arrival: i64, burst: i64, start: i64) -> ProcessRuntimeState {
        let mut state = ProcessRuntimeState::new(ProcessDescriptor::new(id, arrival, burst));
        state.execute(start, burst);
        state
    }

    #[test]
    fn test_averages() {
        let states = vec![finished(1, 0, 5, 0), finished(2, 1, 3, 5), finished(3, 2, 8, 8)];
        let mut timeline = TimelineRecorder::new(0);
        timeline.extend(1, 5);
        timeline.extend(2, 3);
        timeline.extend(3, 8);

        let summary = summarize(&states, &timeline);
        assert!((summary.avg_waiting_time - 10.0 / 3.0).abs() < 1e-9);
        assert!((summary.avg_turnaround_time - 26.0 / 3.0).abs() < 1e-9);
        assert!((summary.avg_response_time - 10.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.cpu_utilization, 100.0);
    }

    #[test]
    fn test_utilization_with_idle_gap() {
        let states = vec![finished(1, 0, 2, 0), finished(2, 4, 2, 4)];
        let mut timeline = TimelineRecorder::new(0);
        timeline.extend(1, 2);
        timeline.idle(2);
        timeline.extend(2, 2);

        let summary = summarize(&states, &timeline);
        // 4 busy units over a 6 unit span
        assert!((summary.cpu_utilization - 200.0 / 3.0).abs() < 1e-9);
        assert_eq!(summary.avg_waiting_time, 0.0);
    }

    #[test]
    fn test_empty_is_zero() {
        let summary = summarize(&[], &TimelineRecorder::new(0));
        assert_eq!(summary, Summary::default());
        assert_eq!(utilization(10, 0), 0.0);
    }
}
