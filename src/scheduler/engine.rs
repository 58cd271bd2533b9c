/*!
 * Scheduler Engine
 * Drives the simulated clock for one policy over one process set
 */

use super::metrics::summarize;
use super::policy::{next_arrival_after, SegmentKind, Selector};
use super::result::{ProcessReport, SchedulingResult};
use super::timeline::TimelineRecorder;
use super::types::Policy;
use crate::core::config::SimulationConfig;
use crate::core::types::SchedulerResult;
use crate::process::{ProcessRegistry, ProcessRuntimeState};
use tracing::{debug, info, info_span};

/// Simulate `policy` over the registry's processes
///
/// Fails only on configuration errors, before any time is simulated. The
/// registry is never mutated; the run works on its own copy of the state.
pub fn simulate(
    registry: &ProcessRegistry,
    policy: Policy,
    config: &SimulationConfig,
) -> SchedulerResult<SchedulingResult> {
    let span = info_span!("simulate", policy = policy.as_str(), processes = registry.len());
    let _guard = span.enter();

    let mut states: Vec<ProcessRuntimeState> = registry
        .descriptors()
        .iter()
        .copied()
        .map(ProcessRuntimeState::new)
        .collect();
    let mut selector = Selector::new(policy, config, &states)?;

    let origin = states
        .iter()
        .map(|s| s.descriptor.arrival_time)
        .min()
        .unwrap_or(0);
    let mut timeline = TimelineRecorder::new(origin);
    let mut now = origin;
    let mut running: Option<usize> = None;
    let mut unfinished = states.len();

    while unfinished > 0 {
        let Some(dispatch) = selector.select(now, &states, running) else {
            // Nothing ready: everything left must arrive later
            let next = match next_arrival_after(&states, now) {
                Some(next) => next,
                None => unreachable!("{} unfinished processes but none ready or pending", unfinished),
            };
            debug!(from = now, to = next, "CPU idle");
            timeline.idle(next - now);
            now = next;
            running = None;
            continue;
        };

        let state = &mut states[dispatch.index];
        let pid = state.id();
        debug!(pid, at = now, slice = dispatch.slice, "Dispatch");

        match dispatch.kind {
            SegmentKind::Continue => timeline.extend(pid, dispatch.slice),
            SegmentKind::Fresh => timeline.dispatch(pid, dispatch.slice),
        }

        let finished = state.execute(now, dispatch.slice);
        now += dispatch.slice;

        if finished {
            unfinished -= 1;
            running = None;
            debug!(pid, at = now, "Process completed");
        } else {
            running = Some(dispatch.index);
        }
    }

    let summary = summarize(&states, &timeline);
    let processes = states.iter().map(ProcessReport::from_finished).collect();
    let result = SchedulingResult::new(policy, processes, timeline.into_segments(), summary);

    info!(
        policy = policy.as_str(),
        avg_waiting = result.avg_waiting_time,
        avg_turnaround = result.avg_turnaround_time,
        cpu_utilization = result.cpu_utilization,
        "Simulation complete"
    );

    Ok(result)
}
