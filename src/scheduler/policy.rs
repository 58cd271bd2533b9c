/*!
 * Scheduling Policies
 * Per-run selection state and the dispatch decision for each policy
 */

use super::types::{Policy, TimeQuantum};
use crate::core::config::SimulationConfig;
use crate::core::types::{SchedulerResult, Ticks};
use crate::process::ProcessRuntimeState;
use std::collections::VecDeque;

/// How the engine should record a dispatched slice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum SegmentKind {
    /// Merge with the previous segment if the occupant is unchanged
    Continue,
    /// Always open a new segment
    Fresh,
}

/// One decision: run `index` for `slice` time units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Dispatch {
    pub index: usize,
    pub slice: Ticks,
    pub kind: SegmentKind,
}

/// Selection state for one run of one policy
#[derive(Debug)]
pub(super) enum Selector {
    Fcfs,
    ShortestJob,
    ShortestRemaining,
    Priority,
    PreemptivePriority,
    RoundRobin(RoundRobinQueue),
}

impl Selector {
    /// Build the selector for `policy`; only Round-Robin consults the quantum
    pub fn new(
        policy: Policy,
        config: &SimulationConfig,
        states: &[ProcessRuntimeState],
    ) -> SchedulerResult<Self> {
        Ok(match policy {
            Policy::Fcfs => Self::Fcfs,
            Policy::ShortestJobFirst => Self::ShortestJob,
            Policy::ShortestRemainingTime => Self::ShortestRemaining,
            Policy::Priority => Self::Priority,
            Policy::PreemptivePriority => Self::PreemptivePriority,
            Policy::RoundRobin => {
                let quantum = TimeQuantum::new(config.time_quantum)?;
                Self::RoundRobin(RoundRobinQueue::new(quantum, states))
            }
        })
    }

    /// Pick what runs at `now`, or `None` if nothing is ready
    ///
    /// `running` is the process that held the processor up to `now` and has
    /// not finished; preemptive policies keep it on ties.
    pub fn select(
        &mut self,
        now: Ticks,
        states: &[ProcessRuntimeState],
        running: Option<usize>,
    ) -> Option<Dispatch> {
        match self {
            Self::Fcfs => {
                let index = best_ready(states, now, |s| s.descriptor.arrival_time)?;
                Some(run_to_completion(states, index))
            }
            Self::ShortestJob => {
                let index = best_ready(states, now, |s| s.descriptor.burst_time)?;
                Some(run_to_completion(states, index))
            }
            Self::Priority => {
                let index = best_ready(states, now, |s| s.descriptor.priority)?;
                Some(run_to_completion(states, index))
            }
            Self::ShortestRemaining => {
                let key = |s: &ProcessRuntimeState| s.remaining_time;
                let index = preemptive_choice(states, now, running, key)?;
                Some(run_until_next_arrival(states, now, index))
            }
            Self::PreemptivePriority => {
                let key = |s: &ProcessRuntimeState| s.descriptor.priority;
                let index = preemptive_choice(states, now, running, key)?;
                Some(run_until_next_arrival(states, now, index))
            }
            Self::RoundRobin(queue) => queue.select(now, states),
        }
    }
}

/// Ready process with the smallest `key`, lowest id on ties
fn best_ready<K, F>(states: &[ProcessRuntimeState], now: Ticks, key: F) -> Option<usize>
where
    K: Ord,
    F: Fn(&ProcessRuntimeState) -> K,
{
    states
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_ready(now))
        .min_by_key(|(_, s)| (key(s), s.id()))
        .map(|(i, _)| i)
}

/// Best ready process, but the running one is only displaced by a strictly
/// smaller key
fn preemptive_choice<K, F>(
    states: &[ProcessRuntimeState],
    now: Ticks,
    running: Option<usize>,
    key: F,
) -> Option<usize>
where
    K: Ord,
    F: Fn(&ProcessRuntimeState) -> K,
{
    let best = best_ready(states, now, &key)?;

    match running {
        Some(current) if states[current].is_ready(now) => {
            if key(&states[best]) < key(&states[current]) {
                Some(best)
            } else {
                Some(current)
            }
        }
        _ => Some(best),
    }
}

fn run_to_completion(states: &[ProcessRuntimeState], index: usize) -> Dispatch {
    Dispatch {
        index,
        slice: states[index].remaining_time,
        kind: SegmentKind::Continue,
    }
}

/// Preemptive decisions can only change when a process arrives or finishes,
/// so the chosen process runs until whichever comes first.
fn run_until_next_arrival(states: &[ProcessRuntimeState], now: Ticks, index: usize) -> Dispatch {
    let remaining = states[index].remaining_time;
    let slice = match next_arrival_after(states, now) {
        Some(arrival) => remaining.min(arrival - now),
        None => remaining,
    };

    Dispatch {
        index,
        slice,
        kind: SegmentKind::Continue,
    }
}

/// Earliest arrival strictly after `now`
pub(super) fn next_arrival_after(states: &[ProcessRuntimeState], now: Ticks) -> Option<Ticks> {
    states
        .iter()
        .map(|s| s.descriptor.arrival_time)
        .filter(|&arrival| arrival > now)
        .min()
}

/// FIFO ready queue for Round-Robin
#[derive(Debug)]
pub(super) struct RoundRobinQueue {
    quantum: TimeQuantum,
    /// Process indices sorted by (arrival, id)
    arrivals: Vec<usize>,
    next_arrival: usize,
    ready: VecDeque<usize>,
    /// Process dispatched by the previous decision, requeued on the next one
    last: Option<usize>,
}

impl RoundRobinQueue {
    fn new(quantum: TimeQuantum, states: &[ProcessRuntimeState]) -> Self {
        let mut arrivals: Vec<usize> = (0..states.len()).collect();
        arrivals.sort_by_key(|&i| (states[i].descriptor.arrival_time, states[i].id()));

        Self {
            quantum,
            arrivals,
            next_arrival: 0,
            ready: VecDeque::with_capacity(states.len()),
            last: None,
        }
    }

    fn select(&mut self, now: Ticks, states: &[ProcessRuntimeState]) -> Option<Dispatch> {
        // Arrivals up to and including `now` go in before the preempted process
        while let Some(&index) = self.arrivals.get(self.next_arrival) {
            if states[index].descriptor.arrival_time > now {
                break;
            }
            self.ready.push_back(index);
            self.next_arrival += 1;
        }

        if let Some(prev) = self.last.take() {
            if !states[prev].is_finished() {
                self.ready.push_back(prev);
            }
        }

        let index = self.ready.pop_front()?;
        self.last = Some(index);

        Some(Dispatch {
            index,
            slice: states[index].remaining_time.min(self.quantum.ticks()),
            kind: SegmentKind::Fresh,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::errors::SchedulerError;
    use crate::process::ProcessDescriptor;

    fn states(procs: &[(u32, i64, i64, i32)]) -> Vec<ProcessRuntimeState> {
        procs
            .iter()
            .map(|&(id, arrival, burst, priority)| {
                ProcessRuntimeState::new(
                    ProcessDescriptor::new(id, arrival, burst).with_priority(priority),
                )
            })
            .collect()
    }

    fn selector(policy: Policy, states: &[ProcessRuntimeState]) -> Selector {
        Selector::new(policy, &SimulationConfig::default(), states).unwrap()
    }

    #[test]
    fn test_fcfs_picks_earliest_then_lowest_id() {
        let s = states(&[(3, 1, 4, 1), (2, 1, 9, 1), (1, 2, 1, 1)]);
        let mut sel = selector(Policy::Fcfs, &s);
        let d = sel.select(2, &s, None).unwrap();
        assert_eq!(d.index, 1);
        assert_eq!(d.slice, 9);
    }

    #[test]
    fn test_nothing_ready() {
        let s = states(&[(1, 5, 2, 1)]);
        for policy in Policy::ALL {
            let mut sel = selector(policy, &s);
            assert_eq!(sel.select(4, &s, None), None, "{}", policy);
        }
    }

    #[test]
    fn test_sjf_and_priority_keys() {
        let s = states(&[(1, 0, 6, 1), (2, 0, 2, 3), (3, 0, 2, 0)]);

        let d = selector(Policy::ShortestJobFirst, &s).select(0, &s, None).unwrap();
        assert_eq!(s[d.index].id(), 2);

        let d = selector(Policy::Priority, &s).select(0, &s, None).unwrap();
        assert_eq!(s[d.index].id(), 3);
    }

    #[test]
    fn test_srtf_keeps_running_on_tie() {
        let mut s = states(&[(2, 0, 5, 1), (1, 2, 3, 1)]);
        s[0].remaining_time = 3;

        let mut sel = selector(Policy::ShortestRemainingTime, &s);
        let d = sel.select(2, &s, Some(0)).unwrap();
        assert_eq!(s[d.index].id(), 2);

        // Without a running process the lower id wins the tie
        let d = sel.select(2, &s, None).unwrap();
        assert_eq!(s[d.index].id(), 1);
    }

    #[test]
    fn test_srtf_slice_stops_at_next_arrival() {
        let s = states(&[(1, 0, 8, 1), (2, 3, 2, 1)]);
        let d = selector(Policy::ShortestRemainingTime, &s).select(0, &s, None).unwrap();
        assert_eq!(d.index, 0);
        assert_eq!(d.slice, 3);
    }

    #[test]
    fn test_preemptive_priority_displaces_only_on_strictly_better() {
        let s = states(&[(1, 0, 8, 2), (2, 1, 2, 2), (3, 1, 2, 1)]);
        let mut sel = selector(Policy::PreemptivePriority, &s);
        let d = sel.select(1, &s, Some(0)).unwrap();
        assert_eq!(s[d.index].id(), 3);

        let s = states(&[(1, 0, 8, 2), (2, 1, 2, 2)]);
        let mut sel = selector(Policy::PreemptivePriority, &s);
        let d = sel.select(1, &s, Some(0)).unwrap();
        assert_eq!(s[d.index].id(), 1);
    }

    #[test]
    fn test_round_robin_requires_positive_quantum() {
        let s = states(&[(1, 0, 2, 1)]);
        let err = Selector::new(Policy::RoundRobin, &SimulationConfig::new(0), &s).unwrap_err();
        assert!(matches!(err, SchedulerError::InvalidConfiguration(_)));

        // Other policies ignore the quantum
        assert!(Selector::new(Policy::Fcfs, &SimulationConfig::new(0), &s).is_ok());
    }

    #[test]
    fn test_round_robin_enqueues_arrivals_before_requeue() {
        let mut s = states(&[(1, 0, 5, 1), (2, 1, 3, 1), (3, 2, 8, 1)]);
        let mut sel = selector(Policy::RoundRobin, &s);

        let d = sel.select(0, &s, None).unwrap();
        assert_eq!((d.index, d.slice, d.kind), (0, 2, SegmentKind::Fresh));
        s[0].execute(0, 2);

        let d = sel.select(2, &s, Some(0)).unwrap();
        assert_eq!(s[d.index].id(), 2);

        let Selector::RoundRobin(queue) = &sel else {
            unreachable!()
        };
        let queued: Vec<u32> = queue.ready.iter().map(|&i| s[i].id()).collect();
        assert_eq!(queued, vec![3, 1]);
    }

    #[test]
    fn test_next_arrival_after() {
        let s = states(&[(1, 0, 1, 1), (2, 4, 1, 1), (3, 7, 1, 1)]);
        assert_eq!(next_arrival_after(&s, 0), Some(4));
        assert_eq!(next_arrival_after(&s, 4), Some(7));
        assert_eq!(next_arrival_after(&s, 7), None);
    }
}
