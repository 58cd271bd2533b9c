/*!
 * Scheduling Results
 * Immutable per-run output and its JSON/CSV export
 */

use super::metrics::Summary;
use super::timeline::{Occupant, TimelineSegment};
use super::types::Policy;
use crate::core::types::{Pid, Priority, SchedulerResult, Ticks};
use crate::process::ProcessRuntimeState;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Final timing of one process, joined with its descriptor fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessReport {
    pub id: Pid,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
    pub priority: Priority,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
    pub response_time: Ticks,
}

impl ProcessReport {
    /// Report for a process the engine has run to completion
    pub(super) fn from_finished(state: &ProcessRuntimeState) -> Self {
        let (start_time, completion_time) = match (state.start_time, state.completion_time) {
            (Some(start), Some(completion)) => (start, completion),
            _ => panic!("process {} reported before completing", state.id()),
        };

        Self {
            id: state.id(),
            arrival_time: state.descriptor.arrival_time,
            burst_time: state.descriptor.burst_time,
            priority: state.descriptor.priority,
            start_time,
            completion_time,
            waiting_time: state.waiting_time,
            turnaround_time: state.turnaround_time,
            response_time: start_time - state.descriptor.arrival_time,
        }
    }
}

/// Outcome of simulating one policy over one process set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchedulingResult {
    pub policy: Policy,
    #[serde(rename = "algorithm")]
    pub algorithm_name: String,
    pub processes: Vec<ProcessReport>,
    pub timeline: Vec<TimelineSegment>,
    pub avg_waiting_time: f64,
    pub avg_turnaround_time: f64,
    pub avg_response_time: f64,
    pub cpu_utilization: f64,
}

impl SchedulingResult {
    pub(super) fn new(
        policy: Policy,
        processes: Vec<ProcessReport>,
        timeline: Vec<TimelineSegment>,
        summary: Summary,
    ) -> Self {
        Self {
            policy,
            algorithm_name: policy.display_name().to_string(),
            processes,
            timeline,
            avg_waiting_time: summary.avg_waiting_time,
            avg_turnaround_time: summary.avg_turnaround_time,
            avg_response_time: summary.avg_response_time,
            cpu_utilization: summary.cpu_utilization,
        }
    }

    pub fn process(&self, id: Pid) -> Option<&ProcessReport> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Time at which the last process finished
    pub fn makespan(&self) -> Ticks {
        self.timeline.last().map_or(0, |s| s.end_time)
    }

    /// Number of times the processor passed from one process to another
    pub fn context_switches(&self) -> usize {
        self.timeline
            .iter()
            .filter_map(|s| s.occupant.pid())
            .collect::<Vec<_>>()
            .windows(2)
            .filter(|w| w[0] != w[1])
            .count()
    }

    pub fn to_json(&self) -> SchedulerResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the per-process table, statistics and timeline as CSV-style text
    pub fn write_csv<W: Write>(&self, mut out: W) -> SchedulerResult<()> {
        writeln!(out, "Algorithm: {}", self.algorithm_name)?;
        writeln!(out)?;
        writeln!(out, "Process Results:")?;
        writeln!(out, "ID,Arrival,Burst,Priority,Start,Complete,Wait,Turnaround,Response")?;
        for p in &self.processes {
            writeln!(
                out,
                "{},{},{},{},{},{},{},{},{}",
                p.id,
                p.arrival_time,
                p.burst_time,
                p.priority,
                p.start_time,
                p.completion_time,
                p.waiting_time,
                p.turnaround_time,
                p.response_time
            )?;
        }

        writeln!(out)?;
        writeln!(out, "Statistics:")?;
        writeln!(out, "Avg Waiting Time: {:.2}", self.avg_waiting_time)?;
        writeln!(out, "Avg Turnaround Time: {:.2}", self.avg_turnaround_time)?;
        writeln!(out, "Avg Response Time: {:.2}", self.avg_response_time)?;
        writeln!(out, "CPU Utilization: {:.2}%", self.cpu_utilization)?;

        writeln!(out)?;
        writeln!(out, "Timeline:")?;
        for segment in &self.timeline {
            let label = match segment.occupant {
                Occupant::Process(pid) => format!("P{}", pid),
                Occupant::Idle => "IDLE".to_string(),
            };
            writeln!(out, "{} [{}-{}]", label, segment.start_time, segment.end_time)?;
        }

        Ok(())
    }
}
