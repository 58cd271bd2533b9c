/*!
 * Result Tables
 * Per-run process tables and the cross-policy comparison
 */

use crate::scheduler::SchedulingResult;
use std::fmt::Write;

const RULE: &str = "+-----+----------+----------+----------+----------+----------+----------+------------+";

/// Render one result: header, process table and statistics
pub fn render_result(result: &SchedulingResult) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Algorithm: {}", result.algorithm_name);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "| {:>3} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8} | {:>10} |",
        "ID", "Arrival", "Burst", "Priority", "Start", "Complete", "Wait", "Turnaround"
    );
    let _ = writeln!(out, "{}", RULE);
    for p in &result.processes {
        let _ = writeln!(
            out,
            "| {:>3} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8} | {:>8} | {:>10} |",
            p.id,
            p.arrival_time,
            p.burst_time,
            p.priority,
            p.start_time,
            p.completion_time,
            p.waiting_time,
            p.turnaround_time
        );
    }
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "Average Waiting Time:    {:.2}", result.avg_waiting_time);
    let _ = writeln!(out, "Average Turnaround Time: {:.2}", result.avg_turnaround_time);
    let _ = writeln!(out, "Average Response Time:   {:.2}", result.avg_response_time);
    let _ = writeln!(out, "CPU Utilization:         {:.2}%", result.cpu_utilization);
    out
}

/// Policy with the lowest average waiting time; earlier entries win ties
pub fn best_by_waiting(results: &[SchedulingResult]) -> Option<&SchedulingResult> {
    results.iter().reduce(|best, r| {
        if r.avg_waiting_time < best.avg_waiting_time {
            r
        } else {
            best
        }
    })
}

/// Side-by-side averages for several runs over the same input
pub fn render_comparison(results: &[SchedulingResult]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<32} {:>10} {:>12} {:>10} {:>8}",
        "Algorithm", "Avg Wait", "Avg Turnard", "Avg Resp", "CPU %"
    );
    for r in results {
        let _ = writeln!(
            out,
            "{:<32} {:>10.2} {:>12.2} {:>10.2} {:>8.2}",
            r.algorithm_name,
            r.avg_waiting_time,
            r.avg_turnaround_time,
            r.avg_response_time,
            r.cpu_utilization
        );
    }
    if let Some(best) = best_by_waiting(results) {
        let _ = writeln!(
            out,
            "Lowest average waiting time: {} ({:.2})",
            best.algorithm_name, best.avg_waiting_time
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::run_all;
    use crate::core::config::SimulationConfig;
    use crate::process::{ProcessDescriptor, ProcessRegistry};
    use crate::scheduler::Policy;

    fn results() -> Vec<SchedulingResult> {
        let registry = ProcessRegistry::new(vec![
            ProcessDescriptor::new(1, 0, 5).with_priority(2),
            ProcessDescriptor::new(2, 1, 3).with_priority(1),
            ProcessDescriptor::new(3, 2, 8).with_priority(3),
        ])
        .unwrap();
        run_all(&registry, &SimulationConfig::default()).unwrap()
    }

    #[test]
    fn test_render_result() {
        let text = render_result(&results()[0]);
        assert!(text.starts_with("Algorithm: FCFS (First Come First Serve)\n"));
        assert!(text.contains("Average Waiting Time:    3.33"));
        assert!(text.contains("CPU Utilization:         100.00%"));
    }

    #[test]
    fn test_best_by_waiting() {
        let results = results();
        // SRTF and preemptive priority tie at 3.0; the earlier one wins
        let best = best_by_waiting(&results).unwrap();
        assert_eq!(best.policy, Policy::ShortestRemainingTime);
        assert_eq!(best.avg_waiting_time, 3.0);
        assert!(best_by_waiting(&[]).is_none());
    }

    #[test]
    fn test_render_comparison_lists_every_run() {
        let results = results();
        let text = render_comparison(&results);
        for r in &results {
            assert!(text.contains(&r.algorithm_name));
        }
        assert!(text.contains("Lowest average waiting time:"));
    }
}
