/*!
 * Simulator API
 * Entry points for running one policy or all of them over a process set
 */

mod batch;

pub use batch::{run_all, run_all_parallel};

use crate::core::config::SimulationConfig;
use crate::core::types::{SchedulerResult, Ticks};
use crate::process::{ProcessDescriptor, ProcessRegistry};
use crate::scheduler::{simulate, Policy, SchedulingResult};

/// Validate `descriptors` and simulate `policy` over them
///
/// `quantum` only matters for Round-Robin; `None` uses the default.
pub fn run(
    descriptors: Vec<ProcessDescriptor>,
    policy: Policy,
    quantum: Option<Ticks>,
) -> SchedulerResult<SchedulingResult> {
    let registry = ProcessRegistry::new(descriptors)?;
    simulate(&registry, policy, &config_for(quantum))
}

fn config_for(quantum: Option<Ticks>) -> SimulationConfig {
    match quantum {
        Some(q) => SimulationConfig::default().with_quantum(q),
        None => SimulationConfig::default(),
    }
}
