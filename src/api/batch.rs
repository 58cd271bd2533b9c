/*!
 * Batch Executor
 * Runs every policy over one process set, in sequence or in parallel
 */

use crate::core::config::SimulationConfig;
use crate::core::types::SchedulerResult;
use crate::process::ProcessRegistry;
use crate::scheduler::{simulate, Policy, SchedulingResult};
use futures::future::join_all;
use tracing::info;

/// Run all six policies one after another, in `Policy::ALL` order
pub fn run_all(
    registry: &ProcessRegistry,
    config: &SimulationConfig,
) -> SchedulerResult<Vec<SchedulingResult>> {
    Policy::ALL
        .iter()
        .map(|&policy| simulate(registry, policy, config))
        .collect()
}

/// Run all six policies on blocking worker threads, in `Policy::ALL` order
///
/// Runs share only the frozen registry; each owns its runtime state, so no
/// coordination is needed beyond joining the results.
pub async fn run_all_parallel(
    registry: ProcessRegistry,
    config: SimulationConfig,
) -> SchedulerResult<Vec<SchedulingResult>> {
    info!(processes = registry.len(), "Running all policies in parallel");

    let tasks: Vec<_> = Policy::ALL
        .into_iter()
        .map(|policy| {
            let registry = registry.clone();
            tokio::task::spawn_blocking(move || simulate(&registry, policy, &config))
        })
        .collect();

    let mut output = Vec::with_capacity(tasks.len());
    for joined in join_all(tasks).await {
        match joined {
            Ok(result) => output.push(result?),
            Err(e) if e.is_panic() => std::panic::resume_unwind(e.into_panic()),
            // Blocking tasks are never aborted
            Err(e) => unreachable!("simulation task cancelled: {}", e),
        }
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessDescriptor;

    fn registry() -> ProcessRegistry {
        ProcessRegistry::new(vec![
            ProcessDescriptor::new(1, 0, 5).with_priority(2),
            ProcessDescriptor::new(2, 1, 3).with_priority(1),
            ProcessDescriptor::new(3, 2, 8).with_priority(3),
        ])
        .unwrap()
    }

    #[test]
    fn test_run_all_order() {
        let results = run_all(&registry(), &SimulationConfig::default()).unwrap();
        let policies: Vec<Policy> = results.iter().map(|r| r.policy).collect();
        assert_eq!(policies, Policy::ALL.to_vec());
    }

    #[tokio::test]
    async fn test_parallel_matches_sequential() {
        let reg = registry();
        let config = SimulationConfig::default();
        let sequential = run_all(&reg, &config).unwrap();
        let parallel = run_all_parallel(reg, config).await.unwrap();
        assert_eq!(sequential, parallel);
    }

    #[tokio::test]
    async fn test_parallel_propagates_config_error() {
        let err = run_all_parallel(registry(), SimulationConfig::new(0)).await;
        assert!(err.is_err());
    }
}
