/*!
 * Simulation Configuration
 * Run parameters shared by every policy, with environment overrides
 */

use super::errors::SchedulerError;
use super::types::{SchedulerResult, Ticks, DEFAULT_TIME_QUANTUM};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the Round-Robin quantum
pub const QUANTUM_ENV: &str = "SCHED_TIME_QUANTUM";

/// Configuration for a simulation run
///
/// The quantum is kept raw here and only validated when a Round-Robin run
/// consumes it; other policies ignore it entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub time_quantum: Ticks,
}

impl SimulationConfig {
    #[inline]
    #[must_use]
    pub const fn new(time_quantum: Ticks) -> Self {
        Self { time_quantum }
    }

    #[inline]
    #[must_use]
    pub const fn with_quantum(mut self, time_quantum: Ticks) -> Self {
        self.time_quantum = time_quantum;
        self
    }

    /// Build from defaults plus `SCHED_TIME_QUANTUM`, if set
    pub fn from_env() -> SchedulerResult<Self> {
        Self::default().apply_override(std::env::var(QUANTUM_ENV).ok().as_deref())
    }

    fn apply_override(self, raw: Option<&str>) -> SchedulerResult<Self> {
        match raw {
            None => Ok(self),
            Some(value) => value
                .trim()
                .parse::<Ticks>()
                .map(|q| self.with_quantum(q))
                .map_err(|e| {
                    SchedulerError::InvalidConfiguration(format!(
                        "{}='{}' is not an integer: {}",
                        QUANTUM_ENV, value, e
                    ))
                }),
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_QUANTUM)
    }
}
