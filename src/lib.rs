/*!
 * CPU Scheduling Simulator Library
 * Deterministic simulation of classical process scheduling policies
 */

pub mod api;
pub mod core;
pub mod monitoring;
pub mod process;
pub mod report;
pub mod scheduler;

// Re-exports
pub use api::{run, run_all, run_all_parallel};
pub use crate::core::{SchedulerError, SchedulerResult, SimulationConfig};
pub use monitoring::init_tracing;
pub use process::{ProcessDescriptor, ProcessRegistry, ProcessRuntimeState};
pub use scheduler::{
    simulate, Occupant, Policy, ProcessReport, SchedulingResult, TimeQuantum, TimelineSegment,
};
