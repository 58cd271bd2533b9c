/*!
 * Scheduler Module
 * Policy selection, simulation engine, timeline and metrics
 */

pub mod engine;
pub mod metrics;
mod policy;
pub mod result;
pub mod timeline;
pub mod types;

// Re-export public API
pub use engine::simulate;
pub use metrics::{summarize, Summary};
pub use result::{ProcessReport, SchedulingResult};
pub use timeline::{Occupant, TimelineRecorder, TimelineSegment};
pub use types::{Policy, TimeQuantum};
