/*!
 * Process Registry
 * Validated, frozen process sets shared by every simulation run
 */

use super::types::ProcessDescriptor;
use super::validation::validate_set;
use crate::core::types::{Pid, Priority, SchedulerResult, Ticks};
use std::sync::Arc;
use tracing::{debug, warn};

/// Frozen set of validated process descriptors
///
/// Cloning is cheap: all clones share the same immutable slice, which lets
/// several policies run over one input concurrently.
#[derive(Debug, Clone)]
pub struct ProcessRegistry {
    descriptors: Arc<[ProcessDescriptor]>,
}

impl ProcessRegistry {
    /// Validate and freeze a set of descriptors (input order is preserved)
    pub fn new(descriptors: Vec<ProcessDescriptor>) -> SchedulerResult<Self> {
        if let Err(e) = validate_set(&descriptors) {
            warn!(error = %e, "Rejected process set");
            return Err(e);
        }

        debug!(count = descriptors.len(), "Process registry frozen");
        Ok(Self {
            descriptors: descriptors.into(),
        })
    }

    /// Start collecting descriptors one at a time
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    #[inline]
    pub fn descriptors(&self) -> &[ProcessDescriptor] {
        &self.descriptors
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn get(&self, id: Pid) -> Option<&ProcessDescriptor> {
        self.descriptors.iter().find(|d| d.id == id)
    }

    /// Sum of all burst times
    pub fn total_burst(&self) -> Ticks {
        self.descriptors.iter().map(|d| d.burst_time).sum()
    }
}

/// Incremental registry construction; validation happens in `build`
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    descriptors: Vec<ProcessDescriptor>,
}

impl RegistryBuilder {
    pub fn with_process(mut self, descriptor: ProcessDescriptor) -> Self {
        self.descriptors.push(descriptor);
        self
    }

    pub fn add(&mut self, id: Pid, arrival_time: Ticks, burst_time: Ticks, priority: Priority) {
        self.descriptors
            .push(ProcessDescriptor::new(id, arrival_time, burst_time).with_priority(priority));
    }

    pub fn build(self) -> SchedulerResult<ProcessRegistry> {
        ProcessRegistry::new(self.descriptors)
    }
}
