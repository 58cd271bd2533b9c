/*!
 * Process Module
 * Process descriptors, validation, registry and input loading
 */

pub mod loader;
pub mod registry;
pub mod types;
mod validation;

// Re-export for convenience
pub use loader::{load_from_file, parse_process, parse_table};
pub use registry::{ProcessRegistry, RegistryBuilder};
pub use types::{ProcessDescriptor, ProcessRuntimeState};
