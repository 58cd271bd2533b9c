/*!
 * Core Types
 * Common types used across the simulator
 */

/// Process ID type (unique, positive)
pub type Pid = u32;

/// Simulated clock value and durations, in abstract time units
///
/// Signed so that out-of-range input (negative arrivals, zero or negative
/// bursts) can be represented and rejected during validation.
pub type Ticks = i64;

/// Priority level (lower value is more important)
pub type Priority = i32;

/// Default Round-Robin time quantum
pub const DEFAULT_TIME_QUANTUM: Ticks = 2;

/// Priority assigned when the input does not specify one
pub const DEFAULT_PRIORITY: Priority = 1;

/// Common result type for simulator operations
pub type SchedulerResult<T> = Result<T, super::errors::SchedulerError>;
