/*!
 * Scheduler Types
 * Policy identifiers and time quantum configuration
 */

use crate::core::errors::SchedulerError;
use crate::core::types::{SchedulerResult, Ticks};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Scheduling policy
///
/// The set is closed: every policy the simulator knows is a variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
    /// First come, first served
    Fcfs,
    /// Shortest job first, non-preemptive
    ShortestJobFirst,
    /// Shortest remaining time first (preemptive SJF)
    ShortestRemainingTime,
    /// Lowest priority value first, non-preemptive
    Priority,
    /// Lowest priority value first, re-evaluated every time unit
    PreemptivePriority,
    /// FIFO ready queue with a fixed time quantum
    RoundRobin,
}

impl Policy {
    /// All policies in menu order
    pub const ALL: [Policy; 6] = [
        Policy::Fcfs,
        Policy::ShortestJobFirst,
        Policy::ShortestRemainingTime,
        Policy::Priority,
        Policy::PreemptivePriority,
        Policy::RoundRobin,
    ];

    /// Convert to string representation
    ///
    /// # Performance
    /// Hot path - frequently called for logging and serialization
    #[inline(always)]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Fcfs => "fcfs",
            Self::ShortestJobFirst => "sjf_np",
            Self::ShortestRemainingTime => "srtf",
            Self::Priority => "priority_np",
            Self::PreemptivePriority => "priority_p",
            Self::RoundRobin => "round_robin",
        }
    }

    /// Human-readable algorithm name used in results
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS (First Come First Serve)",
            Self::ShortestJobFirst => "SJF (Non-Preemptive)",
            Self::ShortestRemainingTime => "SJF Preemptive (SRTF)",
            Self::Priority => "Priority (Non-Preemptive)",
            Self::PreemptivePriority => "Priority (Preemptive)",
            Self::RoundRobin => "Round Robin",
        }
    }

    /// Whether the running process can be displaced before it finishes
    pub const fn is_preemptive(&self) -> bool {
        matches!(
            self,
            Self::ShortestRemainingTime | Self::PreemptivePriority | Self::RoundRobin
        )
    }
}

impl FromStr for Policy {
    type Err = SchedulerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fcfs" | "fifo" | "1" => Ok(Self::Fcfs),
            "sjf" | "sjf_np" | "2" => Ok(Self::ShortestJobFirst),
            "srtf" | "sjf_p" | "3" => Ok(Self::ShortestRemainingTime),
            "priority" | "priority_np" | "prio" | "4" => Ok(Self::Priority),
            "priority_p" | "ppriority" | "5" => Ok(Self::PreemptivePriority),
            "round_robin" | "roundrobin" | "rr" | "6" => Ok(Self::RoundRobin),
            _ => Err(SchedulerError::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Policy {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Policy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Validated Round-Robin time quantum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimeQuantum(Ticks);

impl TimeQuantum {
    /// Create new time quantum
    pub fn new(ticks: Ticks) -> SchedulerResult<Self> {
        if ticks <= 0 {
            return Err(SchedulerError::InvalidConfiguration(format!(
                "time quantum must be positive, got {}",
                ticks
            )));
        }
        Ok(Self(ticks))
    }

    #[inline(always)]
    pub const fn ticks(&self) -> Ticks {
        self.0
    }
}
