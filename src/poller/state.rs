//! Failure tolerance state machine.
//!
//! # States
//! - Clear (0): last completed poll succeeded, or none completed yet
//! - Tolerating (1): one failure seen, nothing shown yet
//!
//! # State Transitions
//! ```text
//! any      --200-->      Clear        region := body
//! Clear    --non-200-->  Tolerating   region unchanged
//! Tolerating --non-200--> Tolerating  region := failure message
//! ```
//!
//! # Design Decisions
//! - The counter never climbs past 1; only a success resets it
//! - Atomic so overlapping cycles of one loop stay coherent

use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};

/// What a completed poll did to the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CycleOutcome {
    /// 200: region replaced with the body.
    Success,
    /// First failure of a streak: region left alone.
    ToleratedFailure,
    /// Failure while already tolerating one: failure message shown.
    HardFailure,
}

impl CycleOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            CycleOutcome::Success => "success",
            CycleOutcome::ToleratedFailure => "tolerated_failure",
            CycleOutcome::HardFailure => "hard_failure",
        }
    }
}

impl fmt::Display for CycleOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-loop failure counter.
#[derive(Debug, Default)]
pub struct PollState {
    consecutive_failures: AtomicU32,
}

impl PollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures.load(Ordering::Relaxed)
    }

    /// Report a 200 response.
    pub fn record_success(&self) -> CycleOutcome {
        self.consecutive_failures.store(0, Ordering::Relaxed);
        CycleOutcome::Success
    }

    /// Report a non-200 response.
    pub fn record_failure(&self) -> CycleOutcome {
        match self
            .consecutive_failures
            .compare_exchange(0, 1, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => CycleOutcome::ToleratedFailure,
            Err(_) => CycleOutcome::HardFailure,
        }
    }
}
