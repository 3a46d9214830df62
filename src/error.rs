//! Core error types.
//!
//! Per-session drops (no qualified instructor, no sufficiently large room)
//! are not represented here — they are recoverable and are instead counted
//! in [`crate::models::BuildDiagnostics`] / [`crate::ga::RunResult`].

use crate::models::TimeSlot;

/// Errors surfaced by the scheduling core to its caller.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// A record failed one of its stated constraints (non-positive capacity,
    /// unknown subject type, duplicate id). The whole build is aborted.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A substitution could not be applied without creating a resource
    /// conflict. No mutation is applied; the conflicting slot is reported.
    #[error("infeasible repair: substitute is already booked at {0:?}")]
    InfeasibleRepair(TimeSlot),

    /// The engine was cancelled before any generation completed.
    #[error("run cancelled before any generation completed")]
    Cancelled,

    /// A post-condition of repair (schedule feasibility) failed. Fatal.
    #[error("internal invariant violated: {0}")]
    InternalInvariantViolated(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = CoreError::MalformedInput("capacity must be >= 1".into());
        assert_eq!(e.to_string(), "malformed input: capacity must be >= 1");

        let e2 = CoreError::InfeasibleRepair(TimeSlot::new(0, 1));
        assert!(e2.to_string().contains("infeasible repair"));

        let e3 = CoreError::Cancelled;
        assert_eq!(e3.to_string(), "run cancelled before any generation completed");

        let e4 = CoreError::InternalInvariantViolated("repair's conflict scan produced a schedule that is still infeasible".into());
        assert!(e4.to_string().contains("internal invariant violated"));
    }
}
