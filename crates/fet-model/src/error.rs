//! Construction-time contract violations.
//!
//! Evaluation itself is total over finite voltages and never fails; the
//! only rejectable input is a malformed technology descriptor, caught at
//! construction rather than deferred to evaluation.

use thiserror::Error;

/// Rejected technology descriptor parameter.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum TechError {
    /// Field that must be strictly positive was zero or negative.
    #[error("technology parameter {name} must be > 0, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// Field that may be zero but not negative was negative.
    #[error("technology parameter {name} must be >= 0, got {value}")]
    Negative { name: &'static str, value: f64 },
}
