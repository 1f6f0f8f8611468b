//! Error types for spline construction and queries.

use cs_core::{CsError, Real};
use thiserror::Error;

/// Errors raised by the spline core.
///
/// `NotInitialized` is a usage error the caller recovers from by calling
/// `init`. The time and segment range variants report a broken
/// precondition or internal invariant together with the offending values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SplineError {
    #[error("Spline segments not initialized: call init() first")]
    NotInitialized,

    #[error("Query time {t_global} outside trajectory duration {total} (tolerance {eps})")]
    TimeOutOfRange { t_global: Real, total: Real, eps: Real },

    #[error("No segment owns time {t_global} (total duration {total})")]
    NoOwningSegment { t_global: Real, total: Real },

    #[error("Segment {id} out of range (segment count {count})")]
    SegmentOutOfRange { id: usize, count: usize },

    #[error("Invalid phase {index}: {what} (duration {duration})")]
    InvalidPhase {
        index: usize,
        what: &'static str,
        duration: Real,
    },

    #[error("Invalid spline config: {what}")]
    InvalidConfig { what: &'static str },

    #[error("Coefficient vector has length {actual}, layout expects {expected}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Core error: {0}")]
    Core(#[from] CsError),
}

pub type SplineResult<T> = Result<T, SplineError>;

impl From<SplineError> for CsError {
    fn from(e: SplineError) -> Self {
        match e {
            SplineError::NotInitialized => CsError::Invariant {
                what: "spline not initialized",
            },
            SplineError::TimeOutOfRange { .. } => CsError::InvalidArg { what: "query time" },
            SplineError::NoOwningSegment { .. } => CsError::Invariant {
                what: "no owning segment",
            },
            SplineError::SegmentOutOfRange { id, count } => CsError::IndexOob {
                what: "segment",
                index: id,
                len: count,
            },
            SplineError::InvalidPhase { .. } => CsError::InvalidArg { what: "phase" },
            SplineError::InvalidConfig { what } => CsError::InvalidArg { what },
            SplineError::LengthMismatch { expected, actual } => CsError::IndexOob {
                what: "coefficient vector",
                index: actual,
                len: expected,
            },
            SplineError::Core(e) => e,
        }
    }
}
