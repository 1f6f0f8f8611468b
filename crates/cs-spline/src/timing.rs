//! Global time to owning segment and local time.
//!
//! These work on any segment slice, not only the one owned by a
//! [`ComSpline`](crate::ComSpline), so alternative but equivalent segment
//! sets can be evaluated with the same rules.

use cs_core::{Real, SegmentId, TIME_EPS, ensure_finite};
use cs_poly::PolynomialSegment;

use crate::error::{SplineError, SplineResult};

/// Result of resolving a global time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Located {
    /// Position of the owning segment in the slice.
    pub position: usize,
    pub id: SegmentId,
    /// Time since the start of the owning segment.
    pub t_local: Real,
}

/// Sum of all segment durations.
pub fn total_duration<S: PolynomialSegment>(segments: &[S]) -> Real {
    segments.iter().map(|s| s.duration()).sum()
}

/// Resolve `t_global` to its owning segment and local time.
///
/// Segments are closed on their right edge within [`TIME_EPS`]: a time
/// sitting on a junction belongs to the segment that ends there.
pub fn locate<S: PolynomialSegment>(t_global: Real, segments: &[S]) -> SplineResult<Located> {
    ensure_finite(t_global, "query time")?;

    let total = total_duration(segments);
    if t_global > total + TIME_EPS || t_global < -TIME_EPS {
        return Err(SplineError::TimeOutOfRange {
            t_global,
            total,
            eps: TIME_EPS,
        });
    }

    let mut t_end = 0.0;
    for (position, segment) in segments.iter().enumerate() {
        let t_start = t_end;
        t_end += segment.duration();

        if t_end >= t_global - TIME_EPS {
            return Ok(Located {
                position,
                id: segment.id(),
                t_local: t_global - t_start,
            });
        }
    }

    Err(SplineError::NoOwningSegment { t_global, total })
}

/// Id of the segment owning `t_global`.
pub fn segment_id_at<S: PolynomialSegment>(
    t_global: Real,
    segments: &[S],
) -> SplineResult<SegmentId> {
    locate(t_global, segments).map(|l| l.id)
}

/// Time elapsed since the start of the segment owning `t_global`.
pub fn local_time<S: PolynomialSegment>(t_global: Real, segments: &[S]) -> SplineResult<Real> {
    locate(t_global, segments).map(|l| l.t_local)
}
