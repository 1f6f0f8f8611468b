//! The seam between the spline core and a concrete polynomial basis.

use core::fmt::Debug;

use cs_core::{CsResult, Real, SegmentId};
use nalgebra::Vector2;

use crate::derivative::MotionDerivative;
use crate::dim::Dim2;

/// One time-bounded polynomial piece of a planar trajectory.
///
/// Implementors decide the basis and which of its coefficients are free
/// optimisation variables. Free coefficients are addressed by a slot in
/// `0..FREE_COEFFS`, separately for each dimension.
pub trait PolynomialSegment: Clone + Debug + Send + Sync {
    /// Free coefficients per segment and per dimension.
    const FREE_COEFFS: usize;

    /// Create a segment with zeroed coefficients.
    ///
    /// `phase` is the position of the owning phase in the phase list the
    /// segment was generated from.
    fn new(id: SegmentId, duration: Real, phase: usize) -> Self;

    fn id(&self) -> SegmentId;

    fn duration(&self) -> Real;

    fn phase(&self) -> usize;

    /// Step in progress while this segment runs, `None` for stance segments.
    fn step(&self) -> Option<u32>;

    fn set_step(&mut self, step: u32);

    /// Current value of a free coefficient.
    fn coefficient(&self, dim: Dim2, slot: usize) -> CsResult<Real>;

    fn set_coefficient(&mut self, dim: Dim2, slot: usize, value: Real) -> CsResult<()>;

    /// Motion derivative in one dimension at local time `t_local`.
    fn value(&self, deriv: MotionDerivative, dim: Dim2, t_local: Real) -> Real;

    /// Motion derivative in both dimensions at local time `t_local`.
    fn state(&self, deriv: MotionDerivative, t_local: Real) -> Vector2<Real> {
        Vector2::new(
            self.value(deriv, Dim2::X, t_local),
            self.value(deriv, Dim2::Y, t_local),
        )
    }

    /// Partial derivative of `deriv` with respect to free coefficient `slot`
    /// at local time `t_local`. Identical for both dimensions; out-of-range
    /// slots contribute nothing.
    fn sensitivity(&self, deriv: MotionDerivative, slot: usize, t_local: Real) -> Real;
}
