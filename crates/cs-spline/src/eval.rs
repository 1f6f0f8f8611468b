//! Point state and Jacobian rows of a single segment.

use cs_core::Real;
use cs_poly::{Dim2, MotionDerivative, PolynomialSegment};
use nalgebra::{RowDVector, Vector2};

use crate::indexing::CoeffLayout;

/// Partial derivatives of one scalar quantity with respect to every free
/// coefficient, ordered by [`CoeffLayout`].
pub type JacobianRow = RowDVector<Real>;

/// Planar motion at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointState {
    pub p: Vector2<Real>,
    pub v: Vector2<Real>,
    pub a: Vector2<Real>,
    pub j: Vector2<Real>,
}

impl PointState {
    pub fn get(&self, deriv: MotionDerivative) -> &Vector2<Real> {
        match deriv {
            MotionDerivative::Pos => &self.p,
            MotionDerivative::Vel => &self.v,
            MotionDerivative::Acc => &self.a,
            MotionDerivative::Jerk => &self.j,
        }
    }
}

/// State of `segment` at local time `t_local`.
pub fn point_state<S: PolynomialSegment>(segment: &S, t_local: Real) -> PointState {
    PointState {
        p: segment.state(MotionDerivative::Pos, t_local),
        v: segment.state(MotionDerivative::Vel, t_local),
        a: segment.state(MotionDerivative::Acc, t_local),
        j: segment.state(MotionDerivative::Jerk, t_local),
    }
}

/// Write the sensitivities of `deriv` in `dim` of `segment` into `row`.
///
/// Only the `FREE_COEFFS` entries of `segment`'s block for `dim` are
/// touched; the caller hands in a zeroed row.
pub fn fill_jacobian<S: PolynomialSegment>(
    row: &mut JacobianRow,
    layout: &CoeffLayout,
    segment: &S,
    deriv: MotionDerivative,
    dim: Dim2,
    t_local: Real,
) {
    let id = segment.id();
    for slot in 0..S::FREE_COEFFS {
        row[layout.index(id, dim, slot)] = segment.sensitivity(deriv, slot, t_local);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::SegmentId;
    use cs_poly::{Coeff, QuinticSegment};

    fn sample_segment() -> QuinticSegment {
        let mut s = QuinticSegment::new(SegmentId::from_index(1).unwrap(), 0.5, 0);
        // x = t^2, y = 3 - t
        s.polynomial_mut(Dim2::X).set_coeff(Coeff::D, 1.0);
        s.polynomial_mut(Dim2::Y).set_coeff(Coeff::F, 3.0);
        s.polynomial_mut(Dim2::Y).set_coeff(Coeff::E, -1.0);
        s
    }

    #[test]
    fn point_state_bundles_all_derivatives() {
        let state = point_state(&sample_segment(), 0.5);
        assert_eq!(state.p, Vector2::new(0.25, 2.5));
        assert_eq!(state.v, Vector2::new(1.0, -1.0));
        assert_eq!(state.a, Vector2::new(2.0, 0.0));
        assert_eq!(state.j, Vector2::new(0.0, 0.0));
        assert_eq!(state.get(MotionDerivative::Vel), &state.v);
    }

    #[test]
    fn fill_touches_only_one_dimension_block() {
        let segment = sample_segment();
        let layout = CoeffLayout::for_segments::<QuinticSegment>(3);
        let mut row = JacobianRow::zeros(layout.total());

        fill_jacobian(&mut row, &layout, &segment, MotionDerivative::Pos, Dim2::Y, 0.5);

        let y_start = layout.index(segment.id(), Dim2::Y, 0);
        for (i, &value) in row.iter().enumerate() {
            if !(y_start..y_start + 6).contains(&i) {
                assert_eq!(value, 0.0, "entry {i} should stay zero");
            }
        }
        // slot 5 is the constant term
        assert_eq!(row[y_start + 5], 1.0);
        assert_eq!(row[y_start + 4], 0.5);
    }
}
