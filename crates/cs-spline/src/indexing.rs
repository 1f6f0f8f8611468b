//! Layout of the flat free-coefficient vector.
//!
//! Segment-major, then dimension, then free slot:
//! `index(p, d, c) = F * 2 * p + F * d + c`. Optimisers read and write
//! coefficients through this ordering, so every Jacobian row uses it too.

use std::ops::Range;

use cs_core::{CsError, Real, SegmentId, ensure_finite};
use cs_poly::{DIM2, Dim2, PolynomialSegment};
use nalgebra::DVector;

use crate::error::{SplineError, SplineResult};

/// Bijection between `(segment, dimension, slot)` and a flat index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoeffLayout {
    segment_count: usize,
    free_per_dim: usize,
}

impl CoeffLayout {
    pub fn new(segment_count: usize, free_per_dim: usize) -> Self {
        Self {
            segment_count,
            free_per_dim,
        }
    }

    /// Layout for `segment_count` segments of type `S`.
    pub fn for_segments<S: PolynomialSegment>(segment_count: usize) -> Self {
        Self::new(segment_count, S::FREE_COEFFS)
    }

    pub fn free_per_dim(&self) -> usize {
        self.free_per_dim
    }

    /// Flat position of free slot `slot` of `segment` in dimension `dim`.
    pub fn index(&self, segment: SegmentId, dim: Dim2, slot: usize) -> usize {
        self.free_per_dim * DIM2 * segment.as_usize() + self.free_per_dim * dim.index() + slot
    }

    /// Length of the free-coefficient vector.
    pub fn total(&self) -> usize {
        self.segment_count * DIM2 * self.free_per_dim
    }

    /// Flat range holding both dimensions of one segment.
    pub fn block(&self, segment: SegmentId) -> Range<usize> {
        let start = self.index(segment, Dim2::X, 0);
        start..start + DIM2 * self.free_per_dim
    }

    /// Inverse of [`CoeffLayout::index`].
    pub fn locate(&self, flat: usize) -> SplineResult<(SegmentId, Dim2, usize)> {
        let total = self.total();
        if flat >= total {
            return Err(CsError::IndexOob {
                what: "free coefficient",
                index: flat,
                len: total,
            }
            .into());
        }
        let per_segment = DIM2 * self.free_per_dim;
        let segment = SegmentId::from_usize(flat / per_segment)?;
        let within = flat % per_segment;
        let dim = Dim2::from_index(within / self.free_per_dim).ok_or(CsError::Invariant {
            what: "dimension index out of range",
        })?;
        Ok((segment, dim, within % self.free_per_dim))
    }

    /// Iterate `(segment, dim, slot)` triples in flat order.
    ///
    /// Stops early at the first position with no representable id.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, Dim2, usize)> + '_ {
        (0..self.segment_count)
            .map_while(|p| SegmentId::from_usize(p).ok())
            .flat_map(move |segment| {
                Dim2::ALL.into_iter().flat_map(move |dim| {
                    (0..self.free_per_dim).map(move |slot| (segment, dim, slot))
                })
            })
    }
}

/// Gather the free coefficients of `segments` into one flat vector.
pub fn flatten<S: PolynomialSegment>(segments: &[S]) -> SplineResult<DVector<Real>> {
    let layout = CoeffLayout::for_segments::<S>(segments.len());
    let mut x = DVector::zeros(layout.total());

    for segment in segments {
        for dim in Dim2::ALL {
            for slot in 0..S::FREE_COEFFS {
                x[layout.index(segment.id(), dim, slot)] = segment.coefficient(dim, slot)?;
            }
        }
    }

    Ok(x)
}

/// Scatter a flat vector back into `segments`; exact inverse of [`flatten`].
///
/// Nothing is written unless the length matches and every entry is finite.
pub fn unflatten<S: PolynomialSegment>(segments: &mut [S], x: &DVector<Real>) -> SplineResult<()> {
    let layout = CoeffLayout::for_segments::<S>(segments.len());
    if x.len() != layout.total() {
        return Err(SplineError::LengthMismatch {
            expected: layout.total(),
            actual: x.len(),
        });
    }
    for &value in x.iter() {
        ensure_finite(value, "free coefficient")?;
    }

    for segment in segments.iter_mut() {
        let id = segment.id();
        for dim in Dim2::ALL {
            for slot in 0..S::FREE_COEFFS {
                segment.set_coefficient(dim, slot, x[layout.index(id, dim, slot)])?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_poly::{HighOrderCoeffs, QuinticSegment};

    #[test]
    fn index_formula() {
        let layout = CoeffLayout::new(3, 1);
        assert_eq!(layout.total(), 6);
        assert_eq!(layout.index(SegmentId::from_index(2).unwrap(), Dim2::Y, 0), 5);
        assert_eq!(layout.index(SegmentId::from_index(0).unwrap(), Dim2::X, 0), 0);
        assert_eq!(layout.index(SegmentId::from_index(1).unwrap(), Dim2::X, 0), 2);
    }

    #[test]
    fn locate_inverts_index() {
        let layout = CoeffLayout::new(4, 6);
        for (flat, (segment, dim, slot)) in layout.iter().enumerate() {
            assert_eq!(layout.index(segment, dim, slot), flat);
            assert_eq!(layout.locate(flat).unwrap(), (segment, dim, slot));
        }
        assert!(layout.locate(layout.total()).is_err());
    }

    #[test]
    fn block_covers_both_dimensions() {
        let layout = CoeffLayout::new(3, 4);
        assert_eq!(layout.block(SegmentId::from_index(1).unwrap()), 8..16);
    }

    #[test]
    fn empty_layout() {
        let layout = CoeffLayout::new(0, 6);
        assert_eq!(layout.total(), 0);
        assert_eq!(layout.iter().count(), 0);
    }

    #[test]
    fn flatten_then_unflatten_restores_segments() {
        let mut segments: Vec<QuinticSegment<HighOrderCoeffs>> = (0..3)
            .map(|i| QuinticSegment::new(SegmentId::from_index(i).unwrap(), 0.5, 0))
            .collect();
        let layout = CoeffLayout::for_segments::<QuinticSegment<HighOrderCoeffs>>(3);

        let x = DVector::from_fn(layout.total(), |i, _| i as Real * 0.5 - 3.0);
        unflatten(&mut segments, &x).unwrap();

        let flat = layout.index(SegmentId::from_index(1).unwrap(), Dim2::Y, 2);
        assert_eq!(segments[1].coefficient(Dim2::Y, 2).unwrap(), x[flat]);
        assert_eq!(flatten(&segments).unwrap(), x);
    }

    #[test]
    fn unflatten_rejects_bad_input_untouched() {
        let mut segments: Vec<QuinticSegment> =
            vec![QuinticSegment::new(SegmentId::from_index(0).unwrap(), 1.0, 0)];

        let short = DVector::zeros(5);
        assert_eq!(
            unflatten(&mut segments, &short),
            Err(SplineError::LengthMismatch {
                expected: 12,
                actual: 5
            })
        );

        let mut poisoned = DVector::from_element(12, 1.0);
        poisoned[7] = Real::NAN;
        assert!(unflatten(&mut segments, &poisoned).is_err());
        assert_eq!(flatten(&segments).unwrap(), DVector::zeros(12));
    }
}
