//! Stock segment: one quintic per dimension.

use core::fmt::Debug;
use core::marker::PhantomData;

use cs_core::{CsError, CsResult, Real, SegmentId};

use crate::coeff::Coeff;
use crate::derivative::MotionDerivative;
use crate::dim::{DIM2, Dim2};
use crate::polynomial::QuinticPolynomial;
use crate::segment::PolynomialSegment;

/// Picks which quintic coefficients are optimisation variables.
///
/// Slot `i` of a segment addresses `FREE[i]`. Coefficients not listed keep
/// whatever value was written through [`QuinticSegment::polynomial_mut`].
pub trait FreeBasis: Clone + Copy + Debug + Default + Send + Sync + 'static {
    const FREE: &'static [Coeff];
}

/// Every coefficient `A..F` is free.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AllCoeffs;

impl FreeBasis for AllCoeffs {
    const FREE: &'static [Coeff] = &Coeff::ALL;
}

/// Only `A..D` are free; `E` and `F` (initial velocity and position) are
/// pinned by continuity with the previous segment outside this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighOrderCoeffs;

impl FreeBasis for HighOrderCoeffs {
    const FREE: &'static [Coeff] = &[Coeff::A, Coeff::B, Coeff::C, Coeff::D];
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuinticSegment<B: FreeBasis = AllCoeffs> {
    id: SegmentId,
    duration: Real,
    phase: usize,
    step: Option<u32>,
    polys: [QuinticPolynomial; DIM2],
    basis: PhantomData<B>,
}

impl<B: FreeBasis> QuinticSegment<B> {
    pub fn polynomial(&self, dim: Dim2) -> &QuinticPolynomial {
        &self.polys[dim.index()]
    }

    pub fn polynomial_mut(&mut self, dim: Dim2) -> &mut QuinticPolynomial {
        &mut self.polys[dim.index()]
    }

    fn free_coeff(slot: usize) -> CsResult<Coeff> {
        B::FREE.get(slot).copied().ok_or(CsError::IndexOob {
            what: "free coefficient slot",
            index: slot,
            len: B::FREE.len(),
        })
    }
}

impl<B: FreeBasis> PolynomialSegment for QuinticSegment<B> {
    const FREE_COEFFS: usize = B::FREE.len();

    fn new(id: SegmentId, duration: Real, phase: usize) -> Self {
        Self {
            id,
            duration,
            phase,
            step: None,
            polys: [QuinticPolynomial::default(); DIM2],
            basis: PhantomData,
        }
    }

    fn id(&self) -> SegmentId {
        self.id
    }

    fn duration(&self) -> Real {
        self.duration
    }

    fn phase(&self) -> usize {
        self.phase
    }

    fn step(&self) -> Option<u32> {
        self.step
    }

    fn set_step(&mut self, step: u32) {
        self.step = Some(step);
    }

    fn coefficient(&self, dim: Dim2, slot: usize) -> CsResult<Real> {
        let c = Self::free_coeff(slot)?;
        Ok(self.polynomial(dim).coeff(c))
    }

    fn set_coefficient(&mut self, dim: Dim2, slot: usize, value: Real) -> CsResult<()> {
        let c = Self::free_coeff(slot)?;
        self.polynomial_mut(dim).set_coeff(c, value);
        Ok(())
    }

    fn value(&self, deriv: MotionDerivative, dim: Dim2, t_local: Real) -> Real {
        self.polynomial(dim).eval(deriv, t_local)
    }

    fn sensitivity(&self, deriv: MotionDerivative, slot: usize, t_local: Real) -> Real {
        match B::FREE.get(slot) {
            Some(&c) => QuinticPolynomial::sensitivity(deriv, c, t_local),
            None => 0.0,
        }
    }
}
