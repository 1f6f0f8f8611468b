//! Polynomial segment abstraction for COM splines.
//!
//! A segment is one time-bounded piece of a planar trajectory with an
//! independent polynomial per spatial dimension. The spline core only talks
//! to segments through the [`PolynomialSegment`] trait: construction, step
//! tagging, free-coefficient access, evaluation, and the sensitivity of a
//! motion derivative to each free coefficient.
//!
//! [`QuinticSegment`] is the stock implementation: one quintic per dimension
//! with the set of free coefficients chosen by a [`FreeBasis`] marker.

pub mod coeff;
pub mod derivative;
pub mod dim;
pub mod polynomial;
pub mod quintic;
pub mod segment;

pub use coeff::Coeff;
pub use derivative::MotionDerivative;
pub use dim::{DIM2, Dim2};
pub use polynomial::QuinticPolynomial;
pub use quintic::{AllCoeffs, FreeBasis, HighOrderCoeffs, QuinticSegment};
pub use segment::PolynomialSegment;
