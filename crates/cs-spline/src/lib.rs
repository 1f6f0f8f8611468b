//! Piecewise-polynomial centre-of-mass trajectory over timed motion phases.
//!
//! [`ComSpline`] turns a phase plan into a sequence of polynomial segments,
//! lays every segment's free coefficients out in one flat vector, and
//! answers two kinds of queries at any global time:
//! - the point state (position, velocity, acceleration, jerk)
//! - the Jacobian row of one motion derivative in one dimension with
//!   respect to the whole free-coefficient vector
//!
//! # Example
//!
//! ```
//! use cs_poly::{Dim2, MotionDerivative, QuinticSegment};
//! use cs_spline::{ComSpline, Phase, SplineConfig};
//!
//! let phases = [Phase::stance(1.0, 0), Phase::step(0.5, 0)];
//! let spline: ComSpline<QuinticSegment> =
//!     ComSpline::from_phases(SplineConfig::default(), &phases).unwrap();
//!
//! assert_eq!(spline.segments().unwrap().len(), 3);
//! assert!((spline.total_duration().unwrap() - 1.5).abs() < 1e-12);
//!
//! let row = spline.jacobian(1.0, MotionDerivative::Pos, Dim2::X).unwrap();
//! assert_eq!(row.len(), spline.total_free_coeffs().unwrap());
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod eval;
pub mod indexing;
pub mod phase;
pub mod spline;
pub mod timing;

pub use config::{MAX_SEGMENTS_PER_STEP, SplineConfig};
pub use convert::build_segments;
pub use error::{SplineError, SplineResult};
pub use eval::{JacobianRow, PointState};
pub use indexing::CoeffLayout;
pub use phase::{Phase, PhaseKind};
pub use spline::{ComSpline, MAX_SAMPLES};
pub use timing::{Located, local_time, locate, segment_id_at, total_duration};
