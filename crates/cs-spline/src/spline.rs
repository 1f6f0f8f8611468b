//! The stateful spline object owned by one optimisation problem.

use cs_core::{CsError, Real, SegmentId, TIME_EPS, ensure_positive};
use cs_poly::{Dim2, MotionDerivative, PolynomialSegment};
use nalgebra::DVector;
use tracing::{debug, trace};

use crate::config::SplineConfig;
use crate::convert::build_segments;
use crate::error::{SplineError, SplineResult};
use crate::eval::{JacobianRow, PointState, fill_jacobian, point_state};
use crate::indexing::{CoeffLayout, flatten, unflatten};
use crate::phase::Phase;
use crate::timing::{self, Located};

/// Largest grid [`ComSpline::sample`] will evaluate.
pub const MAX_SAMPLES: usize = 1_000_000;

/// Centre-of-mass trajectory built from a phase plan.
///
/// Built empty with [`ComSpline::new`] and filled by [`ComSpline::init`];
/// every query fails with [`SplineError::NotInitialized`] until then.
/// Queries take `&self` and have no side effects. Rebuilding takes
/// `&mut self`, so it cannot overlap with outstanding reads.
#[derive(Debug, Clone)]
pub struct ComSpline<S: PolynomialSegment> {
    config: SplineConfig,
    phases: Vec<Phase>,
    segments: Vec<S>,
    initialized: bool,
}

impl<S: PolynomialSegment> ComSpline<S> {
    pub fn new(config: SplineConfig) -> Self {
        Self {
            config,
            phases: Vec::new(),
            segments: Vec::new(),
            initialized: false,
        }
    }

    /// Shorthand for [`ComSpline::new`] followed by [`ComSpline::init`].
    pub fn from_phases(config: SplineConfig, phases: &[Phase]) -> SplineResult<Self> {
        let mut spline = Self::new(config);
        spline.init(phases)?;
        Ok(spline)
    }

    /// (Re)build the segment sequence from `phases`.
    ///
    /// Replaces all previous segments and coefficients. On error the
    /// previous state is left untouched.
    pub fn init(&mut self, phases: &[Phase]) -> SplineResult<()> {
        let segments = build_segments::<S>(phases, &self.config)?;

        debug!(
            phases = phases.len(),
            segments = segments.len(),
            free_coeffs = CoeffLayout::for_segments::<S>(segments.len()).total(),
            total_duration = timing::total_duration(&segments),
            "initialized COM spline"
        );

        self.segments = segments;
        self.phases = phases.to_vec();
        self.initialized = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn config(&self) -> &SplineConfig {
        &self.config
    }

    fn check_initialized(&self) -> SplineResult<()> {
        if self.initialized {
            Ok(())
        } else {
            Err(SplineError::NotInitialized)
        }
    }

    /// Phases the segments were built from.
    pub fn phases(&self) -> SplineResult<&[Phase]> {
        self.check_initialized()?;
        Ok(&self.phases)
    }

    pub fn segments(&self) -> SplineResult<&[S]> {
        self.check_initialized()?;
        Ok(&self.segments)
    }

    pub fn segment(&self, id: SegmentId) -> SplineResult<&S> {
        self.check_initialized()?;
        self.segments
            .get(id.as_usize())
            .ok_or(SplineError::SegmentOutOfRange {
                id: id.as_usize(),
                count: self.segments.len(),
            })
    }

    /// Phase that produced segment `id`.
    pub fn phase_of(&self, id: SegmentId) -> SplineResult<&Phase> {
        let segment = self.segment(id)?;
        self.phases
            .get(segment.phase())
            .ok_or(SplineError::Core(cs_core::CsError::IndexOob {
                what: "phase",
                index: segment.phase(),
                len: self.phases.len(),
            }))
    }

    // ---- free-coefficient layout ----

    pub fn layout(&self) -> SplineResult<CoeffLayout> {
        self.check_initialized()?;
        Ok(CoeffLayout::for_segments::<S>(self.segments.len()))
    }

    /// Flat position of free slot `slot` of segment `id` in dimension `dim`.
    pub fn index(&self, id: SegmentId, dim: Dim2, slot: usize) -> usize {
        CoeffLayout::for_segments::<S>(self.segments.len()).index(id, dim, slot)
    }

    pub fn total_free_coeffs(&self) -> SplineResult<usize> {
        Ok(self.layout()?.total())
    }

    /// Current free coefficients of every segment as one flat vector.
    pub fn coefficients(&self) -> SplineResult<DVector<Real>> {
        self.check_initialized()?;
        flatten(&self.segments)
    }

    /// Write a flat vector back into the segments.
    pub fn set_coefficients(&mut self, x: &DVector<Real>) -> SplineResult<()> {
        self.check_initialized()?;
        unflatten(&mut self.segments, x)?;
        trace!(len = x.len(), "updated spline coefficients");
        Ok(())
    }

    // ---- time ----

    pub fn total_duration(&self) -> SplineResult<Real> {
        self.check_initialized()?;
        Ok(timing::total_duration(&self.segments))
    }

    pub fn segment_id_at(&self, t_global: Real) -> SplineResult<SegmentId> {
        self.check_initialized()?;
        timing::segment_id_at(t_global, &self.segments)
    }

    pub fn local_time(&self, t_global: Real) -> SplineResult<Real> {
        self.check_initialized()?;
        timing::local_time(t_global, &self.segments)
    }

    // ---- evaluation ----

    /// Point state at global time `t_global`.
    pub fn state(&self, t_global: Real) -> SplineResult<PointState> {
        self.check_initialized()?;
        Self::state_of(t_global, &self.segments)
    }

    /// Point state at `t_global` on an arbitrary segment sequence.
    pub fn state_of(t_global: Real, segments: &[S]) -> SplineResult<PointState> {
        let Located {
            position, t_local, ..
        } = timing::locate(t_global, segments)?;
        Ok(point_state(&segments[position], t_local))
    }

    pub fn state_at_segment(&self, id: SegmentId, t_local: Real) -> SplineResult<PointState> {
        Ok(point_state(self.segment(id)?, t_local))
    }

    /// Jacobian of `deriv` in `dim` at `t_global` with respect to every
    /// free coefficient. Non-zero only inside the owning segment's block.
    pub fn jacobian(
        &self,
        t_global: Real,
        deriv: MotionDerivative,
        dim: Dim2,
    ) -> SplineResult<JacobianRow> {
        self.check_initialized()?;
        let located = timing::locate(t_global, &self.segments)?;
        self.jacobian_at_segment(deriv, located.t_local, located.id, dim)
    }

    pub fn jacobian_at_segment(
        &self,
        deriv: MotionDerivative,
        t_local: Real,
        id: SegmentId,
        dim: Dim2,
    ) -> SplineResult<JacobianRow> {
        let layout = self.layout()?;
        let segment = self.segment(id)?;

        let mut row = JacobianRow::zeros(layout.total());
        fill_jacobian(&mut row, &layout, segment, deriv, dim, t_local);
        Ok(row)
    }

    /// States on a uniform grid `0, dt, 2 dt, ...` ending exactly at the
    /// total duration.
    ///
    /// Fails if the grid would hold more than [`MAX_SAMPLES`] points.
    pub fn sample(&self, dt: Real) -> SplineResult<Vec<(Real, PointState)>> {
        let dt = ensure_positive(dt, "sample period")?;
        let total = self.total_duration()?;

        let intervals = (total / dt + TIME_EPS).floor();
        if !(intervals < (MAX_SAMPLES - 1) as Real) {
            return Err(CsError::InvalidArg {
                what: "sample period too small for the trajectory duration",
            }
            .into());
        }
        let steps = intervals as usize;
        let mut samples = Vec::with_capacity(steps + 2);
        for k in 0..=steps {
            let t = (k as Real * dt).min(total);
            samples.push((t, self.state(t)?));
        }
        let t_last = samples.last().map_or(0.0, |&(t, _)| t);
        if total - t_last > TIME_EPS {
            samples.push((total, self.state(total)?));
        }
        Ok(samples)
    }
}
