//! Phase plan to segment sequence.

use cs_core::{Real, SegmentId};
use cs_poly::PolynomialSegment;

use crate::config::SplineConfig;
use crate::error::{SplineError, SplineResult};
use crate::phase::{Phase, PhaseKind};

/// Build the segment sequence for `phases`.
///
/// A stance phase becomes a reaction-time segment followed by the rest of
/// the stance. A step phase becomes `segments_per_step` equal segments
/// tagged with the step in progress. Ids are assigned in emission order
/// starting at 0.
pub fn build_segments<S: PolynomialSegment>(
    phases: &[Phase],
    config: &SplineConfig,
) -> SplineResult<Vec<S>> {
    config.validate()?;

    let mut segments: Vec<S> = Vec::with_capacity(phases.len().saturating_mul(2));
    let next_id = |segments: &Vec<S>| SegmentId::from_usize(segments.len());

    for (index, phase) in phases.iter().enumerate() {
        validate_phase(index, phase, config)?;

        match phase.kind {
            PhaseKind::Stance => {
                let t_reaction = config.reaction_time;
                segments.push(S::new(next_id(&segments)?, t_reaction, index));
                segments.push(S::new(
                    next_id(&segments)?,
                    phase.duration - t_reaction,
                    index,
                ));
            }
            PhaseKind::Step => {
                let n = config.segments_per_step;
                let duration = phase.duration / n as Real;
                for _ in 0..n {
                    let mut segment = S::new(next_id(&segments)?, duration, index);
                    segment.set_step(phase.n_completed_steps);
                    segments.push(segment);
                }
            }
        }
    }

    Ok(segments)
}

fn validate_phase(index: usize, phase: &Phase, config: &SplineConfig) -> SplineResult<()> {
    let invalid = |what| SplineError::InvalidPhase {
        index,
        what,
        duration: phase.duration,
    };

    if !phase.duration.is_finite() || phase.duration <= 0.0 {
        return Err(invalid("duration must be finite and positive"));
    }
    if phase.kind == PhaseKind::Stance && phase.duration <= config.reaction_time {
        return Err(invalid("stance shorter than reaction time"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_poly::QuinticSegment;

    fn build(phases: &[Phase], config: &SplineConfig) -> SplineResult<Vec<QuinticSegment>> {
        build_segments(phases, config)
    }

    #[test]
    fn stance_splits_off_reaction_time() {
        let segments = build(&[Phase::stance(1.0, 0)], &SplineConfig::default()).unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].duration(), 0.15);
        assert!((segments[1].duration() - 0.85).abs() < 1e-12);
        assert!(segments.iter().all(|s| s.step().is_none()));
        assert!(segments.iter().all(|s| s.phase() == 0));
    }

    #[test]
    fn step_is_split_evenly_and_tagged() {
        let config = SplineConfig {
            segments_per_step: 4,
            ..SplineConfig::default()
        };
        let segments = build(&[Phase::step(0.8, 3)], &config).unwrap();
        assert_eq!(segments.len(), 4);
        for (i, s) in segments.iter().enumerate() {
            assert_eq!(s.id().as_usize(), i);
            assert!((s.duration() - 0.2).abs() < 1e-12);
            assert_eq!(s.step(), Some(3));
        }
    }

    #[test]
    fn ids_are_sequential_across_phases() {
        let phases = [
            Phase::stance(0.6, 0),
            Phase::step(0.4, 0),
            Phase::step(0.4, 1),
            Phase::stance(0.3, 2),
        ];
        let segments = build(&phases, &SplineConfig::default()).unwrap();
        let ids: Vec<u32> = segments.iter().map(|s| s.id().index()).collect();
        assert_eq!(ids, vec![0, 1, 2, 3, 4, 5]);
        let owners: Vec<usize> = segments.iter().map(|s| s.phase()).collect();
        assert_eq!(owners, vec![0, 0, 1, 2, 3, 3]);
        assert_eq!(segments[3].step(), Some(1));
    }

    #[test]
    fn empty_plan_gives_no_segments() {
        let segments = build(&[], &SplineConfig::default()).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn short_stance_is_rejected() {
        let err = build(&[Phase::step(0.5, 0), Phase::stance(0.1, 1)], &SplineConfig::default())
            .unwrap_err();
        assert!(matches!(err, SplineError::InvalidPhase { index: 1, .. }));
    }

    #[test]
    fn non_positive_duration_is_rejected() {
        assert!(build(&[Phase::step(0.0, 0)], &SplineConfig::default()).is_err());
        assert!(build(&[Phase::step(Real::INFINITY, 0)], &SplineConfig::default()).is_err());
    }

    #[test]
    fn bad_config_is_rejected() {
        let config = SplineConfig {
            reaction_time: -0.1,
            ..SplineConfig::default()
        };
        assert!(matches!(
            build(&[Phase::stance(1.0, 0)], &config),
            Err(SplineError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn oversized_step_split_is_rejected() {
        let config = SplineConfig {
            segments_per_step: usize::MAX,
            ..SplineConfig::default()
        };
        assert!(matches!(
            build(&[Phase::step(0.5, 0)], &config),
            Err(SplineError::InvalidConfig { .. })
        ));
    }
}
