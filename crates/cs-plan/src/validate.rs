//! Plan validation logic.

use cs_spline::{MAX_SEGMENTS_PER_STEP, PhaseKind};

use crate::schema::Plan;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Coefficient count {actual} does not match plan layout ({expected})")]
    CoefficientCount { expected: usize, actual: usize },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Segments the plan's phases expand to under its config.
///
/// `None` if the count overflows `usize`.
pub fn segment_count(plan: &Plan) -> Option<usize> {
    plan.phases.iter().try_fold(0_usize, |count, phase| {
        count.checked_add(match phase.kind {
            PhaseKind::Stance => 2,
            PhaseKind::Step => plan.config.segments_per_step,
        })
    })
}

pub fn validate_plan(plan: &Plan) -> Result<(), ValidationError> {
    if plan.version == 0 || plan.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: plan.version,
        });
    }

    let config = &plan.config;
    if !(config.reaction_time.is_finite() && config.reaction_time > 0.0) {
        return Err(invalid(
            "config.reaction_time",
            config.reaction_time,
            "must be finite and positive",
        ));
    }
    if config.segments_per_step == 0 {
        return Err(invalid(
            "config.segments_per_step",
            config.segments_per_step,
            "must be at least 1",
        ));
    }
    if config.segments_per_step > MAX_SEGMENTS_PER_STEP {
        return Err(invalid(
            "config.segments_per_step",
            config.segments_per_step,
            &format!("must not exceed {MAX_SEGMENTS_PER_STEP}"),
        ));
    }

    for (i, phase) in plan.phases.iter().enumerate() {
        let field = format!("phases[{i}].duration");
        if !(phase.duration.is_finite() && phase.duration > 0.0) {
            return Err(invalid(&field, phase.duration, "must be finite and positive"));
        }
        if phase.kind == PhaseKind::Stance && phase.duration <= config.reaction_time {
            return Err(invalid(
                &field,
                phase.duration,
                "stance must outlast the reaction time",
            ));
        }
    }

    if let Some(coefficients) = &plan.coefficients {
        let expected = segment_count(plan)
            .and_then(|n| n.checked_mul(2 * plan.basis.free_per_dim()))
            .ok_or_else(|| {
                invalid(
                    "phases",
                    plan.phases.len(),
                    "free-coefficient count overflows",
                )
            })?;
        if coefficients.len() != expected {
            return Err(ValidationError::CoefficientCount {
                expected,
                actual: coefficients.len(),
            });
        }
        if let Some(i) = coefficients.iter().position(|c| !c.is_finite()) {
            return Err(invalid(
                &format!("coefficients[{i}]"),
                coefficients[i],
                "must be finite",
            ));
        }
    }

    Ok(())
}

fn invalid(field: &str, value: impl ToString, reason: &str) -> ValidationError {
    ValidationError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::BasisDef;
    use cs_spline::Phase;

    fn walk() -> Plan {
        Plan::new(vec![Phase::stance(1.0, 0), Phase::step(0.5, 0)])
    }

    #[test]
    fn valid_plan_passes() {
        validate_plan(&walk()).unwrap();
        assert_eq!(segment_count(&walk()), Some(3));
    }

    #[test]
    fn rejects_future_version() {
        let mut plan = walk();
        plan.version = LATEST_VERSION + 1;
        assert!(matches!(
            validate_plan(&plan),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_short_stance() {
        let mut plan = walk();
        plan.phases.push(Phase::stance(0.1, 1));
        let err = validate_plan(&plan).unwrap_err();
        assert!(err.to_string().contains("phases[2].duration"));
    }

    #[test]
    fn coefficient_count_follows_basis() {
        let mut plan = walk();
        plan.basis = BasisDef::HighOrder;
        plan.coefficients = Some(vec![0.0; 24]);
        validate_plan(&plan).unwrap();

        plan.basis = BasisDef::All;
        assert!(matches!(
            validate_plan(&plan),
            Err(ValidationError::CoefficientCount {
                expected: 36,
                actual: 24
            })
        ));
    }

    #[test]
    fn rejects_non_finite_coefficient() {
        let mut plan = walk();
        let mut coefficients = vec![0.0; 36];
        coefficients[4] = f64::NAN;
        plan.coefficients = Some(coefficients);
        assert!(validate_plan(&plan).is_err());
    }

    #[test]
    fn rejects_oversized_step_split() {
        let mut plan = Plan::new(vec![Phase::step(0.5, 0)]);
        plan.config.segments_per_step = usize::MAX;
        plan.coefficients = Some(vec![0.0; 12]);
        let err = validate_plan(&plan).unwrap_err();
        assert!(err.to_string().contains("config.segments_per_step"));

        plan.config.segments_per_step = MAX_SEGMENTS_PER_STEP + 1;
        assert!(validate_plan(&plan).is_err());

        plan.config.segments_per_step = MAX_SEGMENTS_PER_STEP;
        plan.coefficients = None;
        validate_plan(&plan).unwrap();
    }

    #[test]
    fn segment_count_reports_overflow() {
        let mut plan = Plan::new(vec![Phase::step(0.5, 0), Phase::step(0.5, 1)]);
        plan.config.segments_per_step = usize::MAX;
        assert_eq!(segment_count(&plan), None);

        plan.config.segments_per_step = 3;
        assert_eq!(segment_count(&plan), Some(6));
    }
}
