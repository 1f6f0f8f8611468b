//! cs-plan: phase plan file format, validation, and spline construction.

pub mod schema;
pub mod validate;

pub use schema::*;
pub use validate::{LATEST_VERSION, ValidationError, segment_count, validate_plan};

use cs_poly::PolynomialSegment;
use cs_spline::{ComSpline, SplineError};
use nalgebra::DVector;

pub type PlanResult<T> = Result<T, PlanError>;

#[derive(thiserror::Error, Debug)]
pub enum PlanError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Basis mismatch: plan uses {plan} free coefficients, segment type has {segment}")]
    BasisMismatch { plan: usize, segment: usize },

    #[error("Spline error: {0}")]
    Spline(#[from] SplineError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> PlanResult<Plan> {
    let content = std::fs::read_to_string(path)?;
    let plan: Plan = serde_yaml::from_str(&content)?;
    validate_plan(&plan)?;
    tracing::debug!(path = %path.display(), phases = plan.phases.len(), "loaded plan");
    Ok(plan)
}

pub fn save_yaml(path: &std::path::Path, plan: &Plan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_yaml::to_string(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> PlanResult<Plan> {
    let content = std::fs::read_to_string(path)?;
    let plan: Plan = serde_json::from_str(&content)?;
    validate_plan(&plan)?;
    tracing::debug!(path = %path.display(), phases = plan.phases.len(), "loaded plan");
    Ok(plan)
}

pub fn save_json(path: &std::path::Path, plan: &Plan) -> PlanResult<()> {
    validate_plan(plan)?;
    let content = serde_json::to_string_pretty(plan)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Load by file extension: `.json` as JSON, anything else as YAML.
pub fn load(path: &std::path::Path) -> PlanResult<Plan> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_json(path),
        _ => load_yaml(path),
    }
}

impl Plan {
    /// Build the spline described by this plan, with its coefficients
    /// applied when the plan carries them.
    pub fn build_spline<S: PolynomialSegment>(&self) -> PlanResult<ComSpline<S>> {
        validate_plan(self)?;
        if S::FREE_COEFFS != self.basis.free_per_dim() {
            return Err(PlanError::BasisMismatch {
                plan: self.basis.free_per_dim(),
                segment: S::FREE_COEFFS,
            });
        }

        let mut spline = ComSpline::from_phases(self.config, &self.phases)?;
        if let Some(coefficients) = &self.coefficients {
            spline.set_coefficients(&DVector::from_column_slice(coefficients))?;
        }
        Ok(spline)
    }
}
