//! Plan file schema definitions.

use cs_spline::{Phase, SplineConfig};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    pub version: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub config: SplineConfig,
    #[serde(default)]
    pub basis: BasisDef,
    #[serde(default)]
    pub phases: Vec<Phase>,
    /// Free-coefficient vector in flat layout order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coefficients: Option<Vec<f64>>,
}

/// Which quintic coefficients are optimisation variables.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BasisDef {
    /// All six coefficients.
    #[default]
    All,
    /// The four highest-order coefficients.
    HighOrder,
}

impl BasisDef {
    pub fn free_per_dim(self) -> usize {
        match self {
            BasisDef::All => 6,
            BasisDef::HighOrder => 4,
        }
    }
}

impl Plan {
    pub fn new(phases: Vec<Phase>) -> Self {
        Self {
            version: crate::validate::LATEST_VERSION,
            name: None,
            config: SplineConfig::default(),
            basis: BasisDef::default(),
            phases,
            coefficients: None,
        }
    }
}
