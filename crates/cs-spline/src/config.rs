//! Knobs of the phase-to-segment conversion.

use cs_core::Real;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{SplineError, SplineResult};

/// Upper bound on `segments_per_step`.
pub const MAX_SEGMENTS_PER_STEP: usize = 1024;

/// Segment layout configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SplineConfig {
    /// Duration of the weight-shift segment opening every stance phase (s).
    pub reaction_time: Real,
    /// Equal-length segments emitted per step phase.
    pub segments_per_step: usize,
}

impl Default for SplineConfig {
    fn default() -> Self {
        Self {
            reaction_time: 0.15,
            segments_per_step: 1,
        }
    }
}

impl SplineConfig {
    pub fn validate(&self) -> SplineResult<()> {
        if !(self.reaction_time.is_finite() && self.reaction_time > 0.0) {
            return Err(SplineError::InvalidConfig {
                what: "reaction_time must be finite and positive",
            });
        }
        if self.segments_per_step == 0 {
            return Err(SplineError::InvalidConfig {
                what: "segments_per_step must be at least 1",
            });
        }
        if self.segments_per_step > MAX_SEGMENTS_PER_STEP {
            return Err(SplineError::InvalidConfig {
                what: "segments_per_step exceeds MAX_SEGMENTS_PER_STEP",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SplineConfig::default();
        assert_eq!(config.reaction_time, 0.15);
        assert_eq!(config.segments_per_step, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_bad_values() {
        let zero_split = SplineConfig {
            segments_per_step: 0,
            ..SplineConfig::default()
        };
        assert!(matches!(
            zero_split.validate(),
            Err(SplineError::InvalidConfig { .. })
        ));

        let nan_reaction = SplineConfig {
            reaction_time: Real::NAN,
            ..SplineConfig::default()
        };
        assert!(nan_reaction.validate().is_err());
    }

    #[test]
    fn bounds_segments_per_step() {
        let at_cap = SplineConfig {
            segments_per_step: MAX_SEGMENTS_PER_STEP,
            ..SplineConfig::default()
        };
        assert!(at_cap.validate().is_ok());

        for segments_per_step in [MAX_SEGMENTS_PER_STEP + 1, usize::MAX] {
            let config = SplineConfig {
                segments_per_step,
                ..SplineConfig::default()
            };
            assert!(matches!(
                config.validate(),
                Err(SplineError::InvalidConfig { .. })
            ));
        }
    }
}
