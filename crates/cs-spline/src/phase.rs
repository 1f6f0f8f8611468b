//! Motion phases as delivered by the phase planner.

use cs_core::{Real, Time, seconds};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PhaseKind {
    /// All feet on the ground.
    Stance,
    /// One foot in flight.
    Step,
}

/// One planner-supplied interval of motion.
///
/// For a step phase the step in progress is identified by the number of
/// steps completed before it.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Phase {
    pub kind: PhaseKind,
    /// Duration in seconds.
    pub duration: Real,
    #[cfg_attr(feature = "serde", serde(default))]
    pub n_completed_steps: u32,
}

impl Phase {
    pub fn stance(duration: Real, n_completed_steps: u32) -> Self {
        Self {
            kind: PhaseKind::Stance,
            duration,
            n_completed_steps,
        }
    }

    pub fn step(duration: Real, n_completed_steps: u32) -> Self {
        Self {
            kind: PhaseKind::Step,
            duration,
            n_completed_steps,
        }
    }

    pub fn with_time(kind: PhaseKind, duration: Time, n_completed_steps: u32) -> Self {
        Self {
            kind,
            duration: seconds(duration),
            n_completed_steps,
        }
    }

    pub fn is_step(&self) -> bool {
        self.kind == PhaseKind::Step
    }

    /// Step in progress during this phase, `None` for stance.
    pub fn step_index(&self) -> Option<u32> {
        match self.kind {
            PhaseKind::Stance => None,
            PhaseKind::Step => Some(self.n_completed_steps),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cs_core::ms;

    #[test]
    fn step_index_only_for_step_phases() {
        assert_eq!(Phase::stance(1.0, 2).step_index(), None);
        assert_eq!(Phase::step(0.5, 2).step_index(), Some(2));
        assert!(Phase::step(0.5, 0).is_step());
    }

    #[test]
    fn with_time_converts_to_seconds() {
        let phase = Phase::with_time(PhaseKind::Step, ms(600.0), 1);
        assert!((phase.duration - 0.6).abs() < 1e-12);
        assert_eq!(phase, Phase::step(phase.duration, 1));
    }
}
