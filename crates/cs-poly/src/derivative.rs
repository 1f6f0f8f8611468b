use core::fmt;
use core::str::FromStr;

use cs_core::CsError;

/// Which time derivative of the position is evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionDerivative {
    Pos,
    Vel,
    Acc,
    Jerk,
}

impl MotionDerivative {
    pub const ALL: [MotionDerivative; 4] = [
        MotionDerivative::Pos,
        MotionDerivative::Vel,
        MotionDerivative::Acc,
        MotionDerivative::Jerk,
    ];

    /// Order of the time derivative (position is 0).
    pub fn order(self) -> u32 {
        match self {
            MotionDerivative::Pos => 0,
            MotionDerivative::Vel => 1,
            MotionDerivative::Acc => 2,
            MotionDerivative::Jerk => 3,
        }
    }
}

impl fmt::Display for MotionDerivative {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MotionDerivative::Pos => "pos",
            MotionDerivative::Vel => "vel",
            MotionDerivative::Acc => "acc",
            MotionDerivative::Jerk => "jerk",
        };
        write!(f, "{name}")
    }
}

impl FromStr for MotionDerivative {
    type Err = CsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pos" | "position" => Ok(MotionDerivative::Pos),
            "vel" | "velocity" => Ok(MotionDerivative::Vel),
            "acc" | "acceleration" => Ok(MotionDerivative::Acc),
            "jerk" => Ok(MotionDerivative::Jerk),
            _ => Err(CsError::InvalidArg {
                what: "derivative must be pos, vel, acc or jerk",
            }),
        }
    }
}
