use core::fmt;
use core::str::FromStr;

use cs_core::CsError;

/// Number of spatial dimensions a segment moves in.
pub const DIM2: usize = 2;

/// Planar spatial dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Dim2 {
    X = 0,
    Y = 1,
}

impl Dim2 {
    pub const ALL: [Dim2; DIM2] = [Dim2::X, Dim2::Y];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for Dim2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dim2::X => write!(f, "x"),
            Dim2::Y => write!(f, "y"),
        }
    }
}

impl FromStr for Dim2 {
    type Err = CsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Dim2::X),
            "y" => Ok(Dim2::Y),
            _ => Err(CsError::InvalidArg {
                what: "dimension must be x or y",
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for dim in Dim2::ALL {
            assert_eq!(Dim2::from_index(dim.index()), Some(dim));
        }
        assert_eq!(Dim2::from_index(2), None);
    }

    #[test]
    fn parse_dimension() {
        assert_eq!("x".parse::<Dim2>().unwrap(), Dim2::X);
        assert_eq!(" Y ".parse::<Dim2>().unwrap(), Dim2::Y);
        assert!("z".parse::<Dim2>().is_err());
    }
}
