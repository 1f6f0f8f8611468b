/// Coefficient of a quintic `A t^5 + B t^4 + C t^3 + D t^2 + E t + F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Coeff {
    A = 0,
    B,
    C,
    D,
    E,
    F,
}

impl Coeff {
    pub const ALL: [Coeff; 6] = [Coeff::A, Coeff::B, Coeff::C, Coeff::D, Coeff::E, Coeff::F];

    /// Storage position inside a coefficient array.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Exponent of `t` this coefficient multiplies.
    pub fn power(self) -> u32 {
        5 - self as u32
    }
}
