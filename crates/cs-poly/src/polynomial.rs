//! One-dimensional quintic in local time.

use cs_core::{Real, falling_factorial};

use crate::coeff::Coeff;
use crate::derivative::MotionDerivative;

/// `p(t) = A t^5 + B t^4 + C t^3 + D t^2 + E t + F` with `t` the local time
/// of the owning segment.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct QuinticPolynomial {
    coeffs: [Real; 6],
}

impl QuinticPolynomial {
    pub fn new(coeffs: [Real; 6]) -> Self {
        Self { coeffs }
    }

    pub fn coeff(&self, c: Coeff) -> Real {
        self.coeffs[c.index()]
    }

    pub fn set_coeff(&mut self, c: Coeff, value: Real) {
        self.coeffs[c.index()] = value;
    }

    /// Partial derivative of `d^k p / dt^k` with respect to coefficient `c`.
    ///
    /// For the term `c * t^n` this is `n!/(n-k)! * t^(n-k)` when `n >= k`
    /// and 0 otherwise. The polynomial is linear in its coefficients, so the
    /// result does not depend on the current coefficient values.
    pub fn sensitivity(deriv: MotionDerivative, c: Coeff, t: Real) -> Real {
        let n = c.power();
        let k = deriv.order();
        if n < k {
            return 0.0;
        }
        // n - k <= 5
        falling_factorial(n, k) * t.powi((n - k) as i32)
    }

    /// `d^k p / dt^k` at local time `t`.
    pub fn eval(&self, deriv: MotionDerivative, t: Real) -> Real {
        Coeff::ALL
            .iter()
            .map(|&c| self.coeff(c) * Self::sensitivity(deriv, c, t))
            .sum()
    }
}
