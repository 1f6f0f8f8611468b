use crate::CsError;

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute slack used when comparing global times against segment
/// boundaries (accumulated durations drift by a few ulps).
pub const TIME_EPS: Real = 1e-10;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, CsError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CsError::NonFinite { what, value: v })
    }
}

/// Finite and strictly positive.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, CsError> {
    let v = ensure_finite(v, what)?;
    if v > 0.0 {
        Ok(v)
    } else {
        Err(CsError::InvalidArg { what })
    }
}

/// Falling factorial `n * (n-1) * ... * (n-k+1)`, i.e. `n!/(n-k)!`.
///
/// Returns 0 when `k > n`.
pub fn falling_factorial(n: u32, k: u32) -> Real {
    if k > n {
        return 0.0;
    }
    ((n - k + 1)..=n).map(Real::from).product()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_positive_rejects_zero() {
        assert!(ensure_positive(0.0, "dt").is_err());
        assert!(ensure_positive(-1.0, "dt").is_err());
        assert_eq!(ensure_positive(0.5, "dt").unwrap(), 0.5);
    }

    #[test]
    fn falling_factorial_values() {
        assert_eq!(falling_factorial(5, 0), 1.0);
        assert_eq!(falling_factorial(5, 1), 5.0);
        assert_eq!(falling_factorial(5, 3), 60.0);
        assert_eq!(falling_factorial(3, 3), 6.0);
        assert_eq!(falling_factorial(2, 3), 0.0);
    }
}
