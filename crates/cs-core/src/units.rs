// cs-core/src/units.rs

use uom::si::f64::Time as UomTime;

// Public canonical unit types (SI, f64)
pub type Time = UomTime;

#[inline]
pub fn s(v: f64) -> Time {
    use uom::si::time::second;
    Time::new::<second>(v)
}

#[inline]
pub fn ms(v: f64) -> Time {
    use uom::si::time::millisecond;
    Time::new::<millisecond>(v)
}

/// Plain seconds, the unit every spline computation runs in.
#[inline]
pub fn seconds(t: Time) -> f64 {
    use uom::si::time::second;
    t.get::<second>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_smoke() {
        let _dt = s(0.1);
        let _rt = ms(150.0);
    }

    #[test]
    fn milliseconds_convert_to_seconds() {
        assert!((seconds(ms(150.0)) - 0.15).abs() < 1e-12);
        assert_eq!(seconds(s(1.5)), 1.5);
    }
}
