//! Scalar angle helpers shared by the calculator and the boundary math.

/// Converts degrees to radians.
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

/// Signed difference `to - from`, in radians.
///
/// Order matters: the sign feeds straight into the haversine terms.
#[inline]
pub fn diff_radians(from_degrees: f64, to_degrees: f64) -> f64 {
    to_radians(to_degrees) - to_radians(from_degrees)
}

/// Converts radians to degrees.
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians.to_degrees()
}

/// Converts an angle in radians (as returned by `atan2`) to a compass
/// bearing in `[0, 360)` degrees.
#[inline]
pub fn to_bearing_degrees(radians: f64) -> f64 {
    (to_degrees(radians) + 360.0) % 360.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_to_radians() {
        assert!((to_radians(34.0675918) - 0.594_591_645_135_421_6).abs() < EPSILON);
        assert!((to_radians(180.0) - std::f64::consts::PI).abs() < EPSILON);
    }

    #[test]
    fn test_diff_radians_is_signed() {
        let forward = diff_radians(34.0675918, 35.076234);
        assert!((forward - 0.017_604_127_364_559_075).abs() < EPSILON);
        assert!((diff_radians(35.076234, 34.0675918) + forward).abs() < EPSILON);
    }

    #[test]
    fn test_to_degrees() {
        let result = to_degrees(1.834_479_987_161_686_6);
        assert!((result - 105.107_960_865_578_09).abs() < 1e-9);
    }

    #[test]
    fn test_to_bearing_degrees_normalizes_negative_angles() {
        let east_south_east = to_bearing_degrees(1.834_479_987_161_686_6);
        assert!((east_south_east - 105.107_960_865_578_09).abs() < 1e-9);
        assert!((to_bearing_degrees(-std::f64::consts::FRAC_PI_2) - 270.0).abs() < 1e-9);
        assert_eq!(to_bearing_degrees(0.0), 0.0);
        // atan2 tops out at +pi, which lands on 180 rather than 360
        assert!((to_bearing_degrees(std::f64::consts::PI) - 180.0).abs() < 1e-9);
    }
}
