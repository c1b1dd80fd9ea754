//! Tests for the probability-to-parameter mappings

#[cfg(test)]
mod tests {
    use qmemento::MementoError;
    use qmemento::math::parameters::{
        collapse_shift, collapse_slice_count, entanglement_mix, tunneling_attenuation,
        tunneling_density, tunneling_shift, validate_probability,
    };

    // Tests slice counts at both ends of the range
    // Verified by using ceil instead of floor
    #[test]
    fn test_collapse_slice_count_bounds() {
        assert_eq!(collapse_slice_count(0.0), 10);
        assert_eq!(collapse_slice_count(1.0), 70);
        assert_eq!(collapse_slice_count(0.5), 40);
        assert_eq!(collapse_slice_count(0.999), 69);
    }

    // Tests shift scaling truncates toward zero
    // Verified by rounding instead of truncating
    #[test]
    fn test_collapse_shift() {
        assert_eq!(collapse_shift(499, 0.0), 0);
        assert_eq!(collapse_shift(200, 1.0), 200);
        assert_eq!(collapse_shift(333, 0.5), 166);
    }

    // Tests mask density endpoints
    // Verified by swapping base and span
    #[test]
    fn test_tunneling_density_bounds() {
        assert!((tunneling_density(0.0) - 0.05).abs() < 1e-12);
        assert!((tunneling_density(1.0) - 0.20).abs() < 1e-12);
    }

    // Tests layer shift and attenuation
    // Verified by attenuating with probability instead of its complement
    #[test]
    fn test_tunneling_shift_and_attenuation() {
        assert_eq!(tunneling_shift(0.0), 0);
        assert_eq!(tunneling_shift(0.5), 25);
        assert_eq!(tunneling_shift(1.0), 50);
        assert!((tunneling_attenuation(0.0) - 1.0).abs() < 1e-12);
        assert!((tunneling_attenuation(1.0) - 0.95).abs() < 1e-12);
    }

    // Tests the mix peaks at one half and vanishes at the ends
    // Verified by dropping the factor of two
    #[test]
    fn test_entanglement_mix() {
        assert!((entanglement_mix(0.5) - 1.0).abs() < f64::EPSILON);
        assert!(entanglement_mix(0.0).abs() < f64::EPSILON);
        assert!(entanglement_mix(1.0).abs() < f64::EPSILON);
        assert!((entanglement_mix(0.25) - 0.5).abs() < 1e-12);
        assert!((entanglement_mix(0.75) - 0.5).abs() < 1e-12);
    }

    // Tests probabilities outside the unit interval are rejected
    // Verified by using an open interval
    #[test]
    fn test_validate_probability() {
        assert!(validate_probability(0.0).is_ok());
        assert!(validate_probability(1.0).is_ok());
        for value in [-0.0001, 1.0001, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                validate_probability(value),
                Err(MementoError::InvalidProbability { .. })
            ));
        }
    }
}
