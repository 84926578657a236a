//! Tests for probability range checks and vector length validation

#[cfg(test)]
mod tests {
    use poibin::io::error::DistributionError;
    use poibin::math::validation::{
        checked_probability, validate_probabilities, validate_probability,
    };

    // Tests acceptance of the closed unit interval
    // Verified by using an exclusive range
    #[test]
    fn test_validate_probability_bounds() {
        assert!(validate_probability("test", 0.0).is_ok());
        assert!(validate_probability("test", 1.0).is_ok());
        assert!(validate_probability("test", 0.5).is_ok_and(|p| (p - 0.5).abs() < f64::EPSILON));
    }

    // Tests rejection of out-of-range and non-finite values
    // Verified by checking only the upper bound
    #[test]
    fn test_validate_probability_rejects() {
        for value in [-0.1, 1.000_001, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                validate_probability("binomial_pmf", value),
                Err(DistributionError::InvalidProbability {
                    operation: "binomial_pmf",
                    index: None,
                    ..
                })
            ));
        }
    }

    // Tests the length check against the trial count
    // Verified by comparing against n + 1
    #[test]
    fn test_validate_probabilities_length() {
        assert!(validate_probabilities("op", 2, &[0.1, 0.2]).is_ok());
        assert!(validate_probabilities("op", 0, &[]).is_ok());

        let result = validate_probabilities("poisson_binomial_cdf", 3, &[0.2, 0.3]);
        assert!(matches!(
            result,
            Err(DistributionError::InvalidArgument {
                operation: "poisson_binomial_cdf",
                ..
            })
        ));
    }

    // Tests that the first offending entry is reported
    // Verified by reporting the last offending entry
    #[test]
    fn test_validate_probabilities_reports_first_bad_entry() {
        let result = validate_probabilities("op", 4, &[0.1, -0.2, 0.3, 2.0]);

        assert!(matches!(
            result,
            Err(DistributionError::InvalidProbability {
                index: Some(1),
                ..
            })
        ));
    }

    // Tests clamping of rounding noise and rejection of real errors
    // Verified by removing the slack tolerance
    #[test]
    fn test_checked_probability() {
        assert!(checked_probability("op", 1.0 + 1e-13).is_ok_and(|p| (p - 1.0).abs() < f64::EPSILON));
        assert!(checked_probability("op", -1e-13).is_ok_and(|p| p.abs() < f64::EPSILON));
        assert!(checked_probability("op", 0.25).is_ok_and(|p| (p - 0.25).abs() < f64::EPSILON));

        assert!(matches!(
            checked_probability("op", 1.1),
            Err(DistributionError::Computation { .. })
        ));
        assert!(checked_probability("op", f64::NAN).is_err());
        assert!(checked_probability("op", f64::INFINITY).is_err());
    }
}
