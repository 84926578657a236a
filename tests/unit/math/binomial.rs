//! Tests for Binomial mass and cumulative probabilities

#[cfg(test)]
mod tests {
    use poibin::algorithm::mode::UnimodalPmf;
    use poibin::io::error::DistributionError;
    use poibin::math::binomial::{Binomial, binomial_cdf, binomial_pmf};

    // Tests the fair coin mass function for four flips
    // Verified by swapping the success and failure exponents
    #[test]
    fn test_binomial_pmf_fair_coin() {
        assert!(binomial_pmf(2, 4, 0.5).is_ok_and(|p| (p - 0.375).abs() < f64::EPSILON));
        assert!(binomial_pmf(1, 2, 0.5).is_ok_and(|p| (p - 0.5).abs() < f64::EPSILON));
        assert!(binomial_pmf(0, 4, 0.5).is_ok_and(|p| (p - 0.0625).abs() < f64::EPSILON));
    }

    // Tests a skewed success probability
    // Verified by using p in place of 1 - p
    #[test]
    fn test_binomial_pmf_skewed() {
        // C(5,2) * 0.3^2 * 0.7^3
        let expected = 10.0 * 0.09 * 0.343;
        assert!(binomial_pmf(2, 5, 0.3).is_ok_and(|p| (p - expected).abs() < 1e-12));
    }

    // Tests degenerate probabilities and zero trials
    // Verified by special-casing 0^0 as 0
    #[test]
    fn test_binomial_pmf_edge_cases() {
        assert!(binomial_pmf(0, 0, 0.3).is_ok_and(|p| (p - 1.0).abs() < f64::EPSILON));
        assert!(binomial_pmf(0, 6, 0.0).is_ok_and(|p| (p - 1.0).abs() < f64::EPSILON));
        assert!(binomial_pmf(6, 6, 1.0).is_ok_and(|p| (p - 1.0).abs() < f64::EPSILON));
        assert!(binomial_pmf(3, 6, 1.0).is_ok_and(|p| p.abs() < f64::EPSILON));
    }

    // Tests that more successes than trials has zero probability
    // Verified by removing the k > n guard
    #[test]
    fn test_binomial_pmf_k_exceeds_n() {
        assert!(binomial_pmf(5, 4, 0.5).is_ok_and(|p| p.abs() < f64::EPSILON));
    }

    // Tests rejection of probabilities outside [0, 1]
    // Verified by skipping validation
    #[test]
    fn test_binomial_rejects_invalid_probability() {
        assert!(matches!(
            binomial_pmf(1, 4, 1.5),
            Err(DistributionError::InvalidProbability {
                operation: "binomial_pmf",
                ..
            })
        ));
        assert!(matches!(
            binomial_cdf(1, 4, f64::NAN),
            Err(DistributionError::InvalidProbability {
                operation: "binomial_cdf",
                ..
            })
        ));
        assert!(Binomial::new(3, -0.5).is_err());
    }

    // Tests cumulative sums including the clamped upper tail
    // Verified by summing over 0..k instead of 0..=k
    #[test]
    fn test_binomial_cdf() {
        assert!(binomial_cdf(1, 4, 0.5).is_ok_and(|p| (p - 0.3125).abs() < f64::EPSILON));
        assert!(binomial_cdf(0, 4, 0.5).is_ok_and(|p| (p - 0.0625).abs() < f64::EPSILON));
        assert!(binomial_cdf(4, 4, 0.5).is_ok_and(|p| (p - 1.0).abs() < 1e-12));
        assert!(binomial_cdf(40, 4, 0.5).is_ok_and(|p| (p - 1.0).abs() < 1e-12));
    }

    // Tests moments and the distribution value type
    // Verified by returning n * p for the variance
    #[test]
    fn test_binomial_value_type() {
        let Ok(binomial) = Binomial::new(10, 0.3) else {
            unreachable!("0.3 is a valid probability");
        };

        assert_eq!(binomial.trials(), 10);
        assert!((binomial.p() - 0.3).abs() < f64::EPSILON);
        assert!((binomial.mean() - 3.0).abs() < 1e-12);
        assert!((binomial.variance() - 2.1).abs() < 1e-12);
        assert_eq!(binomial.probabilities(), vec![0.3; 10]);
        assert!(binomial.pmf(3).is_ok_and(|p| (p - 0.266_827_932).abs() < 1e-9));
        assert!(binomial.cdf(10).is_ok_and(|p| (p - 1.0).abs() < 1e-12));
    }

    // Tests trial counts whose factorials overflow f64
    // Verified by forming n! / (n-k)! before dividing by k!
    #[test]
    fn test_binomial_pmf_hundreds_of_trials() {
        assert!(binomial_pmf(200, 400, 0.5).is_ok_and(|p| (p - 0.039_869_301_963_79).abs() < 1e-12));
        assert!(binomial_cdf(200, 400, 0.5).is_ok_and(|p| (p - 0.519_934_650_981_90).abs() < 1e-10));

        let Ok(binomial) = Binomial::new(400, 0.5) else {
            unreachable!("0.5 is a valid probability");
        };
        assert!(binomial.mode().is_ok_and(|mode| mode.max == Some(200)));
    }

    // Tests the log-space path once the coefficient itself exceeds f64::MAX
    // Verified by returning the direct product unconditionally
    #[test]
    fn test_binomial_pmf_coefficient_overflow() {
        assert!(binomial_pmf(1000, 2000, 0.5).is_ok_and(|p| (p - 0.017_839_011_145_854).abs() < 1e-10));
        assert!(binomial_cdf(1000, 2000, 0.5).is_ok_and(|p| (p - 0.508_919_505_572_93).abs() < 1e-9));
        assert!(binomial_pmf(360, 1200, 0.3).is_ok_and(|p| (p - 0.025_124_437_013_32).abs() < 1e-10));
    }
}
