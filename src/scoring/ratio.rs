/// Positive-to-negative interaction ratio at two-decimal precision.
///
/// With no negative interactions the true mathematical result is returned:
/// positive infinity when any positives exist, otherwise zero. Translating
/// infinity into a storage sentinel is the caller's responsibility.
pub fn interaction_ratio(positives: f64, negatives: f64) -> f64 {
    if negatives == 0.0 {
        return if positives > 0.0 { f64::INFINITY } else { 0.0 };
    }
    (positives / negatives * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divides_to_two_decimals() {
        assert_eq!(interaction_ratio(10.0, 2.0), 5.0);
        assert_eq!(interaction_ratio(7.0, 3.0), 2.33);
        assert_eq!(interaction_ratio(1.0, 3.0), 0.33);
    }

    #[test]
    fn zero_negatives_yields_infinity_or_zero() {
        assert_eq!(interaction_ratio(5.0, 0.0), f64::INFINITY);
        assert_eq!(interaction_ratio(0.0, 0.0), 0.0);
    }
}
