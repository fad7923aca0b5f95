/// Rounds a value to 2 decimal places for display.
///
/// Calculations keep full floating-point precision internally; rounding
/// happens once, at the result boundary.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(15.8333333), 15.83);
        assert_eq!(round2(17.41666), 17.42);
        assert_eq!(round2(-1.005), -1.0);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_idempotent() {
        for &x in &[0.004999, 12.345, 99.995, 1234.5678, -3.14159] {
            let once = round2(x);
            assert_eq!(round2(once), once);
        }
    }
}
