pub fn is_approx_zero(value: f64, tolerance: f64) -> bool {
    value.abs() <= tolerance
}

pub fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
    is_approx_zero(a - b, tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_approx_zero() {
        assert!(is_approx_zero(0.0, 1e-9));
        assert!(is_approx_zero(-1e-10, 1e-9));
        assert!(!is_approx_zero(1e-3, 1e-9));
        assert!(is_approx_zero(1e-3, 1e-2));
    }

    #[test]
    fn test_approx_eq() {
        assert!(approx_eq(0.1 + 0.2, 0.3, 1e-9));
        assert!(!approx_eq(7.42, 7.43, 1e-5));
    }
}
