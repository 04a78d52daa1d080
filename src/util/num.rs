/// Converts an `f64` to `i64` if and only if the value is exactly an
/// integer in range.
///
/// Returns `None` for non-finite values, values with a fractional part,
/// and magnitudes outside the signed 64-bit range. The range check is
/// strict at the top end: `2^63` itself rounds out of range.
///
/// # Examples
/// ```
/// use minipy::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1024.0), Some(1024));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(0.5), None);
/// assert_eq!(f64_to_i64_exact(f64::NAN), None);
/// assert_eq!(f64_to_i64_exact(1e300), None);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }

    // i64::MAX is not exactly representable; 2^63 is, so bound strictly.
    let limit = 2f64.powi(63);
    if value < -limit || value >= limit {
        return None;
    }

    Some(value as i64)
}
