//! Shared numeric helpers for the proposal calculations.

/// Divides `numerator` by `denominator`, or returns `f64::INFINITY` when the
/// denominator is not positive.
///
/// The infinite result marks a ratio that is not meaningful (for example a
/// payback period with no savings). It is rendered as "N/A", never raised.
///
/// # Examples
///
/// ```
/// use solar_core::calculations::common::ratio_or_infinity;
///
/// assert_eq!(ratio_or_infinity(272000.0, 48000.0), 272000.0 / 48000.0);
/// assert_eq!(ratio_or_infinity(272000.0, 0.0), f64::INFINITY);
/// assert_eq!(ratio_or_infinity(272000.0, -1.0), f64::INFINITY);
/// ```
pub fn ratio_or_infinity(
    numerator: f64,
    denominator: f64,
) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        f64::INFINITY
    }
}

/// Sums `first_term * (1 + rate)^i` for `i` in `0..years`, one year at a time.
///
/// The yearly growth factors are accumulated in year order, without the
/// closed form, and scaled by `first_term` once at the end. With a zero rate
/// the factors sum to exactly `years`, so the total equals
/// `first_term * years` bit for bit.
///
/// # Examples
///
/// ```
/// use solar_core::calculations::common::growth_series_sum;
///
/// assert_eq!(growth_series_sum(100.0, 0.0, 25), 2500.0);
/// assert_eq!(growth_series_sum(100.0, 0.5, 3), 100.0 + 150.0 + 225.0);
/// assert_eq!(growth_series_sum(100.0, 0.04, 0), 0.0);
/// ```
pub fn growth_series_sum(
    first_term: f64,
    rate: f64,
    years: u32,
) -> f64 {
    let growth = 1.0 + rate;
    let mut factor = 1.0;
    let mut factor_sum = 0.0;
    for _ in 0..years {
        factor_sum += factor;
        factor *= growth;
    }
    first_term * factor_sum
}
