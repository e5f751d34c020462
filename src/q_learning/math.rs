//! Numeric helpers for the Bayesian Q-learning update

/// One-step Q-learning (Bellman) update.
///
/// Q(s,a) ← Q(s,a) + α[r + γ max_a' Q(s',a') - Q(s,a)]
pub fn bellman(
    old_value: f64,
    learning_rate: f64,
    reward: f64,
    discount_factor: f64,
    best_next_value: f64,
) -> f64 {
    old_value + learning_rate * (reward + discount_factor * best_next_value - old_value)
}

/// Bayesian weighted average of an estimate `m` and an observation `v`.
///
/// * `c` - prior strength (the priming threshold)
/// * `n` - number of times `v` has been observed
/// * `m` - estimated value, typically the mean over sibling actions
/// * `v` - observed value
///
/// With `c == n` both values carry equal weight; as `n` grows the result
/// approaches `v`. Returns `0.0` when `c + n == 0`.
pub fn bayesian_average(c: f64, n: f64, m: f64, v: f64) -> f64 {
    safe_divide(c * m + n * v, c + n)
}

/// Division that yields `0.0` for a zero divisor.
pub fn safe_divide(dividend: f64, divisor: f64) -> f64 {
    if divisor == 0.0 {
        0.0
    } else {
        dividend / divisor
    }
}

/// Map NaN to zero, pass every other value through.
pub fn nan_to_zero(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value }
}
