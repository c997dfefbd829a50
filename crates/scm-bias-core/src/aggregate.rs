//! Score aggregation over Likert slots.
//!
//! Unanswered slots are zero-filled and still count toward the divisor, so a
//! partially rated group reads lower than its answered items alone would.

/// Rounds to two decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Mean of `values` rounded to two decimals.
///
/// `None` and non-finite entries contribute `0.0`; the divisor is always
/// `values.len()`. An empty slice yields `0.0`.
pub fn mean<T>(values: &[Option<T>]) -> f64
where
    T: Copy + Into<f64>,
{
    if values.is_empty() {
        return 0.0;
    }

    let sum: f64 = values
        .iter()
        .copied()
        .map(|slot| {
            slot.map(Into::into)
                .filter(|v: &f64| v.is_finite())
                .unwrap_or(0.0)
        })
        .sum();

    round2(sum / values.len() as f64)
}
