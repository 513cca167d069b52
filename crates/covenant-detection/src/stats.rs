//! Windowed descriptive statistics over guilt-score sequences.
//!
//! Population variants throughout (divide by N, not N-1) so small windows
//! reproduce exactly across runs and platforms. All functions return 0 for
//! inputs too short to define the statistic instead of panicking; the window
//! analyzer short-circuits empty windows before reaching here, so the zero
//! returns only cover defensive paths.

use covenant_core::WindowStats;

/// Arithmetic mean. Returns 0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation. Returns 0 for fewer than two values.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Ordinary least-squares slope of `values[i]` against index `i`.
///
/// A single value has no trend and yields 0. A constant sequence yields 0.
pub fn slope(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let n_f = n as f64;
    let mean_x = (n_f - 1.0) / 2.0;
    let mean_y = mean(values);

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for (i, &y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        numerator += dx * (y - mean_y);
        denominator += dx * dx;
    }
    // denominator is 0 only for n < 2, which was handled above
    numerator / denominator
}

/// Successive differences: `deltas[0] = 0`, `deltas[i] = values[i] - values[i-1]`.
pub fn deltas(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let mut out = Vec::with_capacity(values.len());
    out.push(0.0);
    for pair in values.windows(2) {
        out.push(pair[1] - pair[0]);
    }
    out
}

/// Exponentially weighted moving average over the whole slice.
///
/// Seeded with the first value: `ewma_0 = values[0]`,
/// `ewma_i = alpha * values[i] + (1 - alpha) * ewma_{i-1}`.
/// Returns 0 for an empty slice.
pub fn ewma(values: &[f64], alpha: f64) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return 0.0;
    };
    rest.iter()
        .fold(first, |acc, &v| alpha * v + (1.0 - alpha) * acc)
}

/// Compute the full statistics block for a window.
pub fn compute(values: &[f64]) -> WindowStats {
    WindowStats {
        mean: mean(values),
        std_dev: std_dev(values),
        slope: slope(values),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn mean_of_empty_is_zero() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn single_value_has_flat_stats() {
        let stats = compute(&[0.4]);
        assert!((stats.mean - 0.4).abs() < EPS);
        assert_eq!(stats.std_dev, 0.0);
        assert_eq!(stats.slope, 0.0);
    }

    #[test]
    fn constant_sequence_has_zero_spread_and_trend() {
        let stats = compute(&[0.25, 0.25, 0.25, 0.25]);
        assert!((stats.mean - 0.25).abs() < EPS);
        assert!(stats.std_dev.abs() < EPS);
        assert!(stats.slope.abs() < EPS);
    }

    #[test]
    fn std_dev_is_population_variant() {
        // Population std of [0, 1] is 0.5; sample std would be ~0.707.
        assert!((std_dev(&[0.0, 1.0]) - 0.5).abs() < EPS);
    }

    #[test]
    fn std_dev_is_never_negative() {
        for values in [&[0.1, 0.9, 0.3][..], &[0.0, 0.0][..], &[1.0][..]] {
            assert!(std_dev(values) >= 0.0);
        }
    }

    #[test]
    fn slope_recovers_linear_trend() {
        // y = 0.1 * i + 0.2
        let values = [0.2, 0.3, 0.4, 0.5, 0.6];
        assert!((slope(&values) - 0.1).abs() < EPS);
    }

    #[test]
    fn slope_of_descending_sequence_is_negative() {
        assert!(slope(&[0.9, 0.6, 0.3]) < 0.0);
    }

    #[test]
    fn deltas_start_at_zero() {
        let d = deltas(&[0.1, 0.12, 0.8]);
        assert_eq!(d.len(), 3);
        assert_eq!(d[0], 0.0);
        assert!((d[1] - 0.02).abs() < EPS);
        assert!((d[2] - 0.68).abs() < EPS);
    }

    #[test]
    fn deltas_of_empty_is_empty() {
        assert!(deltas(&[]).is_empty());
    }

    #[test]
    fn ewma_is_seeded_with_first_value() {
        assert!((ewma(&[0.1], 0.3) - 0.1).abs() < EPS);
        // ewma([0.1, 0.12]) = 0.3 * 0.12 + 0.7 * 0.1 = 0.106
        assert!((ewma(&[0.1, 0.12], 0.3) - 0.106).abs() < EPS);
    }
}
