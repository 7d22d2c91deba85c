// ---------------------------------------------------------------------------
// Descriptive statistics backing the charts tab
// ---------------------------------------------------------------------------

/// Unit-width integer histogram: bin `start + i` counts values `v` with
/// `start + i <= v < start + i + 1`.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub start: i64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Iterate `(bin_value, count)` pairs.
    pub fn bins(&self) -> impl Iterator<Item = (i64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &count)| (self.start + i as i64, count))
    }
}

/// Histogram of values bucketed to unit-width integer bins, NaN ignored.
/// `None` when no finite values remain.
pub fn discrete_histogram(values: &[f64]) -> Option<Histogram> {
    let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    let first = *finite.first()?;

    let (min, max) = finite.iter().fold((first, first), |(lo, hi), &v| {
        (lo.min(v), hi.max(v))
    });
    let start = min.floor() as i64;
    let end = max.floor() as i64;

    let mut counts = vec![0usize; (end - start + 1) as usize];
    for v in finite {
        counts[(v.floor() as i64 - start) as usize] += 1;
    }
    Some(Histogram { start, counts })
}

/// Linear-interpolation quantile, `q` in `[0, 1]`, NaN ignored.
pub fn quantile(values: &[f64], q: f64) -> Option<f64> {
    let mut finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
    if finite.is_empty() || !(0.0..=1.0).contains(&q) {
        return None;
    }
    finite.sort_by(f64::total_cmp);

    let position = q * (finite.len() - 1) as f64;
    let lo = position.floor() as usize;
    let hi = position.ceil() as usize;
    let fraction = position - lo as f64;
    Some(finite[lo] + (finite[hi] - finite[lo]) * fraction)
}

/// Tukey outlier fence: `(Q1 - 1.5·IQR, Q3 + 1.5·IQR)`.
pub fn iqr_bounds(values: &[f64]) -> Option<(f64, f64)> {
    let q1 = quantile(values, 0.25)?;
    let q3 = quantile(values, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - 1.5 * iqr, q3 + 1.5 * iqr))
}

/// A least-squares regression line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn y_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}

/// Ordinary least squares over `(x, y)` points. `None` with fewer than two
/// points or when every x is the same (vertical line).
pub fn linear_fit(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.len() < 2 {
        return None;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = points.iter().map(|(_, y)| y).sum::<f64>() / n;

    let mut covariance = 0.0;
    let mut variance_x = 0.0;
    for &(x, y) in points {
        covariance += (x - mean_x) * (y - mean_y);
        variance_x += (x - mean_x) * (x - mean_x);
    }
    if variance_x == 0.0 {
        return None;
    }

    let slope = covariance / variance_x;
    Some(LinearFit {
        slope,
        intercept: mean_y - slope * mean_x,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn histogram_counts_unit_bins() {
        let hist = discrete_histogram(&[1.0, 1.5, 2.0, 4.0, 4.9]).unwrap();
        assert_eq!(hist.start, 1);
        assert_eq!(hist.counts, vec![2, 1, 0, 2]);
        let bins: Vec<_> = hist.bins().collect();
        assert_eq!(bins, vec![(1, 2), (2, 1), (3, 0), (4, 2)]);
    }

    #[test]
    fn histogram_ignores_nan_and_handles_empty() {
        assert_eq!(discrete_histogram(&[]), None);
        assert_eq!(discrete_histogram(&[f64::NAN]), None);
        let hist = discrete_histogram(&[f64::NAN, 3.0]).unwrap();
        assert_eq!(hist.counts, vec![1]);
    }

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 1.0), Some(4.0));
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        assert_eq!(quantile(&values, 0.25), Some(1.75));
    }

    #[test]
    fn quantile_rejects_bad_input() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[1.0], 1.5), None);
    }

    #[test]
    fn iqr_bounds_match_hand_computation() {
        // Q1 = 1.75, Q3 = 3.25, IQR = 1.5.
        let (lo, hi) = iqr_bounds(&[1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((lo - (-0.5)).abs() < 1e-12);
        assert!((hi - 5.5).abs() < 1e-12);
    }

    #[test]
    fn linear_fit_recovers_an_exact_line() {
        let fit = linear_fit(&[(0.0, 1.0), (1.0, 3.0), (2.0, 5.0)]).unwrap();
        assert!((fit.slope - 2.0).abs() < 1e-12);
        assert!((fit.intercept - 1.0).abs() < 1e-12);
        assert!((fit.y_at(3.0) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn linear_fit_rejects_degenerate_input() {
        assert_eq!(linear_fit(&[(1.0, 2.0)]), None);
        assert_eq!(linear_fit(&[(1.0, 2.0), (1.0, 5.0)]), None);
    }
}
