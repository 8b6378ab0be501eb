//! Least-squares trend line.
//!
//! Fallback model for histories too short for the ETS backend and for
//! targets at or before the end of the history. Evaluable at any day
//! offset, in-sample or out.

/// Ordinary least-squares line through (day offset, value) pairs.
#[derive(Debug, Clone, Copy)]
pub struct TrendLine {
    intercept: f64,
    slope: f64,
}

impl TrendLine {
    /// Closed-form OLS fit. The caller guarantees at least two points with
    /// distinct offsets.
    pub fn fit(offsets: &[f64], values: &[f64]) -> Self {
        let n = offsets.len() as f64;
        let mean_x = offsets.iter().sum::<f64>() / n;
        let mean_y = values.iter().sum::<f64>() / n;

        let mut sxx = 0.0;
        let mut sxy = 0.0;
        for (x, y) in offsets.iter().zip(values) {
            let dx = x - mean_x;
            sxx += dx * dx;
            sxy += dx * (y - mean_y);
        }

        let slope = if sxx == 0.0 { 0.0 } else { sxy / sxx };
        Self {
            intercept: mean_y - slope * mean_x,
            slope,
        }
    }

    pub fn value_at(&self, offset: f64) -> f64 {
        self.intercept + self.slope * offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_line_through_two_points() {
        let line = TrendLine::fit(&[0.0, 1.0], &[0.0, 1.0]);
        assert!((line.value_at(3.0) - 3.0).abs() < 1e-12);
        assert!((line.value_at(-1.0) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_best_fit_over_noisy_points() {
        // y = 2x + 1 with symmetric noise that cancels in the fit.
        let offsets = [0.0, 1.0, 2.0, 3.0];
        let values = [1.1, 2.9, 5.1, 6.9];

        let line = TrendLine::fit(&offsets, &values);
        assert!((line.value_at(4.0) - 9.0).abs() < 0.1);
    }

    #[test]
    fn test_flat_values_give_zero_slope() {
        let line = TrendLine::fit(&[0.0, 5.0, 9.0], &[4.0, 4.0, 4.0]);
        assert_eq!(line.value_at(100.0), 4.0);
    }
}
