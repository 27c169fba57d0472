//! Small numeric helpers for the score engine and the forecaster.

/// Arithmetic mean, `None` for an empty slice
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by n)
pub fn population_std(values: &[f64]) -> Option<f64> {
    let m = mean(values)?;
    let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    Some(var.sqrt())
}

/// Coefficient of variation: population std / |mean|.
///
/// `None` for fewer than two values or a zero mean.
pub fn coefficient_of_variation(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let m = mean(values)?;
    if m == 0.0 {
        return None;
    }
    Some(population_std(values)? / m.abs())
}

/// Least-squares line through `(i, values[i])` for `i = 0..n`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Fit a degree-1 line. Needs at least two points.
    pub fn fit(values: &[f64]) -> Option<Self> {
        let n = values.len();
        if n < 2 {
            return None;
        }
        let x_mean = (n - 1) as f64 / 2.0;
        let y_mean = mean(values)?;

        let (num, den) = values
            .iter()
            .enumerate()
            .fold((0.0, 0.0), |(num, den), (i, y)| {
                let dx = i as f64 - x_mean;
                (num + dx * (y - y_mean), den + dx * dx)
            });

        let slope = num / den;
        Some(Self {
            slope,
            intercept: y_mean - slope * x_mean,
        })
    }

    pub fn at(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Fitted values at `0..n`
    pub fn points(&self, n: usize) -> Vec<f64> {
        (0..n).map(|i| self.at(i as f64)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_mean_and_std() {
        assert_eq!(mean(&[]), None);
        assert!(close(mean(&[2.0, 4.0, 6.0]).unwrap(), 4.0));
        // population std of [2, 4, 4, 4, 5, 5, 7, 9] is exactly 2
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(close(population_std(&v).unwrap(), 2.0));
    }

    #[test]
    fn test_cv_needs_two_values() {
        assert_eq!(coefficient_of_variation(&[10.0]), None);
        assert_eq!(coefficient_of_variation(&[1.0, -1.0]), None);
        // uses |mean| so negative daily sums behave like magnitudes
        let cv = coefficient_of_variation(&[-10.0, -30.0]).unwrap();
        assert!(close(cv, 0.5));
    }

    #[test]
    fn test_linear_fit() {
        let fit = LinearFit::fit(&[100.0, 200.0]).unwrap();
        assert!(close(fit.slope, 100.0));
        assert!(close(fit.intercept, 100.0));

        let fit = LinearFit::fit(&[3.0, 5.0, 4.0]).unwrap();
        assert!(close(fit.slope, 0.5));
        assert!(close(fit.at(2.0), 4.5));
        assert_eq!(fit.points(3).len(), 3);

        assert!(LinearFit::fit(&[1.0]).is_none());
    }
}
