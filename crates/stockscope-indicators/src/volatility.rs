//! Volatility indicators.

/// Population standard deviation (divides by the count, not count - 1).
///
/// Returns `None` for an empty slice.
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    let count = data.len() as f64;
    let mean = data.iter().sum::<f64>() / count;
    let variance = data.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / count;
    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_population_std_dev() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((population_std_dev(&data).unwrap() - 2.0).abs() < 1e-12);

        assert_eq!(population_std_dev(&[3.5]), Some(0.0));
        assert_eq!(population_std_dev(&[]), None);
    }
}
