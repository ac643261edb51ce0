//! Period-over-period returns.

use stockscope_core::traits::Indicator;

/// Simple returns between consecutive values: `(curr - prev) / prev`.
///
/// Pairs whose previous value is not positive are skipped, so the output can
/// be shorter than `data.len() - 1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleReturns;

impl Indicator for SimpleReturns {
    type Output = f64;

    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        data.windows(2)
            .filter(|w| w[0] > 0.0)
            .map(|w| (w[1] - w[0]) / w[0])
            .collect()
    }

    fn period(&self) -> usize {
        2
    }

    fn name(&self) -> &str {
        "Returns"
    }
}
