use std::collections::VecDeque;

/// Trailing simple moving average over a fixed window.
///
/// Undefined until `period` values have been seen.
#[derive(Debug, Clone)]
pub struct RollingMean {
    period: usize,
    prices: VecDeque<f64>,
    sum: f64,
}

impl RollingMean {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            prices: VecDeque::with_capacity(period),
            sum: 0.0,
        }
    }

    pub fn add(&mut self, price: f64) -> Option<f64> {
        self.prices.push_back(price);
        self.sum += price;
        if self.prices.len() > self.period {
            if let Some(old) = self.prices.pop_front() {
                self.sum -= old;
            }
        }

        if self.period > 0 && self.prices.len() == self.period {
            Some(self.sum / self.period as f64)
        } else {
            None
        }
    }
}

/// Trailing mean of `values` aligned with the input.
pub fn trailing_mean(values: &[f64], period: usize) -> Vec<Option<f64>> {
    let mut model = RollingMean::new(period);
    values.iter().map(|&v| model.add(v)).collect()
}
