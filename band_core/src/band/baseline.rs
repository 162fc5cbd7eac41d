use tracing::debug;

use crate::common::{
    band_error::BandError,
    utils::{column_diff, opt_ln},
};
use crate::config::band_config::BandConfig;
use crate::math::rolling_mean::trailing_mean;
use crate::series::price_series::PriceSeries;

/// Smoothed baseline and the log-space distances of price from it.
///
/// Every column is aligned with the input series; `None` marks rows where
/// the window has not filled yet.
#[derive(Debug, Clone, PartialEq)]
pub struct Baseline {
    pub baseline: Vec<Option<f64>>,
    pub baseline_log: Vec<Option<f64>>,
    pub baseline_scaled: Vec<Option<f64>>,
    pub baseline_scaled_log: Vec<Option<f64>>,
    /// `baseline_scaled_log - baseline_log`, i.e. ln of the scale factor
    pub log_difference: Vec<Option<f64>>,
    /// Price above the scaled baseline, in log space
    pub overshoot: Vec<Option<f64>>,
    /// Price above the unscaled baseline, in log space
    pub undershoot: Vec<Option<f64>>,
}

impl Baseline {
    /// Validate the series and derive the baseline columns.
    ///
    /// A single non-positive price anywhere aborts with `InvalidInput`.
    pub fn build(series: &PriceSeries, config: &BandConfig) -> Result<Self, BandError> {
        series.check()?;

        let baseline = trailing_mean(&series.prices(), config.window_days);
        let baseline_log: Vec<Option<f64>> = baseline.iter().map(|&b| opt_ln(b)).collect();
        let baseline_scaled: Vec<Option<f64>> = baseline
            .iter()
            .map(|b| b.map(|b| b * config.high_scale_factor))
            .collect();
        let baseline_scaled_log: Vec<Option<f64>> =
            baseline_scaled.iter().map(|&b| opt_ln(b)).collect();

        let price_log: Vec<Option<f64>> = series.iter().map(|r| Some(r.price_log)).collect();
        let log_difference = column_diff(&baseline_scaled_log, &baseline_log);
        let overshoot = column_diff(&price_log, &baseline_scaled_log);
        let undershoot = column_diff(&price_log, &baseline_log);

        debug!(
            rows = series.len(),
            defined = baseline.iter().filter(|b| b.is_some()).count(),
            window_days = config.window_days,
            "baseline built"
        );

        Ok(Self {
            baseline,
            baseline_log,
            baseline_scaled,
            baseline_scaled_log,
            log_difference,
            overshoot,
            undershoot,
        })
    }

    pub fn is_defined(&self, row: usize) -> bool {
        self.baseline.get(row).is_some_and(Option::is_some)
    }

    /// First row with a defined baseline, if any
    pub fn first_defined(&self) -> Option<usize> {
        self.baseline.iter().position(Option::is_some)
    }
}
