use super::analyzer::compute_band_index;
use crate::band::band_output::BandOutput;
use crate::common::{
    band_error::BandError,
    enums::{Column, MetricKind},
};
use crate::config::band_config::BandConfig;
use crate::series::price_series::PriceSeries;
use crate::traits::metric_trait::{ChartSpec, Metric};

/// Band position index built on the two year moving average
#[derive(Debug, Clone, Default)]
pub struct TwoYearMovingAverageMetric {
    config: BandConfig,
}

impl TwoYearMovingAverageMetric {
    pub fn new(config: BandConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BandConfig {
        &self.config
    }
}

impl Metric for TwoYearMovingAverageMetric {
    fn name(&self) -> &str {
        "2YMA"
    }

    fn description(&self) -> &str {
        "2 Year Moving Average"
    }

    fn calculate(&self, series: &PriceSeries) -> Result<BandOutput, BandError> {
        compute_band_index(series, &self.config)
    }

    fn charts(&self) -> Vec<ChartSpec> {
        vec![
            ChartSpec {
                title: self.description().to_string(),
                columns: vec![Column::IndexFilled],
            },
            ChartSpec {
                title: format!("{} envelopes", self.name()),
                columns: vec![Column::PriceLog, Column::EnvelopeHighLog, Column::EnvelopeLowLog],
            },
        ]
    }
}

/// Metric registered under `kind`
pub fn get_metric(kind: MetricKind, config: BandConfig) -> Box<dyn Metric> {
    match kind {
        MetricKind::TwoYearMovingAverage => Box::new(TwoYearMovingAverageMetric::new(config)),
    }
}
