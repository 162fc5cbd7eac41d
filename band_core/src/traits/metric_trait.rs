use crate::band::band_output::BandOutput;
use crate::common::{band_error::BandError, enums::Column};
use crate::series::price_series::PriceSeries;

/// One chart of a metric report: a title and the columns drawn on it
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub columns: Vec<Column>,
}

pub trait Metric {
    /// Short name, used as a column or file prefix
    fn name(&self) -> &str;

    /// Human readable description, used as a chart title
    fn description(&self) -> &str;

    /// Compute every derived column without touching the input
    fn calculate(&self, series: &PriceSeries) -> Result<BandOutput, BandError>;

    /// Charts to draw from a computed output, in axis order
    fn charts(&self) -> Vec<ChartSpec>;
}
