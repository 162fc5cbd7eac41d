use crate::band::band_output::BandOutput;
use crate::common::band_error::BandError;
use crate::series::price_series::PriceSeries;
use crate::traits::metric_trait::ChartSpec;

/// Presentation collaborator; it reads the data and never changes it.
pub trait ChartRenderer {
    /// Drawing target of one chart
    type Axis;

    /// Draw the columns of `chart` onto `axis`
    fn render(
        &mut self,
        series: &PriceSeries,
        output: &BandOutput,
        chart: &ChartSpec,
        axis: &mut Self::Axis,
    ) -> Result<(), BandError>;
}
