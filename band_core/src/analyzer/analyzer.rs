use tracing::{debug, info};

use crate::band::{
    band_output::BandOutput, baseline::Baseline, envelope::Envelope, extremum::ExtremumSet,
    index::BandIndex,
};
use crate::common::{band_error::BandError, enums::ExtremumKind};
use crate::config::band_config::BandConfig;
use crate::series::price_series::PriceSeries;
use crate::traits::{chart_trait::ChartRenderer, metric_trait::Metric};

/// Run the four stages over `series` and return the derived columns.
///
/// Either error aborts the whole computation; there is no partial output.
pub fn compute_band_index(
    series: &PriceSeries,
    config: &BandConfig,
) -> Result<BandOutput, BandError> {
    config.validate()?;

    let baseline = Baseline::build(series, config)?;
    let highs = ExtremumSet::select(ExtremumKind::High, series, &baseline)?;
    let lows = ExtremumSet::select(ExtremumKind::Low, series, &baseline)?;
    let envelope = Envelope::regress(&highs, &lows, &baseline, series.len())?;
    let band_index = BandIndex::normalize(
        &series.price_logs(),
        &envelope.high_log,
        &envelope.low_log,
        config.degenerate_epsilon,
    );

    info!(
        rows = series.len(),
        defined = band_index.defined_count(),
        last = ?band_index.last_defined(),
        "band index computed"
    );

    Ok(BandOutput {
        config: *config,
        baseline,
        envelope,
        band_index,
    })
}

/// Hand each chart of `metric` to `renderer`, one axis per chart.
pub fn report<R: ChartRenderer>(
    metric: &dyn Metric,
    series: &PriceSeries,
    output: &BandOutput,
    renderer: &mut R,
    axes: &mut [R::Axis],
) -> Result<(), BandError> {
    let charts = metric.charts();
    if axes.len() < charts.len() {
        return Err(BandError::Render(format!(
            "{} needs {} axes, got {}",
            metric.name(),
            charts.len(),
            axes.len()
        )));
    }

    for (chart, axis) in charts.iter().zip(axes.iter_mut()) {
        debug!(title = %chart.title, columns = chart.columns.len(), "rendering chart");
        renderer.render(series, output, chart, axis)?;
    }
    Ok(())
}
