use super::{baseline::Baseline, envelope::Envelope, index::BandIndex};
use crate::common::enums::Column;
use crate::config::band_config::BandConfig;
use crate::math::linear_model::LinearModel;
use crate::series::price_series::PriceSeries;

/// Every derived column of one computation, aligned with the input series
#[derive(Debug, Clone, PartialEq)]
pub struct BandOutput {
    pub config: BandConfig,
    pub baseline: Baseline,
    pub envelope: Envelope,
    pub band_index: BandIndex,
}

impl BandOutput {
    pub fn len(&self) -> usize {
        self.band_index.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.band_index.index.is_empty()
    }

    /// The returned series of the computation
    pub fn index(&self) -> &[Option<f64>] {
        &self.band_index.index
    }

    pub fn index_filled(&self) -> &[f64] {
        &self.band_index.index_filled
    }

    pub fn overshoot_model(&self) -> &LinearModel {
        &self.envelope.overshoot_model
    }

    pub fn undershoot_model(&self) -> &LinearModel {
        &self.envelope.undershoot_model
    }

    /// Values of `col`; input columns are read from `series`.
    pub fn column(&self, col: Column, series: &PriceSeries) -> Vec<Option<f64>> {
        let defined = |v: &[f64]| -> Vec<Option<f64>> { v.iter().map(|&x| Some(x)).collect() };
        match col {
            Column::Price => series.iter().map(|r| Some(r.price)).collect(),
            Column::PriceLog => series.iter().map(|r| Some(r.price_log)).collect(),
            Column::Baseline => self.baseline.baseline.clone(),
            Column::BaselineLog => self.baseline.baseline_log.clone(),
            Column::BaselineScaled => self.baseline.baseline_scaled.clone(),
            Column::BaselineScaledLog => self.baseline.baseline_scaled_log.clone(),
            Column::LogDifference => self.baseline.log_difference.clone(),
            Column::Overshoot => self.baseline.overshoot.clone(),
            Column::Undershoot => self.baseline.undershoot.clone(),
            Column::OvershootModel => defined(&self.envelope.overshoot_fit),
            Column::UndershootModel => defined(&self.envelope.undershoot_fit),
            Column::EnvelopeHighLog => self.envelope.high_log.clone(),
            Column::EnvelopeLowLog => self.envelope.low_log.clone(),
            Column::Index => self.band_index.index.clone(),
            Column::IndexFilled => defined(&self.band_index.index_filled),
        }
    }
}
