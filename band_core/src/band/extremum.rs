use tracing::debug;

use super::baseline::Baseline;
use crate::common::{band_error::BandError, enums::ExtremumKind};
use crate::math::linear_model::MIN_FIT_POINTS;
use crate::series::price_series::PriceSeries;

/// `(time ordinal, deviation)` pairs of one extremum class
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremumSet {
    pub kind: ExtremumKind,
    pub points: Vec<(f64, f64)>,
}

impl ExtremumSet {
    /// Rows flagged as `kind` whose baseline is defined.
    ///
    /// Highs carry the overshoot, lows the undershoot.
    pub fn select(
        kind: ExtremumKind,
        series: &PriceSeries,
        baseline: &Baseline,
    ) -> Result<Self, BandError> {
        let deviation = match kind {
            ExtremumKind::High => &baseline.overshoot,
            ExtremumKind::Low => &baseline.undershoot,
        };

        let points: Vec<(f64, f64)> = series
            .iter()
            .enumerate()
            .filter(|(_, rec)| match kind {
                ExtremumKind::High => rec.is_local_high,
                ExtremumKind::Low => rec.is_local_low,
            })
            .filter_map(|(row, _)| deviation[row].map(|d| (row as f64, d)))
            .collect();

        if points.len() < MIN_FIT_POINTS {
            return Err(BandError::InsufficientData {
                kind,
                required: MIN_FIT_POINTS,
                actual: points.len(),
            });
        }

        debug!(%kind, points = points.len(), "extrema selected");
        Ok(Self { kind, points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
