use tracing::debug;

use super::{baseline::Baseline, extremum::ExtremumSet};
use crate::common::{band_error::BandError, utils::zip_defined};
use crate::math::linear_model::LinearModel;

/// High and low envelopes projected across the whole series.
///
/// The model columns are defined on every row. The envelopes add the
/// baseline back, so they stay undefined where the baseline is.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub overshoot_model: LinearModel,
    pub undershoot_model: LinearModel,
    pub overshoot_fit: Vec<f64>,
    pub undershoot_fit: Vec<f64>,
    pub high_log: Vec<Option<f64>>,
    pub low_log: Vec<Option<f64>>,
}

impl Envelope {
    /// Fit one line per extremum class and evaluate both on `0..rows`.
    ///
    /// The high envelope is anchored on the scaled baseline, the low one on
    /// the unscaled baseline.
    pub fn regress(
        highs: &ExtremumSet,
        lows: &ExtremumSet,
        baseline: &Baseline,
        rows: usize,
    ) -> Result<Self, BandError> {
        let overshoot_model = LinearModel::fit(&highs.points, highs.kind)?;
        let undershoot_model = LinearModel::fit(&lows.points, lows.kind)?;
        debug!(
            slope = overshoot_model.slope,
            intercept = overshoot_model.intercept,
            r2 = overshoot_model.r_squared,
            "overshoot model fitted"
        );
        debug!(
            slope = undershoot_model.slope,
            intercept = undershoot_model.intercept,
            r2 = undershoot_model.r_squared,
            "undershoot model fitted"
        );

        let ordinals = || (0..rows).map(|t| t as f64);
        let overshoot_fit = overshoot_model.predict_all(ordinals());
        let undershoot_fit = undershoot_model.predict_all(ordinals());

        let high_log = baseline
            .baseline_scaled_log
            .iter()
            .zip(&overshoot_fit)
            .map(|(&b, &m)| zip_defined(b, Some(m), |b, m| b + m))
            .collect();
        let low_log = baseline
            .baseline_log
            .iter()
            .zip(&undershoot_fit)
            .map(|(&b, &m)| zip_defined(b, Some(m), |b, m| b + m))
            .collect();

        Ok(Self {
            overshoot_model,
            undershoot_model,
            overshoot_fit,
            undershoot_fit,
            high_log,
            low_log,
        })
    }
}
