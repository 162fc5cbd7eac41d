//! Ordinary least squares line over (time-ordinal, value) points.

use serde::{Deserialize, Serialize};

use crate::common::{band_error::BandError, enums::ExtremumKind};

/// Minimum number of points for a line fit
pub const MIN_FIT_POINTS: usize = 2;

/// Fitted line `y = slope * t + intercept`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    pub slope: f64,
    pub intercept: f64,
    pub n_points: usize,
    pub r_squared: f64,
}

impl LinearModel {
    /// Fit by OLS. `kind` only labels errors.
    ///
    /// Fails with `InsufficientData` below two points and with
    /// `DegenerateRegression` when every point shares one ordinal.
    pub fn fit(points: &[(f64, f64)], kind: ExtremumKind) -> Result<Self, BandError> {
        if points.len() < MIN_FIT_POINTS {
            return Err(BandError::InsufficientData {
                kind,
                required: MIN_FIT_POINTS,
                actual: points.len(),
            });
        }

        let n = points.len() as f64;
        let mean_t = points.iter().map(|&(t, _)| t).sum::<f64>() / n;
        let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

        // Centered sums keep large ordinals from cancelling.
        let (s_tt, s_ty) = points.iter().fold((0.0, 0.0), |(s_tt, s_ty), &(t, y)| {
            let dt = t - mean_t;
            (s_tt + dt * dt, s_ty + dt * (y - mean_y))
        });

        if s_tt <= 0.0 || !s_tt.is_finite() {
            return Err(BandError::DegenerateRegression {
                kind,
                msg: format!("{} points share a single time ordinal", points.len()),
            });
        }

        let slope = s_ty / s_tt;
        let intercept = mean_y - slope * mean_t;
        if !slope.is_finite() || !intercept.is_finite() {
            return Err(BandError::DegenerateRegression {
                kind,
                msg: format!("non-finite coefficients slope={} intercept={}", slope, intercept),
            });
        }

        let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y).powi(2)).sum();
        let ss_res: f64 = points
            .iter()
            .map(|&(t, y)| (y - (intercept + slope * t)).powi(2))
            .sum();
        let r_squared = if ss_tot > 1e-12 { 1.0 - ss_res / ss_tot } else { 1.0 };

        Ok(Self {
            slope,
            intercept,
            n_points: points.len(),
            r_squared,
        })
    }

    pub fn predict(&self, t: f64) -> f64 {
        self.slope * t + self.intercept
    }

    /// Evaluate at every ordinal in `ordinals`
    pub fn predict_all<I>(&self, ordinals: I) -> Vec<f64>
    where
        I: IntoIterator<Item = f64>,
    {
        ordinals.into_iter().map(|t| self.predict(t)).collect()
    }
}
