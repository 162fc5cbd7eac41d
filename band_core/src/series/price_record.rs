use serde::{Deserialize, Serialize};

use crate::common::{band_error::BandError, time::TradeDate};

/// Log-space gap between a host-supplied log price and ln(price) that still
/// counts as rounding
pub const PRICE_LOG_TOLERANCE: f64 = 1e-4;

/// One daily observation, annotated upstream with its extremum flags
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: TradeDate,
    pub price: f64,
    pub price_log: f64,
    pub is_local_high: bool,
    pub is_local_low: bool,
}

impl PriceRecord {
    /// Build a record, taking the log of `price` here.
    ///
    /// A non-positive price yields a non-finite log, which `check` rejects.
    pub fn new(date: TradeDate, price: f64, is_local_high: bool, is_local_low: bool) -> Self {
        Self {
            date,
            price,
            price_log: price.ln(),
            is_local_high,
            is_local_low,
        }
    }

    /// Build a record with a log price computed by the host
    pub fn with_log(
        date: TradeDate,
        price: f64,
        price_log: f64,
        is_local_high: bool,
        is_local_low: bool,
    ) -> Self {
        Self {
            date,
            price,
            price_log,
            is_local_high,
            is_local_low,
        }
    }

    /// Whether the stored log agrees with ln(price) up to rounding
    pub fn log_is_consistent(&self) -> bool {
        (self.price_log - self.price.ln()).abs() <= PRICE_LOG_TOLERANCE
    }

    /// Same row with the log recomputed from the price
    pub fn with_recomputed_log(self) -> Self {
        Self::new(self.date, self.price, self.is_local_high, self.is_local_low)
    }

    /// Validate the row at position `row` of its series.
    pub fn check(&self, row: usize) -> Result<(), BandError> {
        if !self.price.is_finite() || self.price <= 0.0 {
            return Err(BandError::invalid_input(
                row,
                self.date,
                format!("price={} must be finite and strictly positive", self.price),
            ));
        }
        if !self.price_log.is_finite() {
            return Err(BandError::invalid_input(
                row,
                self.date,
                format!("price_log={} is not finite", self.price_log),
            ));
        }
        if self.is_local_high && self.is_local_low {
            return Err(BandError::invalid_input(
                row,
                self.date,
                "row is flagged as both local high and local low",
            ));
        }
        Ok(())
    }
}
