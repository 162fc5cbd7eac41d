use std::collections::HashMap;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::common::band_error::BandError;

pub const DEFAULT_WINDOW_DAYS: usize = 730;
pub const DEFAULT_HIGH_SCALE_FACTOR: f64 = 5.0;
/// Log-space envelope gap treated as coincident: a 0.001% price spread.
/// Near a crossing the index swings through +/- hundreds; those rows stay undefined.
pub const DEFAULT_DEGENERATE_EPSILON: f64 = 1e-5;

/// Band index configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BandConfig {
    /// Trailing window of the baseline moving average, in rows (days)
    pub window_days: usize,
    /// Multiplier of the baseline that anchors the high envelope
    pub high_scale_factor: f64,
    /// Log-space envelope gap at or below which the index is left undefined
    pub degenerate_epsilon: f64,
}

impl Default for BandConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            high_scale_factor: DEFAULT_HIGH_SCALE_FACTOR,
            degenerate_epsilon: DEFAULT_DEGENERATE_EPSILON,
        }
    }
}

impl BandConfig {
    /// Build from loose key/value overrides; unknown keys are rejected.
    pub fn new(conf: Option<HashMap<String, serde_json::Value>>) -> Result<Self, BandError> {
        let mut conf = ConfigWithCheck::new(conf.unwrap_or_default());
        let default = Self::default();

        let config = Self {
            window_days: conf.get("window_days")?.unwrap_or(default.window_days),
            high_scale_factor: conf
                .get("high_scale_factor")?
                .unwrap_or(default.high_scale_factor),
            degenerate_epsilon: conf
                .get("degenerate_epsilon")?
                .unwrap_or(default.degenerate_epsilon),
        };

        conf.check()?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object of overrides
    pub fn from_json_str(s: &str) -> Result<Self, BandError> {
        let conf: HashMap<String, serde_json::Value> = serde_json::from_str(s)?;
        Self::new(Some(conf))
    }

    pub fn with_window_days(mut self, window_days: usize) -> Self {
        self.window_days = window_days;
        self
    }

    pub fn with_high_scale_factor(mut self, high_scale_factor: f64) -> Self {
        self.high_scale_factor = high_scale_factor;
        self
    }

    pub fn validate(&self) -> Result<(), BandError> {
        if self.window_days == 0 {
            return Err(BandError::Config("window_days must be at least 1".to_string()));
        }
        if !self.high_scale_factor.is_finite() || self.high_scale_factor <= 1.0 {
            return Err(BandError::Config(format!(
                "high_scale_factor={} must be finite and greater than 1",
                self.high_scale_factor
            )));
        }
        if !self.degenerate_epsilon.is_finite() || self.degenerate_epsilon < 0.0 {
            return Err(BandError::Config(format!(
                "degenerate_epsilon={} must be finite and non-negative",
                self.degenerate_epsilon
            )));
        }
        Ok(())
    }
}

/// Key/value bag that remembers which keys were consumed
#[derive(Debug)]
pub struct ConfigWithCheck {
    conf: HashMap<String, serde_json::Value>,
}

impl ConfigWithCheck {
    pub fn new(conf: HashMap<String, serde_json::Value>) -> Self {
        Self { conf }
    }

    /// Take `key` out of the bag, converting it to `T`
    pub fn get<T: DeserializeOwned>(&mut self, key: &str) -> Result<Option<T>, BandError> {
        match self.conf.remove(key) {
            None | Some(serde_json::Value::Null) => Ok(None),
            Some(v) => serde_json::from_value(v)
                .map(Some)
                .map_err(|e| BandError::Config(format!("invalid value for {}: {}", key, e))),
        }
    }

    /// Fail on any key nobody asked for
    pub fn check(&self) -> Result<(), BandError> {
        let mut unknown: Vec<&String> = self.conf.keys().collect();
        if unknown.is_empty() {
            return Ok(());
        }
        unknown.sort();
        Err(BandError::Config(format!("unknown para = {:?}", unknown)))
    }
}
