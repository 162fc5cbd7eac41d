use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Class of a marked local extremum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize)]
pub enum ExtremumKind {
    #[strum(serialize = "high")]
    High,
    #[strum(serialize = "low")]
    Low,
}

/// Every column a chart or report can ask for, input columns first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
pub enum Column {
    #[strum(serialize = "price")]
    Price,
    #[strum(serialize = "price_log")]
    PriceLog,
    #[strum(serialize = "baseline")]
    Baseline,
    #[strum(serialize = "baseline_log")]
    BaselineLog,
    #[strum(serialize = "baseline_scaled")]
    BaselineScaled,
    #[strum(serialize = "baseline_scaled_log")]
    BaselineScaledLog,
    #[strum(serialize = "log_difference")]
    LogDifference,
    #[strum(serialize = "overshoot")]
    Overshoot,
    #[strum(serialize = "undershoot")]
    Undershoot,
    #[strum(serialize = "overshoot_model")]
    OvershootModel,
    #[strum(serialize = "undershoot_model")]
    UndershootModel,
    #[strum(serialize = "envelope_high_log")]
    EnvelopeHighLog,
    #[strum(serialize = "envelope_low_log")]
    EnvelopeLowLog,
    #[strum(serialize = "index")]
    Index,
    #[strum(serialize = "index_filled")]
    IndexFilled,
}

/// Metrics selectable by name from a host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum MetricKind {
    #[strum(serialize = "2YMA")]
    TwoYearMovingAverage,
}
