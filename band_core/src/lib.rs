pub mod analyzer;
pub mod band;
pub mod common;
pub mod config;
pub mod math;
pub mod series;
pub mod traits;

pub use analyzer::analyzer::{compute_band_index, report};
pub use analyzer::two_year_ma::{get_metric, TwoYearMovingAverageMetric};
pub use band::band_output::BandOutput;
pub use common::band_error::BandError;
pub use common::enums::{Column, ExtremumKind, MetricKind};
pub use common::time::TradeDate;
pub use config::band_config::BandConfig;
pub use series::{price_record::PriceRecord, price_series::PriceSeries};
pub use traits::{chart_trait::ChartRenderer, metric_trait::{ChartSpec, Metric}};
