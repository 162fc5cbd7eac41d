pub mod chart_trait;
pub mod metric_trait;
