pub mod price_record;
pub mod price_series;
