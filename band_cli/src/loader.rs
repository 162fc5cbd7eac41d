use std::error::Error;
use std::path::Path;

use band_core::{PriceRecord, PriceSeries, TradeDate};
use csv::Reader;
use serde::{Deserialize, Deserializer};
use tracing::{debug, warn};

/// One row of an annotated price CSV
#[derive(Debug, Deserialize)]
struct CsvRecord {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Price")]
    price: f64,
    #[serde(rename = "PriceLog", default)]
    price_log: Option<f64>,
    #[serde(rename = "PriceHigh", default, deserialize_with = "parse_flag")]
    price_high: bool,
    #[serde(rename = "PriceLow", default, deserialize_with = "parse_flag")]
    price_low: bool,
}

fn parse_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    match s.trim() {
        "" | "0" | "0.0" | "false" | "False" => Ok(false),
        "1" | "1.0" | "true" | "True" => Ok(true),
        other => Err(serde::de::Error::custom(format!("bad extremum flag '{}'", other))),
    }
}

/// Read an annotated series; `PriceLog` is computed when absent.
pub fn load_series(path: &Path) -> Result<PriceSeries, Box<dyn Error>> {
    let mut rdr = Reader::from_path(path)?;
    let mut records = Vec::new();
    let mut recomputed = 0usize;

    for result in rdr.deserialize() {
        let row: CsvRecord = result?;
        let date: TradeDate = row.date.parse()?;
        let record = match row.price_log {
            Some(price_log) => {
                let rec =
                    PriceRecord::with_log(date, row.price, price_log, row.price_high, row.price_low);
                if rec.price > 0.0 && !rec.log_is_consistent() {
                    recomputed += 1;
                    rec.with_recomputed_log()
                } else {
                    rec
                }
            }
            None => PriceRecord::new(date, row.price, row.price_high, row.price_low),
        };
        records.push(record);
    }

    if recomputed > 0 {
        warn!(rows = recomputed, "PriceLog disagreed with ln(Price), recomputed");
    }

    // Rows must be in time order for the ordinal to mean anything.
    records.sort_by_key(|r| r.date);
    debug!(rows = records.len(), path = %path.display(), "series loaded");
    Ok(PriceSeries::new(records))
}
