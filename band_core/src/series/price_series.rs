use std::ops::Index;

use super::price_record::PriceRecord;
use crate::common::band_error::BandError;

/// Time-ordered daily records; the ordinal of a row is its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    lst: Vec<PriceRecord>,
}

impl PriceSeries {
    pub fn new(lst: Vec<PriceRecord>) -> Self {
        Self { lst }
    }

    pub fn len(&self) -> usize {
        self.lst.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lst.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PriceRecord> {
        self.lst.iter()
    }

    pub fn prices(&self) -> Vec<f64> {
        self.lst.iter().map(|r| r.price).collect()
    }

    pub fn price_logs(&self) -> Vec<f64> {
        self.lst.iter().map(|r| r.price_log).collect()
    }

    /// Time-ordinal of every row, as the regression's independent variable
    pub fn ordinals(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.lst.len()).map(|t| t as f64)
    }

    /// Validate every row; the first bad row aborts the whole series.
    pub fn check(&self) -> Result<(), BandError> {
        for (row, rec) in self.lst.iter().enumerate() {
            rec.check(row)?;
        }
        Ok(())
    }
}

impl Index<usize> for PriceSeries {
    type Output = PriceRecord;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lst[index]
    }
}

impl From<Vec<PriceRecord>> for PriceSeries {
    fn from(lst: Vec<PriceRecord>) -> Self {
        Self::new(lst)
    }
}

impl FromIterator<PriceRecord> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = PriceRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
