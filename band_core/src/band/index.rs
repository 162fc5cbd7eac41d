use tracing::warn;

use crate::common::utils::fill_undefined;

/// Position of log price between the low (0) and high (1) envelopes
#[derive(Debug, Clone, PartialEq)]
pub struct BandIndex {
    pub index: Vec<Option<f64>>,
    /// Display-only: undefined rows read as 0
    pub index_filled: Vec<f64>,
    /// Rows where the two envelopes coincide
    pub degenerate_rows: Vec<usize>,
}

impl BandIndex {
    /// Normalize each row; envelopes within `degenerate_epsilon` of each
    /// other (log space) leave the row undefined.
    pub fn normalize(
        price_log: &[f64],
        high_log: &[Option<f64>],
        low_log: &[Option<f64>],
        degenerate_epsilon: f64,
    ) -> Self {
        let mut degenerate_rows = Vec::new();
        let index: Vec<Option<f64>> = price_log
            .iter()
            .zip(high_log.iter().zip(low_log))
            .enumerate()
            .map(|(row, (&p, (&high, &low)))| {
                let (high, low) = (high?, low?);
                let width = high - low;
                if width.abs() <= degenerate_epsilon {
                    degenerate_rows.push(row);
                    return None;
                }
                Some((p - low) / width).filter(|v| v.is_finite())
            })
            .collect();

        if !degenerate_rows.is_empty() {
            warn!(
                rows = degenerate_rows.len(),
                first = degenerate_rows[0],
                "envelopes coincide, index left undefined"
            );
        }

        let index_filled = fill_undefined(&index, 0.0);
        Self {
            index,
            index_filled,
            degenerate_rows,
        }
    }

    pub fn defined_count(&self) -> usize {
        self.index.iter().filter(|v| v.is_some()).count()
    }

    pub fn last_defined(&self) -> Option<f64> {
        self.index.iter().rev().find_map(|v| *v)
    }
}
