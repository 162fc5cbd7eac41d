use std::error::Error;
use std::fs::File;
use std::path::Path;

use band_core::{BandError, BandOutput, ChartRenderer, ChartSpec, Column, PriceSeries};
use csv::Writer;
use strum::IntoEnumIterator;

fn cell(v: Option<f64>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}

fn render_err(e: csv::Error) -> BandError {
    BandError::Render(e.to_string())
}

/// Write `columns` of `output` as CSV rows keyed by date
pub fn write_columns<W: std::io::Write>(
    wtr: &mut Writer<W>,
    series: &PriceSeries,
    output: &BandOutput,
    columns: &[Column],
) -> Result<(), csv::Error> {
    let mut header = vec!["date".to_string()];
    header.extend(columns.iter().map(|c| c.to_string()));
    wtr.write_record(&header)?;

    let values: Vec<Vec<Option<f64>>> = columns.iter().map(|&c| output.column(c, series)).collect();
    for (row, rec) in series.iter().enumerate() {
        let mut line = vec![rec.date.to_string()];
        line.extend(values.iter().map(|col| cell(col[row])));
        wtr.write_record(&line)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Every input and derived column, undefined cells left empty
pub fn write_output(
    path: &Path,
    series: &PriceSeries,
    output: &BandOutput,
) -> Result<(), Box<dyn Error>> {
    let mut wtr = Writer::from_path(path)?;
    let columns: Vec<Column> = Column::iter().collect();
    write_columns(&mut wtr, series, output, &columns)?;
    Ok(())
}

/// Renders each chart as a CSV table of its columns
#[derive(Debug, Default)]
pub struct CsvChartRenderer {
    pub rendered: Vec<String>,
}

impl ChartRenderer for CsvChartRenderer {
    type Axis = Writer<File>;

    fn render(
        &mut self,
        series: &PriceSeries,
        output: &BandOutput,
        chart: &ChartSpec,
        axis: &mut Self::Axis,
    ) -> Result<(), BandError> {
        write_columns(axis, series, output, &chart.columns).map_err(render_err)?;
        self.rendered.push(chart.title.clone());
        Ok(())
    }
}

/// One chart file per axis: `<name>_index.csv` and `<name>_envelopes.csv`
pub fn open_chart_axes(dir: &Path, name: &str) -> Result<Vec<Writer<File>>, BandError> {
    std::fs::create_dir_all(dir)?;
    ["index", "envelopes"]
        .iter()
        .map(|suffix| {
            Writer::from_path(dir.join(format!("{}_{}.csv", name, suffix))).map_err(render_err)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use band_core::{compute_band_index, BandConfig, PriceRecord, TradeDate};

    fn computed() -> (PriceSeries, BandOutput) {
        let start = TradeDate::from_ymd(2021, 1, 1).unwrap();
        let series: PriceSeries = (0..30)
            .map(|i| {
                PriceRecord::new(
                    start.plus_days(i).unwrap(),
                    10.0 + i as f64 + (i as f64).sin(),
                    i == 12 || i == 25,
                    i == 15 || i == 28,
                )
            })
            .collect();
        let out = compute_band_index(&series, &BandConfig::default().with_window_days(10)).unwrap();
        (series, out)
    }

    #[test]
    fn test_write_columns_leaves_undefined_empty() {
        let (series, out) = computed();
        let mut wtr = Writer::from_writer(Vec::new());
        write_columns(&mut wtr, &series, &out, &[Column::Baseline, Column::IndexFilled]).unwrap();
        let text = String::from_utf8(wtr.into_inner().unwrap()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "date,baseline,index_filled");
        assert_eq!(lines[1], "2021-01-01,,0");
        assert_eq!(lines.len(), 31);
        assert!(!lines[10].split(',').nth(1).unwrap().is_empty());
    }

    #[test]
    fn test_write_output_has_every_column() {
        let (series, out) = computed();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_output(&path, &series, &out).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let header = text.lines().next().unwrap();
        assert!(header.starts_with("date,price,price_log,baseline"));
        assert!(header.ends_with("index,index_filled"));
    }

    #[test]
    fn test_write_output_failure_is_not_a_render_error() {
        let (series, out) = computed();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.csv");
        let err = write_output(&path, &series, &out).unwrap_err();
        assert!(err.downcast_ref::<BandError>().is_none());
        assert!(err.downcast_ref::<csv::Error>().is_some());
    }

    #[test]
    fn test_chart_axes_written() {
        let (series, out) = computed();
        let dir = tempfile::tempdir().unwrap();
        let metric = band_core::TwoYearMovingAverageMetric::default();
        let mut axes = open_chart_axes(dir.path(), "2YMA").unwrap();
        let mut renderer = CsvChartRenderer::default();
        band_core::report(&metric, &series, &out, &mut renderer, &mut axes).unwrap();
        drop(axes);

        assert_eq!(renderer.rendered.len(), 2);
        let env = std::fs::read_to_string(dir.path().join("2YMA_envelopes.csv")).unwrap();
        assert_eq!(
            env.lines().next().unwrap(),
            "date,price_log,envelope_high_log,envelope_low_log"
        );
    }
}
