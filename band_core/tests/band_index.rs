use band_core::{
    compute_band_index, report, BandConfig, BandError, BandOutput, ChartRenderer, ChartSpec,
    Column, ExtremumKind, Metric, PriceRecord, PriceSeries, TradeDate,
    TwoYearMovingAverageMetric,
};

/// Linear ramp from 100 to 200 with the given extremum rows
fn rising_series(n: usize, highs: &[usize], lows: &[usize]) -> PriceSeries {
    let start = TradeDate::from_ymd(2015, 1, 1).unwrap();
    (0..n)
        .map(|i| {
            let price = 100.0 + 100.0 * i as f64 / (n - 1) as f64;
            PriceRecord::new(
                start.plus_days(i as i64).unwrap(),
                price,
                highs.contains(&i),
                lows.contains(&i),
            )
        })
        .collect()
}

fn ramp() -> PriceSeries {
    rising_series(1500, &[1000, 1400], &[900, 1300])
}

#[test]
fn rising_ramp_fits_both_envelopes() {
    let series = ramp();
    let out = compute_band_index(&series, &BandConfig::default()).unwrap();

    assert_eq!(out.len(), 1500);
    assert!(out.baseline.baseline[..729].iter().all(Option::is_none));
    assert!(out.baseline.baseline[729..].iter().all(Option::is_some));
    assert_eq!(out.overshoot_model().n_points, 2);
    assert_eq!(out.undershoot_model().n_points, 2);

    // Two-point fits pass through the marked extrema.
    for row in [900, 1300] {
        assert!(out.index()[row].unwrap().abs() < 1e-6);
    }
    for row in [1000, 1400] {
        assert!((out.index()[row].unwrap() - 1.0).abs() < 1e-6);
    }

    // The index rises on both sides of the envelope crossing.
    assert!(out.index()[729].unwrap() < 0.0);
    assert!(out.index()[1100].unwrap() > 1.0);
    for row in 730..=1163 {
        assert!(out.index()[row].unwrap() > out.index()[row - 1].unwrap(), "row {}", row);
    }
    for row in 1169..1500 {
        assert!(out.index()[row].unwrap() > out.index()[row - 1].unwrap(), "row {}", row);
    }
}

#[test]
fn ramp_envelopes_cross_and_rows_near_the_crossing_are_undefined() {
    let series = ramp();
    let out = compute_band_index(&series, &BandConfig::default()).unwrap();
    let width = |row: usize| out.envelope.high_log[row].unwrap() - out.envelope.low_log[row].unwrap();

    // High envelope sits below the low one until the lines cross.
    assert!(width(729) < 0.0);
    assert!(width(1165) < 0.0);
    assert!(width(1166) > 0.0);
    assert!(width(1499) > 0.0);

    assert_eq!(out.band_index.degenerate_rows, vec![1164, 1165, 1166, 1167]);
    assert_eq!(out.index()[1165], None);
    assert_eq!(out.index()[1166], None);
    assert_eq!(out.index_filled()[1165], 0.0);

    // Neighbours just outside the threshold stay finite and bounded.
    assert!(out.index()[1163].unwrap() > 0.0 && out.index()[1163].unwrap() < 200.0);
    assert!(out.index()[1168].unwrap() < 0.0 && out.index()[1168].unwrap() > -200.0);
}

#[test]
fn index_undefined_exactly_where_baseline_is() {
    let series = ramp();
    let out = compute_band_index(&series, &BandConfig::default()).unwrap();

    for row in 0..out.len() {
        let envelopes_defined =
            out.envelope.high_log[row].is_some() && out.envelope.low_log[row].is_some();
        let coincide = out.band_index.degenerate_rows.contains(&row);
        assert_eq!(out.index()[row].is_some(), envelopes_defined && !coincide);
        match out.index()[row] {
            Some(v) => assert_eq!(out.index_filled()[row], v),
            None => assert_eq!(out.index_filled()[row], 0.0),
        }
    }
}

#[test]
fn models_extrapolate_through_warmup() {
    let series = ramp();
    let out = compute_band_index(&series, &BandConfig::default()).unwrap();
    let model = out.column(Column::OvershootModel, &series);
    assert!(model.iter().all(Option::is_some));

    let m = out.overshoot_model();
    for t in [0usize, 100, 728, 729, 1499] {
        assert!((model[t].unwrap() - m.predict(t as f64)).abs() < 1e-12);
    }
    let u = out.undershoot_model();
    assert!((out.envelope.undershoot_fit[0] - u.intercept).abs() < 1e-15);
}

#[test]
fn scale_factor_is_constant_in_log_space() {
    let series = ramp();
    let out = compute_band_index(&series, &BandConfig::default()).unwrap();
    for row in 729..1500 {
        let diff = out.baseline.baseline_scaled_log[row].unwrap() - out.baseline.baseline_log[row].unwrap();
        assert!((diff - 5f64.ln()).abs() < 1e-12);
    }
}

#[test]
fn repeated_runs_are_bit_identical() {
    let series = ramp();
    let before = series.clone();
    let a = compute_band_index(&series, &BandConfig::default()).unwrap();
    let b = compute_band_index(&series, &BandConfig::default()).unwrap();
    assert_eq!(series, before);
    for (x, y) in a.index().iter().zip(b.index()) {
        assert_eq!(x.map(f64::to_bits), y.map(f64::to_bits));
    }
    assert_eq!(a, b);
}

#[test]
fn short_series_has_no_baseline() {
    let series = rising_series(700, &[100, 500], &[50, 400]);
    match compute_band_index(&series, &BandConfig::default()) {
        Err(BandError::InsufficientData { kind, actual, .. }) => {
            assert_eq!(kind, ExtremumKind::High);
            assert_eq!(actual, 0);
        }
        other => panic!("unexpected {:?}", other.map(|o| o.len())),
    }
}

#[test]
fn missing_low_extrema_is_insufficient() {
    let series = rising_series(800, &[750, 790], &[100]);
    let err = compute_band_index(&series, &BandConfig::default()).unwrap_err();
    assert!(matches!(err, BandError::InsufficientData { kind: ExtremumKind::Low, .. }));
}

#[test]
fn zero_price_is_invalid_input() {
    let start = TradeDate::from_ymd(2015, 1, 1).unwrap();
    let series: PriceSeries = (0..800)
        .map(|i| {
            let price = if i == 412 { 0.0 } else { 50.0 + i as f64 };
            PriceRecord::new(start.plus_days(i).unwrap(), price, i == 760 || i == 790, i == 770 || i == 780)
        })
        .collect();
    let err = compute_band_index(&series, &BandConfig::default()).unwrap_err();
    assert!(matches!(err, BandError::InvalidInput { row: 412, .. }));
    assert!(err.is_price_err());
}

#[test]
fn config_window_and_scale_are_honoured() {
    let series = rising_series(300, &[150, 250], &[120, 220]);
    let config = BandConfig::default().with_window_days(100).with_high_scale_factor(3.0);
    let out = compute_band_index(&series, &config).unwrap();
    assert_eq!(out.baseline.first_defined(), Some(99));
    let diff = out.baseline.log_difference[200].unwrap();
    assert!((diff - 3f64.ln()).abs() < 1e-12);
}

#[test]
fn invalid_config_is_rejected_before_compute() {
    let config = BandConfig::default().with_high_scale_factor(0.5);
    let err = compute_band_index(&ramp(), &config).unwrap_err();
    assert!(matches!(err, BandError::Config(_)));
}

#[derive(Default)]
struct RecordingRenderer {
    calls: Vec<(String, Vec<Column>)>,
}

impl ChartRenderer for RecordingRenderer {
    type Axis = Vec<Vec<Option<f64>>>;

    fn render(
        &mut self,
        series: &PriceSeries,
        output: &BandOutput,
        chart: &ChartSpec,
        axis: &mut Self::Axis,
    ) -> Result<(), BandError> {
        self.calls.push((chart.title.clone(), chart.columns.clone()));
        for &col in &chart.columns {
            axis.push(output.column(col, series));
        }
        Ok(())
    }
}

#[test]
fn report_draws_both_charts() {
    let series = ramp();
    let metric = TwoYearMovingAverageMetric::default();
    let out = metric.calculate(&series).unwrap();

    let mut renderer = RecordingRenderer::default();
    let mut axes = vec![Vec::new(), Vec::new()];
    report(&metric, &series, &out, &mut renderer, &mut axes).unwrap();

    assert_eq!(renderer.calls.len(), 2);
    assert_eq!(renderer.calls[0].0, "2 Year Moving Average");
    assert_eq!(axes[0].len(), 1);
    assert_eq!(axes[1].len(), 3);
    assert!(axes[0][0].iter().all(Option::is_some));
    assert_eq!(axes[1][1], out.envelope.high_log);
}

#[test]
fn report_needs_an_axis_per_chart() {
    let series = ramp();
    let metric = TwoYearMovingAverageMetric::default();
    let out = metric.calculate(&series).unwrap();
    let mut axes = vec![Vec::new()];
    let err = report(&metric, &series, &out, &mut RecordingRenderer::default(), &mut axes)
        .unwrap_err();
    assert!(matches!(err, BandError::Render(_)));
}
