mod loader;
mod writer;

use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

use band_core::{get_metric, report, BandConfig, BandError, MetricKind};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "band_cli")]
#[command(about = "Compute the band position index of an annotated daily price series", long_about = None)]
struct Args {
    /// CSV with Date, Price and optional PriceLog, PriceHigh, PriceLow columns
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write every derived column
    #[arg(short, long, default_value = "band_index.csv")]
    output: PathBuf,

    /// Directory for the two chart tables
    #[arg(long)]
    chart_dir: Option<PathBuf>,

    /// JSON object of config overrides
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Metric to compute
    #[arg(short, long, default_value = "2YMA")]
    metric: String,

    #[arg(long)]
    window_days: Option<usize>,

    #[arg(long)]
    high_scale_factor: Option<f64>,
}

fn load_config(args: &Args) -> Result<BandConfig, Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => BandConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => BandConfig::default(),
    };
    if let Some(window_days) = args.window_days {
        config = config.with_window_days(window_days);
    }
    if let Some(high_scale_factor) = args.high_scale_factor {
        config = config.with_high_scale_factor(high_scale_factor);
    }
    config.validate()?;
    Ok(config)
}

fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    let config = load_config(args)?;
    let kind = MetricKind::from_str(&args.metric)
        .map_err(|_| format!("unknown metric '{}'", args.metric))?;
    let metric = get_metric(kind, config);

    let series = loader::load_series(&args.input)?;
    info!(rows = series.len(), metric = metric.name(), "processing {:?}", args.input);

    let output = metric.calculate(&series)?;
    writer::write_output(&args.output, &series, &output)?;
    info!("saved derived columns to {}", args.output.display());

    if let Some(dir) = &args.chart_dir {
        let mut axes = writer::open_chart_axes(dir, metric.name())?;
        let mut renderer = writer::CsvChartRenderer::default();
        report(metric.as_ref(), &series, &output, &mut renderer, &mut axes)?;
        info!(charts = renderer.rendered.len(), "saved charts to {}", dir.display());
    }

    let defined = output.index().iter().filter(|v| v.is_some()).count();
    let last = output.band_index.last_defined();
    println!(
        "{}: {} rows, {} with a defined index, last index {}",
        metric.description(),
        series.len(),
        defined,
        last.map(|v| format!("{:.4}", v)).unwrap_or_else(|| "n/a".to_string())
    );
    Ok(())
}

/// Short label for a failed run, by error code
fn failure_kind(e: &(dyn Error + 'static)) -> &'static str {
    match e.downcast_ref::<BandError>() {
        Some(be) if be.is_price_err() => "invalid price data",
        Some(be) if be.is_insufficient_data() => "not enough marked extrema",
        Some(be) if be.is_band_err() => "band computation failed",
        _ => "host error",
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "band_cli=info,band_core=info".into()),
        )
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args) {
        match e.downcast_ref::<BandError>() {
            Some(be) => error!(code = %be.errcode(), "{}: {}", failure_kind(e.as_ref()), be),
            None => error!("{}: {}", failure_kind(e.as_ref()), e),
        }
        return Err(e);
    }
    Ok(())
}
