use anyhow::{Context, Result, bail};
use clap::Parser;
use stock_forecaster::{
    ForecastLifecycle, ForecastRequest, HttpForecastService, Indicator, IndicatorSet,
    LifecycleState, SERVICE,
    engine::run_to_completion,
    ui::{render_text, table_rows},
};

/// Request a forecast without opening the GUI and print the predictions table.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Stock ticker, e.g. AAPL
    #[arg(long)]
    ticker: String,

    /// Number of future days to forecast
    #[arg(long, default_value = "20")]
    days: String,

    /// Comma separated indicators: RSI, MACD, EMA_20, EMA_50, BB_High, BB_Low
    #[arg(long, value_delimiter = ',', required = true)]
    indicators: Vec<String>,

    /// Base URL of the forecasting service
    #[arg(long, default_value = SERVICE.default_base_url)]
    service_url: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let enabled = args
        .indicators
        .iter()
        .map(|name| Indicator::parse(name))
        .collect::<Result<Vec<_>, _>>()?;
    let request = ForecastRequest::build(
        &args.ticker,
        &args.days,
        &IndicatorSet::with_enabled(enabled),
    )
    .context("Invalid forecast request")?;

    let service = HttpForecastService::new(&args.service_url)?;
    log::info!("Requesting {} from {}", request, service.predict_url());
    log::info!("This usually takes a couple of minutes...");

    let mut lifecycle = ForecastLifecycle::new();
    match run_to_completion(&service, request, &mut lifecycle).await {
        LifecycleState::Success(outcome) => {
            println!("{}", render_text(&table_rows(outcome.dates(), &outcome.series)));
            Ok(())
        }
        LifecycleState::Error(message) => bail!("{}", message),
        LifecycleState::Idle | LifecycleState::Loading => {
            bail!("Forecast did not complete")
        }
    }
}
