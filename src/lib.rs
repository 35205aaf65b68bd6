#![allow(clippy::collapsible_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod engine;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate (for the headless forecast binary)
pub use app::App;
pub use config::SERVICE;
pub use data::{ForecastError, ForecastService, HttpForecastService};
pub use domain::{ForecastRequest, Indicator, IndicatorSet, ValidationError};
pub use engine::{ForecastClient, ForecastLifecycle, LifecycleState, SubmissionToken};
pub use models::{ForecastOutcome, ForecastResponse, QuantileSeries, project};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the forecasting service
    #[arg(long, default_value = SERVICE.default_base_url)]
    pub service_url: String,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> anyhow::Result<App> {
    App::new(cc, args)
}
