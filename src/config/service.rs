//! Forecasting service endpoint configuration

/// Where and how the forecasting service is reached.
pub struct ServiceConfig {
    /// Base URL used when no `--service-url` is given on the command line
    pub default_base_url: &'static str,
    /// Path of the prediction endpoint, appended to the base URL
    pub predict_path: &'static str,
    pub user_agent: &'static str,
}

// No client-side timeout: the service can take minutes to train and predict.
pub const SERVICE: ServiceConfig = ServiceConfig {
    default_base_url: "http://localhost:8000",
    predict_path: "/predict",
    user_agent: concat!("stock-forecaster/", env!("CARGO_PKG_VERSION")),
};

impl ServiceConfig {
    /// Full URL of the prediction endpoint for a given base URL.
    pub fn predict_url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.predict_path)
    }
}
