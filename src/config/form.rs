//! Prediction form defaults

pub struct FormConfig {
    /// Horizon pre-filled in the form on startup
    pub default_horizon_days: u32,
    pub min_horizon_days: u32,
    pub ticker_placeholder: &'static str,
    pub ticker_field_width: f32,
    pub horizon_field_width: f32,
}

pub const FORM: FormConfig = FormConfig {
    default_horizon_days: 20,
    min_horizon_days: 1,
    ticker_placeholder: "e.g., AAPL",
    ticker_field_width: 120.0,
    horizon_field_width: 60.0,
};
