use std::sync::LazyLock;

pub struct UiText {
    // --- Header ---
    pub app_title: String,
    pub app_subtitle: String,

    // --- Form ---
    pub form_ticker: String,
    pub form_horizon: String,
    pub form_indicators: String,
    pub form_predict: String,

    // --- Central panel ---
    pub cp_idle: String,
    pub cp_loading: String,
    pub cp_error_heading: String,

    // --- Results ---
    pub table_heading: String,
    pub table_date: String,
    pub chart_heading: String,
    pub chart_title: String,
    pub chart_hint: String,

    // Actual Plot
    pub plot_x_axis: String,
    pub plot_y_axis: String,
}

pub static UI_TEXT: LazyLock<UiText> = LazyLock::new(|| UiText {
    app_title: "Stock Predictor".to_string(),
    app_subtitle: "This process will take about 2 minutes!".to_string(),

    form_ticker: "Stock Ticker:".to_string(),
    form_horizon: "Days to Predict:".to_string(),
    form_indicators: "Select Indicators:".to_string(),
    form_predict: "Predict".to_string(),

    cp_idle: "Enter a ticker, pick indicators and press Predict.".to_string(),
    cp_loading: "Forecasting...".to_string(),
    cp_error_heading: "Forecast failed".to_string(),

    table_heading: "Predictions Table".to_string(),
    table_date: "Date".to_string(),
    chart_heading: "Predictions Chart".to_string(),
    chart_title: "Stock Price Predictions".to_string(),
    chart_hint: "Drag to pan, Ctrl+scroll or pinch to zoom, double-click to reset.".to_string(),

    plot_x_axis: "Date".to_string(),
    plot_y_axis: "Price".to_string(),
});
