//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    // --- QUANTILE SERIES ---
    pub color_low: Color32,
    pub color_median: Color32,
    pub color_high: Color32,
    /// Width of each quantile line
    pub series_line_width: f32,

    pub plot_y_padding_pct: f64, // Y-Axis Padding factor (e.g. 0.05 = 5% padding top and bottom)
    /// Extra room either side of the first/last day, in days
    pub plot_x_padding_days: f64,
    /// Minimum y span used when every value is identical
    pub min_y_span: f64,
    /// Approximate number of date labels along the x axis
    pub x_label_target_count: f64,

    // --- SEMANTIC COLORS ---
    pub color_error: Color32,
    pub color_text_subdued: Color32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    color_low: Color32::from_rgb(196, 79, 84),     // #c44f54
    color_median: Color32::from_rgb(78, 121, 167), // #4e79a7
    color_high: Color32::from_rgb(89, 161, 79),    // #59a14f
    series_line_width: 2.0,

    plot_y_padding_pct: 0.05,
    plot_x_padding_days: 0.5,
    min_y_span: 1.0,
    x_label_target_count: 8.0,

    color_error: Color32::from_rgb(230, 80, 80),
    color_text_subdued: Color32::GRAY,
};
