use eframe::egui::{Color32, Frame, Margin, Stroke};

pub use crate::ui::ui_text::UI_TEXT;

/// UI Colors for consistent theming
#[derive(Clone, Copy, Default)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub subsection_heading: Color32,
    pub central_panel: Color32,
    pub side_panel: Color32,
    pub error_fill: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
#[derive(Default, Clone, Copy)]
pub struct UiConfig {
    pub colors: UiColors,
    /// Height of one row in the predictions table
    pub table_row_height: f32,
    /// Fraction of the central panel height given to the chart
    pub chart_height_pct: f32,
    pub chart_min_height: f32,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,     // This sets every label globally to this color
        heading: Color32::YELLOW, // Sets every heading
        subsection_heading: Color32::ORANGE, // Sets every subsection heading
        central_panel: Color32::from_rgb(30, 30, 34),
        side_panel: Color32::from_rgb(25, 25, 25),
        error_fill: Color32::from_rgb(70, 25, 25),
    },
    table_row_height: 18.0,
    chart_height_pct: 0.55,
    chart_min_height: 260.0,
};

impl UiConfig {
    /// Frame for the Top form panel (Standard padding)
    pub fn top_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.side_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    // Frame for the results area
    pub fn central_panel_frame(&self) -> Frame {
        Frame {
            fill: self.colors.central_panel,
            stroke: Stroke::NONE,
            inner_margin: Margin::same(8),
            ..Default::default()
        }
    }

    /// Frame around the error message
    pub fn error_frame(&self) -> Frame {
        Frame {
            fill: self.colors.error_fill,
            stroke: Stroke::new(1.0, crate::config::PLOT_CONFIG.color_error),
            inner_margin: Margin::same(10),
            ..Default::default()
        }
    }
}
