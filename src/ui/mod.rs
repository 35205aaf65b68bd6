mod chart_view;
mod form_panel;
mod results_view;
mod styles;
mod table_view;
mod ui_config;
mod ui_text;

pub use chart_view::{ChartGesture, ChartView, FitBounds, fit_bounds};
pub use form_panel::FormState;
pub use table_view::{TableRow, format_value, render_text, show_table, table_rows};

pub(crate) use results_view::render_lifecycle;
pub(crate) use styles::UiStyleExt;
pub(crate) use ui_config::{UI_CONFIG, UI_TEXT};
