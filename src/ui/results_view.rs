use {
    crate::{
        engine::{LifecycleState, SubmissionToken},
        ui::{ChartView, UI_CONFIG, UI_TEXT, UiStyleExt, show_table, table_rows},
    },
    eframe::egui::{RichText, ScrollArea, Spinner, Ui},
};

/// Central panel contents for the current lifecycle phase.
///
/// Idle and Loading show no results; Error shows only the error panel;
/// Success shows the table and chart.
pub(crate) fn render_lifecycle(
    ui: &mut Ui,
    state: &LifecycleState,
    settled: Option<SubmissionToken>,
    chart: &mut ChartView,
) {
    match state {
        LifecycleState::Idle => {
            ui.label_subdued(&UI_TEXT.cp_idle);
        }
        LifecycleState::Loading => {
            ui.vertical_centered(|ui| {
                ui.add_space(40.0);
                ui.add(Spinner::new().size(48.0));
                ui.add_space(8.0);
                ui.label_subdued(&UI_TEXT.cp_loading);
            });
        }
        LifecycleState::Error(message) => {
            UI_CONFIG.error_frame().show(ui, |ui| {
                ui.label(RichText::new(&UI_TEXT.cp_error_heading).strong());
                ui.label_error(message);
            });
        }
        LifecycleState::Success(outcome) => {
            // settled is always Some in Success; a missing token would only
            // skip the reset-on-new-data, never the rendering.
            let source = settled.unwrap_or(SubmissionToken(0));
            let chart_height = (ui.available_height() * UI_CONFIG.chart_height_pct)
                .max(UI_CONFIG.chart_min_height);
            let rows = table_rows(outcome.dates(), &outcome.series);

            ScrollArea::vertical().show(ui, |ui| {
                ui.heading(&UI_TEXT.table_heading);
                show_table(ui, &rows);

                ui.add_space(16.0);
                ui.separator();
                ui.heading(&UI_TEXT.chart_heading);
                ui.label_subdued(&UI_TEXT.chart_hint);
                chart.show(ui, source, outcome.dates(), &outcome.series, chart_height);
            });
        }
    }
}
