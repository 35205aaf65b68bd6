use {
    crate::{
        models::{Quantile, QuantileSeries},
        ui::{UI_CONFIG, UI_TEXT},
    },
    eframe::egui::{RichText, Ui},
    egui_extras::{Column, TableBuilder},
    tabled::{
        Table, Tabled,
        settings::{Alignment, Style, object::Columns},
    },
};

/// One formatted line of the predictions table.
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct TableRow {
    #[tabled(rename = "Date")]
    pub date: String,
    #[tabled(rename = "Low (10th)")]
    pub low: String,
    #[tabled(rename = "Median (50th)")]
    pub median: String,
    #[tabled(rename = "High (90th)")]
    pub high: String,
}

impl TableRow {
    /// `"2024-01-01 | 10.00 | 12.00 | 15.00"`
    pub fn to_line(&self) -> String {
        format!("{} | {} | {} | {}", self.date, self.low, self.median, self.high)
    }
}

pub fn format_value(value: f64) -> String {
    format!("{:.2}", value)
}

/// One row per date. Extra values on either side are ignored; the projection
/// guarantees equal lengths anyway.
pub fn table_rows(dates: &[String], series: &QuantileSeries) -> Vec<TableRow> {
    dates
        .iter()
        .zip(&series.low)
        .zip(&series.median)
        .zip(&series.high)
        .map(|(((date, &low), &median), &high)| TableRow {
            date: date.clone(),
            low: format_value(low),
            median: format_value(median),
            high: format_value(high),
        })
        .collect()
}

/// Plain-text table for terminals.
pub fn render_text(rows: &[TableRow]) -> String {
    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right());
    table.to_string()
}

/// Draw the predictions table.
pub fn show_table(ui: &mut Ui, rows: &[TableRow]) {
    let row_height = UI_CONFIG.table_row_height;
    TableBuilder::new(ui)
        .id_salt("predictions_table")
        .striped(true)
        .vscroll(false)
        .column(Column::auto().at_least(110.0))
        .columns(Column::auto().at_least(110.0), 3)
        .header(row_height + 4.0, |mut header| {
            header.col(|ui| {
                ui.strong(&UI_TEXT.table_date);
            });
            for q in [Quantile::Low, Quantile::Median, Quantile::High] {
                header.col(|ui| {
                    ui.label(RichText::new(q.column_header()).strong().color(q.color()));
                });
            }
        })
        .body(|mut body| {
            for row in rows {
                body.row(row_height, |mut table_row| {
                    table_row.col(|ui| {
                        ui.label(&row.date);
                    });
                    for value in [&row.low, &row.median, &row.high] {
                        table_row.col(|ui| {
                            ui.monospace(value);
                        });
                    }
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aapl() -> (Vec<String>, QuantileSeries) {
        (
            vec!["2024-01-01".into(), "2024-01-02".into(), "2024-01-03".into()],
            QuantileSeries {
                low: vec![10.0, 11.0, 9.0],
                median: vec![12.0, 13.0, 11.0],
                high: vec![15.0, 16.0, 14.0],
            },
        )
    }

    #[test]
    fn first_row_matches_expected_line() {
        let (dates, series) = aapl();
        let rows = table_rows(&dates, &series);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].to_line(), "2024-01-01 | 10.00 | 12.00 | 15.00");
        assert_eq!(rows[2].to_line(), "2024-01-03 | 9.00 | 11.00 | 14.00");
    }

    #[test]
    fn values_always_have_two_decimals() {
        assert_eq!(format_value(187.456), "187.46");
        assert_eq!(format_value(0.1), "0.10");
        assert_eq!(format_value(-3.0), "-3.00");
    }

    #[test]
    fn text_table_has_headers_and_rows() {
        let (dates, series) = aapl();
        let text = render_text(&table_rows(&dates, &series));
        assert!(text.contains("Median (50th)"));
        assert!(text.contains("2024-01-02"));
        assert!(text.contains("16.00"));
        assert_eq!(text.lines().count(), 2 + 3); // header, separator, rows
    }
}
