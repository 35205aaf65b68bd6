use {
    crate::{
        config::{DF, PLOT_CONFIG},
        engine::SubmissionToken,
        models::{Quantile, QuantileSeries},
        ui::UI_TEXT,
    },
    eframe::egui::{Ui, Vec2b},
    egui_plot::{Axis, AxisHints, GridMark, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement},
    std::ops::RangeInclusive,
    strum::IntoEnumIterator,
};

/// Fit-to-data view for a set of series: x in day indices, y in price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitBounds {
    pub x: (f64, f64),
    pub y: (f64, f64),
}

impl FitBounds {
    pub fn x_range(&self) -> RangeInclusive<f64> {
        self.x.0..=self.x.1
    }

    pub fn y_range(&self) -> RangeInclusive<f64> {
        self.y.0..=self.y.1
    }
}

/// Default view: every day plus half a day either side, and the full value
/// range padded top and bottom. Flat data still gets a non-zero height.
pub fn fit_bounds(series: &QuantileSeries) -> FitBounds {
    let pad_x = PLOT_CONFIG.plot_x_padding_days;
    let last = series.len().saturating_sub(1) as f64;
    let (lo, hi) = series.value_range().unwrap_or((0.0, PLOT_CONFIG.min_y_span));

    let span = (hi - lo).max(PLOT_CONFIG.min_y_span);
    let mid = (lo + hi) / 2.0;
    let half = span / 2.0 * (1.0 + 2.0 * PLOT_CONFIG.plot_y_padding_pct);

    FitBounds {
        x: (-pad_x, last + pad_x),
        y: (mid - half, mid + half),
    }
}

/// Pointer gestures the chart reacts to outside of egui_plot's own drag/zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartGesture {
    Click,
    DoubleClick,
}

/// Pan/zoom bookkeeping for the forecast chart.
///
/// egui_plot keeps the live transform itself; this only decides when that
/// transform must be thrown away and replaced by the fit-to-data view.
#[derive(Debug, Default)]
pub struct ChartView {
    shown: Option<SubmissionToken>,
    reset_pending: bool,
    resets: u64,
}

impl ChartView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tell the view which result it is about to draw. A different result
    /// than last time discards the user's pan/zoom.
    pub fn sync(&mut self, source: SubmissionToken) {
        if self.shown != Some(source) {
            self.shown = Some(source);
            self.reset_pending = true;
        }
    }

    pub fn on_gesture(&mut self, gesture: ChartGesture) {
        match gesture {
            ChartGesture::DoubleClick => self.reset_pending = true,
            ChartGesture::Click => {}
        }
    }

    pub fn reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// Number of times the fit-to-data view has been applied.
    pub fn resets(&self) -> u64 {
        self.resets
    }

    fn take_reset(&mut self) -> bool {
        let pending = std::mem::take(&mut self.reset_pending);
        if pending {
            self.resets += 1;
            if DF.log_chart_resets {
                log::info!("Chart reset to fit-to-data ({} total)", self.resets);
            }
        }
        pending
    }

    pub fn show(
        &mut self,
        ui: &mut Ui,
        source: SubmissionToken,
        dates: &[String],
        series: &QuantileSeries,
        height: f32,
    ) {
        self.sync(source);
        let reset = self.take_reset();
        let bounds = fit_bounds(series);

        ui.vertical_centered(|ui| {
            ui.heading(&UI_TEXT.chart_title);
        });

        let response = Plot::new("forecast_chart")
            .height(height)
            .legend(Legend::default())
            .custom_x_axes(vec![create_date_axis(dates.to_vec())])
            .custom_y_axes(vec![create_price_axis()])
            .x_grid_spacer(move |input| {
                let (min, max) = input.bounds;
                let step = calculate_adaptive_step(max - min, PLOT_CONFIG.x_label_target_count);
                let start = (min / step).ceil() as i64;
                let end = (max / step).floor() as i64;
                (start..=end)
                    .map(|i| GridMark {
                        value: i as f64 * step,
                        step_size: step,
                    })
                    .collect()
            })
            .label_formatter({
                let dates = dates.to_vec();
                move |name, value| {
                    let date = date_at(&dates, value.x).unwrap_or_default();
                    if name.is_empty() {
                        format!("{}\n{:.2}", date, value.y)
                    } else {
                        format!("{}\n{}: {:.2}", date, name, value.y)
                    }
                }
            })
            .allow_double_click_reset(false)
            .allow_drag(Vec2b { x: true, y: true })
            .allow_zoom(Vec2b { x: true, y: true })
            .allow_scroll(Vec2b { x: true, y: true })
            .allow_boxed_zoom(true)
            .show(ui, |plot_ui| {
                if reset {
                    plot_ui.set_plot_bounds_x(bounds.x_range());
                    plot_ui.set_plot_bounds_y(bounds.y_range());
                }
                for q in Quantile::iter() {
                    let points: Vec<[f64; 2]> = series
                        .get(q)
                        .iter()
                        .enumerate()
                        .map(|(i, &v)| [i as f64, v])
                        .collect();
                    plot_ui.line(
                        Line::new(q.series_label(), PlotPoints::new(points))
                            .color(q.color())
                            .width(PLOT_CONFIG.series_line_width),
                    );
                }
            })
            .response;

        if response.double_clicked() {
            self.on_gesture(ChartGesture::DoubleClick);
            ui.ctx().request_repaint();
        } else if response.clicked() {
            self.on_gesture(ChartGesture::Click);
        }
    }
}

/// Date label for an x position, only when it sits on a whole day.
fn date_at(dates: &[String], x: f64) -> Option<String> {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return None;
    }
    dates.get(idx as usize).cloned()
}

// Helper: Calculate a human-friendly step size (1, 2, 5, 10, 20, 50...)
fn calculate_adaptive_step(range: f64, target_count: f64) -> f64 {
    let raw_step = range / target_count.max(1.0);
    if !raw_step.is_finite() || raw_step <= 0.0 {
        return 1.0;
    }
    // Find magnitude (power of 10)
    let mag = 10.0_f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / mag; // Scale to 1.0 .. 10.0

    // Snap to "Nice" integers
    let nice_step = if normalized < 1.5 {
        1.0
    } else if normalized < 3.0 {
        2.0
    } else if normalized < 7.0 {
        5.0
    } else {
        10.0
    };

    // Never step less than one day
    (nice_step * mag).max(1.0)
}

fn create_date_axis(dates: Vec<String>) -> AxisHints<'static> {
    AxisHints::new(Axis::X)
        .label(UI_TEXT.plot_x_axis.as_str())
        .formatter(move |mark, _range| date_at(&dates, mark.value).unwrap_or_default())
        .placement(VPlacement::Bottom)
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.plot_y_axis.as_str())
        .formatter(|grid_mark, _range| format!("{:.2}", grid_mark.value))
        .placement(HPlacement::Left)
}
