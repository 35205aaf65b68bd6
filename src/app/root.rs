use {
    anyhow::{Context as _, Result},
    eframe::{
        Frame,
        egui::{CentralPanel, Context, RichText, TopBottomPanel, Visuals},
    },
    std::sync::Arc,
    tokio::runtime::Runtime,
};

use crate::{
    Cli,
    data::HttpForecastService,
    engine::{ForecastClient, ForecastLifecycle, PollSummary, SubmissionToken},
    ui::{ChartView, FormState, UI_CONFIG, UI_TEXT, UiStyleExt, render_lifecycle},
};

/// Top-level coordinator. Sole owner of the forecast lifecycle; the views only
/// ever see it through shared borrows.
pub struct App {
    form: FormState,
    lifecycle: ForecastLifecycle,
    client: ForecastClient,
    chart: ChartView,
    // Runs the HTTP requests. None when the caller supplied its own runtime.
    _runtime: Option<Runtime>,
}

impl App {
    pub(crate) fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Result<Self> {
        setup_custom_visuals(&cc.egui_ctx);

        let runtime = Runtime::new().context("Failed to create tokio runtime")?;
        let service = HttpForecastService::new(&args.service_url)?;
        log::info!("Forecast endpoint: {}", service.predict_url());

        let client = ForecastClient::new(Arc::new(service), runtime.handle().clone())
            .with_repaint(cc.egui_ctx.clone());

        let mut app = Self::with_client(client);
        app._runtime = Some(runtime);
        Ok(app)
    }

    /// Build around an existing client (whose runtime the caller keeps alive).
    pub fn with_client(client: ForecastClient) -> Self {
        Self {
            form: FormState::default(),
            lifecycle: ForecastLifecycle::new(),
            client,
            chart: ChartView::new(),
            _runtime: None,
        }
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn lifecycle(&self) -> &ForecastLifecycle {
        &self.lifecycle
    }

    /// Validate the form and, only if it passes, dispatch a submission.
    pub fn submit_form(&mut self) -> Option<SubmissionToken> {
        let request = self.form.try_submit()?;
        Some(self.client.submit(request, &mut self.lifecycle))
    }

    /// Apply any finished submissions to the lifecycle.
    pub fn poll(&mut self) -> PollSummary {
        self.client.poll(&mut self.lifecycle)
    }

    fn render_top_panel(&mut self, ctx: &Context) {
        TopBottomPanel::top("form_panel")
            .frame(UI_CONFIG.top_panel_frame())
            .show(ctx, |ui| {
                ui.heading(RichText::new(&UI_TEXT.app_title).color(UI_CONFIG.colors.heading));
                ui.label_subdued(&UI_TEXT.app_subtitle);
                ui.add_space(8.0);
                if let Some(request) = self.form.show(ui) {
                    self.client.submit(request, &mut self.lifecycle);
                }
            });
    }

    fn render_central_panel(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(UI_CONFIG.central_panel_frame())
            .show(ctx, |ui| {
                render_lifecycle(
                    ui,
                    self.lifecycle.state(),
                    self.lifecycle.settled(),
                    &mut self.chart,
                );
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        self.poll();
        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }
}

fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();
    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.side_panel;
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;
    ctx.set_visuals(visuals);
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            data::{ForecastError, ForecastService},
            domain::{ForecastRequest, Indicator},
            engine::LifecycleState,
            models::ForecastResponse,
        },
        async_trait::async_trait,
        std::{
            sync::atomic::{AtomicUsize, Ordering},
            time::Duration,
        },
        tokio::runtime::Handle,
    };

    #[derive(Default)]
    struct CountingService {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ForecastService for CountingService {
        async fn predict(
            &self,
            request: &ForecastRequest,
        ) -> Result<ForecastResponse, ForecastError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let days = request.horizon_days() as usize;
            Ok(ForecastResponse {
                dates: (1..=days).map(|d| format!("2024-01-{:02}", d)).collect(),
                predictions: (0..days)
                    .map(|d| vec![vec![d as f64], vec![d as f64 + 1.0], vec![d as f64 + 2.0]])
                    .collect(),
            })
        }
    }

    fn app_with(service: Arc<CountingService>) -> App {
        App::with_client(ForecastClient::new(service, Handle::current()))
    }

    async fn settle(app: &mut App) {
        for _ in 0..200 {
            if app.poll().applied > 0 {
                return;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("submission never resolved");
    }

    #[tokio::test]
    async fn invalid_form_makes_no_call_and_keeps_lifecycle() {
        let service = Arc::new(CountingService::default());
        let mut app = app_with(Arc::clone(&service));
        app.form_mut().ticker = "AAPL".into();

        assert_eq!(app.submit_form(), None);
        assert_eq!(app.lifecycle().state(), &LifecycleState::Idle);
        assert!(app.form_mut().validation_error.is_some());

        tokio::time::sleep(Duration::from_millis(20)).await;
        assert_eq!(service.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn validation_error_does_not_clear_previous_result() {
        let service = Arc::new(CountingService::default());
        let mut app = app_with(Arc::clone(&service));
        app.form_mut().ticker = "AAPL".into();
        app.form_mut().horizon_raw = "3".into();
        app.form_mut().indicators.toggle(Indicator::Rsi);

        assert!(app.submit_form().is_some());
        assert!(app.lifecycle().is_loading());
        settle(&mut app).await;
        assert_eq!(
            app.lifecycle().state().outcome().map(|o| o.series.len()),
            Some(3)
        );

        app.form_mut().horizon_raw = "zero".into();
        assert_eq!(app.submit_form(), None);
        assert!(app.lifecycle().state().outcome().is_some());
        assert_eq!(service.calls.load(Ordering::SeqCst), 1);
    }
}
