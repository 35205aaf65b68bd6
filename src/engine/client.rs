use {
    super::{
        lifecycle::{ForecastLifecycle, LifecycleState, ResolveOutcome},
        messages::{Resolution, SubmissionToken},
    },
    crate::{config::DF, data::ForecastService, domain::ForecastRequest},
    eframe::egui::Context,
    std::{
        sync::{
            Arc,
            mpsc::{Receiver, Sender, channel},
        },
        time::Instant,
    },
    tokio::runtime::Handle,
};

/// Counts from one [`ForecastClient::poll`] call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PollSummary {
    pub applied: usize,
    pub stale: usize,
}

/// Sends submissions to the forecasting service on a tokio runtime and feeds
/// their resolutions back to the lifecycle on the UI thread.
pub struct ForecastClient {
    service: Arc<dyn ForecastService>,
    runtime: Handle,

    // Background tasks write to this, UI reads in poll()
    result_tx: Sender<Resolution>,
    result_rx: Receiver<Resolution>,

    /// Woken when a resolution lands so the frame loop picks it up promptly.
    repaint: Option<Context>,
}

impl ForecastClient {
    pub fn new(service: Arc<dyn ForecastService>, runtime: Handle) -> Self {
        let (result_tx, result_rx) = channel();
        Self {
            service,
            runtime,
            result_tx,
            result_rx,
            repaint: None,
        }
    }

    pub fn with_repaint(mut self, ctx: Context) -> Self {
        self.repaint = Some(ctx);
        self
    }

    /// Put the lifecycle into `Loading` and dispatch the request.
    ///
    /// Any earlier submission still in flight keeps running, but its result
    /// will be discarded by the lifecycle when it arrives.
    pub fn submit(
        &self,
        request: ForecastRequest,
        lifecycle: &mut ForecastLifecycle,
    ) -> SubmissionToken {
        let token = lifecycle.begin();
        if DF.log_submissions {
            log::info!("Submitting forecast {}: {}", token, request);
        }

        let service = Arc::clone(&self.service);
        let tx = self.result_tx.clone();
        let repaint = self.repaint.clone();

        self.runtime.spawn(async move {
            let start = Instant::now();
            let result = service.predict(&request).await;
            let resolution = Resolution {
                token,
                duration_ms: start.elapsed().as_millis(),
                result,
            };
            if tx.send(resolution).is_err() {
                log::warn!("Forecast {} finished after the client was dropped", token);
            }
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        });

        token
    }

    /// Drain finished submissions into the lifecycle. Call once per frame.
    pub fn poll(&self, lifecycle: &mut ForecastLifecycle) -> PollSummary {
        let mut summary = PollSummary::default();
        while let Ok(resolution) = self.result_rx.try_recv() {
            let token = resolution.token;
            let duration_ms = resolution.duration_ms;
            match lifecycle.resolve(token, resolution.result) {
                ResolveOutcome::Applied => {
                    summary.applied += 1;
                    if DF.log_submissions {
                        log::info!(
                            "Forecast {} resolved in {}ms: {}",
                            token,
                            duration_ms,
                            describe(lifecycle.state())
                        );
                    }
                }
                ResolveOutcome::Stale => summary.stale += 1,
            }
        }
        summary
    }
}

/// Run one submission to completion without a UI. Used by the headless binary.
pub async fn run_to_completion<'a>(
    service: &dyn ForecastService,
    request: ForecastRequest,
    lifecycle: &'a mut ForecastLifecycle,
) -> &'a LifecycleState {
    let token = lifecycle.begin();
    let result = service.predict(&request).await;
    lifecycle.resolve(token, result);
    lifecycle.state()
}

fn describe(state: &LifecycleState) -> String {
    match state {
        LifecycleState::Idle => "idle".to_string(),
        LifecycleState::Loading => "loading".to_string(),
        LifecycleState::Success(outcome) => format!("{} day(s)", outcome.series.len()),
        LifecycleState::Error(msg) => format!("error: {}", msg),
    }
}
