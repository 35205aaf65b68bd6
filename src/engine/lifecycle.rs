use {
    super::messages::SubmissionToken,
    crate::{
        config::DF,
        data::ForecastError,
        models::{ForecastOutcome, ForecastResponse},
    },
};

/// Phase of the most recent forecast submission.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LifecycleState {
    #[default]
    Idle,
    Loading,
    Success(ForecastOutcome),
    Error(String),
}

impl LifecycleState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn outcome(&self) -> Option<&ForecastOutcome> {
        match self {
            Self::Success(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(msg) => Some(msg),
            _ => None,
        }
    }
}

/// What happened to a resolution handed to [`ForecastLifecycle::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolveOutcome {
    Applied,
    /// A newer submission was started after this one, so it was dropped.
    Stale,
}

/// Owns the lifecycle state and the submission counter.
///
/// Only the latest submission may move the state out of `Loading`; earlier
/// ones still run to completion at the transport level but their results are
/// discarded.
#[derive(Debug, Default)]
pub struct ForecastLifecycle {
    state: LifecycleState,
    issued: u64,
    pending: Option<SubmissionToken>,
    settled: Option<SubmissionToken>,
}

impl ForecastLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LifecycleState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state.is_loading()
    }

    /// Token of the submission the state is currently waiting on, if any.
    pub fn pending(&self) -> Option<SubmissionToken> {
        self.pending
    }

    /// Token of the submission that produced the current `Success`/`Error`.
    pub fn settled(&self) -> Option<SubmissionToken> {
        match self.state {
            LifecycleState::Success(_) | LifecycleState::Error(_) => self.settled,
            LifecycleState::Idle | LifecycleState::Loading => None,
        }
    }

    /// Start a new submission: clears any previous result and enters `Loading`.
    pub fn begin(&mut self) -> SubmissionToken {
        self.issued += 1;
        let token = SubmissionToken(self.issued);
        if let Some(prev) = self.pending.replace(token) {
            if DF.log_submissions {
                log::info!("Submission {} superseded by {}", prev, token);
            }
        }
        self.state = LifecycleState::Loading;
        token
    }

    pub fn resolve(
        &mut self,
        token: SubmissionToken,
        result: Result<ForecastResponse, ForecastError>,
    ) -> ResolveOutcome {
        if self.pending != Some(token) {
            if DF.log_stale_discards {
                log::debug!(
                    "Discarding stale resolution {} (waiting on {:?})",
                    token,
                    self.pending
                );
            }
            return ResolveOutcome::Stale;
        }

        self.pending = None;
        self.settled = Some(token);
        self.state = match result.and_then(|response| {
            ForecastOutcome::from_response(response)
                .map_err(|e| ForecastError::Malformed(e.to_string()))
        }) {
            Ok(outcome) => LifecycleState::Success(outcome),
            Err(err) => {
                log::warn!("Forecast {} failed: {}", token, err);
                LifecycleState::Error(err.to_string())
            }
        };
        ResolveOutcome::Applied
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(dates: &[&str], median: f64) -> ForecastResponse {
        ForecastResponse {
            dates: dates.iter().map(|d| d.to_string()).collect(),
            predictions: dates
                .iter()
                .map(|_| vec![vec![median - 1.0], vec![median], vec![median + 1.0]])
                .collect(),
        }
    }

    #[test]
    fn starts_idle() {
        let lc = ForecastLifecycle::new();
        assert_eq!(lc.state(), &LifecycleState::Idle);
        assert_eq!(lc.pending(), None);
    }

    #[test]
    fn begin_enters_loading_and_clears_previous_error() {
        let mut lc = ForecastLifecycle::new();
        let t1 = lc.begin();
        lc.resolve(t1, Err(ForecastError::Transport("boom".into())));
        assert_eq!(lc.state().error(), Some("Network error: boom"));

        let t2 = lc.begin();
        assert!(t2 > t1);
        assert!(lc.is_loading());
        assert_eq!(lc.state().error(), None);
    }

    #[test]
    fn success_projects_response() {
        let mut lc = ForecastLifecycle::new();
        let t = lc.begin();
        let outcome = lc.resolve(t, Ok(response(&["2024-01-01", "2024-01-02"], 12.0)));
        assert_eq!(outcome, ResolveOutcome::Applied);
        let success = lc.state().outcome().unwrap();
        assert_eq!(success.series.median, vec![12.0, 12.0]);
        assert_eq!(success.dates().len(), 2);
        assert_eq!(lc.pending(), None);
        assert_eq!(lc.settled(), Some(t));

        lc.begin();
        assert_eq!(lc.settled(), None);
    }

    #[test]
    fn malformed_shape_becomes_error_not_panic() {
        let mut lc = ForecastLifecycle::new();
        let t = lc.begin();
        let mut bad = response(&["2024-01-01"], 5.0);
        bad.predictions[0].truncate(1);
        lc.resolve(t, Ok(bad));
        let msg = lc.state().error().unwrap();
        assert!(msg.starts_with("Malformed forecast response:"), "{msg}");
    }

    #[test]
    fn stale_resolution_never_overwrites_newer_submission() {
        let mut lc = ForecastLifecycle::new();
        let old = lc.begin();
        let new = lc.begin();

        assert_eq!(
            lc.resolve(new, Ok(response(&["2024-02-01"], 100.0))),
            ResolveOutcome::Applied
        );
        assert_eq!(
            lc.resolve(old, Err(ForecastError::Transport("late".into()))),
            ResolveOutcome::Stale
        );
        assert_eq!(lc.state().outcome().unwrap().series.median, vec![100.0]);
    }

    #[test]
    fn stale_resolution_while_newer_is_loading_is_ignored() {
        let mut lc = ForecastLifecycle::new();
        let old = lc.begin();
        let new = lc.begin();

        assert_eq!(
            lc.resolve(old, Ok(response(&["2024-02-01"], 1.0))),
            ResolveOutcome::Stale
        );
        assert!(lc.is_loading());
        assert_eq!(lc.pending(), Some(new));
    }

    #[test]
    fn duplicate_resolution_is_stale() {
        let mut lc = ForecastLifecycle::new();
        let t = lc.begin();
        lc.resolve(t, Ok(response(&["2024-01-01"], 1.0)));
        assert_eq!(
            lc.resolve(t, Err(ForecastError::Transport("again".into()))),
            ResolveOutcome::Stale
        );
        assert!(lc.state().outcome().is_some());
    }
}
