mod client;
mod lifecycle;
mod messages;

pub use client::{ForecastClient, PollSummary, run_to_completion};
pub use lifecycle::{ForecastLifecycle, LifecycleState, ResolveOutcome};
pub use messages::{Resolution, SubmissionToken};
