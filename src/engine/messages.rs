use crate::{data::ForecastError, models::ForecastResponse};

/// Tag attached to every submission. Later submissions always carry larger tokens.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubmissionToken(pub(crate) u64);

impl SubmissionToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for SubmissionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The result returned by the background request task
#[derive(Debug, Clone)]
pub struct Resolution {
    pub token: SubmissionToken,
    pub duration_ms: u128,
    pub result: Result<ForecastResponse, ForecastError>,
}
