use {
    crate::models::{MalformedResponseError, QuantileSeries, project},
    serde::{Deserialize, Serialize},
};

/// Body of a successful `/predict` call, as decoded off the wire.
///
/// `predictions[day][quantile][0]` is the value for `day` at quantile 0
/// (10th), 1 (median) or 2 (90th percentile). The shape is only checked by
/// [`project`]; nothing downstream indexes into `predictions` directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResponse {
    pub dates: Vec<String>,
    pub predictions: Vec<Vec<Vec<f64>>>,
}

impl ForecastResponse {
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// A response that passed the structural check, paired with its projection.
/// This is what the table and chart render from.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastOutcome {
    pub response: ForecastResponse,
    pub series: QuantileSeries,
}

impl ForecastOutcome {
    pub fn from_response(response: ForecastResponse) -> Result<Self, MalformedResponseError> {
        let series = project(&response)?;
        Ok(Self { response, series })
    }

    pub fn dates(&self) -> &[String] {
        &self.response.dates
    }
}

impl TryFrom<ForecastResponse> for ForecastOutcome {
    type Error = MalformedResponseError;

    fn try_from(response: ForecastResponse) -> Result<Self, Self::Error> {
        Self::from_response(response)
    }
}
