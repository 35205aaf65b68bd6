use {
    crate::{
        config::FORM,
        domain::{Indicator, IndicatorSet},
    },
    serde::Serialize,
};

/// Problems with the form that stop a request from being built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("ticker required")]
    TickerRequired,
    #[error("horizon must be a positive integer")]
    InvalidHorizon,
    #[error("at least one indicator required")]
    NoIndicators,
}

/// A validated forecast request, exactly as it goes over the wire.
///
/// Only [`ForecastRequest::build`] constructs one, so holding a value means
/// the ticker is non-empty, the horizon is at least one day and at least one
/// indicator is selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastRequest {
    ticker: String,
    #[serde(rename = "days_to_predict")]
    horizon_days: u32,
    indicators: Vec<Indicator>,
}

impl ForecastRequest {
    /// Validate raw form input.
    ///
    /// An empty indicator selection is reported ahead of any ticker or
    /// horizon problem; otherwise the ticker is checked before the horizon.
    pub fn build(
        ticker: &str,
        horizon_days_raw: &str,
        indicators: &IndicatorSet,
    ) -> Result<Self, ValidationError> {
        let selected = indicators.selected();
        if selected.is_empty() {
            return Err(ValidationError::NoIndicators);
        }

        let ticker = ticker.trim();
        if ticker.is_empty() {
            return Err(ValidationError::TickerRequired);
        }

        let horizon_days = parse_horizon(horizon_days_raw)?;

        Ok(Self {
            ticker: ticker.to_string(),
            horizon_days,
            indicators: selected,
        })
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn horizon_days(&self) -> u32 {
        self.horizon_days
    }

    pub fn indicators(&self) -> &[Indicator] {
        &self.indicators
    }

    pub fn indicator_names(&self) -> Vec<&'static str> {
        self.indicators.iter().map(|ind| ind.name()).collect()
    }
}

impl std::fmt::Display for ForecastRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} for {} day(s) using [{}]",
            self.ticker,
            self.horizon_days,
            self.indicator_names().join(", ")
        )
    }
}

// Whole numbers only: "3.5" or "3 days" are rejected rather than truncated.
fn parse_horizon(raw: &str) -> Result<u32, ValidationError> {
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidHorizon)?;
    if value < i64::from(FORM.min_horizon_days) {
        return Err(ValidationError::InvalidHorizon);
    }
    u32::try_from(value).map_err(|_| ValidationError::InvalidHorizon)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(list: &[Indicator]) -> IndicatorSet {
        IndicatorSet::with_enabled(list.iter().copied())
    }

    #[test]
    fn builds_trimmed_request_in_declaration_order() {
        let set = indicators(&[Indicator::BbHigh, Indicator::Rsi, Indicator::Macd]);
        let req = ForecastRequest::build("  AAPL ", " 3 ", &set).unwrap();
        assert_eq!(req.ticker(), "AAPL");
        assert_eq!(req.horizon_days(), 3);
        assert_eq!(req.indicator_names(), vec!["RSI", "MACD", "BB_High"]);
    }

    #[test]
    fn serializes_to_service_payload() {
        let req = ForecastRequest::build("AAPL", "3", &indicators(&[Indicator::Ema20])).unwrap();
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "ticker": "AAPL",
                "days_to_predict": 3,
                "indicators": ["EMA_20"],
            })
        );
    }

    #[test]
    fn blank_ticker_is_rejected_before_horizon() {
        let set = indicators(&[Indicator::Rsi]);
        let err = ForecastRequest::build("   ", "abc", &set).unwrap_err();
        assert_eq!(err, ValidationError::TickerRequired);
        assert_eq!(err.to_string(), "ticker required");
    }

    #[test]
    fn bad_horizons_are_rejected() {
        let set = indicators(&[Indicator::Rsi]);
        for raw in ["", "0", "-4", "2.5", "ten", "3 days", "99999999999"] {
            assert_eq!(
                ForecastRequest::build("AAPL", raw, &set),
                Err(ValidationError::InvalidHorizon),
                "horizon {raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn empty_indicator_set_always_fails_with_indicator_error() {
        let empty = IndicatorSet::new();
        for (ticker, horizon) in [("MSFT", "1"), ("MSFT", "365"), ("", "20"), ("  ", "-1")] {
            let err = ForecastRequest::build(ticker, horizon, &empty).unwrap_err();
            assert_eq!(err, ValidationError::NoIndicators);
            assert_eq!(err.to_string(), "at least one indicator required");
        }
    }

    #[test]
    fn every_single_indicator_round_trips_through_builder() {
        use strum::IntoEnumIterator;
        for ind in Indicator::iter() {
            let req = ForecastRequest::build("TSLA", "1", &indicators(&[ind])).unwrap();
            assert_eq!(req.indicators(), &[ind]);
        }
    }
}
