use {
    crate::{config::SERVICE, domain::ForecastRequest, models::ForecastResponse},
    anyhow::{Context, Result},
    async_trait::async_trait,
    reqwest::{Client, StatusCode},
    serde::Deserialize,
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// How a single call to the forecasting service can fail.
///
/// The `Display` text is exactly what the error panel shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ForecastError {
    /// No response arrived at all.
    #[error("Network error: {0}")]
    Transport(String),
    /// Non-2xx with a `detail` message from the service, shown verbatim.
    #[error("{detail}")]
    Service { status: u16, detail: String },
    /// Non-2xx without a usable `detail`.
    #[error("An error has occurred: {status_text}")]
    Status { status: u16, status_text: String },
    /// 2xx whose body does not have the expected shape.
    #[error("Malformed forecast response: {0}")]
    Malformed(String),
}

/// Abstract interface for requesting a forecast.
#[async_trait]
pub trait ForecastService: Send + Sync {
    async fn predict(&self, request: &ForecastRequest) -> Result<ForecastResponse, ForecastError>;
}

/// `POST {base_url}/predict` over HTTP with a JSON body.
pub struct HttpForecastService {
    http: Client,
    predict_url: String,
}

impl HttpForecastService {
    pub fn new(base_url: &str) -> Result<Self> {
        let http = Client::builder()
            .user_agent(SERVICE.user_agent)
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            http,
            predict_url: SERVICE.predict_url(base_url),
        })
    }

    pub fn predict_url(&self) -> &str {
        &self.predict_url
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

/// Error text for a non-2xx response: the service's `detail` string if the body
/// carries one, otherwise a message built from the status line.
pub(crate) fn classify_error_status(status: StatusCode, body: &[u8]) -> ForecastError {
    let detail = serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
        .and_then(|d| match d {
            serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        });

    match detail {
        Some(detail) => ForecastError::Service {
            status: status.as_u16(),
            detail,
        },
        None => ForecastError::Status {
            status: status.as_u16(),
            status_text: status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_str().to_string()),
        },
    }
}

#[async_trait]
impl ForecastService for HttpForecastService {
    async fn predict(&self, request: &ForecastRequest) -> Result<ForecastResponse, ForecastError> {
        #[cfg(debug_assertions)]
        if DF.log_payloads {
            log::info!(
                "POST {} {}",
                self.predict_url,
                serde_json::to_string(request).unwrap_or_default()
            );
        }

        let response = self
            .http
            .post(&self.predict_url)
            .json(request)
            .send()
            .await
            .map_err(|e| ForecastError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ForecastError::Transport(e.to_string()))?;

        if !status.is_success() {
            let err = classify_error_status(status, &body);
            log::warn!("Forecast service returned {}: {}", status, err);
            return Err(err);
        }

        serde_json::from_slice::<ForecastResponse>(&body)
            .map_err(|e| ForecastError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_string_is_used_verbatim() {
        let err = classify_error_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":"Unknown ticker XYZ"}"#,
        );
        assert_eq!(err.to_string(), "Unknown ticker XYZ");
        assert!(matches!(err, ForecastError::Service { status: 422, .. }));
    }

    #[test]
    fn missing_detail_falls_back_to_status_text() {
        let err = classify_error_status(StatusCode::INTERNAL_SERVER_ERROR, b"{}");
        assert_eq!(
            err.to_string(),
            "An error has occurred: Internal Server Error"
        );
    }

    #[test]
    fn non_json_body_falls_back_to_status_text() {
        let err = classify_error_status(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>");
        assert_eq!(err.to_string(), "An error has occurred: Bad Gateway");
    }

    #[test]
    fn structured_detail_is_not_shown_raw() {
        let err = classify_error_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            br#"{"detail":[{"loc":["body","ticker"],"msg":"field required"}]}"#,
        );
        assert_eq!(
            err,
            ForecastError::Status {
                status: 422,
                status_text: "Unprocessable Entity".into()
            }
        );
    }

    #[test]
    fn transport_errors_are_prefixed() {
        let err = ForecastError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }
}
