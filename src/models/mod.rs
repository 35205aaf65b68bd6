mod forecast;
mod quantile;

pub use forecast::{ForecastOutcome, ForecastResponse};
pub use quantile::{MalformedResponseError, Quantile, QuantileSeries, project};
