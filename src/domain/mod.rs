mod indicator;
mod request;

pub use indicator::{Indicator, IndicatorSet, UnknownIndicator};
pub use request::{ForecastRequest, ValidationError};
