use {
    crate::{config::PLOT_CONFIG, models::ForecastResponse},
    eframe::egui::Color32,
    strum_macros::EnumIter,
};

/// Number of quantile rows the service returns for every forecast day.
const QUANTILE_ROWS: usize = 3;

/// The three bands of a forecast day, in the order the service sends them.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Quantile {
    Low,
    Median,
    High,
}

impl Quantile {
    /// Row index inside `predictions[day]`.
    pub fn row(self) -> usize {
        match self {
            Self::Low => 0,
            Self::Median => 1,
            Self::High => 2,
        }
    }

    pub fn percentile(self) -> u8 {
        match self {
            Self::Low => 10,
            Self::Median => 50,
            Self::High => 90,
        }
    }

    /// Legend label, e.g. "10th Percentile (Low)".
    pub fn series_label(self) -> String {
        format!("{}th Percentile ({})", self.percentile(), self.short_name())
    }

    /// Table column header, e.g. "Low (10th)".
    pub fn column_header(self) -> String {
        format!("{} ({}th)", self.short_name(), self.percentile())
    }

    pub fn short_name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Median => "Median",
            Self::High => "High",
        }
    }

    pub fn color(self) -> Color32 {
        match self {
            Self::Low => PLOT_CONFIG.color_low,
            Self::Median => PLOT_CONFIG.color_median,
            Self::High => PLOT_CONFIG.color_high,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedResponseError {
    #[error("{dates} dates but {predictions} prediction rows")]
    LengthMismatch { dates: usize, predictions: usize },
    #[error("day {day} has {rows} quantile rows, expected 3")]
    WrongRowCount { day: usize, rows: usize },
    #[error("day {day} quantile row {row} is empty")]
    EmptyRow { day: usize, row: usize },
}

/// Low / median / high series, one value per forecast day.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuantileSeries {
    pub low: Vec<f64>,
    pub median: Vec<f64>,
    pub high: Vec<f64>,
}

impl QuantileSeries {
    pub fn len(&self) -> usize {
        self.median.len()
    }

    pub fn is_empty(&self) -> bool {
        self.median.is_empty()
    }

    pub fn get(&self, quantile: Quantile) -> &[f64] {
        match quantile {
            Quantile::Low => &self.low,
            Quantile::Median => &self.median,
            Quantile::High => &self.high,
        }
    }

    /// Smallest and largest value across all three series, ignoring NaN.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        self.low
            .iter()
            .chain(&self.median)
            .chain(&self.high)
            .copied()
            .filter(|v| v.is_finite())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }
}

/// Split the raw nested predictions into named series.
///
/// Pure: the same response always yields the same series. Shapes that would
/// make the views index out of bounds are rejected here instead.
pub fn project(response: &ForecastResponse) -> Result<QuantileSeries, MalformedResponseError> {
    if response.dates.len() != response.predictions.len() {
        return Err(MalformedResponseError::LengthMismatch {
            dates: response.dates.len(),
            predictions: response.predictions.len(),
        });
    }

    let n = response.predictions.len();
    let mut series = QuantileSeries {
        low: Vec::with_capacity(n),
        median: Vec::with_capacity(n),
        high: Vec::with_capacity(n),
    };

    for (day, rows) in response.predictions.iter().enumerate() {
        if rows.len() != QUANTILE_ROWS {
            return Err(MalformedResponseError::WrongRowCount {
                day,
                rows: rows.len(),
            });
        }
        let value = |q: Quantile| {
            rows[q.row()]
                .first()
                .copied()
                .ok_or(MalformedResponseError::EmptyRow { day, row: q.row() })
        };
        series.low.push(value(Quantile::Low)?);
        series.median.push(value(Quantile::Median)?);
        series.high.push(value(Quantile::High)?);
    }

    Ok(series)
}
