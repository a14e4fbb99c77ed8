use chrono::{DateTime, Utc};
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// X value of one sample: an absolute calendar date, or an elapsed-time
/// offset in milliseconds when the chart runs in timeline mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SampleX {
    Date(DateTime<Utc>),
    Number(f64),
}

impl SampleX {
    /// Projects the value onto the shared numeric axis (milliseconds).
    #[must_use]
    pub fn as_millis(self) -> f64 {
        match self {
            SampleX::Date(date) => date.timestamp_millis() as f64,
            SampleX::Number(value) => value,
        }
    }
}

/// One star-count sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: SampleX,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: SampleX, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub const fn at_date(date: DateTime<Utc>, count: f64) -> Self {
        Self {
            x: SampleX::Date(date),
            y: count,
        }
    }

    #[must_use]
    pub const fn at_offset(offset_ms: f64, count: f64) -> Self {
        Self {
            x: SampleX::Number(offset_ms),
            y: count,
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if let SampleX::Number(value) = self.x {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "sample x offset must be finite".to_owned(),
                ));
            }
        }
        if !self.y.is_finite() || self.y < 0.0 {
            return Err(ChartError::InvalidData(
                "sample count must be finite and non-negative".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One repository's star history plus its display metadata.
///
/// Points must already be ordered by `x` ascending; the engine trusts the
/// supplied order and never sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub label: String,
    #[serde(default)]
    pub logo: Option<String>,
    /// Serialized as `data` to stay byte-compatible with the HTTP callers'
    /// existing payload shape.
    #[serde(rename = "data", default)]
    pub points: Vec<DataPoint>,
}

impl Dataset {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            logo: None,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_logo(mut self, logo: impl Into<String>) -> Self {
        self.logo = Some(logo.into());
        self
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        for point in &self.points {
            point.validate()?;
        }
        Ok(())
    }
}

/// A sample projected onto numeric axes, in milliseconds and raw count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoercedPoint {
    pub x: f64,
    pub y: f64,
}

/// Projects every dataset's X values onto the numeric axis exactly once.
///
/// Source points are left untouched; scales, axes, and hover lookups all read
/// from the coerced view so date parsing happens in a single place.
#[must_use]
pub fn coerce_datasets(datasets: &[Dataset]) -> Vec<Vec<CoercedPoint>> {
    datasets
        .iter()
        .map(|dataset| {
            dataset
                .points
                .iter()
                .map(|point| CoercedPoint {
                    x: point.x.as_millis(),
                    y: point.y,
                })
                .collect()
        })
        .collect()
}

/// `[min, max]` of X across every series, or `None` when all are empty.
#[must_use]
pub fn x_extent(series: &[Vec<CoercedPoint>]) -> Option<(f64, f64)> {
    extent(series.iter().flatten().map(|point| point.x))
}

/// `[min, max]` of Y across every series, or `None` when all are empty.
#[must_use]
pub fn y_extent(series: &[Vec<CoercedPoint>]) -> Option<(f64, f64)> {
    extent(series.iter().flatten().map(|point| point.y))
}

fn extent(values: impl Iterator<Item = f64> + Clone) -> Option<(f64, f64)> {
    let min = values.clone().map(OrderedFloat).min()?;
    let max = values.map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn date_samples_project_to_unix_millis() {
        let date = Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap();
        let point = DataPoint::at_date(date, 12.0);
        assert_eq!(point.x.as_millis(), 1_588_291_200_000.0);
    }

    #[test]
    fn extents_span_all_datasets() {
        let series = vec![
            vec![CoercedPoint { x: 5.0, y: 1.0 }, CoercedPoint { x: 9.0, y: 4.0 }],
            vec![CoercedPoint { x: 2.0, y: 7.0 }],
        ];
        assert_eq!(x_extent(&series), Some((2.0, 9.0)));
        assert_eq!(y_extent(&series), Some((1.0, 7.0)));
    }

    #[test]
    fn empty_series_have_no_extent() {
        let series: Vec<Vec<CoercedPoint>> = vec![Vec::new(), Vec::new()];
        assert_eq!(x_extent(&series), None);
    }

    #[test]
    fn negative_count_is_rejected() {
        let point = DataPoint::at_offset(0.0, -1.0);
        assert!(point.validate().is_err());
    }
}
