use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Smallest domain span a scale will divide by; degenerate domains (single
/// point, all-equal counts) are widened to this instead of producing NaN.
const MIN_DOMAIN_SPAN: f64 = 1e-6;

/// X axis semantics: absolute calendar dates, or elapsed-time offsets where
/// the domain always starts at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum XAxisMode {
    #[default]
    Date,
    Number,
}

/// Monotonic map from a data domain onto a pixel range.
///
/// The range may be inverted (start greater than end); the Y axis relies on
/// that to put larger counts nearer the top of the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
    range_start: f64,
    range_end: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> ChartResult<Self> {
        if !domain.0.is_finite() || !domain.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain must be finite".to_owned(),
            ));
        }
        if !range.0.is_finite() || !range.1.is_finite() {
            return Err(ChartError::InvalidData(
                "scale range must be finite".to_owned(),
            ));
        }

        let domain_end = if (domain.1 - domain.0).abs() < MIN_DOMAIN_SPAN {
            domain.0 + MIN_DOMAIN_SPAN
        } else {
            domain.1
        };

        Ok(Self {
            domain_start: domain.0,
            domain_end,
            range_start: range.0,
            range_end: range.1,
        })
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    #[must_use]
    pub fn range(self) -> (f64, f64) {
        (self.range_start, self.range_end)
    }

    /// Maps a domain value to its pixel offset.
    #[must_use]
    pub fn map(self, value: f64) -> f64 {
        let span = self.domain_end - self.domain_start;
        let normalized = (value - self.domain_start) / span;
        self.range_start + normalized * (self.range_end - self.range_start)
    }

    /// Evenly spaced domain values covering the full domain, ends included.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count == 0 {
            return Vec::new();
        }
        if count == 1 {
            return vec![self.domain_start];
        }

        let span = self.domain_end - self.domain_start;
        let denominator = (count - 1) as f64;
        (0..count)
            .map(|index| self.domain_start + span * (index as f64) / denominator)
            .collect()
    }
}

/// Builds the X scale for the plot area from the global data extent.
///
/// Number (timeline) mode pins the lower domain bound at zero regardless of
/// the data minimum; Date mode spans the true extent. A missing extent falls
/// back to `[0, 1]` so an empty chart still gets axes.
pub fn x_scale(
    mode: XAxisMode,
    extent: Option<(f64, f64)>,
    plot_width: f64,
) -> ChartResult<LinearScale> {
    let (min, max) = extent.unwrap_or((0.0, 1.0));
    let domain = match mode {
        XAxisMode::Date => (min, max),
        XAxisMode::Number => (0.0, max),
    };
    LinearScale::new(domain, (0.0, plot_width))
}

/// Builds the inverted Y scale: larger counts map to smaller pixel offsets.
pub fn y_scale(extent: Option<(f64, f64)>, plot_height: f64) -> ChartResult<LinearScale> {
    let (min, max) = extent.unwrap_or((0.0, 1.0));
    LinearScale::new((min, max), (plot_height, 0.0))
}
