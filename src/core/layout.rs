use crate::error::{ChartError, ChartResult};

/// Fallback surface width when the caller set neither a `width` attribute nor
/// a fixed width option.
pub const DEFAULT_WIDTH: f64 = 600.0;

/// Below this width the browser strategy keeps a fixed 600px surface instead
/// of stretching to the container.
pub const RESPONSIVE_MIN_WIDTH: f64 = 600.0;

/// Plot-area margins, computed once per render from which decorations are
/// present and immutable afterwards. Every geometry-dependent step reads the
/// same value, so decoration presence can never skew scales mid-render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    /// The base bottom band already reserves room for the X label, so only
    /// the title and the rotated Y label widen their sides.
    #[must_use]
    pub fn for_chart(has_title: bool, has_y_label: bool) -> Self {
        Self {
            top: if has_title { 60.0 } else { 50.0 },
            right: 30.0,
            bottom: 50.0,
            left: if has_y_label { 70.0 } else { 50.0 },
        }
    }
}

/// Resolved surface and plot-area geometry for one render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub plot_width: f64,
    pub plot_height: f64,
}

impl ChartLayout {
    /// Derives the full layout from the surface width: height is a fixed 2:3
    /// aspect ratio, the plot area is what remains inside the margins.
    pub fn compute(width: f64, margins: Margins) -> ChartResult<Self> {
        let height = width * 2.0 / 3.0;
        if !width.is_finite() || width <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        let plot_width = width - margins.left - margins.right;
        let plot_height = height - margins.top - margins.bottom;
        if plot_width <= 0.0 || plot_height <= 0.0 {
            return Err(ChartError::InvalidViewport { width, height });
        }

        Ok(Self {
            width,
            height,
            margins,
            plot_width,
            plot_height,
        })
    }
}

/// Vertical offset of the rotated Y label.
///
/// Coarse magnitude buckets stand in for per-tick label width measurement:
/// the wider the largest count renders, the closer the label hugs the edge.
#[must_use]
pub fn y_label_offset(max_y: f64) -> f64 {
    if max_y > 100_000.0 {
        2.0
    } else if max_y > 10_000.0 {
        8.0
    } else if max_y > 1_000.0 {
        12.0
    } else if max_y > 100.0 {
        20.0
    } else {
        24.0
    }
}
