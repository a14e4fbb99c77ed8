use serde::{Deserialize, Serialize};

use crate::core::{XAxisMode, validate_date_format};
use crate::error::{ChartError, ChartResult};

use super::Theme;

/// Host environment strategy, chosen once at orchestrator entry.
///
/// `Browser` adds responsive sizing and hover targets; `Node` is one
/// synchronous pass with an inert interaction handle, so a server process
/// never ends up with listeners or timers outliving the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Browser,
    #[default]
    Node,
}

const LIGHT_PALETTE: [&str; 9] = [
    "#dd4528", "#28a3dd", "#f3db52", "#ed84b5", "#4ab74e", "#9179c0", "#8e6d5a", "#f19839",
    "#949494",
];

const DARK_PALETTE: [&str; 9] = [
    "#ff6b6b", "#48dbfb", "#feca57", "#ff9ff3", "#1dd1a1", "#f368e0", "#ff9f43", "#a4b0be",
    "#576574",
];

const DARK_BACKGROUND: &str = "#0d1117";

/// Ordered series colors; assignment is by dataset index and wraps, so the
/// same dataset keeps the same color across line, dots, legend, and tooltip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette(Vec<String>);

impl Palette {
    #[must_use]
    pub fn new(colors: Vec<String>) -> Self {
        Self(colors)
    }

    #[must_use]
    pub fn light() -> Self {
        Self(LIGHT_PALETTE.iter().map(|c| (*c).to_owned()).collect())
    }

    #[must_use]
    pub fn dark() -> Self {
        Self(DARK_PALETTE.iter().map(|c| (*c).to_owned()).collect())
    }

    #[must_use]
    pub fn color(&self, index: usize) -> &str {
        if self.0.is_empty() {
            return "";
        }
        &self.0[index % self.0.len()]
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Fully resolved render options: theme defaults merged with caller
/// overrides, caller winning field-by-field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderOptions {
    pub environment: Environment,
    pub x_axis_mode: XAxisMode,
    /// chrono strftime pattern for Date-mode ticks and tooltip titles.
    pub date_format: String,
    pub x_tick_count: usize,
    pub y_tick_count: usize,
    pub show_line: bool,
    /// Marker radius multiplier: base radius is `3.5 ×`, hover radius `6 ×`.
    pub dot_scale: f64,
    pub palette: Palette,
    pub font_family: String,
    pub background_color: String,
    pub stroke_color: String,
    /// Wins over the default width when the surface has no numeric `width`
    /// attribute (the responsive-browser re-render case).
    pub fixed_width: Option<f64>,
}

impl RenderOptions {
    #[must_use]
    pub fn light(transparent: bool) -> Self {
        Self {
            environment: Environment::Node,
            x_axis_mode: XAxisMode::Date,
            date_format: "%b %d, %Y".to_owned(),
            x_tick_count: 5,
            y_tick_count: 5,
            show_line: true,
            dot_scale: 0.5,
            palette: Palette::light(),
            font_family: "xkcd".to_owned(),
            background_color: if transparent {
                "transparent".to_owned()
            } else {
                "white".to_owned()
            },
            stroke_color: "black".to_owned(),
            fixed_width: None,
        }
    }

    #[must_use]
    pub fn dark(transparent: bool) -> Self {
        Self {
            palette: Palette::dark(),
            background_color: if transparent {
                "transparent".to_owned()
            } else {
                DARK_BACKGROUND.to_owned()
            },
            stroke_color: "white".to_owned(),
            ..Self::light(transparent)
        }
    }

    #[must_use]
    pub fn for_theme(theme: Theme, transparent: bool) -> Self {
        match theme {
            Theme::Light => Self::light(transparent),
            Theme::Dark => Self::dark(transparent),
        }
    }

    /// Applies caller overrides on top of the theme defaults.
    #[must_use]
    pub fn merged(theme: Theme, transparent: bool, overrides: &OptionOverrides) -> Self {
        let mut options = Self::for_theme(theme, transparent);
        if let Some(environment) = overrides.environment {
            options.environment = environment;
        }
        if let Some(x_axis_mode) = overrides.x_axis_mode {
            options.x_axis_mode = x_axis_mode;
        }
        if let Some(date_format) = &overrides.date_format {
            options.date_format = date_format.clone();
        }
        if let Some(x_tick_count) = overrides.x_tick_count {
            options.x_tick_count = x_tick_count;
        }
        if let Some(y_tick_count) = overrides.y_tick_count {
            options.y_tick_count = y_tick_count;
        }
        if let Some(show_line) = overrides.show_line {
            options.show_line = show_line;
        }
        if let Some(dot_scale) = overrides.dot_scale {
            options.dot_scale = dot_scale;
        }
        if let Some(palette) = &overrides.palette {
            options.palette = palette.clone();
        }
        if let Some(font_family) = &overrides.font_family {
            options.font_family = font_family.clone();
        }
        if let Some(background_color) = &overrides.background_color {
            options.background_color = background_color.clone();
        }
        if let Some(stroke_color) = &overrides.stroke_color {
            options.stroke_color = stroke_color.clone();
        }
        if let Some(fixed_width) = overrides.fixed_width {
            options.fixed_width = Some(fixed_width);
        }
        options
    }

    pub fn validate(&self) -> ChartResult<()> {
        validate_date_format(&self.date_format)?;
        if self.palette.is_empty() {
            return Err(ChartError::InvalidOptions(
                "palette must contain at least one color".to_owned(),
            ));
        }
        if self.x_tick_count == 0 || self.y_tick_count == 0 {
            return Err(ChartError::InvalidOptions(
                "tick counts must be at least 1".to_owned(),
            ));
        }
        if !self.dot_scale.is_finite() || self.dot_scale <= 0.0 {
            return Err(ChartError::InvalidOptions(
                "dot scale must be finite and positive".to_owned(),
            ));
        }
        if let Some(width) = self.fixed_width {
            if !width.is_finite() || width <= 0.0 {
                return Err(ChartError::InvalidOptions(
                    "fixed width must be finite and positive".to_owned(),
                ));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn dot_base_radius(&self) -> f64 {
        3.5 * self.dot_scale
    }

    #[must_use]
    pub fn dot_hover_radius(&self) -> f64 {
        6.0 * self.dot_scale
    }
}

/// Caller-supplied partial options; `None` fields fall through to the
/// theme defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct OptionOverrides {
    pub environment: Option<Environment>,
    pub x_axis_mode: Option<XAxisMode>,
    pub date_format: Option<String>,
    pub x_tick_count: Option<usize>,
    pub y_tick_count: Option<usize>,
    pub show_line: Option<bool>,
    pub dot_scale: Option<f64>,
    pub palette: Option<Palette>,
    pub font_family: Option<String>,
    pub background_color: Option<String>,
    pub stroke_color: Option<String>,
    pub fixed_width: Option<f64>,
}
