use serde::{Deserialize, Serialize};

use crate::core::Dataset;
use crate::error::{ChartError, ChartResult};

pub const CHART_CONFIG_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Font sizes in pixels for the three text tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FontSizes {
    #[serde(default = "default_title_font")]
    pub title: f64,
    #[serde(default = "default_label_font")]
    pub label: f64,
    #[serde(default = "default_axis_font")]
    pub axis: f64,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: default_title_font(),
            label: default_label_font(),
            axis: default_axis_font(),
        }
    }
}

fn default_title_font() -> f64 {
    20.0
}

fn default_label_font() -> f64 {
    16.0
}

fn default_axis_font() -> f64 {
    16.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ChartData {
    pub datasets: Vec<Dataset>,
}

/// Immutable input to one render call.
///
/// Serializable so HTTP callers can hand over chart setup as JSON without
/// inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub x_label: Option<String>,
    #[serde(default)]
    pub y_label: Option<String>,
    pub data: ChartData,
    #[serde(default)]
    pub show_dots: bool,
    #[serde(default)]
    pub transparent: bool,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default, rename = "fontSize")]
    pub font_sizes: FontSizes,
}

impl ChartConfig {
    #[must_use]
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self {
            title: None,
            x_label: None,
            y_label: None,
            data: ChartData { datasets },
            show_dots: false,
            transparent: false,
            theme: Theme::default(),
            font_sizes: FontSizes::default(),
        }
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_show_dots(mut self, show_dots: bool) -> Self {
        self.show_dots = show_dots;
        self
    }

    #[must_use]
    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn with_font_sizes(mut self, font_sizes: FontSizes) -> Self {
        self.font_sizes = font_sizes;
        self
    }

    #[must_use]
    pub fn datasets(&self) -> &[Dataset] {
        &self.data.datasets
    }

    pub fn validate(&self) -> ChartResult<()> {
        for dataset in self.datasets() {
            dataset.validate()?;
        }
        if !self.font_sizes.title.is_finite()
            || !self.font_sizes.label.is_finite()
            || !self.font_sizes.axis.is_finite()
        {
            return Err(ChartError::InvalidOptions(
                "font sizes must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Versioned JSON envelope so the wire format can evolve without breaking
/// older callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigJsonContractV1 {
    pub schema_version: u32,
    pub config: ChartConfig,
}

impl ChartConfig {
    pub fn to_json_contract_v1_pretty(&self) -> ChartResult<String> {
        let payload = ChartConfigJsonContractV1 {
            schema_version: CHART_CONFIG_JSON_SCHEMA_V1,
            config: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ChartError::InvalidData(format!("failed to serialize config contract v1: {e}"))
        })
    }

    /// Accepts both the bare config shape and the versioned envelope.
    pub fn from_json_compat_str(input: &str) -> ChartResult<Self> {
        if let Ok(config) = serde_json::from_str::<ChartConfig>(input) {
            return Ok(config);
        }
        let payload: ChartConfigJsonContractV1 = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse config json: {e}")))?;
        if payload.schema_version != CHART_CONFIG_JSON_SCHEMA_V1 {
            return Err(ChartError::InvalidData(format!(
                "unsupported config schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.config)
    }
}
