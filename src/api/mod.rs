mod config;
mod engine;
mod options;

pub use config::{
    CHART_CONFIG_JSON_SCHEMA_V1, ChartConfig, ChartConfigJsonContractV1, ChartData, FontSizes,
    Theme,
};
pub use engine::{ChartEngine, ChartGeometry, RenderedChart};
pub use options::{Environment, OptionOverrides, Palette, RenderOptions};
