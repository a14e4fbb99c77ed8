mod format;
mod layout;
mod scale;
mod types;

pub use format::{TimeUnit, format_count, format_date, format_timeline, validate_date_format};
pub use layout::{ChartLayout, DEFAULT_WIDTH, Margins, RESPONSIVE_MIN_WIDTH, y_label_offset};
pub use scale::{LinearScale, XAxisMode, x_scale, y_scale};
pub use types::{
    CoercedPoint, DataPoint, Dataset, SampleX, coerce_datasets, x_extent, y_extent,
};
