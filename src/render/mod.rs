mod axis;
mod decor;
mod defs;
mod legend;
mod series;
mod surface;
mod tooltip;

pub use axis::{XAxisSpec, YAxisSpec, draw_x_axis, draw_y_axis};
pub use decor::{draw_title, draw_watermark, draw_x_label, draw_y_label};
pub use defs::{SKETCH_FILTER_ID, SKETCH_FILTER_REF, inject_defs};
pub use legend::{LegendEntry, draw_legend};
pub use series::{draw_dots, draw_line, monotone_path_data};
pub use surface::{NodeId, Surface};
pub use tooltip::apply_tooltip;
