use crate::core::{
    LinearScale, TimeUnit, XAxisMode, format_count, format_date, format_timeline,
};
use crate::render::surface::{NodeId, Surface};

const TICK_LENGTH: f64 = 5.0;

/// Everything the X axis needs besides the surface itself.
pub struct XAxisSpec<'a> {
    pub scale: LinearScale,
    pub tick_count: usize,
    pub plot_height: f64,
    pub mode: XAxisMode,
    pub date_format: &'a str,
    /// Shared elapsed-time unit for Number mode; `None` in Date mode.
    pub unit: Option<TimeUnit>,
    pub stroke: &'a str,
    pub font_size: f64,
}

pub struct YAxisSpec<'a> {
    pub scale: LinearScale,
    pub tick_count: usize,
    pub plot_height: f64,
    pub stroke: &'a str,
    pub font_size: f64,
}

/// Draws the X axis along the bottom edge of the plot area.
pub fn draw_x_axis(surface: &mut Surface, parent: NodeId, spec: &XAxisSpec<'_>) -> NodeId {
    let group = surface.create_element("g");
    surface.set_attr(group, "class", "chart-axis chart-axis-x");
    surface.set_attr(group, "transform", format!("translate(0,{:.2})", spec.plot_height));
    surface.append_child(parent, group);

    let (range_start, range_end) = spec.scale.range();
    draw_axis_line(surface, group, range_start, 0.0, range_end, 0.0, spec.stroke);

    for tick in spec.scale.ticks(spec.tick_count) {
        let x = spec.scale.map(tick);
        draw_axis_line(surface, group, x, 0.0, x, TICK_LENGTH, spec.stroke);

        let label = surface.create_element("text");
        surface.set_attr(label, "x", format!("{x:.2}"));
        surface.set_attr(label, "y", "20");
        surface.set_attr(label, "text-anchor", "middle");
        surface.set_attr(label, "fill", spec.stroke);
        surface.set_attr(label, "font-size", format!("{}", spec.font_size));
        surface.set_text(label, x_tick_label(tick, spec));
        surface.append_child(group, label);
    }

    group
}

/// Draws the Y axis along the left edge of the plot area.
pub fn draw_y_axis(surface: &mut Surface, parent: NodeId, spec: &YAxisSpec<'_>) -> NodeId {
    let group = surface.create_element("g");
    surface.set_attr(group, "class", "chart-axis chart-axis-y");
    surface.append_child(parent, group);

    draw_axis_line(surface, group, 0.0, 0.0, 0.0, spec.plot_height, spec.stroke);

    for tick in spec.scale.ticks(spec.tick_count) {
        let y = spec.scale.map(tick);
        draw_axis_line(surface, group, -TICK_LENGTH, y, 0.0, y, spec.stroke);

        let label = surface.create_element("text");
        surface.set_attr(label, "x", "-8");
        surface.set_attr(label, "y", format!("{:.2}", y + 4.0));
        surface.set_attr(label, "text-anchor", "end");
        surface.set_attr(label, "fill", spec.stroke);
        surface.set_attr(label, "font-size", format!("{}", spec.font_size));
        surface.set_text(label, format_count(tick));
        surface.append_child(group, label);
    }

    group
}

fn x_tick_label(tick: f64, spec: &XAxisSpec<'_>) -> String {
    match spec.mode {
        XAxisMode::Date => format_date(tick, spec.date_format),
        XAxisMode::Number => {
            let unit = spec.unit.unwrap_or_else(|| TimeUnit::for_offset(tick));
            format_timeline(tick, unit)
        }
    }
}

fn draw_axis_line(
    surface: &mut Surface,
    parent: NodeId,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    stroke: &str,
) {
    let line = surface.create_element("line");
    surface.set_attr(line, "x1", format!("{x1:.2}"));
    surface.set_attr(line, "y1", format!("{y1:.2}"));
    surface.set_attr(line, "x2", format!("{x2:.2}"));
    surface.set_attr(line, "y2", format!("{y2:.2}"));
    surface.set_attr(line, "stroke", stroke);
    surface.append_child(parent, line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::x_scale;

    #[test]
    fn x_axis_emits_one_label_per_tick() {
        let mut surface = Surface::new();
        let root = surface.root();
        let scale = x_scale(XAxisMode::Number, Some((0.0, 1000.0)), 500.0).expect("scale");
        let spec = XAxisSpec {
            scale,
            tick_count: 5,
            plot_height: 300.0,
            mode: XAxisMode::Number,
            date_format: "%b %d, %Y",
            unit: Some(TimeUnit::Seconds),
            stroke: "black",
            font_size: 16.0,
        };
        draw_x_axis(&mut surface, root, &spec);
        let markup = surface.to_svg_string();
        assert_eq!(markup.matches("<text").count(), 5);
    }
}
