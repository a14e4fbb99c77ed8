use crate::interaction::{TooltipPlacement, TooltipState};
use crate::render::surface::Surface;

const PADDING: f64 = 8.0;
const TITLE_HEIGHT: f64 = 20.0;
const ITEM_HEIGHT: f64 = 18.0;
/// Coarse per-character width; good enough for a box that only has to
/// comfortably wrap one title and a handful of item lines.
const CHAR_WIDTH: f64 = 7.5;

/// Replaces the tooltip group on the surface with the given state.
///
/// A hidden state removes the group entirely. The group is always appended
/// as the last root child, keeping it above every data layer.
pub fn apply_tooltip(
    surface: &mut Surface,
    state: &TooltipState,
    background: &str,
    stroke: &str,
) {
    let root = surface.root();
    for existing in surface.elements_by_class("chart-tooltip") {
        surface.remove_child(root, existing);
    }
    if !state.visible {
        return;
    }

    let longest_line = state
        .items
        .iter()
        .map(|item| item.text.chars().count())
        .chain(std::iter::once(state.title.chars().count()))
        .max()
        .unwrap_or(0);
    let box_width = PADDING * 2.0 + CHAR_WIDTH * longest_line as f64;
    let box_height = PADDING * 2.0 + TITLE_HEIGHT + ITEM_HEIGHT * state.items.len() as f64;

    let (dx, dy) = match state.anchor.placement {
        TooltipPlacement::DownRight => (0.0, 0.0),
        TooltipPlacement::DownLeft => (-box_width, 0.0),
        TooltipPlacement::UpRight => (0.0, -box_height),
        TooltipPlacement::UpLeft => (-box_width, -box_height),
    };

    let group = surface.create_element("g");
    surface.set_attr(group, "class", "chart-tooltip");
    surface.set_attr(
        group,
        "transform",
        format!("translate({:.2},{:.2})", state.anchor.x + dx, state.anchor.y + dy),
    );
    surface.append_child(root, group);

    let frame = surface.create_element("rect");
    surface.set_attr(frame, "width", format!("{box_width:.2}"));
    surface.set_attr(frame, "height", format!("{box_height:.2}"));
    surface.set_attr(frame, "rx", "5");
    surface.set_attr(frame, "fill", background);
    surface.set_attr(frame, "stroke", stroke);
    surface.append_child(group, frame);

    let title = surface.create_element("text");
    surface.set_attr(title, "x", format!("{PADDING}"));
    surface.set_attr(title, "y", format!("{:.2}", PADDING + 12.0));
    surface.set_attr(title, "fill", stroke);
    surface.set_attr(title, "font-size", "15");
    surface.set_text(title, &*state.title);
    surface.append_child(group, title);

    for (index, item) in state.items.iter().enumerate() {
        let line_y = PADDING + TITLE_HEIGHT + ITEM_HEIGHT * index as f64;

        let swatch = surface.create_element("rect");
        surface.set_attr(swatch, "x", format!("{PADDING}"));
        surface.set_attr(swatch, "y", format!("{line_y:.2}"));
        surface.set_attr(swatch, "width", "8");
        surface.set_attr(swatch, "height", "8");
        surface.set_attr(swatch, "fill", &*item.color);
        surface.append_child(group, swatch);

        let text = surface.create_element("text");
        surface.set_attr(text, "x", format!("{:.2}", PADDING + 12.0));
        surface.set_attr(text, "y", format!("{:.2}", line_y + 8.0));
        surface.set_attr(text, "fill", &*item.color);
        surface.set_attr(text, "font-size", "14");
        surface.set_text(text, &*item.text);
        surface.append_child(group, text);
    }
}
