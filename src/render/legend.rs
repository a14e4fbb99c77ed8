use crate::render::surface::{NodeId, Surface};

const ROW_HEIGHT: f64 = 20.0;
const SWATCH_SIZE: f64 = 12.0;

/// One legend row: the dataset's color, its label, and an optional avatar.
/// The legend never sees data values, only display metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub color: String,
    pub label: String,
    pub logo: Option<String>,
}

/// Stacks one entry per dataset in the top-left corner of the plot area.
pub fn draw_legend(
    surface: &mut Surface,
    parent: NodeId,
    entries: &[LegendEntry],
    stroke: &str,
) -> NodeId {
    let group = surface.create_element("g");
    surface.set_attr(group, "class", "chart-legend");
    surface.append_child(parent, group);

    for (index, entry) in entries.iter().enumerate() {
        let row_y = 4.0 + ROW_HEIGHT * index as f64;

        let item = surface.create_element("g");
        surface.set_attr(item, "class", "chart-legend-item");
        surface.append_child(group, item);

        let swatch = surface.create_element("rect");
        surface.set_attr(swatch, "x", "8");
        surface.set_attr(swatch, "y", format!("{row_y:.2}"));
        surface.set_attr(swatch, "width", format!("{SWATCH_SIZE}"));
        surface.set_attr(swatch, "height", format!("{SWATCH_SIZE}"));
        surface.set_attr(swatch, "fill", &*entry.color);
        surface.append_child(item, swatch);

        let mut text_x = 26.0;
        if let Some(logo) = &entry.logo {
            let image = surface.create_element("image");
            surface.set_attr(image, "x", format!("{text_x:.2}"));
            surface.set_attr(image, "y", format!("{:.2}", row_y - 2.0));
            surface.set_attr(image, "width", "16");
            surface.set_attr(image, "height", "16");
            surface.set_attr(image, "href", &**logo);
            surface.append_child(item, image);
            text_x += 20.0;
        }

        let label = surface.create_element("text");
        surface.set_attr(label, "x", format!("{text_x:.2}"));
        surface.set_attr(label, "y", format!("{:.2}", row_y + SWATCH_SIZE - 2.0));
        surface.set_attr(label, "fill", stroke);
        surface.set_attr(label, "font-size", "14");
        surface.set_text(label, &*entry.label);
        surface.append_child(item, label);
    }

    group
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_entry_with_optional_logo() {
        let mut surface = Surface::new();
        let root = surface.root();
        let entries = vec![
            LegendEntry {
                color: "#dd4528".to_owned(),
                label: "rust-lang/rust".to_owned(),
                logo: Some("https://example.com/rust.png".to_owned()),
            },
            LegendEntry {
                color: "#28a3dd".to_owned(),
                label: "torvalds/linux".to_owned(),
                logo: None,
            },
        ];
        draw_legend(&mut surface, root, &entries, "black");
        assert_eq!(surface.elements_by_class("chart-legend-item").len(), 2);
        assert_eq!(surface.to_svg_string().matches("<image").count(), 1);
    }
}
