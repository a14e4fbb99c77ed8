use crate::render::surface::{NodeId, Surface};

const TITLE_CLIP_ID: &str = "clip-circle-title";

/// Draws the bold centered title and, when present, a circular-clipped logo
/// immediately left of the text. Logo geometry is derived from the resolved
/// layout width, matching what a browser would compute from the bounding box.
pub fn draw_title(
    surface: &mut Surface,
    title: &str,
    logo: Option<&str>,
    stroke: &str,
    width: f64,
    font_size: f64,
) {
    let root = surface.root();

    let text = surface.create_element("text");
    surface.set_attr(text, "class", "chart-title");
    surface.set_attr(text, "x", "50%");
    surface.set_attr(text, "y", "30");
    surface.set_attr(text, "text-anchor", "middle");
    surface.set_attr(text, "fill", stroke);
    surface.set_style(text, "font-size", format!("{font_size}px"));
    surface.set_style(text, "font-weight", "bold");
    surface.set_text(text, title);
    surface.append_child(root, text);

    if let Some(logo_url) = logo {
        let logo_x = width * 0.5 - 84.0;
        let clip_x = width * 0.5 - 73.0;

        let defs = surface.create_element("defs");
        surface.append_child(root, defs);
        let clip = surface.create_element("clipPath");
        surface.set_attr(clip, "id", TITLE_CLIP_ID);
        surface.append_child(defs, clip);
        let circle = surface.create_element("circle");
        surface.set_attr(circle, "r", "11");
        surface.set_attr(circle, "cx", format!("{clip_x:.2}"));
        surface.set_attr(circle, "cy", "23");
        surface.append_child(clip, circle);

        let image = surface.create_element("image");
        surface.set_attr(image, "class", "chart-title-logo");
        surface.set_attr(image, "x", format!("{logo_x:.2}"));
        surface.set_attr(image, "y", "12");
        surface.set_attr(image, "width", "22");
        surface.set_attr(image, "height", "22");
        surface.set_attr(image, "href", logo_url);
        surface.set_attr(image, "clip-path", format!("url(#{TITLE_CLIP_ID})"));
        surface.append_child(root, image);
    }
}

/// Centered X-axis caption just above the bottom edge.
pub fn draw_x_label(surface: &mut Surface, text: &str, stroke: &str, height: f64, font_size: f64) {
    let root = surface.root();
    let label = surface.create_element("text");
    surface.set_attr(label, "class", "chart-label chart-label-x");
    surface.set_attr(label, "x", "50%");
    surface.set_attr(label, "y", format!("{:.2}", height - 6.0));
    surface.set_attr(label, "text-anchor", "middle");
    surface.set_attr(label, "fill", stroke);
    surface.set_style(label, "font-size", format!("{font_size}px"));
    surface.set_text(label, text);
    surface.append_child(root, label);
}

/// Rotated Y-axis caption; `offset` comes from the magnitude buckets in
/// [`crate::core::y_label_offset`] so wide tick labels never collide with it.
pub fn draw_y_label(
    surface: &mut Surface,
    text: &str,
    stroke: &str,
    height: f64,
    offset: f64,
    font_size: f64,
) {
    let root = surface.root();
    let label = surface.create_element("text");
    surface.set_attr(label, "class", "chart-label chart-label-y");
    surface.set_attr(label, "transform", "rotate(-90)");
    surface.set_attr(label, "x", format!("{:.2}", -height / 2.0));
    surface.set_attr(label, "y", format!("{offset:.2}"));
    surface.set_attr(label, "text-anchor", "middle");
    surface.set_attr(label, "fill", stroke);
    surface.set_style(label, "font-size", format!("{font_size}px"));
    surface.set_text(label, text);
    surface.append_child(root, label);
}

/// Low-opacity site watermark centered in the plot area, drawn first so every
/// data layer sits above it.
pub fn draw_watermark(surface: &mut Surface, parent: NodeId, plot_width: f64, plot_height: f64) {
    let text = surface.create_element("text");
    surface.set_attr(text, "class", "chart-watermark");
    surface.set_attr(text, "x", format!("{:.2}", plot_width / 2.0));
    surface.set_attr(text, "y", format!("{:.2}", plot_height / 2.0));
    surface.set_attr(text, "text-anchor", "middle");
    surface.set_attr(text, "opacity", "0.1");
    surface.set_style(text, "font-size", "20px");
    surface.set_text(text, "star-history.com");
    surface.append_child(parent, text);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_logo_is_circle_clipped() {
        let mut surface = Surface::new();
        draw_title(
            &mut surface,
            "Star History",
            Some("https://example.com/logo.png"),
            "black",
            600.0,
            20.0,
        );
        let markup = surface.to_svg_string();
        assert!(markup.contains("clip-path=\"url(#clip-circle-title)\""));
        assert!(markup.contains("x=\"216.00\""));
    }

    #[test]
    fn title_without_logo_adds_no_image() {
        let mut surface = Surface::new();
        draw_title(&mut surface, "Star History", None, "black", 600.0, 20.0);
        assert!(!surface.to_svg_string().contains("<image"));
    }
}
