use crate::render::surface::Surface;

/// Filter id shared by series paths and dots for the hand-sketched stroke look.
pub const SKETCH_FILTER_ID: &str = "sketchify";
pub const SKETCH_FILTER_REF: &str = "url(#sketchify)";

/// Injects the font rule and the sketch displacement filter.
///
/// Runs once per render, unconditionally; both browsers and SVG rasterizers
/// resolve the same defs, which keeps the two environments pixel-compatible.
pub fn inject_defs(surface: &mut Surface, font_family: &str) {
    let root = surface.root();
    let defs = surface.create_element("defs");
    surface.append_child(root, defs);

    let style = surface.create_element("style");
    surface.set_text(
        style,
        format!("text {{ font-family: \"{font_family}\", \"Comic Sans MS\", cursive; }}"),
    );
    surface.append_child(defs, style);

    let filter = surface.create_element("filter");
    surface.set_attr(filter, "id", SKETCH_FILTER_ID);
    surface.append_child(defs, filter);

    let turbulence = surface.create_element("feTurbulence");
    surface.set_attr(turbulence, "type", "turbulence");
    surface.set_attr(turbulence, "baseFrequency", "0.05");
    surface.set_attr(turbulence, "result", "noise");
    surface.append_child(filter, turbulence);

    let displacement = surface.create_element("feDisplacementMap");
    surface.set_attr(displacement, "in", "SourceGraphic");
    surface.set_attr(displacement, "in2", "noise");
    surface.set_attr(displacement, "scale", "1.5");
    surface.append_child(filter, displacement);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defs_carry_filter_and_font_rule() {
        let mut surface = Surface::new();
        inject_defs(&mut surface, "xkcd");
        let markup = surface.to_svg_string();
        assert!(markup.contains("id=\"sketchify\""));
        assert!(markup.contains("xkcd"));
    }
}
