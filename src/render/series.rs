use crate::render::defs::SKETCH_FILTER_REF;
use crate::render::surface::{NodeId, Surface};

/// Builds monotone-cubic path data through the given pixel points.
///
/// Tangents follow the Fritsch–Carlson construction, so the interpolated
/// curve never overshoots between samples: a strictly growing star count
/// stays strictly growing on screen.
#[must_use]
pub fn monotone_path_data(points: &[(f64, f64)]) -> String {
    match points.len() {
        0 => String::new(),
        1 => format!("M{:.2},{:.2}", points[0].0, points[0].1),
        2 => format!(
            "M{:.2},{:.2}L{:.2},{:.2}",
            points[0].0, points[0].1, points[1].0, points[1].1
        ),
        _ => {
            let mut path = format!("M{:.2},{:.2}", points[0].0, points[0].1);
            let mut t0 = 0.0;
            for index in 2..points.len() {
                let p0 = points[index - 2];
                let p1 = points[index - 1];
                let p2 = points[index];
                let t1 = slope3(p0, p1, p2);
                let t_start = if index == 2 { slope2(p0, p1, t1) } else { t0 };
                push_bezier(&mut path, p0, p1, t_start, t1);
                t0 = t1;
            }
            let p0 = points[points.len() - 2];
            let p1 = points[points.len() - 1];
            push_bezier(&mut path, p0, p1, t0, slope2(p0, p1, t0));
            path
        }
    }
}

fn sign(value: f64) -> f64 {
    if value < 0.0 { -1.0 } else { 1.0 }
}

fn slope3(p0: (f64, f64), p1: (f64, f64), p2: (f64, f64)) -> f64 {
    let h0 = p1.0 - p0.0;
    let h1 = p2.0 - p1.0;
    let s0 = if h0 != 0.0 { (p1.1 - p0.1) / h0 } else { 0.0 };
    let s1 = if h1 != 0.0 { (p2.1 - p1.1) / h1 } else { 0.0 };
    let p = if h0 + h1 != 0.0 {
        (s0 * h1 + s1 * h0) / (h0 + h1)
    } else {
        0.0
    };
    let tangent = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if tangent.is_finite() { tangent } else { 0.0 }
}

fn slope2(p0: (f64, f64), p1: (f64, f64), t: f64) -> f64 {
    let h = p1.0 - p0.0;
    if h != 0.0 {
        (3.0 * (p1.1 - p0.1) / h - t) / 2.0
    } else {
        t
    }
}

fn push_bezier(path: &mut String, p0: (f64, f64), p1: (f64, f64), t0: f64, t1: f64) {
    let dx = (p1.0 - p0.0) / 3.0;
    path.push_str(&format!(
        "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
        p0.0 + dx,
        p0.1 + dx * t0,
        p1.0 - dx,
        p1.1 - dx * t1,
        p1.0,
        p1.1
    ));
}

/// Draws one dataset's smoothed line.
pub fn draw_line(
    surface: &mut Surface,
    parent: NodeId,
    pixel_points: &[(f64, f64)],
    color: &str,
) -> NodeId {
    let path = surface.create_element("path");
    surface.set_attr(path, "class", "chart-series-line");
    surface.set_attr(path, "d", monotone_path_data(pixel_points));
    surface.set_attr(path, "fill", "none");
    surface.set_attr(path, "stroke", color);
    surface.set_attr(path, "filter", SKETCH_FILTER_REF);
    surface.append_child(parent, path);
    path
}

/// Draws one dataset's dot markers and returns their node handles in point
/// order, so hover wiring can address each circle directly.
pub fn draw_dots(
    surface: &mut Surface,
    parent: NodeId,
    series_index: usize,
    pixel_points: &[(f64, f64)],
    color: &str,
    radius: f64,
) -> Vec<NodeId> {
    let group = surface.create_element("g");
    surface.set_attr(group, "class", "chart-series-dots");
    surface.set_attr(group, "filter", SKETCH_FILTER_REF);
    surface.set_attr(group, "data-series", format!("{series_index}"));
    surface.append_child(parent, group);

    let mut dots = Vec::with_capacity(pixel_points.len());
    for (point_index, (cx, cy)) in pixel_points.iter().enumerate() {
        let dot = surface.create_element("circle");
        surface.set_attr(dot, "class", "chart-series-dot");
        surface.set_attr(dot, "cx", format!("{cx:.2}"));
        surface.set_attr(dot, "cy", format!("{cy:.2}"));
        surface.set_attr(dot, "r", format!("{radius}"));
        surface.set_attr(dot, "fill", color);
        surface.set_attr(dot, "stroke", color);
        surface.set_attr(dot, "data-series", format!("{series_index}"));
        surface.set_attr(dot, "data-point", format!("{point_index}"));
        surface.set_attr(dot, "pointer-events", "all");
        surface.append_child(group, dot);
        dots.push(dot);
    }
    dots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn monotone_path_uses_cubic_segments() {
        let path = monotone_path_data(&[(0.0, 10.0), (50.0, 40.0), (100.0, 20.0)]);
        assert!(path.starts_with('M'));
        assert_eq!(path.matches('C').count(), 2);
    }

    #[test]
    fn two_points_fall_back_to_a_straight_segment() {
        let path = monotone_path_data(&[(0.0, 0.0), (10.0, 10.0)]);
        assert_eq!(path, "M0.00,0.00L10.00,10.00");
    }

    #[test]
    fn monotone_input_emits_one_segment_per_interval() {
        let path = monotone_path_data(&[(0.0, 0.0), (10.0, 5.0), (20.0, 6.0), (30.0, 30.0)]);
        assert_eq!(path.matches('C').count(), 3);
    }

    #[test]
    fn dots_carry_series_and_point_indices() {
        let mut surface = Surface::new();
        let root = surface.root();
        let dots = draw_dots(&mut surface, root, 2, &[(1.0, 2.0), (3.0, 4.0)], "#dd4528", 1.75);
        assert_eq!(dots.len(), 2);
        assert_eq!(surface.attr(dots[1], "data-series"), Some("2"));
        assert_eq!(surface.attr(dots[1], "data-point"), Some("1"));
    }
}
