use chrono::{TimeZone, Utc};
use starchart_rs::api::{ChartEngine, Environment, OptionOverrides, Theme};
use starchart_rs::core::{DataPoint, Dataset, XAxisMode};
use starchart_rs::{ChartConfig, Surface};

fn timeline_dataset(label: &str, points: &[(f64, f64)]) -> Dataset {
    Dataset::new(label).with_points(
        points
            .iter()
            .map(|(x, y)| DataPoint::at_offset(*x, *y))
            .collect(),
    )
}

fn number_mode() -> OptionOverrides {
    OptionOverrides {
        x_axis_mode: Some(XAxisMode::Number),
        ..OptionOverrides::default()
    }
}

#[test]
fn three_points_produce_three_dots_and_one_path_in_palette_color_zero() {
    let dataset = timeline_dataset("rust-lang/rust", &[(0.0, 1.0), (1.0, 5.0), (2.0, 3.0)]);
    let config = ChartConfig::new(vec![dataset]).with_show_dots(true);
    let mut surface = Surface::new();
    ChartEngine::new(config)
        .with_overrides(number_mode())
        .render(&mut surface)
        .expect("render");

    let dots = surface.elements_by_class("chart-series-dot");
    let lines = surface.elements_by_class("chart-series-line");
    assert_eq!(dots.len(), 3);
    assert_eq!(lines.len(), 1);
    assert_eq!(surface.attr(lines[0], "stroke"), Some("#dd4528"));
}

#[test]
fn rerendering_the_same_surface_never_duplicates_elements() {
    let first = ChartConfig::new(vec![
        timeline_dataset("a/b", &[(0.0, 1.0), (1.0, 2.0)]),
        timeline_dataset("c/d", &[(0.0, 3.0), (1.0, 4.0)]),
    ])
    .with_title("First");
    let second = ChartConfig::new(vec![timeline_dataset("e/f", &[(0.0, 1.0), (1.0, 2.0)])])
        .with_title("Second");

    let mut surface = Surface::new();
    ChartEngine::new(first)
        .with_overrides(number_mode())
        .render(&mut surface)
        .expect("first render");
    ChartEngine::new(second)
        .with_overrides(number_mode())
        .render(&mut surface)
        .expect("second render");

    assert_eq!(surface.elements_by_class("chart-title").len(), 1);
    assert_eq!(surface.elements_by_class("chart-legend").len(), 1);
    assert_eq!(surface.elements_by_class("chart-series-line").len(), 1);
}

#[test]
fn empty_dataset_list_renders_axes_and_nothing_else() {
    let config = ChartConfig::new(Vec::new()).with_show_dots(true);
    let mut surface = Surface::new();
    ChartEngine::new(config)
        .render(&mut surface)
        .expect("empty render");

    assert_eq!(surface.elements_by_class("chart-axis-x").len(), 1);
    assert_eq!(surface.elements_by_class("chart-axis-y").len(), 1);
    assert!(surface.elements_by_class("chart-series-line").is_empty());
    assert!(surface.elements_by_class("chart-series-dot").is_empty());
}

#[test]
fn transparent_background_applies_in_both_themes() {
    for theme in [Theme::Light, Theme::Dark] {
        let config = ChartConfig::new(vec![timeline_dataset("a/b", &[(0.0, 1.0)])])
            .with_theme(theme)
            .with_transparent(true);
        let mut surface = Surface::new();
        ChartEngine::new(config).render(&mut surface).expect("render");
        assert_eq!(
            surface.style(surface.root(), "background"),
            Some("transparent")
        );
    }
}

#[test]
fn opaque_backgrounds_follow_the_theme() {
    let light = ChartConfig::new(vec![timeline_dataset("a/b", &[(0.0, 1.0)])]);
    let mut surface = Surface::new();
    ChartEngine::new(light).render(&mut surface).expect("render");
    assert_eq!(surface.style(surface.root(), "background"), Some("white"));

    let dark =
        ChartConfig::new(vec![timeline_dataset("a/b", &[(0.0, 1.0)])]).with_theme(Theme::Dark);
    ChartEngine::new(dark).render(&mut surface).expect("render");
    assert_eq!(surface.style(surface.root(), "background"), Some("#0d1117"));
}

#[test]
fn dataset_colors_stay_aligned_across_lines_and_legend() {
    let config = ChartConfig::new(vec![
        timeline_dataset("a/b", &[(0.0, 1.0), (1.0, 2.0)]),
        timeline_dataset("c/d", &[(0.0, 3.0), (1.0, 4.0)]),
    ]);
    let mut surface = Surface::new();
    ChartEngine::new(config)
        .with_overrides(number_mode())
        .render(&mut surface)
        .expect("render");

    let lines = surface.elements_by_class("chart-series-line");
    assert_eq!(surface.attr(lines[0], "stroke"), Some("#dd4528"));
    assert_eq!(surface.attr(lines[1], "stroke"), Some("#28a3dd"));

    let markup = surface.to_svg_string();
    assert!(markup.contains("fill=\"#28a3dd\""));
}

#[test]
fn decorations_appear_only_when_configured() {
    let config = ChartConfig::new(vec![timeline_dataset("a/b", &[(0.0, 1.0)])])
        .with_title("Star History")
        .with_x_label("Timeline")
        .with_y_label("GitHub Stars");
    let mut surface = Surface::new();
    ChartEngine::new(config)
        .with_overrides(number_mode())
        .render(&mut surface)
        .expect("render");

    assert_eq!(surface.elements_by_class("chart-title").len(), 1);
    assert_eq!(surface.elements_by_class("chart-label-x").len(), 1);
    assert_eq!(surface.elements_by_class("chart-label-y").len(), 1);
    assert_eq!(surface.elements_by_class("chart-watermark").len(), 1);

    let bare = ChartConfig::new(vec![timeline_dataset("a/b", &[(0.0, 1.0)])]);
    ChartEngine::new(bare).render(&mut surface).expect("render");
    assert!(surface.elements_by_class("chart-title").is_empty());
    assert!(surface.elements_by_class("chart-label-x").is_empty());
    assert!(surface.elements_by_class("chart-label-y").is_empty());
}

#[test]
fn serialized_markup_is_valid_enough_to_embed() {
    let config = ChartConfig::new(vec![timeline_dataset("a & b", &[(0.0, 1.0), (1.0, 2.0)])])
        .with_title("Stars <3");
    let mut surface = Surface::new();
    ChartEngine::new(config)
        .with_overrides(number_mode())
        .render(&mut surface)
        .expect("render");

    let markup = surface.to_svg_string();
    assert!(markup.starts_with("<svg"));
    assert!(markup.ends_with("</svg>"));
    assert!(markup.contains("Stars &lt;3"));
    assert!(markup.contains("a &amp; b"));
    assert!(!markup.contains("Stars <3"));
}

#[test]
fn browser_environment_stretches_wide_surfaces() {
    let config = ChartConfig::new(vec![timeline_dataset("a/b", &[(0.0, 1.0), (1.0, 2.0)])]);
    let overrides = OptionOverrides {
        environment: Some(Environment::Browser),
        x_axis_mode: Some(XAxisMode::Number),
        ..OptionOverrides::default()
    };

    let mut surface = Surface::new();
    surface.set_attr(surface.root(), "width", "900");
    ChartEngine::new(config.clone())
        .with_overrides(overrides.clone())
        .render(&mut surface)
        .expect("render");
    assert_eq!(surface.attr(surface.root(), "width"), Some("100%"));
    assert_eq!(surface.attr(surface.root(), "viewBox"), Some("0 0 900 600"));

    let mut narrow = Surface::new();
    narrow.set_attr(narrow.root(), "width", "480");
    ChartEngine::new(config)
        .with_overrides(overrides)
        .render(&mut narrow)
        .expect("render");
    assert_eq!(narrow.attr(narrow.root(), "width"), Some("600"));
}

#[test]
fn date_samples_are_coerced_once_and_chart_correctly() {
    let points = vec![
        DataPoint::at_date(Utc.with_ymd_and_hms(2020, 5, 1, 0, 0, 0).unwrap(), 10.0),
        DataPoint::at_date(Utc.with_ymd_and_hms(2021, 5, 1, 0, 0, 0).unwrap(), 950.0),
    ];
    let dataset = Dataset::new("rust-lang/rust").with_points(points.clone());
    let config = ChartConfig::new(vec![dataset]);

    let mut surface = Surface::new();
    let engine = ChartEngine::new(config);
    engine.render(&mut surface).expect("render");

    // Source points keep their date form; only the internal view is numeric.
    assert_eq!(engine.config().datasets()[0].points, points);
    let markup = surface.to_svg_string();
    assert!(markup.contains("2020"));
    assert!(markup.contains("2021"));
}

#[test]
fn date_mode_ticks_use_the_configured_pattern() {
    let points = vec![
        DataPoint::at_offset(1_588_291_200_000.0, 1.0),
        DataPoint::at_offset(1_620_000_000_000.0, 50.0),
    ];
    let config = ChartConfig::new(vec![Dataset::new("a/b").with_points(points)]);
    let overrides = OptionOverrides {
        date_format: Some("%Y".to_owned()),
        ..OptionOverrides::default()
    };
    let mut surface = Surface::new();
    ChartEngine::new(config)
        .with_overrides(overrides)
        .render(&mut surface)
        .expect("render");
    let markup = surface.to_svg_string();
    assert!(markup.contains(">2020<"));
}
