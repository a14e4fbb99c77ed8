use approx::assert_relative_eq;
use starchart_rs::core::{LinearScale, XAxisMode, x_scale, y_scale};

#[test]
fn y_scale_pixel_output_decreases_as_count_grows() {
    let scale = y_scale(Some((1.0, 100.0)), 300.0).expect("y scale");
    let low = scale.map(1.0);
    let mid = scale.map(50.0);
    let high = scale.map(100.0);
    assert!(low > mid);
    assert!(mid > high);
    assert_eq!(low, 300.0);
    assert_eq!(high, 0.0);
}

#[test]
fn number_mode_lower_bound_is_zero_for_positive_minimum() {
    let scale = x_scale(XAxisMode::Number, Some((500.0, 2_000.0)), 520.0).expect("x scale");
    assert_eq!(scale.domain(), (0.0, 2_000.0));
}

#[test]
fn number_mode_lower_bound_is_zero_for_negative_minimum() {
    let scale = x_scale(XAxisMode::Number, Some((-500.0, 2_000.0)), 520.0).expect("x scale");
    assert_eq!(scale.domain().0, 0.0);
}

#[test]
fn date_mode_lower_bound_is_the_true_minimum() {
    let scale = x_scale(
        XAxisMode::Date,
        Some((1_588_291_200_000.0, 1_620_000_000_000.0)),
        520.0,
    )
    .expect("x scale");
    assert_eq!(scale.domain().0, 1_588_291_200_000.0);
}

#[test]
fn missing_extent_falls_back_to_unit_domain() {
    let scale = x_scale(XAxisMode::Date, None, 520.0).expect("x scale");
    assert_eq!(scale.domain(), (0.0, 1.0));
    assert!(scale.map(0.5).is_finite());
}

#[test]
fn single_point_domain_never_produces_nan() {
    let scale = y_scale(Some((42.0, 42.0)), 300.0).expect("y scale");
    assert!(scale.map(42.0).is_finite());
}

#[test]
fn non_finite_domain_is_rejected() {
    assert!(LinearScale::new((f64::NAN, 1.0), (0.0, 100.0)).is_err());
    assert!(LinearScale::new((0.0, f64::INFINITY), (0.0, 100.0)).is_err());
}

#[test]
fn x_scale_maps_domain_ends_onto_plot_span() {
    let scale = x_scale(XAxisMode::Date, Some((100.0, 200.0)), 520.0).expect("x scale");
    assert_eq!(scale.map(100.0), 0.0);
    assert_eq!(scale.map(200.0), 520.0);
    assert_relative_eq!(scale.map(150.0), 260.0, epsilon = 1e-9);
}
