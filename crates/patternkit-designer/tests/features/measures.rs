use patternkit_designer::{compute_measures, CircleMeasure, Figure, RectMeasure, Vec2};

#[test]
fn test_rectangle_scenario() {
    let f = Figure::polygon(
        "r",
        patternkit_designer::Tool::Rectangle,
        &[
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 0.0),
            Vec2::new(200.0, 120.0),
            Vec2::new(0.0, 120.0),
        ],
        true,
    );
    let m = compute_measures(&f);
    assert_eq!(
        m.rect,
        Some(RectMeasure {
            width: 200.0,
            height: 120.0
        })
    );
}

#[test]
fn test_lengths_in_centimetres() {
    let f = Figure::line("l", Vec2::new(0.0, 0.0), Vec2::new(96.0, 0.0));
    let m = compute_measures(&f);
    assert!((m.edges[0].length_cm() - 2.54).abs() < 1e-12);
    assert!((m.total_length_cm() - 2.54).abs() < 1e-12);
    assert_eq!(m.edge("e0").map(|e| e.length_px), Some(96.0));
}

#[test]
fn test_curve_total_matches_edge_length() {
    let f = Figure::curve(
        "c",
        Vec2::new(0.0, 0.0),
        Vec2::new(40.0, 60.0),
        Vec2::new(90.0, 60.0),
        Vec2::new(120.0, 10.0),
    );
    let m = compute_measures(&f);
    let edge = m.edges[0].length_px;
    assert!((m.total_length_px - edge).abs() / edge < 1e-3);
    let curve = m.curve.unwrap();
    assert!(curve.curvature_radius.is_some());
}

#[test]
fn test_rotation_does_not_change_circle_classification() {
    let mut f = Figure::circle("c", Vec2::new(0.0, 0.0), 80.0, 48);
    f.set_rotation(45.0);
    assert!(matches!(
        compute_measures(&f).circle,
        Some(CircleMeasure::Circle { .. })
    ));
}

#[test]
fn test_dangling_edge_is_left_out() {
    let mut f = Figure::rectangle("r", 0.0, 0.0, 10.0, 10.0);
    f.edges[3].to = "ghost".to_string();
    let m = compute_measures(&f);
    assert_eq!(m.edges.len(), 3);
    assert_eq!(m.total_length_px, 30.0);
}
