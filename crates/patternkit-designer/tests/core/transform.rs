use patternkit_designer::transform::{edge_chains, local_polyline};
use patternkit_designer::{
    centroid_local, local_to_world, world_bounding_box, world_polyline, world_to_local, Figure,
    Rect, Vec2,
};

#[test]
fn test_rotated_square_bbox() {
    let mut f = Figure::rectangle("r", 100.0, 100.0, 10.0, 10.0);
    f.set_rotation(90.0);
    let bbox = world_bounding_box(&f).unwrap();
    // Local x axis maps to world +y.
    assert!((bbox.min_x - 90.0).abs() < 1e-9);
    assert!((bbox.max_x - 100.0).abs() < 1e-9);
    assert!((bbox.min_y - 100.0).abs() < 1e-9);
    assert!((bbox.max_y - 110.0).abs() < 1e-9);
}

#[test]
fn test_bbox_includes_curve_bulge() {
    let f = Figure::curve(
        "c",
        Vec2::new(0.0, 0.0),
        Vec2::new(0.0, 100.0),
        Vec2::new(100.0, 100.0),
        Vec2::new(100.0, 0.0),
    );
    let bbox = world_bounding_box(&f).unwrap();
    // The curve peaks at 0.75 of its handle height.
    assert!((bbox.max_y - 75.0).abs() < 0.5);
}

#[test]
fn test_local_polyline_inverts_world() {
    let mut f = Figure::rectangle("r", 30.0, -20.0, 10.0, 5.0);
    f.set_rotation(17.0);
    let local = local_polyline(&f, 4);
    assert!(local[1].distance_to(Vec2::new(10.0, 0.0)) < 1e-9);
    let world = world_polyline(&f, 4);
    assert!(world[1].distance_to(local_to_world(&f, local[1])) < 1e-9);
}

#[test]
fn test_open_path_chains_once() {
    let f = Figure::line("l", Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0));
    assert_eq!(edge_chains(&f), vec![vec![0]]);
}

#[test]
fn test_world_to_local_round_trip_with_offset() {
    let mut f = Figure::new("f", patternkit_designer::Tool::Pen);
    f.set_position(-3.0, 8.0);
    f.set_rotation(-120.0);
    let w = Vec2::new(1.0, 2.0);
    assert!(local_to_world(&f, world_to_local(&f, w)).distance_to(w) < 1e-9);
}

#[test]
fn test_centroid_and_union_bbox() {
    let figures = [
        Figure::rectangle("a", 0.0, 0.0, 10.0, 10.0),
        Figure::rectangle("b", 20.0, 20.0, 10.0, 10.0),
    ];
    let union = patternkit_designer::transform::union_bounding_box(&figures).unwrap();
    assert_eq!(union, Rect::new(0.0, 0.0, 30.0, 30.0));
    assert_eq!(centroid_local(&figures[0]), Some(Vec2::new(5.0, 5.0)));
}
