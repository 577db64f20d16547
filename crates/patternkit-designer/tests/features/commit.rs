use patternkit_designer::{commit, create_mirror, Figure, Vec2};

fn pattern() -> Vec<Figure> {
    let bodice = Figure::rectangle("bodice", 50.0, 50.0, 200.0, 300.0).with_name("Bodice");
    let (bodice, mirror) = create_mirror(&bodice, "bodice-m", Vec2::ZERO, Vec2::new(0.0, 1.0));
    vec![
        bodice,
        mirror,
        Figure::circle("button", Vec2::new(400.0, 100.0), 12.0, 32),
    ]
}

#[test]
fn test_commit_measures_every_figure() {
    let committed = commit(&pattern());
    assert!(committed.iter().all(|f| f.measures.is_some()));
}

#[test]
fn test_commit_is_idempotent() {
    let mut figures = commit(&pattern());
    figures[0].move_node("n2", Vec2::new(220.0, 320.0)).unwrap();
    let once = commit(&figures);
    let twice = commit(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_commit_propagates_edits_to_mirror_measures() {
    let mut figures = commit(&pattern());
    figures[0].move_node("n1", Vec2::new(260.0, 0.0)).unwrap();
    let committed = commit(&figures);
    let original = committed[0].measures.as_ref().unwrap();
    let mirror = committed[1].measures.as_ref().unwrap();
    assert!((original.total_length_px - mirror.total_length_px).abs() < 1e-9);
    assert_eq!(original.rect, mirror.rect);
}

#[test]
fn test_commit_leaves_input_alone() {
    let figures = pattern();
    let before = figures.clone();
    let _ = commit(&figures);
    assert_eq!(figures, before);
}
