use patternkit_designer::{
    create_mirror, sync_mirrors, world_polyline, Figure, FigureKind, MirrorRole, Vec2,
};
use patternkit_designer::geometry::reflect_point_across_axis;

fn dart() -> Figure {
    let mut f = Figure::curve(
        "dart",
        Vec2::new(0.0, 0.0),
        Vec2::new(20.0, 35.0),
        Vec2::new(60.0, 35.0),
        Vec2::new(80.0, 0.0),
    );
    f.set_position(120.0, 40.0);
    f.set_rotation(30.0);
    f
}

#[test]
fn test_mirror_outline_is_reflected_original_outline() {
    let axis_point = Vec2::new(100.0, 0.0);
    let axis_dir = Vec2::new(1.0, 2.0);
    let (original, mirror) = create_mirror(&dart(), "dart-m", axis_point, axis_dir);

    let expected: Vec<Vec2> = world_polyline(&original, 16)
        .into_iter()
        .map(|p| reflect_point_across_axis(p, axis_point, axis_dir))
        .collect();
    let actual = world_polyline(&mirror, 16);
    assert_eq!(actual.len(), expected.len());
    for (a, e) in actual.iter().zip(&expected) {
        assert!(a.distance_to(*e) < 1e-9);
    }
}

#[test]
fn test_link_metadata() {
    let (original, mirror) = create_mirror(&dart(), "dart-m", Vec2::ZERO, Vec2::new(0.0, 1.0));
    let a = original.mirror_link.as_ref().unwrap();
    let b = mirror.mirror_link.as_ref().unwrap();
    assert_eq!(a.role, MirrorRole::Original);
    assert_eq!(b.role, MirrorRole::Mirror);
    assert_eq!(a.pair_id, b.pair_id);
    assert!(a.is_counterpart(&original.id, b));
    assert!(b.is_counterpart(&mirror.id, a));
}

#[test]
fn test_axis_change_triggers_resync() {
    let (mut original, mirror) =
        create_mirror(&dart(), "dart-m", Vec2::ZERO, Vec2::new(0.0, 1.0));
    if let Some(link) = original.mirror_link.as_mut() {
        link.axis_point_world = Vec2::new(-50.0, 0.0);
    }
    let synced = sync_mirrors(&[original, mirror.clone()]);
    let shifted = synced[1].nodes[0].pos() - mirror.nodes[0].pos();
    assert!(shifted.distance_to(Vec2::new(-100.0, 0.0)) < 1e-9);
    let stamp = synced[1].mirror_link.as_ref().unwrap().stamp.unwrap();
    assert_eq!(stamp.axis_point, Vec2::new(-50.0, 0.0));
}

#[test]
fn test_mirror_keeps_identity_and_kind() {
    let seam = Figure::rectangle("seam", 0.0, 0.0, 10.0, 10.0)
        .seam_of("body")
        .with_name("Seam");
    let (_, mirror) = create_mirror(&seam, "seam-m", Vec2::ZERO, Vec2::new(0.0, 1.0));
    assert_eq!(mirror.id, "seam-m");
    assert_eq!(mirror.name, "Seam (mirror)");
    assert_eq!(
        mirror.kind,
        FigureKind::Seam {
            parent_id: "body".to_string()
        }
    );
}

#[test]
fn test_missing_counterpart_is_ignored() {
    let (original, _) = create_mirror(&dart(), "gone", Vec2::ZERO, Vec2::new(0.0, 1.0));
    let figures = vec![original];
    assert_eq!(sync_mirrors(&figures), figures);
}
