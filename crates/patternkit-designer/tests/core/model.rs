use patternkit_designer::{
    create_mirror, remove_figure_cascade, seams_of, Edge, EdgeKind, Figure, FigureIndex,
    HandleSide, Node, Tool, Vec2,
};

#[test]
fn test_every_edit_bumps_revision() {
    let mut f = Figure::rectangle("r", 0.0, 0.0, 10.0, 10.0);
    let mut last = f.revision;
    let mut check = |f: &Figure| {
        assert!(f.revision > last, "revision did not advance");
        last = f.revision;
    };

    f.move_node("n1", Vec2::new(12.0, 0.0)).unwrap();
    check(&f);
    f.translate_node("n2", Vec2::new(1.0, 1.0)).unwrap();
    check(&f);
    f.set_handle("n0", HandleSide::Out, Some(Vec2::new(2.0, -2.0)))
        .unwrap();
    check(&f);
    f.clear_handles("n0").unwrap();
    check(&f);
    f.set_position(5.0, 5.0);
    check(&f);
    f.translate(1.0, 0.0);
    check(&f);
    f.set_rotation(45.0);
    check(&f);
    f.set_closed(false);
    check(&f);
    f.replace_geometry(vec![Node::new("a", 0.0, 0.0)], Vec::new());
    check(&f);
}

#[test]
fn test_move_node_drags_handles() {
    let mut f = Figure::curve(
        "c",
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(20.0, 10.0),
        Vec2::new(30.0, 0.0),
    );
    f.move_node("n0", Vec2::new(5.0, 5.0)).unwrap();
    let n0 = f.node("n0").unwrap();
    assert_eq!(n0.out_handle, Some(Vec2::new(15.0, 15.0)));
}

#[test]
fn test_replace_geometry_resyncs_edge_kinds() {
    let mut f = Figure::new("f", Tool::Pen);
    let nodes = vec![
        Node::new("a", 0.0, 0.0).with_handles(None, Some(Vec2::new(5.0, 5.0))),
        Node::new("b", 10.0, 0.0),
    ];
    f.replace_geometry(nodes, vec![Edge::new("e", "a", "b")]);
    assert_eq!(f.edges[0].kind, EdgeKind::Cubic);
}

#[test]
fn test_adjacency_lists_outgoing_edges() {
    let f = Figure::polygon(
        "p",
        Tool::Pen,
        &[Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(1.0, 1.0)],
        true,
    );
    let adj = f.adjacency();
    assert_eq!(adj["n0"].as_slice(), &[0]);
    assert_eq!(adj["n2"].as_slice(), &[2]);
}

#[test]
fn test_index_finds_seams() {
    let figures = vec![
        Figure::rectangle("body", 0.0, 0.0, 10.0, 10.0),
        Figure::rectangle("seam", -1.0, -1.0, 12.0, 12.0).seam_of("body"),
        Figure::rectangle("other", 50.0, 0.0, 10.0, 10.0),
    ];
    let index = FigureIndex::build(&figures);
    assert_eq!(index.len(), 3);
    assert_eq!(seams_of(&figures, "body"), vec![1]);
    assert_eq!(index.get(&figures, "other").map(|f| f.x), Some(50.0));
    assert!(index.get(&figures, "missing").is_none());
}

#[test]
fn test_cascade_removes_seams_and_clears_links() {
    let body = Figure::rectangle("body", 0.0, 0.0, 10.0, 10.0);
    let (body, mirror) = create_mirror(&body, "mirror", Vec2::ZERO, Vec2::new(0.0, 1.0));
    let figures = vec![
        body,
        Figure::rectangle("seam", -1.0, -1.0, 12.0, 12.0).seam_of("body"),
        mirror,
    ];

    let remaining = remove_figure_cascade(&figures, "body");
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, "mirror");
    assert!(remaining[0].mirror_link.is_none());
    assert!(remaining[0].revision > figures[2].revision);
}

#[test]
fn test_set_mirror_sync_on_clears_stamp() {
    let square = Figure::rectangle("a", 0.0, 0.0, 5.0, 5.0);
    let (original, mut mirror) = create_mirror(&square, "b", Vec2::ZERO, Vec2::new(0.0, 1.0));
    assert!(mirror.mirror_link.as_ref().unwrap().stamp.is_some());
    mirror.set_mirror_sync(false);
    mirror.set_mirror_sync(true);
    assert!(mirror.mirror_link.as_ref().unwrap().stamp.is_none());
    assert!(original.mirror_link.as_ref().unwrap().sync);
}
