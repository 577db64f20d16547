use patternkit_designer::{plan_tiles_px, Figure, TilePages, Vec2};

#[test]
fn test_every_planned_tile_becomes_a_page() {
    let figures = vec![
        Figure::rectangle("a", 0.0, 0.0, 250.0, 120.0),
        Figure::circle("b", Vec2::new(60.0, 60.0), 20.0, 24),
    ];
    let plan = plan_tiles_px(&figures, 100.0, 100.0, false).unwrap();
    let pages: Vec<_> = TilePages::new(&figures, &plan, 16).collect();
    assert_eq!(pages.len(), plan.tiles.len());
    for (i, page) in pages.iter().enumerate() {
        assert_eq!(page.page_number, i + 1);
        assert_eq!(page.offset_px, plan.tiles[i].offset_px);
        assert_eq!(page.figures.len(), plan.tiles[i].figures_in_tile.len());
    }
}

#[test]
fn test_page_points_convert_to_centimetres() {
    let figures = vec![Figure::rectangle("a", 0.0, 0.0, 96.0, 10.0)];
    let plan = plan_tiles_px(&figures, 500.0, 500.0, false).unwrap();
    let page = TilePages::new(&figures, &plan, 4).next().unwrap();
    let runs = page.figures[0].runs_cm();
    // The rectangle starts one padding in from the tile corner.
    let first = runs[0][0];
    assert!((first.x - 10.0 * 2.54 / 96.0).abs() < 1e-9);
    let second = runs[0][1];
    assert!((second.x - first.x - 2.54).abs() < 1e-9);
    assert_eq!(page.label, "A1");
}

#[test]
fn test_dropping_iterator_early_is_fine() {
    let figures = vec![Figure::rectangle("a", 0.0, 0.0, 1000.0, 1000.0)];
    let plan = plan_tiles_px(&figures, 100.0, 100.0, true).unwrap();
    let first_two: Vec<_> = TilePages::new(&figures, &plan, 8).take(2).collect();
    assert_eq!(first_two.len(), 2);
    assert_eq!(first_two[1].label, "A2");
}
