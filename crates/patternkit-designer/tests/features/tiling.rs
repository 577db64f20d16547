use patternkit_core::{Orientation, PageSettings, PaperSize};
use patternkit_designer::tiling::EXPORT_PADDING_PX;
use patternkit_designer::{plan_tiles, plan_tiles_px, Figure, Tool, Vec2};

#[test]
fn test_single_tile_scenario() {
    let figures = vec![Figure::rectangle("piece", 0.0, 0.0, 400.0, 600.0)];
    let plan = plan_tiles_px(&figures, 500.0, 700.0, false).unwrap();
    assert_eq!(plan.tiles.len(), 1);
    assert_eq!((plan.tiles[0].row, plan.tiles[0].col), (0, 0));
    let bounds = plan.bounds.unwrap();
    assert_eq!(bounds.min_x, -EXPORT_PADDING_PX);
    assert_eq!(bounds.width(), 420.0);
}

#[test]
fn test_a4_grid_for_large_piece() {
    let page = PageSettings::new(PaperSize::A4, Orientation::Portrait, 1.0);
    let figures = vec![Figure::rectangle("coat", 0.0, 0.0, 1000.0, 1500.0)];
    let plan = plan_tiles(&figures, &page).unwrap();
    assert_eq!((plan.rows, plan.cols), (2, 2));
    assert_eq!(plan.tiles.len(), 4);
    let (w, h) = page.safe_size_px().unwrap();
    assert_eq!(plan.tile_width_px, w);
    assert_eq!(plan.tile_height_px, h);
}

#[test]
fn test_landscape_changes_grid() {
    let figures = vec![Figure::rectangle("coat", 0.0, 0.0, 1000.0, 600.0)];
    let portrait = PageSettings::new(PaperSize::A4, Orientation::Portrait, 1.0);
    let landscape = PageSettings::new(PaperSize::A4, Orientation::Landscape, 1.0);
    let p = plan_tiles(&figures, &portrait).unwrap();
    let l = plan_tiles(&figures, &landscape).unwrap();
    assert_eq!((p.rows, p.cols), (1, 2));
    assert_eq!((l.rows, l.cols), (1, 1));
}

#[test]
fn test_figures_without_edges_are_ignored() {
    let mut lonely = Figure::new("dot", Tool::Pen);
    lonely.nodes.push(patternkit_designer::Node::new("n0", 5000.0, 5000.0));
    let figures = vec![Figure::rectangle("r", 0.0, 0.0, 100.0, 100.0), lonely];
    let plan = plan_tiles_px(&figures, 500.0, 500.0, true).unwrap();
    assert_eq!(plan.grid_size(), 1);
}

#[test]
fn test_tiles_list_overlapping_figures() {
    let figures = vec![
        Figure::rectangle("left", 0.0, 0.0, 80.0, 80.0),
        Figure::rectangle("wide", 0.0, 120.0, 180.0, 40.0),
    ];
    let plan = plan_tiles_px(&figures, 100.0, 100.0, false).unwrap();
    let first = &plan.tiles[0];
    assert_eq!(first.offset_px, Vec2::new(-10.0, -10.0));
    assert_eq!(first.figures_in_tile, vec!["left".to_string()]);
    let bottom_right = plan
        .tiles
        .iter()
        .find(|t| t.row == 1 && t.col == 1)
        .unwrap();
    assert_eq!(bottom_right.figures_in_tile, vec!["wide".to_string()]);
}
