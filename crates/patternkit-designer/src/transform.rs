//! Local ↔ world coordinate mapping for figures.
//!
//! A figure's nodes live in local space. World space is reached by rotating
//! about the local origin by `figure.rotation` degrees (clockwise positive,
//! since the y axis points down on screen) and then translating by
//! `(figure.x, figure.y)`.

use crate::geometry::{Rect, Vec2};
use crate::model::Figure;

/// Samples per cubic edge when computing bounding boxes.
pub const BBOX_STEPS_PER_CURVE: usize = 32;

fn rotate(p: Vec2, degrees: f64) -> Vec2 {
    let (s, c) = degrees.to_radians().sin_cos();
    Vec2::new(p.x * c - p.y * s, p.x * s + p.y * c)
}

pub fn local_to_world(figure: &Figure, local: Vec2) -> Vec2 {
    rotate(local, figure.rotation) + Vec2::new(figure.x, figure.y)
}

pub fn world_to_local(figure: &Figure, world: Vec2) -> Vec2 {
    rotate(world - Vec2::new(figure.x, figure.y), -figure.rotation)
}

/// Edge index chains obtained by following `to` → outgoing edge links.
///
/// Walking starts at the first edge in array order; when a chain cannot be
/// continued the next unvisited edge starts a new one.
pub fn edge_chains(figure: &Figure) -> Vec<Vec<usize>> {
    let adjacency = figure.adjacency();
    let mut visited = vec![false; figure.edges.len()];
    let mut chains = Vec::new();

    for start in 0..figure.edges.len() {
        if visited[start] {
            continue;
        }
        let mut chain = Vec::new();
        let mut current = start;
        loop {
            visited[current] = true;
            chain.push(current);
            let next = adjacency
                .get(figure.edges[current].to.as_str())
                .and_then(|outgoing| outgoing.iter().copied().find(|&i| !visited[i]));
            match next {
                Some(i) => current = i,
                None => break,
            }
        }
        chains.push(chain);
    }
    chains
}

/// World-space point runs, one per edge chain.
///
/// Consecutive edges of a chain share their boundary point. An edge with a
/// dangling node reference is skipped and the run restarts after it.
pub fn world_polylines(figure: &Figure, steps_per_curve: usize) -> Vec<Vec<Vec2>> {
    let mut runs = Vec::new();
    for chain in edge_chains(figure) {
        let mut run: Vec<Vec2> = Vec::new();
        for &i in &chain {
            let Some(curve) = figure.edge_curve_local(&figure.edges[i]) else {
                if run.len() > 1 {
                    runs.push(std::mem::take(&mut run));
                }
                run.clear();
                continue;
            };
            let samples = curve.sample(steps_per_curve);
            let skip = usize::from(!run.is_empty());
            run.extend(
                samples
                    .into_iter()
                    .skip(skip)
                    .map(|p| local_to_world(figure, p)),
            );
        }
        if !run.is_empty() {
            runs.push(run);
        }
    }
    runs
}

/// All edges sampled into one world-space point list.
pub fn world_polyline(figure: &Figure, steps_per_curve: usize) -> Vec<Vec2> {
    world_polylines(figure, steps_per_curve)
        .into_iter()
        .flatten()
        .collect()
}

/// Local-space counterpart of [`world_polyline`].
pub fn local_polyline(figure: &Figure, steps_per_curve: usize) -> Vec<Vec2> {
    world_polyline(figure, steps_per_curve)
        .into_iter()
        .map(|p| world_to_local(figure, p))
        .collect()
}

/// Axis-aligned bounds of the sampled outline; `None` without drawable edges.
pub fn world_bounding_box(figure: &Figure) -> Option<Rect> {
    Rect::from_points(&world_polyline(figure, BBOX_STEPS_PER_CURVE))
}

/// Union of the bounding boxes of `figures`.
pub fn union_bounding_box<'a, I>(figures: I) -> Option<Rect>
where
    I: IntoIterator<Item = &'a Figure>,
{
    figures
        .into_iter()
        .filter_map(world_bounding_box)
        .reduce(|acc, r| acc.union(&r))
}

/// Mean of the node positions in local space.
///
/// This is not an area centroid; it is good enough for placing a label
/// inside a piece but has no physical meaning.
pub fn centroid_local(figure: &Figure) -> Option<Vec2> {
    if figure.nodes.is_empty() {
        return None;
    }
    let sum = figure
        .nodes
        .iter()
        .fold(Vec2::ZERO, |acc, n| acc + n.pos());
    Some(sum * (1.0 / figure.nodes.len() as f64))
}
