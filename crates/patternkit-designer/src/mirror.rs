//! Mirror synchronisation.
//!
//! A mirrored pair is two figures whose [`MirrorLink`]s point at each other.
//! The `Original` side is edited by the user; the `Mirror` side is derived by
//! reflecting the original's world-space geometry across the pair's axis.
//! Each mirror carries a [`SyncStamp`] naming the original revision, its own
//! revision and the axis it was derived from, so staleness is a plain value
//! comparison.

use tracing::debug;
use uuid::Uuid;

use patternkit_core::ModelError;

use crate::geometry::{reflect_point_across_axis, Vec2};
use crate::model::{Figure, FigureIndex, MirrorLink, MirrorRole, SyncStamp};
use crate::transform::local_to_world;

/// Re-derives every stale mirror. Inputs are left untouched.
pub fn sync_mirrors(figures: &[Figure]) -> Vec<Figure> {
    let index = FigureIndex::build(figures);
    let mut out = figures.to_vec();
    let mut recomputed = 0usize;

    for original in figures {
        let Some(link) = original.mirror_link.as_ref() else {
            continue;
        };
        if link.role != MirrorRole::Original || !link.sync {
            continue;
        }
        let Some(pos) = index.position(&link.other_id) else {
            debug!("Mirror {} of {} not found, skipping", link.other_id, original.id);
            continue;
        };
        let mirror = &figures[pos];
        let consistent = mirror
            .mirror_link
            .as_ref()
            .is_some_and(|other| link.is_counterpart(&original.id, other));
        if !consistent {
            debug!(
                "Inconsistent mirror pair {} -> {}, treating as unlinked",
                original.id, mirror.id
            );
            continue;
        }
        if !is_stale(original, link, mirror) {
            continue;
        }
        out[pos] = reflected_mirror(original, link, mirror);
        recomputed += 1;
    }

    if recomputed > 0 {
        debug!("Recomputed {} mirror(s)", recomputed);
    }
    out
}

fn is_stale(original: &Figure, link: &MirrorLink, mirror: &Figure) -> bool {
    let Some(stamp) = mirror.mirror_link.as_ref().and_then(|l| l.stamp) else {
        return true;
    };
    stamp.original_revision != original.revision
        || stamp.mirror_revision != mirror.revision
        || stamp.axis_point != link.axis_point_world
        || stamp.axis_dir != link.axis_dir_world
}

/// The mirror rebuilt from `original`, placed at the world origin unrotated.
fn reflected_mirror(original: &Figure, link: &MirrorLink, mirror: &Figure) -> Figure {
    let (axis_point, axis_dir) = (link.axis_point_world, link.axis_dir_world);
    let reflect =
        |p: Vec2| reflect_point_across_axis(local_to_world(original, p), axis_point, axis_dir);

    let mut next = mirror.clone();
    next.x = 0.0;
    next.y = 0.0;
    next.rotation = 0.0;
    next.nodes = original.nodes.iter().map(|n| n.map_points(&reflect)).collect();
    next.edges = original.edges.clone();
    next.closed = original.closed;
    next.tool = original.tool;
    next.touch();

    let stamp = SyncStamp {
        original_revision: original.revision,
        mirror_revision: next.revision,
        axis_point,
        axis_dir,
    };
    if let Some(mirror_link) = next.mirror_link.as_mut() {
        mirror_link.axis_point_world = axis_point;
        mirror_link.axis_dir_world = axis_dir;
        mirror_link.stamp = Some(stamp);
    }
    next
}

/// Links `original` to a new mirror figure `mirror_id` across the given axis.
///
/// Returns the updated original and the derived mirror, already in sync.
pub fn create_mirror(
    original: &Figure,
    mirror_id: &str,
    axis_point: Vec2,
    axis_dir: Vec2,
) -> (Figure, Figure) {
    let pair_id = Uuid::new_v4().to_string();

    let mut linked = original.clone();
    let link = MirrorLink::new(
        MirrorRole::Original,
        mirror_id,
        pair_id.clone(),
        axis_point,
        axis_dir,
    );
    linked.mirror_link = Some(link.clone());
    linked.touch();

    let mut shell = Figure::new(mirror_id, original.tool);
    shell.kind = original.kind.clone();
    shell.name = if original.name.is_empty() {
        String::new()
    } else {
        format!("{} (mirror)", original.name)
    };
    shell.mirror_link = Some(MirrorLink::new(
        MirrorRole::Mirror,
        original.id.clone(),
        pair_id,
        axis_point,
        axis_dir,
    ));

    let mirror = reflected_mirror(&linked, &link, &shell);
    (linked, mirror)
}

/// Removes the link from `figure_id` and, when it points back, from its counterpart.
pub fn unlink_pair(figures: &[Figure], figure_id: &str) -> Result<Vec<Figure>, ModelError> {
    let index = FigureIndex::build(figures);
    let pos = index
        .position(figure_id)
        .ok_or_else(|| ModelError::UnknownFigure {
            figure_id: figure_id.to_string(),
        })?;
    let mut out = figures.to_vec();

    let Some(link) = out[pos].mirror_link.take() else {
        return Ok(out);
    };
    out[pos].touch();

    if let Some(other_pos) = index.position(&link.other_id) {
        let points_back = out[other_pos]
            .mirror_link
            .as_ref()
            .is_some_and(|other| link.is_counterpart(figure_id, other));
        if points_back {
            out[other_pos].mirror_link = None;
            out[other_pos].touch();
        }
    }
    debug!("Unlinked mirror pair {}", link.pair_id);
    Ok(out)
}
