//! Id lookups across a figure set.
//!
//! Figures refer to each other only by id (mirror links, seam parents).
//! All cross-figure traversal goes through a [`FigureIndex`] rebuilt for the
//! slice being processed, so no figure holds a pointer into another.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use super::figure::Figure;

#[derive(Debug, Default)]
pub struct FigureIndex {
    by_id: HashMap<String, usize>,
}

impl FigureIndex {
    /// Indexes `figures`. With duplicate ids the first occurrence wins.
    pub fn build(figures: &[Figure]) -> Self {
        let mut by_id = HashMap::with_capacity(figures.len());
        for (i, figure) in figures.iter().enumerate() {
            by_id.entry(figure.id.clone()).or_insert(i);
        }
        Self { by_id }
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn get<'a>(&self, figures: &'a [Figure], id: &str) -> Option<&'a Figure> {
        self.position(id).and_then(|i| figures.get(i))
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

/// Indices of the seam figures whose parent is `parent_id`.
pub fn seams_of(figures: &[Figure], parent_id: &str) -> Vec<usize> {
    figures
        .iter()
        .enumerate()
        .filter(|(_, f)| f.parent_id() == Some(parent_id))
        .map(|(i, _)| i)
        .collect()
}

/// Removes `id`, every seam derived from it, and the mirror links that
/// pointed at any removed figure.
pub fn remove_figure_cascade(figures: &[Figure], id: &str) -> Vec<Figure> {
    let mut removed: HashSet<&str> = HashSet::new();
    removed.insert(id);
    for i in seams_of(figures, id) {
        removed.insert(figures[i].id.as_str());
    }
    debug!("Removing {} figure(s) for {}", removed.len(), id);

    figures
        .iter()
        .filter(|f| !removed.contains(f.id.as_str()))
        .map(|f| {
            let dangling_link = f
                .mirror_link
                .as_ref()
                .is_some_and(|link| removed.contains(link.other_id.as_str()));
            if dangling_link {
                let mut f = f.clone();
                f.mirror_link = None;
                f.touch();
                f
            } else {
                f.clone()
            }
        })
        .collect()
}
