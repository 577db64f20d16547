use serde::{Deserialize, Serialize};

use super::figure::FigureId;
use crate::geometry::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MirrorRole {
    Original,
    Mirror,
}

impl MirrorRole {
    pub fn opposite(self) -> MirrorRole {
        match self {
            MirrorRole::Original => MirrorRole::Mirror,
            MirrorRole::Mirror => MirrorRole::Original,
        }
    }
}

/// What a mirror was last derived from.
///
/// Comparing the stamp with the live revisions and axis is how the
/// synchronizer decides whether the mirror is stale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SyncStamp {
    pub original_revision: u64,
    pub mirror_revision: u64,
    pub axis_point: Vec2,
    pub axis_dir: Vec2,
}

/// Pairing metadata carried by both figures of a mirrored pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MirrorLink {
    pub role: MirrorRole,
    pub other_id: FigureId,
    pub pair_id: String,
    #[serde(default = "default_sync")]
    pub sync: bool,
    pub axis_point_world: Vec2,
    pub axis_dir_world: Vec2,
    /// Only meaningful on the mirror side.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stamp: Option<SyncStamp>,
}

fn default_sync() -> bool {
    true
}

impl MirrorLink {
    pub fn new(
        role: MirrorRole,
        other_id: impl Into<FigureId>,
        pair_id: impl Into<String>,
        axis_point_world: Vec2,
        axis_dir_world: Vec2,
    ) -> Self {
        Self {
            role,
            other_id: other_id.into(),
            pair_id: pair_id.into(),
            sync: true,
            axis_point_world,
            axis_dir_world,
            stamp: None,
        }
    }

    /// True when `other` is the counterpart of this link for a figure
    /// with id `self_id`: it points back, shares the pair id and has the
    /// opposite role.
    pub fn is_counterpart(&self, self_id: &str, other: &MirrorLink) -> bool {
        other.other_id == self_id && other.pair_id == self.pair_id && other.role == self.role.opposite()
    }
}
