use serde::{Deserialize, Serialize};

use crate::geometry::Vec2;

pub type NodeId = String;

/// How the node was drawn. Informational only: handle symmetry is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NodeMode {
    #[default]
    Corner,
    Smooth,
}

/// Which Bézier handle of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandleSide {
    In,
    Out,
}

/// A point on a figure's path, in the figure's local space.
///
/// Handles are absolute local-space control points. `in_handle` shapes the
/// edge arriving at this node, `out_handle` the edge leaving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_handle: Option<Vec2>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub out_handle: Option<Vec2>,
    #[serde(default)]
    pub mode: NodeMode,
}

impl Node {
    pub fn new(id: impl Into<NodeId>, x: f64, y: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            in_handle: None,
            out_handle: None,
            mode: NodeMode::Corner,
        }
    }

    pub fn with_handles(mut self, in_handle: Option<Vec2>, out_handle: Option<Vec2>) -> Self {
        self.in_handle = in_handle;
        self.out_handle = out_handle;
        if in_handle.is_some() || out_handle.is_some() {
            self.mode = NodeMode::Smooth;
        }
        self
    }

    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn handle(&self, side: HandleSide) -> Option<Vec2> {
        match side {
            HandleSide::In => self.in_handle,
            HandleSide::Out => self.out_handle,
        }
    }

    /// Moves the node and drags its handles by the same delta.
    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
        self.in_handle = self.in_handle.map(|h| h + delta);
        self.out_handle = self.out_handle.map(|h| h + delta);
    }

    /// Applies `f` to the position and both handles.
    pub fn map_points(&self, f: impl Fn(Vec2) -> Vec2) -> Node {
        let p = f(self.pos());
        Node {
            id: self.id.clone(),
            x: p.x,
            y: p.y,
            in_handle: self.in_handle.map(&f),
            out_handle: self.out_handle.map(&f),
            mode: self.mode,
        }
    }
}
