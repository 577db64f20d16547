use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::warn;

use patternkit_core::ModelError;

use super::edge::{Edge, EdgeId, EdgeKind};
use super::mirror_link::MirrorLink;
use super::node::{HandleSide, Node, NodeId};
use crate::geometry::{EdgeCurve, Vec2};
use crate::measures::Measures;

pub type FigureId = String;

/// Outgoing edge indices per node id.
pub type Adjacency<'a> = HashMap<&'a str, SmallVec<[usize; 2]>>;

/// Drawing tool a figure was created with. Drives which measurement blocks apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Rectangle,
    Circle,
    Line,
    Curve,
    #[default]
    Pen,
    Text,
    Other,
}

/// A plain pattern piece, or a seam allowance derived from one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FigureKind {
    #[default]
    Mold,
    Seam { parent_id: FigureId },
}

/// A drawable shape: a node/edge path placed in world space by a rigid transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub id: FigureId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tool: Tool,
    pub x: f64,
    pub y: f64,
    /// Degrees, clockwise positive on screen (y axis pointing down).
    #[serde(default)]
    pub rotation: f64,
    #[serde(default)]
    pub closed: bool,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    #[serde(default)]
    pub kind: FigureKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mirror_link: Option<MirrorLink>,
    /// Derived by the measurement pass; never authoritative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measures: Option<Measures>,
    /// Incremented by every edit.
    #[serde(default)]
    pub revision: u64,
}

impl Figure {
    pub fn new(id: impl Into<FigureId>, tool: Tool) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            tool,
            x: 0.0,
            y: 0.0,
            rotation: 0.0,
            closed: false,
            nodes: Vec::new(),
            edges: Vec::new(),
            kind: FigureKind::Mold,
            mirror_link: None,
            measures: None,
            revision: 0,
        }
    }

    /// Straight-edged figure through `points` (local space), nodes `n0..`, edges `e0..`.
    pub fn polygon(id: impl Into<FigureId>, tool: Tool, points: &[Vec2], closed: bool) -> Self {
        let mut figure = Figure::new(id, tool);
        figure.nodes = points
            .iter()
            .enumerate()
            .map(|(i, p)| Node::new(format!("n{i}"), p.x, p.y))
            .collect();
        let n = points.len();
        let edge_count = if closed && n > 1 { n } else { n.saturating_sub(1) };
        figure.edges = (0..edge_count)
            .map(|i| Edge::new(format!("e{i}"), format!("n{i}"), format!("n{}", (i + 1) % n)))
            .collect();
        figure.closed = closed;
        figure
    }

    /// Axis-aligned rectangle placed at `(x, y)`, corners in local space.
    pub fn rectangle(id: impl Into<FigureId>, x: f64, y: f64, width: f64, height: f64) -> Self {
        let corners = [
            Vec2::new(0.0, 0.0),
            Vec2::new(width, 0.0),
            Vec2::new(width, height),
            Vec2::new(0.0, height),
        ];
        let mut figure = Figure::polygon(id, Tool::Rectangle, &corners, true);
        figure.x = x;
        figure.y = y;
        figure
    }

    /// Circle approximated by a regular polygon centred on the local origin.
    pub fn circle(id: impl Into<FigureId>, center: Vec2, radius: f64, segments: usize) -> Self {
        let segments = segments.max(3);
        let points: Vec<Vec2> = (0..segments)
            .map(|i| {
                let a = std::f64::consts::TAU * i as f64 / segments as f64;
                Vec2::new(radius * a.cos(), radius * a.sin())
            })
            .collect();
        let mut figure = Figure::polygon(id, Tool::Circle, &points, true);
        figure.x = center.x;
        figure.y = center.y;
        figure
    }

    pub fn line(id: impl Into<FigureId>, a: Vec2, b: Vec2) -> Self {
        Figure::polygon(id, Tool::Line, &[a, b], false)
    }

    /// Single cubic edge from `p0` to `p3` with handles `p1`, `p2` (local space).
    pub fn curve(id: impl Into<FigureId>, p0: Vec2, p1: Vec2, p2: Vec2, p3: Vec2) -> Self {
        let mut figure = Figure::new(id, Tool::Curve);
        figure.nodes = vec![
            Node::new("n0", p0.x, p0.y).with_handles(None, Some(p1)),
            Node::new("n1", p3.x, p3.y).with_handles(Some(p2), None),
        ];
        figure.edges = vec![Edge::cubic("e0", "n0", "n1")];
        figure
    }

    /// Seam allowance figure derived from `parent_id`.
    pub fn seam_of(mut self, parent_id: impl Into<FigureId>) -> Self {
        self.kind = FigureKind::Seam {
            parent_id: parent_id.into(),
        };
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn parent_id(&self) -> Option<&str> {
        match &self.kind {
            FigureKind::Seam { parent_id } => Some(parent_id),
            FigureKind::Mold => None,
        }
    }

    /// Marks the figure as edited.
    pub fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }

    // --- lookups ---

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    pub fn edge(&self, id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == id)
    }

    /// Both endpoint nodes of `edge`, checked against dangling references.
    pub fn edge_endpoints(&self, edge: &Edge) -> Result<(&Node, &Node), ModelError> {
        let dangling = |node_id: &NodeId| ModelError::DanglingEdge {
            figure_id: self.id.clone(),
            edge_id: edge.id.clone(),
            node_id: node_id.clone(),
        };
        let from = self.node(&edge.from).ok_or_else(|| dangling(&edge.from))?;
        let to = self.node(&edge.to).ok_or_else(|| dangling(&edge.to))?;
        Ok((from, to))
    }

    /// Local-space geometry of `edge`, or `None` (logged) when it dangles.
    ///
    /// Handle presence decides the shape: without `from.out_handle` and
    /// `to.in_handle` the edge is a line, otherwise a cubic where a missing
    /// handle collapses onto its endpoint.
    pub fn edge_curve_local(&self, edge: &Edge) -> Option<EdgeCurve> {
        match self.edge_endpoints(edge) {
            Ok((from, to)) => Some(curve_between(from, to)),
            Err(err) => {
                warn!("Skipping edge: {}", err);
                None
            }
        }
    }

    /// Outgoing edges per node, in edge array order.
    pub fn adjacency(&self) -> Adjacency<'_> {
        let mut map: Adjacency<'_> = HashMap::with_capacity(self.nodes.len());
        for (i, edge) in self.edges.iter().enumerate() {
            map.entry(edge.from.as_str()).or_default().push(i);
        }
        map
    }

    // --- edits (each one bumps the revision) ---

    /// Moves a node to `pos`, dragging its handles along.
    pub fn move_node(&mut self, node_id: &str, pos: Vec2) -> Result<(), ModelError> {
        let node = self.require_node_mut(node_id)?;
        let delta = pos - node.pos();
        node.translate(delta);
        self.touch();
        Ok(())
    }

    pub fn translate_node(&mut self, node_id: &str, delta: Vec2) -> Result<(), ModelError> {
        self.require_node_mut(node_id)?.translate(delta);
        self.touch();
        Ok(())
    }

    /// Sets or clears one handle and keeps edge kinds consistent.
    pub fn set_handle(
        &mut self,
        node_id: &str,
        side: HandleSide,
        handle: Option<Vec2>,
    ) -> Result<(), ModelError> {
        let node = self.require_node_mut(node_id)?;
        match side {
            HandleSide::In => node.in_handle = handle,
            HandleSide::Out => node.out_handle = handle,
        }
        self.sync_edge_kinds();
        self.touch();
        Ok(())
    }

    pub fn clear_handles(&mut self, node_id: &str) -> Result<(), ModelError> {
        let node = self.require_node_mut(node_id)?;
        node.in_handle = None;
        node.out_handle = None;
        self.sync_edge_kinds();
        self.touch();
        Ok(())
    }

    pub fn set_position(&mut self, x: f64, y: f64) {
        self.x = x;
        self.y = y;
        self.touch();
    }

    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
        self.touch();
    }

    pub fn set_rotation(&mut self, degrees: f64) {
        self.rotation = degrees;
        self.touch();
    }

    /// Opens or closes the path, adding or removing the edge from the last
    /// node back to the first.
    pub fn set_closed(&mut self, closed: bool) {
        if let (Some(first), Some(last)) = (self.nodes.first(), self.nodes.last()) {
            let (first, last) = (first.id.clone(), last.id.clone());
            let has_closing = self.edges.iter().any(|e| e.from == last && e.to == first);
            if closed && !has_closing && self.nodes.len() > 1 {
                let id = self.next_edge_id();
                self.edges.push(Edge::new(id, last, first));
            } else if !closed {
                self.edges.retain(|e| !(e.from == last && e.to == first));
            }
        }
        self.closed = closed;
        self.sync_edge_kinds();
        self.touch();
    }

    /// Replaces the whole path.
    pub fn replace_geometry(&mut self, nodes: Vec<Node>, edges: Vec<Edge>) {
        self.nodes = nodes;
        self.edges = edges;
        self.sync_edge_kinds();
        self.touch();
    }

    /// Turns mirror synchronisation on or off for this figure's link.
    ///
    /// Turning it on clears the stamp so the next commit re-derives the mirror.
    pub fn set_mirror_sync(&mut self, sync: bool) {
        if let Some(link) = self.mirror_link.as_mut() {
            if sync && !link.sync {
                link.stamp = None;
            }
            link.sync = sync;
            self.touch();
        }
    }

    /// Recomputes each edge's kind from the handles of its endpoints.
    pub fn sync_edge_kinds(&mut self) {
        let kinds: Vec<Option<EdgeKind>> = self
            .edges
            .iter()
            .map(|e| match (self.node(&e.from), self.node(&e.to)) {
                (Some(from), Some(to)) => Some(kind_between(from, to)),
                _ => None,
            })
            .collect();
        for (edge, kind) in self.edges.iter_mut().zip(kinds) {
            if let Some(kind) = kind {
                edge.kind = kind;
            }
        }
    }

    fn require_node_mut(&mut self, node_id: &str) -> Result<&mut Node, ModelError> {
        let figure_id = self.id.clone();
        self.node_mut(node_id).ok_or_else(|| ModelError::UnknownNode {
            figure_id,
            node_id: node_id.to_string(),
        })
    }

    fn next_edge_id(&self) -> EdgeId {
        let mut i = self.edges.len();
        loop {
            let candidate = format!("e{i}");
            if self.edge(&candidate).is_none() {
                return candidate;
            }
            i += 1;
        }
    }
}

fn kind_between(from: &Node, to: &Node) -> EdgeKind {
    if from.handle(HandleSide::Out).is_some() || to.handle(HandleSide::In).is_some() {
        EdgeKind::Cubic
    } else {
        EdgeKind::Line
    }
}

/// Edge geometry between two nodes, in their (shared) local space.
pub fn curve_between(from: &Node, to: &Node) -> EdgeCurve {
    match kind_between(from, to) {
        EdgeKind::Line => EdgeCurve::Line {
            a: from.pos(),
            b: to.pos(),
        },
        EdgeKind::Cubic => EdgeCurve::Cubic {
            p0: from.pos(),
            p1: from.out_handle.unwrap_or_else(|| from.pos()),
            p2: to.in_handle.unwrap_or_else(|| to.pos()),
            p3: to.pos(),
        },
    }
}
