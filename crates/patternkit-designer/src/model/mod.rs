//! The figure data model: nodes, edges, figures and the links between figures.

mod edge;
mod figure;
mod index;
mod mirror_link;
mod node;

pub use edge::{Edge, EdgeId, EdgeKind};
pub use figure::{curve_between, Adjacency, Figure, FigureId, FigureKind, Tool};
pub use index::{remove_figure_cascade, seams_of, FigureIndex};
pub use mirror_link::{MirrorLink, MirrorRole, SyncStamp};
pub use node::{HandleSide, Node, NodeId, NodeMode};
