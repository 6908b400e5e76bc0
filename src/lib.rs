//! Minimum spanning trees with single-edge removal and reconnection.
//!
//! A [`Graph`] is built once and never changes. [`build_mst`] runs Kruskal's
//! algorithm over it; [`MstEditor`] owns a tree and applies
//! remove-and-reconnect edits:
//!
//! ```
//! use mst_editor::{Edge, EditStatus, Graph, MstEditor};
//!
//! let graph = Graph::with_edges(3, [(0, 1, 1), (1, 2, 2), (0, 2, 5)]).unwrap();
//! let mut editor = MstEditor::new(&graph);
//! assert_eq!(editor.total_weight(), 3);
//!
//! let outcome = editor.remove_and_reconnect(&Edge::new(1, 2, 2));
//! assert_eq!(outcome.status, EditStatus::Reconnected(Edge::new(0, 2, 5)));
//! assert_eq!(editor.total_weight(), 6);
//! ```
//!
//! The crate does no I/O; it reports through the [`log`] facade.

pub mod analysis;
pub mod components;
mod disjoint_set;
mod edge;
pub mod editor;
mod error;
mod graph;
pub mod replacement;
pub mod spanning;

pub use components::Partition;
pub use disjoint_set::DisjointSet;
pub use edge::{checked_total_weight, total_weight, Edge, EdgeKey};
pub use editor::{EditOutcome, EditStatus, EditorState, MstEditor, SplitWarning};
pub use error::GraphError;
pub use graph::Graph;
pub use spanning::{build_mst, SpanningForest, SpanningTreeBuilder};

/// A vertex id, in `0..vertex_count`.
pub type Vertex = usize;

/// An edge weight.
pub type Weight = i64;
