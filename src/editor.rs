use crate::components::{find_components, Partition};
use crate::replacement::{find_replacement, Replacement};
use crate::spanning::{KruskalBuilder, SpanningTreeBuilder};
use crate::{Edge, EdgeKey, Graph, Vertex, Weight};
use std::collections::HashSet;

/// Where an [`MstEditor`] stands after its last operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Freshly built spanning tree.
    Built,
    /// A tree edge was removed and a replacement restored a spanning tree.
    Reconnected,
    /// The edge set does not span the graph: either the graph itself is
    /// disconnected or a removal found no replacement.
    Disconnected,
}

/// What a [`MstEditor::remove_and_reconnect`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditStatus {
    /// The edge was removed and this edge was inserted in its place.
    Reconnected(Edge),
    /// The edge was removed and no graph edge joins the two sides.
    Disconnected,
    /// The edge is not in the current tree. Nothing changed.
    NotFound,
    /// The edge was removed without splitting the vertex set.
    NoSplit,
}

/// Non-fatal anomalies noticed during a removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitWarning {
    /// The removal left more than two components. Only the first two were
    /// considered for reconnection; the rest stay apart.
    MalformedSplit { components: usize },
}

/// Full result of a [`MstEditor::remove_and_reconnect`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    pub status: EditStatus,
    /// The tree edge that was taken out, as stored (with its own weight).
    pub removed: Option<Edge>,
    /// Components of the tree right after the removal.
    pub components: Option<Partition>,
    pub warning: Option<SplitWarning>,
    /// Tree edges after the operation.
    pub edges: Vec<Edge>,
}

/// Owns the current minimum spanning tree of a graph and applies
/// remove-and-reconnect edits to it.
///
/// The graph is borrowed immutably and can be shared with any number of
/// readers. The tree is kept both as an ordered edge list, which fixes the
/// output order, and as a set of [`EdgeKey`]s for membership tests.
pub struct MstEditor<'g> {
    graph: &'g Graph,
    edges: Vec<Edge>,
    tree: HashSet<EdgeKey>,
    original: Vec<Edge>,
    state: EditorState,
}

impl<'g> MstEditor<'g> {
    /// Builds the minimum spanning tree of `graph` with Kruskal's algorithm.
    pub fn new(graph: &'g Graph) -> MstEditor<'g> {
        MstEditor::with_builder(graph, &KruskalBuilder)
    }

    pub fn with_builder<B: SpanningTreeBuilder>(graph: &'g Graph, builder: &B) -> MstEditor<'g> {
        let forest = builder.build(graph);
        let state = if forest.is_spanning() {
            EditorState::Built
        } else {
            EditorState::Disconnected
        };
        let edges = forest.into_edges();
        log::info!(
            "Built spanning tree with {} edges, total weight {}",
            edges.len(),
            crate::total_weight(&edges)
        );

        MstEditor {
            graph,
            tree: edges.iter().map(Edge::key).collect(),
            original: edges.clone(),
            edges,
            state,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The tree as it was first built, before any edit.
    pub fn original_edges(&self) -> &[Edge] {
        &self.original
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    pub fn total_weight(&self) -> Weight {
        crate::total_weight(&self.edges)
    }

    /// `true` if the current edges form a spanning tree.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.graph.vertex_count()
    }

    pub fn contains(&self, edge: &Edge) -> bool {
        self.tree.contains(&edge.key())
    }

    /// Looks up the tree edge between `a` and `b`, in either orientation.
    pub fn find_edge(&self, a: Vertex, b: Vertex) -> Option<Edge> {
        if !self.tree.contains(&EdgeKey::new(a, b)) {
            return None;
        }
        self.edges.iter().find(|edge| edge.connects(a, b)).copied()
    }

    /// Removes `edge` from the tree and inserts the cheapest graph edge that
    /// reconnects the two resulting sides, if there is one.
    ///
    /// `edge` is matched by its endpoints only. If it is not a tree edge the
    /// tree is left untouched and [`EditStatus::NotFound`] is returned.
    ///
    /// # Arguments
    ///
    /// * `edge` - The tree edge to take out. Its weight is ignored.
    ///
    /// # Returns
    ///
    /// An [`EditOutcome`] with the status, the removed edge as stored, the
    /// components seen after the removal, any [`SplitWarning`], and the
    /// tree edges after the operation.
    pub fn remove_and_reconnect(&mut self, edge: &Edge) -> EditOutcome {
        let Some(position) = self
            .tree
            .contains(&edge.key())
            .then(|| self.edges.iter().position(|e| e == edge))
            .flatten()
        else {
            log::info!("Edge {edge} not found in MST");
            return EditOutcome {
                status: EditStatus::NotFound,
                removed: None,
                components: None,
                warning: None,
                edges: self.edges.clone(),
            };
        };

        let removed = self.edges.remove(position);
        self.tree.remove(&removed.key());
        log::info!("Removed edge {removed}");

        let partition = find_components(&self.edges, self.graph.vertex_count());
        log::debug!("Components after removal: {:?}", partition.components());

        let warning = if partition.len() > 2 {
            log::warn!(
                "Removal of {removed} left {} components, reconnecting only the first two",
                partition.len()
            );
            Some(SplitWarning::MalformedSplit {
                components: partition.len(),
            })
        } else {
            None
        };

        let status = match find_replacement(&partition, &removed, self.graph, &self.tree) {
            Replacement::Found(replacement) => {
                log::info!("Found replacement edge {replacement}");
                self.tree.insert(replacement.key());
                self.edges.push(replacement);
                self.state = if self.is_spanning() {
                    EditorState::Reconnected
                } else {
                    EditorState::Disconnected
                };
                EditStatus::Reconnected(replacement)
            }
            Replacement::NotFound => {
                log::warn!("No replacement edge for {removed}, graph remains disconnected");
                self.state = EditorState::Disconnected;
                EditStatus::Disconnected
            }
            Replacement::NotNeeded => EditStatus::NoSplit,
        };

        EditOutcome {
            status,
            removed: Some(removed),
            components: Some(partition),
            warning,
            edges: self.edges.clone(),
        }
    }
}
