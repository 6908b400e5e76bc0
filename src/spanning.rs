mod kruskal;

use crate::{Edge, Graph, Weight};
pub use kruskal::KruskalBuilder;

/// Builds a minimum spanning forest of a graph.
pub trait SpanningTreeBuilder {
    fn build(&self, graph: &Graph) -> SpanningForest;
}

/// Edges accepted by a [`SpanningTreeBuilder`], in acceptance order.
///
/// For a connected graph this is a spanning tree with `V - 1` edges. For a
/// disconnected graph it is a maximal spanning forest and
/// [`is_spanning`](Self::is_spanning) returns `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl SpanningForest {
    pub(crate) fn new(edges: Vec<Edge>, vertex_count: usize) -> SpanningForest {
        SpanningForest {
            edges,
            vertex_count,
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn into_edges(self) -> Vec<Edge> {
        self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// `true` if the forest is a single tree covering every vertex.
    pub fn is_spanning(&self) -> bool {
        self.edges.len() + 1 == self.vertex_count
    }

    pub fn total_weight(&self) -> Weight {
        crate::total_weight(&self.edges)
    }
}

/// Minimum spanning tree (or forest) of `graph` by Kruskal's algorithm.
pub fn build_mst(graph: &Graph) -> Vec<Edge> {
    KruskalBuilder.build(graph).into_edges()
}
