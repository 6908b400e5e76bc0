use crate::error::GraphError;
use crate::{Edge, Vertex, Weight};
use std::fmt;

/// A weighted undirected graph over the vertices `0..vertex_count`.
///
/// Edges keep their insertion order, which decides ties between equal
/// weights everywhere downstream. Parallel edges and self-loops are stored
/// as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn new(vertex_count: usize) -> Graph {
        Graph {
            vertex_count,
            edges: Vec::new(),
        }
    }

    /// Builds a graph from `(a, b, weight)` triples, in order.
    pub fn with_edges<I>(vertex_count: usize, edges: I) -> Result<Graph, GraphError>
    where
        I: IntoIterator<Item = (Vertex, Vertex, Weight)>,
    {
        let mut graph = Graph::new(vertex_count);
        for (a, b, weight) in edges {
            graph.add_edge(a, b, weight)?;
        }
        Ok(graph)
    }

    /// Appends an edge.
    ///
    /// # Errors
    ///
    /// [`GraphError::VertexOutOfRange`] if either endpoint is not below
    /// [`vertex_count`](Self::vertex_count).
    pub fn add_edge(&mut self, a: Vertex, b: Vertex, weight: Weight) -> Result<(), GraphError> {
        for vertex in [a, b] {
            if vertex >= self.vertex_count {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push(Edge::new(a, b, weight));
        Ok(())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Graph with {} vertices and {} edges:",
            self.vertex_count,
            self.edges.len()
        )?;
        for edge in &self.edges {
            writeln!(f, "  {} - {} (weight: {})", edge.a, edge.b, edge.weight)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_keeps_insertion_order_and_parallel_edges() {
        let mut graph = Graph::new(3);
        graph.add_edge(0, 1, 5).unwrap();
        graph.add_edge(2, 1, 1).unwrap();
        graph.add_edge(1, 0, 5).unwrap();

        let weights: Vec<_> = graph.edges().iter().map(|e| e.weight).collect();
        assert_eq!(weights, vec![5, 1, 5]);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.edges()[1].endpoints(), (2, 1));
    }

    #[test]
    fn add_edge_rejects_out_of_range_vertex() {
        let mut graph = Graph::new(2);
        assert_eq!(
            graph.add_edge(0, 2, 1),
            Err(GraphError::VertexOutOfRange {
                vertex: 2,
                vertex_count: 2
            })
        );
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn with_edges_stops_at_first_error() {
        let result = Graph::with_edges(2, [(0, 1, 1), (5, 0, 1)]);
        assert!(matches!(
            result,
            Err(GraphError::VertexOutOfRange { vertex: 5, .. })
        ));
    }

    #[test]
    fn display_lists_every_edge() {
        let graph = Graph::with_edges(2, [(0, 1, 7)]).unwrap();
        assert_eq!(
            graph.to_string(),
            "Graph with 2 vertices and 1 edges:\n  0 - 1 (weight: 7)\n"
        );
    }
}
