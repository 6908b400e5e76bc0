use crate::Vertex;
use thiserror::Error;

/// Errors raised while building a [`Graph`](crate::Graph).
///
/// These are caller contract violations. Expected outcomes of the MST
/// operations (disconnected graphs, missing tree edges, no replacement) are
/// reported through result values instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex {vertex} is out of range (graph has {vertex_count} vertices)")]
    VertexOutOfRange {
        /// The offending endpoint.
        vertex: Vertex,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
}
