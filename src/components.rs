use crate::{Edge, Vertex};
use std::collections::VecDeque;

/// A partition of `0..vertex_count` into connected components.
///
/// Components are ordered by their smallest vertex. Inside a component the
/// vertices are listed in breadth-first discovery order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
    components: Vec<Vec<Vertex>>,
    component_of: Vec<usize>,
}

impl Partition {
    pub fn components(&self) -> &[Vec<Vertex>] {
        &self.components
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Index of the component holding `vertex`.
    pub fn component_of(&self, vertex: Vertex) -> usize {
        self.component_of[vertex]
    }

    pub fn same_component(&self, u: Vertex, v: Vertex) -> bool {
        self.component_of[u] == self.component_of[v]
    }
}

/// Splits the vertices into the components induced by `edges` alone.
///
/// Each not yet visited vertex, in ascending id order, seeds a breadth-first
/// search. Vertices with no incident edge become singleton components.
///
/// # Arguments
///
/// * `edges` - The edges to follow; nothing else connects vertices.
/// * `vertex_count` - Number of vertices. Every endpoint must be below it.
///
/// # Returns
///
/// A [`Partition`] covering `0..vertex_count`, components ordered by their
/// smallest vertex.
pub fn find_components(edges: &[Edge], vertex_count: usize) -> Partition {
    let mut adjacency: Vec<Vec<Vertex>> = vec![Vec::new(); vertex_count];
    for edge in edges {
        adjacency[edge.a].push(edge.b);
        adjacency[edge.b].push(edge.a);
    }

    let mut components = Vec::new();
    let mut component_of = vec![usize::MAX; vertex_count];
    let mut queue = VecDeque::new();

    for start in 0..vertex_count {
        if component_of[start] != usize::MAX {
            continue;
        }
        let index = components.len();
        let mut component = vec![start];
        component_of[start] = index;
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for &neighbor in &adjacency[current] {
                if component_of[neighbor] == usize::MAX {
                    component_of[neighbor] = index;
                    component.push(neighbor);
                    queue.push_back(neighbor);
                }
            }
        }
        components.push(component);
    }

    Partition {
        components,
        component_of,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_tree_after_edge_removal() {
        let edges = [
            Edge::new(1, 3, 2),
            Edge::new(3, 4, 2),
            Edge::new(0, 2, 3),
            Edge::new(3, 5, 3),
        ];
        let partition = find_components(&edges, 6);
        assert_eq!(
            partition.components(),
            &[vec![0, 2], vec![1, 3, 4, 5]]
        );
        assert_eq!(partition.component_of(5), 1);
        assert!(partition.same_component(0, 2));
        assert!(!partition.same_component(2, 3));
    }

    #[test]
    fn isolated_vertices_are_singletons() {
        let partition = find_components(&[Edge::new(3, 1, 1)], 4);
        assert_eq!(partition.components(), &[vec![0], vec![1, 3], vec![2]]);
        assert_eq!(partition.len(), 3);
    }

    #[test]
    fn every_vertex_appears_once() {
        let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 1), Edge::new(4, 5, 1)];
        let partition = find_components(&edges, 7);
        let mut all: Vec<_> = partition.components().concat();
        all.sort_unstable();
        assert_eq!(all, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn no_vertices() {
        assert!(find_components(&[], 0).is_empty());
    }
}
