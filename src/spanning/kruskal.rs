use crate::disjoint_set::DisjointSet;
use crate::spanning::{SpanningForest, SpanningTreeBuilder};
use crate::Graph;

/// Kruskal's algorithm over a fresh [`DisjointSet`].
///
/// Edges are stable-sorted by weight, so among equal weights the one added
/// to the graph first is considered first. The result is fully determined
/// by the graph's edge order.
#[derive(Debug, Default, Clone, Copy)]
pub struct KruskalBuilder;

impl SpanningTreeBuilder for KruskalBuilder {
    fn build(&self, graph: &Graph) -> SpanningForest {
        let vertex_count = graph.vertex_count();
        let target = vertex_count.saturating_sub(1);

        let mut sorted_edges = graph.edges().to_vec();
        sorted_edges.sort_by_key(|edge| edge.weight);

        let mut components = DisjointSet::new(vertex_count);
        let mut accepted = Vec::with_capacity(target);

        for edge in sorted_edges {
            if accepted.len() == target {
                break;
            }
            if edge.is_loop() {
                continue;
            }
            if components.union(edge.a, edge.b) {
                log::debug!("Accepted {edge}");
                accepted.push(edge);
            }
        }

        if accepted.len() < target {
            log::warn!(
                "Graph is disconnected: spanning forest has {} of {target} edges",
                accepted.len()
            );
        }

        SpanningForest::new(accepted, vertex_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Edge;

    fn demonstration_graph() -> Graph {
        Graph::with_edges(
            6,
            [
                (0, 1, 4),
                (0, 2, 3),
                (1, 2, 1),
                (1, 3, 2),
                (2, 3, 4),
                (3, 4, 2),
                (4, 5, 6),
                (3, 5, 3),
            ],
        )
        .unwrap()
    }

    fn weighted(edges: &[Edge]) -> Vec<(usize, usize, i64)> {
        edges.iter().map(|e| (e.a, e.b, e.weight)).collect()
    }

    #[test]
    fn builds_tree_in_acceptance_order() {
        let forest = KruskalBuilder.build(&demonstration_graph());
        assert!(forest.is_spanning());
        assert_eq!(
            weighted(forest.edges()),
            vec![(1, 2, 1), (1, 3, 2), (3, 4, 2), (0, 2, 3), (3, 5, 3)]
        );
        assert_eq!(forest.total_weight(), 11);
    }

    #[test]
    fn equal_weights_keep_graph_order() {
        let graph = Graph::with_edges(3, [(0, 1, 1), (1, 2, 1), (0, 2, 1)]).unwrap();
        let forest = KruskalBuilder.build(&graph);
        assert_eq!(weighted(forest.edges()), vec![(0, 1, 1), (1, 2, 1)]);
    }

    #[test]
    fn disconnected_graph_yields_forest() {
        let graph = Graph::with_edges(5, [(0, 1, 3), (2, 3, 1), (1, 0, 1)]).unwrap();
        let forest = KruskalBuilder.build(&graph);
        assert!(!forest.is_spanning());
        assert_eq!(weighted(forest.edges()), vec![(2, 3, 1), (1, 0, 1)]);
    }

    #[test]
    fn skips_self_loops() {
        let graph = Graph::with_edges(2, [(0, 0, -5), (0, 1, 2)]).unwrap();
        let forest = KruskalBuilder.build(&graph);
        assert_eq!(weighted(forest.edges()), vec![(0, 1, 2)]);
    }

    #[test]
    fn trivial_graphs() {
        assert!(KruskalBuilder.build(&Graph::new(1)).is_spanning());
        assert!(KruskalBuilder.build(&Graph::new(1)).edges().is_empty());
        assert!(KruskalBuilder.build(&Graph::new(0)).edges().is_empty());
    }

    #[test]
    fn repeated_builds_are_identical() {
        let graph = demonstration_graph();
        assert_eq!(KruskalBuilder.build(&graph), KruskalBuilder.build(&graph));
    }
}
