use crate::components::Partition;
use crate::{Edge, EdgeKey, Graph};
use std::collections::HashSet;

/// Result of a replacement search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Replacement {
    /// Fewer than two components: nothing to reconnect.
    NotNeeded,
    /// Cheapest edge joining the first two components.
    Found(Edge),
    /// No edge of the graph joins the first two components.
    NotFound,
}

/// Finds the cheapest graph edge reconnecting the first two components of
/// `partition`.
///
/// Graph edges are scanned in insertion order and a later candidate only
/// wins with a strictly smaller weight. Edges already in `tree`, and edges
/// equal to `removed`, are skipped; both checks go by [`EdgeKey`], so
/// parallel edges of those are skipped as well. Components past the second
/// are ignored.
///
/// # Arguments
///
/// * `partition` - Components of the tree after the removal.
/// * `removed` - The edge just taken out of the tree.
/// * `graph` - The full graph; its edge order decides ties.
/// * `tree` - Keys of the edges still in the tree.
///
/// # Returns
///
/// [`Replacement::Found`] with the chosen edge, [`Replacement::NotFound`] if
/// no edge qualifies, or [`Replacement::NotNeeded`] if `partition` has fewer
/// than two components.
pub fn find_replacement(
    partition: &Partition,
    removed: &Edge,
    graph: &Graph,
    tree: &HashSet<EdgeKey>,
) -> Replacement {
    if partition.len() < 2 {
        return Replacement::NotNeeded;
    }

    let crosses = |edge: &Edge| {
        let side_a = partition.component_of(edge.a);
        let side_b = partition.component_of(edge.b);
        matches!((side_a, side_b), (0, 1) | (1, 0))
    };

    let mut best: Option<Edge> = None;
    for edge in graph.edges() {
        if !crosses(edge) || tree.contains(&edge.key()) || edge == removed {
            continue;
        }
        if best.map_or(true, |current| edge.weight < current.weight) {
            log::debug!("Replacement candidate {edge}");
            best = Some(*edge);
        }
    }

    match best {
        Some(edge) => Replacement::Found(edge),
        None => Replacement::NotFound,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::find_components;

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

    fn keys(edges: &[Edge]) -> HashSet<EdgeKey> {
        edges.iter().map(Edge::key).collect()
    }

    #[test]
    fn first_of_equal_weights_wins() {
        let tree = [
            Edge::new(1, 3, 2),
            Edge::new(3, 4, 2),
            Edge::new(0, 2, 3),
            Edge::new(3, 5, 3),
        ];
        let partition = find_components(&tree, 6);
        let replacement = find_replacement(
            &partition,
            &Edge::new(1, 2, 1),
            &demonstration_graph(),
            &keys(&tree),
        );
        match replacement {
            Replacement::Found(edge) => assert_eq!((edge.a, edge.b, edge.weight), (0, 1, 4)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn removed_edge_and_its_parallels_are_skipped() {
        let graph = Graph::with_edges(2, [(0, 1, 1), (1, 0, 2)]).unwrap();
        let partition = find_components(&[], 2);
        let replacement =
            find_replacement(&partition, &Edge::new(0, 1, 1), &graph, &HashSet::new());
        assert_eq!(replacement, Replacement::NotFound);
    }

    #[test]
    fn later_strictly_cheaper_edge_wins() {
        let graph =
            Graph::with_edges(4, [(0, 1, 1), (2, 3, 1), (0, 2, 9), (1, 3, 5), (1, 2, 7)])
                .unwrap();
        let tree = [Edge::new(0, 1, 1), Edge::new(2, 3, 1)];
        let partition = find_components(&tree, 4);
        let replacement =
            find_replacement(&partition, &Edge::new(0, 3, 2), &graph, &keys(&tree));
        match replacement {
            Replacement::Found(edge) => assert_eq!(edge.endpoints(), (1, 3)),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn single_component_needs_nothing() {
        let tree = [Edge::new(0, 1, 1)];
        let partition = find_components(&tree, 2);
        let graph = Graph::with_edges(2, [(0, 1, 1)]).unwrap();
        assert_eq!(
            find_replacement(&partition, &Edge::new(0, 1, 1), &graph, &keys(&tree)),
            Replacement::NotNeeded
        );
    }

    #[test]
    fn only_first_two_components_are_considered() {
        // Components {0}, {1}, {2}: the only candidate joins 1 and 2.
        let graph = Graph::with_edges(3, [(1, 2, 1)]).unwrap();
        let partition = find_components(&[], 3);
        assert_eq!(
            find_replacement(&partition, &Edge::new(0, 1, 1), &graph, &HashSet::new()),
            Replacement::NotFound
        );
    }
}
