use crate::{Edge, Weight};
use std::cmp::Ordering;
use std::collections::HashSet;

/// Edges exchanged between two versions of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EdgeSwap {
    /// First edge of `before` missing from `after`.
    pub removed: Option<Edge>,
    /// First edge of `after` missing from `before`.
    pub added: Option<Edge>,
}

/// Compares two edge lists, reporting the first edge that left and the first
/// edge that arrived.
pub fn diff(before: &[Edge], after: &[Edge]) -> EdgeSwap {
    let before_set: HashSet<_> = before.iter().map(Edge::key).collect();
    let after_set: HashSet<_> = after.iter().map(Edge::key).collect();
    EdgeSwap {
        removed: before.iter().find(|e| !after_set.contains(&e.key())).copied(),
        added: after.iter().find(|e| !before_set.contains(&e.key())).copied(),
    }
}

/// How the total weight moved across an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightChange {
    Unchanged,
    Increased,
    /// Only possible if `before` was not a minimum spanning tree.
    Decreased,
}

impl WeightChange {
    pub fn between(before: Weight, after: Weight) -> WeightChange {
        match after.cmp(&before) {
            Ordering::Equal => WeightChange::Unchanged,
            Ordering::Greater => WeightChange::Increased,
            Ordering::Less => WeightChange::Decreased,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_finds_swapped_edges() {
        let before = [Edge::new(1, 2, 1), Edge::new(1, 3, 2), Edge::new(0, 2, 3)];
        let after = [Edge::new(1, 3, 2), Edge::new(0, 2, 3), Edge::new(1, 0, 4)];
        let swap = diff(&before, &after);
        assert_eq!(swap.removed.map(|e| e.endpoints()), Some((1, 2)));
        assert_eq!(swap.added.map(|e| e.endpoints()), Some((1, 0)));
    }

    #[test]
    fn diff_of_identical_lists_is_empty() {
        let edges = [Edge::new(0, 1, 1)];
        assert_eq!(diff(&edges, &edges), EdgeSwap::default());
    }

    #[test]
    fn weight_change() {
        assert_eq!(WeightChange::between(11, 14), WeightChange::Increased);
        assert_eq!(WeightChange::between(11, 11), WeightChange::Unchanged);
        assert_eq!(WeightChange::between(11, 9), WeightChange::Decreased);
    }
}
