use crate::{Vertex, Weight};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Direction-independent identity of an edge: `(min(a, b), max(a, b))`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(pub Vertex, pub Vertex);

impl EdgeKey {
    pub fn new(a: Vertex, b: Vertex) -> EdgeKey {
        EdgeKey(a.min(b), a.max(b))
    }
}

/// A weighted undirected edge.
///
/// Two edges are equal when they join the same pair of vertices, in either
/// orientation. The weight takes no part in equality or hashing, so an edge
/// and any parallel edge between the same endpoints compare equal.
///
/// `Edge` deliberately has no `Ord`: ordering is by weight only and is done
/// with a stable sort at the call site.
#[derive(Debug, Clone, Copy)]
pub struct Edge {
    pub a: Vertex,
    pub b: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(a: Vertex, b: Vertex, weight: Weight) -> Edge {
        Edge { a, b, weight }
    }

    pub fn key(&self) -> EdgeKey {
        EdgeKey::new(self.a, self.b)
    }

    pub fn endpoints(&self) -> (Vertex, Vertex) {
        (self.a, self.b)
    }

    /// Returns `true` if the edge joins `u` and `v`, in either orientation.
    pub fn connects(&self, u: Vertex, v: Vertex) -> bool {
        self.key() == EdgeKey::new(u, v)
    }

    pub fn is_loop(&self) -> bool {
        self.a == self.b
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}({})", self.a, self.b, self.weight)
    }
}

/// Sum of the weights of `edges`.
///
/// # Panics
///
/// In debug builds, if the sum leaves the range of [`Weight`]. Use
/// [`checked_total_weight`] when weights may be that large.
pub fn total_weight(edges: &[Edge]) -> Weight {
    edges.iter().map(|edge| edge.weight).sum()
}

/// Sum of the weights of `edges`, or `None` on overflow.
pub fn checked_total_weight(edges: &[Edge]) -> Option<Weight> {
    edges
        .iter()
        .try_fold(0 as Weight, |sum, edge| sum.checked_add(edge.weight))
}
