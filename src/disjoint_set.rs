use crate::Vertex;

/// Union-find over the vertices `0..len`.
///
/// `find_set` compresses paths and `union` links by rank, so both run in
/// near-constant amortized time. Vertex ids outside `0..len` are a caller
/// error and panic on indexing.
pub struct DisjointSet {
    parent: Vec<Vertex>,
    rank: Vec<u8>,
}

impl DisjointSet {
    /// Creates `len` singleton sets, each vertex its own parent.
    pub fn new(len: usize) -> DisjointSet {
        DisjointSet {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    /// Finds the representative of `vertex`, pointing every vertex on the
    /// way directly at it.
    pub fn find_set(&mut self, vertex: Vertex) -> Vertex {
        let parent = self.parent[vertex];
        if vertex != parent {
            let root = self.find_set(parent);
            self.parent[vertex] = root;
            root
        } else {
            parent
        }
    }

    /// Merges the sets of `u` and `v`. Returns `false` if they were already
    /// in the same set.
    pub fn union(&mut self, u: Vertex, v: Vertex) -> bool {
        let root_u = self.find_set(u);
        let root_v = self.find_set(v);
        if root_u == root_v {
            return false;
        }

        match self.rank[root_u].cmp(&self.rank[root_v]) {
            std::cmp::Ordering::Less => self.parent[root_u] = root_v,
            std::cmp::Ordering::Greater => self.parent[root_v] = root_u,
            std::cmp::Ordering::Equal => {
                self.parent[root_v] = root_u;
                self.rank[root_u] += 1;
            }
        }
        true
    }

    pub fn connected(&mut self, u: Vertex, v: Vertex) -> bool {
        self.find_set(u) == self.find_set(v)
    }

    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }
}
